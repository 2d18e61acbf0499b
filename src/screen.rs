// Hexabit Pedometer: Screen Layout
//
// Text content for each menu screen, shared by the serial console and the
// OLED panel, plus the embedded-graphics routine that lays the lines out on a
// monochrome draw target.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::events::{DateTime, Mode, Snapshot};

/// Vertical pitch of one text row on the panel (FONT_6X10 plus spacing).
pub const LINE_HEIGHT: i32 = 12;

pub const WELCOME_TEXT: &str = "Welcome To Hexabit";
pub const ABOUT_LINES: [&str; 3] = ["Made By", "Kpanesar88", "v1.0"];

/// Text rows for one screen. `Mode::Blank` yields no rows.
pub fn screen_lines(snapshot: &Snapshot, zero_pad_time: bool) -> Vec<String> {
    let m = &snapshot.metrics;
    match snapshot.mode {
        Mode::Blank => Vec::new(),
        Mode::Welcome => vec![WELCOME_TEXT.to_string()],
        Mode::Clock => vec![
            format!("Time: {}", time_text(snapshot.time.as_ref(), zero_pad_time)),
            format!("Date: {}", date_text(snapshot.time.as_ref())),
        ],
        Mode::Activity => vec![
            format!("Steps: {}", snapshot.steps),
            format!("Calorie: {:.2}", m.calories),
        ],
        Mode::Distance => vec![
            "Distance".to_string(),
            format!("Km: {:.2}", m.distance_km),
            format!("Miles: {:.2}", m.distance_miles),
        ],
        // No forecast source is wired up yet.
        Mode::Weather => vec!["Weather: --".to_string()],
    }
}

pub fn time_text(time: Option<&DateTime>, zero_pad: bool) -> String {
    match time {
        Some(t) if zero_pad => format!("{:02}:{:02}", t.hour, t.minute),
        Some(t) => format!("{}:{}", t.hour, t.minute),
        None => "--:--".to_string(),
    }
}

pub fn date_text(time: Option<&DateTime>) -> String {
    match time {
        Some(t) => format!("{}/{}/{}", t.year, t.month, t.day),
        None => "--/--/--".to_string(),
    }
}

/// Clear `target` and draw `lines` top-down in the panel font.
pub fn draw_lines<D, S>(target: &mut D, lines: &[S]) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
    S: AsRef<str>,
{
    target.clear(BinaryColor::Off)?;
    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    for (row, line) in lines.iter().enumerate() {
        let origin = Point::new(0, row as i32 * LINE_HEIGHT);
        Text::with_baseline(line.as_ref(), origin, style, Baseline::Top).draw(target)?;
    }
    Ok(())
}
