// Hexabit Pedometer: SSD1306 OLED Driver
//
// 128x64 monochrome panel over the shared I2C bus. Drawing goes into a
// page-ordered frame buffer (one byte = 8 vertical pixels) that is pushed to
// the panel in one burst per frame.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

use crate::config::*;

/// 1 bpp frame buffer in SSD1306 page layout.
pub struct Framebuffer {
    buf: [u8; DISPLAY_BUFFER_SIZE],
}

impl Framebuffer {
    pub fn new() -> Self {
        Self {
            buf: [0u8; DISPLAY_BUFFER_SIZE],
        }
    }

    fn index(x: u32, y: u32) -> (usize, u8) {
        let idx = x as usize + (y as usize / 8) * SCREEN_WIDTH as usize;
        (idx, 1 << (y % 8))
    }

    pub fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return false;
        }
        let (idx, mask) = Self::index(x, y);
        self.buf[idx] & mask != 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
                continue;
            }
            let (idx, mask) = Self::index(x, y);
            if color.is_on() {
                self.buf[idx] |= mask;
            } else {
                self.buf[idx] &= !mask;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.buf.fill(if color.is_on() { 0xFF } else { 0x00 });
        Ok(())
    }
}

#[cfg(target_os = "espidf")]
pub use device::OledDisplay;

#[cfg(target_os = "espidf")]
mod device {
    use super::Framebuffer;
    use crate::config::*;
    use crate::drivers::{lock_bus, SharedBus};
    use crate::events::Snapshot;
    use crate::screen;
    use crate::tracker::DisplaySink;

    const CONTROL_COMMAND: u8 = 0x00;
    const CONTROL_DATA: u8 = 0x40;
    const DATA_CHUNK: usize = 16;

    const CMD_DISPLAY_OFF: u8 = 0xAE;
    const CMD_DISPLAY_ON: u8 = 0xAF;

    /// Power-up sequence for a 128x64 module with the internal charge pump.
    const INIT_SEQUENCE: &[u8] = &[
        CMD_DISPLAY_OFF,
        0xD5, 0x80, // clock divide
        0xA8, 0x3F, // multiplex 64
        0xD3, 0x00, // display offset
        0x40,       // start line 0
        0x8D, 0x14, // charge pump on
        0x20, 0x00, // horizontal addressing
        0xA1,       // segment remap
        0xC8,       // COM scan descending
        0xDA, 0x12, // COM pins
        0x81, 0xCF, // contrast
        0xD9, 0xF1, // pre-charge
        0xDB, 0x40, // VCOMH deselect
        0xA4,       // resume from RAM
        0xA6,       // normal (not inverted)
        CMD_DISPLAY_ON,
    ];

    pub struct OledDisplay {
        bus: SharedBus,
        frame: Framebuffer,
        zero_pad_time: bool,
    }

    impl OledDisplay {
        pub fn new(bus: SharedBus, zero_pad_time: bool) -> Self {
            Self {
                bus,
                frame: Framebuffer::new(),
                zero_pad_time,
            }
        }

        /// Probe with a harmless command.
        pub fn is_connected(&self) -> bool {
            self.command(&[0xA4]).is_ok()
        }

        pub fn init(&mut self) -> anyhow::Result<()> {
            self.command(INIT_SEQUENCE)?;
            self.frame = Framebuffer::new();
            self.flush()?;
            log::info!("SSD1306 initialised ({}x{})", SCREEN_WIDTH, SCREEN_HEIGHT);
            Ok(())
        }

        /// Replace the panel contents with `lines`.
        pub fn show_lines<S: AsRef<str>>(&mut self, lines: &[S]) -> anyhow::Result<()> {
            // Framebuffer drawing is infallible.
            let _ = screen::draw_lines(&mut self.frame, lines);
            self.flush()
        }

        fn command(&self, cmds: &[u8]) -> anyhow::Result<()> {
            let mut bus = lock_bus(self.bus)?;
            for &cmd in cmds {
                bus.write(I2C_ADDR_OLED, &[CONTROL_COMMAND, cmd], I2C_TIMEOUT_TICKS)?;
            }
            Ok(())
        }

        fn flush(&mut self) -> anyhow::Result<()> {
            // Full-screen window: columns 0..127, pages 0..7.
            self.command(&[0x21, 0, (SCREEN_WIDTH - 1) as u8, 0x22, 0, (SCREEN_HEIGHT / 8 - 1) as u8])?;

            let mut bus = lock_bus(self.bus)?;
            let mut packet = [0u8; DATA_CHUNK + 1];
            packet[0] = CONTROL_DATA;
            for chunk in self.frame.as_bytes().chunks(DATA_CHUNK) {
                packet[1..=chunk.len()].copy_from_slice(chunk);
                bus.write(I2C_ADDR_OLED, &packet[..=chunk.len()], I2C_TIMEOUT_TICKS)?;
            }
            Ok(())
        }
    }

    impl DisplaySink for OledDisplay {
        fn render(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
            let lines = screen::screen_lines(snapshot, self.zero_pad_time);
            self.show_lines(&lines)
        }
    }
}
