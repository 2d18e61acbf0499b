// Hexabit Pedometer: System Events & Data Types

// ---------------------------------------------------------------------------
// Display Modes
// ---------------------------------------------------------------------------
/// Screens of the cyclic menu, in cycle order. The five-entry menu stops
/// before `Weather`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Blank,
    Welcome,
    Clock,
    Activity,
    Distance,
    Weather,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Self::Blank,
        Self::Welcome,
        Self::Clock,
        Self::Activity,
        Self::Distance,
        Self::Weather,
    ];

    /// Position in the menu cycle.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short label used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Self::Blank    => "blank",
            Self::Welcome  => "welcome",
            Self::Clock    => "clock",
            Self::Activity => "activity",
            Self::Distance => "distance",
            Self::Weather  => "weather",
        }
    }
}

// ---------------------------------------------------------------------------
// Redraw gating
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawPolicy {
    /// Render only on the tick where the mode changed (plus the first tick).
    OnChange,
    /// Render on every tick.
    EveryTick,
}

// ---------------------------------------------------------------------------
// Derived metrics
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub calories: f32,
    pub distance_km: f32,
    pub distance_miles: f32,
}

// ---------------------------------------------------------------------------
// Wall-clock reading from the RTC
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

// ---------------------------------------------------------------------------
// Render input, rebuilt every time the display is drawn
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub mode: Mode,
    pub steps: u32,
    pub metrics: Metrics,
    /// Only read in `Mode::Clock`; `None` there means the RTC is unavailable.
    pub time: Option<DateTime>,
}

/// What happened during one polling-loop tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub stepped: bool,
    pub mode_changed: bool,
    pub rendered: bool,
}
