// Hexabit Pedometer: Library Root
//
// Counts steps from a single accelerometer axis and shows the count, calories,
// distance and the time on a button-cycled menu. The algorithms and the
// polling loop are plain Rust; only `drivers` touches ESP-IDF.

pub mod config;
pub mod drivers;
pub mod events;
pub mod input;
pub mod metrics;
pub mod mode;
pub mod screen;
pub mod step;
pub mod tracker;

pub use config::TrackerConfig;
pub use events::{DateTime, Metrics, Mode, RedrawPolicy, Snapshot, TickOutcome};
pub use input::Debouncer;
pub use metrics::MetricsCalculator;
pub use mode::ModeController;
pub use step::StepDetector;
pub use tracker::{ButtonInput, ClockSource, DisplaySink, MotionSource, Tracker};
