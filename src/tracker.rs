// Hexabit Pedometer: Polling Loop
//
// One tick reads a motion sample, updates the step count, samples the button,
// advances the menu and, when the redraw policy asks for it, renders the
// current screen. Everything runs on the calling thread; the only pause is the
// sleep between ticks.

use std::thread;
use std::time::{Duration, Instant};

use crate::config::TrackerConfig;
use crate::events::{DateTime, Metrics, Mode, RedrawPolicy, Snapshot, TickOutcome};
use crate::input::Debouncer;
use crate::metrics::MetricsCalculator;
use crate::mode::ModeController;
use crate::step::StepDetector;

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// Single-axis acceleration in g. `None` when the sensor could not be read;
/// the tick then skips step detection.
pub trait MotionSource {
    fn read_axis(&mut self) -> Option<f32>;
}

/// Raw level of the menu button (`true` = pressed).
pub trait ButtonInput {
    fn is_pressed(&mut self) -> bool;
}

/// Wall-clock time. `None` when the clock is not running or unreachable.
pub trait ClockSource {
    fn now(&mut self) -> Option<DateTime>;
}

/// Must be safe to call every tick.
pub trait DisplaySink {
    fn render(&mut self, snapshot: &Snapshot) -> anyhow::Result<()>;
}

impl<T: DisplaySink> DisplaySink for Option<T> {
    fn render(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        match self {
            Some(sink) => sink.render(snapshot),
            None => Ok(()),
        }
    }
}

/// Fan out to two sinks. The second still renders if the first fails.
impl<A: DisplaySink, B: DisplaySink> DisplaySink for (A, B) {
    fn render(&mut self, snapshot: &Snapshot) -> anyhow::Result<()> {
        let first = self.0.render(snapshot);
        let second = self.1.render(snapshot);
        first.and(second)
    }
}

impl<T: ClockSource> ClockSource for Option<T> {
    fn now(&mut self) -> Option<DateTime> {
        self.as_mut().and_then(|clock| clock.now())
    }
}

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

pub struct Tracker<M, B, C, D> {
    config: TrackerConfig,

    motion: M,
    button: B,
    clock: C,
    display: D,

    detector: StepDetector,
    debouncer: Debouncer,
    modes: ModeController,
    calculator: MetricsCalculator,
}

impl<M, B, C, D> Tracker<M, B, C, D>
where
    M: MotionSource,
    B: ButtonInput,
    C: ClockSource,
    D: DisplaySink,
{
    pub fn new(config: TrackerConfig, motion: M, button: B, clock: C, display: D) -> Self {
        Self {
            detector: StepDetector::new(config.threshold_g),
            debouncer: Debouncer::with_settle(config.effective_debounce_ms()),
            modes: ModeController::new(config.menu_len),
            calculator: MetricsCalculator::new(config.calorie_per_step, config.step_distance_m),
            config,
            motion,
            button,
            clock,
            display,
        }
    }

    /// Run one polling iteration. `now_ms` is only used by the time-measured
    /// debouncer and must be monotonic.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        // 1. Step detection (skipped when the sensor has nothing for us).
        match self.motion.read_axis() {
            Some(sample) => {
                outcome.stepped = self.detector.update(sample);
                if outcome.stepped {
                    log::debug!("Step detected! Total steps: {}", self.detector.step_count());
                }
            }
            None => log::debug!("No motion sample this tick"),
        }

        // 2. Button -> debounced press edge.
        let pressed = self.button.is_pressed();
        let edge = if self.config.effective_debounce_ms() == 0 {
            self.debouncer.update(pressed)
        } else {
            self.debouncer.update_at(pressed, now_ms)
        };

        // 3. Menu.
        outcome.mode_changed = self.modes.on_edge(edge);
        if edge {
            log::info!(
                "Mode changed to: {} ({})",
                self.modes.index(),
                self.modes.current().name()
            );
        }

        // 4. Redraw gating.
        if outcome.mode_changed || self.config.redraw == RedrawPolicy::EveryTick {
            let snapshot = self.snapshot();
            if let Err(e) = self.display.render(&snapshot) {
                log::error!("Display error: {}", e);
            }
            outcome.rendered = true;
        }

        outcome
    }

    /// Current screen state. The clock is only consulted on the clock screen.
    pub fn snapshot(&mut self) -> Snapshot {
        let mode = self.modes.current();
        let steps = self.detector.step_count();
        Snapshot {
            mode,
            steps,
            metrics: self.calculator.metrics(steps),
            time: if mode == Mode::Clock { self.clock.now() } else { None },
        }
    }

    /// Poll forever at `tick_interval_ms`, sleeping for whatever the tick
    /// itself did not use.
    pub fn run(&mut self) -> ! {
        log::info!(
            "Tracker running ({} ms tick, {} menu entries, {:?} redraw)",
            self.config.tick_interval_ms,
            self.modes.menu_len(),
            self.config.redraw
        );

        let interval = Duration::from_millis(self.config.tick_interval_ms);
        let boot = Instant::now();

        loop {
            let tick_start = Instant::now();
            let now_ms = tick_start.duration_since(boot).as_millis() as u64;

            self.tick(now_ms);

            let elapsed = tick_start.elapsed();
            if elapsed < interval {
                thread::sleep(interval - elapsed);
            }
        }
    }

    pub fn steps(&self) -> u32 {
        self.detector.step_count()
    }

    pub fn mode(&self) -> Mode {
        self.modes.current()
    }

    pub fn metrics(&self) -> Metrics {
        self.calculator.metrics(self.detector.step_count())
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
