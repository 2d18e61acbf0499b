// Hexabit Pedometer: Button Debouncer
//
// Turns the raw button level into one "pressed" edge per physical press.
// Two flavours share the same state:
//   - `update` trusts the polling cadence: every level change is treated as
//     settled, so the tick interval must exceed the switch bounce time.
//   - `update_at` measures time itself and only accepts a level once it has
//     been held for the configured settle window.

#[derive(Debug, Clone)]
pub struct Debouncer {
    settle_ms: u64,

    // Debounce state
    last_raw: bool,
    last_change_ms: u64,

    // Last accepted level (true = pressed)
    stable: bool,
}

impl Debouncer {
    /// Tick-cadence debouncer (no settle window).
    pub fn new() -> Self {
        Self::with_settle(0)
    }

    pub fn with_settle(settle_ms: u64) -> Self {
        Self {
            settle_ms,
            last_raw: false,
            last_change_ms: 0,
            stable: false,
        }
    }

    /// Returns `true` on the tick the stable level becomes "pressed".
    pub fn update(&mut self, pressed: bool) -> bool {
        self.last_raw = pressed;
        self.accept(pressed)
    }

    /// Time-measured variant; `now_ms` must be monotonic.
    pub fn update_at(&mut self, pressed: bool, now_ms: u64) -> bool {
        if pressed != self.last_raw {
            self.last_change_ms = now_ms;
        }
        self.last_raw = pressed;

        let held_ms = now_ms.saturating_sub(self.last_change_ms);
        if held_ms < self.settle_ms {
            // Signal still bouncing, wait.
            return false;
        }
        self.accept(pressed)
    }

    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    fn accept(&mut self, pressed: bool) -> bool {
        if pressed == self.stable {
            return false;
        }
        self.stable = pressed;
        // Edge on press only, never on release.
        pressed
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges_timed(levels: &[u8], settle_ms: u64, tick_ms: u64) -> usize {
        let mut debouncer = Debouncer::with_settle(settle_ms);
        levels
            .iter()
            .enumerate()
            .filter(|&(i, &level)| debouncer.update_at(level == 1, i as u64 * tick_ms))
            .count()
    }

    #[test]
    fn edge_on_press_not_release() {
        let mut debouncer = Debouncer::new();
        assert!(!debouncer.update(false));
        assert!(debouncer.update(true));
        assert!(!debouncer.update(true));
        assert!(!debouncer.update(false));
        assert!(!debouncer.is_pressed());
        assert!(debouncer.update(true));
    }

    #[test]
    fn tick_cadence_sees_every_transition() {
        let mut debouncer = Debouncer::new();
        let edges = [0, 1, 0, 1, 1, 1, 0]
            .iter()
            .filter(|&&level| debouncer.update(level == 1))
            .count();
        // Without a settle window the bounce registers as a second press.
        assert_eq!(edges, 2);
    }

    #[test]
    fn bouncy_press_yields_one_edge_with_settle_window() {
        assert_eq!(edges_timed(&[0, 1, 0, 1, 1, 1, 0], 20, 10), 1);
    }

    #[test]
    fn short_glitch_is_ignored() {
        assert_eq!(edges_timed(&[0, 1, 0, 0, 0, 0], 20, 10), 0);
    }

    #[test]
    fn edge_fires_once_settle_elapses() {
        let mut debouncer = Debouncer::with_settle(50);
        assert!(!debouncer.update_at(true, 1000));
        assert!(!debouncer.update_at(true, 1049));
        assert!(debouncer.update_at(true, 1050));
        assert!(!debouncer.update_at(true, 1100));
        assert!(debouncer.is_pressed());
    }

    #[test]
    fn separate_presses_each_yield_an_edge() {
        let levels = [0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0];
        assert_eq!(edges_timed(&levels, 20, 10), 2);
    }

    #[test]
    fn zero_settle_matches_tick_cadence() {
        let levels = [0, 1, 0, 1, 1, 0, 1];
        let mut timed = Debouncer::with_settle(0);
        let mut ticked = Debouncer::new();
        for (i, &level) in levels.iter().enumerate() {
            assert_eq!(
                timed.update_at(level == 1, i as u64 * 100),
                ticked.update(level == 1)
            );
        }
    }
}
