// Hexabit Pedometer: Display Mode State Machine
//
// Cycles through the first `menu_len` entries of `Mode::ALL`, one step per
// debounced press, and tells the caller when the screen needs redrawing.

use crate::events::Mode;

#[derive(Debug, Clone)]
pub struct ModeController {
    menu_len: usize,
    index: usize,
    /// Mode seen at the end of the previous tick; `None` before the first one
    /// so the initial screen gets drawn.
    previous: Option<usize>,
}

impl ModeController {
    /// `menu_len` is clamped to `1..=Mode::ALL.len()`.
    pub fn new(menu_len: usize) -> Self {
        Self {
            menu_len: menu_len.clamp(1, Mode::ALL.len()),
            index: 0,
            previous: None,
        }
    }

    /// Advance on a debounced press. Returns `true` iff the mode differs from
    /// the one recorded at the end of the previous tick.
    pub fn on_edge(&mut self, edge: bool) -> bool {
        if edge {
            self.advance();
        }
        let changed = self.previous != Some(self.index);
        self.previous = Some(self.index);
        changed
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.menu_len;
    }

    pub fn current(&self) -> Mode {
        Mode::ALL[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn menu_len(&self) -> usize {
        self.menu_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_reports_change() {
        let mut modes = ModeController::new(5);
        assert!(modes.on_edge(false));
        assert!(!modes.on_edge(false));
        assert_eq!(modes.current(), Mode::Blank);
    }

    #[test]
    fn five_edges_wrap_to_start() {
        let mut modes = ModeController::new(5);
        modes.on_edge(false);
        let expected = [
            Mode::Welcome,
            Mode::Clock,
            Mode::Activity,
            Mode::Distance,
            Mode::Blank,
        ];
        for mode in expected {
            assert!(modes.on_edge(true));
            assert_eq!(modes.current(), mode);
        }
        assert_eq!(modes.index(), 0);
    }

    #[test]
    fn six_entry_menu_reaches_weather() {
        let mut modes = ModeController::new(6);
        for _ in 0..5 {
            modes.on_edge(true);
        }
        assert_eq!(modes.current(), Mode::Weather);
        modes.on_edge(true);
        assert_eq!(modes.current(), Mode::Blank);
    }

    #[test]
    fn index_stays_in_range() {
        for len in [5, 6] {
            let mut modes = ModeController::new(len);
            for i in 0..100 {
                modes.on_edge(i % 3 == 0);
                assert!(modes.index() < len);
            }
        }
    }

    #[test]
    fn single_entry_menu_never_changes_after_first_tick() {
        let mut modes = ModeController::new(0);
        assert_eq!(modes.menu_len(), 1);
        assert!(modes.on_edge(true));
        assert!(!modes.on_edge(true));
    }
}
