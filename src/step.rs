// Hexabit Pedometer: Hysteresis Step Detector
//
// Counts one step each time the single-axis acceleration leaves the neutral
// band [-T, +T]. The detector re-arms only after the signal returns inside the
// band, so noise hovering near a threshold cannot double count.
//
// Known limitation: a signal that jumps from above +T to below -T between two
// samples never visits the band and is counted as a single excursion.

use crate::config::STEP_THRESHOLD_G;

#[derive(Debug, Clone)]
pub struct StepDetector {
    threshold: f32,
    previous_sample: f32,
    above_threshold: bool,
    step_count: u32,
}

impl StepDetector {
    pub fn new(threshold_g: f32) -> Self {
        Self {
            threshold: threshold_g,
            previous_sample: 0.0,
            above_threshold: false,
            step_count: 0,
        }
    }

    /// Feed one sample (in g). Returns `true` iff a step was counted.
    pub fn update(&mut self, sample: f32) -> bool {
        let t = self.threshold;
        let prev = self.previous_sample;
        self.previous_sample = sample;

        let rising = prev <= t && sample > t;
        let falling = prev >= -t && sample < -t;

        if !self.above_threshold && (rising || falling) {
            self.step_count = self.step_count.saturating_add(1);
            self.above_threshold = true;
            true
        } else {
            if self.above_threshold && (-t..=t).contains(&sample) {
                self.above_threshold = false;
            }
            false
        }
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn above_threshold(&self) -> bool {
        self.above_threshold
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

impl Default for StepDetector {
    fn default() -> Self {
        Self::new(STEP_THRESHOLD_G)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(samples: &[f32]) -> u32 {
        let mut detector = StepDetector::default();
        for &s in samples {
            detector.update(s);
        }
        detector.step_count()
    }

    #[test]
    fn ramp_through_threshold_counts_once() {
        let ramp: Vec<f32> = (0..=20).map(|i| i as f32 * 0.05).collect();
        assert_eq!(count(&ramp), 1);
    }

    #[test]
    fn staying_outside_band_does_not_recount() {
        assert_eq!(count(&[0.0, 0.6, 0.6, 0.6, 0.6]), 1);
        assert_eq!(count(&[0.0, 0.6, 0.9, 0.6, 1.4, 0.6]), 1);
    }

    #[test]
    fn neutral_band_revisit_rearms() {
        assert_eq!(count(&[0.0, 0.6, 0.3, 0.6, 0.3]), 2);
    }

    #[test]
    fn negative_excursion_counts() {
        assert_eq!(count(&[0.0, -0.6, 0.0, -0.7]), 2);
    }

    #[test]
    fn threshold_boundary_is_inside_band() {
        // Exactly +T / -T does not leave the band.
        assert_eq!(count(&[0.0, 0.5, -0.5, 0.5]), 0);

        // ...but it does re-arm the detector.
        let mut detector = StepDetector::default();
        assert!(detector.update(0.6));
        assert!(detector.above_threshold());
        assert!(!detector.update(0.5));
        assert!(!detector.above_threshold());
        assert!(detector.update(0.51));
    }

    #[test]
    fn opposite_excursions_each_count() {
        let mut detector = StepDetector::default();
        assert!(detector.update(-0.6));
        assert!(!detector.update(0.0));
        assert!(detector.update(0.7));
        assert_eq!(detector.step_count(), 2);
    }

    #[test]
    fn direct_jump_across_band_is_single_excursion() {
        assert_eq!(count(&[0.0, 1.0, -1.0, 1.0, -1.0]), 1);
    }

    #[test]
    fn count_never_decreases() {
        let mut detector = StepDetector::default();
        let mut last = 0;
        for i in 0..1000 {
            let sample = ((i * 37) % 23) as f32 / 10.0 - 1.1;
            detector.update(sample);
            assert!(detector.step_count() >= last);
            last = detector.step_count();
        }
        assert!(last > 0);
    }

    #[test]
    fn custom_threshold() {
        let mut detector = StepDetector::new(1.0);
        assert!(!detector.update(0.8));
        assert!(detector.update(1.2));
        assert_eq!(detector.threshold(), 1.0);
    }
}
