// Hexabit Pedometer: Fitness Metrics
//
// Pure conversions from a step count. No rounding; callers format.

use crate::config::*;
use crate::events::Metrics;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsCalculator {
    calorie_per_step: f32,
    step_distance_m: f32,
}

impl MetricsCalculator {
    pub fn new(calorie_per_step: f32, step_distance_m: f32) -> Self {
        Self {
            calorie_per_step,
            step_distance_m,
        }
    }

    pub fn calories(&self, steps: u32) -> f32 {
        steps as f32 * self.calorie_per_step
    }

    pub fn distance_km(&self, steps: u32) -> f32 {
        steps as f32 * self.step_distance_m / METERS_PER_KM
    }

    pub fn distance_miles(&self, steps: u32) -> f32 {
        steps as f32 * self.step_distance_m / METERS_PER_MILE
    }

    pub fn metrics(&self, steps: u32) -> Metrics {
        Metrics {
            calories: self.calories(steps),
            distance_km: self.distance_km(steps),
            distance_miles: self.distance_miles(steps),
        }
    }
}

impl Default for MetricsCalculator {
    fn default() -> Self {
        Self::new(CALORIES_PER_STEP, STEP_DISTANCE_M)
    }
}
