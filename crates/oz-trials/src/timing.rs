//! Timing-alignment trial.
//!
//! A scale value oscillates downward from a ceiling, wrapping back when it
//! reaches the floor. The player gets exactly one trigger; landing inside a
//! shrinking tolerance of the target scale pays the full reward, anything
//! else a small consolation.

use crate::trial::TrialOutcome;

const CEILING: f64 = 2.0;
const FLOOR: f64 = 0.4;
const TARGET: f64 = 1.0;
const CONSOLATION_REWARD: u64 = 10;

/// The timing-alignment trial state machine.
#[derive(Debug, Clone)]
pub struct TimingTrial {
    order: f64,
    scale: f64,
    speed: f64,
    tolerance: f64,
    outcome: Option<TrialOutcome>,
}

impl TimingTrial {
    /// Start a trial at the given effective difficulty.
    pub fn new(order: f64) -> Self {
        let order = order.max(0.0);
        Self {
            order,
            scale: CEILING,
            speed: 0.012 + order * 0.005,
            tolerance: (0.18 - order * 0.025).max(0.02),
            outcome: None,
        }
    }

    /// Advance the oscillation by one frame. No-op once terminal.
    pub fn tick(&mut self) {
        if self.outcome.is_some() {
            return;
        }
        self.scale -= self.speed;
        if self.scale <= FLOOR {
            self.scale = CEILING;
        }
    }

    /// Fire the one allowed alignment check.
    ///
    /// Returns the outcome on the first call and `None` on any later call.
    pub fn trigger(&mut self) -> Option<TrialOutcome> {
        if self.outcome.is_some() {
            return None;
        }
        let success = (self.scale - TARGET).abs() <= self.tolerance;
        let reward = if success {
            (100.0 + self.order * 25.0).round() as u64
        } else {
            CONSOLATION_REWARD
        };
        let outcome = TrialOutcome { reward, success };
        self.outcome = Some(outcome);
        Some(outcome)
    }

    /// Current oscillating scale value.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current success tolerance around the target.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The outcome, once triggered.
    pub fn outcome(&self) -> Option<TrialOutcome> {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_shrinks_with_order_to_a_floor() {
        assert_eq!(TimingTrial::new(0.0).tolerance(), 0.18);
        assert!((TimingTrial::new(4.0).tolerance() - 0.08).abs() < 1e-9);
        assert_eq!(TimingTrial::new(10.0).tolerance(), 0.02);
    }

    #[test]
    fn scale_oscillates_between_floor_and_ceiling() {
        let mut t = TimingTrial::new(0.0);
        let mut lowest = f64::MAX;
        let mut highest = f64::MIN;
        for _ in 0..500 {
            t.tick();
            lowest = lowest.min(t.scale());
            highest = highest.max(t.scale());
        }
        assert!(lowest > FLOOR - 0.012 - 1e-9);
        assert!(highest <= CEILING);
        // It wrapped at least once over 500 frames.
        assert!(highest > 1.9);
    }

    #[test]
    fn trigger_on_target_succeeds() {
        let mut t = TimingTrial::new(0.0);
        // 2.0 -> 1.0 takes 1.0 / 0.012 ≈ 83.3 frames; frame 84 lands at
        // 0.992, inside the 0.18 tolerance.
        for _ in 0..84 {
            t.tick();
        }
        let outcome = t.trigger().unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.reward, 100);
    }

    #[test]
    fn trigger_far_from_target_pays_consolation() {
        let mut t = TimingTrial::new(0.0);
        let outcome = t.trigger().unwrap(); // scale still at the ceiling
        assert!(!outcome.success);
        assert_eq!(outcome.reward, 10);
    }

    #[test]
    fn reward_scales_with_order() {
        let mut t = TimingTrial::new(4.0);
        // speed 0.032: reach ~1.0 after ~31 frames (2.0 - 31*0.032 = 1.008)
        for _ in 0..31 {
            t.tick();
        }
        let outcome = t.trigger().unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.reward, 200);
    }

    #[test]
    fn exactly_one_trigger_allowed() {
        let mut t = TimingTrial::new(0.0);
        assert!(t.trigger().is_some());
        assert!(t.trigger().is_none());
        assert!(t.outcome().is_some());
    }

    #[test]
    fn tick_is_noop_after_trigger() {
        let mut t = TimingTrial::new(0.0);
        t.trigger();
        let frozen = t.scale();
        t.tick();
        assert_eq!(t.scale(), frozen);
    }
}
