//! Waveform-matching trial.
//!
//! A hidden target wave is generated when the trial starts; the player tunes
//! phase and frequency and locks in once. Phase distance is measured
//! circularly, so 0 and 2π are the same signal.

use std::f64::consts::TAU;

use rand::Rng;
use rand::rngs::StdRng;

use crate::trial::TrialOutcome;

const FREQ_MIN: f64 = 0.5;
const FREQ_MAX: f64 = 5.0;
const FAILURE_REWARD: u64 = 15;

/// The waveform-matching trial state machine.
#[derive(Debug, Clone)]
pub struct WaveformTrial {
    order: f64,
    target_phase: f64,
    target_freq: f64,
    phase: f64,
    freq: f64,
    tolerance: f64,
    outcome: Option<TrialOutcome>,
}

impl WaveformTrial {
    /// Start a trial with a randomly generated hidden target.
    ///
    /// Target phase is uniform in `[0, 2π)`; target frequency is
    /// `1 + U[0,1) * (order * 0.5 + 1)`, widening with difficulty.
    pub fn new(order: f64, rng: &mut StdRng) -> Self {
        let order = order.max(0.0);
        let target_phase = rng.random::<f64>() * TAU;
        let target_freq = 1.0 + rng.random::<f64>() * (order * 0.5 + 1.0);
        Self::with_target(order, target_phase, target_freq)
    }

    /// Start a trial against a known target (scripted encounters and tests).
    pub fn with_target(order: f64, target_phase: f64, target_freq: f64) -> Self {
        let order = order.max(0.0);
        Self {
            order,
            target_phase,
            target_freq,
            phase: 0.0,
            freq: 1.0,
            tolerance: (0.2 - order * 0.02).max(0.05),
            outcome: None,
        }
    }

    /// Adjust the player's phase, clamped to `[0, 2π]`. No-op once terminal.
    pub fn set_phase(&mut self, phase: f64) {
        if self.outcome.is_none() {
            self.phase = phase.clamp(0.0, TAU);
        }
    }

    /// Adjust the player's frequency, clamped to `[0.5, 5]`. No-op once
    /// terminal.
    pub fn set_freq(&mut self, freq: f64) {
        if self.outcome.is_none() {
            self.freq = freq.clamp(FREQ_MIN, FREQ_MAX);
        }
    }

    /// Lock the signal in.
    ///
    /// Success requires circular phase distance under `tolerance * 5` and
    /// frequency distance under `tolerance`. Returns the outcome on the
    /// first call and `None` on any later call.
    pub fn submit(&mut self) -> Option<TrialOutcome> {
        if self.outcome.is_some() {
            return None;
        }
        let raw = (self.phase - self.target_phase).abs() % TAU;
        let phase_distance = raw.min(TAU - raw);
        let freq_distance = (self.freq - self.target_freq).abs();
        let success = phase_distance < self.tolerance * 5.0 && freq_distance < self.tolerance;
        let reward = if success {
            (120.0 + self.order * 25.0).round() as u64
        } else {
            FAILURE_REWARD
        };
        let outcome = TrialOutcome { reward, success };
        self.outcome = Some(outcome);
        Some(outcome)
    }

    /// The player's current phase.
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// The player's current frequency.
    pub fn freq(&self) -> f64 {
        self.freq
    }

    /// Current success tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// The outcome, once submitted.
    pub fn outcome(&self) -> Option<TrialOutcome> {
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    #[test]
    fn exact_match_at_order_zero_pays_120() {
        let mut t = WaveformTrial::with_target(0.0, 0.0, 2.0);
        t.set_phase(0.0);
        t.set_freq(2.0);
        let outcome = t.submit().unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.reward, 120);
    }

    #[test]
    fn opposite_phase_fails_with_15() {
        let mut t = WaveformTrial::with_target(0.0, 0.0, 2.0);
        t.set_phase(PI);
        t.set_freq(2.0);
        let outcome = t.submit().unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.reward, 15);
    }

    #[test]
    fn phase_distance_is_circular() {
        // Target just below 2π: a player phase of 0 is nearly identical.
        let mut t = WaveformTrial::with_target(0.0, TAU - 0.01, 1.0);
        t.set_phase(0.0);
        t.set_freq(1.0);
        assert!(t.submit().unwrap().success);
    }

    #[test]
    fn frequency_outside_tolerance_fails() {
        let mut t = WaveformTrial::with_target(0.0, 1.0, 2.0);
        t.set_phase(1.0);
        t.set_freq(2.3); // tolerance at order 0 is 0.2
        assert!(!t.submit().unwrap().success);
    }

    #[test]
    fn tolerance_shrinks_with_order_to_a_floor() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(WaveformTrial::new(0.0, &mut rng).tolerance(), 0.2);
        assert_eq!(WaveformTrial::new(11.0, &mut rng).tolerance(), 0.05);
    }

    #[test]
    fn setters_clamp_to_legal_ranges() {
        let mut t = WaveformTrial::with_target(0.0, 0.0, 2.0);
        t.set_phase(-1.0);
        assert_eq!(t.phase(), 0.0);
        t.set_phase(100.0);
        assert_eq!(t.phase(), TAU);
        t.set_freq(0.0);
        assert_eq!(t.freq(), 0.5);
        t.set_freq(50.0);
        assert_eq!(t.freq(), 5.0);
    }

    #[test]
    fn generated_target_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..200 {
            let t = WaveformTrial::new(3.0, &mut rng);
            assert!((0.0..TAU).contains(&t.target_phase));
            assert!((1.0..=1.0 + 3.0 * 0.5 + 1.0).contains(&t.target_freq));
        }
    }

    #[test]
    fn single_shot_submit() {
        let mut t = WaveformTrial::with_target(0.0, 0.0, 2.0);
        assert!(t.submit().is_some());
        assert!(t.submit().is_none());
        // Setters freeze after the outcome.
        let frozen = t.freq();
        t.set_freq(4.0);
        assert_eq!(t.freq(), frozen);
    }

    #[test]
    fn reward_scales_with_order() {
        let mut t = WaveformTrial::with_target(4.0, 1.0, 2.0);
        t.set_phase(1.0);
        t.set_freq(2.0);
        assert_eq!(t.submit().unwrap().reward, 220);
    }
}
