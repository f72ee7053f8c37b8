//! Shared trial selection, difficulty, and outcome types.

use rand::Rng;
use rand::rngs::StdRng;

use crate::sequence::SequenceTrial;
use crate::timing::TimingTrial;
use crate::waveform::WaveformTrial;

/// The result a trial ends with.
///
/// The reward value gates nothing by itself; completion (success or not) is
/// what unlocks the boss confrontation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Reward amount emitted by the trial.
    pub reward: u64,
    /// Whether the skill check passed.
    pub success: bool,
}

/// Which of the three trials was selected for a world visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialKind {
    /// Timing alignment.
    Timing,
    /// Waveform matching.
    Waveform,
    /// Sequence memory.
    Sequence,
}

impl TrialKind {
    /// Pick a trial uniformly (one third each).
    pub fn choose(rng: &mut StdRng) -> Self {
        let roll = rng.random::<f64>();
        if roll < 0.33 {
            Self::Timing
        } else if roll < 0.66 {
            Self::Waveform
        } else {
            Self::Sequence
        }
    }
}

/// Effective difficulty for a trial of the given kind.
///
/// The timing trial is the one eased by the resonance-adaptation upgrade
/// (0.4 per level, floored at zero); the others take the raw world order.
pub fn effective_order(world_order: u32, resonance_adaptation: u32, kind: TrialKind) -> f64 {
    match kind {
        TrialKind::Timing => {
            (f64::from(world_order) - f64::from(resonance_adaptation) * 0.4).max(0.0)
        }
        _ => f64::from(world_order),
    }
}

/// An active trial of any kind.
#[derive(Debug, Clone)]
pub enum Trial {
    /// Timing alignment in progress.
    Timing(TimingTrial),
    /// Waveform matching in progress.
    Waveform(WaveformTrial),
    /// Sequence memory in progress.
    Sequence(SequenceTrial),
}

impl Trial {
    /// Construct the trial for the chosen kind at the given difficulty.
    pub fn start(kind: TrialKind, order: f64, rng: &mut StdRng) -> Self {
        match kind {
            TrialKind::Timing => Self::Timing(TimingTrial::new(order)),
            TrialKind::Waveform => Self::Waveform(WaveformTrial::new(order, rng)),
            TrialKind::Sequence => Self::Sequence(SequenceTrial::new(order, rng)),
        }
    }

    /// Which kind this trial is.
    pub fn kind(&self) -> TrialKind {
        match self {
            Self::Timing(_) => TrialKind::Timing,
            Self::Waveform(_) => TrialKind::Waveform,
            Self::Sequence(_) => TrialKind::Sequence,
        }
    }

    /// Advance animation-cadence state. Only the timing trial oscillates;
    /// for the others this is a no-op.
    pub fn tick(&mut self) {
        if let Self::Timing(t) = self {
            t.tick();
        }
    }

    /// The outcome, once the trial has ended.
    pub fn outcome(&self) -> Option<TrialOutcome> {
        match self {
            Self::Timing(t) => t.outcome(),
            Self::Waveform(t) => t.outcome(),
            Self::Sequence(t) => t.outcome(),
        }
    }

    /// Whether the trial has ended.
    pub fn is_complete(&self) -> bool {
        self.outcome().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn choose_covers_all_kinds() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = [false; 3];
        for _ in 0..200 {
            match TrialKind::choose(&mut rng) {
                TrialKind::Timing => seen[0] = true,
                TrialKind::Waveform => seen[1] = true,
                TrialKind::Sequence => seen[2] = true,
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn choose_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0u32; 3];
        for _ in 0..9000 {
            match TrialKind::choose(&mut rng) {
                TrialKind::Timing => counts[0] += 1,
                TrialKind::Waveform => counts[1] += 1,
                TrialKind::Sequence => counts[2] += 1,
            }
        }
        for c in counts {
            assert!((2400..3600).contains(&c), "skewed selection: {counts:?}");
        }
    }

    #[test]
    fn adaptation_eases_only_the_timing_trial() {
        assert_eq!(effective_order(5, 3, TrialKind::Timing), 3.8);
        assert_eq!(effective_order(5, 3, TrialKind::Waveform), 5.0);
        assert_eq!(effective_order(5, 3, TrialKind::Sequence), 5.0);
    }

    #[test]
    fn effective_order_floors_at_zero() {
        assert_eq!(effective_order(1, 10, TrialKind::Timing), 0.0);
    }

    #[test]
    fn start_matches_kind() {
        let mut rng = StdRng::seed_from_u64(3);
        for kind in [TrialKind::Timing, TrialKind::Waveform, TrialKind::Sequence] {
            let trial = Trial::start(kind, 2.0, &mut rng);
            assert_eq!(trial.kind(), kind);
            assert!(!trial.is_complete());
        }
    }

    #[test]
    fn tick_only_animates_timing() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut trial = Trial::start(TrialKind::Sequence, 0.0, &mut rng);
        trial.tick();
        assert!(!trial.is_complete());
    }
}
