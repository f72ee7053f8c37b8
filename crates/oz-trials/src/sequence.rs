//! Sequence-memory trial.
//!
//! A random symbol sequence is displayed, then the player reproduces it in
//! order. Any mismatch ends the round immediately; a full reproduction pays
//! the full reward.

use rand::Rng;
use rand::rngs::StdRng;

use crate::trial::TrialOutcome;

/// Size of the symbol alphabet.
pub const SYMBOL_COUNT: u8 = 4;

const MISMATCH_REWARD: u64 = 20;
const MAX_LENGTH: usize = 8;
const BASE_LENGTH: usize = 3;

/// The sequence-memory trial state machine.
#[derive(Debug, Clone)]
pub struct SequenceTrial {
    order: f64,
    sequence: Vec<u8>,
    entered: usize,
    outcome: Option<TrialOutcome>,
}

impl SequenceTrial {
    /// Start a trial with a random sequence of length
    /// `min(8, 3 + floor(order / 5))`.
    pub fn new(order: f64, rng: &mut StdRng) -> Self {
        let order = order.max(0.0);
        let length = (BASE_LENGTH + (order / 5.0).floor() as usize).min(MAX_LENGTH);
        let sequence = (0..length)
            .map(|_| rng.random_range(0..SYMBOL_COUNT))
            .collect();
        Self {
            order,
            sequence,
            entered: 0,
            outcome: None,
        }
    }

    /// The target sequence, exposed for the display phase.
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// How many symbols have been correctly reproduced so far.
    pub fn progress(&self) -> usize {
        self.entered
    }

    /// Enter the next symbol.
    ///
    /// A mismatch (including any symbol outside the alphabet) terminates
    /// immediately with the consolation reward; completing the sequence pays
    /// the full reward. Returns `Some` only on the terminating input, and
    /// `None` both mid-round and after the trial has ended.
    pub fn input(&mut self, symbol: u8) -> Option<TrialOutcome> {
        if self.outcome.is_some() {
            return None;
        }
        if symbol != self.sequence[self.entered] {
            let outcome = TrialOutcome {
                reward: MISMATCH_REWARD,
                success: false,
            };
            self.outcome = Some(outcome);
            return Some(outcome);
        }
        self.entered += 1;
        if self.entered == self.sequence.len() {
            let outcome = TrialOutcome {
                reward: (150.0 + self.order * 30.0).round() as u64,
                success: true,
            };
            self.outcome = Some(outcome);
            return Some(outcome);
        }
        None
    }

    /// The outcome, once the round has ended.
    pub fn outcome(&self) -> Option<TrialOutcome> {
        self.outcome
    }
}
