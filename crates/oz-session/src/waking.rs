//! The one-shot waking boot transcript.
//!
//! Played once between the title screen and the map. No player input
//! affects the outcome; the host reveals one line at a time and the session
//! advances to the map when the transcript is exhausted.

/// The fixed boot log, revealed line by line.
pub const WAKING_LOGS: [&str; 6] = [
    "COSMOS_KERNEL: Initializing...",
    "FRAGMENT_DETECTION: 7 Anomalies Found.",
    "PROTOCOL_ONYZUKA: Online.",
    "MEMORY_CORE: Segmented (99.8% loss).",
    "PRIMARY_OBJECTIVE: Restore the Codex.",
    "THE_VOID_IS_WATCHING.",
];

/// Stepwise reveal state for the boot transcript.
#[derive(Debug, Clone, Default)]
pub struct WakingSequence {
    revealed: usize,
}

impl WakingSequence {
    /// Start at the first line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal the next line, or `None` once the transcript is exhausted.
    pub fn advance(&mut self) -> Option<&'static str> {
        let line = WAKING_LOGS.get(self.revealed).copied();
        if line.is_some() {
            self.revealed += 1;
        }
        line
    }

    /// Lines revealed so far.
    pub fn revealed(&self) -> &'static [&'static str] {
        &WAKING_LOGS[..self.revealed]
    }

    /// Whether every line has been shown.
    pub fn is_complete(&self) -> bool {
        self.revealed == WAKING_LOGS.len()
    }
}
