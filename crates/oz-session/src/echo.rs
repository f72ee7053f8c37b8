//! The narrative text collaborator.
//!
//! Flavor lines ("echoes") come from an injected [`EchoSource`]. Any failure
//! is recovered locally with a line from a fixed archive; quota exhaustion
//! is expected and logged at warning level, everything else at error level,
//! with identical fallback behavior either way. A failure never reaches the
//! caller.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Result type for echo requests.
pub type EchoResult<T> = Result<T, EchoError>;

/// Ways an echo source can fail.
#[derive(Debug, Error)]
pub enum EchoError {
    /// The source's request budget is spent. Expected, recoverable.
    #[error("echo quota exhausted")]
    QuotaExhausted,

    /// Anything else: network trouble, malformed response, and so on.
    #[error("echo source unavailable: {0}")]
    Unavailable(String),
}

/// A collaborator producing short poetic lines for a world visit.
pub trait EchoSource {
    /// Produce a line (at most ~20 words) for reaching `world_name` to
    /// recover `fragment_name`.
    fn echo(&mut self, world_name: &str, fragment_name: &str) -> EchoResult<String>;
}

/// The local echo archive used whenever a source fails.
pub const FALLBACK_ECHOES: [&str; 10] = [
    "The tapestry of time is thin here. Tread lightly, Guardian.",
    "Your armor remembers a future you have not yet lived.",
    "Entropy is but the shadow cast by the light of creation.",
    "The Architect's plans are etched in the stars, not in stone.",
    "Every grain of chronomatter holds a thousand lost years.",
    "Synchronize your heart to the beat of the universe.",
    "The Void is patient, but the Codex is eternal.",
    "Do not fear the fading light; the dawn is written in your metal.",
    "Your ribbons are the threads that hold reality together.",
    "The past is a mirror, the future a doorway. You are the key.",
];

/// Pick a line from the local archive.
pub fn fallback_line(rng: &mut StdRng) -> &'static str {
    FALLBACK_ECHOES[rng.random_range(0..FALLBACK_ECHOES.len())]
}

/// An echo source serving lines straight from the local archive.
///
/// The default source when no remote collaborator is wired in; it never
/// fails.
#[derive(Debug)]
pub struct LocalEchoes {
    rng: StdRng,
}

impl LocalEchoes {
    /// Create an archive-backed source with its own seeded rng.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl EchoSource for LocalEchoes {
    fn echo(&mut self, _world_name: &str, _fragment_name: &str) -> EchoResult<String> {
        Ok(fallback_line(&mut self.rng).to_string())
    }
}
