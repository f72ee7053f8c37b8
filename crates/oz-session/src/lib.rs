//! Progression state machine orchestrating the Onyzuka game core.
//!
//! [`GameSession`] drives the title → waking → map → world → boss → codex
//! flow, applies trial and battle outcomes to the reward economy, and
//! persists the save snapshot after every mutation. Storage, narrative text,
//! and audio are injected collaborators: their failures are recovered
//! locally and logged, never surfaced as gameplay effects.

/// Audio collaborator seam (discrete cues, ambient directives).
pub mod audio;
/// Structured diagnostics for non-fatal failures.
pub mod diagnostics;
/// Narrative text collaborator with a local fallback archive.
pub mod echo;
/// Transient reward popups.
pub mod effects;
/// Save-state persistence stores.
pub mod persist;
/// The session state machine itself.
pub mod session;
/// The one-shot waking boot transcript.
pub mod waking;

/// Re-export audio types.
pub use audio::{AudioCue, AudioDirector, NullAudio};
/// Re-export diagnostics types.
pub use diagnostics::{Diagnostic, DiagnosticsLog, Severity};
/// Re-export echo types.
pub use echo::{EchoError, EchoResult, EchoSource, FALLBACK_ECHOES, LocalEchoes};
/// Re-export popup types.
pub use effects::{POPUP_LIFETIME_TICKS, PopupTray, RewardPopup};
/// Re-export persistence types.
pub use persist::{FileStore, MemoryStore, PersistError, PersistResult, SAVE_KEY, SaveStore};
/// Re-export session types.
pub use session::{Dialogue, GameSession, ServiceRecord, SessionConfig};
/// Re-export waking types.
pub use waking::{WAKING_LOGS, WakingSequence};
