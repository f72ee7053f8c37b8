//! Frame-stepped boss battle simulator.
//!
//! The battle is an explicit stepped simulation: the host calls
//! [`BossBattle::tick`] once per display frame and applies the returned
//! events. No wall-clock timers exist anywhere — shield durations, charge
//! wind-ups, and hit flashes are frame countdowns, so the whole fight is
//! unit-testable without real time passing.

/// The battle state machine and per-frame update.
pub mod battle;
/// Battle configuration derived from the world and player stats.
pub mod config;
/// Events emitted by the simulation each frame.
pub mod events;
/// Projectile kinds and motion.
pub mod projectile;

/// Re-export the battle state machine.
pub use battle::{ARENA_HEIGHT, ARENA_WIDTH, BattleOutcome, BossBattle, FRAMES_PER_SECOND};
/// Re-export configuration types.
pub use config::{AttackPattern, BattleConfig};
/// Re-export battle events.
pub use events::BattleEvent;
/// Re-export projectile types.
pub use projectile::{Projectile, ProjectileKind};
