//! Core types for Onyzuka: content catalog, save state, and reward economy.
//!
//! This crate defines the immutable content tables (worlds, factions,
//! creatures, lore), the single persisted [`GameProgress`] snapshot, and the
//! pure reward/upgrade arithmetic. It knows nothing about encounters or
//! presentation — the session crate orchestrates those on top of this model.

/// Immutable content tables and derived world status.
pub mod catalog;
/// The standard content set shipped with the game.
pub mod data;
/// Pure reward, upgrade, and victory bookkeeping functions.
pub mod economy;
/// The persisted save-state snapshot and its invariant-enforcing helpers.
pub mod progress;

/// Re-export catalog types.
pub use catalog::{
    Ally, Artefact, Catalog, Creature, Faction, LocationCategory, LocationVariant, LoreRef,
    NarrativeArc, Quest, TemporalLaw, World, WorldStatus,
};
/// Re-export save-state types.
pub use progress::{GameProgress, GameState, RibbonMode, UnlockList, UpgradeKind, UpgradeLevels};
