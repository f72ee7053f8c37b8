//! The persisted save-state snapshot.
//!
//! [`GameProgress`] is the sole unit of durable state: one JSON-serializable
//! record mutated by player actions and written back after every mutation.
//! Field names serialize in camelCase and enums in SCREAMING_SNAKE_CASE so
//! saves written by the original web build still deserialize.

use serde::{Deserialize, Serialize};

/// The current top-level mode of the game.
///
/// Exactly one state is active at a time; transitions happen only through
/// the session's transition methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    /// Title screen, before the player awakens.
    Title,
    /// One-shot boot transcript; auto-advances to the map.
    Waking,
    /// The ring-of-worlds hub.
    Map,
    /// Inside a world, scanning and running a trial.
    World,
    /// Read-only lore browser overlay.
    Codex,
    /// Boss confrontation in the current world.
    Boss,
}

/// A player-selectable stance modifying reward and combat multipliers.
///
/// Switching modes is free and takes effect immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RibbonMode {
    /// Defensive stance: +2 effective shield level in boss battles.
    Shield,
    /// Offensive stance: 1.5x proximity damage in boss battles.
    Blade,
    /// Utility stance: no combat modifier.
    Propulsion,
    /// Utility stance: no combat modifier.
    Analysis,
    /// Harvest stance: 1.5x mote gains.
    Capture,
}

/// One of the three purchasable upgrade tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeKind {
    /// Raises shield duration and reduces projectile damage taken.
    ArmorIntegrity,
    /// Raises the mote-gain multiplier.
    ChronomatterChanneling,
    /// Eases the timing trial's difficulty.
    ResonanceAdaptation,
}

/// Per-track upgrade levels. Each track starts at 1 and is purchasable up
/// to a cap of 10 (the cap is enforced by callers via
/// [`crate::economy::can_upgrade`], not by the deduction logic).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpgradeLevels {
    /// Armor integrity level.
    pub armor_integrity: u32,
    /// Chronomatter channeling level.
    pub chronomatter_channeling: u32,
    /// Resonance adaptation level.
    pub resonance_adaptation: u32,
}

impl Default for UpgradeLevels {
    fn default() -> Self {
        Self {
            armor_integrity: 1,
            chronomatter_channeling: 1,
            resonance_adaptation: 1,
        }
    }
}

impl UpgradeLevels {
    /// Current level of the given track.
    pub fn level(&self, kind: UpgradeKind) -> u32 {
        match kind {
            UpgradeKind::ArmorIntegrity => self.armor_integrity,
            UpgradeKind::ChronomatterChanneling => self.chronomatter_channeling,
            UpgradeKind::ResonanceAdaptation => self.resonance_adaptation,
        }
    }

    /// Raise the given track by one level.
    pub fn bump(&mut self, kind: UpgradeKind) {
        match kind {
            UpgradeKind::ArmorIntegrity => self.armor_integrity += 1,
            UpgradeKind::ChronomatterChanneling => self.chronomatter_channeling += 1,
            UpgradeKind::ResonanceAdaptation => self.resonance_adaptation += 1,
        }
    }
}

/// An append-only, deduplicated id list preserving insertion order.
///
/// Used for every unlock set in the save (cleared worlds, lore snippets,
/// laws, factions, artefacts, creatures, allies). Entries are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnlockList(Vec<String>);

impl UnlockList {
    /// An empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// A list seeded with the given ids.
    pub fn seeded(ids: &[&str]) -> Self {
        Self(ids.iter().map(|s| (*s).to_string()).collect())
    }

    /// Append `id` if not already present. Returns `true` if it was new.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            false
        } else {
            self.0.push(id.to_string());
            true
        }
    }

    /// Whether `id` has been unlocked.
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|e| e == id)
    }

    /// Number of unlocked ids.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been unlocked yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over unlocked ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// The single persisted save record.
///
/// Everything else in the game (trial timers, boss health, popups) is
/// ephemeral session state discarded when its encounter completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameProgress {
    /// Current top-level mode.
    pub state: GameState,
    /// The world being visited; `Some` only in World or Boss state.
    pub current_world_id: Option<String>,
    /// Worlds cleared via boss victory. Grows monotonically.
    pub cleared_worlds: UnlockList,
    /// Currency balance. Only upgrade purchases decrease it.
    pub chronomatter: u64,
    /// Rises by one per first-time world clear.
    pub ribbon_level: u32,
    /// Active stance.
    pub ribbon_mode: RibbonMode,
    /// Worlds whose lore has been encountered (recorded on entry).
    pub discovered_lore: UnlockList,
    /// Creature/faction/artefact ids revealed by mote catches or scans.
    pub unlocked_lore_snippets: UnlockList,
    /// Temporal laws visible in the codex.
    pub unlocked_laws: UnlockList,
    /// Factions visible in the codex.
    pub discovered_factions: UnlockList,
    /// Artefacts visible in the codex.
    pub discovered_artefacts: UnlockList,
    /// Creatures visible in the codex.
    pub discovered_creatures: UnlockList,
    /// Allies met so far.
    pub met_allies: UnlockList,
    /// Index into the main narrative arc's stage list.
    pub active_arc_stage: usize,
    /// Purchased upgrade levels.
    pub upgrades: UpgradeLevels,
}

impl Default for GameProgress {
    fn default() -> Self {
        Self {
            state: GameState::Title,
            current_world_id: None,
            cleared_worlds: UnlockList::new(),
            chronomatter: 250,
            ribbon_level: 1,
            ribbon_mode: RibbonMode::Shield,
            discovered_lore: UnlockList::new(),
            unlocked_lore_snippets: UnlockList::new(),
            unlocked_laws: UnlockList::seeded(&["L01", "L02"]),
            discovered_factions: UnlockList::seeded(&["guardians"]),
            discovered_artefacts: UnlockList::seeded(&["blades"]),
            discovered_creatures: UnlockList::new(),
            met_allies: UnlockList::seeded(&["elyia"]),
            active_arc_stage: 0,
            upgrades: UpgradeLevels::default(),
        }
    }
}

impl GameProgress {
    /// Whether the given world has been cleared.
    pub fn is_cleared(&self, world_id: &str) -> bool {
        self.cleared_worlds.contains(world_id)
    }
}
