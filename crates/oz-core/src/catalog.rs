//! Immutable content tables and derived world status.
//!
//! Catalog records are pure data keyed by id. The only logic living here is
//! the lock/clear derivation: a world's status is a function of the cleared
//! set and catalog order, never a second source of persisted truth.

use crate::progress::UnlockList;

/// Broad location class used to theme the backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationCategory {
    /// Diffuse stellar nursery.
    Nebula,
    /// Segment of the great ring itself.
    Ring,
    /// Dead or abandoned structure.
    Ruin,
    /// An ordinary traversable world.
    World,
    /// The singularity at the ring's heart.
    Core,
}

/// Current physical condition of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationVariant {
    /// Holding together.
    Stable,
    /// Visibly coming apart.
    Fractured,
    /// Inert, awaiting reactivation.
    Dormant,
    /// Claimed by entropy.
    Corrupted,
    /// Already repaired by the player.
    Restored,
}

/// Lock/clear status of a world, derived at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldStatus {
    /// Not yet reachable.
    Locked,
    /// Reachable but not cleared.
    Unlocked,
    /// Boss defeated.
    Cleared,
}

/// A world on the ring. Immutable catalog entry.
#[derive(Debug, Clone)]
pub struct World {
    /// Stable id referenced by the save state.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-paragraph description.
    pub description: &'static str,
    /// Three-color palette handed to the renderer.
    pub palette: [&'static str; 3],
    /// Name of the fragment recovered here.
    pub fragment_name: &'static str,
    /// Difficulty ordinal driving trial tolerance and speed scaling.
    pub order: u32,
    /// Ambient/audio biome tag.
    pub biome: &'static str,
    /// Backdrop theming class.
    pub category: LocationCategory,
    /// Physical condition.
    pub variant: LocationVariant,
    /// Points of interest shown while visiting.
    pub key_points: &'static [&'static str],
    /// Mood line.
    pub ambiance: &'static str,
    /// Optional deeper backstory.
    pub history: Option<&'static str>,
}

/// A power bloc of the setting.
#[derive(Debug, Clone)]
pub struct Faction {
    /// Stable id referenced by unlock sets.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// What kind of beings compose it.
    pub nature: &'static str,
    /// What it wants.
    pub ideology: &'static str,
    /// How it is organised.
    pub organisation: &'static str,
    /// Iconography.
    pub symbols: &'static [&'static str],
    /// Standing toward the other blocs.
    pub relations: &'static str,
    /// Codex lore line.
    pub lore: &'static str,
}

/// A named artefact of the setting.
#[derive(Debug, Clone)]
pub struct Artefact {
    /// Stable id referenced by unlock sets.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// What it is.
    pub nature: &'static str,
    /// What it does.
    pub functions: &'static [&'static str],
    /// Display glyph.
    pub icon: &'static str,
    /// Codex lore line.
    pub lore: &'static str,
}

/// A creature native to one world.
#[derive(Debug, Clone)]
pub struct Creature {
    /// Stable id referenced by unlock sets.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// What it is.
    pub nature: &'static str,
    /// How it acts.
    pub behavior: &'static str,
    /// The world it inhabits.
    pub world_id: &'static str,
    /// Display glyph.
    pub icon: &'static str,
    /// Codex lore line revealed by a domain scan.
    pub lore: &'static str,
}

/// A named ally met along the journey.
#[derive(Debug, Clone)]
pub struct Ally {
    /// Stable id referenced by unlock sets.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Their role in the story.
    pub role: &'static str,
    /// Display glyph.
    pub icon: &'static str,
    /// Codex lore line.
    pub lore: &'static str,
    /// How their thread resolves.
    pub outcome: &'static str,
}

/// A quest tied to one world.
#[derive(Debug, Clone)]
pub struct Quest {
    /// Stable id.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// The world it takes place on.
    pub world_id: &'static str,
    /// Setup line.
    pub description: &'static str,
    /// What must be done.
    pub objective: &'static str,
    /// What happens once done.
    pub outcome: &'static str,
}

/// A multi-stage narrative thread. The first arc in the catalog is the main
/// arc whose stage index is persisted in the save.
#[derive(Debug, Clone)]
pub struct NarrativeArc {
    /// Stable id.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Stage names in order.
    pub stages: &'static [&'static str],
}

/// A law of the setting, revealed in the codex.
#[derive(Debug, Clone)]
pub struct TemporalLaw {
    /// Stable id referenced by unlock sets.
    pub id: &'static str,
    /// Display title.
    pub title: &'static str,
    /// The law's text.
    pub description: &'static str,
}

/// A borrowed view into any lore-bearing record (creature, faction, or
/// artefact), used when sampling snippet unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoreRef {
    /// The record's id.
    pub id: &'static str,
    /// The record's display name.
    pub name: &'static str,
    /// The record's lore line.
    pub lore: &'static str,
}

/// The full set of immutable content tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Worlds in ring order. Position in this list drives unlock gating.
    pub worlds: Vec<World>,
    /// Factions.
    pub factions: Vec<Faction>,
    /// Artefacts.
    pub artefacts: Vec<Artefact>,
    /// Creatures.
    pub creatures: Vec<Creature>,
    /// Allies.
    pub allies: Vec<Ally>,
    /// Quests.
    pub quests: Vec<Quest>,
    /// Narrative arcs; the first is the main arc.
    pub arcs: Vec<NarrativeArc>,
    /// Temporal laws.
    pub laws: Vec<TemporalLaw>,
}

impl Catalog {
    /// The standard content set shipped with the game.
    pub fn standard() -> Self {
        crate::data::standard()
    }

    /// Look up a world by id.
    pub fn world(&self, id: &str) -> Option<&World> {
        self.worlds.iter().find(|w| w.id == id)
    }

    /// Position of a world in ring order.
    pub fn world_index(&self, id: &str) -> Option<usize> {
        self.worlds.iter().position(|w| w.id == id)
    }

    /// The creature native to the given world, if any.
    pub fn creature_for_world(&self, world_id: &str) -> Option<&Creature> {
        self.creatures.iter().find(|c| c.world_id == world_id)
    }

    /// The main narrative arc (always present in the standard catalog).
    pub fn main_arc(&self) -> &NarrativeArc {
        &self.arcs[0]
    }

    /// Derive a world's status from the cleared set and catalog order.
    ///
    /// A world is unlocked iff it is first on the ring or its immediate
    /// predecessor has been cleared. Returns `None` for unknown ids.
    pub fn status(&self, id: &str, cleared: &UnlockList) -> Option<WorldStatus> {
        let index = self.world_index(id)?;
        if cleared.contains(id) {
            return Some(WorldStatus::Cleared);
        }
        let unlocked = index == 0 || cleared.contains(self.worlds[index - 1].id);
        Some(if unlocked {
            WorldStatus::Unlocked
        } else {
            WorldStatus::Locked
        })
    }

    /// Whether the given world can currently be entered.
    pub fn is_unlocked(&self, id: &str, cleared: &UnlockList) -> bool {
        matches!(
            self.status(id, cleared),
            Some(WorldStatus::Unlocked | WorldStatus::Cleared)
        )
    }

    /// Union of creatures, factions, and artefacts as snippet candidates.
    pub fn lore_pool(&self) -> Vec<LoreRef> {
        let mut pool = Vec::new();
        pool.extend(self.creatures.iter().map(|c| LoreRef {
            id: c.id,
            name: c.name,
            lore: c.lore,
        }));
        pool.extend(self.factions.iter().map(|f| LoreRef {
            id: f.id,
            name: f.name,
            lore: f.lore,
        }));
        pool.extend(self.artefacts.iter().map(|a| LoreRef {
            id: a.id,
            name: a.name,
            lore: a.lore,
        }));
        pool
    }
}
