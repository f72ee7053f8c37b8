//! Events emitted by the simulation each frame.

use crate::projectile::ProjectileKind;

/// Something that happened during one simulation frame.
///
/// The host loop applies these as effects (sound cues, screen shake,
/// progression updates); the simulator itself only mutates its own state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BattleEvent {
    /// The sentinel launched a projectile.
    ProjectileSpawned {
        /// Motion kind of the new projectile.
        kind: ProjectileKind,
    },
    /// A projectile reached the player while unshielded.
    PlayerHit {
        /// Damage dealt after shield-level mitigation.
        damage: f64,
    },
    /// The sentinel began winding up its area blast.
    ChargeBegan,
    /// The area blast resolved.
    ChargeBlast {
        /// Whether the player was caught unshielded inside the radius.
        hit: bool,
    },
    /// The player's proximity attack landed.
    BossStruck {
        /// Damage dealt to the sentinel.
        damage: f64,
    },
    /// The sentinel fell. Terminal; reported exactly once.
    Victory {
        /// Chronomatter payout, boosted by remaining resonance.
        bonus: u64,
    },
    /// The player's frame gave out. Terminal; reported exactly once.
    Defeat,
}
