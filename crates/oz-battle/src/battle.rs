//! The battle state machine and per-frame update.

use crate::config::{AttackPattern, BattleConfig};
use crate::events::BattleEvent;
use crate::projectile::{Projectile, ProjectileKind};

/// Playfield width in simulation units.
pub const ARENA_WIDTH: f64 = 600.0;
/// Playfield height in simulation units.
pub const ARENA_HEIGHT: f64 = 400.0;
/// Nominal display frame rate used to convert millisecond timings.
pub const FRAMES_PER_SECOND: u64 = 60;

const MAX_HEALTH: f64 = 100.0;
const SPIRAL_INTERVAL: u64 = 30;
const SPIRAL_SPEED: f64 = 2.0;
const HOMING_INTERVAL: u64 = 45;
const HOMING_FLIGHT_FRAMES: f64 = 60.0;
const CHARGE_INTERVAL: u64 = 200;
const CHARGE_WINDUP_FRAMES: u64 = 60;
const CHARGE_RADIUS: f64 = 180.0;
const CHARGE_DAMAGE: f64 = 15.0;
const CONTACT_RADIUS: f64 = 20.0;
const PROJECTILE_BASE_DAMAGE: f64 = 8.0;
const SHIELD_MITIGATION_PER_LEVEL: f64 = 0.4;
const RESONANCE_RADIUS: f64 = 150.0;
const RESONANCE_GAIN: f64 = 0.2;
const RESONANCE_DECAY: f64 = 0.5;
const RESONANCE_CAP: f64 = 100.0;
const PROXIMITY_INTERVAL: u64 = 30;
const PROXIMITY_RADIUS: f64 = 120.0;
const PROXIMITY_DAMAGE: f64 = 6.0;
const HIT_FLASH_FRAMES: u64 = 5;
const VICTORY_BASE_BONUS: f64 = 1000.0;

/// How a finished battle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    /// The sentinel fell; the payout scales with remaining resonance.
    Victory {
        /// Chronomatter payout.
        bonus: u64,
    },
    /// The player's frame gave out.
    Defeat,
}

/// A boss battle in progress.
///
/// The host calls [`set_cursor`](Self::set_cursor) and
/// [`activate_shield`](Self::activate_shield) in response to input and
/// [`tick`](Self::tick) once per frame, applying the returned events. Once a
/// terminal event has been emitted the simulation is frozen: no further
/// health mutation, no further events.
#[derive(Debug, Clone)]
pub struct BossBattle {
    config: BattleConfig,
    frame: u64,
    boss_health: f64,
    player_health: f64,
    cursor: (f64, f64),
    projectiles: Vec<Projectile>,
    shield_frames: u64,
    cooldown_frames: u64,
    cooldown_total: u64,
    charge_countdown: Option<u64>,
    hit_flash_frames: u64,
    resonance: f64,
    outcome: Option<BattleOutcome>,
}

impl BossBattle {
    /// Start a battle with both sides at full health and the cursor at the
    /// arena center.
    pub fn new(config: BattleConfig) -> Self {
        Self {
            config,
            frame: 0,
            boss_health: MAX_HEALTH,
            player_health: MAX_HEALTH,
            cursor: (ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0),
            projectiles: Vec::new(),
            shield_frames: 0,
            cooldown_frames: 0,
            cooldown_total: 0,
            charge_countdown: None,
            hit_flash_frames: 0,
            resonance: 0.0,
            outcome: None,
        }
    }

    /// Move the player's cursor.
    pub fn set_cursor(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    /// Raise the shield if it is neither active nor recharging.
    ///
    /// Active duration is `2000 + level * 500` ms and the following cooldown
    /// `4000 - level * 200` ms, both counted in frames. Returns whether the
    /// shield actually came up.
    pub fn activate_shield(&mut self) -> bool {
        if self.outcome.is_some() || !self.can_shield() {
            return false;
        }
        let level = u64::from(self.config.shield_level);
        self.shield_frames = (2000 + level * 500) * FRAMES_PER_SECOND / 1000;
        self.cooldown_total = (4000_u64.saturating_sub(level * 200)) * FRAMES_PER_SECOND / 1000;
        true
    }

    /// Whether the shield can be raised right now.
    pub fn can_shield(&self) -> bool {
        self.shield_frames == 0 && self.cooldown_frames == 0
    }

    /// Whether the shield is currently up.
    pub fn shield_active(&self) -> bool {
        self.shield_frames > 0
    }

    /// Remaining shield cooldown on a 0-100 scale (0 = ready).
    pub fn shield_cooldown_pct(&self) -> f64 {
        if self.cooldown_total == 0 {
            return 0.0;
        }
        self.cooldown_frames as f64 / self.cooldown_total as f64 * 100.0
    }

    /// Sentinel health, 0-100.
    pub fn boss_health(&self) -> f64 {
        self.boss_health
    }

    /// Player frame stability, 0-100.
    pub fn player_health(&self) -> f64 {
        self.player_health
    }

    /// Current resonance charge, 0-100. Always 0 when disabled.
    pub fn resonance(&self) -> f64 {
        self.resonance
    }

    /// Whether the sentinel is winding up its area blast.
    pub fn is_charging(&self) -> bool {
        self.charge_countdown.is_some()
    }

    /// Whether the player's proximity strike landed within the last flash
    /// window.
    pub fn hit_flash(&self) -> bool {
        self.hit_flash_frames > 0
    }

    /// Number of live projectiles.
    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    /// Live projectiles, for rendering.
    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Frames simulated so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// The terminal result, once reached.
    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.outcome
    }

    /// Sentinel position for the current frame: a fixed periodic drift
    /// around the upper arena.
    pub fn boss_position(&self) -> (f64, f64) {
        let f = self.frame as f64;
        (
            ARENA_WIDTH / 2.0 + (f * 0.02).cos() * 50.0,
            150.0 + (f * 0.04).sin() * 30.0,
        )
    }

    /// Advance the simulation by one frame, returning the events emitted.
    ///
    /// No-op once a terminal outcome has been reached.
    pub fn tick(&mut self) -> Vec<BattleEvent> {
        let mut events = Vec::new();
        if self.outcome.is_some() {
            return events;
        }

        self.frame += 1;
        let (bx, by) = self.boss_position();
        let (px, py) = self.cursor;
        let boss_distance = ((px - bx).powi(2) + (py - by).powi(2)).sqrt();
        let shielded = self.shield_active();

        // Resonance builds while hugging the sentinel, decays otherwise.
        if self.config.resonance_enabled {
            if boss_distance < RESONANCE_RADIUS {
                self.resonance = (self.resonance + RESONANCE_GAIN).min(RESONANCE_CAP);
            } else {
                self.resonance = (self.resonance - RESONANCE_DECAY).max(0.0);
            }
        }

        // Resolve a pending area blast before any new attack starts.
        if let Some(countdown) = self.charge_countdown {
            if countdown <= 1 {
                self.charge_countdown = None;
                let hit = boss_distance < CHARGE_RADIUS && !shielded;
                if hit {
                    self.player_health = (self.player_health - CHARGE_DAMAGE).max(0.0);
                    self.resonance = 0.0;
                }
                events.push(BattleEvent::ChargeBlast { hit });
            } else {
                self.charge_countdown = Some(countdown - 1);
            }
        }

        match self.config.pattern {
            AttackPattern::Spiral => {
                if self.frame % SPIRAL_INTERVAL == 0 && self.charge_countdown.is_none() {
                    let angle = self.frame as f64 * 0.1;
                    self.projectiles.push(Projectile {
                        x: bx,
                        y: by,
                        vx: angle.cos() * SPIRAL_SPEED,
                        vy: angle.sin() * SPIRAL_SPEED,
                        kind: ProjectileKind::Spiral,
                    });
                    events.push(BattleEvent::ProjectileSpawned {
                        kind: ProjectileKind::Spiral,
                    });
                }
                if self.frame % CHARGE_INTERVAL == 0 {
                    self.charge_countdown = Some(CHARGE_WINDUP_FRAMES);
                    events.push(BattleEvent::ChargeBegan);
                }
            }
            AttackPattern::Homing => {
                if self.frame % HOMING_INTERVAL == 0 {
                    self.projectiles.push(Projectile {
                        x: bx,
                        y: by,
                        vx: (px - bx) / HOMING_FLIGHT_FRAMES,
                        vy: (py - by) / HOMING_FLIGHT_FRAMES,
                        kind: ProjectileKind::Homing,
                    });
                    events.push(BattleEvent::ProjectileSpawned {
                        kind: ProjectileKind::Homing,
                    });
                }
            }
        }

        // Advance projectiles; contact despawns them whether or not the
        // shield absorbed the hit, and leaving the arena despawns them too.
        let shield_level = self.config.shield_level;
        let mut player_health = self.player_health;
        self.projectiles.retain_mut(|p| {
            p.advance();
            if p.distance_to(px, py) < CONTACT_RADIUS {
                if !shielded {
                    let damage = (PROJECTILE_BASE_DAMAGE
                        - f64::from(shield_level) * SHIELD_MITIGATION_PER_LEVEL)
                        .max(0.0);
                    player_health = (player_health - damage).max(0.0);
                    events.push(BattleEvent::PlayerHit { damage });
                }
                return false;
            }
            (0.0..=ARENA_WIDTH).contains(&p.x) && (0.0..=ARENA_HEIGHT).contains(&p.y)
        });
        self.player_health = player_health;

        // Proximity strike window.
        if self.frame % PROXIMITY_INTERVAL == 0 && boss_distance < PROXIMITY_RADIUS && !shielded {
            let multiplier = if self.config.resonance_enabled {
                1.0 + self.resonance / 50.0
            } else {
                1.0
            };
            let damage = PROXIMITY_DAMAGE * self.config.damage_bonus * multiplier;
            self.boss_health = (self.boss_health - damage).max(0.0);
            self.hit_flash_frames = HIT_FLASH_FRAMES;
            events.push(BattleEvent::BossStruck { damage });
        }

        // Shield/cooldown/flash countdowns advance at frame end.
        if self.shield_frames > 0 {
            self.shield_frames -= 1;
            if self.shield_frames == 0 {
                self.cooldown_frames = self.cooldown_total;
            }
        } else if self.cooldown_frames > 0 {
            self.cooldown_frames -= 1;
        }
        if self.hit_flash_frames > 0 {
            self.hit_flash_frames -= 1;
        }

        // First terminal condition wins; victory is checked first.
        if self.boss_health <= 0.0 {
            let bonus = (VICTORY_BASE_BONUS + self.resonance * 10.0).round() as u64;
            self.outcome = Some(BattleOutcome::Victory { bonus });
            events.push(BattleEvent::Victory { bonus });
        } else if self.player_health <= 0.0 {
            self.outcome = Some(BattleOutcome::Defeat);
            events.push(BattleEvent::Defeat);
        }

        events
    }
}
