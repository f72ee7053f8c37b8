//! Projectile kinds and motion.

/// How a projectile moves after launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    /// Fixed launch angle, velocity rotated by a constant step each frame.
    Spiral,
    /// Launched toward the player's position at spawn time; flies straight.
    Homing,
}

/// Turn rate applied to spiral projectiles, in radians per frame.
const SPIRAL_TURN: f64 = 0.05;

/// A live projectile.
#[derive(Debug, Clone)]
pub struct Projectile {
    /// Current x position.
    pub x: f64,
    /// Current y position.
    pub y: f64,
    /// Velocity x component.
    pub vx: f64,
    /// Velocity y component.
    pub vy: f64,
    /// Motion kind.
    pub kind: ProjectileKind,
}

impl Projectile {
    /// Apply one frame of motion: translate by velocity, then curve spiral
    /// projectiles by the fixed turn rate.
    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        if self.kind == ProjectileKind::Spiral {
            let (sin, cos) = SPIRAL_TURN.sin_cos();
            let old_vx = self.vx;
            self.vx = self.vx * cos - self.vy * sin;
            self.vy = old_vx * sin + self.vy * cos;
        }
    }

    /// Distance from this projectile to a point.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        ((self.x - x).powi(2) + (self.y - y).powi(2)).sqrt()
    }
}
