use bevy::prelude::*;

use crate::error::ConfigError;

/// Window
pub const WINDOW_TITLE: &str = "Gravity Balls — Physics Sandbox";
pub const WIDTH: f32 = 800.0;
pub const HEIGHT: f32 = 600.0;

/// Physics timing: one fixed tick = one frame of motion (20 ms)
pub const PHYSICS_HZ: f64 = 50.0;

/// Balls
pub const NUM_BALLS: usize = 12;
pub const BALL_SIZE: f32 = 20.0; // radius, world units

/// Gravity (world units per frame squared; +Y up)
pub const GRAVITY: f32 = 0.3;
/// Energy kept on a floor bounce (1 = perfect, <1 = damped)
pub const BOUNCE_LOSS: f32 = 0.8;
/// Horizontal speed kept per floor contact
pub const FRICTION: f32 = 0.98;
/// Energy kept on a wall or ceiling bounce
pub const WALL_BOUNCE_LOSS: f32 = 0.9;
/// Initial speed per axis, drawn uniformly, random sign
pub const SPEED_RANGE: (f32, f32) = (2.0, 5.0);

/// Below these speeds a body on the floor is snapped to rest
pub const REST_SPEED_Y: f32 = 0.5;
pub const REST_SPEED_X: f32 = 0.3;

/// Extra push-apart distance on contact so the pair doesn't re-trigger next frame
pub const SEPARATION_MARGIN: f32 = 1.0;

/// Everything the sandbox reads at startup. Defaults to the constants above;
/// tests and the benchmark build variants with struct update syntax.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SandboxConfig {
    pub width: f32,
    pub height: f32,
    pub num_balls: usize,
    pub ball_radius: f32,
    pub gravity: f32,
    pub bounce_loss: f32,
    pub friction: f32,
    pub wall_bounce_loss: f32,
    pub speed_range: (f32, f32),
    pub rest_speed_y: f32,
    pub rest_speed_x: f32,
    pub separation_margin: f32,
    pub physics_hz: f64,
    /// Fixed RNG seed; `None` draws a fresh one at startup.
    pub seed: Option<u64>,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            num_balls: NUM_BALLS,
            ball_radius: BALL_SIZE,
            gravity: GRAVITY,
            bounce_loss: BOUNCE_LOSS,
            friction: FRICTION,
            wall_bounce_loss: WALL_BOUNCE_LOSS,
            speed_range: SPEED_RANGE,
            rest_speed_y: REST_SPEED_Y,
            rest_speed_x: REST_SPEED_X,
            separation_margin: SEPARATION_MARGIN,
            physics_hz: PHYSICS_HZ,
            seed: None,
        }
    }
}

impl SandboxConfig {
    /// Reject configurations that would give inverted clamp bounds or
    /// meaningless draws. Call once before building the app.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = self.ball_radius;
        if !(r.is_finite() && r > 0.0) {
            return Err(ConfigError::NonPositiveRadius(r));
        }
        for (axis, extent) in [("width", self.width), ("height", self.height)] {
            if !(extent.is_finite() && extent > 2.0 * r) {
                return Err(ConfigError::WorldTooSmall {
                    axis,
                    extent,
                    radius: r,
                });
            }
        }

        let (lo, hi) = self.speed_range;
        if !(lo.is_finite() && hi.is_finite() && lo >= 0.0 && lo <= hi) {
            return Err(ConfigError::InvalidSpeedRange { lo, hi });
        }

        for (name, value) in [
            ("gravity", self.gravity),
            ("bounce_loss", self.bounce_loss),
            ("friction", self.friction),
            ("wall_bounce_loss", self.wall_bounce_loss),
            ("rest_speed_y", self.rest_speed_y),
            ("rest_speed_x", self.rest_speed_x),
            ("separation_margin", self.separation_margin),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidFactor { name, value });
            }
        }

        if !(self.physics_hz.is_finite() && self.physics_hz > 0.0) {
            return Err(ConfigError::InvalidTickRate(self.physics_hz));
        }
        Ok(())
    }

    /// Clamp bounds for a body of `radius`.
    pub fn bounds_for(&self, radius: f32) -> WorldBounds {
        let half = Vec2::new(self.width, self.height) * 0.5;
        WorldBounds {
            left: -half.x + radius,
            right: half.x - radius,
            floor: -half.y + radius,
            ceiling: half.y - radius,
        }
    }
}

/// Axis-aligned limits for a body's center (origin at the window center).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldBounds {
    pub left: f32,
    pub right: f32,
    pub floor: f32,
    pub ceiling: f32,
}
