use bevy::prelude::*;
use rand::prelude::*;

use crate::config::SandboxConfig;

/// One simulated ball. Plain data: the integrator and collision resolver
/// mutate `position`/`velocity`, the renderer only reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Center, world units, origin at the window center.
    pub position: Vec2,
    /// World units per frame.
    pub velocity: Vec2,
    radius: f32,
    color: Color,
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: Color) -> Self {
        Self {
            position,
            velocity,
            radius,
            color,
        }
    }

    /// Draw one body the way the sandbox seeds its scene: integer spawn point
    /// in the upper-central band, per-axis speed with a random sign, random color.
    pub fn random(config: &SandboxConfig, rng: &mut StdRng) -> Self {
        let w = config.width as i32;
        let h = config.height as i32;
        // floor division, so the band for an 800 wide world is [-267, 266]
        let x = rng.random_range((-w).div_euclid(3)..=w.div_euclid(3));
        let y = rng.random_range(h.div_euclid(4)..=h.div_euclid(2));

        let (lo, hi) = config.speed_range;
        let mut speed = || {
            let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            sign * rng.random_range(lo..=hi)
        };
        let velocity = Vec2::new(speed(), speed());

        let color = Color::srgb(rng.random(), rng.random(), rng.random());

        Self::new(
            Vec2::new(x as f32, y as f32),
            velocity,
            config.ball_radius,
            color,
        )
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// The whole ball collection. Built once at startup, fixed size for the life
/// of the app; the fixed-tick step is the only writer. Bodies can be mutated
/// in place through [`Bodies::as_mut_slice`] but never added or removed.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct Bodies(Vec<Body>);

impl Bodies {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self(bodies)
    }

    pub fn random(config: &SandboxConfig, rng: &mut StdRng) -> Self {
        Self((0..config.num_balls).map(|_| Body::random(config, rng)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.0
    }

    /// Number of bodies currently not moving at all.
    pub fn resting(&self) -> usize {
        self.0.iter().filter(|b| b.velocity == Vec2::ZERO).count()
    }
}
