use bevy::prelude::*;
use rand::prelude::*;
use tracing::{debug, info};

use super::body::Bodies;
use super::collision::resolve_all;
use super::integrator::advance;
use crate::config::SandboxConfig;

/// Counts fixed ticks since startup.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct FrameCounter(pub u64);

/// One frame of motion: integrate every body in index order, then resolve
/// all overlapping pairs once. No dependence on wall-clock time.
pub fn step(bodies: &mut Bodies, config: &SandboxConfig) {
    let bodies = bodies.as_mut_slice();
    for body in bodies.iter_mut() {
        advance(body, config);
    }
    resolve_all(bodies, config.separation_margin);
}

/// Build the ball collection once. A configured seed makes the scene repeatable;
/// otherwise a fresh seed is drawn and logged so a run can be reproduced.
pub fn spawn_bodies(config: &SandboxConfig) -> Bodies {
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let bodies = Bodies::random(config, &mut rng);

    let b = config.bounds_for(config.ball_radius);
    info!(
        balls = bodies.len(),
        seed,
        "spawned bodies in {}x{} world (x {}..{}, y {}..{})",
        config.width,
        config.height,
        b.left,
        b.right,
        b.floor,
        b.ceiling
    );
    bodies
}

/// Fixed-timestep system (`FixedUpdate`): one tick = one `step`.
///
/// Bevy's fixed clock runs extra ticks after a slow render frame to catch up,
/// unlike a plain sleep between frames which would just drift.
pub fn physics_step(
    config: Res<SandboxConfig>,
    mut bodies: ResMut<Bodies>,
    mut frames: ResMut<FrameCounter>,
) {
    step(&mut bodies, &config);
    frames.0 += 1;

    if frames.0 % 500 == 0 {
        debug!(frame = frames.0, resting = bodies.resting(), "physics tick");
    }
}
