use bevy::prelude::*;

pub mod body;
pub mod collision;
pub mod integrator;
pub mod render;
pub mod simulation;
pub mod systems;

pub use body::{Bodies, Body};
pub use collision::{resolve_all, resolve_pair};
pub use integrator::advance;
pub use simulation::{FrameCounter, step};

use crate::config::SandboxConfig;
use crate::error::ConfigError;
use simulation::{physics_step, spawn_bodies};

/// Headless core: owns the config and ball collection and steps them in
/// `FixedUpdate`. No window, no rendering.
///
/// Only constructible from a config that passed [`SandboxConfig::validate`].
pub struct PhysicsPlugin {
    config: SandboxConfig,
}

impl PhysicsPlugin {
    pub fn new(config: SandboxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }
}

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        // Construct-once: the collection exists before any Startup system runs
        let bodies = spawn_bodies(&self.config);
        app.insert_resource(self.config.clone())
            .insert_resource(bodies)
            .init_resource::<FrameCounter>()
            // one fixed tick = one frame of motion (rate set in main via Time::<Fixed>)
            .add_systems(FixedUpdate, physics_step);
    }
}

/// Plug this into a windowed App with `.add_plugins(SandboxPlugin::new(config)?)`:
/// the physics core plus disc rendering and the quit shortcut.
pub struct SandboxPlugin {
    physics: PhysicsPlugin,
}

impl SandboxPlugin {
    pub fn new(config: SandboxConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            physics: PhysicsPlugin::new(config)?,
        })
    }

    pub fn config(&self) -> &SandboxConfig {
        self.physics.config()
    }
}

impl Plugin for SandboxPlugin {
    fn build(&self, app: &mut App) {
        // already validated when `self.physics` was built
        let physics = PhysicsPlugin {
            config: self.physics.config.clone(),
        };
        app.add_plugins(physics)
            .add_systems(Startup, render::spawn_body_discs)
            .add_systems(
                Update,
                (
                    render::sync_transforms,
                    systems::exit_on_esc_or_q_if_native,
                ),
            );
    }
}
