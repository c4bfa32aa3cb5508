use bevy::prelude::*;
use gravity_balls::config::WINDOW_TITLE;
use gravity_balls::{ConfigError, SandboxConfig, SandboxPlugin};

fn main() -> Result<(), ConfigError> {
    // Reject inverted bounds before a window ever opens
    let sandbox = SandboxPlugin::new(SandboxConfig::default())?;
    let config = sandbox.config().clone();

    let mut window = Window {
        title: WINDOW_TITLE.into(),
        resizable: false,
        ..default()
    };
    window.resolution.set(config.width, config.height);

    App::new()
        // Solid black background
        .insert_resource(ClearColor(Color::BLACK))
        // Configure the fixed timestep clock (used in FixedUpdate)
        .insert_resource(Time::<Fixed>::from_hz(config.physics_hz))
        // Bevy's core engine features
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window),
            ..default()
        }))
        // Balls, physics tick and disc rendering
        .add_plugins(sandbox)
        .run();

    Ok(())
}
