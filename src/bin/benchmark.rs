//! Headless benchmark: run the fixed-tick physics schedule for a set number of
//! frames without a window and report timing.
//!
//! With `--features profile` each report is also printed as JSON.

use std::time::Instant;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use gravity_balls::physics::FrameCounter;
use gravity_balls::physics::simulation::spawn_bodies;
use gravity_balls::{Bodies, ConfigError, PhysicsPlugin, SandboxConfig};
use tracing::info;

const FRAMES: u64 = 10_000;
const SEED: u64 = 0x5EED;
const BALL_COUNTS: [usize; 3] = [12, 100, 500];

#[cfg_attr(feature = "profile", derive(serde::Serialize))]
#[derive(Debug)]
struct BenchReport {
    balls: usize,
    frames: u64,
    total_ms: f64,
    per_frame_us: f64,
    resting: usize,
}

/// Swap a fresh config + scene into the app and drive `FixedUpdate` directly,
/// one schedule run per frame.
fn run(app: &mut App, config: SandboxConfig) -> Result<BenchReport, ConfigError> {
    config.validate()?;
    let balls = config.num_balls;

    let world = app.world_mut();
    world.insert_resource(spawn_bodies(&config));
    world.insert_resource(config);
    world.insert_resource(FrameCounter::default());

    let start = Instant::now();
    for _ in 0..FRAMES {
        world.run_schedule(FixedUpdate);
    }
    let total_ms = start.elapsed().as_secs_f64() * 1e3;

    let frames = world.resource::<FrameCounter>().0;
    Ok(BenchReport {
        balls,
        frames,
        total_ms,
        per_frame_us: total_ms * 1e3 / frames.max(1) as f64,
        resting: world.resource::<Bodies>().resting(),
    })
}

#[cfg(feature = "profile")]
fn emit_json(report: &BenchReport) {
    match serde_json::to_string(report) {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::warn!("could not serialize report: {err}"),
    }
}

#[cfg(not(feature = "profile"))]
fn emit_json(_report: &BenchReport) {}

fn main() -> Result<(), ConfigError> {
    let base = SandboxConfig {
        seed: Some(SEED),
        ..default()
    };
    let physics = PhysicsPlugin::new(base.clone())?;

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default(), physics));

    for balls in BALL_COUNTS {
        let report = run(
            &mut app,
            SandboxConfig {
                num_balls: balls,
                ..base.clone()
            },
        )?;
        info!(
            balls = report.balls,
            frames = report.frames,
            resting = report.resting,
            "{:.1} ms total, {:.2} us/frame",
            report.total_ms,
            report.per_frame_us
        );
        emit_json(&report);
    }
    Ok(())
}
