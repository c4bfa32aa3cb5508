pub mod config;
pub mod error;
pub mod physics;

pub use config::{SandboxConfig, WorldBounds};
pub use error::ConfigError;
pub use physics::{Bodies, Body, PhysicsPlugin, SandboxPlugin};
