pub mod body;
pub mod camera;
pub mod config;
pub mod events;
pub mod interaction;
pub mod stage;
pub mod world;

/// 2D world-space vector used throughout the engine.
pub type Vec2 = nalgebra::Vector2<f64>;
