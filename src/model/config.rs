//! Configuration management for simulation parameters.
//!
//! Strongly-typed configuration structures that map to the `config.toml`
//! file. All engine constants can be customized through this system.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! scenario = "solar-system"
//! seed = 42
//!
//! [physics]
//! gravity = 0.05
//! time_step = 0.5
//! sub_steps = 5
//!
//! [evolution]
//! black_hole_mass = 2000000.0
//! ```

use serde::{Deserialize, Serialize};

/// World-level configuration: initial scenario and determinism controls.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorldConfig {
    /// Scenario preset loaded at startup.
    pub scenario: String,
    /// Seed for scenario generation and user spawns. `None` means
    /// non-reproducible runs.
    pub seed: Option<u64>,
    /// Spawn mass range for user-placed bodies.
    pub spawn_mass_min: f64,
    pub spawn_mass_max: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            scenario: "solar-system".to_string(),
            seed: None,
            spawn_mass_min: 200.0,
            spawn_mass_max: 500.0,
        }
    }
}

/// Integrator and collision constants.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PhysicsConfig {
    /// Gravitational constant of the sandbox (not SI).
    pub gravity: f64,
    /// Simulated time advanced per rendered frame.
    pub time_step: f64,
    /// Number of integrator+resolver sub-steps per frame. Each sub-step
    /// uses `time_step / sub_steps`.
    pub sub_steps: u32,
    /// Floor applied to externally edited masses. Physics never produces
    /// masses below this on its own.
    pub min_mass: f64,
    /// Trail ring-buffer capacity per body.
    pub trail_capacity: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.05,
            time_step: 0.5,
            sub_steps: 5,
            min_mass: 1.0,
            trail_capacity: 500,
        }
    }
}

/// Stellar evolution thresholds and supernova constants.
///
/// Thresholds are checked after every mass-increasing event; see
/// [`crate::model::stage`] for the transition table itself.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EvolutionConfig {
    pub red_dwarf_mass: f64,
    pub star_mass: f64,
    pub red_giant_mass: f64,
    pub blue_giant_mass: f64,
    pub black_hole_mass: f64,
    pub chandrasekhar_limit: f64,
    /// Fraction of mass retained through a supernova.
    pub supernova_retention: f64,
    /// Ticks a body stays frozen while its supernova plays out.
    pub supernova_duration: u32,
    /// Fixed radius override for neutron stars (compact remnant).
    pub neutron_star_radius: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            red_dwarf_mass: 80_000.0,
            star_mass: 200_000.0,
            red_giant_mass: 800_000.0,
            blue_giant_mass: 1_400_000.0,
            black_hole_mass: 2_000_000.0,
            chandrasekhar_limit: 1_400_000.0,
            supernova_retention: 0.8,
            supernova_duration: 120,
            neutron_star_radius: 4.0,
        }
    }
}

/// Drag-and-throw feel constants.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InteractionConfig {
    /// Scale factor from sampled cursor displacement to release velocity.
    pub throw_multiplier: f64,
    /// Extra gain applied on top of `throw_multiplier`.
    pub throw_scale: f64,
    /// Cursor history samples kept while dragging.
    pub drag_samples: usize,
    /// Screen-space selection margin around a body, in cells.
    pub hit_margin: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            throw_multiplier: 0.2,
            throw_scale: 5.0,
            drag_samples: 10,
            hit_margin: 5.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub physics: PhysicsConfig,
    pub evolution: EvolutionConfig,
    pub interaction: InteractionConfig,
    pub target_fps: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            physics: PhysicsConfig::default(),
            evolution: EvolutionConfig::default(),
            interaction: InteractionConfig::default(),
            target_fps: 60,
        }
    }
}

impl AppConfig {
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = AppConfig::default();
        assert_eq!(config.physics.gravity, 0.05);
        assert_eq!(config.physics.sub_steps, 5);
        assert_eq!(config.evolution.black_hole_mass, 2_000_000.0);
        assert_eq!(config.interaction.drag_samples, 10);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let text = config.to_toml().expect("serialize");
        let back = AppConfig::from_toml(&text).expect("parse");
        assert_eq!(back.evolution.star_mass, config.evolution.star_mass);
        assert_eq!(back.physics.time_step, config.physics.time_step);
    }

    #[test]
    fn test_partial_toml_rejected_cleanly() {
        // Missing sections are an error, not a silent default.
        assert!(AppConfig::from_toml("[world]\nscenario = \"playground\"").is_err());
    }
}
