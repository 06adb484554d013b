//! The live body collection and its externally consumed operations.
//!
//! `World` owns every [`Body`] exclusively; bodies leave it only through
//! merge absorption, event-horizon accretion, fault removal, or explicit
//! deletion. All external edits apply between ticks; the step pass in
//! [`step`] is the only writer while a tick is in flight.

use crate::model::body::{radius_from_mass, Body, BodyView};
use crate::model::camera::Camera;
use crate::model::config::{AppConfig, EvolutionConfig};
use crate::model::events::SimEvent;
use crate::model::stage::{self, Remnant, Stage, Transition};
use crate::model::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub mod scenario;
pub mod step;

pub use scenario::Scenario;

/// Per-body fault detected during a sub-step. Isolated at body
/// granularity: the offender is removed, the tick continues.
#[derive(Error, Debug)]
pub enum BodyFault {
    #[error("non-positive mass {0}")]
    NonPositiveMass(f64),
    #[error("non-finite kinematic state")]
    NonFinite,
}

/// Rejected external property edit. The world is left untouched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditError {
    #[error("unknown body {0}")]
    UnknownBody(Uuid),
    #[error("value must be a finite number")]
    NonFinite,
}

/// Editable numeric fields of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyProperty {
    Mass,
    PosX,
    PosY,
    VelX,
    VelY,
}

pub struct World {
    pub bodies: Vec<Body>,
    pub tick: u64,
    pub scenario: String,
    pub config: AppConfig,
    pub rng: ChaCha8Rng,
}

impl World {
    pub fn new(config: AppConfig) -> Self {
        let rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self {
            bodies: Vec::new(),
            tick: 0,
            scenario: String::new(),
            config,
            rng,
        }
    }

    /// Replaces the live collection with a named preset. Returns the
    /// preset's initial camera zoom.
    pub fn load_scenario(&mut self, name: &str) -> anyhow::Result<f64> {
        let scenario =
            Scenario::from_name(name).ok_or_else(|| anyhow::anyhow!("unknown scenario: {name}"))?;
        let (bodies, zoom) = scenario.build(&self.config, &mut self.rng);
        self.bodies = bodies;
        self.scenario = scenario.title().to_string();
        tracing::info!(scenario = %self.scenario, bodies = self.bodies.len(), "scenario loaded");
        Ok(zoom)
    }

    pub fn spawn_body(
        &mut self,
        position: Vec2,
        velocity: Vec2,
        mass: f64,
        color: (u8, u8, u8),
        stage: Option<Stage>,
        radius: Option<f64>,
    ) -> Uuid {
        let mut body = Body::new(position, velocity, mass, color);
        match stage {
            Some(stage) => {
                body = body.with_stage(stage);
            }
            None => {
                // New bodies settle into the stage their mass dictates.
                evolve_body(&mut body, &self.config.evolution, &mut Vec::new());
            }
        }
        if let Some(radius) = radius {
            body = body.with_radius(radius);
        }
        let id = body.id;
        self.bodies.push(body);
        id
    }

    /// User spawn at a world position: randomized mass and color, the way
    /// the playground seeds them.
    pub fn spawn_at(&mut self, position: Vec2) -> Uuid {
        let mass = self
            .rng
            .gen_range(self.config.world.spawn_mass_min..self.config.world.spawn_mass_max);
        let color = (
            self.rng.gen_range(50..=255),
            self.rng.gen_range(50..=255),
            self.rng.gen_range(50..=255),
        );
        self.spawn_body(position, Vec2::zeros(), mass, color, None, None)
    }

    pub fn body(&self, id: Uuid) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub(crate) fn body_mut(&mut self, id: Uuid) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn delete_body(&mut self, id: Uuid) -> bool {
        let before = self.bodies.len();
        self.bodies.retain(|b| b.id != id);
        self.bodies.len() < before
    }

    /// Nearest body whose screen-space distance from `screen` falls within
    /// its projected radius plus `margin` cells.
    pub fn select_body_near(&self, screen: Vec2, camera: &Camera, margin: f64) -> Option<Uuid> {
        let mut best: Option<(f64, Uuid)> = None;
        for body in &self.bodies {
            let dist = (camera.world_to_screen(body.position) - screen).norm();
            if dist < body.radius * camera.zoom + margin {
                match best {
                    Some((d, _)) if d <= dist => {}
                    _ => best = Some((dist, body.id)),
                }
            }
        }
        best.map(|(_, id)| id)
    }

    /// Applies a confirmed numeric edit. Non-finite values are rejected
    /// without mutating state; mass edits are floored at the configured
    /// minimum and re-run the stage table.
    pub fn set_body_property(
        &mut self,
        id: Uuid,
        property: BodyProperty,
        value: f64,
    ) -> Result<Vec<SimEvent>, EditError> {
        if !value.is_finite() {
            return Err(EditError::NonFinite);
        }
        let min_mass = self.config.physics.min_mass;
        let evolution = self.config.evolution.clone();
        let body = self.body_mut(id).ok_or(EditError::UnknownBody(id))?;
        let mut events = Vec::new();
        match property {
            BodyProperty::Mass => {
                body.mass = value.max(min_mass);
                body.refresh_radius();
                evolve_body(body, &evolution, &mut events);
            }
            BodyProperty::PosX => body.position.x = value,
            BodyProperty::PosY => body.position.y = value,
            BodyProperty::VelX => body.velocity.x = value,
            BodyProperty::VelY => body.velocity.y = value,
        }
        Ok(events)
    }

    /// Multiplies the selected body's mass (the god-mode nudge keys),
    /// re-deriving radius and re-running the stage table.
    pub fn nudge_mass(&mut self, id: Uuid, factor: f64) -> Vec<SimEvent> {
        let min_mass = self.config.physics.min_mass;
        let evolution = self.config.evolution.clone();
        let mut events = Vec::new();
        if let Some(body) = self.body_mut(id) {
            body.mass = (body.mass * factor).max(min_mass);
            body.refresh_radius();
            evolve_body(body, &evolution, &mut events);
        }
        events
    }

    pub fn snapshot(&self, selected: Option<Uuid>) -> WorldSnapshot {
        WorldSnapshot {
            tick: self.tick,
            scenario: self.scenario.clone(),
            selected,
            bodies: self.bodies.iter().map(BodyView::from).collect(),
        }
    }
}

/// Runs the stage table on a body after a mass change, applying color and
/// radius consequences. Supernova rows freeze the body and shed mass here.
pub(crate) fn evolve_body(body: &mut Body, cfg: &EvolutionConfig, events: &mut Vec<SimEvent>) {
    match stage::advance(body.stage, body.mass, cfg) {
        Transition::None => {}
        Transition::Advanced { from, to } => {
            body.stage = to;
            body.apply_stage_color();
            body.refresh_radius();
            tracing::debug!(body = %body.id, ?from, ?to, "stage advance");
            events.push(SimEvent::StageAdvance {
                id: body.id,
                from,
                to,
            });
        }
        Transition::Supernova { from, remnant } => {
            body.supernova_timer = cfg.supernova_duration;
            body.mass *= cfg.supernova_retention;
            body.stage = match remnant {
                Remnant::BlackHole => Stage::BlackHole,
                Remnant::NeutronStar => Stage::NeutronStar,
            };
            body.apply_stage_color();
            match remnant {
                // Compact-remnant override, not mass-derived.
                Remnant::NeutronStar => body.radius = cfg.neutron_star_radius,
                Remnant::BlackHole => body.radius = radius_from_mass(body.mass),
            }
            tracing::debug!(body = %body.id, ?from, stage = ?body.stage, "supernova");
            events.push(SimEvent::Supernova {
                id: body.id,
                remnant: body.stage,
            });
        }
    }
}

/// Read-only view of the world handed to rendering and headless output.
#[derive(Clone, Debug, Serialize)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub scenario: String,
    pub selected: Option<Uuid>,
    pub bodies: Vec<BodyView>,
}
