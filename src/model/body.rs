//! The sole persistent entity of the simulation.

use crate::model::stage::Stage;
use crate::model::Vec2;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Body {
    pub id: Uuid,
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f64,
    pub radius: f64,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub stage: Stage,
    /// Tick countdown while a supernova transition plays. Non-zero means
    /// frozen: no integration, no collision.
    pub supernova_timer: u32,
    /// Past positions for rendering only. Never read by physics.
    pub trail: VecDeque<Vec2>,
}

impl Body {
    pub fn new(position: Vec2, velocity: Vec2, mass: f64, color: (u8, u8, u8)) -> Self {
        Self {
            id: Uuid::new_v4(),
            position,
            velocity,
            mass,
            radius: radius_from_mass(mass),
            r: color.0,
            g: color.1,
            b: color.2,
            stage: Stage::Planet,
            supernova_timer: 0,
            trail: VecDeque::new(),
        }
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self.apply_stage_color();
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Frozen bodies play a supernova and are excluded from force
    /// computation and collision.
    pub fn is_frozen(&self) -> bool {
        self.supernova_timer > 0
    }

    /// Re-derives the radius from the current mass. Compact remnants keep
    /// their override instead; callers that pin a radius must not call this.
    pub fn refresh_radius(&mut self) {
        if self.stage != Stage::NeutronStar {
            self.radius = radius_from_mass(self.mass);
        }
    }

    /// Adopts the fixed display color of the current stage. Planets keep
    /// their spawn color.
    pub fn apply_stage_color(&mut self) {
        if let Some((r, g, b)) = self.stage.color() {
            self.r = r;
            self.g = g;
            self.b = b;
        }
    }

    pub fn push_trail(&mut self, capacity: usize) {
        self.trail.push_back(self.position);
        while self.trail.len() > capacity {
            self.trail.pop_front();
        }
    }

    pub fn color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// Radius derivation used everywhere a mass changes: `mass^(1/3)`.
pub fn radius_from_mass(mass: f64) -> f64 {
    mass.cbrt()
}

/// Read-only per-body view handed to the UI layer.
#[derive(Clone, Debug, Serialize)]
pub struct BodyView {
    pub id: Uuid,
    pub stage: Stage,
    pub mass: f64,
    pub position: [f64; 2],
    pub velocity: [f64; 2],
    pub radius: f64,
    pub color: (u8, u8, u8),
    pub supernova_timer: u32,
    pub trail_len: usize,
}

impl From<&Body> for BodyView {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id,
            stage: body.stage,
            mass: body.mass,
            position: [body.position.x, body.position.y],
            velocity: [body.velocity.x, body.velocity.y],
            radius: body.radius,
            color: (body.r, body.g, body.b),
            supernova_timer: body.supernova_timer,
            trail_len: body.trail.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_body_derives_radius_from_mass() {
        let body = Body::new(Vec2::zeros(), Vec2::zeros(), 1000.0, (10, 20, 30));
        assert!((body.radius - 10.0).abs() < 1e-12);
        assert_eq!(body.stage, Stage::Planet);
    }

    #[test]
    fn test_trail_is_bounded_fifo() {
        let mut body = Body::new(Vec2::zeros(), Vec2::zeros(), 100.0, (0, 0, 0));
        for i in 0..600 {
            body.position = Vec2::new(i as f64, 0.0);
            body.push_trail(500);
        }
        assert_eq!(body.trail.len(), 500);
        assert_eq!(body.trail.front().unwrap().x, 100.0);
    }

    #[test]
    fn test_neutron_star_radius_is_pinned() {
        let mut body = Body::new(Vec2::zeros(), Vec2::zeros(), 1_500_000.0, (0, 0, 0))
            .with_stage(Stage::NeutronStar)
            .with_radius(4.0);
        body.mass += 100_000.0;
        body.refresh_radius();
        assert_eq!(body.radius, 4.0);
    }
}
