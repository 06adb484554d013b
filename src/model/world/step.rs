//! One simulation tick: sub-stepped integration and collision resolution.
//!
//! The update is single-threaded and order-deterministic. Removals during
//! the pairwise scan are deferred through an id set and compacted after
//! each sub-step, so a body absorbed mid-scan is never dereferenced again.

use crate::model::body::radius_from_mass;
use crate::model::events::SimEvent;
use crate::model::stage::Stage;
use crate::model::world::{evolve_body, BodyFault, World};
use crate::model::Vec2;
use std::collections::HashSet;
use uuid::Uuid;

impl World {
    /// Advances the simulation by one rendered frame.
    ///
    /// Supernova timers run on frame cadence, then the configured number
    /// of integrator+resolver sub-steps execute with
    /// `dt = time_step / sub_steps`. A body currently held by the
    /// interaction layer is skipped by the integrator but still acts as a
    /// force source and collision partner for everyone else.
    ///
    /// Per-body faults never abort the frame: the offender is removed and
    /// the remainder of the tick proceeds.
    pub fn update(&mut self, held: Option<Uuid>) -> anyhow::Result<Vec<SimEvent>> {
        self.tick += 1;
        let mut events = Vec::new();

        for body in &mut self.bodies {
            if body.supernova_timer > 0 {
                body.supernova_timer -= 1;
            }
        }

        let sub_steps = self.config.physics.sub_steps.max(1);
        let dt = self.config.physics.time_step / sub_steps as f64;
        for _ in 0..sub_steps {
            self.sub_step(dt, held, &mut events);
        }
        Ok(events)
    }

    fn sub_step(&mut self, dt: f64, held: Option<Uuid>, events: &mut Vec<SimEvent>) {
        let mut removed: HashSet<Uuid> = HashSet::new();
        // Stable iteration over the bodies present at sub-step start.
        let count = self.bodies.len();
        for i in 0..count {
            let (id, frozen) = {
                let body = &self.bodies[i];
                (body.id, body.is_frozen())
            };
            if frozen || removed.contains(&id) || held == Some(id) {
                continue;
            }
            if let Err(fault) = self.step_body(i, dt, &mut removed, events) {
                tracing::warn!(body = %id, %fault, "removing degenerate body");
                removed.insert(id);
                events.push(SimEvent::FaultRemoved {
                    id,
                    reason: fault.to_string(),
                });
            }
        }
        if !removed.is_empty() {
            self.bodies.retain(|b| !removed.contains(&b.id));
        }
    }

    /// Integrates one free body: folds in gravity from every live partner,
    /// resolving event-horizon accretion and merges along the way, then
    /// advances kinematics with semi-implicit Euler and records the trail.
    fn step_body(
        &mut self,
        i: usize,
        dt: f64,
        removed: &mut HashSet<Uuid>,
        events: &mut Vec<SimEvent>,
    ) -> Result<(), BodyFault> {
        let g = self.config.physics.gravity;
        let evolution = self.config.evolution.clone();
        let trail_capacity = self.config.physics.trail_capacity;
        let count = self.bodies.len();

        let self_id = self.bodies[i].id;
        self.check_body(i)?;

        let mut force = Vec2::zeros();
        for j in 0..count {
            if j == i {
                continue;
            }
            let (o_id, o_pos, o_vel, o_mass, o_radius, o_stage, o_frozen) = {
                let other = &self.bodies[j];
                (
                    other.id,
                    other.position,
                    other.velocity,
                    other.mass,
                    other.radius,
                    other.stage,
                    other.is_frozen(),
                )
            };
            if o_frozen || removed.contains(&o_id) {
                continue;
            }

            let (s_pos, s_vel, s_mass, s_radius, s_stage) = {
                let body = &self.bodies[i];
                (
                    body.position,
                    body.velocity,
                    body.mass,
                    body.radius,
                    body.stage,
                )
            };
            let r_vec = o_pos - s_pos;
            let r = r_vec.norm();

            // Event horizon: a black hole absorbs unconditionally,
            // whichever side of the pair is being stepped. The stepped
            // body takes precedence when both qualify.
            if s_stage == Stage::BlackHole && r < s_radius {
                let body = &mut self.bodies[i];
                body.mass += o_mass;
                body.radius = radius_from_mass(body.mass);
                removed.insert(o_id);
                events.push(SimEvent::Accretion {
                    black_hole: self_id,
                    absorbed: o_id,
                });
                continue;
            }
            if o_stage == Stage::BlackHole && r < o_radius {
                let other = &mut self.bodies[j];
                other.mass += s_mass;
                other.radius = radius_from_mass(other.mass);
                removed.insert(self_id);
                events.push(SimEvent::Accretion {
                    black_hole: o_id,
                    absorbed: self_id,
                });
                return Ok(());
            }

            // Coincident centers contribute no force; the resolver owns
            // close encounters, not a softening term.
            if r > 0.0 {
                force += (g * s_mass * o_mass / (r * r * r)) * r_vec;
            }

            if r > 0.0 && r < s_radius + o_radius && merge_authority(s_mass, self_id, o_mass, o_id)
            {
                let new_mass = s_mass + o_mass;
                let body = &mut self.bodies[i];
                body.radius = (s_radius.powi(3) + o_radius.powi(3)).cbrt();
                body.velocity = (s_vel * s_mass + o_vel * o_mass) / new_mass;
                body.position = (s_pos * s_mass + o_pos * o_mass) / new_mass;
                body.mass = new_mass;
                removed.insert(o_id);
                events.push(SimEvent::Merge {
                    survivor: self_id,
                    absorbed: o_id,
                });
                evolve_body(&mut self.bodies[i], &evolution, events);
                if self.bodies[i].is_frozen() {
                    // The merge lit a supernova; the remnant sits out the
                    // rest of the sub-step.
                    return Ok(());
                }
            }
        }

        let body = &mut self.bodies[i];
        body.velocity += force / body.mass * dt;
        body.position += body.velocity * dt;
        self.check_body(i)?;
        self.bodies[i].push_trail(trail_capacity);
        Ok(())
    }

    fn check_body(&self, i: usize) -> Result<(), BodyFault> {
        let body = &self.bodies[i];
        if !(body.mass.is_finite() && body.mass > 0.0) {
            return Err(BodyFault::NonPositiveMass(body.mass));
        }
        let finite = body.position.x.is_finite()
            && body.position.y.is_finite()
            && body.velocity.x.is_finite()
            && body.velocity.y.is_finite();
        if !finite {
            return Err(BodyFault::NonFinite);
        }
        Ok(())
    }
}

/// Merge authority tie-break: the heavier body initiates; exact ties go to
/// the lexicographically smaller id so a pair merges at most once.
fn merge_authority(self_mass: f64, self_id: Uuid, other_mass: f64, other_id: Uuid) -> bool {
    self_mass > other_mass || (self_mass == other_mass && self_id < other_id)
}
