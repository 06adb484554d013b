//! Drag-and-throw controller.
//!
//! Owns the "held" body concept: while a body is held its position is
//! written directly from the cursor each tick and the integrator leaves it
//! alone. Release converts the sampled cursor displacement into a throw
//! velocity. The formula is deliberately not time-normalized; it depends
//! on the sampling window, which defines the feel of the interaction.

use crate::model::camera::Camera;
use crate::model::config::InteractionConfig;
use crate::model::world::World;
use crate::model::Vec2;
use std::collections::VecDeque;
use uuid::Uuid;

pub struct DragController {
    held: Option<Uuid>,
    /// Screen-space cursor history, FIFO, bounded.
    samples: VecDeque<Vec2>,
    capacity: usize,
}

impl DragController {
    pub fn new(capacity: usize) -> Self {
        Self {
            held: None,
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn held(&self) -> Option<Uuid> {
        self.held
    }

    /// Grabs a body: history is cleared and the initial cursor recorded.
    pub fn begin(&mut self, id: Uuid, cursor: Vec2) {
        self.held = Some(id);
        self.samples.clear();
        self.push_sample(cursor);
    }

    /// One tick of an active drag: pins the body to the cursor's world
    /// position and records the screen-space cursor. A body that was
    /// absorbed while held silently ends the gesture.
    pub fn drag(&mut self, world: &mut World, camera: &Camera, cursor: Vec2) {
        let Some(id) = self.held else { return };
        match world.body_mut(id) {
            Some(body) => {
                body.position = camera.screen_to_world(cursor);
                self.push_sample(cursor);
            }
            None => self.reset(),
        }
    }

    /// Releases the held body, applying the throw impulse when at least
    /// two samples exist. Returns whether a throw was applied.
    pub fn release(&mut self, world: &mut World, camera: &Camera, cfg: &InteractionConfig) -> bool {
        let Some(id) = self.held else { return false };
        let thrown = if self.samples.len() > 1 {
            match (self.samples.front(), self.samples.back()) {
                (Some(&first), Some(&last)) => {
                    if let Some(body) = world.body_mut(id) {
                        let sweep = camera.screen_to_world(last) - camera.screen_to_world(first);
                        body.velocity = sweep * cfg.throw_multiplier * cfg.throw_scale;
                        true
                    } else {
                        false
                    }
                }
                _ => false,
            }
        } else {
            false
        };
        self.reset();
        thrown
    }

    /// Drops the gesture if the held body no longer exists (merged,
    /// accreted, or removed by a fault while held).
    pub fn sync(&mut self, world: &World) {
        if let Some(id) = self.held {
            if world.body(id).is_none() {
                self.reset();
            }
        }
    }

    fn push_sample(&mut self, cursor: Vec2) {
        self.samples.push_back(cursor);
        while self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    fn reset(&mut self) {
        self.held = None;
        self.samples.clear();
    }
}
