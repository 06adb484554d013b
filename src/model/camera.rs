//! Bidirectional affine map between world and screen coordinates.
//!
//! `world = (screen - screen_center) / zoom + offset`
//! `screen = (world - offset) * zoom + screen_center`

use crate::model::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Camera {
    pub zoom: f64,
    pub offset: Vec2,
    pub screen_center: Vec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            offset: Vec2::zeros(),
            screen_center: Vec2::zeros(),
        }
    }
}

impl Camera {
    pub fn new(screen_width: f64, screen_height: f64) -> Self {
        Self {
            zoom: 1.0,
            offset: Vec2::new(screen_width / 2.0, screen_height / 2.0),
            screen_center: Vec2::new(screen_width / 2.0, screen_height / 2.0),
        }
    }

    /// Updates the screen center when the viewport is resized.
    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.screen_center = Vec2::new(width / 2.0, height / 2.0);
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.screen_center) / self.zoom + self.offset
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        (world - self.offset) * self.zoom + self.screen_center
    }

    /// Multiplies the zoom while keeping the world point under `cursor`
    /// fixed on screen: the offset absorbs the difference between the
    /// pre- and post-zoom cursor projections.
    pub fn zoom_at(&mut self, cursor: Vec2, factor: f64) {
        let world_before = self.screen_to_world(cursor);
        self.zoom *= factor;
        let world_after = self.screen_to_world(cursor);
        self.offset += world_before - world_after;
    }

    /// One frame of an active pan gesture: translates the offset by the
    /// screen-space cursor delta scaled into world units.
    pub fn pan_step(&mut self, prev_cursor: Vec2, cursor: Vec2) {
        self.offset += (prev_cursor - cursor) / self.zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut camera = Camera::new(100.0, 80.0);
        camera.zoom = 2.5;
        camera.offset = Vec2::new(17.0, -42.0);
        let s = Vec2::new(33.0, 71.0);
        let back = camera.world_to_screen(camera.screen_to_world(s));
        assert!((back - s).norm() < 1e-9);
    }

    #[test]
    fn test_zoom_preserves_cursor_world_point() {
        let mut camera = Camera::new(100.0, 80.0);
        let cursor = Vec2::new(70.0, 20.0);
        let before = camera.screen_to_world(cursor);
        camera.zoom_at(cursor, 1.1);
        camera.zoom_at(cursor, 1.1);
        let after = camera.screen_to_world(cursor);
        assert!((before - after).norm() < 1e-9);
    }

    #[test]
    fn test_pan_moves_offset_in_world_units() {
        let mut camera = Camera::new(100.0, 80.0);
        camera.zoom = 2.0;
        camera.pan_step(Vec2::new(10.0, 10.0), Vec2::new(14.0, 10.0));
        assert!((camera.offset.x - (50.0 - 2.0)).abs() < 1e-12);
        assert_eq!(camera.offset.y, 40.0);
    }
}
