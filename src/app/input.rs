//! Maps raw terminal events onto the engine's interface.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::style::Color;

use crate::app::state::{App, PropertyEdit};
use crate::model::world::BodyProperty;
use crate::model::Vec2;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.edit.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                let name = crate::model::world::Scenario::ALL[idx].title().to_string();
                if let Err(e) = self.load_scenario(&name) {
                    self.log(format!("scenario failed: {e}"), Color::Red);
                }
            }
            KeyCode::Delete | KeyCode::Char('d') => {
                if let Some(id) = self.selected.take() {
                    self.world.delete_body(id);
                    self.edit = None;
                    self.drag.sync(&self.world);
                    self.log("Body deleted", Color::Red);
                }
            }
            // Mass nudges act live; precise edits require pausing.
            KeyCode::Up if !self.paused => self.nudge(1.1),
            KeyCode::Down if !self.paused => self.nudge(0.9),
            // Property edits only while paused with a selection.
            KeyCode::Char('m') => self.begin_edit(BodyProperty::Mass),
            KeyCode::Char('x') => self.begin_edit(BodyProperty::PosX),
            KeyCode::Char('y') => self.begin_edit(BodyProperty::PosY),
            KeyCode::Char('u') => self.begin_edit(BodyProperty::VelX),
            KeyCode::Char('v') => self.begin_edit(BodyProperty::VelY),
            _ => {}
        }
    }

    fn nudge(&mut self, factor: f64) {
        if let Some(id) = self.selected {
            let events = self.world.nudge_mass(id, factor);
            for event in events {
                let (msg, color) = super::describe_event(&event);
                self.log(msg, color);
            }
        }
    }

    fn begin_edit(&mut self, property: BodyProperty) {
        if self.paused && self.selected.is_some() {
            self.edit = Some(PropertyEdit {
                property,
                buffer: String::new(),
            });
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.edit = None,
            KeyCode::Backspace => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.buffer.pop();
                }
            }
            KeyCode::Char(c) if "0123456789.-".contains(c) => {
                if let Some(edit) = self.edit.as_mut() {
                    edit.buffer.push(c);
                }
            }
            KeyCode::Enter => self.commit_edit(),
            _ => {}
        }
    }

    /// Applies the edit only on explicit confirmation; unparseable input
    /// is rejected without touching the world.
    fn commit_edit(&mut self) {
        let Some(edit) = self.edit.take() else { return };
        let Some(id) = self.selected else { return };
        let Ok(value) = edit.buffer.parse::<f64>() else {
            self.log(
                format!("invalid {}: {:?}", edit.label(), edit.buffer),
                Color::Red,
            );
            return;
        };
        match self.world.set_body_property(id, edit.property, value) {
            Ok(events) => {
                self.log(format!("{} updated", edit.label()), Color::Green);
                for event in events {
                    let (msg, color) = super::describe_event(&event);
                    self.log(msg, color);
                }
            }
            Err(e) => self.log(format!("edit rejected: {e}"), Color::Red),
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(screen) = self.widget_coords(mouse.column, mouse.row) else {
            return;
        };
        self.cursor = screen;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let margin = self.config.interaction.hit_margin;
                self.selected = self.world.select_body_near(screen, &self.camera, margin);
                match self.selected {
                    Some(id) => self.drag.begin(id, screen),
                    None => self.edit = None,
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                // Position tracking happens on the tick; the event just
                // refreshes the cursor, already done above.
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self
                    .drag
                    .release(&mut self.world, &self.camera, &self.config.interaction)
                {
                    self.log("Thrown!", Color::Yellow);
                }
            }
            MouseEventKind::Down(MouseButton::Right) => {
                let world_pos = self.camera.screen_to_world(screen);
                self.world.spawn_at(world_pos);
                self.log("Body spawned", Color::Green);
            }
            MouseEventKind::Down(MouseButton::Middle) => {
                self.pan_prev = Some(screen);
            }
            MouseEventKind::Drag(MouseButton::Middle) => {
                if let Some(prev) = self.pan_prev {
                    self.camera.pan_step(prev, screen);
                }
                self.pan_prev = Some(screen);
            }
            MouseEventKind::Up(MouseButton::Middle) => {
                self.pan_prev = None;
            }
            MouseEventKind::ScrollUp => self.camera.zoom_at(screen, 1.1),
            MouseEventKind::ScrollDown => self.camera.zoom_at(screen, 1.0 / 1.1),
            _ => {}
        }
    }

    /// Translates absolute terminal coordinates into world-widget space.
    fn widget_coords(&self, column: u16, row: u16) -> Option<Vec2> {
        let area = self.last_world_area;
        if column >= area.left() && column < area.right() && row >= area.top() && row < area.bottom()
        {
            Some(Vec2::new(
                (column - area.x) as f64,
                (row - area.y) as f64,
            ))
        } else {
            None
        }
    }
}
