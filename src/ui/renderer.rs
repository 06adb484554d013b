use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;
use uuid::Uuid;

use crate::model::camera::Camera;
use crate::model::stage::Stage;
use crate::model::world::World;
use crate::model::Vec2;

/// Cells are tall; discs wider than this read as blobs anyway.
const MAX_DISC_RADIUS: i32 = 16;

pub struct WorldWidget<'a> {
    world: &'a World,
    camera: &'a Camera,
    selected: Option<Uuid>,
}

impl<'a> WorldWidget<'a> {
    pub fn new(world: &'a World, camera: &'a Camera, selected: Option<Uuid>) -> Self {
        Self {
            world,
            camera,
            selected,
        }
    }

    /// Projects a world point into buffer coordinates, or `None` when it
    /// falls outside the viewport.
    fn project(&self, world: Vec2, area: Rect) -> Option<(u16, u16)> {
        let screen = self.camera.world_to_screen(world);
        if screen.x < 0.0 || screen.y < 0.0 {
            return None;
        }
        let (x, y) = (screen.x as u16, screen.y as u16);
        if x < area.width && y < area.height {
            Some((area.x + x, area.y + y))
        } else {
            None
        }
    }
}

impl Widget for WorldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Trails first so bodies draw over them.
        for body in &self.world.bodies {
            let dim = Color::Rgb(body.r / 3, body.g / 3, body.b / 3);
            for point in &body.trail {
                if let Some((x, y)) = self.project(*point, area) {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        if cell.symbol() == " " {
                            cell.set_symbol("·");
                            cell.set_fg(dim);
                        }
                    }
                }
            }
        }

        for body in &self.world.bodies {
            let Some((cx, cy)) = self.project(body.position, area) else {
                continue;
            };

            let screen_radius = ((body.radius * self.camera.zoom) as i32).min(MAX_DISC_RADIUS);
            let (symbol, color) = body_face(body);

            for dy in -screen_radius..=screen_radius {
                for dx in -screen_radius..=screen_radius {
                    if dx * dx + dy * dy > screen_radius * screen_radius {
                        continue;
                    }
                    let x = cx as i32 + dx;
                    let y = cy as i32 + dy;
                    if x < area.left() as i32
                        || x >= area.right() as i32
                        || y < area.top() as i32
                        || y >= area.bottom() as i32
                    {
                        continue;
                    }
                    if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                        cell.set_symbol(symbol);
                        cell.set_fg(color);
                    }
                }
            }

            // Black holes get an accretion ring so they read on a black
            // background.
            if body.stage == Stage::BlackHole && screen_radius >= 1 {
                let ring = screen_radius + 1;
                for dy in -ring..=ring {
                    for dx in -ring..=ring {
                        let d2 = dx * dx + dy * dy;
                        if d2 > ring * ring || d2 <= screen_radius * screen_radius {
                            continue;
                        }
                        let x = cx as i32 + dx;
                        let y = cy as i32 + dy;
                        if x < area.left() as i32
                            || x >= area.right() as i32
                            || y < area.top() as i32
                            || y >= area.bottom() as i32
                        {
                            continue;
                        }
                        if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                            if cell.symbol() == " " || cell.symbol() == "·" {
                                cell.set_symbol("░");
                                cell.set_fg(Color::Rgb(255, 120, 30));
                            }
                        }
                    }
                }
            }

            if self.selected == Some(body.id) {
                let span = screen_radius + 1;
                for (dx, marker) in [(-span - 1, "["), (span + 1, "]")] {
                    let x = cx as i32 + dx;
                    if x >= area.left() as i32 && x < area.right() as i32 {
                        if let Some(cell) = buf.cell_mut((x as u16, cy)) {
                            cell.set_symbol(marker);
                            cell.set_fg(Color::White);
                        }
                    }
                }
            }
        }
    }
}

/// Symbol and color for a body's disc, including the supernova flash.
fn body_face(body: &crate::model::body::Body) -> (&'static str, Color) {
    if body.is_frozen() {
        // Alternate white/yellow while the countdown runs.
        let color = if body.supernova_timer / 4 % 2 == 0 {
            Color::Rgb(255, 255, 255)
        } else {
            Color::Rgb(255, 200, 50)
        };
        return ("✦", color);
    }
    match body.stage {
        Stage::BlackHole => ("█", Color::Rgb(10, 10, 10)),
        Stage::NeutronStar => ("◉", body.color()),
        _ => ("●", body.color()),
    }
}
