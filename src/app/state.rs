use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::collections::VecDeque;
use std::time::Instant;
use uuid::Uuid;

use crate::model::camera::Camera;
use crate::model::config::AppConfig;
use crate::model::interaction::DragController;
use crate::model::world::{BodyProperty, World};
use crate::model::Vec2;

/// In-flight numeric property edit for the selected body.
pub struct PropertyEdit {
    pub property: BodyProperty,
    pub buffer: String,
}

impl PropertyEdit {
    pub fn label(&self) -> &'static str {
        match self.property {
            BodyProperty::Mass => "mass",
            BodyProperty::PosX => "pos x",
            BodyProperty::PosY => "pos y",
            BodyProperty::VelX => "vel x",
            BodyProperty::VelY => "vel y",
        }
    }
}

pub struct App {
    pub running: bool,
    pub paused: bool,
    pub world: World,
    pub camera: Camera,
    pub drag: DragController,
    pub selected: Option<Uuid>,
    pub config: AppConfig,
    // Pan gesture state (middle button).
    pub pan_prev: Option<Vec2>,
    // Last cursor position inside the world viewport, widget coordinates.
    pub cursor: Vec2,
    pub edit: Option<PropertyEdit>,
    pub event_log: VecDeque<(String, Color)>,
    // Layout tracking for mouse mapping.
    pub last_world_area: Rect,
    // FPS bookkeeping.
    pub fps: f64,
    pub frame_count: u64,
    pub last_fps_update: Instant,
}

impl App {
    /// Loads `config.toml`, writing the defaults out on first run.
    pub fn load_config(path: &str) -> AppConfig {
        if let Ok(content) = std::fs::read_to_string(path) {
            match AppConfig::from_toml(&content) {
                Ok(config) => return config,
                Err(e) => {
                    tracing::warn!("failed to parse {path}: {e}");
                }
            }
        }
        let default = AppConfig::default();
        if !std::path::Path::new(path).exists() {
            if let Ok(toml_str) = default.to_toml() {
                let _ = std::fs::write(path, toml_str);
            }
        }
        default
    }

    pub fn new(config: AppConfig) -> Result<Self> {
        let mut world = World::new(config.clone());
        let mut camera = Camera::default();
        let zoom = world.load_scenario(&config.world.scenario)?;
        camera.zoom = zoom;
        let drag = DragController::new(config.interaction.drag_samples);

        Ok(Self {
            running: true,
            paused: false,
            world,
            camera,
            drag,
            selected: None,
            config,
            pan_prev: None,
            cursor: Vec2::zeros(),
            edit: None,
            event_log: VecDeque::with_capacity(15),
            last_world_area: Rect::default(),
            fps: 0.0,
            frame_count: 0,
            last_fps_update: Instant::now(),
        })
    }

    pub fn log(&mut self, message: impl Into<String>, color: Color) {
        self.event_log.push_back((message.into(), color));
        while self.event_log.len() > 15 {
            self.event_log.pop_front();
        }
    }

    /// Switches scenarios: bodies and camera state are replaced wholesale.
    pub fn load_scenario(&mut self, name: &str) -> Result<()> {
        let zoom = self.world.load_scenario(name)?;
        self.camera.zoom = zoom;
        self.camera.offset = Vec2::zeros();
        self.selected = None;
        self.edit = None;
        self.drag.sync(&self.world);
        let title = self.world.scenario.clone();
        self.log(format!("Scenario: {title}"), Color::Cyan);
        Ok(())
    }
}
