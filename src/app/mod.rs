pub mod input;
pub mod render;
pub mod state;

pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::style::Color;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::model::events::SimEvent;
use crate::ui::tui::Tui;

impl App {
    pub async fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();
        let tick_rate = Duration::from_millis(1000 / self.config.target_fps.max(1));

        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Ctrl+C received, shutting down");
            shutdown_clone.store(true, Ordering::SeqCst);
        });

        while self.running && !shutdown.load(Ordering::SeqCst) {
            tui.terminal.draw(|f| {
                self.draw(f);
            })?;

            self.frame_count += 1;
            if self.last_fps_update.elapsed() >= Duration::from_secs(1) {
                self.fps = self.frame_count as f64;
                self.frame_count = 0;
                self.last_fps_update = Instant::now();
            }

            // 1ms poll keeps input responsive without busy-waiting.
            while event::poll(Duration::from_millis(1))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.tick()?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    /// One frame of simulation: the drag controller writes the held
    /// body's position first, then the world advances everyone else.
    pub fn tick(&mut self) -> Result<()> {
        self.drag.drag(&mut self.world, &self.camera, self.cursor);

        if !self.paused {
            let events = self.world.update(self.drag.held())?;
            for event in events {
                let (msg, color) = describe_event(&event);
                self.log(msg, color);
            }
        }

        // Bodies can vanish mid-tick; drop stale references.
        self.drag.sync(&self.world);
        if let Some(id) = self.selected {
            if self.world.body(id).is_none() {
                self.selected = None;
                self.edit = None;
            }
        }
        Ok(())
    }
}

fn describe_event(event: &SimEvent) -> (String, Color) {
    match event {
        SimEvent::Merge { survivor, absorbed } => (
            format!(
                "#{} absorbed #{}",
                &survivor.to_string()[..4],
                &absorbed.to_string()[..4]
            ),
            Color::Yellow,
        ),
        SimEvent::Accretion { absorbed, .. } => (
            format!(
                "#{} fell past an event horizon",
                &absorbed.to_string()[..4]
            ),
            Color::Magenta,
        ),
        SimEvent::StageAdvance { id, to, .. } => (
            format!("#{} is now a {}", &id.to_string()[..4], to.label()),
            Color::Cyan,
        ),
        SimEvent::Supernova { id, remnant } => (
            format!(
                "SUPERNOVA: #{} collapses into a {}",
                &id.to_string()[..4],
                remnant.label()
            ),
            Color::Red,
        ),
        SimEvent::FaultRemoved { id, reason } => (
            format!("#{} removed ({reason})", &id.to_string()[..4]),
            Color::DarkGray,
        ),
    }
}
