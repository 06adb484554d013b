use crate::app::state::App;
use crate::ui::renderer::WorldWidget;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

impl App {
    pub fn draw(&mut self, f: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(34)])
            .split(f.area());

        let left_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Status
                Constraint::Min(0),    // World
                Constraint::Length(8), // Event log
            ])
            .split(main_layout[0]);

        // STATUS BAR
        let pause_span = if self.paused {
            Span::styled(
                " PAUSED ",
                Style::default()
                    .bg(Color::Red)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(" LIVE ", Style::default().bg(Color::Green).fg(Color::Black))
        };
        let status = vec![
            pause_span,
            Span::raw(format!(
                " {} | Bodies: {} | Tick: {} | Zoom: {:.2} | FPS: {:.0}",
                self.world.scenario,
                self.world.bodies.len(),
                self.world.tick,
                self.camera.zoom,
                self.fps,
            )),
        ];
        f.render_widget(
            Paragraph::new(Line::from(status)).style(Style::default().fg(Color::DarkGray)),
            left_layout[0],
        );

        // WORLD
        let world_block = Block::default()
            .title(format!(" {} ", self.world.scenario))
            .borders(Borders::ALL);
        let inner = world_block.inner(left_layout[1]);
        f.render_widget(world_block, left_layout[1]);

        // Mouse mapping and the camera both key off the inner viewport.
        self.last_world_area = inner;
        self.camera
            .set_viewport(inner.width as f64, inner.height as f64);

        let world_widget = WorldWidget::new(&self.world, &self.camera, self.selected);
        f.render_widget(world_widget, inner);

        // EVENT LOG
        let events: Vec<Line> = self
            .event_log
            .iter()
            .rev()
            .take(6)
            .map(|(msg, color)| Line::from(Span::styled(msg, Style::default().fg(*color))))
            .collect();
        let log = Paragraph::new(events)
            .block(Block::default().borders(Borders::ALL).title(" Events "));
        f.render_widget(log, left_layout[2]);

        // SIDEBAR
        self.render_sidebar(f, main_layout[1]);
    }

    fn render_sidebar(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        let sidebar_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(12)])
            .split(area);

        let mut lines = Vec::new();
        let mut border_color = Color::DarkGray;

        if let Some(body) = self.selected.and_then(|id| self.world.body(id)) {
            border_color = body.color();
            lines.push(Line::from(vec![
                Span::styled(
                    format!(" {} ", body.stage.label()),
                    Style::default()
                        .bg(body.color())
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" #{}", &body.id.to_string()[..8])),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(format!(" Mass:   {:.1}", body.mass)));
            lines.push(Line::from(format!(" Radius: {:.2}", body.radius)));
            lines.push(Line::from(format!(
                " Pos:    ({:.1}, {:.1})",
                body.position.x, body.position.y
            )));
            lines.push(Line::from(format!(
                " Vel:    ({:.3}, {:.3})",
                body.velocity.x, body.velocity.y
            )));
            lines.push(Line::from(format!(
                " Speed:  {:.3}",
                body.velocity.norm()
            )));
            if body.is_frozen() {
                lines.push(Line::from(Span::styled(
                    format!(" SUPERNOVA in {} ticks", body.supernova_timer),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )));
            }
            lines.push(Line::from(""));
            match &self.edit {
                Some(edit) => {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!(" {} = ", edit.label()),
                            Style::default().fg(Color::Yellow),
                        ),
                        Span::styled(
                            format!("{}_", edit.buffer),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]));
                    lines.push(Line::from(Span::styled(
                        " [Enter] apply  [Esc] cancel",
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                None if self.paused => {
                    lines.push(Line::from(Span::styled(
                        " [m/x/y/u/v] edit property",
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                None => {
                    lines.push(Line::from(Span::styled(
                        " Pause to edit properties",
                        Style::default().fg(Color::DarkGray),
                    )));
                }
            }
        } else {
            lines.push(Line::from(" No body selected."));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                " Left-click a body to inspect.",
                Style::default().fg(Color::DarkGray),
            )));
        }

        let inspector = Paragraph::new(lines).block(
            Block::default()
                .title(" Inspector ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        );
        f.render_widget(inspector, sidebar_layout[0]);

        let help = vec![
            Line::from(" [LMB] drag/throw  [RMB] spawn"),
            Line::from(" [MMB] pan  [Wheel] zoom"),
            Line::from(" [Space] pause  [d] delete"),
            Line::from(" [Up/Down] mass +/- 10%"),
            Line::from(" [1-5] scenarios"),
            Line::from(" [q] quit"),
        ];
        let controls = Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Controls "));
        f.render_widget(controls, sidebar_layout[1]);
    }
}
