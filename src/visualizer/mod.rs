mod form;
mod radar;
pub mod sweep;

pub use form::{Field, InputForm};

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::color::ColorScheme;
use crate::config::Config;
use crate::plot::PointStore;
use radar::RadarCanvas;
use sweep::Sweep;

/// Result of the last user action, shown in the sidebar until the next one.
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Combined UI state: the entry form, the sweep animation, and the last
/// action result. The point store itself lives with the event loop; this
/// only holds what the display needs.
pub struct ViewState {
    pub form: InputForm,
    sweep: Sweep,
    status: Option<StatusMessage>,
}

impl ViewState {
    pub fn new(config: &Config) -> Self {
        Self {
            form: InputForm::new(),
            sweep: Sweep::new(config.sweep.max_radius, config.sweep.steps),
            status: None,
        }
    }

    /// Advance the sweep by one animation step.
    pub fn tick(&mut self) {
        self.sweep.advance();
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error: true,
        });
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, store: &PointStore, scheme: &ColorScheme) {
        let (sidebar, chart) = self.calculate_layout(area);

        self.render_sidebar(frame, sidebar, store, scheme);

        // The sweep fades as it expands, like a decaying radar pulse.
        let intensity = 1.0 - self.sweep.phase();
        RadarCanvas::render(frame, chart, store, self.sweep.radius(), intensity, scheme);
    }

    fn calculate_layout(&self, area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(20)])
            .split(area);
        (chunks[0], chunks[1])
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect, store: &PointStore, scheme: &ColorScheme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(13),
                Constraint::Length(2),
                Constraint::Min(3),
            ])
            .split(area);

        let (dr, dg, db) = scheme.dim_color();
        let dim = Style::default().fg(Color::Rgb(dr, dg, db));

        frame.render_widget(
            Paragraph::new(" Polar Coordinate Plotter").style(dim),
            chunks[0],
        );

        self.form.render(frame, chunks[1], scheme);

        let summary = format!(
            " points: {}   bound: {:.1}",
            store.len(),
            store.current_bound()
        );
        frame.render_widget(Paragraph::new(summary).style(dim), chunks[2]);

        if let Some(status) = &self.status {
            let style = if status.is_error {
                Style::default().fg(Color::Red)
            } else {
                dim
            };
            let widget = Paragraph::new(status.text.clone())
                .style(style)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::TOP).border_style(dim));
            frame.render_widget(widget, chunks[3]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::default()
    }

    #[test]
    fn status_replaces_previous_message() {
        let mut view = ViewState::new(&config());
        assert!(view.status().is_none());

        view.set_error("radius: 'x' is not a number");
        assert!(view.status().unwrap().is_error);

        view.set_info("Added point 1");
        let status = view.status().unwrap();
        assert!(!status.is_error);
        assert_eq!(status.text, "Added point 1");
    }
}
