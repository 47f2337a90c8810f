use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::color::ColorScheme;

/// Longest input we accept per field; keeps text inside its box.
const MAX_FIELD_LEN: usize = 16;

/// The four numeric entry fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Radius,
    Angle,
    Latitude,
    Longitude,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[Field::Radius, Field::Angle, Field::Latitude, Field::Longitude]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Radius => "Radius (r)",
            Field::Angle => "Angle (θ degrees)",
            Field::Latitude => "Origin latitude",
            Field::Longitude => "Origin longitude",
        }
    }
}

/// Text buffers and focus state for the entry form. Only characters that can
/// appear in a number are accepted; everything else is left free for command
/// keys.
pub struct InputForm {
    buffers: [String; 4],
    focus: usize,
}

impl InputForm {
    pub fn new() -> Self {
        Self {
            buffers: Default::default(),
            focus: 0,
        }
    }

    pub fn focused(&self) -> Field {
        Field::all()[self.focus]
    }

    pub fn next(&mut self) {
        self.focus = (self.focus + 1) % Field::all().len();
    }

    pub fn prev(&mut self) {
        self.focus = (self.focus + Field::all().len() - 1) % Field::all().len();
    }

    /// Append a character to the focused field. Returns false for characters
    /// that are not part of a numeric literal.
    pub fn push_char(&mut self, c: char) -> bool {
        if !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+')) {
            return false;
        }
        let buffer = &mut self.buffers[self.focus];
        if buffer.len() < MAX_FIELD_LEN {
            buffer.push(c);
        }
        true
    }

    pub fn backspace(&mut self) {
        self.buffers[self.focus].pop();
    }

    pub fn value(&self, field: Field) -> &str {
        let index = Field::all().iter().position(|f| *f == field).unwrap_or(0);
        &self.buffers[index]
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, scheme: &ColorScheme) {
        let constraints: Vec<Constraint> = Field::all()
            .iter()
            .map(|_| Constraint::Length(3))
            .chain([Constraint::Min(0)])
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let (dr, dg, db) = scheme.dim_color();
        let dim = Color::Rgb(dr, dg, db);
        let (or, og, ob) = scheme.origin_color();
        let focus_color = Color::Rgb(or, og, ob);

        for (i, field) in Field::all().iter().enumerate() {
            let focused = i == self.focus;
            let border_style = if focused {
                Style::default().fg(focus_color)
            } else {
                Style::default().fg(dim)
            };

            let mut text = self.buffers[i].clone();
            if focused {
                text.push('_');
            }

            let widget = Paragraph::new(text).style(Style::default().fg(Color::Reset)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title(field.label()),
            );
            frame.render_widget(widget, rows[i]);
        }
    }
}

impl Default for InputForm {
    fn default() -> Self {
        Self::new()
    }
}
