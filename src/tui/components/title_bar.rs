//! # TitleBar Component
//!
//! Top status bar: itinerary title, then the latest status message.
//!
//! Stateless. All props come from core `App` state:
//!
//! 1. **Error**: `"My Travel Itinerary | Drop rejected: ..."` in red
//! 2. **Status**: `"My Travel Itinerary | Moved \"Visit Rome\" to timeline"`
//! 3. **Default**: `"My Travel Itinerary"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

pub struct TitleBar {
    pub title: String,
    pub status_message: String,
    /// Render the status as an error
    pub is_error: bool,
}

impl TitleBar {
    pub fn new(title: String, status_message: String, is_error: bool) -> Self {
        Self {
            title,
            status_message,
            is_error,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            self.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.status_message.is_empty() {
            let status_style = if self.is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(self.status_message.clone(), status_style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
