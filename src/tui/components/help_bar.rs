//! # HelpBar Component
//!
//! Bottom row of key hints. The hints change while a card is held.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;

const BROWSE_HINTS: &[(&str, &str)] = &[
    ("↑↓", "select"),
    ("←→/Tab", "switch list"),
    ("Space", "pick up"),
    ("mouse", "drag"),
    ("q", "quit"),
];

const DRAG_HINTS: &[(&str, &str)] = &[
    ("↑↓", "move"),
    ("←→/Tab", "other list"),
    ("Space/Enter", "drop"),
    ("Esc", "cancel"),
];

pub struct HelpBar {
    pub dragging: bool,
}

impl HelpBar {
    pub fn new(dragging: bool) -> Self {
        Self { dragging }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.dragging { DRAG_HINTS } else { BROWSE_HINTS }
    }
}

impl Component for HelpBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let label_style = Style::default().fg(Color::DarkGray);

        let mut spans = Vec::new();
        for (i, (key, label)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", label_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(" {label}"), label_style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
