use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::item::{Icon, Item};

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// Glyph for an icon tag. Unknown tags get the map pin.
pub fn icon_glyph(icon: &Icon) -> &'static str {
    match icon {
        Icon::Plane => "✈",
        Icon::Train => "🚆",
        Icon::Car => "🚗",
        Icon::Ship => "🚢",
        Icon::Other(_) => "📍",
    }
}

/// Accent colour for a display token such as `bg-blue-500`.
pub fn token_color(token: &str) -> Color {
    let name = token.strip_prefix("bg-").unwrap_or(token);
    let name = name.split('-').next().unwrap_or(name);
    match name {
        "blue" | "sky" | "indigo" => Color::Blue,
        "green" | "emerald" | "lime" => Color::Green,
        "yellow" | "amber" => Color::Yellow,
        "purple" | "violet" | "fuchsia" => Color::Magenta,
        "red" | "rose" => Color::Red,
        "orange" => Color::LightRed,
        "pink" => Color::LightMagenta,
        "cyan" | "teal" => Color::Cyan,
        _ => Color::Gray,
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// A single itinerary card: icon and title on the border, date and
/// description inside.
///
/// Transient: built each frame from a borrowed `Item`.
#[derive(Clone, Copy)]
pub struct Card<'a> {
    pub item: &'a Item,
    /// Cursor is on this card
    pub is_selected: bool,
    /// This card is being dragged
    pub is_held: bool,
    pub show_description: bool,
}

impl<'a> Card<'a> {
    pub fn new(item: &'a Item, is_selected: bool, is_held: bool, show_description: bool) -> Self {
        Self {
            item,
            is_selected,
            is_held,
            show_description,
        }
    }

    /// Calculate the height this card needs at `width`.
    ///
    /// Descriptions are wrapped with `textwrap` and rendered line by line,
    /// so the predicted height is exactly the rendered one.
    pub fn calculate_height(item: &Item, width: u16, show_description: bool) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            return 1;
        }
        let lines = Self::body_lines(item, content_width, show_description);
        lines.len() as u16 + VERTICAL_OVERHEAD
    }

    fn body_lines(item: &Item, content_width: u16, show_description: bool) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(date) = &item.date {
            lines.push(date.clone());
        }
        let description = item.description.trim();
        if show_description && !description.is_empty() {
            let options = textwrap::Options::new(content_width as usize)
                .break_words(true)
                .word_separator(textwrap::WordSeparator::AsciiSpace);
            lines.extend(
                textwrap::wrap(description, options)
                    .into_iter()
                    .map(|line| line.into_owned()),
            );
        }
        lines
    }
}

impl<'a> Widget for Card<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let accent = token_color(&self.item.color);

        let mut border_style = if self.is_selected {
            Style::default().fg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent).add_modifier(Modifier::DIM)
        };
        let mut text_style = Style::default();
        if self.is_held {
            border_style = border_style
                .remove_modifier(Modifier::DIM)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED);
            text_style = text_style.add_modifier(Modifier::ITALIC);
        }

        let glyph = icon_glyph(&self.item.icon);
        let title_width = (area.width as usize).saturating_sub(glyph.width() + 5);
        let title = Line::from(vec![
            Span::raw(" "),
            Span::raw(glyph),
            Span::raw(" "),
            Span::styled(
                truncate_str(&self.item.title, title_width),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
        ]);

        let block = Block::bordered()
            .title(title)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        let has_date = self.item.date.is_some();
        let lines: Vec<Line> = Self::body_lines(self.item, inner_area.width, self.show_description)
            .into_iter()
            .enumerate()
            .map(|(i, line)| {
                if i == 0 && has_date {
                    Line::styled(line, Style::default().fg(Color::DarkGray))
                } else {
                    Line::raw(line)
                }
            })
            .collect();

        Paragraph::new(lines).style(text_style).render(inner_area, buf);
    }
}
