//! # ItemList Component
//!
//! One scrollable column of cards: the timeline or the pool.
//!
//! ## Responsibilities
//!
//! - Render the cards of one list under a heading
//! - Keep the selected card in view
//! - Hit testing for mouse drags (which card, which drop slot)
//!
//! ## Architecture
//!
//! `ItemList` is a transient component (created each frame) that wraps
//! `&'a mut ItemListState` (persistent state) and the items to show (props).
//! The render pass refreshes the layout cache that hit testing reads, so
//! hit tests always match what is on screen, drag preview included.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::item::Item;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::card::{Card, token_color};
use crate::tui::event::TuiEvent;

/// Columns reserved left of the cards for the timeline connector.
const GUTTER_WIDTH: u16 = 3;

/// Layout, selection and scroll state for one list.
/// Must be persisted in the parent TuiState.
pub struct ItemListState {
    pub scroll_state: ScrollViewState,
    pub layout: LayoutCache,
    /// Cursor position within the list
    pub selected: usize,
    /// Screen area the cards were last drawn into (inside the list border)
    pub viewport: Rect,
}

impl Default for ItemListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::default(),
            selected: 0,
            viewport: Rect::default(),
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.scroll_to_selected();
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
        self.scroll_to_selected();
    }

    /// Clamp the selection after the list shrank.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.layout.total_height().saturating_sub(self.viewport.height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll the viewport so the selected card is fully visible.
    /// If the card is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let idx = self.selected;
        if idx >= self.layout.prefix_heights.len() {
            return;
        }
        let item_top = self.layout.top_of(idx);
        let item_bottom = self.layout.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y + self.viewport.height {
            let new_y = item_bottom.saturating_sub(self.viewport.height);
            self.scroll_state.set_offset(Position { x: 0, y: new_y.min(item_top) });
        }
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.viewport.contains(Position { x: col, y: row })
    }

    /// Index of the card under a screen position, if any.
    pub fn card_at(&self, col: u16, row: u16) -> Option<usize> {
        if !self.contains(col, row) {
            return None;
        }
        let content_y = (row - self.viewport.y) + self.scroll_state.offset().y;
        self.layout.index_at(content_y)
    }

    /// Drop slot under a screen position: the card index there, or the end
    /// of the list when the pointer is below the last card.
    pub fn slot_at(&self, col: u16, row: u16) -> Option<usize> {
        if !self.contains(col, row) {
            return None;
        }
        Some(
            self.card_at(col, row)
                .unwrap_or(self.layout.heights.len()),
        )
    }
}

/// Scrollable column of cards.
/// Created fresh each frame with references to state and data.
pub struct ItemList<'a> {
    pub state: &'a mut ItemListState,
    pub items: &'a [Item],
    pub heading: &'a str,
    pub focused: bool,
    /// Index of the card being dragged, when it is in this list
    pub held: Option<usize>,
    pub show_descriptions: bool,
    /// Draw a vertical line joining consecutive cards
    pub connector: bool,
}

impl<'a> ItemList<'a> {
    pub fn new(
        state: &'a mut ItemListState,
        items: &'a [Item],
        heading: &'a str,
        focused: bool,
        held: Option<usize>,
        show_descriptions: bool,
    ) -> Self {
        Self {
            state,
            items,
            heading,
            focused,
            held,
            show_descriptions,
            connector: false,
        }
    }

    pub fn with_connector(mut self, connector: bool) -> Self {
        self.connector = connector;
        self
    }
}

/// Gutter beside one card: a node on its top row, then a line down to the
/// next card unless it is the last one.
fn connector_lines(height: u16, accent: Color, continues: bool) -> Vec<Line<'static>> {
    let mut lines = vec![Line::styled(" ●", Style::default().fg(accent))];
    if continues {
        let rail = Style::default().fg(Color::DarkGray);
        lines.extend((1..height).map(|_| Line::styled(" │", rail)));
    }
    lines
}

impl<'a> Component for ItemList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(format!(" {} ({}) ", self.heading, self.items.len()))
            .title_style(border_style.add_modifier(Modifier::BOLD))
            .border_type(BorderType::Plain)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.state.viewport = inner;
        self.state.clamp_selection(self.items.len());

        let content_width = inner.width.saturating_sub(1); // -1 for scrollbar safe area
        let gutter = if self.connector { GUTTER_WIDTH.min(content_width) } else { 0 };
        let card_width = content_width - gutter;

        // 1. Refresh layout cache
        self.state.layout.heights = self
            .items
            .iter()
            .map(|item| Card::calculate_height(item, card_width, self.show_descriptions))
            .collect();
        self.state.layout.rebuild_prefix_heights();

        if self.items.is_empty() {
            let hint = Paragraph::new("Drop cards here")
                .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
                .centered();
            frame.render_widget(hint, inner);
            return;
        }

        // 2. Keep scroll in bounds, follow the cursor or the held card
        self.state.clamp_scroll();
        if let Some(held) = self.held {
            self.state.selected = held;
        }
        if self.focused || self.held.is_some() {
            self.state.scroll_to_selected();
        }

        // 3. Render the visible cards into a ScrollView
        let total_height = self.state.layout.total_height();
        let scroll_offset = self.state.scroll_state.offset().y;
        let visible_range = self.state.layout.visible_range(scroll_offset, inner.height);
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset = self.state.layout.top_of(visible_range.start);
        for i in visible_range {
            // Content past u16::MAX rows is cut off
            let height = self.state.layout.heights[i].min(total_height - y_offset);
            if height == 0 {
                break;
            }
            let item = &self.items[i];
            if gutter > 0 {
                let continues = i + 1 < self.items.len();
                let lines = connector_lines(height, token_color(&item.color), continues);
                scroll_view.render_widget(Paragraph::new(lines), Rect::new(0, y_offset, gutter, height));
            }
            let is_held = self.held == Some(i);
            let is_selected = self.focused && self.state.selected == i;
            let card = Card::new(item, is_selected, is_held, self.show_descriptions);
            scroll_view.render_widget(card, Rect::new(gutter, y_offset, card_width, height));
            y_offset = y_offset.saturating_add(height);
        }

        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll_state);
    }
}

/// EventHandler lives on `ItemListState` because `ItemList` is rebuilt every frame.
impl EventHandler for ItemListState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                None
            }
            _ => None,
        }
    }
}

/// Cached card heights for the last render.
#[derive(Debug, Default)]
pub struct LayoutCache {
    pub heights: Vec<u16>,
    /// Running sums: `prefix_heights[i]` is the bottom edge of card `i`.
    pub prefix_heights: Vec<u16>,
}

impl LayoutCache {
    pub fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    pub fn top_of(&self, idx: usize) -> u16 {
        if idx == 0 {
            0
        } else {
            self.prefix_heights[idx - 1]
        }
    }

    /// Cards overlapping the viewport, padded by half a screen each way.
    pub fn visible_range(&self, scroll_offset: u16, viewport_height: u16) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }

    /// Card containing content row `y`.
    pub fn index_at(&self, y: u16) -> Option<usize> {
        let idx = self.prefix_heights.partition_point(|&end| end <= y);
        (idx < self.prefix_heights.len()).then_some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::ItemStore;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn cache(heights: &[u16]) -> LayoutCache {
        let mut layout = LayoutCache {
            heights: heights.to_vec(),
            prefix_heights: Vec::new(),
        };
        layout.rebuild_prefix_heights();
        layout
    }

    #[test]
    fn test_prefix_heights() {
        let layout = cache(&[3, 4, 2]);
        assert_eq!(layout.prefix_heights, vec![3, 7, 9]);
        assert_eq!(layout.total_height(), 9);
        assert_eq!(layout.top_of(0), 0);
        assert_eq!(layout.top_of(2), 7);
    }

    #[test]
    fn test_index_at() {
        let layout = cache(&[3, 4, 2]);
        assert_eq!(layout.index_at(0), Some(0));
        assert_eq!(layout.index_at(2), Some(0));
        assert_eq!(layout.index_at(3), Some(1));
        assert_eq!(layout.index_at(8), Some(2));
        assert_eq!(layout.index_at(9), None);
    }

    #[test]
    fn test_visible_range_pads_viewport() {
        let layout = cache(&[3; 20]);
        // Rows 30..40 on screen, padded by 5 each way
        assert_eq!(layout.visible_range(30, 10), 8..15);
        assert_eq!(layout.visible_range(0, 10), 0..5);
    }

    #[test]
    fn test_hit_testing_respects_viewport() {
        let mut state = ItemListState::new();
        state.viewport = Rect::new(10, 5, 20, 10);
        state.layout = cache(&[3, 3]);

        assert_eq!(state.card_at(12, 5), Some(0));
        assert_eq!(state.card_at(12, 8), Some(1));
        // Below the cards but inside the list: append slot
        assert_eq!(state.card_at(12, 12), None);
        assert_eq!(state.slot_at(12, 12), Some(2));
        // Outside the list entirely
        assert_eq!(state.slot_at(2, 8), None);
        assert_eq!(state.slot_at(12, 15), None);
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = ItemListState::new();
        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected, 2);
        state.clamp_selection(1);
        assert_eq!(state.selected, 0);
        state.select_prev();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_render_caches_layout_and_viewport() {
        let backend = TestBackend::new(40, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let store = ItemStore::seeded();
        let mut state = ItemListState::new();

        terminal
            .draw(|f| {
                let area = f.area();
                ItemList::new(&mut state, &store.pool, "Available Places", true, None, true)
                    .render(f, area);
            })
            .unwrap();

        assert_eq!(state.viewport, Rect::new(1, 1, 38, 28));
        assert_eq!(state.layout.heights.len(), 3);
        assert_eq!(state.card_at(2, 1), Some(0));

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Available Places (3)"));
        assert!(text.contains("Drive to Marseille"));
    }

    #[test]
    fn test_render_empty_list_shows_hint() {
        let backend = TestBackend::new(30, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ItemListState::new();

        terminal
            .draw(|f| {
                let area = f.area();
                ItemList::new(&mut state, &[], "Timeline", false, None, true).render(f, area);
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Drop cards here"));
        assert_eq!(state.slot_at(3, 2), Some(0));
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_render_list_taller_than_u16_rows() {
        // 25,000 three-row cards add up to more rows than a u16 can address
        let items: Vec<Item> = (0..25_000)
            .map(|i| Item::new(format!("p{i}"), format!("Stop {i}"), "x", "car", "bg-red-500"))
            .collect();
        let backend = TestBackend::new(24, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = ItemListState::new();

        terminal
            .draw(|f| {
                let area = f.area();
                ItemList::new(&mut state, &items, "Pool", true, None, true).render(f, area);
            })
            .unwrap();
        assert_eq!(state.layout.total_height(), u16::MAX);
        assert!(buffer_text(&terminal).contains("Stop 0"));

        // Follow a held card to the far end of the list
        terminal
            .draw(|f| {
                let area = f.area();
                ItemList::new(&mut state, &items, "Pool", true, Some(24_999), true)
                    .render(f, area);
            })
            .unwrap();
        assert!(state.scroll_state.offset().y > 60_000);
    }

    #[test]
    fn test_connector_joins_timeline_cards() {
        let backend = TestBackend::new(40, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let store = ItemStore::seeded();
        let mut state = ItemListState::new();

        terminal
            .draw(|f| {
                let area = f.area();
                ItemList::new(&mut state, &store.timeline, "Timeline", false, None, true)
                    .with_connector(true)
                    .render(f, area);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let first = state.layout.heights[0];
        // Gutter glyphs sit one column into the list's inner area
        let x = state.viewport.x + 1;
        let top = state.viewport.y;
        assert_eq!(buffer[(x, top)].symbol(), "●");
        for row in top + 1..top + first {
            assert_eq!(buffer[(x, row)].symbol(), "│", "row {row}");
        }
        assert_eq!(buffer[(x, top + first)].symbol(), "●");
        // Nothing hangs below the last card
        assert_eq!(buffer[(x, top + first + 1)].symbol(), " ");
        // Cards are shifted right of the gutter
        assert!(buffer_text(&terminal).contains("Flight to Paris"));
        assert_eq!(buffer[(state.viewport.x + GUTTER_WIDTH, top)].symbol(), "╭");
    }

    #[test]
    fn test_pool_has_no_connector() {
        let backend = TestBackend::new(40, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let store = ItemStore::seeded();
        let mut state = ItemListState::new();

        terminal
            .draw(|f| {
                let area = f.area();
                ItemList::new(&mut state, &store.pool, "Pool", false, None, true).render(f, area);
            })
            .unwrap();

        assert!(!buffer_text(&terminal).contains('●'));
    }
}
