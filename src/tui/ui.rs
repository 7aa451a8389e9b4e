use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::App;
use crate::core::store::ListId;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{HelpBar, ItemList, TitleBar};

/// Draw the whole screen: title bar, the two lists side by side, key hints.
///
/// While a card is held both lists are drawn from the drag preview, so the
/// card already sits where it would land (with the date it would get).
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min, Percentage};
    let [title_area, main_area, help_area] =
        Layout::vertical([Length(1), Min(0), Length(1)]).areas(frame.area());
    let [timeline_area, pool_area] =
        Layout::horizontal([Percentage(66), Percentage(34)]).areas(main_area);

    let mut title_bar = TitleBar::new(
        app.title.clone(),
        app.status_message.clone(),
        app.last_error.is_some(),
    );
    title_bar.render(frame, title_area);

    let drag = tui.drag;
    let store = match &drag {
        Some(drag) => drag.preview(&app.store, app.clock.as_ref()),
        None => std::borrow::Cow::Borrowed(&app.store),
    };
    let held = drag.map(|d| d.held_at());
    let held_in = |list: ListId| held.filter(|h| h.list == list).map(|h| h.index);
    // While dragging, the highlight follows the list the card would land in
    let active = held.map_or(tui.focus, |h| h.list);

    ItemList::new(
        &mut tui.timeline,
        store.list(ListId::Timeline),
        &app.title,
        active == ListId::Timeline,
        held_in(ListId::Timeline),
        app.show_descriptions,
    )
    .with_connector(true)
    .render(frame, timeline_area);

    ItemList::new(
        &mut tui.pool,
        store.list(ListId::Pool),
        &app.pool_title,
        active == ListId::Pool,
        held_in(ListId::Pool),
        app.show_descriptions,
    )
    .render(frame, pool_area);

    HelpBar::new(drag.is_some()).render(frame, help_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reconcile::Location;
    use crate::tui::drag::{DragInput, DragState};
    use crate::test_support::{TODAY_LABEL, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::style::Color;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_ui_shows_both_lists() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new();

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("My Travel Itinerary"));
        assert!(text.contains("Available Places (3)"));
        assert!(text.contains("Flight to Paris"));
        assert!(text.contains("June 3, 2024"));
        assert!(text.contains("Visit Rome"));
        // Layout cache feeds hit testing
        assert_eq!(tui.timeline.layout.heights.len(), 2);
        assert_eq!(tui.pool.layout.heights.len(), 3);
        assert!(tui.timeline.viewport.width > tui.pool.viewport.width);
    }

    #[test]
    fn test_draw_ui_renders_drag_preview() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new();
        let mut drag = DragState::grab(Location::new(ListId::Pool, 2), DragInput::Keyboard);
        drag.switch_to(&app.store, ListId::Timeline);
        tui.drag = Some(drag);

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Available Places (2)"));
        assert!(text.contains(TODAY_LABEL));
        assert!(text.contains("Esc cancel"));
        // The real store is untouched until the drop
        assert_eq!(app.store.pool.len(), 3);
    }

    /// Colour of a list's top-left border corner.
    fn border_fg(terminal: &Terminal<TestBackend>, state: &crate::tui::components::ItemListState) -> Color {
        terminal.backend().buffer()[(state.viewport.x - 1, state.viewport.y - 1)].fg
    }

    #[test]
    fn test_drop_target_list_is_highlighted() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = test_app();
        let mut tui = TuiState::new();

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();
        assert_eq!(border_fg(&terminal, &tui.timeline), Color::Cyan);
        assert_eq!(border_fg(&terminal, &tui.pool), Color::DarkGray);

        // Carry the first timeline card over the pool
        let mut drag = DragState::grab(Location::new(ListId::Timeline, 0), DragInput::Keyboard);
        drag.switch_to(&app.store, ListId::Pool);
        tui.drag = Some(drag);

        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();
        assert_eq!(border_fg(&terminal, &tui.pool), Color::Cyan);
        assert_eq!(border_fg(&terminal, &tui.timeline), Color::DarkGray);
        assert_eq!(tui.focus, ListId::Timeline);
    }
}
