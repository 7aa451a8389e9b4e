//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the two lists,
//! and translates keyboard and mouse drags into core `Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Drag and Drop
//!
//! A drag lives in [`TuiState::drag`] until it ends. Only then does the core
//! hear about it, as one `Action::Drop(gesture)` or `Action::Cancel(source)`.
//!
//! - **Keyboard**: Space picks up the selected card, arrows and Tab move the
//!   drop slot, Space/Enter drops, Esc cancels.
//! - **Mouse**: press on a card, drag, release over a list to drop. Releasing
//!   outside both lists is a drop with no destination.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms and only redraws after
//! an event.

mod component;
pub mod components;
pub mod drag;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::clock::SystemClock;
use crate::core::config::ResolvedConfig;
use crate::core::reconcile::Location;
use crate::core::state::App;
use crate::core::store::{ItemStore, ListId};
use crate::tui::component::EventHandler;
use crate::tui::components::ItemListState;
use crate::tui::drag::{DragInput, DragState};
pub use crate::tui::event::TuiEvent;
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub timeline: ItemListState,
    pub pool: ItemListState,
    /// List the keyboard cursor is in
    pub focus: ListId,
    /// Card currently held, if any
    pub drag: Option<DragState>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            timeline: ItemListState::new(),
            pool: ItemListState::new(),
            focus: ListId::Timeline,
            drag: None,
        }
    }

    pub fn list_state(&self, list: ListId) -> &ItemListState {
        match list {
            ListId::Timeline => &self.timeline,
            ListId::Pool => &self.pool,
        }
    }

    pub fn list_state_mut(&mut self, list: ListId) -> &mut ItemListState {
        match list {
            ListId::Timeline => &mut self.timeline,
            ListId::Pool => &mut self.pool,
        }
    }

    /// Which list (if any) was last drawn under a screen position.
    fn list_at(&self, col: u16, row: u16) -> Option<ListId> {
        [ListId::Timeline, ListId::Pool]
            .into_iter()
            .find(|&list| self.list_state(list).contains(col, row))
    }

    fn slot_at(&self, col: u16, row: u16) -> Option<(ListId, usize)> {
        let list = self.list_at(col, row)?;
        self.list_state(list)
            .slot_at(col, row)
            .map(|index| (list, index))
    }

    /// Put the cursor on `location` after a drop.
    fn focus_on(&mut self, location: Location) {
        self.focus = location.list;
        self.list_state_mut(location.list).selected = location.index;
    }

    fn end_drag(&mut self) -> Option<Action> {
        let drag = self.drag.take()?;
        let gesture = drag.gesture();
        match gesture.destination {
            Some(destination) => self.focus_on(destination),
            None => self.focus_on(drag.source),
        }
        Some(Action::Drop(gesture))
    }

    /// Route one terminal event. Returns the core action it produces, if any.
    pub fn handle_event(&mut self, store: &ItemStore, event: &TuiEvent) -> Option<Action> {
        match *event {
            TuiEvent::ForceQuit => return Some(Action::Quit),
            TuiEvent::Resize => return None,
            TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
                self.list_state_mut(self.focus).handle_event(event);
                return None;
            }
            TuiEvent::MouseDown(col, row) => {
                if self.drag.is_some() {
                    return None;
                }
                let list = self.list_at(col, row)?;
                let index = self.list_state(list).card_at(col, row)?;
                debug!("Mouse grab at {}/{}", list, index);
                let source = Location::new(list, index);
                self.focus_on(source);
                self.drag = Some(DragState::grab(source, DragInput::Mouse));
                return None;
            }
            TuiEvent::MouseDrag(col, row) => {
                let slot = self.slot_at(col, row);
                if let Some(drag) = self.drag.as_mut()
                    && drag.input == DragInput::Mouse
                {
                    drag.hover_at(store, slot);
                }
                return None;
            }
            TuiEvent::MouseUp(col, row) => {
                let slot = self.slot_at(col, row);
                let drag = self.drag.as_mut()?;
                if drag.input != DragInput::Mouse {
                    return None;
                }
                drag.hover_at(store, slot);
                return self.end_drag();
            }
            _ => {}
        }

        if self.drag.is_some() {
            self.handle_drag_key(store, event)
        } else {
            self.handle_browse_key(store, event)
        }
    }

    /// Keys while a card is held move the drop slot.
    fn handle_drag_key(&mut self, store: &ItemStore, event: &TuiEvent) -> Option<Action> {
        let drag = self.drag.as_mut()?;
        match *event {
            TuiEvent::CursorUp => drag.step(store, -1),
            TuiEvent::CursorDown => drag.step(store, 1),
            TuiEvent::CursorLeft => drag.switch_to(store, ListId::Timeline),
            TuiEvent::CursorRight => drag.switch_to(store, ListId::Pool),
            TuiEvent::SwitchList => {
                let current = drag.held_at().list;
                drag.switch_to(store, current.other());
            }
            TuiEvent::Grab | TuiEvent::Submit => return self.end_drag(),
            TuiEvent::Escape => {
                let source = drag.source;
                self.drag = None;
                self.focus_on(source);
                return Some(Action::Cancel(source));
            }
            _ => {}
        }
        None
    }

    /// Keys with empty hands move the cursor.
    fn handle_browse_key(&mut self, store: &ItemStore, event: &TuiEvent) -> Option<Action> {
        let focus = self.focus;
        let len = store.list(focus).len();
        match *event {
            TuiEvent::Quit => return Some(Action::Quit),
            TuiEvent::CursorUp => self.list_state_mut(focus).select_prev(),
            TuiEvent::CursorDown => self.list_state_mut(focus).select_next(len),
            TuiEvent::CursorLeft => self.focus = ListId::Timeline,
            TuiEvent::CursorRight => self.focus = ListId::Pool,
            TuiEvent::SwitchList => self.focus = focus.other(),
            TuiEvent::Grab | TuiEvent::Submit if len > 0 => {
                let state = self.list_state_mut(focus);
                state.clamp_selection(len);
                let source = Location::new(focus, state.selected);
                self.drag = Some(DragState::grab(source, DragInput::Keyboard));
            }
            _ => {}
        }
        None
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: &ResolvedConfig, store: ItemStore) -> std::io::Result<()> {
    let mut app = App::from_config(store, Arc::new(SystemClock), config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    'outer: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(std::time::Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = tui.handle_event(&app.store, &event) else {
                continue;
            };
            if update(&mut app, action) == Effect::Quit {
                break 'outer;
            }
        }
    }

    info!(
        "Exiting with {} timeline and {} pool items",
        app.store.timeline.len(),
        app.store.pool.len()
    );
    ratatui::restore();
    Ok(())
}
