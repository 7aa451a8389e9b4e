//! # Actions
//!
//! Everything that can happen to the itinerary becomes an `Action`.
//! A card dropped on a list? That's `Action::Drop(gesture)`.
//! A drag abandoned with Esc? That's `Action::Cancel(source)`.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! `update()` does no I/O. The returned `Effect` tells the adapter whether
//! anything beyond a redraw is needed.

use log::{debug, info, warn};

use crate::core::reconcile::{Gesture, Location, reconcile};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A drag finished. A gesture without a destination is a cancelled drop.
    Drop(Gesture),
    /// A drag was abandoned before reaching any list.
    Cancel(Location),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Drop(gesture) => {
            apply_gesture(app, &gesture);
            Effect::None
        }
        Action::Cancel(source) => {
            debug!("Drag from {} cancelled", source);
            apply_gesture(app, &Gesture::cancelled(source));
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn apply_gesture(app: &mut App, gesture: &Gesture) {
    let Some(destination) = gesture.destination else {
        app.last_error = None;
        app.status_message = String::from("Drag cancelled");
        return;
    };

    match reconcile(&app.store, gesture, app.clock.as_ref()) {
        Ok(next) => {
            let moved = next
                .list(destination.list)
                .get(destination.index)
                .map(|item| item.title.clone())
                .unwrap_or_default();
            app.status_message = if gesture.source == destination {
                format!("\"{}\" stayed in place", moved)
            } else if gesture.source.list == destination.list {
                format!("Reordered \"{}\" in {}", moved, destination.list)
            } else {
                format!("Moved \"{}\" to {}", moved, destination.list)
            };
            info!("Applied gesture {}", gesture);
            app.store.replace(next);
            app.last_error = None;
        }
        Err(e) => {
            warn!("Rejected gesture {}: {}", gesture, e);
            app.status_message = format!("Drop rejected: {}", e);
            app.last_error = Some(e.to_string());
        }
    }
}
