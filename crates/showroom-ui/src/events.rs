//! Event system for the Showroom storefront.
//!
//! Page handlers do no work themselves. Each one translates a native event
//! into a `UiEvent` and sends it down an unbounded channel that the
//! storefront drains on its single event loop. Timers post back into the
//! same channel, so all state is touched from one place.

use showroom_core::CardAction;
use tokio::sync::mpsc;

use crate::model::ViewMode;
use crate::page::{DomEvent, ElementHandle, Handler, Page};

/// All events the storefront reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Category, sort or a price checkbox changed.
    FiltersChanged,
    /// Reset button clicked.
    ResetFilters,
    /// Grid or list toggle clicked.
    SetViewMode(ViewMode),
    /// Search form submitted.
    SearchSubmitted,
    /// A card button was clicked.
    Card(CardAction),
    /// A deferred full-list render is due.
    RenderDue { generation: u64 },
    /// A toast's visibility window ended.
    ToastExpired { generation: u64 },
}

impl UiEvent {
    /// Whether this event was posted by a timer rather than the user.
    pub fn is_timer(&self) -> bool {
        matches!(
            self,
            UiEvent::RenderDue { .. } | UiEvent::ToastExpired { .. }
        )
    }
}

pub type EventSender = mpsc::UnboundedSender<UiEvent>;
pub type EventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Handler that forwards a fixed event.
pub fn forward(tx: &EventSender, event: UiEvent) -> Handler {
    let tx = tx.clone();
    std::sync::Arc::new(move |_: &DomEvent| {
        if tx.send(event.clone()).is_err() {
            tracing::debug!("Storefront gone, dropping {:?}", event);
        }
    })
}

/// Delegated click handler for the grid container.
///
/// Dispatches on the clicked button's `view:<name>` / `add:<name>` payload,
/// so buttons work after every render without rebinding.
pub fn delegate_card_clicks(tx: &EventSender) -> Handler {
    let tx = tx.clone();
    std::sync::Arc::new(move |event: &DomEvent| {
        let Some(payload) = event.action.as_deref() else {
            return;
        };
        match CardAction::parse(payload) {
            Some(action) => {
                let _ = tx.send(UiEvent::Card(action));
            }
            None => tracing::warn!("Ignoring click with unknown payload {:?}", payload),
        }
    })
}

/// Bind a fixed event to `event_name` on each element.
pub fn bind_all<P: Page + ?Sized>(
    page: &P,
    elements: &[ElementHandle],
    event_name: &str,
    tx: &EventSender,
    event: UiEvent,
) {
    for element in elements {
        page.on(element, event_name, forward(tx, event.clone()));
    }
}
