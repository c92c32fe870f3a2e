//! Page integration for the Showroom catalog browser.
//!
//! The `Page` trait is the only way the storefront touches the document:
//! element lookup, event subscription and content updates. It is mockable
//! for testing, and `MemoryPage` provides a complete in-memory document for
//! tests and the headless binary.

use parking_lot::Mutex;
use showroom_core::CardAction;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::views::action_attribute;

// =============================================================================
// Selectors
// =============================================================================

/// Element selectors the storefront relies on.
pub mod selectors {
    pub const GRID: &str = "#productGrid";
    pub const STATUS: &str = "#status";
    pub const TOAST: &str = "#toast";
    pub const CART_COUNT: &str = "#cartCount";
    pub const CATEGORY: &str = "#category";
    pub const SORT: &str = "#sort";
    pub const RESET: &str = "#resetFilters";
    pub const GRID_BUTTON: &str = "#gridBtn";
    pub const LIST_BUTTON: &str = "#listBtn";
    pub const QUERY: &str = "#q";
    pub const SEARCH_FORM: &str = ".search";
    pub const PRICE: &str = ".price";
}

/// Price range checkbox values on the default page.
pub const PRICE_RANGES: [&str; 4] = ["0-500", "500-1000", "1000-1500", "1500-inf"];

// =============================================================================
// Events
// =============================================================================

/// A native event delivered to a handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    /// Event name, e.g. "click" or "change".
    pub name: String,

    /// Data payload of the clicked card button, for delegated clicks.
    pub action: Option<String>,
}

impl DomEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            action: None,
        }
    }

    pub fn with_action(mut self, payload: impl Into<String>) -> Self {
        self.action = Some(payload.into());
        self
    }
}

/// Event handler registered with `Page::on`.
pub type Handler = Arc<dyn Fn(&DomEvent) + Send + Sync>;

/// Opaque reference to a page element.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementHandle(pub String);

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Page errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// A required element is not on the page.
    #[error("Element not found: {0}")]
    MissingElement(String),
}

// =============================================================================
// Page Trait
// =============================================================================

/// Capability interface over a document.
///
/// Selectors are `#id` or `.class`.
#[cfg_attr(test, mockall::automock)]
pub trait Page {
    /// First element matching the selector.
    fn query_element(&self, selector: &str) -> Option<ElementHandle>;

    /// All elements matching the selector, in document order.
    fn query_all(&self, selector: &str) -> Vec<ElementHandle>;

    /// Subscribe to an event on an element.
    fn on(&self, element: &ElementHandle, event: &str, handler: Handler);

    /// Replace the element's child markup.
    fn set_markup(&self, element: &ElementHandle, html: &str);

    fn set_text(&self, element: &ElementHandle, text: &str);

    fn set_attribute(&self, element: &ElementHandle, name: &str, value: &str);

    /// Replace the element's whole class list.
    fn set_class_name(&self, element: &ElementHandle, class_name: &str);

    fn add_class(&self, element: &ElementHandle, class: &str);

    fn remove_class(&self, element: &ElementHandle, class: &str);

    /// Current value of a form control.
    fn value(&self, element: &ElementHandle) -> String;

    fn set_value(&self, element: &ElementHandle, value: &str);

    fn is_checked(&self, element: &ElementHandle) -> bool;

    fn set_checked(&self, element: &ElementHandle, checked: bool);
}

// =============================================================================
// Memory Page
// =============================================================================

#[derive(Debug, Clone, Default)]
struct Element {
    id: Option<String>,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    text: String,
    markup: String,
    value: String,
    checked: bool,
}

impl Element {
    fn matches(&self, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            self.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            self.classes.iter().any(|c| c == class)
        } else {
            false
        }
    }
}

struct Binding {
    element: ElementHandle,
    event: String,
    handler: Handler,
}

#[derive(Default)]
struct PageTree {
    order: Vec<ElementHandle>,
    elements: HashMap<ElementHandle, Element>,
    bindings: Vec<Binding>,
}

/// In-memory document. Clones share the same page.
///
/// Besides implementing `Page`, it can act as the user: change controls,
/// click buttons and submit the search form, firing the bound handlers.
#[derive(Clone, Default)]
pub struct MemoryPage {
    inner: Arc<Mutex<PageTree>>,
}

impl MemoryPage {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page with every element the storefront needs.
    pub fn storefront() -> Self {
        let page = Self::new();

        page.insert(Some("productGrid"), &["grid"], |el| {
            el.attributes.insert("aria-busy".into(), "false".into());
            el.attributes.insert("aria-live".into(), "polite".into());
        });
        page.insert(Some("status"), &["status"], |_| {});
        page.insert(Some("toast"), &["toast"], |el| {
            el.attributes.insert("role".into(), "status".into());
        });
        page.insert(Some("cartCount"), &["cart__count"], |el| {
            el.text = "0".into();
        });
        page.insert(Some("category"), &["select"], |el| el.value = "all".into());
        page.insert(Some("sort"), &["select"], |el| el.value = "featured".into());
        page.insert(Some("resetFilters"), &["btn"], |_| {});
        page.insert(Some("gridBtn"), &["btn", "btn--active"], |_| {});
        page.insert(Some("listBtn"), &["btn"], |_| {});
        page.insert(None, &["search"], |_| {});
        page.insert(Some("q"), &["search__input"], |_| {});
        for range in PRICE_RANGES {
            page.insert(None, &["price"], |el| {
                el.value = range.to_string();
                el.attributes.insert("type".into(), "checkbox".into());
            });
        }

        page
    }

    fn insert(
        &self,
        id: Option<&str>,
        classes: &[&str],
        init: impl FnOnce(&mut Element),
    ) -> ElementHandle {
        let mut tree = self.inner.lock();
        let handle = match (id, classes.first()) {
            (Some(id), _) => ElementHandle(format!("#{id}")),
            (None, Some(class)) => ElementHandle(format!(".{}[{}]", class, tree.order.len())),
            (None, None) => ElementHandle(format!("[{}]", tree.order.len())),
        };

        let mut element = Element {
            id: id.map(str::to_string),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            ..Element::default()
        };
        init(&mut element);

        tree.order.push(handle.clone());
        tree.elements.insert(handle.clone(), element);
        handle
    }

    fn with_element<R>(&self, element: &ElementHandle, f: impl FnOnce(&mut Element) -> R) -> Option<R> {
        let mut tree = self.inner.lock();
        match tree.elements.get_mut(element) {
            Some(el) => Some(f(el)),
            None => {
                tracing::warn!("No element for handle {}", element);
                None
            }
        }
    }

    fn require(&self, selector: &str) -> Result<ElementHandle, PageError> {
        self.query_element(selector)
            .ok_or_else(|| PageError::MissingElement(selector.to_string()))
    }

    // -------------------------------------------------------------------------
    // Acting as the user
    // -------------------------------------------------------------------------

    /// Deliver an event to every handler bound on the element.
    ///
    /// Returns the number of handlers invoked.
    pub fn fire(&self, element: &ElementHandle, event: DomEvent) -> usize {
        // Collect first so handlers run without the page locked
        let handlers: Vec<Handler> = {
            let tree = self.inner.lock();
            tree.bindings
                .iter()
                .filter(|b| &b.element == element && b.event == event.name)
                .map(|b| b.handler.clone())
                .collect()
        };

        for handler in &handlers {
            handler(&event);
        }
        handlers.len()
    }

    /// Set a select control's value and fire `change`.
    pub fn select(&self, selector: &str, value: &str) -> Result<(), PageError> {
        let element = self.require(selector)?;
        self.set_value(&element, value);
        self.fire(&element, DomEvent::new("change"));
        Ok(())
    }

    /// Check or uncheck the price checkbox with the given range and fire `change`.
    pub fn set_price_range(&self, range: &str, checked: bool) -> Result<(), PageError> {
        let element = self
            .query_all(selectors::PRICE)
            .into_iter()
            .find(|el| self.value(el) == range)
            .ok_or_else(|| PageError::MissingElement(format!("{}[value={range}]", selectors::PRICE)))?;
        self.set_checked(&element, checked);
        self.fire(&element, DomEvent::new("change"));
        Ok(())
    }

    /// Fire `click` on an element.
    pub fn click(&self, selector: &str) -> Result<(), PageError> {
        let element = self.require(selector)?;
        self.fire(&element, DomEvent::new("click"));
        Ok(())
    }

    /// Type into the search box and submit the search form.
    pub fn submit_search(&self, text: &str) -> Result<(), PageError> {
        let input = self.require(selectors::QUERY)?;
        let form = self.require(selectors::SEARCH_FORM)?;
        self.set_value(&input, text);
        self.fire(&form, DomEvent::new("submit"));
        Ok(())
    }

    /// Click a card button. The click bubbles to the grid container.
    ///
    /// Returns false if no such button is currently rendered.
    pub fn click_card(&self, action: &CardAction) -> Result<bool, PageError> {
        let grid = self.require(selectors::GRID)?;
        let attribute = action_attribute(action.kind, &action.name);
        let visible = self
            .with_element(&grid, |el| el.markup.contains(&attribute))
            .unwrap_or(false);

        if !visible {
            tracing::debug!("No visible button for {}", action);
            return Ok(false);
        }

        self.fire(&grid, DomEvent::new("click").with_action(action.to_string()));
        Ok(true)
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    pub fn text(&self, selector: &str) -> Option<String> {
        let element = self.query_element(selector)?;
        self.with_element(&element, |el| el.text.clone())
    }

    pub fn markup(&self, selector: &str) -> Option<String> {
        let element = self.query_element(selector)?;
        self.with_element(&element, |el| el.markup.clone())
    }

    pub fn attribute(&self, selector: &str, name: &str) -> Option<String> {
        let element = self.query_element(selector)?;
        self.with_element(&element, |el| el.attributes.get(name).cloned())
            .flatten()
    }

    /// Space-separated class list.
    pub fn class_name(&self, selector: &str) -> Option<String> {
        let element = self.query_element(selector)?;
        self.with_element(&element, |el| el.classes.join(" "))
    }

    pub fn has_class(&self, selector: &str, class: &str) -> bool {
        self.query_element(selector)
            .and_then(|element| self.with_element(&element, |el| el.classes.iter().any(|c| c == class)))
            .unwrap_or(false)
    }

    /// Number of handlers bound for an event on the element.
    pub fn handler_count(&self, selector: &str, event: &str) -> usize {
        let Some(element) = self.query_element(selector) else {
            return 0;
        };
        self.inner
            .lock()
            .bindings
            .iter()
            .filter(|b| b.element == element && b.event == event)
            .count()
    }
}

impl Page for MemoryPage {
    fn query_element(&self, selector: &str) -> Option<ElementHandle> {
        let tree = self.inner.lock();
        tree.order
            .iter()
            .find(|h| tree.elements.get(*h).is_some_and(|el| el.matches(selector)))
            .cloned()
    }

    fn query_all(&self, selector: &str) -> Vec<ElementHandle> {
        let tree = self.inner.lock();
        tree.order
            .iter()
            .filter(|h| tree.elements.get(*h).is_some_and(|el| el.matches(selector)))
            .cloned()
            .collect()
    }

    fn on(&self, element: &ElementHandle, event: &str, handler: Handler) {
        self.inner.lock().bindings.push(Binding {
            element: element.clone(),
            event: event.to_string(),
            handler,
        });
    }

    fn set_markup(&self, element: &ElementHandle, html: &str) {
        self.with_element(element, |el| el.markup = html.to_string());
    }

    fn set_text(&self, element: &ElementHandle, text: &str) {
        self.with_element(element, |el| el.text = text.to_string());
    }

    fn set_attribute(&self, element: &ElementHandle, name: &str, value: &str) {
        self.with_element(element, |el| {
            el.attributes.insert(name.to_string(), value.to_string());
        });
    }

    fn set_class_name(&self, element: &ElementHandle, class_name: &str) {
        self.with_element(element, |el| {
            el.classes = class_name.split_whitespace().map(str::to_string).collect();
        });
    }

    fn add_class(&self, element: &ElementHandle, class: &str) {
        self.with_element(element, |el| {
            if !el.classes.iter().any(|c| c == class) {
                el.classes.push(class.to_string());
            }
        });
    }

    fn remove_class(&self, element: &ElementHandle, class: &str) {
        self.with_element(element, |el| el.classes.retain(|c| c != class));
    }

    fn value(&self, element: &ElementHandle) -> String {
        self.with_element(element, |el| el.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&self, element: &ElementHandle, value: &str) {
        self.with_element(element, |el| el.value = value.to_string());
    }

    fn is_checked(&self, element: &ElementHandle) -> bool {
        self.with_element(element, |el| el.checked).unwrap_or(false)
    }

    fn set_checked(&self, element: &ElementHandle, checked: bool) {
        self.with_element(element, |el| el.checked = checked);
    }
}

// =============================================================================
// Tests
// =============================================================================
