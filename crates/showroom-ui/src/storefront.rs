//! Storefront - the interaction layer.
//!
//! Owns the session state and drives the filter → sort → render pipeline
//! in response to `UiEvent`s.
//!
//! ## Architecture
//!
//! - The page owns control state (category, sort, checkboxes, search text)
//! - The storefront owns session state (cart count, view mode, toast)
//! - Every event is handled on one loop; timers post back into it

use std::future::Future;
use std::time::Duration;

use showroom_core::query::normalize_query;
use showroom_core::{
    filter_products, search_products, CardAction, CardActionKind, Catalog, FilterSelection,
    Product, QueryError, TimingConfig,
};
use tokio::sync::mpsc;

use crate::events::{
    bind_all, delegate_card_clicks, forward, EventReceiver, EventSender, UiEvent,
};
use crate::model::{RenderTracker, SessionState, ToastState, ViewMode};
use crate::page::{selectors, ElementHandle, Page, PageError};
use crate::views::{grid_class, grid_html, search_status, shown_status, LOADING_STATUS};

// =============================================================================
// Elements
// =============================================================================

/// Handles for every element the storefront touches, resolved once.
#[derive(Debug)]
struct Elements {
    grid: ElementHandle,
    status: ElementHandle,
    toast: ElementHandle,
    cart_count: ElementHandle,
    category: ElementHandle,
    sort: ElementHandle,
    reset: ElementHandle,
    grid_button: ElementHandle,
    list_button: ElementHandle,
    query: ElementHandle,
    search_form: ElementHandle,
    prices: Vec<ElementHandle>,
}

impl Elements {
    fn resolve<P: Page>(page: &P) -> Result<Self, PageError> {
        let find = |selector: &str| {
            page.query_element(selector)
                .ok_or_else(|| PageError::MissingElement(selector.to_string()))
        };

        Ok(Self {
            grid: find(selectors::GRID)?,
            status: find(selectors::STATUS)?,
            toast: find(selectors::TOAST)?,
            cart_count: find(selectors::CART_COUNT)?,
            category: find(selectors::CATEGORY)?,
            sort: find(selectors::SORT)?,
            reset: find(selectors::RESET)?,
            grid_button: find(selectors::GRID_BUTTON)?,
            list_button: find(selectors::LIST_BUTTON)?,
            query: find(selectors::QUERY)?,
            search_form: find(selectors::SEARCH_FORM)?,
            prices: page.query_all(selectors::PRICE),
        })
    }
}

// =============================================================================
// Storefront
// =============================================================================

/// The catalog browser bound to a page.
pub struct Storefront<P: Page> {
    page: P,
    catalog: Catalog,
    timing: TimingConfig,
    elements: Elements,

    session: SessionState,
    toast: ToastState,
    renders: RenderTracker,

    /// Products currently in the grid markup.
    visible: Vec<Product>,

    /// Timers scheduled but not yet handled.
    pending_timers: usize,

    tx: EventSender,
    rx: EventReceiver,
}

impl<P: Page> Storefront<P> {
    /// Bind a storefront to a page.
    ///
    /// Fails if the page lacks a required element. Price checkboxes are
    /// optional.
    pub fn new(page: P, catalog: Catalog, timing: TimingConfig) -> Result<Self, PageError> {
        let elements = Elements::resolve(&page)?;
        let (tx, rx) = mpsc::unbounded_channel();

        let storefront = Self {
            page,
            catalog,
            timing,
            elements,
            session: SessionState::new(),
            toast: ToastState::default(),
            renders: RenderTracker::default(),
            visible: Vec::new(),
            pending_timers: 0,
            tx,
            rx,
        };
        storefront.bind_events();
        Ok(storefront)
    }

    /// Register page handlers. Called once; the grid uses delegation.
    fn bind_events(&self) {
        let page = &self.page;
        let el = &self.elements;
        let tx = &self.tx;

        bind_all(
            page,
            &[el.category.clone(), el.sort.clone()],
            "change",
            tx,
            UiEvent::FiltersChanged,
        );
        bind_all(page, &el.prices, "change", tx, UiEvent::FiltersChanged);
        page.on(&el.reset, "click", forward(tx, UiEvent::ResetFilters));
        page.on(
            &el.grid_button,
            "click",
            forward(tx, UiEvent::SetViewMode(ViewMode::Grid)),
        );
        page.on(
            &el.list_button,
            "click",
            forward(tx, UiEvent::SetViewMode(ViewMode::List)),
        );
        page.on(&el.search_form, "submit", forward(tx, UiEvent::SearchSubmitted));
        page.on(&el.grid, "click", delegate_card_clicks(tx));

        tracing::debug!(
            "Bound storefront events ({} price filters)",
            el.prices.len()
        );
    }

    /// Run the initial full-list render.
    pub fn start(&mut self) {
        tracing::info!("Storefront starting with {} products", self.catalog.len());
        self.render();
    }

    // -------------------------------------------------------------------------
    // Event loop
    // -------------------------------------------------------------------------

    /// Handle a single event.
    pub fn handle(&mut self, event: UiEvent) {
        if event.is_timer() {
            self.pending_timers = self.pending_timers.saturating_sub(1);
        }

        match event {
            UiEvent::FiltersChanged => self.render(),
            UiEvent::ResetFilters => self.reset_filters(),
            UiEvent::SetViewMode(mode) => self.set_view_mode(mode),
            UiEvent::SearchSubmitted => self.search(),
            UiEvent::Card(action) => self.card_action(action),
            UiEvent::RenderDue { generation } => self.complete_render(generation),
            UiEvent::ToastExpired { generation } => self.expire_toast(generation),
        }
    }

    /// Handle every event already queued. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.rx.try_recv() {
            self.handle(event);
            handled += 1;
        }
        handled
    }

    /// Wait for the next event and handle it.
    pub async fn step(&mut self) -> bool {
        match self.rx.recv().await {
            Some(event) => {
                self.handle(event);
                true
            }
            None => false,
        }
    }

    /// Handle events until no timer is outstanding.
    pub async fn settle(&mut self) {
        self.pump();
        while self.pending_timers > 0 {
            if !self.step().await {
                break;
            }
            self.pump();
        }
    }

    /// Run the event loop until `shutdown` completes.
    pub async fn run_until<F: Future>(mut self, shutdown: F) -> Self {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                event = self.rx.recv() => match event {
                    Some(event) => self.handle(event),
                    None => break,
                },
            }
        }
        tracing::info!("Storefront event loop stopped");
        self
    }

    /// Sender for injecting events from outside the page.
    pub fn sender(&self) -> EventSender {
        self.tx.clone()
    }

    fn schedule(&mut self, delay: Duration, event: UiEvent) {
        self.pending_timers += 1;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(event);
        });
    }

    // -------------------------------------------------------------------------
    // Full-list render
    // -------------------------------------------------------------------------

    /// Start a full-list render: loading status now, list after the latency.
    fn render(&mut self) {
        let generation = self.renders.begin_deferred();
        let el = &self.elements;

        self.page.set_text(&el.status, LOADING_STATUS);
        self.page.set_attribute(&el.grid, "aria-busy", "true");
        self.page.set_markup(&el.grid, "");
        self.visible.clear();

        let latency = self.timing.load_latency();
        if latency.is_zero() {
            self.complete_render(generation);
        } else {
            self.schedule(latency, UiEvent::RenderDue { generation });
        }
    }

    fn complete_render(&mut self, generation: u64) {
        if !self.renders.complete(generation) {
            tracing::debug!("Discarding stale render {}", generation);
            return;
        }

        let selection = self.read_selection();
        let products = filter_products(&self.catalog, &selection);
        let el = &self.elements;

        self.page.set_text(&el.status, &shown_status(products.len()));
        self.page.set_attribute(&el.grid, "aria-busy", "false");
        self.page
            .set_class_name(&el.grid, grid_class(self.session.view_mode()));
        self.page.set_markup(&el.grid, &grid_html(&products));

        tracing::debug!("Rendered {} products (generation {})", products.len(), generation);
        self.visible = products;
    }

    /// Read the filter selection from the controls.
    fn read_selection(&self) -> FilterSelection {
        let el = &self.elements;
        let ranges = el
            .prices
            .iter()
            .filter(|price| self.page.is_checked(price))
            .map(|price| self.page.value(price))
            .collect();

        FilterSelection::from_controls(
            &self.page.value(&el.category),
            &self.page.value(&el.sort),
            ranges,
        )
    }

    // -------------------------------------------------------------------------
    // Controls
    // -------------------------------------------------------------------------

    fn reset_filters(&mut self) {
        let el = &self.elements;
        self.page.set_value(&el.category, "all");
        self.page.set_value(&el.sort, "featured");
        for price in &el.prices {
            self.page.set_checked(price, false);
        }

        self.show_toast("Filters reset.");
        self.render();
    }

    fn set_view_mode(&mut self, mode: ViewMode) {
        self.session.set_view_mode(mode);

        let el = &self.elements;
        let (active, inactive) = match mode {
            ViewMode::Grid => (&el.grid_button, &el.list_button),
            ViewMode::List => (&el.list_button, &el.grid_button),
        };
        self.page.add_class(active, "btn--active");
        self.page.remove_class(inactive, "btn--active");

        self.show_toast(mode.label());
        self.render();
    }

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    fn run_search(&self, raw: &str) -> Result<(String, Vec<Product>), QueryError> {
        let query = normalize_query(raw)?;
        let found = search_products(&self.catalog, &query)?;
        Ok((query, found))
    }

    /// Search by name. Immediate, and ignores every other filter.
    fn search(&mut self) {
        let raw = self.page.value(&self.elements.query);
        let (query, found) = match self.run_search(&raw) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!("Search rejected: {}", e);
                self.show_toast(e.to_string());
                return;
            }
        };

        // Supersedes any pending full-list render
        self.renders.begin_immediate();

        let el = &self.elements;
        self.page
            .set_text(&el.status, &search_status(&query, found.len()));
        self.page.set_attribute(&el.grid, "aria-busy", "false");
        self.page.set_markup(&el.grid, &grid_html(&found));
        self.visible = found;

        self.show_toast(format!("Showing results for \"{query}\""));
    }

    // -------------------------------------------------------------------------
    // Cards
    // -------------------------------------------------------------------------

    fn card_action(&mut self, action: CardAction) {
        if action.kind == CardActionKind::Add {
            let count = self.session.add_to_cart();
            self.page
                .set_text(&self.elements.cart_count, &count.to_string());
            tracing::info!("Cart: {} item(s) after adding {:?}", count, action.name);
        }
        self.show_toast(action.toast_message());
    }

    // -------------------------------------------------------------------------
    // Toast
    // -------------------------------------------------------------------------

    fn show_toast(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.page.set_text(&self.elements.toast, &message);
        self.page.add_class(&self.elements.toast, "show");

        let generation = self.toast.show(message);
        self.schedule(
            self.timing.toast_duration(),
            UiEvent::ToastExpired { generation },
        );
    }

    fn expire_toast(&mut self, generation: u64) {
        if self.toast.expire(generation) {
            self.page.remove_class(&self.elements.toast, "show");
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn toast(&self) -> &ToastState {
        &self.toast
    }

    /// Products currently shown, in display order.
    pub fn visible_products(&self) -> &[Product] {
        &self.visible
    }

    /// Whether a full-list render is waiting on its latency.
    pub fn is_loading(&self) -> bool {
        self.renders.is_loading()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{MemoryPage, MockPage};
    use parking_lot::Mutex;
    use std::sync::Arc;
    use tokio::time::Instant;

    fn timing(load_latency_ms: u64) -> TimingConfig {
        TimingConfig {
            load_latency_ms,
            toast_duration_ms: 1600,
        }
    }

    fn storefront(load_latency_ms: u64) -> (MemoryPage, Storefront<MemoryPage>) {
        let page = MemoryPage::storefront();
        let storefront =
            Storefront::new(page.clone(), Catalog::sample(), timing(load_latency_ms)).unwrap();
        (page, storefront)
    }

    async fn started(load_latency_ms: u64) -> (MemoryPage, Storefront<MemoryPage>) {
        let (page, mut storefront) = storefront(load_latency_ms);
        storefront.start();
        storefront.settle().await;
        (page, storefront)
    }

    fn visible_ids<P: Page>(storefront: &Storefront<P>) -> Vec<u32> {
        storefront.visible_products().iter().map(|p| p.id).collect()
    }

    fn status(page: &MemoryPage) -> String {
        page.text(selectors::STATUS).unwrap_or_default()
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_render_is_two_phase() {
        let (page, mut storefront) = storefront(250);
        let started_at = Instant::now();

        storefront.start();
        assert!(storefront.is_loading());
        assert_eq!(status(&page), "Loading products...");
        assert_eq!(page.attribute(selectors::GRID, "aria-busy").as_deref(), Some("true"));
        assert_eq!(page.markup(selectors::GRID).as_deref(), Some(""));

        storefront.settle().await;
        assert!(started_at.elapsed() >= Duration::from_millis(250));
        assert!(!storefront.is_loading());
        assert_eq!(status(&page), "9 product(s) shown");
        assert_eq!(page.attribute(selectors::GRID, "aria-busy").as_deref(), Some("false"));
        assert_eq!(page.class_name(selectors::GRID).as_deref(), Some("grid"));
        assert_eq!(visible_ids(&storefront), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_latency_renders_synchronously() {
        let (page, mut storefront) = storefront(0);
        storefront.start();
        assert!(!storefront.is_loading());
        assert_eq!(status(&page), "9 product(s) shown");
    }

    #[tokio::test(start_paused = true)]
    async fn test_category_and_price_filter() {
        let (page, mut storefront) = started(250).await;

        page.select(selectors::CATEGORY, "ebike").unwrap();
        page.set_price_range("500-1000", true).unwrap();
        storefront.settle().await;

        assert_eq!(visible_ids(&storefront), vec![2]);
        assert_eq!(status(&page), "1 product(s) shown");
        let markup = page.markup(selectors::GRID).unwrap();
        assert!(markup.contains("Foldable E-Bike 500W"));
        assert!(!markup.contains("Urban E-Bike 750W"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sort_control() {
        let (page, mut storefront) = started(250).await;

        page.select(selectors::SORT, "priceDesc").unwrap();
        storefront.settle().await;
        assert_eq!(visible_ids(&storefront), vec![9, 4, 1, 7, 2, 3, 8, 5, 6]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restores_first_render() {
        let (page, mut storefront) = started(250).await;
        let first_markup = page.markup(selectors::GRID).unwrap();
        let first_ids = visible_ids(&storefront);

        page.select(selectors::CATEGORY, "scooter").unwrap();
        page.select(selectors::SORT, "nameAsc").unwrap();
        page.set_price_range("0-500", true).unwrap();
        page.set_price_range("500-1000", true).unwrap();
        storefront.settle().await;
        assert_eq!(visible_ids(&storefront), vec![7, 3]);

        page.click(selectors::RESET).unwrap();
        storefront.pump();
        assert_eq!(storefront.toast().message(), Some("Filters reset."));
        storefront.settle().await;

        assert_eq!(visible_ids(&storefront), first_ids);
        assert_eq!(page.markup(selectors::GRID).unwrap(), first_markup);
        let category = page.query_element(selectors::CATEGORY).unwrap();
        assert_eq!(page.value(&category), "all");
        let checked = page
            .query_all(selectors::PRICE)
            .iter()
            .filter(|el| page.is_checked(el))
            .count();
        assert_eq!(checked, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_ignores_filters_and_is_immediate() {
        let (page, mut storefront) = started(250).await;
        page.select(selectors::CATEGORY, "kids").unwrap();
        storefront.settle().await;

        page.submit_search("  EBike ").unwrap();
        storefront.pump();

        assert!(!storefront.is_loading());
        assert_eq!(visible_ids(&storefront), vec![1, 2, 9]);
        assert_eq!(status(&page), r#"Search results for "ebike": 3 item(s)"#);
        assert_eq!(
            storefront.toast().message(),
            Some(r#"Showing results for "ebike""#)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_search_is_rejected() {
        let (page, mut storefront) = started(250).await;
        let before = status(&page);

        page.submit_search("   ").unwrap();
        storefront.pump();

        assert_eq!(status(&page), before);
        assert_eq!(visible_ids(&storefront).len(), 9);
        assert_eq!(
            storefront.toast().message(),
            Some("Type something to search.")
        );
        assert!(page.has_class(selectors::TOAST, "show"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_supersedes_pending_render() {
        let (page, mut storefront) = started(250).await;

        page.select(selectors::SORT, "priceAsc").unwrap();
        page.submit_search("scooter").unwrap();
        storefront.settle().await;

        assert_eq!(visible_ids(&storefront), vec![3, 7]);
        assert_eq!(status(&page), r#"Search results for "scooter": 2 item(s)"#);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_render_is_discarded() {
        let (page, mut storefront) = storefront(250);
        storefront.start();

        tokio::time::sleep(Duration::from_millis(100)).await;
        page.select(selectors::SORT, "priceAsc").unwrap();
        storefront.pump();

        // First render's timer fires at 250ms but a newer render exists
        assert!(storefront.step().await);
        assert!(storefront.is_loading());
        assert_eq!(status(&page), "Loading products...");

        assert!(storefront.step().await);
        assert!(!storefront.is_loading());
        assert_eq!(visible_ids(&storefront), vec![6, 5, 8, 3, 2, 7, 1, 4, 9]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_to_cart_counts_every_click() {
        let (page, mut storefront) = started(250).await;

        for name in ["Urban E-Bike 750W", "Urban E-Bike 750W", "City Scooter Pro"] {
            assert!(page.click_card(&CardAction::add(name)).unwrap());
        }
        storefront.pump();
        assert_eq!(storefront.session().cart_count(), 3);
        assert_eq!(page.text(selectors::CART_COUNT).as_deref(), Some("3"));
        assert_eq!(
            storefront.toast().message(),
            Some("Added to cart: City Scooter Pro")
        );

        // Buttons keep working after a re-render
        page.select(selectors::CATEGORY, "kids").unwrap();
        storefront.settle().await;
        assert!(!page.click_card(&CardAction::add("City Scooter Pro")).unwrap());
        assert!(page.click_card(&CardAction::add("Electric Go-Kart")).unwrap());
        storefront.pump();
        assert_eq!(page.text(selectors::CART_COUNT).as_deref(), Some("4"));

        // And after a search
        page.submit_search("car").unwrap();
        storefront.pump();
        assert!(page.click_card(&CardAction::add("Kids Electric Car")).unwrap());
        storefront.pump();
        assert_eq!(storefront.session().cart_count(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_only_toasts() {
        let (page, mut storefront) = started(250).await;

        assert!(page.click_card(&CardAction::view("Smart Gadget Bundle")).unwrap());
        storefront.pump();

        assert_eq!(storefront.toast().message(), Some("Viewing: Smart Gadget Bundle"));
        assert_eq!(storefront.session().cart_count(), 0);
        assert_eq!(page.text(selectors::TOAST).as_deref(), Some("Viewing: Smart Gadget Bundle"));
        assert_eq!(visible_ids(&storefront).len(), 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_toggle_preserves_items() {
        let (page, mut storefront) = started(250).await;
        page.select(selectors::SORT, "nameAsc").unwrap();
        page.set_price_range("1000-1500", true).unwrap();
        storefront.settle().await;
        let ids = visible_ids(&storefront);

        page.click(selectors::LIST_BUTTON).unwrap();
        storefront.settle().await;
        assert_eq!(storefront.session().view_mode(), ViewMode::List);
        assert_eq!(page.class_name(selectors::GRID).as_deref(), Some("grid grid--list"));
        assert!(page.has_class(selectors::LIST_BUTTON, "btn--active"));
        assert!(!page.has_class(selectors::GRID_BUTTON, "btn--active"));
        assert_eq!(storefront.toast().message(), Some("List view"));
        assert_eq!(visible_ids(&storefront), ids);

        page.click(selectors::GRID_BUTTON).unwrap();
        storefront.settle().await;
        assert_eq!(page.class_name(selectors::GRID).as_deref(), Some("grid"));
        assert!(page.has_class(selectors::GRID_BUTTON, "btn--active"));
        assert_eq!(visible_ids(&storefront), ids);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_window_restarts() {
        let (page, mut storefront) = started(0).await;

        page.click_card(&CardAction::view("City Scooter Pro")).unwrap();
        storefront.pump();
        tokio::time::sleep(Duration::from_millis(1000)).await;

        page.click_card(&CardAction::view("Electric Go-Kart")).unwrap();
        storefront.pump();

        // First window ends at 1.6s; the newer toast stays up
        assert!(storefront.step().await);
        assert!(storefront.toast().is_visible());
        assert!(page.has_class(selectors::TOAST, "show"));

        // Second window ends at 2.6s
        assert!(storefront.step().await);
        assert!(!storefront.toast().is_visible());
        assert!(!page.has_class(selectors::TOAST, "show"));
        assert_eq!(page.text(selectors::TOAST).as_deref(), Some("Viewing: Electric Go-Kart"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_grid_uses_single_delegated_handler() {
        let (page, mut storefront) = started(250).await;
        for sort in ["priceAsc", "nameAsc", "featured"] {
            page.select(selectors::SORT, sort).unwrap();
            storefront.settle().await;
        }
        assert_eq!(page.handler_count(selectors::GRID, "click"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_until_handles_events() {
        let (page, storefront) = storefront(250);
        let tx = storefront.sender();
        tx.send(UiEvent::FiltersChanged).unwrap();

        let storefront = storefront
            .run_until(tokio::time::sleep(Duration::from_millis(300)))
            .await;
        assert_eq!(status(&page), "9 product(s) shown");
        assert_eq!(visible_ids(&storefront).len(), 9);
    }

    #[test]
    fn test_binds_every_control() {
        let bindings = Arc::new(Mutex::new(Vec::new()));
        let mut page = MockPage::new();
        page.expect_query_element()
            .returning(|selector| Some(ElementHandle(selector.to_string())));
        page.expect_query_all().returning(|_| {
            vec![
                ElementHandle(".price[0]".to_string()),
                ElementHandle(".price[1]".to_string()),
            ]
        });
        let recorded = bindings.clone();
        page.expect_on().returning(move |element, event, _| {
            recorded.lock().push(format!("{element} {event}"));
        });

        let storefront = Storefront::new(page, Catalog::sample(), timing(250));
        assert!(storefront.is_ok());

        let bindings = bindings.lock();
        for expected in [
            "#category change",
            "#sort change",
            ".price[0] change",
            ".price[1] change",
            "#resetFilters click",
            "#gridBtn click",
            "#listBtn click",
            ".search submit",
            "#productGrid click",
        ] {
            assert!(bindings.iter().any(|b| b == expected), "missing {expected}");
        }
        assert_eq!(bindings.len(), 9);
    }

    #[test]
    fn test_missing_element_fails() {
        let mut page = MockPage::new();
        page.expect_query_element()
            .returning(|selector| (selector != "#toast").then(|| ElementHandle(selector.to_string())));
        page.expect_query_all().returning(|_| Vec::new());
        page.expect_on().never();

        let result = Storefront::new(page, Catalog::sample(), timing(250));
        assert!(matches!(
            result,
            Err(PageError::MissingElement(selector)) if selector == "#toast"
        ));
    }
}
