//! UI state model for the Showroom catalog browser.
//!
//! These types are page-independent to enable testing without a live page.
//! The storefront owns exactly one of each.

// =============================================================================
// View Mode
// =============================================================================

/// Grid/list presentation of the product grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// Toast text shown when switching to this mode.
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid view",
            ViewMode::List => "List view",
        }
    }
}

// =============================================================================
// Session State
// =============================================================================

/// Transient per-session state. Lost when the process exits.
///
/// The cart count only ever grows; there is no in-app reset.
#[derive(Debug, Default)]
pub struct SessionState {
    cart_count: u64,
    view_mode: ViewMode,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cart_count(&self) -> u64 {
        self.cart_count
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Add one item to the cart. Returns the new count.
    pub fn add_to_cart(&mut self) -> u64 {
        self.cart_count += 1;
        self.cart_count
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }
}

// =============================================================================
// Toast
// =============================================================================

/// The single toast element. Newest message replaces the current one.
///
/// Each `show` starts a new visibility window; only the expiry of the
/// latest window hides the toast.
#[derive(Debug, Default)]
pub struct ToastState {
    message: Option<String>,
    visible: bool,
    generation: u64,
}

impl ToastState {
    /// Show a message. Returns the generation to pass to `expire`.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.message = Some(message.into());
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Hide the toast if `generation` is still the latest window.
    ///
    /// Returns true if the toast was hidden.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

// =============================================================================
// Render Tracker
// =============================================================================

/// Generation counter for deferred renders.
///
/// Every render bumps the generation. A deferred render only applies if
/// nothing else rendered since it was scheduled.
#[derive(Debug, Default)]
pub struct RenderTracker {
    generation: u64,
    pending: Option<u64>,
}

impl RenderTracker {
    /// Start a deferred render. Returns its generation.
    pub fn begin_deferred(&mut self) -> u64 {
        self.generation += 1;
        self.pending = Some(self.generation);
        self.generation
    }

    /// Record an immediate render, invalidating any pending one.
    pub fn begin_immediate(&mut self) -> u64 {
        self.generation += 1;
        self.pending = None;
        self.generation
    }

    /// Claim a deferred render. False if it went stale.
    pub fn complete(&mut self, generation: u64) -> bool {
        if self.pending == Some(generation) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Whether a deferred render is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// =============================================================================
// Tests
// =============================================================================
