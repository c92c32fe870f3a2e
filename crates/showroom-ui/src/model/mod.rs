//! State model for the Showroom UI.
//!
//! All types are page-independent for testability.

mod state;

pub use state::{RenderTracker, SessionState, ToastState, ViewMode};
