//! Page frontend for the Showroom catalog browser.
//!
//! This crate provides:
//! - The `Page` capability interface and an in-memory page
//! - Renderers for product cards, the grid and status text
//! - The storefront event loop and session state

pub mod events;
pub mod model;
pub mod page;
pub mod storefront;
pub mod views;

// Re-export commonly used types
pub use events::UiEvent;
pub use model::{RenderTracker, SessionState, ToastState, ViewMode};
pub use page::{DomEvent, ElementHandle, Handler, MemoryPage, Page, PageError};
pub use storefront::Storefront;
