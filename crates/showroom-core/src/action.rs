//! Card action payloads.
//!
//! Each product card exposes two buttons whose data attributes carry the
//! product *name* (not its id). Handlers receive that name back, so toast
//! text always names what the user clicked. Two products sharing a name
//! cannot be told apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of action button on a product card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardActionKind {
    View,
    Add,
}

impl CardActionKind {
    /// Data attribute that carries the payload for this kind.
    pub fn data_attribute(&self) -> &'static str {
        match self {
            CardActionKind::View => "data-view",
            CardActionKind::Add => "data-add",
        }
    }

    fn prefix(&self) -> &'static str {
        match self {
            CardActionKind::View => "view",
            CardActionKind::Add => "add",
        }
    }
}

/// A clicked card action with its name payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAction {
    pub kind: CardActionKind,
    pub name: String,
}

impl CardAction {
    pub fn view(name: impl Into<String>) -> Self {
        Self {
            kind: CardActionKind::View,
            name: name.into(),
        }
    }

    pub fn add(name: impl Into<String>) -> Self {
        Self {
            kind: CardActionKind::Add,
            name: name.into(),
        }
    }

    /// Parse a `view:<name>` or `add:<name>` payload.
    pub fn parse(payload: &str) -> Option<Self> {
        let (kind, name) = payload.split_once(':')?;
        let kind = match kind {
            "view" => CardActionKind::View,
            "add" => CardActionKind::Add,
            _ => return None,
        };
        Some(Self {
            kind,
            name: name.to_string(),
        })
    }

    /// Toast text shown when this action fires.
    pub fn toast_message(&self) -> String {
        match self.kind {
            CardActionKind::View => format!("Viewing: {}", self.name),
            CardActionKind::Add => format!("Added to cart: {}", self.name),
        }
    }
}

impl fmt::Display for CardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.prefix(), self.name)
    }
}
