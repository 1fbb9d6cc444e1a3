use serde::{Deserialize, Serialize};

/// A single data sample.
///
/// The optional tag is an opaque payload carried through to highlight
/// consumers; the core never interprets it. Equality covers `(x, y, tag)`.
/// The setters deliberately do not touch any owning aggregate's cached
/// extrema: callers batch mutations and trigger a recompute explicitly.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Entry {
    x: f64,
    y: f64,
    #[serde(default)]
    tag: Option<String>,
}

impl Entry {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, tag: None }
    }

    #[must_use]
    pub fn with_tag(x: f64, y: f64, tag: impl Into<String>) -> Self {
        Self {
            x,
            y,
            tag: Some(tag.into()),
        }
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Mutates x without recomputing owning aggregates.
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Mutates y without recomputing owning aggregates.
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }
}
