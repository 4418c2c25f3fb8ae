//! Data types for the windowed list engine.
//!
//! Field names serialize in camelCase so the option and descriptor objects
//! cross the JS boundary with their JavaScript spellings (`itemCount`,
//! `itemHeight`, ...).

use serde::{Deserialize, Serialize};

use crate::error::{Result, VlistError};

/// Default overscan: extra items rendered past the bottom of the visible
/// range for smoother forward scrolling.
pub const DEFAULT_OVERSCAN: usize = 3;

/// A display dimension: a pixel count or a raw CSS length like `"100%"`.
///
/// Widths are display-only pass-throughs; they never enter the windowing
/// math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    /// Length in CSS pixels.
    Px(f32),
    /// Raw CSS length ("100%", "40em", ...).
    Css(String),
}

impl Default for Dimension {
    fn default() -> Self {
        Self::Css("100%".to_string())
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{px}px"),
            Self::Css(css) => f.write_str(css),
        }
    }
}

/// Engine configuration for one mounted list instance.
///
/// Options are supplied once, at creation, and treated as stable for the
/// lifetime of that instance; changing any of them is equivalent to
/// re-instantiating the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOptions {
    /// Total number of logical items.
    pub item_count: usize,
    /// Uniform height of each item, in CSS pixels. Must be > 0.
    pub item_height: f32,
    /// Height of the scrollable viewport, in CSS pixels.
    pub height: f32,
    /// Width of the list (display-only).
    #[serde(default)]
    pub width: Dimension,
    /// Extra items rendered past the bottom of the visible range.
    #[serde(default = "default_overscan")]
    pub overscan: usize,
}

fn default_overscan() -> usize {
    DEFAULT_OVERSCAN
}

impl ListOptions {
    /// Create options with the default width ("100%") and overscan.
    #[must_use]
    pub fn new(item_count: usize, item_height: f32, height: f32) -> Self {
        Self {
            item_count,
            item_height,
            height,
            width: Dimension::default(),
            overscan: DEFAULT_OVERSCAN,
        }
    }

    /// Set the overscan count.
    #[must_use]
    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Set the display width.
    #[must_use]
    pub fn with_width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    /// Check the fatal configuration condition: a non-positive or non-finite
    /// item height would make index math divide by zero (or worse).
    ///
    /// # Errors
    /// Returns [`VlistError::ItemHeight`] when `item_height` is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<()> {
        if !(self.item_height.is_finite() && self.item_height > 0.0) {
            return Err(VlistError::ItemHeight(self.item_height));
        }
        Ok(())
    }

    /// Full scrollable content height implied by all items.
    ///
    /// This is what the native scrollbar reflects, even though most items
    /// are never materialized.
    #[must_use]
    pub fn total_extent(&self) -> f32 {
        self.item_count as f32 * self.item_height
    }
}

/// Position descriptor handed to the rendering callback for one item.
///
/// Ephemeral: rebuilt on every window recomputation, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPlacement {
    /// Item index within the logical list.
    pub index: usize,
    /// Absolute offset from the top of the scrollable content,
    /// `index * item_height`.
    pub top: f32,
    /// Item height (uniform across the list).
    pub height: f32,
    /// Display width pass-through.
    pub width: Dimension,
}
