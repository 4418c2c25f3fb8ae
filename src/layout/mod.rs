//! Layout engine for the windowed list.
//!
//! This module handles:
//! - Computing the total scrollable extent from item count and height
//! - Mapping a scroll offset to the contiguous range of visible item indices
//! - Building absolute position descriptors for each windowed item

mod window;

pub use window::{placement, window, ListWindow};
