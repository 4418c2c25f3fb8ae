//! Visible-window computation for fixed-height lists.
//!
//! Pure math, no state: given the engine options and a scroll offset,
//! produce the total scrollable extent and the inclusive range of item
//! indices that must be materialized.

use serde::Serialize;

use crate::error::Result;
use crate::types::{ItemPlacement, ListOptions};

/// The computed window at one scroll position.
///
/// `range` is `None` when nothing should be materialized: an empty list, or
/// a scroll offset so far past the extent that the clamped start index
/// overtakes the clamped end index. Callers drive emission off `indices()`
/// and never see out-of-bounds values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWindow {
    /// Full scrollable content height, `item_count * item_height`.
    pub total_extent: f32,
    /// Inclusive `(start, end)` item indices, or `None` when empty.
    pub range: Option<(usize, usize)>,
}

impl ListWindow {
    /// Number of items in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.range {
            Some((start, end)) => end - start + 1,
            None => 0,
        }
    }

    /// True when no items are windowed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.range.is_none()
    }

    /// The windowed indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        let (start, end_exclusive) = match self.range {
            Some((start, end)) => (start, end + 1),
            None => (0, 0),
        };
        start..end_exclusive
    }
}

/// Compute the window for `options` at `scroll_top`.
///
/// The visible range starts at the item under the viewport top edge and
/// ends `overscan` items past the item under the bottom edge, clamped to
/// the list bounds. Overscan extends only the trailing (downward-scroll)
/// edge; the leading edge gets none.
///
/// `scroll_top` itself is never clamped to the scrollable extent —
/// negative or far-out-of-range offsets are absorbed by the index
/// clamping, not rejected.
///
/// # Errors
/// Returns a configuration error when `options.item_height` is not a
/// positive finite number.
pub fn window(options: &ListOptions, scroll_top: f32) -> Result<ListWindow> {
    options.validate()?;

    let total_extent = options.total_extent();
    if options.item_count == 0 {
        return Ok(ListWindow {
            total_extent,
            range: None,
        });
    }

    let start = index_at(scroll_top, options.item_height);
    let raw_end =
        index_at(scroll_top + options.height, options.item_height).saturating_add(options.overscan);
    let end = raw_end.min(options.item_count - 1);

    let range = if start <= end { Some((start, end)) } else { None };
    Ok(ListWindow {
        total_extent,
        range,
    })
}

/// Build the position descriptor for one windowed item.
#[must_use]
pub fn placement(options: &ListOptions, index: usize) -> ItemPlacement {
    ItemPlacement {
        index,
        top: index as f32 * options.item_height,
        height: options.item_height,
        width: options.width.clone(),
    }
}

/// Floor-divide a scroll offset into an item index.
///
/// Negative and NaN offsets land at index 0; offsets past the addressable
/// range saturate at `usize::MAX` (callers clamp against the item count).
// Casts are guarded: idx is non-negative, finite, and in range below.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn index_at(offset: f32, item_height: f32) -> usize {
    let idx = (offset / item_height).floor();
    if idx <= 0.0 || idx.is_nan() {
        return 0;
    }
    if idx >= usize::MAX as f32 {
        return usize::MAX;
    }
    idx as usize
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::float_cmp)]

    use super::*;

    #[test]
    fn index_at_floors() {
        assert_eq!(index_at(0.0, 50.0), 0);
        assert_eq!(index_at(49.9, 50.0), 0);
        assert_eq!(index_at(50.0, 50.0), 1);
        assert_eq!(index_at(2475.0, 50.0), 49);
    }

    #[test]
    fn index_at_tolerates_garbage_offsets() {
        assert_eq!(index_at(-300.0, 50.0), 0);
        assert_eq!(index_at(f32::NAN, 50.0), 0);
        assert_eq!(index_at(f32::INFINITY, 50.0), usize::MAX);
    }

    #[test]
    fn empty_list_has_no_range() {
        let options = ListOptions::new(0, 50.0, 500.0);
        let win = window(&options, 0.0).unwrap();
        assert!(win.is_empty());
        assert_eq!(win.total_extent, 0.0);
        assert_eq!(win.indices().count(), 0);
    }

    #[test]
    fn far_overscroll_yields_empty_range() {
        let options = ListOptions::new(10, 50.0, 500.0);
        let win = window(&options, 100_000.0).unwrap();
        assert!(win.is_empty());
        assert_eq!(win.len(), 0);
    }

    #[test]
    fn zero_height_items_are_rejected() {
        let options = ListOptions::new(10, 0.0, 500.0);
        assert!(window(&options, 0.0).is_err());
    }
}
