//! Item emission: turning a computed window into rendered items.

use crate::layout::{placement, ListWindow};
use crate::types::{ItemPlacement, ListOptions};

/// Invoke `render` once per windowed index, ascending, and collect the
/// results in exactly that order. Index order is the only guaranteed
/// order; nothing is reordered, deduplicated, or sorted by another key.
///
/// Data elements are matched by index. A data sequence shorter than the
/// item count yields `None` for indices past its end; the callback must
/// tolerate absent data.
///
/// No caching across calls: every recomputation re-invokes `render` for
/// every windowed index, visible last time or not. The redundant work is
/// bounded by viewport size plus overscan, never by the item count.
pub(crate) fn emit<T, R>(
    options: &ListOptions,
    window: &ListWindow,
    data: Option<&[T]>,
    render: &mut dyn FnMut(ItemPlacement, Option<&T>) -> R,
) -> Vec<R> {
    let mut items = Vec::with_capacity(window.len());
    for index in window.indices() {
        let element = data.and_then(|d| d.get(index));
        items.push(render(placement(options, index), element));
    }
    items
}
