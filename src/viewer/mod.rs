//! The windowed list engine - the primary entry point.
//!
//! A `ListView` owns the scroll state for one mounted list instance and
//! turns scroll notifications into the ordered set of rendered items. The
//! lifecycle is explicit: create with validated options, feed offsets via
//! [`ListView::handle_scroll`], read the current set via
//! [`ListView::visible_items`], and tear down with [`ListView::dispose`].
//! UI adapters (such as the browser adapter in this module's `dom`
//! submodule) map their own mount/scroll/unmount events onto these calls.

mod emit;
mod scroll;

#[cfg(target_arch = "wasm32")]
mod dom;

pub use scroll::{ScrollMetrics, ScrollState};

#[cfg(target_arch = "wasm32")]
pub use dom::VListView;

use crate::error::Result;
use crate::layout::{window, ListWindow};
use crate::types::{ItemPlacement, ListOptions};

/// Rendering callback: receives the position descriptor and the optional
/// data element for one index, returns an opaque renderable.
pub type RenderFn<T, R> = Box<dyn FnMut(ItemPlacement, Option<&T>) -> R>;

/// A windowed list engine instance.
///
/// Generic over the data element type `T` and the renderable type `R`
/// produced by the callback. Single-threaded by construction: the scroll
/// offset is owned exclusively by this instance and every operation is
/// synchronous.
pub struct ListView<T, R> {
    options: ListOptions,
    data: Option<Vec<T>>,
    render: Option<RenderFn<T, R>>,
    scroll: ScrollState,
    last_metrics: Option<ScrollMetrics>,
}

impl<T, R> ListView<T, R> {
    /// Create an engine for `options` with the given rendering callback.
    ///
    /// The scroll offset starts at 0. Options are validated here, once, so
    /// the scroll path never re-raises the configuration error.
    ///
    /// # Errors
    /// Returns a configuration error when `options.item_height` is not a
    /// positive finite number.
    pub fn new(options: ListOptions, render: RenderFn<T, R>) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            options,
            data: None,
            render: Some(render),
            scroll: ScrollState::new(),
            last_metrics: None,
        })
    }

    /// Attach the optional data sequence, aligned to the list by index.
    ///
    /// The sequence may be shorter than the item count; indices past its
    /// end render without a data element.
    #[must_use]
    pub fn with_data(mut self, data: Vec<T>) -> Self {
        self.data = Some(data);
        self
    }

    /// The engine options this instance was created with.
    #[must_use]
    pub fn options(&self) -> &ListOptions {
        &self.options
    }

    /// Full scrollable content height.
    #[must_use]
    pub fn total_extent(&self) -> f32 {
        self.options.total_extent()
    }

    /// The currently held scroll offset.
    #[must_use]
    pub fn scroll_top(&self) -> f32 {
        self.scroll.offset()
    }

    /// True while a notification has arrived since the last recomputation.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.scroll.is_dirty()
    }

    /// Snapshot of the most recent recomputation, if any.
    #[must_use]
    pub fn scroll_metrics(&self) -> Option<ScrollMetrics> {
        self.last_metrics
    }

    /// Compute the window at the currently held offset without emitting.
    ///
    /// # Errors
    /// Propagates the configuration error; unreachable after a successful
    /// [`ListView::new`] since options are immutable.
    pub fn window(&self) -> Result<ListWindow> {
        window(&self.options, self.scroll.offset())
    }

    /// Process one scroll notification: replace the held offset
    /// (last-write-wins), recompute the window synchronously, and return
    /// the new visible set in index order.
    ///
    /// After [`ListView::dispose`] this emits nothing and returns an empty
    /// set - a notification from a detached source is not an error.
    ///
    /// # Errors
    /// Propagates the configuration error; unreachable after a successful
    /// [`ListView::new`].
    pub fn handle_scroll(&mut self, offset: f32) -> Result<Vec<R>> {
        if self.render.is_none() {
            return Ok(Vec::new());
        }
        self.scroll.notify(offset);
        self.recompute()
    }

    /// Recompute the window at the current offset and return the visible
    /// set. Re-invokes the rendering callback for every windowed index;
    /// nothing is cached between calls.
    ///
    /// # Errors
    /// Propagates the configuration error; unreachable after a successful
    /// [`ListView::new`].
    pub fn visible_items(&mut self) -> Result<Vec<R>> {
        if self.render.is_none() {
            return Ok(Vec::new());
        }
        self.recompute()
    }

    /// Tear down this instance: drop the rendering callback and the data
    /// sequence. Idempotent, and safe to call on a partially initialized
    /// instance. Subsequent notifications emit nothing.
    pub fn dispose(&mut self) {
        self.render = None;
        self.data = None;
        self.last_metrics = None;
    }

    /// True once [`ListView::dispose`] has run.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.render.is_none()
    }

    fn recompute(&mut self) -> Result<Vec<R>> {
        let win = window(&self.options, self.scroll.offset())?;
        let items = match self.render.as_mut() {
            Some(render) => emit::emit(&self.options, &win, self.data.as_deref(), render),
            None => Vec::new(),
        };
        self.scroll.mark_computed();
        self.last_metrics = Some(ScrollMetrics {
            offset: self.scroll.offset(),
            total_extent: win.total_extent,
            viewport_height: self.options.height,
            windowed_items: win.len(),
        });
        Ok(items)
    }
}
