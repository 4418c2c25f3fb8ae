//! Scroll state for one mounted list instance.
//!
//! The holder owns the last-known scroll offset and a dirty flag. Offsets
//! arrive from the boundary (a DOM scroll event, a test harness) and are
//! last-write-wins: no queuing, no coalescing beyond what the event source
//! already does.

use serde::Serialize;

/// Tracks the most recent scroll offset and whether the window computed
/// from it is stale.
///
/// Two logical states: *idle* (window computed and valid for the held
/// offset) and *dirty* (a notification arrived since the last computation).
/// Notification transitions idle to dirty; recomputation transitions dirty
/// back to idle. The offset starts at 0 and is discarded with the instance.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    offset: f32,
    dirty: bool,
}

impl ScrollState {
    /// Fresh state at offset 0, idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a scroll notification: replace the held offset
    /// unconditionally and mark the window stale.
    pub fn notify(&mut self, offset: f32) {
        self.offset = offset;
        self.dirty = true;
    }

    /// The held offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// True while a notification has not yet been folded into a window.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the held offset as folded into a computed window.
    pub fn mark_computed(&mut self) {
        self.dirty = false;
    }
}

/// Snapshot of the most recent recomputation, for callers that want to
/// observe what the engine did with a notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    /// Offset delivered by the notification.
    pub offset: f32,
    /// Total scrollable extent at computation time.
    pub total_extent: f32,
    /// Viewport height used for the computation.
    pub viewport_height: f32,
    /// Number of items the computed window materializes.
    pub windowed_items: usize,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;

    #[test]
    fn starts_idle_at_zero() {
        let state = ScrollState::new();
        assert_eq!(state.offset(), 0.0);
        assert!(!state.is_dirty());
    }

    #[test]
    fn notify_is_last_write_wins() {
        let mut state = ScrollState::new();
        state.notify(120.0);
        state.notify(80.0);
        state.notify(455.5);
        assert_eq!(state.offset(), 455.5);
        assert!(state.is_dirty());
    }

    #[test]
    fn recompute_returns_to_idle() {
        let mut state = ScrollState::new();
        state.notify(120.0);
        assert!(state.is_dirty());
        state.mark_computed();
        assert!(!state.is_dirty());
        // Offset survives the transition
        assert_eq!(state.offset(), 120.0);
    }
}
