//! vlist - windowed list engine for the web
//!
//! Renders arbitrarily long fixed-height lists in the browser via
//! WebAssembly by materializing only the currently visible slice:
//! - Pure windowing math: scroll offset in, contiguous index range out
//! - Trailing overscan margin for smooth forward scrolling
//! - Native scrollbar fidelity via a spacer sized to the full extent
//! - Rendering cost bounded by viewport size, not item count
//! - Explicit create / notify / dispose lifecycle for any UI adapter
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { VListView } from 'vlist';
//! await init();
//! const view = new VListView(host, { itemCount: 10000, itemHeight: 35, height: 400 },
//!   (index, placement, data) => renderRow(index, data));
//! ```
//!
//! # Usage (Rust)
//!
//! ```
//! use vlist::{ListOptions, ListView};
//!
//! let options = ListOptions::new(1000, 50.0, 500.0);
//! let mut view = ListView::new(options, Box::new(|placement, data: Option<&String>| {
//!     (placement.index, placement.top, data.cloned())
//! }))?;
//! let visible = view.handle_scroll(2475.0)?;
//! assert_eq!(visible.first().map(|item| item.0), Some(49));
//! # Ok::<(), vlist::VlistError>(())
//! ```

pub mod error;
pub mod types;

// Windowing math
pub mod layout;

// Engine and adapters
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{Result, VlistError};
pub use layout::{window, ListWindow};
pub use viewer::{ListView, RenderFn, ScrollMetrics, ScrollState};

#[cfg(target_arch = "wasm32")]
pub use viewer::VListView;

pub use types::*;

/// Compute a window from JSON options and return the result as JSON.
///
/// # Arguments
/// * `options_json` - camelCase `ListOptions` object
/// * `scroll_top` - current scroll offset
///
/// # Errors
/// Returns an error for malformed options or an invalid item height.
#[wasm_bindgen]
pub fn compute_window_json(
    options_json: &str,
    scroll_top: f32,
) -> std::result::Result<String, JsValue> {
    let options: ListOptions = serde_json::from_str(options_json)
        .map_err(|e| JsValue::from_str(&format!("invalid options: {e}")))?;

    let win = window(&options, scroll_top).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&win)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
}

/// Compute a window from a JS options object and return it as a `JsValue`.
///
/// This is more efficient than [`compute_window_json`] when the result will
/// be used directly in JavaScript.
///
/// # Errors
/// Returns an error for malformed options or an invalid item height.
#[wasm_bindgen]
pub fn compute_window(
    options: JsValue,
    scroll_top: f32,
) -> std::result::Result<JsValue, JsValue> {
    let options: ListOptions = serde_wasm_bindgen::from_value(options)
        .map_err(|e| JsValue::from_str(&format!("invalid options: {e}")))?;

    let win = window(&options, scroll_top).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&win).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
