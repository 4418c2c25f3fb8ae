//! Structured error types for vlist.
//!
//! The windowing math is total except for invalid configuration, so the
//! error surface is small: configuration problems caught at engine creation
//! (or at a standalone window computation), plus boundary failures in the
//! DOM adapter.

/// All errors that can occur when configuring or driving the engine.
#[derive(Debug, thiserror::Error)]
pub enum VlistError {
    /// Item height must be a positive, finite number.
    #[error("item height must be > 0, got {0}")]
    ItemHeight(f32),

    /// Invalid engine options received over the JS/JSON boundary.
    #[error("invalid options: {0}")]
    Options(String),

    /// DOM mount/teardown failure in the browser adapter.
    #[error("mount error: {0}")]
    Mount(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, VlistError>;

impl From<String> for VlistError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for VlistError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<VlistError> for wasm_bindgen::JsValue {
    fn from(e: VlistError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
