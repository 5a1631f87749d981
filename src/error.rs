//! Error types.
//!
//! The widget core is total and never fails; errors only arise while loading
//! configuration or while talking to the browser.

/// Rejected site configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {field} {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Failure while wiring or updating the page.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for HostError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<HostError> for wasm_bindgen::JsValue {
    fn from(err: HostError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
