//! Errors surfaced to JavaScript

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::gesture::ConfigError;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("invalid session config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),
    #[error("invalid session config: {0}")]
    Config(#[from] ConfigError),
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
