// Typed errors with thiserror. Loaders log these to the console; nothing
// crosses the wasm boundary as a thrown error from fire-and-forget work.

use thiserror::Error;

/// Page-enhancement error types.
#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Request failed: {0}")]
    Fetch(String),

    #[error("Malformed payload: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for EnhanceError {
    fn from(err: serde_json::Error) -> Self {
        EnhanceError::Parse(err.to_string())
    }
}

impl From<gloo_net::Error> for EnhanceError {
    fn from(err: gloo_net::Error) -> Self {
        EnhanceError::Fetch(err.to_string())
    }
}
