/// Startup failures in the browser
use brick3d_core::RenderError;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("WebGL is not supported")]
    NoWebGl,

    #[error("failed to load image {url}: {reason}")]
    ImageLoad { url: String, reason: String },

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl WebError {
    pub fn js(value: JsValue) -> Self {
        WebError::Js(describe(&value))
    }
}

/// Best-effort message for a thrown JavaScript value
pub fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", value),
    }
}

impl From<WebError> for JsValue {
    fn from(error: WebError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}
