/// brick3d Web - WebGL renderer for the brick torus demo
///
/// Loads the brick texture maps, creates a full-window canvas and animates
/// the scene from `brick3d-core` with `requestAnimationFrame`.

use brick3d_core::DemoConfig;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod canvas;
pub mod error;
pub mod gl;
pub mod loader;

pub use app::DemoApp;
pub use error::WebError;
pub use gl::WebGl;

/// Module start hook: panic messages and `log` output go to the console
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(())
}

/// Start the demo with the default configuration.
///
/// Rejects with the initialization error (image load failure, no WebGL,
/// missing `OES_standard_derivatives`, shader errors).
#[wasm_bindgen(js_name = startDemo)]
pub async fn start_demo() -> Result<DemoApp, JsValue> {
    app::start(DemoConfig::default()).await.map_err(|err| {
        log::error!("failed to start demo: {}", err);
        JsValue::from(err)
    })
}
