/// Canvas creation and window fitting
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, WebGlRenderingContext, Window};

use crate::error::{describe, WebError};

pub fn create_canvas(document: &Document) -> Result<HtmlCanvasElement, WebError> {
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(WebError::js)?
        .dyn_into()
        .map_err(|_| WebError::Js("created element is not a canvas".to_string()))?;

    let style = canvas.style();
    style.set_property("display", "block").map_err(WebError::js)?;
    style.set_property("position", "absolute").map_err(WebError::js)?;
    style.set_property("top", "0").map_err(WebError::js)?;
    style.set_property("left", "0").map_err(WebError::js)?;

    Ok(canvas)
}

pub fn webgl_context(canvas: &HtmlCanvasElement) -> Result<WebGlRenderingContext, WebError> {
    canvas
        .get_context("webgl")
        .map_err(WebError::js)?
        .ok_or(WebError::NoWebGl)?
        .dyn_into()
        .map_err(|_| WebError::NoWebGl)
}

/// Size the canvas to the window: CSS size in CSS pixels, backing store in
/// device pixels. Only touches the canvas when the size changed.
pub fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) {
    let css_width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_else(|| f64::from(canvas.client_width()));
    let css_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or_else(|| f64::from(canvas.client_height()));
    let scale = window.device_pixel_ratio();

    let width = (css_width * scale).round() as u32;
    let height = (css_height * scale).round() as u32;
    if canvas.width() == width && canvas.height() == height {
        return;
    }

    canvas.set_width(width);
    canvas.set_height(height);

    let style = canvas.style();
    for (property, pixels) in [("width", css_width), ("height", css_height)] {
        if let Err(err) = style.set_property(property, &format!("{}px", pixels)) {
            log::debug!("failed to set canvas {}: {}", property, describe(&err));
        }
    }

    log::debug!("canvas resized to {}x{} (scale {})", width, height, scale);
}
