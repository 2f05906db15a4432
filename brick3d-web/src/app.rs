/// Browser frame loop around the core `App`
use std::cell::RefCell;
use std::rc::Rc;

use brick3d_core::{App, DemoConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

use crate::canvas;
use crate::error::WebError;
use crate::gl::WebGl;
use crate::loader;

type FrameCallback = Closure<dyn FnMut(f64)>;

struct Running {
    window: Window,
    canvas: HtmlCanvasElement,
    gpu: WebGl,
    app: App<WebGl>,
    last_timestamp: Option<f64>,
}

impl Running {
    fn frame(&mut self, timestamp: f64) {
        let dt = self.last_timestamp.map_or(0.0, |last| timestamp - last);
        self.last_timestamp = Some(timestamp);

        canvas::fit_to_window(&self.window, &self.canvas);
        let viewport = self.gpu.drawing_buffer();
        self.app.tick(&mut self.gpu, dt, viewport);
    }
}

/// Handle to the running demo, returned to JavaScript
#[wasm_bindgen]
pub struct DemoApp {
    state: Rc<RefCell<Running>>,
}

#[wasm_bindgen]
impl DemoApp {
    /// The canvas the demo draws into
    #[wasm_bindgen(getter)]
    pub fn canvas(&self) -> HtmlCanvasElement {
        self.state.borrow().canvas.clone()
    }

    /// Seconds of animation so far
    #[wasm_bindgen(getter)]
    pub fn time(&self) -> f32 {
        self.state.borrow().app.time()
    }

    #[wasm_bindgen(js_name = setFlatShading)]
    pub fn set_flat_shading(&self, enabled: bool) {
        self.state
            .borrow_mut()
            .app
            .scene_mut()
            .set_flat_shading(enabled);
    }
}

/// Load the textures, build the scene on a fresh canvas, attach it to the
/// page and start animating
pub async fn start(config: DemoConfig) -> Result<DemoApp, WebError> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;

    let images = loader::load_images(&config.texture_urls()).await?;

    let canvas = canvas::create_canvas(&document)?;
    canvas::fit_to_window(&window, &canvas);
    let mut gpu = WebGl::new(canvas::webgl_context(&canvas)?);
    let app = App::new(&mut gpu, &images, &config)?;

    document
        .body()
        .ok_or(WebError::NoBody)?
        .append_child(&canvas)
        .map_err(WebError::js)?;

    let state = Rc::new(RefCell::new(Running {
        window,
        canvas,
        gpu,
        app,
        last_timestamp: None,
    }));
    run_loop(state.clone())?;

    Ok(DemoApp { state })
}

/// Drive `Running::frame` from `requestAnimationFrame` for the lifetime of
/// the page
fn run_loop(state: Rc<RefCell<Running>>) -> Result<(), WebError> {
    // The callback re-schedules itself, so it needs a handle to its own closure
    let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let window = state.borrow().window.clone();

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        let window = {
            let mut running = state.borrow_mut();
            running.frame(timestamp);
            running.window.clone()
        };

        if let Some(closure) = next.borrow().as_ref() {
            if let Err(err) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
                log::error!("failed to schedule frame: {}", crate::error::describe(&err));
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let first = callback.borrow();
    if let Some(closure) = first.as_ref() {
        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(WebError::js)?;
    }
    Ok(())
}
