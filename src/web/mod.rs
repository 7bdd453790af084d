// web/ - Browser entry points
//
// The controller is shared between the animation-frame callback and the
// window listeners. Everything runs on the one JS thread, so Rc<RefCell>.

mod host;

pub use host::{JsRenderer, SceneHost};

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::config::{SceneConfig, TimeStep};
use crate::sim::{Controller, LoopState, Simulation};

#[wasm_bindgen(start)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
}

struct Shared {
    controller: RefCell<Controller<JsRenderer>>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

#[wasm_bindgen]
pub struct Backdrop {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl Backdrop {
    /// Build the scene and hand it to `host`. An unusable host leaves the
    /// backdrop inert; the rest of the page is unaffected.
    #[wasm_bindgen(constructor)]
    pub fn new(host: JsValue, seed: Option<u32>, wall_clock: Option<bool>) -> Backdrop {
        let (w, h) = viewport().unwrap_or((1, 1));
        let seed = seed.unwrap_or_else(|| (js_sys::Math::random() * u32::MAX as f64) as u32);

        let mut config = SceneConfig::default();
        if wall_clock.unwrap_or(false) {
            config.time_step = TimeStep::wall_clock();
        }

        let renderer = match JsRenderer::attach(host) {
            Ok(r) => Some(r),
            Err(e) => {
                log::warn!("{e}; background animation disabled");
                None
            }
        };

        let sim = Simulation::new(config, seed, w, h);
        Backdrop {
            shared: Rc::new(Shared {
                controller: RefCell::new(Controller::new(sim, renderer)),
                frame: RefCell::new(None),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn start(&self) {
        if !self.shared.controller.borrow_mut().start() {
            return;
        }
        if self.shared.listeners.borrow().is_empty() {
            install_listeners(&self.shared);
        }
        if self.shared.frame.borrow().is_none() {
            schedule(&self.shared);
        }
    }

    pub fn pause(&self) {
        self.shared.controller.borrow_mut().pause();
    }

    pub fn resume(&self) {
        self.shared.controller.borrow_mut().resume();
    }

    /// Cancel the pending frame and drop the listeners. Terminal.
    pub fn stop(&self) {
        self.shared.controller.borrow_mut().stop();
        self.shared.frame.borrow_mut().take();
        self.shared.listeners.borrow_mut().clear();
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.shared.controller.borrow().state() == LoopState::Running
    }

    #[wasm_bindgen(js_name = isAvailable)]
    pub fn is_available(&self) -> bool {
        self.shared.controller.borrow().is_available()
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&self, x: f64, y: f64) {
        self.shared.controller.borrow_mut().pointer_move(x, y);
    }

    pub fn resize(&self, width: u32, height: u32) {
        self.shared.controller.borrow_mut().resize(width, height);
    }

    #[wasm_bindgen(js_name = panelCount)]
    pub fn panel_count(&self) -> usize {
        self.shared.controller.borrow().simulation().scene().panel_count()
    }

    pub fn time(&self) -> f64 {
        self.shared.controller.borrow().simulation().time()
    }
}

fn schedule(shared: &Rc<Shared>) {
    let next = Rc::clone(shared);
    let handle = request_animation_frame(move |timestamp| {
        next.frame.borrow_mut().take();
        let again = next.controller.borrow_mut().frame(Some(timestamp));
        if again {
            schedule(&next);
        }
    });
    *shared.frame.borrow_mut() = Some(handle);
}

fn install_listeners(shared: &Rc<Shared>) {
    let Some(window) = web_sys::window() else { return };

    let on_move = {
        let shared = Rc::clone(shared);
        EventListener::new(&window, "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else { return };
            shared
                .controller
                .borrow_mut()
                .pointer_move(event.client_x() as f64, event.client_y() as f64);
        })
    };

    let on_resize = {
        let shared = Rc::clone(shared);
        EventListener::new(&window, "resize", move |_| {
            if let Some((w, h)) = viewport() {
                shared.controller.borrow_mut().resize(w, h);
            }
        })
    };

    shared.listeners.borrow_mut().extend([on_move, on_resize]);
}

fn viewport() -> Option<(u32, u32)> {
    let window = web_sys::window()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w as u32, h as u32))
}
