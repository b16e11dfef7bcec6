use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use trivia_core::constants::{STAR_COUNT, STAR_SEED, STAR_SPREAD};
use trivia_core::{star_field, AmbientMoodSink, AmbientScene, Mood};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `AmbientMoodSink` that recolours the background scene.
pub struct SceneMood {
    scene: Rc<RefCell<AmbientScene>>,
}

impl SceneMood {
    pub fn new(scene: Rc<RefCell<AmbientScene>>) -> Self {
        Self { scene }
    }
}

impl AmbientMoodSink for SceneMood {
    fn set_mood(&mut self, mood: Mood) {
        self.scene.borrow_mut().set_mood(mood);
        log::debug!("[scene] mood={}", mood.as_str());
    }
}

pub struct FrameContext<'a> {
    pub scene: Rc<RefCell<AmbientScene>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        self.scene.borrow_mut().step(now_ms);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            let scene = self.scene.borrow();
            if let Err(e) = g.render(&scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let stars = star_field(STAR_COUNT, STAR_SPREAD, STAR_SEED);
    match render::GpuState::new(leaked_canvas, &stars).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        };
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}
