use crate::constants::{CLASS_OPTION, OPTION_INDEX_ATTR};
use crate::dom;
use crate::game::{self, Game};
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use trivia_core::AmbientScene;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed the window-relative pointer position to the background scene.
pub fn wire_pointer_tracking(document: &web::Document, scene: Rc<RefCell<AmbientScene>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(w) = web::window() else {
            return;
        };
        let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
        let ndc = input::pointer_ndc(ev.client_x() as f32, ev.client_y() as f32, width, height);
        scene.borrow_mut().set_pointer(ndc);
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// One delegated listener for the option buttons, which are rebuilt for
/// every question.
pub fn wire_option_clicks(options: &web::HtmlElement, game: Rc<RefCell<Game>>) {
    let selector = format!(".{}", CLASS_OPTION);
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let Some(button) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(&selector).ok().flatten())
        else {
            return;
        };
        match button
            .get_attribute(OPTION_INDEX_ATTR)
            .and_then(|v| v.parse::<usize>().ok())
        {
            Some(index) => game::answer(&game, index),
            None => log::warn!("[events] option button without a usable {}", OPTION_INDEX_ATTR),
        }
    }) as Box<dyn FnMut(_)>);
    _ = options.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
