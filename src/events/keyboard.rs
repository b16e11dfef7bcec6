use crate::constants::ID_GAME_UI;
use crate::game::{self, Game};
use crate::input;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_answer_key(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    game: &Rc<RefCell<Game>>,
) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let Some(index) = input::option_index_for_key(&ev.key()) else {
        return;
    };
    if overlay::is_hidden(document, ID_GAME_UI) {
        return;
    }
    game::answer(game, index);
    ev.prevent_default();
}

// Keys 1-4 answer the question on screen
pub fn wire_answer_keys(document: &web::Document, game: Rc<RefCell<Game>>) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_answer_key(&ev, &doc, &game);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
