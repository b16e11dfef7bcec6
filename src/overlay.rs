use crate::constants::*;
use crate::dom;
use web_sys as web;

// Screen switching: start screen, quiz (with info panel), results.

#[inline]
fn set_visible(document: &web::Document, id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        if visible {
            dom::remove_class(&el, CLASS_HIDDEN);
        } else {
            dom::add_class(&el, CLASS_HIDDEN);
        }
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .map(|el| el.class_list().contains(CLASS_HIDDEN))
        .unwrap_or(true)
}

/// Leave the start or results screen and show the quiz panels.
pub fn show_quiz(document: &web::Document) {
    set_visible(document, ID_START_SCREEN, false);
    set_visible(document, ID_RESULTS_UI, false);
    // so the results animation replays after a restart
    if let Some(el) = document.get_element_by_id(ID_RESULTS_UI) {
        dom::remove_class(&el, CLASS_ENTER);
    }
    set_visible(document, ID_QUIZ_CONTAINER, true);
    set_visible(document, ID_GAME_UI, true);
    set_visible(document, ID_INFO_PANEL, true);
}

pub fn show_results(document: &web::Document) {
    set_visible(document, ID_GAME_UI, false);
    set_visible(document, ID_INFO_PANEL, false);
    set_visible(document, ID_RESULTS_UI, true);
    if let Some(el) = document.get_element_by_id(ID_RESULTS_UI) {
        dom::add_class(&el, CLASS_ENTER);
    }
}
