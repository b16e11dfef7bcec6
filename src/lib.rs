#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use trivia_core::{AmbientScene, PreviewConfig, QuestionBank};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod copy;
mod dom;
mod events;
mod frame;
mod game;
mod input;
mod overlay;
mod render;
mod view;

fn wire_buttons(document: &web::Document, game: &Rc<RefCell<game::Game>>) {
    let game_start = game.clone();
    dom::add_click_listener(document, ID_START_BUTTON, move || {
        game::start(&game_start);
    });

    let game_restart = game.clone();
    dom::add_click_listener(document, ID_RESTART_BUTTON, move || {
        game::restart(&game_restart);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trivia-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(ID_CANVAS)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", ID_CANVAS))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let audio_el: web::HtmlAudioElement = document
        .get_element_by_id(ID_AUDIO)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", ID_AUDIO))?
        .dyn_into::<web::HtmlAudioElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&canvas);

    // Quiz: bank, collaborators, engine
    let bank = QuestionBank::builtin()?;
    let scene = Rc::new(RefCell::new(AmbientScene::default()));
    let view = view::DomView::new(&document)?;
    let mood = frame::SceneMood::new(scene.clone());
    let preview = audio::PreviewPlayer::new(audio_el, PreviewConfig::default());
    let game = Rc::new(RefCell::new(game::Game::new(bank, view, mood, preview)));
    log::info!(
        "[quiz] ready: {} questions, phase={}",
        game.borrow().engine().question_count(),
        game.borrow().phase()
    );

    wire_buttons(&document, &game);
    let options = dom::element(&document, ID_OPTIONS)?;
    events::wire_option_clicks(&options, game.clone());
    events::wire_answer_keys(&document, game.clone());
    events::wire_pointer_tracking(&document, scene.clone());

    // Background renderer; the quiz stays playable without it
    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        gpu,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
