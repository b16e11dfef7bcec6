use crate::audio::PreviewPlayer;
use crate::constants::{EXIT_TRANSITION_MS, FEEDBACK_HOLD_MS};
use crate::dom;
use crate::frame::SceneMood;
use crate::view::DomView;
use std::cell::RefCell;
use std::rc::Rc;
use trivia_core::{Phase, QuestionBank, QuizEngine};

pub type WebQuizEngine = QuizEngine<DomView, SceneMood, PreviewPlayer>;

/// Engine plus the timers that move it from feedback to the next question.
///
/// Every session gets a generation number; a timer scheduled for an older
/// generation does nothing when it fires.
pub struct Game {
    bank: QuestionBank,
    engine: WebQuizEngine,
    generation: u64,
}

impl Game {
    pub fn new(bank: QuestionBank, view: DomView, mood: SceneMood, audio: PreviewPlayer) -> Self {
        let engine = QuizEngine::new(bank.clone(), view, mood, audio);
        Self {
            bank,
            engine,
            generation: 0,
        }
    }

    pub fn engine(&self) -> &WebQuizEngine {
        &self.engine
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }
}

/// Start button: begin the first session.
pub fn start(game: &Rc<RefCell<Game>>) {
    let mut g = game.borrow_mut();
    if let Err(e) = g.engine.start() {
        log::debug!("[game] start ignored: {}", e);
        return;
    }
    log::info!("[game] session {} started", g.generation);
}

/// Restart button: throw the finished session away and play again.
pub fn restart(game: &Rc<RefCell<Game>>) {
    let mut g = game.borrow_mut();
    g.generation += 1;
    let bank = g.bank.clone();
    g.engine.new_game(bank);
    if let Err(e) = g.engine.start() {
        log::error!("[game] restart failed: {}", e);
        return;
    }
    log::info!("[game] session {} started", g.generation);
}

/// Answer the question on screen and schedule the move to the next one.
pub fn answer(game: &Rc<RefCell<Game>>, selected_index: usize) {
    let generation = {
        let mut g = game.borrow_mut();
        match g.engine.submit_answer(selected_index) {
            Ok(_) => g.generation,
            Err(e) => {
                log::debug!("[game] answer ignored: {}", e);
                return;
            }
        }
    };

    let game_hold = game.clone();
    dom::set_timeout(FEEDBACK_HOLD_MS, move || {
        {
            let g = game_hold.borrow();
            if g.generation != generation {
                return;
            }
            g.engine.view().play_exit();
        }
        let game_exit = game_hold.clone();
        dom::set_timeout(EXIT_TRANSITION_MS, move || {
            let mut g = game_exit.borrow_mut();
            if g.generation != generation {
                return;
            }
            if let Err(e) = g.engine.advance() {
                log::warn!("[game] advance failed: {}", e);
            }
        });
    });
}
