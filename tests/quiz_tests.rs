// Host-side integration tests for the quiz engine.
// Collaborators are recording fakes so no DOM, timer or network is involved.

use std::cell::RefCell;
use std::rc::Rc;
use trivia_core::*;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Question(usize),
    Feedback {
        index: usize,
        correct: bool,
        selected: usize,
        correct_index: usize,
        correct_text: String,
    },
    Results {
        score: usize,
        rank: RankTier,
        history_len: usize,
    },
    Mood(Mood),
    Play(String),
    Stop,
}

type Log = Rc<RefCell<Vec<Call>>>;

struct FakeView(Log);
struct FakeMood(Log);
struct FakeAudio(Log);

impl ViewRenderer for FakeView {
    fn show_question(&mut self, index: usize, _question: &Question) {
        self.0.borrow_mut().push(Call::Question(index));
    }
    fn show_feedback(&mut self, f: &AnswerFeedback<'_>) {
        self.0.borrow_mut().push(Call::Feedback {
            index: f.question_index,
            correct: f.is_correct,
            selected: f.selected_index,
            correct_index: f.correct_index,
            correct_text: f.correct_text.to_string(),
        });
    }
    fn show_results(&mut self, r: &QuizResults) {
        self.0.borrow_mut().push(Call::Results {
            score: r.score,
            rank: r.rank,
            history_len: r.history.len(),
        });
    }
}

impl AmbientMoodSink for FakeMood {
    fn set_mood(&mut self, mood: Mood) {
        self.0.borrow_mut().push(Call::Mood(mood));
    }
}

impl PreviewAudioService for FakeAudio {
    fn play(&mut self, search_term: &str) {
        self.0.borrow_mut().push(Call::Play(search_term.to_string()));
    }
    fn stop(&mut self) {
        self.0.borrow_mut().push(Call::Stop);
    }
}

type TestEngine = QuizEngine<FakeView, FakeMood, FakeAudio>;

fn make_engine() -> (TestEngine, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let bank = QuestionBank::builtin().expect("builtin bank");
    let engine = QuizEngine::new(
        bank,
        FakeView(log.clone()),
        FakeMood(log.clone()),
        FakeAudio(log.clone()),
    );
    (engine, log)
}

fn correct_indices() -> Vec<usize> {
    QuestionBank::builtin()
        .unwrap()
        .questions()
        .iter()
        .map(|q| q.correct_index)
        .collect()
}

/// Answer every question with `pick(i, correct_index)` and advance after each.
fn play_through(engine: &mut TestEngine, pick: impl Fn(usize, usize) -> usize) {
    engine.start().unwrap();
    for (i, correct) in correct_indices().into_iter().enumerate() {
        engine.submit_answer(pick(i, correct)).unwrap();
        engine.advance().unwrap();
    }
}

#[test]
fn start_resets_session_and_presents_first_question() {
    let (mut engine, log) = make_engine();
    assert_eq!(engine.phase(), Phase::NotStarted);
    engine.start().unwrap();
    assert_eq!(engine.phase(), Phase::Presenting(0));
    assert_eq!(engine.current_index(), 0);
    assert_eq!(engine.score(), 0);
    assert!(engine.history().is_empty());
    assert_eq!(
        *log.borrow(),
        vec![Call::Mood(Mood::Default), Call::Question(0)]
    );
}

#[test]
fn start_twice_is_rejected() {
    let (mut engine, _log) = make_engine();
    engine.start().unwrap();
    let err = engine.start().unwrap_err();
    assert_eq!(
        err,
        QuizError::InvalidState {
            operation: "start",
            phase: Phase::Presenting(0),
        }
    );
}

#[test]
fn correct_answer_scores_and_notifies_collaborators() {
    let (mut engine, log) = make_engine();
    engine.start().unwrap();
    log.borrow_mut().clear();

    let q = engine.current_question().unwrap().clone();
    let outcome = engine.submit_answer(q.correct_index).unwrap();
    assert!(outcome.is_correct);
    assert_eq!(outcome.score, 1);
    assert_eq!(engine.phase(), Phase::Answered(0));
    assert_eq!(
        *log.borrow(),
        vec![
            Call::Mood(Mood::Correct),
            Call::Feedback {
                index: 0,
                correct: true,
                selected: q.correct_index,
                correct_index: q.correct_index,
                correct_text: q.options[q.correct_index].clone(),
            },
            Call::Play(q.preview_search_term.clone()),
        ]
    );
}

#[test]
fn wrong_answer_sets_wrong_mood_and_keeps_score() {
    let (mut engine, log) = make_engine();
    engine.start().unwrap();
    let correct = engine.current_question().unwrap().correct_index;
    let wrong = (correct + 1) % 4;
    let outcome = engine.submit_answer(wrong).unwrap();
    assert!(!outcome.is_correct);
    assert_eq!(engine.score(), 0);
    assert!(log.borrow().contains(&Call::Mood(Mood::Wrong)));
    assert!(!engine.history()[0].was_correct);
}

#[test]
fn second_submit_without_advance_is_rejected_and_not_counted() {
    let (mut engine, _log) = make_engine();
    engine.start().unwrap();
    let correct = engine.current_question().unwrap().correct_index;
    engine.submit_answer(correct).unwrap();
    let err = engine.submit_answer(correct).unwrap_err();
    assert_eq!(
        err,
        QuizError::InvalidState {
            operation: "submit_answer",
            phase: Phase::Answered(0),
        }
    );
    assert_eq!(engine.score(), 1);
    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.phase(), Phase::Answered(0));
}

#[test]
fn submit_before_start_is_rejected() {
    let (mut engine, log) = make_engine();
    assert!(engine.submit_answer(0).is_err());
    assert!(engine.history().is_empty());
    assert!(log.borrow().is_empty());
}

#[test]
fn advance_requires_an_answer() {
    let (mut engine, _log) = make_engine();
    assert!(engine.advance().is_err());
    engine.start().unwrap();
    let err = engine.advance().unwrap_err();
    assert_eq!(
        err,
        QuizError::InvalidState {
            operation: "advance",
            phase: Phase::Presenting(0),
        }
    );
}

#[test]
fn advance_stops_audio_and_presents_next_question() {
    let (mut engine, log) = make_engine();
    engine.start().unwrap();
    engine.submit_answer(0).unwrap();
    log.borrow_mut().clear();

    assert_eq!(engine.advance().unwrap(), Phase::Presenting(1));
    assert_eq!(engine.current_index(), 1);
    assert_eq!(
        *log.borrow(),
        vec![Call::Stop, Call::Mood(Mood::Default), Call::Question(1)]
    );
}

#[test]
fn history_and_score_track_every_answer() {
    // Property: for any pattern of right/wrong picks, history length equals
    // the number of answers and score equals the number of right picks.
    let correct = correct_indices();
    for mask in [0u32, 0b1, 0b1010101010, 0b1111100000, 0b0110011001, 0b1111111111] {
        let (mut engine, _log) = make_engine();
        engine.start().unwrap();
        let mut expected_score = 0;
        for (i, &c) in correct.iter().enumerate() {
            let right = mask & (1 << i) != 0;
            let pick = if right { c } else { (c + 1) % 4 };
            if right {
                expected_score += 1;
            }
            engine.submit_answer(pick).unwrap();
            assert_eq!(engine.history().len(), i + 1);
            assert_eq!(engine.score(), expected_score);
            engine.advance().unwrap();
        }
        assert_eq!(engine.phase(), Phase::Finished);
        assert_eq!(engine.history().len(), correct.len());
        assert_eq!(engine.score(), mask.count_ones() as usize);
    }
}

#[test]
fn history_matches_index_while_presenting() {
    let (mut engine, _log) = make_engine();
    engine.start().unwrap();
    for _ in 0..engine.question_count() {
        assert_eq!(engine.history().len(), engine.current_index());
        engine.submit_answer(0).unwrap();
        engine.advance().unwrap();
    }
    assert_eq!(engine.history().len(), engine.question_count());
}

#[test]
fn all_correct_ranks_poeta() {
    let (mut engine, log) = make_engine();
    play_through(&mut engine, |_, correct| correct);
    assert_eq!(engine.phase(), Phase::Finished);
    assert_eq!(engine.score(), 10);
    let results = engine.results().expect("finished");
    assert_eq!(results.rank, RankTier::Poeta);
    assert_eq!(results.total, 10);
    assert_eq!(results.history.len(), 10);
    assert!(results.history.iter().all(|r| r.was_correct));
    assert!(log.borrow().contains(&Call::Results {
        score: 10,
        rank: RankTier::Poeta,
        history_len: 10,
    }));
    // lights go back to default on the results screen
    assert_eq!(log.borrow().last(), Some(&Call::Mood(Mood::Default)));
}

#[test]
fn all_wrong_ranks_turista() {
    let (mut engine, _log) = make_engine();
    play_through(&mut engine, |_, correct| (correct + 1) % 4);
    let results = engine.results().unwrap();
    assert_eq!(results.score, 0);
    assert_eq!(results.rank, RankTier::Turista);
}

#[test]
fn out_of_range_selection_counts_as_wrong() {
    let (mut engine, log) = make_engine();
    engine.start().unwrap();
    let q = engine.current_question().unwrap().clone();
    let outcome = engine.submit_answer(99).unwrap();
    assert!(!outcome.is_correct);
    let record = &engine.history()[0];
    assert!(!record.was_correct);
    assert_eq!(record.correct_option_text, q.options[q.correct_index]);
    assert_eq!(record.question_prompt, q.prompt);
    assert!(log.borrow().iter().any(|c| matches!(
        c,
        Call::Feedback {
            selected: 99,
            correct: false,
            ..
        }
    )));
}

#[test]
fn extreme_selections_never_panic() {
    for selected in [4usize, 5, 99, 1_000, usize::MAX] {
        let (mut engine, _log) = make_engine();
        engine.start().unwrap();
        let outcome = engine.submit_answer(selected).unwrap();
        assert!(!outcome.is_correct);
    }
}

#[test]
fn operations_after_finish_are_rejected() {
    let (mut engine, _log) = make_engine();
    play_through(&mut engine, |_, c| c);
    assert!(engine.submit_answer(0).is_err());
    assert!(engine.advance().is_err());
    assert!(engine.start().is_err());
    assert_eq!(engine.score(), 10);
    assert!(engine.current_question().is_none());
}

#[test]
fn results_unavailable_until_finished() {
    let (mut engine, _log) = make_engine();
    assert!(engine.results().is_none());
    engine.start().unwrap();
    engine.submit_answer(0).unwrap();
    assert!(engine.results().is_none());
}

#[test]
fn new_game_discards_session_and_stops_audio() {
    let (mut engine, log) = make_engine();
    play_through(&mut engine, |_, c| c);
    log.borrow_mut().clear();

    engine.new_game(QuestionBank::builtin().unwrap());
    assert_eq!(engine.phase(), Phase::NotStarted);
    assert_eq!(log.borrow().first(), Some(&Call::Stop));
    engine.start().unwrap();
    assert_eq!(engine.score(), 0);
    assert!(engine.history().is_empty());
    assert_eq!(engine.phase(), Phase::Presenting(0));
}

#[test]
fn empty_search_term_skips_preview() {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let mut questions = QuestionBank::builtin().unwrap().into_questions();
    questions[0].preview_search_term.clear();
    let bank = QuestionBank::new(questions).unwrap();
    let mut engine = QuizEngine::new(
        bank,
        FakeView(log.clone()),
        FakeMood(log.clone()),
        FakeAudio(log.clone()),
    );
    engine.start().unwrap();
    engine.submit_answer(0).unwrap();
    assert!(!log.borrow().iter().any(|c| matches!(c, Call::Play(_))));
}

#[test]
fn independent_engines_do_not_share_state() {
    let (mut a, _la) = make_engine();
    let (mut b, _lb) = make_engine();
    a.start().unwrap();
    b.start().unwrap();
    let correct = a.current_question().unwrap().correct_index;
    a.submit_answer(correct).unwrap();
    assert_eq!(a.score(), 1);
    assert_eq!(b.score(), 0);
    assert_eq!(b.phase(), Phase::Presenting(0));
}

#[test]
fn invalid_state_error_names_operation_and_phase() {
    let err = QuizError::InvalidState {
        operation: "advance",
        phase: Phase::Presenting(2),
    };
    assert_eq!(
        err.to_string(),
        "advance is not valid while the quiz is presenting question 3"
    );
}
