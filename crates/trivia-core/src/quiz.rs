//! Quiz session state machine and the collaborators it drives.
//!
//! `QuizEngine` owns one `QuizSession` and walks it through
//! `NotStarted -> Presenting(i) -> Answered(i) -> ... -> Finished`. It never
//! waits on anything: view updates, mood changes and preview playback are
//! pushed out through the three traits below, and the caller decides when to
//! call `advance()`. That keeps the engine usable without timers, a DOM or a
//! network.

use crate::bank::{Question, QuestionBank};
use crate::rank::RankTier;
use std::fmt;

/// Visual state of the ambient background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mood {
    #[default]
    Default,
    Correct,
    Wrong,
}

impl Mood {
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Default => "default",
            Mood::Correct => "correct",
            Mood::Wrong => "wrong",
        }
    }
}

/// One answered question, as shown on the results screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnsweredRecord {
    pub question_prompt: String,
    pub was_correct: bool,
    pub correct_option_text: String,
}

/// What the view needs to reveal after an answer.
#[derive(Clone, Copy, Debug)]
pub struct AnswerFeedback<'a> {
    pub question_index: usize,
    pub is_correct: bool,
    pub selected_index: usize,
    pub correct_index: usize,
    pub correct_text: &'a str,
    pub factoid: &'a str,
}

/// Final score, tier and answer log of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
    pub rank: RankTier,
    pub history: Vec<AnsweredRecord>,
}

/// Returned by `submit_answer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub question_index: usize,
    pub is_correct: bool,
    pub score: usize,
}

pub trait ViewRenderer {
    fn show_question(&mut self, index: usize, question: &Question);
    fn show_feedback(&mut self, feedback: &AnswerFeedback<'_>);
    fn show_results(&mut self, results: &QuizResults);
}

pub trait AmbientMoodSink {
    fn set_mood(&mut self, mood: Mood);
}

/// Short track previews. Both calls return immediately; failures stay
/// inside the implementation.
pub trait PreviewAudioService {
    fn play(&mut self, search_term: &str);
    fn stop(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Presenting(usize),
    Answered(usize),
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NotStarted => f.write_str("not started"),
            Phase::Presenting(i) => write!(f, "presenting question {}", i + 1),
            Phase::Answered(i) => write!(f, "answered question {}", i + 1),
            Phase::Finished => f.write_str("finished"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("{operation} is not valid while the quiz is {phase}")]
    InvalidState {
        operation: &'static str,
        phase: Phase,
    },
}

/// Mutable root of one game. Only the engine touches it.
#[derive(Clone, Debug)]
struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    history: Vec<AnsweredRecord>,
}

impl QuizSession {
    fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
            history: Vec::new(),
        }
    }

    fn reset(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.history.clear();
    }
}

pub struct QuizEngine<V, M, A> {
    session: QuizSession,
    phase: Phase,
    view: V,
    mood: M,
    audio: A,
}

impl<V, M, A> QuizEngine<V, M, A>
where
    V: ViewRenderer,
    M: AmbientMoodSink,
    A: PreviewAudioService,
{
    pub fn new(bank: QuestionBank, view: V, mood: M, audio: A) -> Self {
        Self {
            session: QuizSession::new(bank.into_questions()),
            phase: Phase::NotStarted,
            view,
            mood,
            audio,
        }
    }

    pub fn start(&mut self) -> Result<(), QuizError> {
        self.expect_phase("start", |p| matches!(p, Phase::NotStarted))?;
        self.session.reset();
        self.phase = Phase::Presenting(0);
        log::debug!("[quiz] started with {} questions", self.question_count());
        self.mood.set_mood(Mood::Default);
        self.view.show_question(0, &self.session.questions[0]);
        Ok(())
    }

    /// Record the answer for the question on screen.
    ///
    /// Any `selected_index` is accepted; one that is not the correct index,
    /// including one past the last option, counts as wrong.
    pub fn submit_answer(&mut self, selected_index: usize) -> Result<AnswerOutcome, QuizError> {
        let index = match self.phase {
            Phase::Presenting(i) => i,
            phase => return Err(self.reject("submit_answer", phase)),
        };
        let question = &self.session.questions[index];
        let is_correct = question.is_correct(selected_index);
        self.session.history.push(AnsweredRecord {
            question_prompt: question.prompt.clone(),
            was_correct: is_correct,
            correct_option_text: question.correct_option().to_owned(),
        });
        if is_correct {
            self.session.score += 1;
        }
        self.phase = Phase::Answered(index);
        log::debug!(
            "[quiz] q{} selected={} correct={} score={}",
            index + 1,
            selected_index,
            is_correct,
            self.session.score
        );

        self.mood.set_mood(if is_correct {
            Mood::Correct
        } else {
            Mood::Wrong
        });
        self.view.show_feedback(&AnswerFeedback {
            question_index: index,
            is_correct,
            selected_index,
            correct_index: question.correct_index,
            correct_text: question.correct_option(),
            factoid: &question.factoid,
        });
        if !question.preview_search_term.is_empty() {
            self.audio.play(&question.preview_search_term);
        }

        Ok(AnswerOutcome {
            question_index: index,
            is_correct,
            score: self.session.score,
        })
    }

    /// Leave the feedback of the current question for the next one, or for
    /// the results once the last question has been answered.
    pub fn advance(&mut self) -> Result<Phase, QuizError> {
        let index = match self.phase {
            Phase::Answered(i) => i,
            phase => return Err(self.reject("advance", phase)),
        };
        self.audio.stop();

        let next = index + 1;
        if next < self.question_count() {
            self.session.current_index = next;
            self.phase = Phase::Presenting(next);
            self.mood.set_mood(Mood::Default);
            self.view.show_question(next, &self.session.questions[next]);
        } else {
            self.session.current_index = self.question_count();
            self.phase = Phase::Finished;
            let results = self.build_results();
            log::info!(
                "[quiz] finished score={}/{} rank={}",
                results.score,
                results.total,
                results.rank
            );
            self.view.show_results(&results);
            self.mood.set_mood(Mood::Default);
        }
        Ok(self.phase)
    }

    /// Drop the current session for a fresh one over `bank`, back in
    /// `NotStarted`. Any preview of the old session is stopped.
    pub fn new_game(&mut self, bank: QuestionBank) {
        self.audio.stop();
        self.session = QuizSession::new(bank.into_questions());
        self.phase = Phase::NotStarted;
        log::debug!("[quiz] new session");
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.session.current_index
    }

    pub fn score(&self) -> usize {
        self.session.score
    }

    pub fn history(&self) -> &[AnsweredRecord] {
        &self.session.history
    }

    pub fn question_count(&self) -> usize {
        self.session.questions.len()
    }

    /// The question on screen, if any.
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Presenting(i) | Phase::Answered(i) => self.session.questions.get(i),
            Phase::NotStarted | Phase::Finished => None,
        }
    }

    pub fn results(&self) -> Option<QuizResults> {
        (self.phase == Phase::Finished).then(|| self.build_results())
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn build_results(&self) -> QuizResults {
        QuizResults {
            score: self.session.score,
            total: self.question_count(),
            rank: RankTier::from_score(self.session.score),
            history: self.session.history.clone(),
        }
    }

    fn expect_phase(
        &self,
        operation: &'static str,
        allowed: impl Fn(Phase) -> bool,
    ) -> Result<(), QuizError> {
        if allowed(self.phase) {
            Ok(())
        } else {
            Err(self.reject(operation, self.phase))
        }
    }

    fn reject(&self, operation: &'static str, phase: Phase) -> QuizError {
        log::warn!("[quiz] rejected {} while {}", operation, phase);
        QuizError::InvalidState { operation, phase }
    }
}
