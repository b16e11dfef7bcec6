//! Question content and its load-time validation.

use crate::constants::{OPTIONS_PER_QUESTION, QUESTIONS_PER_GAME};
use serde::Deserialize;

static BUILTIN_QUESTIONS_JSON: &str = include_str!("../assets/questions.json");

/// One multiple-choice question. Immutable once the bank is loaded.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: [String; OPTIONS_PER_QUESTION],
    pub correct_index: usize,
    /// Free-text query for the preview lookup. Empty means no preview.
    #[serde(default)]
    pub preview_search_term: String,
    pub factoid: String,
}

impl Question {
    #[inline]
    pub fn is_correct(&self, selected_index: usize) -> bool {
        selected_index == self.correct_index
    }

    /// Text of the right answer. Only valid for validated questions.
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("question bank must hold exactly {expected} questions, found {found}")]
    Size { expected: usize, found: usize },

    #[error("question {index} marks option {correct_index} as correct but has {options} options")]
    CorrectIndex {
        index: usize,
        correct_index: usize,
        options: usize,
    },

    #[error("failed to parse question bank: {0}")]
    Json(#[from] serde_json::Error),
}

/// The fixed, ordered question set of one game.
#[derive(Clone, Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// The ten questions bundled with the game.
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_json(BUILTIN_QUESTIONS_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, BankError> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.len() != QUESTIONS_PER_GAME {
            return Err(BankError::Size {
                expected: QUESTIONS_PER_GAME,
                found: questions.len(),
            });
        }
        for (index, q) in questions.iter().enumerate() {
            if q.correct_index >= q.options.len() {
                return Err(BankError::CorrectIndex {
                    index,
                    correct_index: q.correct_index,
                    options: q.options.len(),
                });
            }
        }
        log::debug!("[bank] loaded {} questions", questions.len());
        Ok(Self { questions })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
