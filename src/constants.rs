// Web front-end timing and DOM contract.

// Presentation timing (milliseconds)
pub const FEEDBACK_HOLD_MS: i32 = 5000; // music + reading time after an answer
pub const EXIT_TRANSITION_MS: i32 = 500; // length of the `content-exit` CSS animation
pub const ENTER_CLEANUP_MS: i32 = 600; // `content-enter` is removed after this
pub const INFO_FADE_MS: i32 = 200; // info text fade-out before the factoid shows

// Info text opacity
pub const INFO_PLACEHOLDER_OPACITY: &str = "0.7";
pub const INFO_HIDDEN_OPACITY: &str = "0";
pub const INFO_VISIBLE_OPACITY: &str = "1";

// Element ids
pub const ID_CANVAS: &str = "bg";
pub const ID_AUDIO: &str = "game-audio";
pub const ID_START_SCREEN: &str = "start-screen";
pub const ID_START_BUTTON: &str = "start-btn";
pub const ID_RESTART_BUTTON: &str = "restart-btn";
pub const ID_QUIZ_CONTAINER: &str = "quiz-container";
pub const ID_INFO_PANEL: &str = "info-panel";
pub const ID_INFO_TEXT: &str = "info-text";
pub const ID_INFO_CONTENT: &str = "info-content-box";
pub const ID_QUESTION_TEXT: &str = "question-text";
pub const ID_OPTIONS: &str = "options-container";
pub const ID_FEEDBACK: &str = "feedback-msg";
pub const ID_PROGRESS: &str = "current-q";
pub const ID_GAME_UI: &str = "game-ui";
pub const ID_RESULTS_UI: &str = "results-ui";
pub const ID_FINAL_SCORE: &str = "final-score";
pub const ID_FINAL_RANK: &str = "final-rank";
pub const ID_FINAL_MESSAGE: &str = "final-message";
pub const ID_RESULTS_LIST: &str = "results-list";

// CSS classes
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_ENTER: &str = "content-enter";
pub const CLASS_EXIT: &str = "content-exit";
pub const CLASS_OPTION: &str = "option-btn";
pub const CLASS_CORRECT: &str = "correct";
pub const CLASS_WRONG: &str = "wrong";
pub const CLASS_SUMMARY_ITEM: &str = "summary-item";
pub const CLASS_SUMMARY_CORRECT: &str = "correct-item";
pub const CLASS_SUMMARY_WRONG: &str = "wrong-item";
pub const CLASS_SUMMARY_ICON: &str = "summary-icon";

// Data attribute carrying an option button's index
pub const OPTION_INDEX_ATTR: &str = "data-index";
