// On-screen text. The engine only picks a rank tier; the wording is ours.

use trivia_core::RankTier;

pub const INFO_PLACEHOLDER: &str = "Selecciona una opción para descubrir el dato curioso...";
pub const FEEDBACK_CORRECT: &str = "¡CORRECTO! Escucha esto...";
pub const FEEDBACK_CORRECT_COLOR: &str = "#00ff88";
pub const FEEDBACK_WRONG_COLOR: &str = "#ff3333";
pub const INFO_LABEL_COLOR: &str = "#b66dff";

pub const SUMMARY_ICON_CORRECT: &str = "✓";
pub const SUMMARY_ICON_WRONG: &str = "✕";
pub const SUMMARY_CORRECT: &str = "Correcta";

pub fn feedback_wrong(correct_text: &str) -> String {
    format!("Ups... era: {correct_text}")
}

/// 1-based progress label.
pub fn progress_label(index: usize) -> String {
    (index + 1).to_string()
}

pub fn summary_label(index: usize) -> String {
    format!("P{}", index + 1)
}

pub fn summary_detail(was_correct: bool, correct_text: &str) -> String {
    if was_correct {
        SUMMARY_CORRECT.to_string()
    } else {
        format!("Era: {correct_text}")
    }
}

pub fn rank_title(rank: RankTier) -> &'static str {
    match rank {
        RankTier::Poeta => "RANGO: POETA DE LA GENERACIÓN",
        RankTier::Fan => "RANGO: FAN DE HUESO COLORADO",
        RankTier::Habitual => "RANGO: ESCUCHA HABITUAL",
        RankTier::Turista => "RANGO: TURISTA MUSICAL",
    }
}

pub fn rank_message(rank: RankTier) -> &'static str {
    match rank {
        RankTier::Poeta => "¡Perfección absoluta! Eres el fan #1 indiscutible.",
        RankTier::Fan => "¡Increíble! Conoces casi todo sobre Humbe.",
        RankTier::Habitual => "Nada mal, pero te falta escuchar más 'Entropía'.",
        RankTier::Turista => "Te recomendamos empezar por 'El Poeta' y volver a intentar.",
    }
}
