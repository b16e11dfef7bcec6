// Host-side tests for on-screen text.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod copy {
    include!("../src/copy.rs");
}

use copy::*;
use trivia_core::RankTier;

#[test]
fn progress_and_summary_labels_are_one_based() {
    assert_eq!(progress_label(0), "1");
    assert_eq!(progress_label(9), "10");
    assert_eq!(summary_label(0), "P1");
    assert_eq!(summary_label(9), "P10");
}

#[test]
fn wrong_feedback_reveals_correct_option() {
    assert_eq!(feedback_wrong("Entropía"), "Ups... era: Entropía");
}

#[test]
fn summary_detail_depends_on_outcome() {
    assert_eq!(summary_detail(true, "X"), SUMMARY_CORRECT);
    assert_eq!(summary_detail(false, "El Poeta"), "Era: El Poeta");
}

#[test]
fn every_rank_has_distinct_title_and_message() {
    let ranks = [
        RankTier::Poeta,
        RankTier::Fan,
        RankTier::Habitual,
        RankTier::Turista,
    ];
    for (i, a) in ranks.iter().enumerate() {
        assert!(rank_title(*a).starts_with("RANGO: "));
        assert!(!rank_message(*a).is_empty());
        for b in &ranks[i + 1..] {
            assert_ne!(rank_title(*a), rank_title(*b));
            assert_ne!(rank_message(*a), rank_message(*b));
        }
    }
}

#[test]
fn top_rank_title() {
    assert_eq!(rank_title(RankTier::Poeta), "RANGO: POETA DE LA GENERACIÓN");
}
