// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use trivia_core::constants as core_consts;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive_and_ordered() {
    assert!(FEEDBACK_HOLD_MS > 0);
    assert!(EXIT_TRANSITION_MS > 0);
    assert!(INFO_FADE_MS > 0);
    // the factoid must be visible well before the question moves on
    assert!(INFO_FADE_MS < FEEDBACK_HOLD_MS);
    // enter animation cleanup finishes before anyone can be asked to leave
    assert!(ENTER_CLEANUP_MS < FEEDBACK_HOLD_MS);
}

#[test]
fn opacities_parse_as_unit_floats() {
    for s in [
        INFO_PLACEHOLDER_OPACITY,
        INFO_HIDDEN_OPACITY,
        INFO_VISIBLE_OPACITY,
    ] {
        let v: f32 = s.parse().expect("opacity");
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn element_ids_are_unique() {
    let ids = [
        ID_CANVAS,
        ID_AUDIO,
        ID_START_SCREEN,
        ID_START_BUTTON,
        ID_RESTART_BUTTON,
        ID_QUIZ_CONTAINER,
        ID_INFO_PANEL,
        ID_INFO_TEXT,
        ID_INFO_CONTENT,
        ID_QUESTION_TEXT,
        ID_OPTIONS,
        ID_FEEDBACK,
        ID_PROGRESS,
        ID_GAME_UI,
        ID_RESULTS_UI,
        ID_FINAL_SCORE,
        ID_FINAL_RANK,
        ID_FINAL_MESSAGE,
        ID_RESULTS_LIST,
    ];
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}

#[test]
fn index_html_declares_every_id() {
    let html = include_str!("../index.html");
    for id in [
        ID_CANVAS,
        ID_AUDIO,
        ID_START_SCREEN,
        ID_START_BUTTON,
        ID_RESTART_BUTTON,
        ID_QUIZ_CONTAINER,
        ID_INFO_PANEL,
        ID_INFO_TEXT,
        ID_INFO_CONTENT,
        ID_QUESTION_TEXT,
        ID_OPTIONS,
        ID_FEEDBACK,
        ID_PROGRESS,
        ID_GAME_UI,
        ID_RESULTS_UI,
        ID_FINAL_SCORE,
        ID_FINAL_RANK,
        ID_FINAL_MESSAGE,
        ID_RESULTS_LIST,
    ] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn core_constants_are_consistent() {
    assert_eq!(core_consts::QUESTIONS_PER_GAME, 10);
    assert_eq!(core_consts::OPTIONS_PER_QUESTION, 4);
    assert!(core_consts::RANK_POETA_MIN > core_consts::RANK_FAN_MIN);
    assert!(core_consts::RANK_FAN_MIN > core_consts::RANK_HABITUAL_MIN);
    assert!(core_consts::RANK_POETA_MIN <= core_consts::QUESTIONS_PER_GAME);
    assert!(core_consts::INNER_HEAD_RADIUS < core_consts::HEAD_RADIUS);
    assert!(core_consts::CAMERA_ZNEAR < core_consts::CAMERA_Z);
    assert!(core_consts::CAMERA_Z < core_consts::CAMERA_ZFAR);
    assert!(core_consts::CELEBRATE_SPIN > core_consts::IDLE_SPIN);
}

#[test]
fn hex_rgb_splits_channels() {
    let c = core_consts::hex_rgb(0xff0000);
    assert_eq!(c, glam::Vec3::new(1.0, 0.0, 0.0));
    let c = core_consts::hex_rgb(0x00ff88);
    assert!((c.z - 136.0 / 255.0).abs() < 1e-6);
}
