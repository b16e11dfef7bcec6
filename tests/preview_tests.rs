// Host-side tests for the preview lookup contract and fade curve.

use trivia_core::{
    halt_before_lookup, next_fade_volume, parse_first_preview_url, PreviewConfig, PreviewQuery,
};

#[test]
fn query_carries_term_media_and_limit() {
    let config = PreviewConfig::default();
    let query = PreviewQuery::new("Humbe Fantasmas", &config);
    let pairs = query.query_pairs();
    assert_eq!(pairs[0], ("term", "Humbe Fantasmas".to_string()));
    assert_eq!(pairs[1], ("media", "music".to_string()));
    assert_eq!(pairs[2], ("limit", "1".to_string()));
    assert_eq!(config.search_endpoint, "https://itunes.apple.com/search");
    assert!((config.volume - 0.5).abs() < f64::EPSILON);
}

#[test]
fn first_hit_preview_url_is_used() {
    let body = r#"{"resultCount":2,"results":[
        {"trackName":"Fantasmas","previewUrl":"https://audio.example/a.m4a"},
        {"trackName":"Otra","previewUrl":"https://audio.example/b.m4a"}]}"#;
    assert_eq!(
        parse_first_preview_url(body).unwrap().as_deref(),
        Some("https://audio.example/a.m4a")
    );
}

#[test]
fn no_results_means_no_preview() {
    assert_eq!(
        parse_first_preview_url(r#"{"resultCount":0,"results":[]}"#).unwrap(),
        None
    );
    assert_eq!(parse_first_preview_url("{}").unwrap(), None);
}

#[test]
fn first_hit_without_preview_is_not_skipped_over() {
    let body = r#"{"results":[{"trackName":"x"},{"previewUrl":"https://audio.example/b.m4a"}]}"#;
    assert_eq!(parse_first_preview_url(body).unwrap(), None);
    let body = r#"{"results":[{"previewUrl":""}]}"#;
    assert_eq!(parse_first_preview_url(body).unwrap(), None);
}

#[test]
fn malformed_body_is_an_error() {
    assert!(parse_first_preview_url("<html>").is_err());
    assert!(parse_first_preview_url(r#"{"results":"nope"}"#).is_err());
}

#[test]
fn fade_steps_down_and_stops() {
    let config = PreviewConfig::default();
    let mut volume = config.volume;
    let mut ticks = 0;
    while let Some(next) = next_fade_volume(volume, &config) {
        assert!(next < volume);
        assert!(next >= 0.0);
        volume = next;
        ticks += 1;
        assert!(ticks <= 10, "fade never ended");
    }
    assert!(volume <= config.fade_floor);
    // roughly half a second from the default volume
    assert!((5..=6).contains(&ticks));
}

#[test]
fn fade_of_silent_audio_stops_immediately() {
    let config = PreviewConfig::default();
    assert_eq!(next_fade_volume(0.0, &config), None);
    assert_eq!(next_fade_volume(0.05, &config), None);
    assert_eq!(next_fade_volume(0.08, &config), Some(0.0));
}

#[test]
fn new_preview_during_fade_silences_the_old_one_first() {
    // answering quickly after `advance` lands mid-fade while still playing
    assert!(halt_before_lookup(true, false));
    // the fade may already have paused it on its last tick
    assert!(halt_before_lookup(true, true));
}

#[test]
fn audible_preview_without_fade_is_halted() {
    assert!(halt_before_lookup(false, false));
}

#[test]
fn idle_element_is_left_alone() {
    assert!(!halt_before_lookup(false, true));
}

#[test]
fn interrupted_fade_never_leaves_audio_running() {
    // walk a fade from full volume and interrupt it at every tick
    let config = PreviewConfig::default();
    let mut volume = config.volume;
    let mut paused = false;
    loop {
        assert!(halt_before_lookup(true, paused), "volume {volume}");
        match next_fade_volume(volume, &config) {
            Some(v) => volume = v,
            None => {
                paused = true;
                break;
            }
        }
    }
    // once the fade has finished there is nothing left to halt
    assert!(!halt_before_lookup(false, paused));
}
