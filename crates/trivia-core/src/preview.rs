//! Contract of the remote preview lookup, minus the I/O.
//!
//! The web front-end performs the fetch and drives the audio element; the
//! query shape, response parsing and fade curve live here so they can be
//! exercised on the host.

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewConfig {
    pub search_endpoint: &'static str,
    pub media: &'static str,
    pub limit: u32,
    /// Playback volume for a preview, 0..=1.
    pub volume: f64,
    /// Volume removed per fade tick.
    pub fade_step: f64,
    /// At or below this volume the fade ends and playback stops.
    pub fade_floor: f64,
    pub fade_interval_ms: i32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            search_endpoint: "https://itunes.apple.com/search",
            media: "music",
            limit: 1,
            volume: 0.5,
            fade_step: 0.1,
            fade_floor: 0.05,
            fade_interval_ms: 100,
        }
    }
}

/// A catalog search for one free-text term.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewQuery<'a> {
    pub term: &'a str,
    pub media: &'a str,
    pub limit: u32,
}

impl<'a> PreviewQuery<'a> {
    pub fn new(term: &'a str, config: &'a PreviewConfig) -> Self {
        Self {
            term,
            media: config.media,
            limit: config.limit,
        }
    }

    /// Unencoded key/value pairs; the caller appends them to the endpoint
    /// with whatever URL builder it has.
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("term", self.term.to_owned()),
            ("media", self.media.to_owned()),
            ("limit", self.limit.to_string()),
        ]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("malformed search response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    #[serde(rename = "previewUrl")]
    preview_url: Option<String>,
}

/// Preview URL of the first hit, if the first hit has one.
pub fn parse_first_preview_url(body: &str) -> Result<Option<String>, PreviewError> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response
        .results
        .into_iter()
        .next()
        .and_then(|hit| hit.preview_url)
        .filter(|url| !url.is_empty()))
}

/// Volume for the next fade tick, or `None` once playback should stop.
#[inline]
pub fn next_fade_volume(volume: f64, config: &PreviewConfig) -> Option<f64> {
    if volume > config.fade_floor {
        Some((volume - config.fade_step).max(0.0))
    } else {
        None
    }
}

/// Whether the element must be paused and rewound before a new lookup
/// starts: true while a fade is running or the previous preview is still
/// audible.
#[inline]
pub fn halt_before_lookup(fade_running: bool, paused: bool) -> bool {
    fade_running || !paused
}
