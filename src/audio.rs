use std::cell::Cell;
use std::rc::Rc;
use trivia_core::{
    halt_before_lookup, next_fade_volume, parse_first_preview_url, PreviewAudioService,
    PreviewConfig, PreviewQuery,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

struct Fade {
    handle: Rc<Cell<Option<i32>>>,
    _tick: Closure<dyn FnMut()>,
}

/// Plays catalog previews through the page's `<audio>` element.
///
/// Each `play` bumps a request id; a lookup that resolves after a newer
/// `play` or a `stop` is dropped instead of starting playback.
pub struct PreviewPlayer {
    audio: web::HtmlAudioElement,
    config: Rc<PreviewConfig>,
    request_id: Rc<Cell<u64>>,
    fade: Option<Fade>,
}

impl PreviewPlayer {
    pub fn new(audio: web::HtmlAudioElement, config: PreviewConfig) -> Self {
        Self {
            audio,
            config: Rc::new(config),
            request_id: Rc::new(Cell::new(0)),
            fade: None,
        }
    }

    fn next_request(&self) -> u64 {
        let id = self.request_id.get().wrapping_add(1);
        self.request_id.set(id);
        id
    }

    /// Stop the fade interval. Returns whether a fade was still running.
    fn cancel_fade(&mut self) -> bool {
        let Some(fade) = self.fade.take() else {
            return false;
        };
        match fade.handle.take() {
            Some(handle) => {
                if let Some(w) = web::window() {
                    w.clear_interval_with_handle(handle);
                }
                true
            }
            None => false,
        }
    }

    fn halt(&self) {
        _ = self.audio.pause();
        self.audio.set_current_time(0.0);
    }
}

impl PreviewAudioService for PreviewPlayer {
    fn play(&mut self, search_term: &str) {
        let fade_running = self.cancel_fade();
        if halt_before_lookup(fade_running, self.audio.paused()) {
            self.halt();
        }
        let id = self.next_request();
        let request_id = self.request_id.clone();
        let config = self.config.clone();
        let audio = self.audio.clone();
        let term = search_term.to_owned();
        spawn_local(async move {
            let url = match lookup_preview_url(&config, &term).await {
                Ok(Some(url)) => url,
                Ok(None) => {
                    log::warn!("[preview] no preview for {:?}", term);
                    return;
                }
                Err(e) => {
                    log::warn!("[preview] lookup for {:?} failed: {:?}", term, e);
                    return;
                }
            };
            if request_id.get() != id {
                log::debug!("[preview] dropping stale result for {:?}", term);
                return;
            }
            audio.set_src(&url);
            audio.set_volume(config.volume);
            match audio.play() {
                Ok(promise) => {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[preview] play rejected: {:?}", e);
                    }
                }
                Err(e) => log::warn!("[preview] play error: {:?}", e),
            }
        });
    }

    fn stop(&mut self) {
        self.next_request();
        self.cancel_fade();
        let Some(window) = web::window() else {
            return;
        };

        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let handle_tick = handle.clone();
        let audio = self.audio.clone();
        let config = self.config.clone();
        let tick = Closure::wrap(Box::new(move || {
            match next_fade_volume(audio.volume(), &config) {
                Some(v) => audio.set_volume(v),
                None => {
                    _ = audio.pause();
                    audio.set_current_time(0.0);
                    if let (Some(h), Some(w)) = (handle_tick.take(), web::window()) {
                        w.clear_interval_with_handle(h);
                    }
                }
            }
        }) as Box<dyn FnMut()>);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            self.config.fade_interval_ms,
        ) {
            Ok(h) => handle.set(Some(h)),
            Err(e) => {
                log::error!("setInterval error: {:?}", e);
                self.halt();
                return;
            }
        }
        self.fade = Some(Fade {
            handle,
            _tick: tick,
        });
    }
}

async fn lookup_preview_url(config: &PreviewConfig, term: &str) -> anyhow::Result<Option<String>> {
    let url = web::Url::new(config.search_endpoint).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let params = url.search_params();
    for (key, value) in PreviewQuery::new(term, config).query_pairs() {
        params.append(key, &value);
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response = JsFuture::from(window.fetch_with_str(&url.href()))
        .await
        .map_err(|e| anyhow::anyhow!("fetch error: {:?}", e))?
        .dyn_into::<web::Response>()
        .map_err(|e| anyhow::anyhow!("not a Response: {:?}", e))?;
    if !response.ok() {
        anyhow::bail!("HTTP {}", response.status());
    }
    let body = JsFuture::from(response.text().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("body error: {:?}", e))?
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("body is not text"))?;
    Ok(parse_first_preview_url(&body)?)
}
