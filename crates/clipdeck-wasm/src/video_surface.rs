//! Media surface over an HTML `<video>` element

use clipdeck_core::{Error, MediaSurface, Result};
use js_sys::{Function, Promise, Reflect};
use url::Url;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlVideoElement};

/// Owns the page's video element for the lifetime of the player
pub struct VideoElementSurface {
    video: HtmlVideoElement,
    document: Document,
}

impl VideoElementSurface {
    /// Claim `video`. The element must already be attached to a document.
    pub fn new(video: HtmlVideoElement, autoplay: bool) -> std::result::Result<Self, JsError> {
        let document = video
            .owner_document()
            .ok_or_else(|| JsError::new("video element is not attached to a document"))?;

        video.set_autoplay(autoplay);
        video.set_controls(true);

        Ok(Self { video, document })
    }

    pub fn element(&self) -> &HtmlVideoElement {
        &self.video
    }
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

fn rejection_message(call: &str, reason: &str) -> String {
    format!("[Clipdeck] {}() rejected: {}", call, reason)
}

/// Log a rejection of `promise` to the console once it settles
fn watch(call: &'static str, promise: Promise) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            web_sys::console::warn_1(&rejection_message(call, &describe(&e)).into());
        }
    });
}

impl MediaSurface for VideoElementSurface {
    fn load(&mut self, source: &Url) {
        self.video.set_src(source.as_str());
    }

    fn play(&mut self) -> Result<()> {
        let promise = self
            .video
            .play()
            .map_err(|e| Error::surface("play", describe(&e)))?;

        // Autoplay policies reject the promise later; nothing to roll back.
        watch("play", promise);
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.video
            .pause()
            .map_err(|e| Error::surface("pause", describe(&e)))
    }

    fn set_volume(&mut self, volume: f64) {
        self.video.set_volume(volume);
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.video.set_playback_rate(rate);
    }

    fn is_playing(&self) -> bool {
        !self.video.paused()
    }

    fn is_fullscreen(&self) -> bool {
        self.document.fullscreen_element().is_some()
    }

    /// Invoked through `Reflect` so the returned promise can be watched
    fn request_fullscreen(&mut self) -> Result<()> {
        let request = Reflect::get(&self.video, &JsValue::from_str("requestFullscreen"))
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| Error::surface("request_fullscreen", "not supported"))?;

        let returned = request
            .call0(&self.video)
            .map_err(|e| Error::surface("request_fullscreen", describe(&e)))?;

        // Older engines return undefined instead of a promise
        if let Ok(promise) = returned.dyn_into::<Promise>() {
            watch("requestFullscreen", promise);
        }
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        self.document.exit_fullscreen();
        Ok(())
    }
}
