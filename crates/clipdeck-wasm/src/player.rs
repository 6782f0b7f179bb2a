//! Page-facing player bound to a video element

use crate::video_surface::VideoElementSurface;
use clipdeck_core::{
    drag::PAYLOAD_FORMAT, Catalog, PlaybackSpeed, Player, PlayerAction, PlayerConfig,
    SkipDirection, Volume,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, HtmlVideoElement};

type SharedPlayer = Rc<RefCell<Player<VideoElementSurface>>>;

/// Playlist player for the browser
///
/// ```javascript
/// const player = new ClipdeckPlayer(videoEl, catalogJson);
/// playButton.onclick = () => player.toggle_play_pause();
/// row.ondragstart = (e) => player.on_drag_start(e, index);
/// row.ondragover = (e) => player.on_drag_over(e);
/// row.ondrop = (e) => player.on_drop(e, index);
/// ```
#[wasm_bindgen]
pub struct ClipdeckPlayer {
    inner: SharedPlayer,
    video: HtmlVideoElement,
    listeners: Vec<(&'static str, Closure<dyn FnMut()>)>,
}

#[wasm_bindgen]
impl ClipdeckPlayer {
    /// Create a player over `video` from a catalog manifest (JSON) and an
    /// optional player configuration (JSON)
    #[wasm_bindgen(constructor)]
    pub fn new(
        video: HtmlVideoElement,
        catalog_json: &str,
        config_json: Option<String>,
    ) -> Result<ClipdeckPlayer, JsError> {
        let catalog = Catalog::from_json_str(catalog_json)?;
        let config = match config_json {
            Some(json) => PlayerConfig::from_json_str(&json)?,
            None => PlayerConfig::default(),
        };

        let surface = VideoElementSurface::new(video.clone(), config.autoplay)?;
        let inner = Rc::new(RefCell::new(Player::new(catalog, config, surface)?));

        let mut player = Self {
            inner,
            video,
            listeners: Vec::new(),
        };
        player.listen("ended", |p| p.handle_ended())?;
        player.listen("play", |p| p.sync_play_state(true))?;
        player.listen("pause", |p| p.sync_play_state(false))?;

        // Autoplay starts after the load; the `play` listener flips the state
        player.inner.borrow_mut().mount();
        Ok(player)
    }

    #[wasm_bindgen]
    pub fn toggle_play_pause(&self) {
        self.inner.borrow_mut().toggle_play_pause();
    }

    #[wasm_bindgen]
    pub fn skip_forward(&self) {
        self.inner.borrow_mut().skip(SkipDirection::Forward);
    }

    #[wasm_bindgen]
    pub fn skip_backward(&self) {
        self.inner.borrow_mut().skip(SkipDirection::Backward);
    }

    /// Volume slider input (0..1, step 0.01)
    #[wasm_bindgen]
    pub fn set_volume(&self, volume: f64) {
        self.inner.borrow_mut().set_volume(Volume::new(volume));
    }

    /// Speed selector change, e.g. `"1.5"`
    #[wasm_bindgen]
    pub fn set_speed(&self, value: &str) -> Result<(), JsError> {
        let speed: PlaybackSpeed = value.parse()?;
        self.inner.borrow_mut().set_speed(speed)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn toggle_full_screen(&self) {
        self.inner.borrow_mut().toggle_full_screen();
    }

    #[wasm_bindgen]
    pub fn exit_full_screen(&self) {
        self.inner.borrow_mut().exit_full_screen();
    }

    /// Playlist row click
    #[wasm_bindgen]
    pub fn select(&self, index: usize) -> Result<(), JsError> {
        self.inner.borrow_mut().select(index)?;
        Ok(())
    }

    #[wasm_bindgen]
    pub fn on_drag_start(&self, event: DragEvent, index: usize) -> Result<(), JsError> {
        let payload = self.inner.borrow().drag_start(index)?;
        if let Some(transfer) = event.data_transfer() {
            transfer
                .set_data(PAYLOAD_FORMAT, payload.as_str())
                .map_err(|_| JsError::new("failed to write drag payload"))?;
        }
        Ok(())
    }

    #[wasm_bindgen]
    pub fn on_drag_over(&self, event: DragEvent) {
        if self.inner.borrow().drag_over() {
            event.prevent_default();
        }
    }

    /// Returns whether the playlist changed
    #[wasm_bindgen]
    pub fn on_drop(&self, event: DragEvent, target: usize) -> bool {
        event.prevent_default();
        let raw = event
            .data_transfer()
            .and_then(|transfer| transfer.get_data(PAYLOAD_FORMAT).ok())
            .unwrap_or_default();
        self.inner.borrow_mut().drop_payload(&raw, target)
    }

    /// Apply an action object, e.g. `{ type: "reorder", from: 0, to: 2 }`
    #[wasm_bindgen]
    pub fn dispatch(&self, action: JsValue) -> Result<(), JsError> {
        let action: PlayerAction = serde_wasm_bindgen::from_value(action)
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.inner.borrow_mut().dispatch(action)?;
        Ok(())
    }

    /// Current render state as a plain object
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.borrow().snapshot())
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Current render state as JSON
    #[wasm_bindgen]
    pub fn snapshot_json(&self) -> String {
        self.inner.borrow().snapshot().to_json()
    }
}

impl ClipdeckPlayer {
    /// Forward a video element event into the player
    fn listen(
        &mut self,
        event: &'static str,
        handler: fn(&mut Player<VideoElementSurface>),
    ) -> Result<(), JsError> {
        let weak = Rc::downgrade(&self.inner);
        let closure = Closure::<dyn FnMut()>::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            // Surface events are queued as tasks, so a busy borrow means a
            // handler is still on the stack; drop the event.
            match inner.try_borrow_mut() {
                Ok(mut player) => handler(&mut player),
                Err(_) => web_sys::console::warn_1(
                    &format!("[Clipdeck] dropped re-entrant '{}' event", event).into(),
                ),
            };
        });

        self.video
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|_| JsError::new(&format!("failed to listen for '{}'", event)))?;
        self.listeners.push((event, closure));
        Ok(())
    }
}

impl Drop for ClipdeckPlayer {
    fn drop(&mut self) {
        for (event, closure) in self.listeners.drain(..) {
            let _ = self
                .video
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}
