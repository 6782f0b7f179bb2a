//! Clipdeck WASM - Browser Playlist Player
//!
//! Binds the Clipdeck core player to an HTML `<video>` element:
//! - Transport controls driven from page buttons, slider, and selector
//! - Drag-and-drop playlist reordering via `DataTransfer`
//! - Auto-advance on the element's `ended` event
//!
//! ## Integration
//!
//! ```javascript
//! import init, { ClipdeckPlayer } from '@clipdeck/wasm';
//!
//! await init();
//! const player = new ClipdeckPlayer(document.querySelector('video'), catalogJson);
//! render(player.snapshot());
//! ```

use wasm_bindgen::prelude::*;

mod player;
mod video_surface;

pub use player::ClipdeckPlayer;
pub use video_surface::VideoElementSurface;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[Clipdeck WASM] Initialized".into());
}

/// Library version
#[wasm_bindgen]
pub fn version() -> String {
    clipdeck_core::VERSION.to_string()
}

/// Speed selector labels for a config (or the defaults), as JSON
#[wasm_bindgen]
pub fn speed_options(config_json: Option<String>) -> Result<String, JsError> {
    let config = match config_json {
        Some(json) => clipdeck_core::PlayerConfig::from_json_str(&json)?,
        None => clipdeck_core::PlayerConfig::default(),
    };
    let labels: Vec<String> = config.speeds.iter().map(|s| s.label()).collect();
    Ok(serde_json::to_string(&labels)?)
}
