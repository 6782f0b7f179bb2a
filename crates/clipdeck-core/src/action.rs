//! Player actions
//!
//! Every gesture the control surface can produce, plus the two notifications
//! the media surface sends back. Hosts that prefer a message interface
//! (the wasm facade, the CLI) send these through [`crate::Player::dispatch`].

use crate::{PlaybackSpeed, SkipDirection, Volume};
use serde::{Deserialize, Serialize};

/// A single user intent or surface notification
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlayerAction {
    TogglePlayPause,
    Skip { direction: SkipDirection },
    SetVolume { volume: Volume },
    SetSpeed { speed: PlaybackSpeed },
    ToggleFullScreen,
    ExitFullScreen,
    /// Click on a playlist row
    Select { index: usize },
    /// Completed drag-and-drop
    Reorder { from: usize, to: usize },
    /// Surface reached the end of the stream
    Ended,
    /// Surface started or stopped on its own
    PlayStateChanged { playing: bool },
}

impl PlayerAction {
    /// Short name used in log fields
    pub fn name(&self) -> &'static str {
        match self {
            PlayerAction::TogglePlayPause => "toggle_play_pause",
            PlayerAction::Skip { .. } => "skip",
            PlayerAction::SetVolume { .. } => "set_volume",
            PlayerAction::SetSpeed { .. } => "set_speed",
            PlayerAction::ToggleFullScreen => "toggle_full_screen",
            PlayerAction::ExitFullScreen => "exit_full_screen",
            PlayerAction::Select { .. } => "select",
            PlayerAction::Reorder { .. } => "reorder",
            PlayerAction::Ended => "ended",
            PlayerAction::PlayStateChanged { .. } => "play_state_changed",
        }
    }
}
