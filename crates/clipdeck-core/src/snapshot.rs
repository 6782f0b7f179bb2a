//! View model handed to renderers

use crate::{surface::MediaSurface, Player, SessionId, VideoId};
use serde::Serialize;
use url::Url;

/// Everything a renderer needs to draw the controls and the playlist
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub session_id: SessionId,
    pub current_index: usize,
    pub is_playing: bool,
    pub volume: f64,
    pub speed: f64,
    pub is_full_screen: bool,
    /// Source bound to the surface
    pub source: Url,
    pub speed_options: Vec<SpeedOption>,
    pub items: Vec<PlaylistRow>,
}

/// One entry of the speed selector
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedOption {
    pub value: f64,
    pub label: String,
    pub selected: bool,
}

/// One rendered playlist row
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistRow {
    pub index: usize,
    pub id: VideoId,
    pub title: String,
    pub thumbnail: Url,
    pub thumbnail_alt: String,
    pub active: bool,
}

impl PlayerSnapshot {
    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl<S: MediaSurface> Player<S> {
    /// Capture the current state for rendering
    pub fn snapshot(&self) -> PlayerSnapshot {
        let state = self.state();

        let speed_options = self
            .config()
            .speeds
            .iter()
            .map(|speed| SpeedOption {
                value: speed.rate(),
                label: speed.label(),
                selected: *speed == state.speed,
            })
            .collect();

        let items = self
            .playlist()
            .iter()
            .enumerate()
            .map(|(index, entry)| PlaylistRow {
                index,
                id: entry.id,
                title: entry.title.clone(),
                thumbnail: entry.thumbnail.clone(),
                thumbnail_alt: format!("Thumbnail for {}", entry.title),
                active: index == state.current_index,
            })
            .collect();

        PlayerSnapshot {
            session_id: self.id(),
            current_index: state.current_index,
            is_playing: state.is_playing,
            volume: state.volume.get(),
            speed: state.speed.rate(),
            is_full_screen: state.is_full_screen,
            source: self.current_entry().source.clone(),
            speed_options,
            items,
        }
    }
}
