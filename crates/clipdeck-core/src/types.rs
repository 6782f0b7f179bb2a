//! Core types for Clipdeck

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use url::Url;
use uuid::Uuid;

/// Unique identifier for a player instance, carried in log fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalog-assigned video identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub u32);

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog item: a video and its display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEntry {
    pub id: VideoId,
    /// Media source loaded into the surface
    pub source: Url,
    pub title: String,
    /// Pre-rendered thumbnail shown in the playlist
    pub thumbnail: Url,
}

impl VideoEntry {
    pub fn new(id: u32, source: Url, title: impl Into<String>, thumbnail: Url) -> Self {
        Self {
            id: VideoId(id),
            source,
            title: title.into(),
            thumbnail,
        }
    }
}

/// Playback rates offered by the speed selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum PlaybackSpeed {
    Half,
    #[default]
    Normal,
    OneAndHalf,
    Double,
}

impl PlaybackSpeed {
    pub const ALL: [PlaybackSpeed; 4] = [
        PlaybackSpeed::Half,
        PlaybackSpeed::Normal,
        PlaybackSpeed::OneAndHalf,
        PlaybackSpeed::Double,
    ];

    /// Rate multiplier pushed to the surface
    pub fn rate(&self) -> f64 {
        match self {
            PlaybackSpeed::Half => 0.5,
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::OneAndHalf => 1.5,
            PlaybackSpeed::Double => 2.0,
        }
    }

    /// Selector label, e.g. `1.5x`
    pub fn label(&self) -> String {
        format!("{}x", self.rate())
    }
}

impl TryFrom<f64> for PlaybackSpeed {
    type Error = Error;

    fn try_from(rate: f64) -> Result<Self> {
        PlaybackSpeed::ALL
            .into_iter()
            .find(|speed| speed.rate() == rate)
            .ok_or_else(|| Error::InvalidSpeed(rate.to_string()))
    }
}

impl From<PlaybackSpeed> for f64 {
    fn from(speed: PlaybackSpeed) -> f64 {
        speed.rate()
    }
}

impl FromStr for PlaybackSpeed {
    type Err = Error;

    /// Accepts selector values such as `1.5` or `1.5x`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('x').unwrap_or(trimmed);
        let rate: f64 = number
            .parse()
            .map_err(|_| Error::InvalidSpeed(s.to_string()))?;
        PlaybackSpeed::try_from(rate)
    }
}

impl std::fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x", self.rate())
    }
}

/// Output volume in `[0, 1]`
///
/// Construction clamps, so a `Volume` is always in range by the time it
/// reaches the player.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Volume(f64);

impl Volume {
    pub const MUTED: Volume = Volume(0.0);
    pub const MAX: Volume = Volume(1.0);

    pub fn new(level: f64) -> Self {
        if level.is_nan() {
            return Volume::MUTED;
        }
        Volume(level.clamp(0.0, 1.0))
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Volume(0.5)
    }
}

impl From<f64> for Volume {
    fn from(level: f64) -> Self {
        Volume::new(level)
    }
}

impl From<Volume> for f64 {
    fn from(volume: Volume) -> f64 {
        volume.0
    }
}

/// Direction of a track skip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkipDirection {
    Forward,
    Backward,
}

impl SkipDirection {
    /// Next index with wraparound. `len` must be at least 1.
    pub fn step(&self, index: usize, len: usize) -> usize {
        match self {
            SkipDirection::Forward if index + 1 >= len => 0,
            SkipDirection::Forward => index + 1,
            SkipDirection::Backward if index == 0 => len - 1,
            SkipDirection::Backward => index - 1,
        }
    }
}

impl std::fmt::Display for SkipDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipDirection::Forward => write!(f, "forward"),
            SkipDirection::Backward => write!(f, "backward"),
        }
    }
}

/// How the active track is followed when the playlist is reordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveTracking {
    /// Keep the numeric slot; whatever entry lands there becomes active
    Position,
    /// Follow the active entry's id to its new slot
    Identity,
}

/// Mutable playback state mirrored onto the surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub current_index: usize,
    pub is_playing: bool,
    pub volume: Volume,
    pub speed: PlaybackSpeed,
    pub is_full_screen: bool,
}

impl PlaybackState {
    pub fn initial(config: &PlayerConfig) -> Self {
        Self {
            current_index: 0,
            is_playing: false,
            volume: config.initial_volume,
            speed: config.default_speed,
            is_full_screen: false,
        }
    }
}

/// Player configuration, with camelCase keys like every other JSON payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerConfig {
    /// Options offered by the speed selector, in display order
    pub speeds: Vec<PlaybackSpeed>,
    /// Speed applied at startup and after every skip
    pub default_speed: PlaybackSpeed,
    /// Volume at startup
    pub initial_volume: Volume,
    /// Whether loading a source starts playback
    pub autoplay: bool,
    /// Active-track policy under reorder
    pub active_tracking: ActiveTracking,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            speeds: PlaybackSpeed::ALL.to_vec(),
            default_speed: PlaybackSpeed::Normal,
            initial_volume: Volume::default(),
            autoplay: true,
            active_tracking: ActiveTracking::Identity,
        }
    }
}

impl PlayerConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PlayerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.speeds.is_empty() {
            return Err(Error::InvalidConfig("speeds must not be empty".into()));
        }
        if !self.speeds.contains(&self.default_speed) {
            return Err(Error::InvalidConfig(format!(
                "default speed {} is not among the offered speeds",
                self.default_speed
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_wraparound() {
        for len in 1..8 {
            assert_eq!(SkipDirection::Forward.step(len - 1, len), 0);
            assert_eq!(SkipDirection::Backward.step(0, len), len - 1);
            for i in 1..len.saturating_sub(1) {
                assert_eq!(SkipDirection::Forward.step(i, len), i + 1);
                assert_eq!(SkipDirection::Backward.step(i, len), i - 1);
            }
        }
    }

    #[test]
    fn test_single_entry_skip_stays_put() {
        assert_eq!(SkipDirection::Forward.step(0, 1), 0);
        assert_eq!(SkipDirection::Backward.step(0, 1), 0);
    }

    #[test]
    fn test_speed_parsing() {
        assert_eq!("1.5".parse::<PlaybackSpeed>().unwrap(), PlaybackSpeed::OneAndHalf);
        assert_eq!("2x".parse::<PlaybackSpeed>().unwrap(), PlaybackSpeed::Double);
        assert_eq!(" 0.5 ".parse::<PlaybackSpeed>().unwrap(), PlaybackSpeed::Half);
        assert!(matches!(
            "3".parse::<PlaybackSpeed>(),
            Err(Error::InvalidSpeed(_))
        ));
        assert!("fast".parse::<PlaybackSpeed>().is_err());
    }

    #[test]
    fn test_speed_labels() {
        let labels: Vec<String> = PlaybackSpeed::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["0.5x", "1x", "1.5x", "2x"]);
    }

    #[test]
    fn test_volume_clamps() {
        assert_eq!(Volume::new(1.7).get(), 1.0);
        assert_eq!(Volume::new(-0.2).get(), 0.0);
        assert_eq!(Volume::new(f64::NAN), Volume::MUTED);
        assert_eq!(Volume::new(0.33).get(), 0.33);
    }

    #[test]
    fn test_config_json_defaults() {
        let config = PlayerConfig::from_json_str(r#"{ "autoplay": false }"#).unwrap();
        assert!(!config.autoplay);
        assert_eq!(config.speeds, PlaybackSpeed::ALL.to_vec());
        assert_eq!(config.initial_volume.get(), 0.5);
        assert_eq!(config.active_tracking, ActiveTracking::Identity);
        assert_eq!(config.default_speed, PlaybackSpeed::Normal);
        assert_eq!(PlaybackSpeed::default(), PlaybackSpeed::Normal);
    }

    #[test]
    fn test_config_speed_values() {
        let config = PlayerConfig::from_json_str(
            r#"{ "speeds": [1, 2], "defaultSpeed": 1, "activeTracking": "position" }"#,
        )
        .unwrap();
        assert_eq!(config.speeds, vec![PlaybackSpeed::Normal, PlaybackSpeed::Double]);
        assert_eq!(config.active_tracking, ActiveTracking::Position);
    }

    #[test]
    fn test_config_rejects_bad_speeds() {
        assert!(PlayerConfig::from_json_str(r#"{ "speeds": [0.75] }"#).is_err());
        assert!(matches!(
            PlayerConfig::from_json_str(r#"{ "speeds": [] }"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            PlayerConfig::from_json_str(r#"{ "speeds": [2], "defaultSpeed": 1 }"#),
            Err(Error::InvalidConfig(_))
        ));
    }
}
