//! In-memory surface that records every call

use super::MediaSurface;
use crate::{Error, Result};
use serde::Serialize;
use url::Url;

/// A single call issued to a surface
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", content = "value", rename_all = "camelCase")]
pub enum SurfaceCall {
    Load(Url),
    Play,
    Pause,
    SetVolume(f64),
    SetPlaybackRate(f64),
    RequestFullscreen,
    ExitFullscreen,
}

impl std::fmt::Display for SurfaceCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceCall::Load(url) => write!(f, "load {url}"),
            SurfaceCall::Play => write!(f, "play"),
            SurfaceCall::Pause => write!(f, "pause"),
            SurfaceCall::SetVolume(v) => write!(f, "volume {v}"),
            SurfaceCall::SetPlaybackRate(r) => write!(f, "rate {r}"),
            SurfaceCall::RequestFullscreen => write!(f, "request-fullscreen"),
            SurfaceCall::ExitFullscreen => write!(f, "exit-fullscreen"),
        }
    }
}

/// Headless surface that mimics a browser video element.
///
/// Loading a source starts playback when `autoplay` is set and resets the
/// rate to 1, as browsers do. Volume survives loads.
#[derive(Debug)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    source: Option<Url>,
    autoplay: bool,
    playing: bool,
    volume: f64,
    rate: f64,
    fullscreen: bool,
    reject_fullscreen: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            source: None,
            autoplay: true,
            playing: false,
            volume: 1.0,
            rate: 1.0,
            fullscreen: false,
            reject_fullscreen: false,
        }
    }

    /// Surface whose fullscreen requests are denied, like a browser
    /// without a user activation
    pub fn rejecting_fullscreen() -> Self {
        Self {
            reject_fullscreen: true,
            ..Self::new()
        }
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    /// Drain the call log
    pub fn take_calls(&mut self) -> Vec<SurfaceCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn source(&self) -> Option<&Url> {
        self.source.as_ref()
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn playback_rate(&self) -> f64 {
        self.rate
    }

    /// Simulate the user leaving fullscreen with the platform's own gesture
    pub fn platform_exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaSurface for RecordingSurface {
    fn load(&mut self, source: &Url) {
        self.calls.push(SurfaceCall::Load(source.clone()));
        self.source = Some(source.clone());
        self.playing = self.autoplay;
        self.rate = 1.0;
    }

    fn play(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::Play);
        if self.source.is_none() {
            return Err(Error::surface("play", "no source loaded"));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::Pause);
        self.playing = false;
        Ok(())
    }

    fn set_volume(&mut self, volume: f64) {
        self.calls.push(SurfaceCall::SetVolume(volume));
        self.volume = volume;
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.calls.push(SurfaceCall::SetPlaybackRate(rate));
        self.rate = rate;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn request_fullscreen(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::RequestFullscreen);
        if self.reject_fullscreen {
            return Err(Error::surface(
                "request_fullscreen",
                "permissions check failed",
            ));
        }
        self.fullscreen = true;
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<()> {
        self.calls.push(SurfaceCall::ExitFullscreen);
        self.fullscreen = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_autoplays_and_resets_rate() {
        let mut surface = RecordingSurface::new();
        surface.set_playback_rate(2.0);
        surface.set_volume(0.2);
        surface.load(&Url::parse("https://example.com/a.mp4").unwrap());

        assert!(surface.is_playing());
        assert_eq!(surface.playback_rate(), 1.0);
        assert_eq!(surface.volume(), 0.2);
    }

    #[test]
    fn test_play_without_source_fails() {
        let mut surface = RecordingSurface::new().with_autoplay(false);
        assert!(surface.play().is_err());
        assert_eq!(surface.calls(), &[SurfaceCall::Play]);
    }

    #[test]
    fn test_rejected_fullscreen() {
        let mut surface = RecordingSurface::rejecting_fullscreen();
        assert!(surface.request_fullscreen().is_err());
        assert!(!surface.is_fullscreen());
    }

    #[test]
    fn test_call_serialization() {
        let json = serde_json::to_string(&SurfaceCall::SetVolume(0.25)).unwrap();
        assert_eq!(json, r#"{"call":"setVolume","value":0.25}"#);
        let json = serde_json::to_string(&SurfaceCall::Play).unwrap();
        assert_eq!(json, r#"{"call":"play"}"#);
    }
}
