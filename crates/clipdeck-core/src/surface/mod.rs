//! Media surface abstraction
//!
//! The player owns exactly one surface and issues every transport operation
//! through it. Browser builds implement it over an HTML video element; tests
//! and the CLI use [`RecordingSurface`].
//!
//! End-of-stream is not part of the trait: the host forwards the surface's
//! `ended` notification to [`crate::Player::handle_ended`].

mod recording;

pub use recording::{RecordingSurface, SurfaceCall};

use crate::Result;
use url::Url;

/// Trait for media rendering surfaces
pub trait MediaSurface {
    /// Bind a new source. Platforms with autoplay start playing immediately.
    fn load(&mut self, source: &Url);

    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Set output volume in `[0, 1]`
    fn set_volume(&mut self, volume: f64);

    /// Set the playback rate multiplier
    fn set_playback_rate(&mut self, rate: f64);

    /// Whether media is currently advancing
    fn is_playing(&self) -> bool;

    /// Whether the surface currently occupies the screen
    fn is_fullscreen(&self) -> bool;

    /// Ask the platform to show the surface fullscreen
    fn request_fullscreen(&mut self) -> Result<()>;

    /// Leave fullscreen
    fn exit_fullscreen(&mut self) -> Result<()>;
}
