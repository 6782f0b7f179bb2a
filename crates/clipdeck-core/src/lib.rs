//! Clipdeck Core - Video Playlist Player
//!
//! This crate provides the platform-independent half of the player:
//! - Static catalog loading and locator resolution
//! - Playlist ordering with drag-and-drop reorder
//! - Transport control (play/pause, skip, volume, speed, fullscreen)
//! - Surface binding and auto-advance on end-of-stream
//! - Render snapshots for the control surface
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Clipdeck Core                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  ┌──────────────┐   ┌──────────────┐   ┌──────────────┐     │
//! │  │   Catalog    │──▶│   Playlist   │◀──│     Drag     │     │
//! │  └──────────────┘   └──────┬───────┘   └──────────────┘     │
//! │                            │                                │
//! │  ┌──────────────┐   ┌──────┴───────┐   ┌──────────────┐     │
//! │  │   Actions    │──▶│    Player    │──▶│   Snapshot   │     │
//! │  └──────────────┘   └──────┬───────┘   └──────────────┘     │
//! │                            │                                │
//! │                     ┌──────┴───────┐                        │
//! │                     │ MediaSurface │  (video element, fake) │
//! │                     └──────────────┘                        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use clipdeck_core::{Catalog, Player, PlayerConfig, RecordingSurface, SkipDirection};
//! use url::Url;
//!
//! let base = Url::parse("https://cdn.example.com/").unwrap();
//! let catalog = Catalog::sample(&base).unwrap();
//! let mut player = Player::new(catalog, PlayerConfig::default(), RecordingSurface::new()).unwrap();
//!
//! player.mount();
//! player.skip(SkipDirection::Backward);
//! assert_eq!(player.state().current_index, 2);
//! ```

pub mod action;
pub mod catalog;
pub mod drag;
pub mod error;
pub mod player;
pub mod playlist;
pub mod snapshot;
pub mod surface;
pub mod types;

pub use action::PlayerAction;
pub use catalog::{Catalog, CatalogManifest, ManifestEntry};
pub use drag::DragPayload;
pub use error::{Error, Result};
pub use player::Player;
pub use playlist::Playlist;
pub use snapshot::{PlayerSnapshot, PlaylistRow, SpeedOption};
pub use surface::{MediaSurface, RecordingSurface, SurfaceCall};
pub use types::*;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log library initialization
pub fn init() {
    tracing::info!(version = VERSION, "Clipdeck Core initialized");
}
