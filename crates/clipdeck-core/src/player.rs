//! Player - owns the playlist, the playback state, and the media surface
//!
//! Every handler follows the same order:
//! - update [`PlaybackState`]
//! - issue the matching surface calls, last
//!
//! so that a surface callback fired from inside a call already observes the
//! new state.

use crate::{
    drag::{self, DragPayload},
    surface::MediaSurface,
    types::*,
    Catalog, Error, PlayerAction, Playlist, Result,
};
use tracing::{debug, info, instrument, warn};

/// Video playlist player bound to a single surface
pub struct Player<S: MediaSurface> {
    /// Unique player ID
    id: SessionId,
    /// Player configuration
    config: PlayerConfig,
    /// Entries in playback order
    playlist: Playlist,
    /// Current playback state
    state: PlaybackState,
    /// Owned rendering surface
    surface: S,
    /// Whether a source has been bound yet
    mounted: bool,
}

impl<S: MediaSurface> Player<S> {
    /// Create a player. The surface stays unbound until [`Player::mount`].
    pub fn new(catalog: Catalog, config: PlayerConfig, surface: S) -> Result<Self> {
        config.validate()?;

        let id = SessionId::new();
        info!(session_id = %id, videos = catalog.len(), "Player created");

        Ok(Self {
            id,
            state: PlaybackState::initial(&config),
            config,
            playlist: Playlist::new(catalog),
            surface,
            mounted: false,
        })
    }

    /// Get player ID
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Get current state
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Entry currently bound to the surface
    pub fn current_entry(&self) -> &VideoEntry {
        &self.playlist.entries()[self.state.current_index]
    }

    /// First render: bind the current entry and apply volume and speed.
    ///
    /// The playing flag is read back from the surface. A platform that
    /// starts autoplay later reports it through [`Player::sync_play_state`];
    /// one that blocks autoplay leaves the player paused.
    pub fn mount(&mut self) {
        info!(session_id = %self.id, "Mounting player");
        self.bind();
        self.state.is_playing = self.surface.is_playing();
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Flip between playing and paused. Mounts first if nothing is bound yet.
    #[instrument(skip(self))]
    pub fn toggle_play_pause(&mut self) {
        if !self.mounted {
            self.mount();
        }
        self.state.is_playing = !self.state.is_playing;

        let result = if self.state.is_playing {
            self.surface.play()
        } else {
            self.surface.pause()
        };
        if let Err(e) = result {
            debug!(error = %e, playing = self.state.is_playing, "Surface ignored play/pause");
        }
    }

    /// Move to the neighbouring entry, wrapping at both ends
    #[instrument(skip(self))]
    pub fn skip(&mut self, direction: SkipDirection) {
        let from = self.state.current_index;
        self.state.current_index = direction.step(from, self.playlist.len());
        self.state.speed = self.config.default_speed;

        debug!(from, to = self.state.current_index, "Skipping");
        self.rebind();
    }

    /// Set output volume
    pub fn set_volume(&mut self, volume: Volume) {
        self.state.volume = volume;
        self.surface.set_volume(self.state.volume.get());
    }

    /// Set playback speed. Only speeds offered by the config are accepted.
    pub fn set_speed(&mut self, speed: PlaybackSpeed) -> Result<()> {
        if !self.config.speeds.contains(&speed) {
            return Err(Error::InvalidSpeed(format!("{speed} is not offered")));
        }

        self.state.speed = speed;
        debug!(speed = %speed, "Speed changed");
        self.surface.set_playback_rate(self.state.speed.rate());
        Ok(())
    }

    /// Flip the fullscreen flag and enter or leave fullscreen accordingly.
    ///
    /// A rejected request is logged; the flag keeps the value the user asked for.
    #[instrument(skip(self))]
    pub fn toggle_full_screen(&mut self) {
        self.state.is_full_screen = !self.state.is_full_screen;

        if !self.surface.is_fullscreen() {
            if let Err(e) = self.surface.request_fullscreen() {
                warn!(error = %e, "Error attempting to enable full-screen mode");
            }
        } else if let Err(e) = self.surface.exit_fullscreen() {
            warn!(error = %e, "Error attempting to exit full-screen mode");
        }
    }

    /// Force the fullscreen flag off, leaving platform fullscreen if active
    pub fn exit_full_screen(&mut self) {
        self.state.is_full_screen = false;

        if self.surface.is_fullscreen() {
            if let Err(e) = self.surface.exit_fullscreen() {
                warn!(error = %e, "Error attempting to exit full-screen mode");
            }
        }
    }

    /// Jump to a playlist row. Speed is kept.
    #[instrument(skip(self))]
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.playlist.check_index(index)?;
        if index == self.state.current_index {
            return Ok(());
        }

        self.state.current_index = index;
        self.rebind();
        Ok(())
    }

    /// End-of-stream from the surface: stop, then advance
    pub fn handle_ended(&mut self) {
        debug!(index = self.state.current_index, "Stream ended");
        self.state.is_playing = false;
        self.skip(SkipDirection::Forward);
    }

    /// Record a play/pause the surface performed on its own
    pub fn sync_play_state(&mut self, playing: bool) {
        if self.state.is_playing != playing {
            debug!(playing, "Surface play state changed");
        }
        self.state.is_playing = playing;
    }

    /// Start dragging the row at `index`
    pub fn drag_start(&self, index: usize) -> Result<DragPayload> {
        self.playlist.check_index(index)?;
        Ok(DragPayload::for_index(index))
    }

    /// Whether rows accept drops; the host must suppress its default rejection
    pub fn drag_over(&self) -> bool {
        true
    }

    /// Apply a drop onto row `target`.
    ///
    /// Returns false and leaves the playlist untouched when the payload does
    /// not name a row of this playlist.
    pub fn drop_payload(&mut self, raw: &str, target: usize) -> bool {
        let action = match drag::reorder_action(raw, target, self.playlist.len()) {
            Ok(action) => action,
            Err(e) => {
                debug!(error = %e, target, "Ignoring drop");
                return false;
            }
        };
        self.dispatch(action).is_ok()
    }

    /// Move the entry at `from` to `to` (post-removal indexing)
    #[instrument(skip(self))]
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        let active = self.current_entry().id;
        self.playlist.reorder(from, to)?;

        match self.config.active_tracking {
            ActiveTracking::Identity => {
                if let Some(index) = self.playlist.position_of(active) {
                    self.state.current_index = index;
                }
            }
            ActiveTracking::Position => {
                if self.current_entry().id != active {
                    info!(
                        index = self.state.current_index,
                        id = %self.current_entry().id,
                        "Active slot now holds a different entry"
                    );
                    self.rebind();
                }
            }
        }
        Ok(())
    }

    /// Validate and apply an action
    pub fn dispatch(&mut self, action: PlayerAction) -> Result<()> {
        debug!(session_id = %self.id, action = action.name(), "Dispatch");

        match action {
            PlayerAction::TogglePlayPause => self.toggle_play_pause(),
            PlayerAction::Skip { direction } => self.skip(direction),
            PlayerAction::SetVolume { volume } => self.set_volume(volume),
            PlayerAction::SetSpeed { speed } => self.set_speed(speed)?,
            PlayerAction::ToggleFullScreen => self.toggle_full_screen(),
            PlayerAction::ExitFullScreen => self.exit_full_screen(),
            PlayerAction::Select { index } => self.select(index)?,
            PlayerAction::Reorder { from, to } => self.reorder(from, to)?,
            PlayerAction::Ended => self.handle_ended(),
            PlayerAction::PlayStateChanged { playing } => self.sync_play_state(playing),
        }
        Ok(())
    }

    /// Parse a JSON action and apply it
    pub fn dispatch_json(&mut self, json: &str) -> Result<()> {
        let action: PlayerAction = serde_json::from_str(json)?;
        self.dispatch(action)
    }

    /// Switch the surface to the current entry after a user-driven change.
    ///
    /// With autoplay the new entry counts as playing; without it, playback
    /// resumes only if the player was already playing.
    fn rebind(&mut self) {
        if self.config.autoplay {
            self.state.is_playing = true;
        }

        self.bind();

        if !self.config.autoplay && self.state.is_playing {
            if let Err(e) = self.surface.play() {
                debug!(error = %e, "Surface ignored play after load");
            }
        }
    }

    /// Load the current entry and carry settings over.
    ///
    /// Loading resets the platform's rate, so volume and speed are pushed
    /// again after every load.
    fn bind(&mut self) {
        self.mounted = true;

        let entry = &self.playlist.entries()[self.state.current_index];
        info!(
            session_id = %self.id,
            index = self.state.current_index,
            id = %entry.id,
            title = %entry.title,
            "Binding surface"
        );

        self.surface.load(&entry.source);
        self.surface.set_volume(self.state.volume.get());
        self.surface.set_playback_rate(self.state.speed.rate());
    }
}

impl<S: MediaSurface> std::fmt::Debug for Player<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("playlist", &self.playlist.ids())
            .finish_non_exhaustive()
    }
}
