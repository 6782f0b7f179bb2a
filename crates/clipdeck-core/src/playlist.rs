//! Ordered playlist
//!
//! Entries come from the catalog and are never added or removed; the only
//! mutation is moving one entry to another slot.

use crate::{Catalog, Error, Result, VideoEntry, VideoId};
use tracing::debug;

/// Playback and display order of the catalog entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playlist {
    entries: Vec<VideoEntry>,
}

impl Playlist {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            entries: catalog.into_entries(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: playlists are built from non-empty catalogs
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&VideoEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[VideoEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &VideoEntry> {
        self.entries.iter()
    }

    /// Current slot of the entry with `id`
    pub fn position_of(&self, id: VideoId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Ids in playlist order
    pub fn ids(&self) -> Vec<VideoId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    /// Check that `index` names an existing slot
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    /// Move the entry at `from` so that it ends up at `to`.
    ///
    /// The entry is removed first, so `to` counts positions in the shortened
    /// sequence. Moving an entry onto its own slot leaves the order unchanged.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;

        let moved = self.entries.remove(from);
        debug!(id = %moved.id, from, to, "Reordering playlist entry");
        self.entries.insert(to, moved);
        Ok(())
    }
}
