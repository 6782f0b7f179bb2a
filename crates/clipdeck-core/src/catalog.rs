//! Static video catalog
//!
//! The catalog is the fixed set of videos handed to a player at construction.
//! It is read from a JSON manifest whose locators may be relative to a base URL:
//!
//! ```json
//! {
//!   "baseUrl": "https://cdn.example.com/player/",
//!   "videos": [
//!     { "id": 1, "src": "videos/video1.mp4", "title": "Video 1", "thumbnail": "thumbnails/thumbnail1.jpg" }
//!   ]
//! }
//! ```

use crate::{Error, Result, VideoEntry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;
use url::Url;

/// Catalog manifest as written on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogManifest {
    /// Base for resolving relative `src` and `thumbnail` locators
    #[serde(default)]
    pub base_url: Option<Url>,
    pub videos: Vec<ManifestEntry>,
}

/// One unresolved manifest row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub id: u32,
    pub src: String,
    pub title: String,
    pub thumbnail: String,
}

/// Validated, ordered set of video entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<VideoEntry>,
}

impl Catalog {
    /// Build a catalog from already-resolved entries
    pub fn new(entries: Vec<VideoEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::EmptyCatalog);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.id) {
                return Err(Error::DuplicateId { id: entry.id.0 });
            }
        }

        Ok(Self { entries })
    }

    /// Resolve a manifest into a catalog
    pub fn from_manifest(manifest: CatalogManifest) -> Result<Self> {
        let base = manifest.base_url.as_ref();
        let entries = manifest
            .videos
            .into_iter()
            .map(|row| {
                Ok(VideoEntry::new(
                    row.id,
                    resolve_locator(base, &row.src)?,
                    row.title,
                    resolve_locator(base, &row.thumbnail)?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let catalog = Self::new(entries)?;
        debug!(videos = catalog.len(), "Catalog resolved");
        Ok(catalog)
    }

    /// Parse a JSON manifest
    pub fn from_json_str(json: &str) -> Result<Self> {
        let manifest: CatalogManifest = serde_json::from_str(json)?;
        Self::from_manifest(manifest)
    }

    /// Read a JSON manifest from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Three-video sample catalog served from `base`
    pub fn sample(base: &Url) -> Result<Self> {
        let videos = (1..=3)
            .map(|n| ManifestEntry {
                id: n,
                src: format!("videos/video{n}.mp4"),
                title: format!("Video {n}"),
                thumbnail: format!("thumbnails/thumbnail{n}.jpg"),
            })
            .collect();

        Self::from_manifest(CatalogManifest {
            base_url: Some(base.clone()),
            videos,
        })
    }

    pub fn entries(&self) -> &[VideoEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<VideoEntry> {
        self.entries
    }
}

fn resolve_locator(base: Option<&Url>, locator: &str) -> Result<Url> {
    let resolved = match base {
        Some(base) => base.join(locator),
        None => Url::parse(locator),
    };

    resolved.map_err(|e| Error::InvalidLocator {
        locator: locator.to_string(),
        reason: e.to_string(),
    })
}
