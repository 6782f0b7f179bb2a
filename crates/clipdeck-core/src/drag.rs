//! Drag-and-drop payloads for playlist reordering
//!
//! A drag carries the source slot as plain text, the way browser
//! `DataTransfer` payloads do. Anything can be dropped on the list, so the
//! payload is validated here and turned into a typed reorder action before it
//! reaches the playlist.

use crate::{Error, PlayerAction, Result};

/// MIME type the source index is stored under
pub const PAYLOAD_FORMAT: &str = "text/plain";

/// Transfer payload written on drag start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload(String);

impl DragPayload {
    pub fn for_index(index: usize) -> Self {
        Self(index.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Read the source index back out of a raw payload
    pub fn source_index(raw: &str) -> Result<usize> {
        raw.trim()
            .parse::<usize>()
            .map_err(|_| Error::MalformedPayload(raw.to_string()))
    }
}

impl std::fmt::Display for DragPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate a drop and build the matching reorder action.
///
/// Both the decoded source and the target must name slots of a playlist of
/// length `len`.
pub fn reorder_action(raw: &str, target: usize, len: usize) -> Result<PlayerAction> {
    let from = DragPayload::source_index(raw)?;
    if from >= len {
        return Err(Error::MalformedPayload(raw.to_string()));
    }
    if target >= len {
        return Err(Error::IndexOutOfRange { index: target, len });
    }
    Ok(PlayerAction::Reorder { from, to: target })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_round_trip() {
        let payload = DragPayload::for_index(4);
        assert_eq!(payload.as_str(), "4");
        assert_eq!(DragPayload::source_index(payload.as_str()).unwrap(), 4);
    }

    #[test]
    fn test_malformed_payloads() {
        for raw in ["", "abc", "-1", "1.5", "https://example.com/video.mp4"] {
            assert!(
                matches!(DragPayload::source_index(raw), Err(Error::MalformedPayload(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_reorder_action_bounds() {
        assert_eq!(
            reorder_action("0", 2, 3).unwrap(),
            PlayerAction::Reorder { from: 0, to: 2 }
        );
        assert!(matches!(
            reorder_action("3", 0, 3),
            Err(Error::MalformedPayload(_))
        ));
        assert!(matches!(
            reorder_action("0", 3, 3),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        ));
    }
}
