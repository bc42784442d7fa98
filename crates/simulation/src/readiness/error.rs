// ---------------------------------------------------------------------------
// AssetLoadError: the one failure the scene models
// ---------------------------------------------------------------------------

use std::fmt;

use super::types::AssetKind;

/// An environment map or model failed to load.
///
/// Carries the loader's reason as text so it can travel through ECS events and
/// be logged without holding on to the asset server's error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetLoadError {
    pub kind: AssetKind,
    pub path: String,
    pub reason: String,
}

impl AssetLoadError {
    pub fn new(kind: AssetKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            path: kind.path().to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "failed to load {} '{}': {}",
            self.kind.label(),
            self.path,
            self.reason
        )
    }
}

impl std::error::Error for AssetLoadError {}
