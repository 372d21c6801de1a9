//! Snapshot-specific error type.

use purifier_domain::error::PurifierError;

/// Errors originating from reading a snapshot file.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("failed to read snapshot file")]
    Io(#[from] std::io::Error),

    /// The snapshot is not valid JSON or does not match the wire format.
    #[error("failed to parse snapshot")]
    Parse(#[from] serde_json::Error),
}

impl From<SnapshotError> for PurifierError {
    fn from(err: SnapshotError) -> Self {
        Self::Registry(Box::new(err))
    }
}
