//! Errors raised while writing or reading a snapshot report.

use thiserror::Error;

/// Failure to turn a snapshot into a JSON report, or to read one back.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("could not render snapshot report: {0}")]
    SerializationFailed(String),

    /// The text is not a snapshot report
    #[error("snapshot JSON is malformed: {0}")]
    DeserializationFailed(String),

    #[error("snapshot report has format version {found}, this build reads version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}
