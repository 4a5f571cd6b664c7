use thiserror::Error;

/// Failures that can happen anywhere in the finder pipeline.
///
/// None of these ever reach the user as an error state: every actor boundary
/// logs them and falls back to an empty or zero value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FinderError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("position unavailable: {0}")]
    PositionUnavailable(String),
    #[error("remote feed fetch failed: {0}")]
    FetchFailure(String),
    #[error("storage read failed: {0}")]
    StorageRead(String),
    #[error("stored value could not be parsed: {0}")]
    StorageParse(String),
    #[error("storage write failed: {0}")]
    StorageWrite(String),
}
