//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Failed to create window
    #[error("Window creation failed: {0}")]
    WindowCreation(String),

    /// The underlying native window is gone
    #[error("Window handle no longer valid: {0}")]
    WindowGone(String),

    /// Reading window geometry or state failed
    #[error("Geometry query failed: {0}")]
    GeometryQuery(String),

    /// Mutating window geometry or state failed
    #[error("Geometry update failed: {0}")]
    GeometryUpdate(String),

    /// Setting the cursor failed
    #[error("Cursor update failed: {0}")]
    CursorUpdate(String),

    /// Screen/workspace information unavailable
    #[error("Workspace query failed: {0}")]
    WorkspaceQuery(String),

    /// Operation not supported by this backend
    #[error("Platform not supported: {0}")]
    Unsupported(String),

    /// Generic platform error
    #[error("Platform error: {0}")]
    Other(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
