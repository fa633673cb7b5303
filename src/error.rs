// Pose Overlay 🚀 AGPL-3.0 License

//! Error types for the overlay library.
//!
//! The core pipeline (synchronizer + smoother) has no error conditions at
//! all: degenerate inputs resolve to defined pass-through behavior. Errors
//! only arise at the edges: export I/O, CSV parsing, and the visualizer.

use std::fmt;

/// Result type alias for overlay operations.
pub type Result<T> = std::result::Result<T, OverlayError>;

/// Main error type for the overlay library.
#[derive(Debug)]
pub enum OverlayError {
    /// Recording export or import error.
    ExportError(String),
    /// Visualizer error.
    VisualizerError(String),
    /// Wrapped `std::io::Error`.
    Io(std::io::Error),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExportError(msg) => write!(f, "Export error: {msg}"),
            Self::VisualizerError(msg) => write!(f, "Visualizer error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for OverlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OverlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = OverlayError::ExportError("test".to_string());
        assert_eq!(err.to_string(), "Export error: test");

        let err = OverlayError::VisualizerError("test".to_string());
        assert_eq!(err.to_string(), "Visualizer error: test");
    }

    #[test]
    fn test_io_error_source() {
        use std::error::Error;
        let err: OverlayError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(err.source().is_some());
    }
}
