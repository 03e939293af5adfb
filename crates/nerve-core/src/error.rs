//! Failure kinds recognised while attaching to a drawing surface.
//!
//! Neither is fatal: the wrapper logs the error once and keeps it as the
//! reason for its degraded state.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("Canvas element #{id} not found")]
    SurfaceNotFound { id: String },
    #[error("Failed to get 2d context for canvas #{id}")]
    ContextUnavailable { id: String },
}

impl SurfaceError {
    /// Id of the surface the failure refers to.
    pub fn surface_id(&self) -> &str {
        match self {
            SurfaceError::SurfaceNotFound { id } | SurfaceError::ContextUnavailable { id } => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_surface() {
        let err = SurfaceError::SurfaceNotFound {
            id: "myCanvas".into(),
        };
        assert_eq!(err.to_string(), "Canvas element #myCanvas not found");
        assert_eq!(err.surface_id(), "myCanvas");

        let err = SurfaceError::ContextUnavailable { id: "c".into() };
        assert_eq!(err.to_string(), "Failed to get 2d context for canvas #c");
    }
}
