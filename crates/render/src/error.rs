use std::path::PathBuf;

use thiserror::Error;

/// Failure inside the drawing collaborator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("drawing failed: {0}")]
    Drawing(String),

    #[error("PDF encoding failed: {0}")]
    Encode(String),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
