use std::path::PathBuf;

/// Component generation error.
#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
