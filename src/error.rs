use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("discovery failed: {0}")]
    Discovery(String),

    #[error("desktop entry error: {0}")]
    DesktopEntry(String),

    #[error("icon generation failed: {0}")]
    IconGeneration(String),

    #[error("icon cache error: {0}")]
    IconCache(String),

    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("invalid application path: {}", .0.display())]
    InvalidPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, IndexError>;
