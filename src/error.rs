use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ShowcaseError>;

#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("could not encode preferences: {0}")]
    Preferences(#[from] serde_json::Error),

    #[error("could not load image {}: {message}", .path.display())]
    Image { path: PathBuf, message: String },

    #[error("no image files found in directory: {}", .0.display())]
    NoImages(PathBuf),
}

impl ShowcaseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
