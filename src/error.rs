use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Document {index} unavailable ({}): {source}", .path.display())]
    DocumentUnavailable {
        index: usize,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
