use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported file type `{ext}` (no interpreter binding)")]
    UnsupportedFileType { ext: String },

    #[error("failed to spawn `{interpreter}`: {source}")]
    Spawn {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to poll child process: {0}")]
    Sample(#[source] std::io::Error),

    #[error("static analysis failed for `{path}`: {reason}")]
    Analysis { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
