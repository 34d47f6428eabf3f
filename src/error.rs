use std::path::PathBuf;

/// Errors that can occur while filtering a text stream.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("unrecognized type: {mode}")]
    UnrecognizedMode { mode: String },

    #[error("{}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

