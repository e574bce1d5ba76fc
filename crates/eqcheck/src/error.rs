use std::path::PathBuf;

use thiserror::Error;

pub type EqcheckResult<T> = Result<T, EqcheckError>;

#[derive(Debug, Error)]
pub enum EqcheckError {
    /// A record could not be encoded or decoded.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the report failed.
    #[error("write: {0}")]
    Write(#[from] std::io::Error),
}
