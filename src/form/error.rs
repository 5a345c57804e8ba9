use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("failed to read form file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse form: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("form has no fields")]
    NoFields,

    #[error("duplicate field id: {0}")]
    DuplicateFieldId(String),
}
