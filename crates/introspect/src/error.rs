use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IntrospectionError>;

#[derive(Debug, Error)]
pub enum IntrospectionError {
    #[error("Failed to read introspection file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse introspection document: {0}")]
    Parse(String),

    #[error("Malformed introspection schema: {0}")]
    MalformedSchema(String),
}
