//! Exit codes for the schema-graph CLI.
//!
//! Distinct codes let scripts tell a bad schema file apart from a bad
//! config file or a mistyped root type name.

use graphql_config::ConfigError;
use graphql_introspect::IntrospectionError;
use graphql_type_graph::GraphError;

/// Exit codes used by the CLI on failure.
///
/// Success is the normal process exit with status 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Any failure not covered below (e.g. writing output)
    Failure = 1,
    /// Configuration error (invalid or unreadable config file)
    ConfigError = 2,
    /// Schema error (invalid JSON, missing `data.__schema.types`)
    SchemaError = 3,
    /// I/O error (schema file could not be read)
    IoError = 4,
    /// The requested root type is missing or not a domain type
    RootError = 5,
}

impl ExitCode {
    /// Picks the exit code for the first recognised error in the chain.
    pub fn for_error(error: &anyhow::Error) -> Self {
        for cause in error.chain() {
            if let Some(err) = cause.downcast_ref::<IntrospectionError>() {
                return match err {
                    IntrospectionError::Io { .. } => Self::IoError,
                    IntrospectionError::Parse(_) | IntrospectionError::MalformedSchema(_) => {
                        Self::SchemaError
                    }
                };
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return Self::ConfigError;
            }
            if cause.downcast_ref::<GraphError>().is_some() {
                return Self::RootError;
            }
        }
        Self::Failure
    }

    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failure => write!(f, "failure"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SchemaError => write!(f, "schema error"),
            Self::IoError => write!(f, "I/O error"),
            Self::RootError => write!(f, "root type error"),
        }
    }
}
