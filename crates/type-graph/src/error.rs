use graphql_introspect::TypeKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Type '{0}' does not exist in the schema")]
    UnknownRoot(String),

    #[error("Type '{name}' ({kind:?}) is not a domain object or interface type")]
    NotARoot { name: String, kind: TypeKind },
}
