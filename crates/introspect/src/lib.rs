//! GraphQL introspection document decoding and indexing.
//!
//! This crate turns the JSON document a GraphQL server returns for an
//! introspection query into a [`SchemaIndex`]: a read-only, name-keyed view of
//! the schema's types that downstream analyses can share by reference.
//!
//! # Examples
//!
//! ## Index a document held in memory
//!
//! ```
//! use graphql_introspect::SchemaIndex;
//!
//! let index = SchemaIndex::parse(
//!     r#"{"data": {"__schema": {"types": [
//!         {"kind": "OBJECT", "name": "User", "fields": [
//!             {"name": "id", "type": {"kind": "NON_NULL", "ofType": {"kind": "SCALAR", "name": "ID"}}}
//!         ]}
//!     ]}}}"#,
//! )?;
//!
//! assert_eq!(index.fields_of("User")[0].type_ref.to_type_string(), "ID!");
//! # Ok::<(), graphql_introspect::IntrospectionError>(())
//! ```
//!
//! ## Load from a file
//!
//! ```no_run
//! use graphql_introspect::SchemaIndex;
//! use std::path::Path;
//!
//! let index = SchemaIndex::load(Path::new("schema.json"))?;
//! println!("{} types", index.len());
//! # Ok::<(), graphql_introspect::IntrospectionError>(())
//! ```

mod error;
mod index;
mod load;
mod types;

pub use error::{IntrospectionError, Result};
pub use index::SchemaIndex;
pub use load::{introspection_from_value, load_introspection, parse_introspection};
pub use types::*;
