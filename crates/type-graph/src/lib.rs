//! Navigable field graph of a GraphQL schema's domain types.
//!
//! Given a [`SchemaIndex`](graphql_introspect::SchemaIndex), this crate
//! answers "what can I reach from type X": for every domain object and
//! interface type it lists the fields and the types they resolve to, expanded
//! recursively up to a [`Depth`]. `LIST` / `NON_NULL` wrappers are unwrapped,
//! and Relay edge types are collapsed into the entity behind their `node`
//! field, so `items → ItemEdge → node → Item` appears as `items → Item`.
//!
//! Expansion is cycle safe: a type already being expanded on the current path
//! is emitted as a leaf, while it can still be expanded again on a separate
//! branch.
//!
//! # Examples
//!
//! ```
//! use graphql_introspect::SchemaIndex;
//! use graphql_type_graph::{build_all, Depth, EdgeMap};
//!
//! let index = SchemaIndex::parse(r#"{"data": {"__schema": {"types": [
//!     {"kind": "OBJECT", "name": "Project", "fields": [
//!         {"name": "issues", "type": {"kind": "LIST", "ofType": {"kind": "OBJECT", "name": "IssueEdge"}}}
//!     ]},
//!     {"kind": "OBJECT", "name": "IssueEdge", "fields": [
//!         {"name": "node", "type": {"kind": "OBJECT", "name": "Issue"}}
//!     ]},
//!     {"kind": "OBJECT", "name": "Issue", "fields": [
//!         {"name": "title", "type": {"kind": "SCALAR", "name": "String"}}
//!     ]}
//! ]}}}"#)?;
//!
//! let edges = EdgeMap::from_index(&index);
//! let graph = build_all(&index, &edges, Depth::Limited(2));
//!
//! let project = graph.get("Project").unwrap();
//! assert_eq!(project[0].type_name, "Issue");
//! assert_eq!(project[0].children()[0].field, "title");
//! # Ok::<(), graphql_introspect::IntrospectionError>(())
//! ```

mod builder;
mod domain;
mod edges;
mod error;
mod graph;
mod render;
mod resolve;
mod stats;

pub use builder::{build, build_all, flat_fields, Depth, GraphBuilder};
pub use domain::{
    domain_roots, is_domain_root, is_domain_type_name, CONNECTION_SUFFIX, EDGE_SUFFIX,
    PAYLOAD_SUFFIX, RESERVED_PREFIX, WRAPPER_SUFFIXES,
};
pub use edges::{EdgeMap, NODE_FIELD};
pub use error::{GraphError, Result};
pub use graph::{NestedField, TypeGraph};
pub use render::{RenderEdge, RenderGraph};
pub use resolve::{base_type_name, UNKNOWN_TYPE};
pub use stats::GraphStats;
