//! Classification of schema types worth graphing.

use graphql_introspect::{SchemaIndex, TypeDescriptor};

/// Prefix reserved for introspection meta-types (`__Type`, `__Field`, ...).
pub const RESERVED_PREFIX: &str = "__";

/// Suffix of Relay pagination container types.
pub const CONNECTION_SUFFIX: &str = "Connection";

/// Suffix of Relay pagination edge types.
pub const EDGE_SUFFIX: &str = "Edge";

/// Suffix of mutation result wrapper types.
pub const PAYLOAD_SUFFIX: &str = "Payload";

/// Name suffixes marking generated wrapper types.
pub const WRAPPER_SUFFIXES: &[&str] = &[CONNECTION_SUFFIX, EDGE_SUFFIX, PAYLOAD_SUFFIX];

/// Returns true if `name` is neither an introspection meta-type nor a
/// generated wrapper type.
#[must_use]
pub fn is_domain_type_name(name: &str) -> bool {
    !name.starts_with(RESERVED_PREFIX)
        && !WRAPPER_SUFFIXES
            .iter()
            .any(|suffix| name.ends_with(suffix))
}

/// Returns true if the type can be a root of the graph: an `OBJECT` or
/// `INTERFACE` whose name passes [`is_domain_type_name`].
///
/// Only the name and kind are consulted, never the fields.
#[must_use]
pub fn is_domain_root(descriptor: &TypeDescriptor) -> bool {
    descriptor.kind.has_fields() && is_domain_type_name(&descriptor.name)
}

/// Domain roots of the schema in declaration order.
pub fn domain_roots(index: &SchemaIndex) -> impl Iterator<Item = &TypeDescriptor> {
    index.iter().filter(|descriptor| is_domain_root(descriptor))
}
