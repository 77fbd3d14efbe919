//! Unwrapping `LIST` / `NON_NULL` layers down to a named type.

use graphql_introspect::TypeRef;

/// Name reported for a type reference with no reachable named type.
///
/// Angle brackets are not valid in GraphQL names, so this can never collide
/// with a type declared by the schema.
pub const UNKNOWN_TYPE: &str = "<unknown>";

/// Returns the name of the named type at the bottom of a type reference.
///
/// Follows `ofType` through any number of `LIST` and `NON_NULL` wrappers. A
/// wrapper without `ofType`, or a terminal reference without a name, yields
/// [`UNKNOWN_TYPE`] rather than an error.
///
/// # Examples
///
/// ```
/// # use graphql_introspect::TypeRef;
/// # use graphql_type_graph::base_type_name;
/// let type_ref = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::object("User"))));
/// assert_eq!(base_type_name(&type_ref), "User");
/// ```
#[must_use]
pub fn base_type_name(type_ref: &TypeRef) -> &str {
    let mut current = type_ref;
    while current.kind.is_wrapper() {
        match current.of_type.as_deref() {
            Some(inner) => current = inner,
            None => return UNKNOWN_TYPE,
        }
    }
    current
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_TYPE)
}
