//! Relay edge type to node entity resolution.

use crate::domain::EDGE_SUFFIX;
use crate::resolve::{base_type_name, UNKNOWN_TYPE};
use graphql_introspect::SchemaIndex;
use std::collections::HashMap;

/// Name of the field through which an edge exposes its entity.
pub const NODE_FIELD: &str = "node";

/// Mapping from Relay edge type names to the entity type behind their `node`
/// field.
///
/// A type is present only if its name ends in `Edge` and it declares a field
/// named exactly `node` whose type resolves to a named type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeMap {
    nodes: HashMap<String, String>,
}

impl EdgeMap {
    /// Derives the edge map in a single pass over the schema.
    #[must_use]
    #[tracing::instrument(skip(index), fields(types = index.len()))]
    pub fn from_index(index: &SchemaIndex) -> Self {
        let mut nodes = HashMap::new();

        for descriptor in index {
            if !descriptor.name.ends_with(EDGE_SUFFIX) {
                continue;
            }
            let Some(node) = descriptor.field(NODE_FIELD) else {
                tracing::trace!(edge = %descriptor.name, "Edge type has no node field");
                continue;
            };
            let entity = base_type_name(&node.type_ref);
            if entity == UNKNOWN_TYPE {
                tracing::trace!(edge = %descriptor.name, node = %node.type_ref, "Unresolvable node type");
                continue;
            }
            nodes.insert(descriptor.name.clone(), entity.to_string());
        }

        tracing::debug!(edges = nodes.len(), "Resolved edge types");
        Self { nodes }
    }

    /// The entity behind an edge type, if `edge` is a known edge type.
    #[must_use]
    pub fn get(&self, edge: &str) -> Option<&str> {
        self.nodes.get(edge).map(String::as_str)
    }

    /// Collapses an edge type to its entity, returning any other name unchanged.
    #[must_use]
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes
            .iter()
            .map(|(edge, node)| (edge.as_str(), node.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphql_introspect::{FieldDescriptor, TypeDescriptor, TypeKind, TypeRef};

    fn field(name: &str, type_ref: TypeRef) -> FieldDescriptor {
        FieldDescriptor::new(name, type_ref)
    }

    #[test]
    fn test_edge_with_node_is_mapped() {
        let index = SchemaIndex::from_types(vec![
            TypeDescriptor::object(
                "ItemEdge",
                vec![
                    field("cursor", TypeRef::non_null(TypeRef::scalar("String"))),
                    field("node", TypeRef::object("Item")),
                ],
            ),
            TypeDescriptor::object("Item", vec![field("id", TypeRef::scalar("ID"))]),
        ]);

        let edges = EdgeMap::from_index(&index);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges.get("ItemEdge"), Some("Item"));
        assert_eq!(edges.resolve("ItemEdge"), "Item");
    }

    #[test]
    fn test_node_type_is_unwrapped() {
        let index = SchemaIndex::from_types(vec![TypeDescriptor::object(
            "UserEdge",
            vec![field(
                "node",
                TypeRef::non_null(TypeRef::named(TypeKind::Interface, "Actor")),
            )],
        )]);

        assert_eq!(EdgeMap::from_index(&index).get("UserEdge"), Some("Actor"));
    }

    #[test]
    fn test_edge_without_node_is_omitted() {
        let index = SchemaIndex::from_types(vec![
            TypeDescriptor::object("OrphanEdge", vec![field("cursor", TypeRef::scalar("String"))]),
            TypeDescriptor::object("BareEdge", vec![]),
            TypeDescriptor::new("ScalarEdge", TypeKind::Scalar),
        ]);

        let edges = EdgeMap::from_index(&index);
        assert!(edges.is_empty());
        assert_eq!(edges.resolve("OrphanEdge"), "OrphanEdge");
    }

    #[test]
    fn test_node_field_without_edge_suffix_is_ignored() {
        let index = SchemaIndex::from_types(vec![
            TypeDescriptor::object("Wrapper", vec![field("node", TypeRef::object("Item"))]),
            TypeDescriptor::object("ItemEdges", vec![field("node", TypeRef::object("Item"))]),
        ]);

        assert!(EdgeMap::from_index(&index).is_empty());
    }

    #[test]
    fn test_node_field_name_must_match_exactly() {
        let index = SchemaIndex::from_types(vec![TypeDescriptor::object(
            "ItemEdge",
            vec![
                field("nodes", TypeRef::object("Item")),
                field("Node", TypeRef::object("Item")),
            ],
        )]);

        assert!(EdgeMap::from_index(&index).is_empty());
    }

    #[test]
    fn test_unresolvable_node_is_omitted() {
        let index = SchemaIndex::from_types(vec![TypeDescriptor::object(
            "BrokenEdge",
            vec![field("node", TypeRef::default())],
        )]);

        assert_eq!(EdgeMap::from_index(&index).get("BrokenEdge"), None);
    }

    #[test]
    fn test_non_edge_names_resolve_to_themselves() {
        let edges = EdgeMap::default();
        assert_eq!(edges.resolve("User"), "User");
        assert_eq!(edges.iter().count(), 0);
    }
}
