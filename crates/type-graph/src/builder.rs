//! Depth-bounded, cycle-safe expansion of domain types into nested fields.

use crate::domain::{domain_roots, is_domain_root};
use crate::edges::EdgeMap;
use crate::graph::{NestedField, TypeGraph};
use crate::resolve::base_type_name;
use crate::{GraphError, Result};
use graphql_introspect::SchemaIndex;
use std::collections::HashSet;

/// How many levels of fields to emit below a root.
///
/// The root's own field list is level 1. `Limited(0)` emits no fields at all;
/// `Limited(1)` emits the root's fields without expanding any of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Depth {
    Limited(usize),
    #[default]
    Unbounded,
}

impl Depth {
    /// Returns true if fields at `level` are within the budget.
    #[must_use]
    pub const fn allows(self, level: usize) -> bool {
        match self {
            Self::Limited(max) => level <= max,
            Self::Unbounded => true,
        }
    }
}

impl From<Option<usize>> for Depth {
    fn from(max: Option<usize>) -> Self {
        max.map_or(Self::Unbounded, Self::Limited)
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Limited(max) => write!(f, "{max}"),
            Self::Unbounded => f.write_str("unbounded"),
        }
    }
}

/// Builds nested field graphs over a shared schema index and edge map.
///
/// The builder only reads its inputs, so one builder (or many) can serve
/// any number of root traversals. Each traversal tracks the types on its
/// current expansion path; a type already on the path is emitted as a leaf
/// instead of being expanded again, while the same type may still be
/// expanded on a separate branch.
///
/// # Examples
///
/// ```
/// use graphql_introspect::{FieldDescriptor, SchemaIndex, TypeDescriptor, TypeRef};
/// use graphql_type_graph::{Depth, EdgeMap, GraphBuilder};
///
/// let index = SchemaIndex::from_types(vec![
///     TypeDescriptor::object("A", vec![FieldDescriptor::new("b", TypeRef::object("B"))]),
///     TypeDescriptor::object("B", vec![FieldDescriptor::new("a", TypeRef::object("A"))]),
/// ]);
/// let edges = EdgeMap::from_index(&index);
///
/// let fields = GraphBuilder::new(&index, &edges)
///     .with_depth(Depth::Unbounded)
///     .build("A");
///
/// assert_eq!(fields[0].type_name, "B");
/// assert_eq!(fields[0].children()[0].type_name, "A");
/// assert!(fields[0].children()[0].fields.is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GraphBuilder<'a> {
    index: &'a SchemaIndex,
    edges: &'a EdgeMap,
    depth: Depth,
    collapse_edges: bool,
}

impl<'a> GraphBuilder<'a> {
    /// Creates a builder with unbounded depth and edge collapsing enabled.
    #[must_use]
    pub const fn new(index: &'a SchemaIndex, edges: &'a EdgeMap) -> Self {
        Self {
            index,
            edges,
            depth: Depth::Unbounded,
            collapse_edges: true,
        }
    }

    #[must_use]
    pub const fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    /// Enables or disables replacing edge types with their node entity.
    #[must_use]
    pub const fn with_edge_collapse(mut self, collapse_edges: bool) -> Self {
        self.collapse_edges = collapse_edges;
        self
    }

    #[must_use]
    pub const fn depth(&self) -> Depth {
        self.depth
    }

    /// Builds the nested field list of `root`.
    ///
    /// Never fails: an unknown root or a root without fields yields an empty
    /// list, and unknown field targets become leaves.
    #[must_use]
    pub fn build(&self, root: &str) -> Vec<NestedField> {
        if !self.depth.allows(1) {
            return Vec::new();
        }
        let mut visiting = HashSet::from([root]);
        self.expand(root, 1, &mut visiting)
    }

    /// Builds the nested field list of a single named domain root.
    pub fn build_root(&self, root: &str) -> Result<Vec<NestedField>> {
        let descriptor = self
            .index
            .get(root)
            .ok_or_else(|| GraphError::UnknownRoot(root.to_string()))?;
        if !is_domain_root(descriptor) {
            return Err(GraphError::NotARoot {
                name: root.to_string(),
                kind: descriptor.kind,
            });
        }
        Ok(self.build(root))
    }

    /// Builds every domain root of the schema, in declaration order.
    #[must_use]
    #[tracing::instrument(skip(self), fields(depth = %self.depth, types = self.index.len()))]
    pub fn build_all(&self) -> TypeGraph {
        let graph: TypeGraph = domain_roots(self.index)
            .map(|descriptor| (descriptor.name.clone(), self.build(&descriptor.name)))
            .collect();
        tracing::debug!(roots = graph.len(), "Built type graph");
        graph
    }

    /// Emits the fields of `type_name`, which sit at `level`.
    ///
    /// `visiting` holds the types on the current path and is restored to its
    /// incoming state before returning.
    fn expand<'v>(
        &self,
        type_name: &str,
        level: usize,
        visiting: &mut HashSet<&'v str>,
    ) -> Vec<NestedField>
    where
        'a: 'v,
    {
        let fields = self.index.fields_of(type_name);
        let mut nested = Vec::with_capacity(fields.len());

        for field in fields {
            let base = base_type_name(&field.type_ref);
            let target = if self.collapse_edges {
                self.edges.resolve(base)
            } else {
                base
            };

            let children = if !self.depth.allows(level + 1) {
                None
            } else if visiting.contains(target) {
                tracing::trace!(field = %field.name, target_type = target, "Type already on path, not expanding");
                None
            } else if self.index.fields_of(target).is_empty() {
                if !self.index.contains(target) {
                    tracing::trace!(field = %field.name, target_type = target, "Unknown type reference");
                }
                None
            } else {
                visiting.insert(target);
                let children = self.expand(target, level + 1, visiting);
                visiting.remove(target);
                Some(children)
            };

            nested.push(NestedField {
                field: field.name.clone(),
                type_name: target.to_string(),
                fields: children,
            });
        }

        nested
    }
}

/// Builds the nested field list of `root` with edge collapsing.
#[must_use]
pub fn build(root: &str, index: &SchemaIndex, edges: &EdgeMap, depth: Depth) -> Vec<NestedField> {
    GraphBuilder::new(index, edges).with_depth(depth).build(root)
}

/// Builds the nested field lists of every domain root with edge collapsing.
#[must_use]
pub fn build_all(index: &SchemaIndex, edges: &EdgeMap, depth: Depth) -> TypeGraph {
    GraphBuilder::new(index, edges).with_depth(depth).build_all()
}

/// Lists the immediate fields of every domain root that has fields.
///
/// This is the builder at depth 1 without edge collapsing: each entry names
/// the field and the base type it resolves to.
#[must_use]
pub fn flat_fields(index: &SchemaIndex) -> TypeGraph {
    let edges = EdgeMap::default();
    let builder = GraphBuilder::new(index, &edges)
        .with_depth(Depth::Limited(1))
        .with_edge_collapse(false);

    domain_roots(index)
        .filter(|descriptor| !descriptor.fields().is_empty())
        .map(|descriptor| (descriptor.name.clone(), builder.build(&descriptor.name)))
        .collect()
}
