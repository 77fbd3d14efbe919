//! Summary statistics over a built type graph.

use crate::graph::{NestedField, TypeGraph};
use serde::Serialize;
use std::collections::HashSet;

/// Counts gathered by walking a [`TypeGraph`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    /// Number of root types.
    pub roots: usize,
    /// Distinct dotted paths (`Root.field.child`) across all roots.
    pub unique_field_paths: usize,
    /// Distinct type names among the roots and every field target.
    pub unique_types: usize,
    /// Deepest field level reached; 0 when no root has fields.
    pub max_depth: usize,
}

impl GraphStats {
    #[must_use]
    pub fn collect(graph: &TypeGraph) -> Self {
        let mut walker = Walker::default();

        for (root, fields) in graph.iter() {
            walker.types.insert(root);
            walker.walk(root, fields, 1);
        }

        Self {
            roots: graph.len(),
            unique_field_paths: walker.paths.len(),
            unique_types: walker.types.len(),
            max_depth: walker.max_depth,
        }
    }
}

#[derive(Default)]
struct Walker<'g> {
    paths: HashSet<String>,
    types: HashSet<&'g str>,
    max_depth: usize,
}

impl<'g> Walker<'g> {
    fn walk(&mut self, prefix: &str, fields: &'g [NestedField], level: usize) {
        for field in fields {
            let path = format!("{prefix}.{}", field.field);
            self.types.insert(&field.type_name);
            self.max_depth = self.max_depth.max(level);
            self.walk(&path, field.children(), level + 1);
            self.paths.insert(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_graph() {
        assert_eq!(GraphStats::collect(&TypeGraph::new()), GraphStats::default());
    }

    #[test]
    fn test_counts_paths_types_and_depth() {
        let mut graph = TypeGraph::new();
        graph.insert(
            "User",
            vec![
                NestedField::leaf("id", "ID"),
                NestedField::branch(
                    "posts",
                    "Post",
                    vec![
                        NestedField::leaf("id", "ID"),
                        NestedField::leaf("author", "User"),
                    ],
                ),
            ],
        );
        graph.insert("Post", vec![NestedField::leaf("id", "ID")]);
        graph.insert("Empty", vec![]);

        let stats = GraphStats::collect(&graph);
        assert_eq!(stats.roots, 3);
        // User.id, User.posts, User.posts.id, User.posts.author, Post.id
        assert_eq!(stats.unique_field_paths, 5);
        // User, Post, Empty, ID
        assert_eq!(stats.unique_types, 4);
        assert_eq!(stats.max_depth, 2);
    }

    #[test]
    fn test_duplicate_paths_counted_once() {
        let graph: TypeGraph = vec![(
            "A".to_string(),
            vec![NestedField::leaf("x", "X"), NestedField::leaf("x", "Y")],
        )]
        .into_iter()
        .collect();

        let stats = GraphStats::collect(&graph);
        assert_eq!(stats.unique_field_paths, 1);
        assert_eq!(stats.unique_types, 3);
    }
}
