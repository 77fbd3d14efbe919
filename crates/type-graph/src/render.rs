//! Conversion of a type graph into nodes and labeled edges for display.

use crate::graph::{NestedField, TypeGraph};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt::{self, Write};

/// A directed edge from a type to the type one of its fields resolves to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RenderEdge {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// A flat node/edge view of a [`TypeGraph`], suitable for external graph
/// renderers.
///
/// Nodes and edges are deduplicated and sorted. `Display` writes Graphviz DOT.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderGraph {
    pub nodes: BTreeSet<String>,
    pub edges: BTreeSet<RenderEdge>,
}

impl RenderGraph {
    #[must_use]
    #[tracing::instrument(skip(graph), fields(roots = graph.len()))]
    pub fn from_graph(graph: &TypeGraph) -> Self {
        let mut render = Self::default();
        for (root, fields) in graph.iter() {
            render.nodes.insert(root.to_string());
            render.add_fields(root, fields);
        }
        tracing::debug!(
            nodes = render.nodes.len(),
            edges = render.edges.len(),
            "Converted graph for rendering"
        );
        render
    }

    fn add_fields(&mut self, parent: &str, fields: &[NestedField]) {
        for field in fields {
            self.nodes.insert(field.type_name.clone());
            self.edges.insert(RenderEdge {
                from: parent.to_string(),
                to: field.type_name.clone(),
                label: field.field.clone(),
            });
            self.add_fields(&field.type_name, field.children());
        }
    }

    /// Renders the graph in Graphviz DOT format.
    #[must_use]
    pub fn to_dot(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RenderGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("digraph schema {\n")?;
        for node in &self.nodes {
            writeln!(f, "  \"{}\";", escape(node))?;
        }
        for edge in &self.edges {
            writeln!(
                f,
                "  \"{}\" -> \"{}\" [label=\"{}\"];",
                escape(&edge.from),
                escape(&edge.to),
                escape(&edge.label)
            )?;
        }
        f.write_char('}')
    }
}

fn escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TypeGraph {
        let mut graph = TypeGraph::new();
        graph.insert(
            "User",
            vec![
                NestedField::leaf("id", "ID"),
                NestedField::branch("posts", "Post", vec![NestedField::leaf("author", "User")]),
            ],
        );
        graph.insert("Post", vec![NestedField::leaf("author", "User")]);
        graph
    }

    #[test]
    fn test_nodes_and_edges_deduplicated() {
        let render = RenderGraph::from_graph(&sample());

        assert_eq!(
            render.nodes.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["ID", "Post", "User"]
        );
        // Post -author-> User appears twice in the graph but once here.
        assert_eq!(render.edges.len(), 3);
        assert!(render.edges.contains(&RenderEdge {
            from: "User".to_string(),
            to: "Post".to_string(),
            label: "posts".to_string(),
        }));
    }

    #[test]
    fn test_dot_output() {
        insta::assert_snapshot!(RenderGraph::from_graph(&sample()).to_dot(), @r#"
        digraph schema {
          "ID";
          "Post";
          "User";
          "Post" -> "User" [label="author"];
          "User" -> "ID" [label="id"];
          "User" -> "Post" [label="posts"];
        }
        "#);
    }

    #[test]
    fn test_dot_escapes_quotes() {
        let mut graph = TypeGraph::new();
        graph.insert("A", vec![NestedField::leaf("q\"uote", "B")]);
        let dot = RenderGraph::from_graph(&graph).to_dot();
        assert!(dot.contains(r#"[label="q\"uote"]"#));
    }

    #[test]
    fn test_json_shape() {
        let mut graph = TypeGraph::new();
        graph.insert("A", vec![NestedField::leaf("b", "B")]);

        let json = serde_json::to_value(RenderGraph::from_graph(&graph)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nodes": ["A", "B"],
                "edges": [{"from": "A", "to": "B", "label": "b"}]
            })
        );
    }
}
