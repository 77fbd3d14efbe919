use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const SCHEMA: &str = r#"{"data": {"__schema": {"types": [
    {"kind": "OBJECT", "name": "Query", "fields": [
        {"name": "user", "type": {"kind": "OBJECT", "name": "User"}}
    ]},
    {"kind": "OBJECT", "name": "User", "fields": [
        {"name": "id", "type": {"kind": "NON_NULL", "ofType": {"kind": "SCALAR", "name": "ID"}}},
        {"name": "posts", "type": {"kind": "LIST", "ofType": {"kind": "OBJECT", "name": "PostEdge"}}}
    ]},
    {"kind": "OBJECT", "name": "PostEdge", "fields": [
        {"name": "node", "type": {"kind": "OBJECT", "name": "Post"}}
    ]},
    {"kind": "OBJECT", "name": "Post", "fields": [
        {"name": "title", "type": {"kind": "SCALAR", "name": "String"}},
        {"name": "author", "type": {"kind": "OBJECT", "name": "User"}}
    ]},
    {"kind": "SCALAR", "name": "ID"},
    {"kind": "SCALAR", "name": "String"}
]}}}"#;

fn schema_graph(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_schema-graph"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run schema-graph")
}

fn project(schema: &str) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("schema.json"), schema).unwrap();
    dir
}

#[test]
fn graph_at_depth_one() {
    let dir = project(SCHEMA);
    let output = schema_graph(dir.path(), &["graph", "--depth", "1"]);
    assert!(output.status.success(), "{output:?}");

    let graph: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        graph,
        json!({
            "Query": [{"field": "user", "type": "User"}],
            "User": [
                {"field": "id", "type": "ID"},
                {"field": "posts", "type": "Post"}
            ],
            "Post": [
                {"field": "title", "type": "String"},
                {"field": "author", "type": "User"}
            ]
        })
    );
}

#[test]
fn graph_single_root_to_file() {
    let dir = project(SCHEMA);
    let output = schema_graph(
        dir.path(),
        &["graph", "--root", "Post", "--depth", "2", "-o", "post.json", "-q"],
    );
    assert!(output.status.success(), "{output:?}");
    assert!(output.stderr.is_empty());

    let written = fs::read_to_string(dir.path().join("post.json")).unwrap();
    let graph: Value = serde_json::from_str(&written).unwrap();
    assert_eq!(
        graph["Post"][1],
        json!({
            "field": "author",
            "type": "User",
            "fields": [
                {"field": "id", "type": "ID"},
                {"field": "posts", "type": "Post"}
            ]
        })
    );
}

#[test]
fn depth_from_config_file() {
    let dir = project(SCHEMA);
    fs::write(dir.path().join(".schemagraphrc.toml"), "depth = 0").unwrap();

    let output = schema_graph(dir.path(), &["graph"]);
    assert!(output.status.success(), "{output:?}");

    let graph: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(graph, json!({"Query": [], "User": [], "Post": []}));
}

#[test]
fn stats_as_json() {
    let dir = project(SCHEMA);
    let output = schema_graph(dir.path(), &["stats", "--depth", "1", "--format", "json"]);
    assert!(output.status.success(), "{output:?}");

    let stats: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["schema"]["types"], 6);
    assert_eq!(stats["schema"]["edge_types"], 1);
    assert_eq!(stats["graph"]["roots"], 3);
    assert_eq!(stats["graph"]["max_depth"], 1);
}

#[test]
fn render_dot() {
    let dir = project(SCHEMA);
    let output = schema_graph(dir.path(), &["render", "--root", "Query", "--depth", "1"]);
    assert!(output.status.success(), "{output:?}");

    let dot = String::from_utf8(output.stdout).unwrap();
    assert!(dot.starts_with("digraph schema {"));
    assert!(dot.contains(r#""Query" -> "User" [label="user"];"#));
}

#[test]
fn missing_schema_file_exits_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let output = schema_graph(dir.path(), &["graph"]);

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("schema.json"));
}

#[test]
fn malformed_schema_exits_with_schema_error() {
    let dir = project(r#"{"data": {"__schema": {}}}"#);
    let output = schema_graph(dir.path(), &["graph"]);
    assert_eq!(output.status.code(), Some(3));

    let dir = project("not json");
    let output = schema_graph(dir.path(), &["fields"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn unknown_root_exits_with_root_error() {
    let dir = project(SCHEMA);
    let output = schema_graph(dir.path(), &["graph", "--root", "Nope"]);
    assert_eq!(output.status.code(), Some(5));

    let output = schema_graph(dir.path(), &["graph", "--root", "PostEdge"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn invalid_config_exits_with_config_error() {
    let dir = project(SCHEMA);
    fs::write(dir.path().join("schema-graph.json"), r#"{"depth": "deep"}"#).unwrap();

    let output = schema_graph(dir.path(), &["graph"]);
    assert_eq!(output.status.code(), Some(2));
}
