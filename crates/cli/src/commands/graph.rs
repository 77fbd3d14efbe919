//! `graph` command: nested field graph as JSON.

use super::common::{build_graph, write_output, CommandContext, DepthArgs, SchemaArgs};
use crate::OutputOptions;
use anyhow::{Context, Result};
use graphql_type_graph::EdgeMap;
use std::path::Path;

#[tracing::instrument(skip_all, fields(root = root))]
pub fn run(
    config_path: Option<&Path>,
    schema: &SchemaArgs,
    depth: &DepthArgs,
    root: Option<&str>,
    output: Option<&Path>,
    opts: OutputOptions,
) -> Result<()> {
    let ctx = CommandContext::load(config_path, schema)?;
    let depth = ctx.depth(depth);
    let index = ctx.load_index()?;

    let edges = EdgeMap::from_index(&index);
    let graph = build_graph(&index, &edges, depth, root)?;
    tracing::info!(roots = graph.len(), %depth, "Graph built");

    let json = serde_json::to_string_pretty(&graph).context("Failed to serialize type graph")?;
    write_output(&json, output, "Graph", opts)
}
