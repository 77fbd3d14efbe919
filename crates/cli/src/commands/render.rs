//! `render` command: node/edge view of the graph for external viewers.

use super::common::{build_graph, write_output, CommandContext, DepthArgs, SchemaArgs};
use crate::OutputOptions;
use anyhow::{Context, Result};
use graphql_type_graph::{EdgeMap, RenderGraph};
use std::path::Path;

/// Render output format.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum RenderFormat {
    /// Graphviz DOT
    #[default]
    Dot,
    /// JSON object with `nodes` and `edges`
    Json,
}

#[tracing::instrument(skip_all, fields(root = root, format = ?format))]
pub fn run(
    config_path: Option<&Path>,
    schema: &SchemaArgs,
    depth: &DepthArgs,
    root: Option<&str>,
    format: RenderFormat,
    output: Option<&Path>,
    opts: OutputOptions,
) -> Result<()> {
    let ctx = CommandContext::load(config_path, schema)?;
    let depth = ctx.depth(depth);
    let index = ctx.load_index()?;

    let edges = EdgeMap::from_index(&index);
    let graph = build_graph(&index, &edges, depth, root)?;
    let render = RenderGraph::from_graph(&graph);

    let content = match format {
        RenderFormat::Dot => render.to_dot(),
        RenderFormat::Json => serde_json::to_string_pretty(&render)
            .context("Failed to serialize rendered graph")?,
    };
    write_output(&content, output, "Rendered graph", opts)
}
