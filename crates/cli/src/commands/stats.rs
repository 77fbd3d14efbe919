use super::common::{build_graph, CommandContext, DepthArgs, SchemaArgs};
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_type_graph::{Depth, EdgeMap, GraphStats};
use std::path::Path;

/// Statistics output format.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum StatsFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON output for tooling
    Json,
}

/// Schema-level counts shown next to the graph statistics
#[derive(Debug, Default, serde::Serialize)]
struct SchemaCounts {
    types: usize,
    edge_types: usize,
}

#[derive(Debug, serde::Serialize)]
struct StatsReport {
    schema: SchemaCounts,
    depth: String,
    graph: GraphStats,
}

pub fn run(
    config_path: Option<&Path>,
    schema: &SchemaArgs,
    depth: &DepthArgs,
    format: StatsFormat,
) -> Result<()> {
    let ctx = CommandContext::load(config_path, schema)?;
    let depth = ctx.depth(depth);
    let index = ctx.load_index()?;

    let edges = EdgeMap::from_index(&index);
    let graph = build_graph(&index, &edges, depth, None)?;
    let report = StatsReport {
        schema: SchemaCounts {
            types: index.len(),
            edge_types: edges.len(),
        },
        depth: depth.to_string(),
        graph: GraphStats::collect(&graph),
    };

    match format {
        StatsFormat::Human => print_human_stats(&report, depth),
        StatsFormat::Json => {
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize statistics")?;
            println!("{json}");
        }
    }

    Ok(())
}

fn print_human_stats(report: &StatsReport, depth: Depth) {
    println!();
    println!("{}", "Schema Graph Statistics".bold());
    println!("{}", "=======================".dimmed());

    println!();
    println!("{}:", "Schema".cyan().bold());
    println!("  Types: {}", report.schema.types.to_string().bold());
    println!("  Edge types: {}", report.schema.edge_types.to_string().bold());

    println!();
    println!("{} (depth {}):", "Graph".cyan().bold(), depth);
    println!("  Root types: {}", report.graph.roots.to_string().bold());
    println!(
        "  Unique field paths: {}",
        report.graph.unique_field_paths.to_string().bold()
    );
    println!(
        "  Unique reachable types: {}",
        report.graph.unique_types.to_string().bold()
    );
    println!(
        "  Deepest level: {}",
        report.graph.max_depth.to_string().bold()
    );
    println!();
}
