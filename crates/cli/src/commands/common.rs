//! Shared plumbing for commands: schema/depth resolution, loading and output.

use crate::OutputOptions;
use anyhow::{Context, Result};
use colored::Colorize;
use graphql_config::{find_config, load_config, GraphConfig};
use graphql_introspect::SchemaIndex;
use graphql_type_graph::{Depth, EdgeMap, GraphBuilder, TypeGraph};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Schema file used when neither the command line nor a config names one.
pub const DEFAULT_SCHEMA: &str = "schema.json";

/// Expansion depth used when neither the command line nor a config sets one.
pub const DEFAULT_DEPTH: usize = 3;

/// Schema file argument shared by all commands.
#[derive(Debug, Clone, clap::Args)]
pub struct SchemaArgs {
    /// Introspection JSON file [default: schema.json, or `schema` from the config file]
    #[arg(value_name = "SCHEMA")]
    pub schema: Option<PathBuf>,
}

/// Depth options shared by the graph-building commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DepthArgs {
    /// Number of field levels to expand below each root; 0 emits no fields [default: 3]
    #[arg(short, long, value_name = "N", conflicts_with = "unbounded")]
    pub depth: Option<usize>,

    /// Expand without a depth limit (cycles are still cut per path)
    #[arg(long)]
    pub unbounded: bool,
}

/// Config file and schema location for one command invocation.
#[derive(Debug)]
pub struct CommandContext {
    config: Option<(PathBuf, GraphConfig)>,
    schema_path: PathBuf,
}

impl CommandContext {
    /// Loads the config (explicit path, or discovered from the current
    /// directory) and resolves the schema path.
    pub fn load(config_path: Option<&Path>, schema: &SchemaArgs) -> Result<Self> {
        let config_path = match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let current_dir = std::env::current_dir()?;
                find_config(&current_dir).context("Failed to search for config")?
            }
        };

        let config = config_path
            .map(|path| {
                load_config(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))
                    .map(|config| (path, config))
            })
            .transpose()?;

        let schema_path = resolve_schema_path(
            schema.schema.clone(),
            config.as_ref().map(|(path, config)| (path.as_path(), config)),
        );
        tracing::debug!(schema = %schema_path.display(), "Resolved schema path");

        Ok(Self {
            config,
            schema_path,
        })
    }

    /// Depth from the command line, falling back to the config file.
    pub fn depth(&self, args: &DepthArgs) -> Depth {
        resolve_depth(args, self.config.as_ref().map(|(_, config)| config))
    }

    /// Reads and indexes the schema file.
    pub fn load_index(&self) -> Result<SchemaIndex> {
        let index = SchemaIndex::load(&self.schema_path).with_context(|| {
            format!("Failed to load schema from {}", self.schema_path.display())
        })?;
        tracing::info!(types = index.len(), "Schema loaded");
        Ok(index)
    }
}

/// Picks the schema path: command line, then config file, then the default.
pub fn resolve_schema_path(
    cli_schema: Option<PathBuf>,
    config: Option<(&Path, &GraphConfig)>,
) -> PathBuf {
    cli_schema
        .or_else(|| config.and_then(|(path, config)| config.schema_path(path)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA))
}

/// Picks the depth: command line, then config file, then the default.
pub fn resolve_depth(args: &DepthArgs, config: Option<&GraphConfig>) -> Depth {
    if args.unbounded {
        return Depth::Unbounded;
    }
    if let Some(depth) = args.depth {
        return Depth::Limited(depth);
    }
    match config {
        Some(config) if config.unbounded => Depth::Unbounded,
        Some(GraphConfig {
            depth: Some(depth), ..
        }) => Depth::Limited(*depth),
        _ => Depth::Limited(DEFAULT_DEPTH),
    }
}

/// Builds the graph of every domain root, or of a single named root.
pub fn build_graph(
    index: &SchemaIndex,
    edges: &EdgeMap,
    depth: Depth,
    root: Option<&str>,
) -> Result<TypeGraph> {
    let builder = GraphBuilder::new(index, edges).with_depth(depth);

    match root {
        Some(root) => {
            let fields = builder
                .build_root(root)
                .with_context(|| format!("Cannot build graph for '{root}'"))?;
            let mut graph = TypeGraph::new();
            graph.insert(root, fields);
            Ok(graph)
        }
        None => Ok(builder.build_all()),
    }
}

/// Writes command output to a file, or to stdout with a trailing newline.
pub fn write_output(
    content: &str,
    output: Option<&Path>,
    what: &str,
    opts: OutputOptions,
) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        if opts.show_info {
            eprintln!(
                "{} {what} written to {}",
                "✓".green(),
                path.display().to_string().cyan()
            );
        }
    } else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(content.as_bytes())
            .context("Failed to write to stdout")?;
        if !content.ends_with('\n') {
            handle
                .write_all(b"\n")
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
