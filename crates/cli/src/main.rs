mod commands;
mod exit_code;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::common::{DepthArgs, SchemaArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schema-graph")]
#[command(
    about = "Explore what each type of a GraphQL schema can reach, from an introspection result",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Path to a schema-graph config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Force colored output even when not a TTY
    #[arg(long, global = true, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, global = true, conflicts_with = "color")]
    no_color: bool,

    /// Suppress all output except results and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output verbosity options
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Whether to show informational output (success messages)
    pub show_info: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the nested field graph of every domain type as JSON
    ///
    /// Fields are expanded recursively up to --depth levels. Relay edge types
    /// are replaced by the entity behind their `node` field, and a type that
    /// is already being expanded on the current path is not expanded again.
    Graph {
        #[command(flatten)]
        schema: SchemaArgs,

        #[command(flatten)]
        depth: DepthArgs,

        /// Only build the graph of this type
        #[arg(long, value_name = "TYPE")]
        root: Option<String>,

        /// Output file path (writes to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the immediate fields of every domain type as JSON
    Fields {
        #[command(flatten)]
        schema: SchemaArgs,

        /// Output file path (writes to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display statistics about the field graph
    Stats {
        #[command(flatten)]
        schema: SchemaArgs,

        #[command(flatten)]
        depth: DepthArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: commands::stats::StatsFormat,
    },

    /// Convert the field graph into nodes and labeled edges for graph viewers
    Render {
        #[command(flatten)]
        schema: SchemaArgs,

        #[command(flatten)]
        depth: DepthArgs,

        /// Only render the graph of this type
        #[arg(long, value_name = "TYPE")]
        root: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "dot")]
        format: commands::render::RenderFormat,

        /// Output file path (writes to stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    init_tracing();
    configure_colors(cli.color, cli.no_color);

    let output_opts = OutputOptions {
        show_info: !cli.quiet,
    };
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Graph {
            schema,
            depth,
            root,
            output,
        } => commands::graph::run(
            config,
            &schema,
            &depth,
            root.as_deref(),
            output.as_deref(),
            output_opts,
        ),
        Commands::Fields { schema, output } => {
            commands::fields::run(config, &schema, output.as_deref(), output_opts)
        }
        Commands::Stats {
            schema,
            depth,
            format,
        } => commands::stats::run(config, &schema, &depth, format),
        Commands::Render {
            schema,
            depth,
            root,
            format,
            output,
        } => commands::render::run(
            config,
            &schema,
            &depth,
            root.as_deref(),
            format,
            output.as_deref(),
            output_opts,
        ),
    };

    if let Err(err) = result {
        let code = exit_code::ExitCode::for_error(&err);
        tracing::debug!(%code, "Command failed");
        eprintln!("{} {err:#}", "error:".red().bold());
        code.exit();
    }
}

/// Initialize tracing on stderr, filtered by `RUST_LOG` (off by default)
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Configure colored output based on flags and environment variables.
///
/// Flags win over the environment. Without flags, `NO_COLOR` (any value)
/// disables colors, `CLICOLOR_FORCE` (non-empty, non-zero) forces them and
/// `CLICOLOR=0` disables them. Otherwise the `colored` crate decides based on
/// TTY detection.
///
/// See: <https://no-color.org/> and <https://bixense.com/clicolors/>
fn configure_colors(force_color: bool, no_color: bool) {
    use colored::control;

    let env_override = || {
        if std::env::var_os("NO_COLOR").is_some() {
            return Some(false);
        }
        if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
            return (!val.is_empty() && val != "0").then_some(true);
        }
        (std::env::var("CLICOLOR").ok().as_deref() == Some("0")).then_some(false)
    };

    let choice = if force_color {
        Some(true)
    } else if no_color {
        Some(false)
    } else {
        env_override()
    };

    if let Some(enabled) = choice {
        control::set_override(enabled);
    }
}
