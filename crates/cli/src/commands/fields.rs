//! `fields` command: immediate fields of every domain type as JSON.

use super::common::{write_output, CommandContext, SchemaArgs};
use crate::OutputOptions;
use anyhow::{Context, Result};
use graphql_type_graph::flat_fields;
use std::path::Path;

pub fn run(
    config_path: Option<&Path>,
    schema: &SchemaArgs,
    output: Option<&Path>,
    opts: OutputOptions,
) -> Result<()> {
    let ctx = CommandContext::load(config_path, schema)?;
    let index = ctx.load_index()?;

    let listing = flat_fields(&index);
    let json =
        serde_json::to_string_pretty(&listing).context("Failed to serialize field listing")?;
    write_output(&json, output, "Field listing", opts)
}
