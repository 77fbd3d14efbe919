//! Decoding introspection documents from JSON text and files.

use crate::{IntrospectionError, IntrospectionResponse, Result, TypeDescriptor};
use serde_json::Value;
use std::path::Path;

/// JSON pointer to the type list inside an introspection response.
const TYPES_POINTER: &str = "/data/__schema/types";

/// Parses an introspection response from JSON text.
///
/// The document must contain a `data.__schema.types` array. Anything else in
/// the document is ignored.
///
/// # Examples
///
/// ```
/// # use graphql_introspect::parse_introspection;
/// let response = parse_introspection(
///     r#"{"data": {"__schema": {"types": [{"kind": "OBJECT", "name": "Query", "fields": []}]}}}"#,
/// )?;
/// assert_eq!(response.types().len(), 1);
/// # Ok::<(), graphql_introspect::IntrospectionError>(())
/// ```
#[tracing::instrument(skip(input), fields(size = input.len()))]
pub fn parse_introspection(input: &str) -> Result<IntrospectionResponse> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| IntrospectionError::Parse(e.to_string()))?;
    introspection_from_value(value)
}

/// Extracts the type list from an already decoded JSON document.
pub fn introspection_from_value(mut value: Value) -> Result<IntrospectionResponse> {
    let types = value
        .pointer_mut(TYPES_POINTER)
        .map(Value::take)
        .ok_or_else(|| {
            tracing::error!("Document has no type list");
            IntrospectionError::MalformedSchema(
                "expected a type list at `data.__schema.types`".to_string(),
            )
        })?;

    if !types.is_array() {
        return Err(IntrospectionError::MalformedSchema(format!(
            "`data.__schema.types` must be an array, found {}",
            json_kind(&types)
        )));
    }

    let types: Vec<TypeDescriptor> = serde_json::from_value(types).map_err(|e| {
        tracing::error!(error = %e, "Failed to decode type list");
        IntrospectionError::Parse(e.to_string())
    })?;

    tracing::debug!(types = types.len(), "Decoded introspection types");
    Ok(IntrospectionResponse::from_types(types))
}

/// Reads and parses an introspection response from a JSON file.
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_introspection(path: &Path) -> Result<IntrospectionResponse> {
    tracing::debug!("Reading introspection file");
    let contents = std::fs::read_to_string(path).map_err(|source| IntrospectionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_introspection(&contents)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
