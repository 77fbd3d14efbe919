//! Output types of the graph builder.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One field of an expanded type, pointing at the type it resolves to.
///
/// `fields` is present only when the target type was expanded. It is absent
/// for scalars, unknown types, repeated types on the current path, and
/// fields at the depth limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NestedField {
    pub field: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<NestedField>>,
}

impl NestedField {
    /// A field whose target was not expanded.
    #[must_use]
    pub fn leaf(field: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            type_name: type_name.into(),
            fields: None,
        }
    }

    /// A field whose target was expanded into `fields`.
    #[must_use]
    pub fn branch(
        field: impl Into<String>,
        type_name: impl Into<String>,
        fields: Vec<NestedField>,
    ) -> Self {
        Self {
            field: field.into(),
            type_name: type_name.into(),
            fields: Some(fields),
        }
    }

    /// Child fields, empty when the target was not expanded.
    #[must_use]
    pub fn children(&self) -> &[NestedField] {
        self.fields.as_deref().unwrap_or_default()
    }
}

/// Nested field lists keyed by root type name, in schema declaration order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeGraph {
    roots: Vec<(String, Vec<NestedField>)>,
}

impl TypeGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a root. Roots are expected to be unique; callers insert each
    /// schema type at most once.
    pub fn insert(&mut self, root: impl Into<String>, fields: Vec<NestedField>) {
        self.roots.push((root.into(), fields));
    }

    #[must_use]
    pub fn get(&self, root: &str) -> Option<&[NestedField]> {
        self.roots
            .iter()
            .find(|(name, _)| name == root)
            .map(|(_, fields)| fields.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NestedField])> {
        self.roots
            .iter()
            .map(|(name, fields)| (name.as_str(), fields.as_slice()))
    }

    pub fn root_names(&self) -> impl Iterator<Item = &str> {
        self.roots.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl FromIterator<(String, Vec<NestedField>)> for TypeGraph {
    fn from_iter<I: IntoIterator<Item = (String, Vec<NestedField>)>>(iter: I) -> Self {
        Self {
            roots: iter.into_iter().collect(),
        }
    }
}

impl Serialize for TypeGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.roots.len()))?;
        for (name, fields) in &self.roots {
            map.serialize_entry(name, fields)?;
        }
        map.end()
    }
}
