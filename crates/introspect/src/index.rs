//! Name-keyed index over the types of an introspected schema.

use crate::{
    load_introspection, parse_introspection, FieldDescriptor, IntrospectionResponse, Result,
    TypeDescriptor,
};
use std::collections::HashMap;
use std::path::Path;

/// Read-only mapping from type name to its descriptor.
///
/// Built once in a single pass over the document's type list and never
/// mutated afterwards, so it can be shared by reference between any number of
/// readers. Iteration follows the declaration order of the document.
///
/// Entries without a name are skipped. If a name is declared twice the later
/// descriptor wins but keeps the position of the first declaration.
#[derive(Debug, Clone, Default)]
pub struct SchemaIndex {
    types: Vec<TypeDescriptor>,
    positions: HashMap<String, usize>,
}

impl SchemaIndex {
    /// Builds the index from a type list.
    #[must_use]
    pub fn from_types<I>(types: I) -> Self
    where
        I: IntoIterator<Item = TypeDescriptor>,
    {
        let mut index = Self::default();
        let mut skipped = 0usize;

        for descriptor in types {
            if descriptor.name.is_empty() {
                skipped += 1;
                continue;
            }
            if let Some(&position) = index.positions.get(&descriptor.name) {
                tracing::debug!(name = %descriptor.name, "Duplicate type name, replacing");
                index.types[position] = descriptor;
            } else {
                index
                    .positions
                    .insert(descriptor.name.clone(), index.types.len());
                index.types.push(descriptor);
            }
        }

        tracing::debug!(types = index.types.len(), skipped, "Built schema index");
        index
    }

    /// Builds the index from a decoded introspection response.
    #[must_use]
    pub fn from_response(response: IntrospectionResponse) -> Self {
        Self::from_types(response.data.schema.types)
    }

    /// Parses introspection JSON text and indexes its types.
    pub fn parse(input: &str) -> Result<Self> {
        parse_introspection(input).map(Self::from_response)
    }

    /// Reads an introspection JSON file and indexes its types.
    pub fn load(path: &Path) -> Result<Self> {
        load_introspection(path).map(Self::from_response)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.positions.get(name).map(|&position| &self.types[position])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Fields declared by `name`; empty when the type is unknown or has none.
    #[must_use]
    pub fn fields_of(&self, name: &str) -> &[FieldDescriptor] {
        self.get(name).map(TypeDescriptor::fields).unwrap_or_default()
    }

    /// All indexed types in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, TypeDescriptor> {
        self.types.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeDescriptor> for SchemaIndex {
    fn from_iter<I: IntoIterator<Item = TypeDescriptor>>(iter: I) -> Self {
        Self::from_types(iter)
    }
}

impl<'a> IntoIterator for &'a SchemaIndex {
    type Item = &'a TypeDescriptor;
    type IntoIter = std::slice::Iter<'a, TypeDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
