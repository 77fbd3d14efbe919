//! Type definitions for GraphQL introspection documents.
//!
//! These types mirror the parts of an introspection query response that the
//! type graph needs: the type list, each type's fields, and the (possibly
//! wrapped) type reference of every field. Keys the graph does not use, such
//! as descriptions, arguments and deprecation data, are ignored on decode.

use serde::{Deserialize, Deserializer, Serialize};

/// Decodes an explicit `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Top-level introspection response wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrospectionResponse {
    pub data: IntrospectionData,
}

/// Data field of the introspection response containing the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrospectionData {
    #[serde(rename = "__schema")]
    pub schema: IntrospectionSchema,
}

/// The type list of an introspected schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntrospectionSchema {
    pub types: Vec<TypeDescriptor>,
}

impl IntrospectionResponse {
    /// Wraps a type list in the `{"data": {"__schema": {"types": [...]}}}` envelope.
    #[must_use]
    pub fn from_types(types: Vec<TypeDescriptor>) -> Self {
        Self {
            data: IntrospectionData {
                schema: IntrospectionSchema { types },
            },
        }
    }

    #[must_use]
    pub fn types(&self) -> &[TypeDescriptor] {
        &self.data.schema.types
    }
}

/// The type-system category of a type or type reference.
///
/// Kinds this crate does not know decode to [`TypeKind::Unknown`] instead of
/// failing the whole document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
    List,
    NonNull,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TypeKind {
    /// Returns true for the `LIST` and `NON_NULL` pseudo-kinds.
    #[must_use]
    pub const fn is_wrapper(self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }

    /// Returns true for kinds that declare fields (`OBJECT` and `INTERFACE`).
    #[must_use]
    pub const fn has_fields(self) -> bool {
        matches!(self, Self::Object | Self::Interface)
    }
}

/// A named type declared by the schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDescriptor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldDescriptor>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub of_type: Option<TypeRef>,
}

impl TypeDescriptor {
    /// Creates a descriptor with no fields.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            fields: None,
            of_type: None,
        }
    }

    /// Creates an `OBJECT` descriptor with the given fields.
    #[must_use]
    pub fn object(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self::new(name, TypeKind::Object).with_fields(fields)
    }

    /// Creates an `INTERFACE` descriptor with the given fields.
    #[must_use]
    pub fn interface(name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self::new(name, TypeKind::Interface).with_fields(fields)
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Vec<FieldDescriptor>) -> Self {
        self.fields = Some(fields);
        self
    }

    /// The declared fields in schema order; empty when the type has none.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        self.fields.as_deref().unwrap_or_default()
    }

    /// Looks up a declared field by its exact name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields().iter().find(|field| field.name == name)
    }
}

/// A field of an `OBJECT` or `INTERFACE` type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub type_ref: TypeRef,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
        }
    }
}

/// A reference to a type, possibly wrapped in `LIST` / `NON_NULL` layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub of_type: Option<Box<TypeRef>>,
}

impl TypeRef {
    /// A reference to a named (non-wrapper) type.
    #[must_use]
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            of_type: None,
        }
    }

    /// Shorthand for a reference to an `OBJECT` type.
    #[must_use]
    pub fn object(name: impl Into<String>) -> Self {
        Self::named(TypeKind::Object, name)
    }

    /// Shorthand for a reference to a `SCALAR` type.
    #[must_use]
    pub fn scalar(name: impl Into<String>) -> Self {
        Self::named(TypeKind::Scalar, name)
    }

    #[must_use]
    pub fn non_null(inner: Self) -> Self {
        Self {
            kind: TypeKind::NonNull,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self {
            kind: TypeKind::List,
            name: None,
            of_type: Some(Box::new(inner)),
        }
    }

    /// SDL spelling of the reference, e.g. `[Issue!]!`.
    ///
    /// A wrapper missing its inner reference prints as a bare `!` or `[]`.
    ///
    /// ```
    /// # use graphql_introspect::TypeRef;
    /// let issues = TypeRef::non_null(TypeRef::list(TypeRef::object("Issue")));
    /// assert_eq!(issues.to_type_string(), "[Issue]!");
    /// ```
    #[must_use]
    pub fn to_type_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.of_type.as_deref();
        match self.kind {
            TypeKind::NonNull => {
                if let Some(inner) = inner {
                    write!(f, "{inner}")?;
                }
                f.write_str("!")
            }
            TypeKind::List => {
                f.write_str("[")?;
                if let Some(inner) = inner {
                    write!(f, "{inner}")?;
                }
                f.write_str("]")
            }
            _ => f.write_str(self.name.as_deref().unwrap_or_default()),
        }
    }
}
