//! Type and variable declarations.
//!
//! Declarations are plain owned values. Expansion never mutates a
//! declaration in place: it builds a new one from the source plus the
//! overridden fields (see [`TypeDeclaration::nested_under`]).

use indexmap::IndexMap;

use crate::base::constants::{
    ARRAY_PREFIX, COMMENT_GROUP_SEPARATOR, ENUM_MARKER, INTERNAL_TYPE_NAMES, MEMBER_SEPARATOR,
    NAMESPACE_SEPARATOR, PUBLICATION_ONLY, STRUCT_MARKER,
};

use super::primitive::Primitive;

// ============================================================================
// TYPE KIND
// ============================================================================

/// Classification of a raw `BaseType` string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// One of the fixed storage types.
    Primitive(Primitive),
    /// A structure declaration (`STRUCT`).
    Struct,
    /// An enumeration declaration (`ENUM`).
    Enum,
    /// An `ARRAY[..] OF ..` descriptor.
    Array,
    /// A reserved vendor structure from the internal catalog.
    InternalStruct,
    /// Anything else: a reference to a user type, resolved by dictionary lookup.
    Reference,
}

impl TypeKind {
    pub fn classify(data_type: &str) -> Self {
        if data_type == STRUCT_MARKER {
            TypeKind::Struct
        } else if data_type == ENUM_MARKER {
            TypeKind::Enum
        } else if data_type.starts_with(ARRAY_PREFIX) {
            TypeKind::Array
        } else if let Some(primitive) = Primitive::from_name(data_type) {
            TypeKind::Primitive(primitive)
        } else if INTERNAL_TYPE_NAMES.contains(&data_type) {
            TypeKind::InternalStruct
        } else {
            TypeKind::Reference
        }
    }

    pub fn primitive(&self) -> Option<Primitive> {
        match self {
            TypeKind::Primitive(p) => Some(*p),
            _ => None,
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeKind::Primitive(_))
    }
}

// ============================================================================
// TYPE DECLARATION
// ============================================================================

/// A named type description: a dictionary entry, one of its members, or a
/// worklist item during expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDeclaration {
    name: String,
    data_type: String,
    kind: TypeKind,
    members: Vec<TypeDeclaration>,
    comment: String,
    initial_value: Option<String>,
    namespace: Option<String>,
    /// Path of the declaring parent, for display only.
    origin: Option<String>,
}

impl TypeDeclaration {
    /// Create a declaration, classifying its raw type once.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        let data_type = data_type.into();
        Self {
            name: name.into(),
            kind: TypeKind::classify(&data_type),
            data_type,
            members: Vec::new(),
            comment: String::new(),
            initial_value: None,
            namespace: None,
            origin: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn with_members(mut self, members: Vec<TypeDeclaration>) -> Self {
        self.members = members;
        self
    }

    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace.filter(|ns| !ns.is_empty());
        self
    }

    /// Record the path of the declaring parent.
    pub fn declared_in(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_initial_value(mut self, value: Option<String>) -> Self {
        self.initial_value = value.filter(|v| !v.is_empty());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw `BaseType` text.
    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Members in declaration order. Empty unless this is a structure.
    pub fn members(&self) -> &[TypeDeclaration] {
        &self.members
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn initial_value(&self) -> Option<&str> {
        self.initial_value.as_deref()
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// Dictionary key: `namespace\name`, or the bare name outside a namespace.
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}{NAMESPACE_SEPARATOR}{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Copy of this declaration re-rooted under `parent_path`.
    ///
    /// The copy is named `parent_path.name`, loses its namespace, and
    /// records `parent_path` as its origin.
    pub fn nested_under(&self, parent_path: &str) -> Self {
        Self {
            name: format!("{parent_path}{MEMBER_SEPARATOR}{}", self.name),
            namespace: None,
            origin: Some(parent_path.to_string()),
            ..self.clone()
        }
    }

    /// Copy of this declaration with a new name and raw type.
    pub fn with_name_and_type(&self, name: impl Into<String>, data_type: &str) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::classify(data_type),
            data_type: data_type.to_string(),
            ..self.clone()
        }
    }
}

// ============================================================================
// GLOBAL VARIABLE
// ============================================================================

/// One declaration line of the global-variable dump.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GlobalVariable {
    pub name: String,
    /// Raw type text (`D` field).
    pub data_type: String,
    /// Comment with any group label stripped.
    pub comment: String,
    pub initial_value: Option<String>,
    /// Publication scope (`NTP` field).
    pub network_publish: Option<String>,
    /// Every `key=value` field of the line, in line order.
    pub fields: IndexMap<String, String>,
}

impl GlobalVariable {
    /// True when the variable is published on the network.
    pub fn is_published(&self) -> bool {
        self.network_publish.as_deref() == Some(PUBLICATION_ONLY)
    }

    /// Seed declaration for expansion.
    pub fn to_declaration(&self) -> TypeDeclaration {
        TypeDeclaration::new(self.name.clone(), self.data_type.clone())
            .with_comment(self.comment.clone())
            .with_initial_value(self.initial_value.clone())
    }

    /// Strip the group label from a raw `Com` value.
    pub fn split_comment(raw: &str) -> &str {
        raw.split_once(COMMENT_GROUP_SEPARATOR)
            .map_or(raw, |(comment, _group)| comment)
    }
}
