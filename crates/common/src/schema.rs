//! Schema IR
//!
//! A service schema is an arena of shapes keyed by name. Shapes refer to
//! each other by name only, so re-entrant and cyclic references need no
//! shared ownership.

use crate::{GeneratorError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// All shapes of one API service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceSchema {
    /// Service identifier (e.g., "iam", "ec2")
    pub name: String,

    /// Shapes in schema order
    #[serde(default)]
    pub shapes: IndexMap<String, Shape>,
}

/// A node in the schema graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// Schema-assigned type identifier
    pub name: String,

    /// Structural kind
    pub kind: ShapeKind,

    /// Free text documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

/// Structural kind of a shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeKind {
    /// Leaf shape, e.g. string, integer, timestamp, blob
    Scalar { type_name: String },

    /// Homogeneous list
    List { member: MemberRef },

    /// Key/value map
    Map { key: MemberRef, value: MemberRef },

    /// Record with ordered members
    Structure { members: IndexMap<String, MemberRef> },

    /// Anything the compiler has no rule for (unions, documents, ...)
    Other { type_name: String },
}

/// Reference from a container shape to a child shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRef {
    /// Name of the referenced shape
    pub target: String,

    /// Member-level documentation, overriding the target's own
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl MemberRef {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            documentation: None,
        }
    }
}

impl Shape {
    pub fn new(name: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            documentation: None,
        }
    }

    /// Structural type name as it appears in the schema
    pub fn type_name(&self) -> &str {
        match &self.kind {
            ShapeKind::Scalar { type_name } | ShapeKind::Other { type_name } => type_name,
            ShapeKind::List { .. } => "list",
            ShapeKind::Map { .. } => "map",
            ShapeKind::Structure { .. } => "structure",
        }
    }
}

impl ServiceSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shapes: IndexMap::new(),
        }
    }

    /// Add a shape, keyed by its name
    pub fn insert(&mut self, shape: Shape) {
        self.shapes.insert(shape.name.clone(), shape);
    }

    /// Get a shape by name
    pub fn shape(&self, name: &str) -> Option<&Shape> {
        self.shapes.get(name)
    }

    /// Follow a member reference
    pub fn resolve(&self, member: &MemberRef) -> Result<&Shape> {
        self.shape(&member.target)
            .ok_or_else(|| GeneratorError::UnknownShape {
                shape: member.target.clone(),
            })
    }
}

/// Source of service schemas, one per API service
pub trait SchemaProvider {
    /// Load the full schema of a service
    fn load_service(&self, service: &str) -> Result<ServiceSchema>;
}
