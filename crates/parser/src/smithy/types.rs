//! Smithy JSON AST type definitions
//!
//! These types represent the structure of Smithy JSON files.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root Smithy model document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmithyModel {
    /// Smithy version (e.g., "2.0")
    pub smithy: String,

    /// Shape definitions keyed by absolute shape ID, in document order
    #[serde(default)]
    pub shapes: IndexMap<String, Shape>,

    /// Metadata about the model
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Trait ID to trait value
pub type Traits = HashMap<String, serde_json::Value>;

/// A Smithy shape
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Shape {
    /// Service definition
    Service {
        /// API version
        #[serde(default)]
        version: Option<String>,

        /// Operations exposed by this service
        #[serde(default)]
        operations: Vec<ShapeReference>,

        #[serde(default)]
        traits: Traits,
    },

    /// Operation definition
    Operation {
        #[serde(default)]
        input: Option<ShapeReference>,

        #[serde(default)]
        output: Option<ShapeReference>,

        #[serde(default)]
        traits: Traits,
    },

    /// Structure definition
    Structure {
        /// Member fields, in declaration order
        #[serde(default)]
        members: IndexMap<String, Member>,

        #[serde(default)]
        traits: Traits,
    },

    /// Tagged union
    Union {
        #[serde(default)]
        members: IndexMap<String, Member>,

        #[serde(default)]
        traits: Traits,
    },

    String {
        #[serde(default)]
        traits: Traits,
    },

    /// String enum (Smithy 2.0)
    Enum {
        #[serde(default)]
        members: IndexMap<String, Member>,

        #[serde(default)]
        traits: Traits,
    },

    Integer {
        #[serde(default)]
        traits: Traits,
    },

    /// Integer enum (Smithy 2.0)
    IntEnum {
        #[serde(default)]
        members: IndexMap<String, Member>,

        #[serde(default)]
        traits: Traits,
    },

    Short {
        #[serde(default)]
        traits: Traits,
    },

    Byte {
        #[serde(default)]
        traits: Traits,
    },

    Long {
        #[serde(default)]
        traits: Traits,
    },

    Boolean {
        #[serde(default)]
        traits: Traits,
    },

    Float {
        #[serde(default)]
        traits: Traits,
    },

    Double {
        #[serde(default)]
        traits: Traits,
    },

    Timestamp {
        #[serde(default)]
        traits: Traits,
    },

    Blob {
        #[serde(default)]
        traits: Traits,
    },

    /// List type
    List {
        member: Member,

        #[serde(default)]
        traits: Traits,
    },

    /// Set type (Smithy 1.0)
    Set {
        member: Member,

        #[serde(default)]
        traits: Traits,
    },

    /// Map type
    Map {
        key: Member,
        value: Member,

        #[serde(default)]
        traits: Traits,
    },

    /// Fallback for other shape types (resources, documents, big numbers)
    #[serde(other)]
    Other,
}

/// Reference to another shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeReference {
    /// Target shape ID (e.g., "com.amazonaws.ec2#Instance")
    pub target: String,
}

/// Structure, list or map member definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Target shape for this member
    pub target: String,

    #[serde(default)]
    pub traits: Traits,
}

impl Shape {
    /// Traits of the shape, if it carries any
    pub fn traits(&self) -> Option<&Traits> {
        match self {
            Shape::Service { traits, .. }
            | Shape::Operation { traits, .. }
            | Shape::Structure { traits, .. }
            | Shape::Union { traits, .. }
            | Shape::String { traits }
            | Shape::Enum { traits, .. }
            | Shape::Integer { traits }
            | Shape::IntEnum { traits, .. }
            | Shape::Short { traits }
            | Shape::Byte { traits }
            | Shape::Long { traits }
            | Shape::Boolean { traits }
            | Shape::Float { traits }
            | Shape::Double { traits }
            | Shape::Timestamp { traits }
            | Shape::Blob { traits }
            | Shape::List { traits, .. }
            | Shape::Set { traits, .. }
            | Shape::Map { traits, .. } => Some(traits),
            Shape::Other => None,
        }
    }
}

impl SmithyModel {
    /// Find the service shape in the model
    pub fn find_service(&self) -> Option<(&String, &Shape)> {
        self.shapes
            .iter()
            .find(|(_, shape)| matches!(shape, Shape::Service { .. }))
    }

    /// Get a shape by its ID
    pub fn get_shape(&self, shape_id: &str) -> Option<&Shape> {
        self.shapes.get(shape_id)
    }

    /// Extract the local shape name from a shape ID
    /// e.g., "com.amazonaws.ec2#Instance" -> "Instance"
    pub fn local_name(shape_id: &str) -> &str {
        shape_id
            .rsplit_once('#')
            .map(|(_, name)| name)
            .unwrap_or(shape_id)
    }
}

/// Common Smithy trait names
pub mod traits {
    pub const DOCUMENTATION: &str = "smithy.api#documentation";
}

/// Namespace of the Smithy prelude shapes
pub const PRELUDE_NAMESPACE: &str = "smithy.api#";
