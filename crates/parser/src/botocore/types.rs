//! Botocore service model type definitions

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root botocore service model document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotocoreModel {
    /// Model format version (e.g., "2.0")
    #[serde(default)]
    pub version: Option<String>,

    /// Service metadata
    #[serde(default)]
    pub metadata: ServiceMetadata,

    /// Shape definitions keyed by shape name
    #[serde(default)]
    pub shapes: IndexMap<String, ShapeDefinition>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetadata {
    #[serde(default)]
    pub api_version: Option<String>,

    #[serde(default)]
    pub service_id: Option<String>,

    #[serde(default)]
    pub protocol: Option<String>,
}

/// One shape definition
///
/// Botocore keeps every kind in the same loosely typed object, so the
/// kind-specific parts are optional and checked during conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeDefinition {
    #[serde(rename = "type")]
    pub shape_type: String,

    /// Structure members
    #[serde(default)]
    pub members: Option<IndexMap<String, ShapeRef>>,

    /// List element
    #[serde(default)]
    pub member: Option<ShapeRef>,

    /// Map key
    #[serde(default)]
    pub key: Option<ShapeRef>,

    /// Map value
    #[serde(default)]
    pub value: Option<ShapeRef>,

    #[serde(default)]
    pub documentation: Option<String>,
}

/// Reference to another shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeRef {
    pub shape: String,

    #[serde(default)]
    pub documentation: Option<String>,
}
