//! Model IR produced by the compiler and consumed by renderers

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Canonical scalar types a schema primitive normalizes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
    /// String to string map (tag maps)
    StringMap,
}

/// Type of a generated field's value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueType {
    Scalar { scalar: ScalarType },
    /// Reference to another generated model by name
    Model { name: String },
    Map { key: ScalarType, value: Box<ValueType> },
}

impl ValueType {
    pub fn scalar(scalar: ScalarType) -> Self {
        ValueType::Scalar { scalar }
    }

    pub fn model(name: impl Into<String>) -> Self {
        ValueType::Model { name: name.into() }
    }

    /// Names of all models this type refers to
    pub fn referenced_models(&self) -> Vec<&str> {
        match self {
            ValueType::Scalar { .. } => vec![],
            ValueType::Model { name } => vec![name.as_str()],
            ValueType::Map { value, .. } => value.referenced_models(),
        }
    }
}

/// Extraction rule describing how a field is pulled out of a raw response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Mapping {
    /// Follow nested member lookups, yielding `default` when a segment is missing
    Select {
        path: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default: Option<Value>,
    },
    /// Apply steps left to right, each to the previous result
    Pipe { steps: Vec<Mapping> },
    /// Apply `inner` to every element of a list
    ForEach { inner: Box<Mapping> },
    /// Build a nested object with another model's mappings
    MapVia { model: String },
    /// Ignore the input and yield `value`
    Const { value: Value },
    /// Turn a list of key/value tags into a mapping
    TagsToMapping,
    /// Extract the value of one named tag
    TagsValue { key: String },
}

impl Mapping {
    pub fn select<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Mapping::Select {
            path: path.into_iter().map(Into::into).collect(),
            default: None,
        }
    }

    /// Select defaulting to an empty list
    pub fn select_list<I, S>(path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Mapping::Select {
            path: path.into_iter().map(Into::into).collect(),
            default: Some(Value::Array(vec![])),
        }
    }

    pub fn for_each(inner: Mapping) -> Self {
        Mapping::ForEach {
            inner: Box::new(inner),
        }
    }

    pub fn map_via(model: impl Into<String>) -> Self {
        Mapping::MapVia {
            model: model.into(),
        }
    }

    pub fn constant(value: Value) -> Self {
        Mapping::Const { value }
    }

    /// Compose `self` with `next`, flattening nested pipes
    pub fn then(self, next: Mapping) -> Self {
        let mut steps = match self {
            Mapping::Pipe { steps } => steps,
            other => vec![other],
        };
        match next {
            Mapping::Pipe { steps: more } => steps.extend(more),
            other => steps.push(other),
        }
        Mapping::Pipe { steps }
    }
}

/// Default value of a field that is absent in the response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldDefault {
    #[default]
    None,
    EmptyList,
}

/// One field of a generated model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelField {
    /// Field name in target case, including the root's field prefix
    pub name: String,

    /// Schema member names the raw value is read from
    pub source_path: Vec<String>,

    pub value_type: ValueType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub is_array: bool,

    /// Value is another generated model
    #[serde(default)]
    pub is_nested_model: bool,

    /// Provided by the resource base class, mapped but never declared
    #[serde(default)]
    pub builtin: bool,

    #[serde(default)]
    pub default: FieldDefault,

    pub mapping: Mapping,
}

impl ModelField {
    /// Create a field with a placeholder mapping; the compiler fills in the real one
    pub fn new(name: impl Into<String>, source_path: Vec<String>, value_type: ValueType) -> Self {
        let mapping = Mapping::select(source_path.clone());
        Self {
            name: name.into(),
            source_path,
            value_type,
            description: None,
            is_array: false,
            is_nested_model: false,
            builtin: false,
            default: FieldDefault::None,
            mapping,
        }
    }

    pub fn array(mut self) -> Self {
        self.is_array = true;
        self.default = FieldDefault::EmptyList;
        self
    }

    pub fn nested(mut self) -> Self {
        self.is_nested_model = true;
        self
    }

    pub fn builtin(mut self) -> Self {
        self.builtin = true;
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_mapping(mut self, mapping: Mapping) -> Self {
        self.mapping = mapping;
        self
    }
}

/// API call a root model is collected from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDescriptor {
    /// Service identifier (e.g., "iam")
    pub service: String,
    /// Action on the service client (e.g., "list-access-keys")
    pub action: String,
    /// Response member holding the result list
    pub result_field: String,
}

/// One generated class description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Class name, unique across a run
    pub name: String,

    /// Resource kind identifier (e.g., "aws_iam_access_key_metadata")
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Fields in discovery order
    pub fields: Vec<ModelField>,

    /// Directly requested by a root spec
    #[serde(default)]
    pub is_root: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_class: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api: Option<ApiDescriptor>,
}

impl Model {
    /// Get a field by name
    pub fn field(&self, name: &str) -> Option<&ModelField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields coming from the schema, excluding base-class fields
    pub fn declared_fields(&self) -> impl Iterator<Item = &ModelField> {
        self.fields.iter().filter(|f| !f.builtin)
    }
}
