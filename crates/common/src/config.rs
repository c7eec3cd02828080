//! Run configuration loaded from YAML
//!
//! The configuration lists, per API service, which list/describe calls are
//! turned into root models:
//!
//! ```yaml
//! class_prefix: Aws
//! kind_prefix: aws_
//! services:
//!   iam:
//!     - api_action: list-access-keys
//!       result_property: AccessKeyMetadata
//!       result_shape: AccessKeyMetadata
//!       prefix: Iam
//!       prop_prefix: access_key_
//! ```

use crate::{GeneratorError, Mapping, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Root structure of the run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Prepended to every generated class name (e.g., "Aws")
    pub class_prefix: String,

    /// Prepended to every resource kind (e.g., "aws_")
    pub kind_prefix: String,

    /// Service identifier to root specs, in processing order
    pub services: IndexMap<String, Vec<RootSpec>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            class_prefix: String::new(),
            kind_prefix: "aws_".to_string(),
            services: IndexMap::new(),
        }
    }
}

/// One API call whose result elements become a root model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootSpec {
    /// Action to perform on the client
    pub api_action: String,

    /// Response member holding the resulting list
    pub result_property: String,

    /// Shape of one result element
    pub result_shape: String,

    /// Prefix for class names of this root and everything below it
    #[serde(default)]
    pub prefix: Option<String>,

    /// Prefix for the root model's own field names
    #[serde(default)]
    pub prop_prefix: Option<String>,

    /// Class name of the root model, defaults to the shape's type name
    #[serde(default)]
    pub name: Option<String>,

    /// Extra base class of the root model
    #[serde(default)]
    pub base: Option<String>,

    /// Field name to custom extraction rule, replacing the synthesized one
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub overrides: IndexMap<String, Mapping>,
}

impl RootSpec {
    pub fn new(
        api_action: impl Into<String>,
        result_property: impl Into<String>,
        result_shape: impl Into<String>,
    ) -> Self {
        Self {
            api_action: api_action.into(),
            result_property: result_property.into(),
            result_shape: result_shape.into(),
            prefix: None,
            prop_prefix: None,
            name: None,
            base: None,
            overrides: IndexMap::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_prop_prefix(mut self, prop_prefix: impl Into<String>) -> Self {
        self.prop_prefix = Some(prop_prefix.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_override(mut self, field: impl Into<String>, mapping: Mapping) -> Self {
        self.overrides.insert(field.into(), mapping);
        self
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GeneratorError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        Self::from_yaml(&content).map_err(|e| {
            GeneratorError::Config(format!("Failed to parse config YAML from {:?}: {}", path, e))
        })
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Total number of root specs across all services
    pub fn root_count(&self) -> usize {
        self.services.values().map(Vec::len).sum()
    }
}
