//! Botocore service model file parser

use super::types::BotocoreModel;
use shape_model_generator_common::{GeneratorError, Result, ServiceSchema};
use std::fs;
use std::path::Path;

/// Botocore service model parser
pub struct BotocoreParser {
    /// Loaded service model
    model: BotocoreModel,

    /// Service name (e.g., "iam", "ec2")
    service_name: String,
}

impl BotocoreParser {
    /// Load a service model from file path
    pub fn from_file<P: AsRef<Path>>(path: P, service_name: &str) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            GeneratorError::Parse(format!(
                "Failed to read botocore file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content, service_name)
    }

    /// Parse a service model from JSON string
    pub fn from_json(json: &str, service_name: &str) -> Result<Self> {
        let model: BotocoreModel = serde_json::from_str(json)
            .map_err(|e| GeneratorError::Parse(format!("Failed to parse botocore JSON: {}", e)))?;

        Ok(Self {
            model,
            service_name: service_name.to_string(),
        })
    }

    /// Convert the service model into the schema IR
    pub fn parse(&self) -> Result<ServiceSchema> {
        super::converter::convert_botocore_to_schema(&self.model, &self.service_name)
    }

    /// Get reference to the underlying service model
    pub fn model(&self) -> &BotocoreModel {
        &self.model
    }
}
