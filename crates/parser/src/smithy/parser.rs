//! Smithy model file parser

use super::types::SmithyModel;
use shape_model_generator_common::{GeneratorError, Result, ServiceSchema};
use std::fs;
use std::path::Path;

/// Smithy model parser
///
/// Reads and parses Smithy JSON AST files from the AWS api-models-aws repository
pub struct SmithyParser {
    /// Loaded Smithy model
    model: SmithyModel,

    /// Service name (e.g., "s3", "ec2")
    service_name: String,
}

impl SmithyParser {
    /// Load Smithy model from file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = SmithyParser::from_file(
    ///     "api-models-aws/models/ec2/service/2016-11-15/ec2-2016-11-15.json",
    ///     "ec2",
    /// )?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P, service_name: &str) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            GeneratorError::Parse(format!(
                "Failed to read Smithy file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content, service_name)
    }

    /// Parse Smithy model from JSON string
    pub fn from_json(json: &str, service_name: &str) -> Result<Self> {
        let model: SmithyModel = serde_json::from_str(json)
            .map_err(|e| GeneratorError::Parse(format!("Failed to parse Smithy JSON: {}", e)))?;

        Ok(Self {
            model,
            service_name: service_name.to_string(),
        })
    }

    /// Convert the Smithy model into the schema IR
    pub fn parse(&self) -> Result<ServiceSchema> {
        super::converter::convert_smithy_to_schema(&self.model, &self.service_name)
    }

    /// Get reference to the underlying Smithy model
    pub fn model(&self) -> &SmithyModel {
        &self.model
    }
}
