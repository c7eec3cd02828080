//! Schema loading for cloud API service definitions
//!
//! This crate parses service schema documents into the schema IR
//! (`ServiceSchema`) the model compiler walks.
//!
//! ## Supported formats
//!
//! - botocore `service-2.json` service models
//! - Smithy JSON AST models (api-models-aws)
//!
//! The format of a document is detected from its top-level keys when not
//! given explicitly.

pub mod botocore;
mod directory;
pub mod smithy;

pub use botocore::BotocoreParser;
pub use directory::SchemaDirectory;
pub use smithy::SmithyParser;

use shape_model_generator_common::{GeneratorError, Result, ServiceSchema};
use std::fmt;
use std::fs;
use std::path::Path;

/// Schema document format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    /// botocore service model
    Botocore,
    /// Smithy JSON AST
    Smithy,
}

impl fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaFormat::Botocore => write!(f, "botocore"),
            SchemaFormat::Smithy => write!(f, "Smithy"),
        }
    }
}

impl SchemaFormat {
    /// Detect the format of a JSON document from its top-level keys
    pub fn detect(content: &str) -> Option<SchemaFormat> {
        let value: serde_json::Value = serde_json::from_str(content).ok()?;
        let object = value.as_object()?;

        if object.contains_key("smithy") {
            Some(SchemaFormat::Smithy)
        } else if object.contains_key("shapes") {
            Some(SchemaFormat::Botocore)
        } else {
            None
        }
    }
}

/// Parse a schema document of a given or detected format
pub fn parse_schema(
    content: &str,
    service_name: &str,
    format: Option<SchemaFormat>,
) -> Result<ServiceSchema> {
    let format = match format {
        Some(format) => format,
        None => SchemaFormat::detect(content).ok_or_else(|| {
            GeneratorError::Parse(format!(
                "Cannot detect schema format of service {}",
                service_name
            ))
        })?,
    };

    match format {
        SchemaFormat::Botocore => BotocoreParser::from_json(content, service_name)?.parse(),
        SchemaFormat::Smithy => SmithyParser::from_json(content, service_name)?.parse(),
    }
}

/// Load a schema file of a given or detected format
pub fn load_schema(
    path: &Path,
    service_name: &str,
    format: Option<SchemaFormat>,
) -> Result<ServiceSchema> {
    let content = fs::read_to_string(path).map_err(|e| {
        GeneratorError::Parse(format!("Failed to read schema {}: {}", path.display(), e))
    })?;
    log::debug!("Loaded schema of {} from {}", service_name, path.display());
    parse_schema(&content, service_name, format)
}

/// Infer a service name from a schema file path
///
/// `.../iam/2010-05-08/service-2.json` -> "iam", `ec2-2016-11-15.json` -> "ec2"
pub fn infer_service_name(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_str()?;
    if stem == "service-2" {
        return path
            .parent()?
            .parent()?
            .file_name()?
            .to_str()
            .map(String::from);
    }

    // Strip a trailing -YYYY-MM-DD version
    let name = match stem.len().checked_sub(11) {
        Some(split)
            if stem.is_char_boundary(split)
                && stem[split..].starts_with('-')
                && is_api_version(&stem[split + 1..]) =>
        {
            &stem[..split]
        }
        _ => stem,
    };
    Some(name.to_string())
}

fn is_api_version(s: &str) -> bool {
    s.len() == 10
        && s.chars()
            .enumerate()
            .all(|(i, c)| if i == 4 || i == 7 { c == '-' } else { c.is_ascii_digit() })
}
