//! Directory-backed schema provider

use crate::{load_schema, SchemaFormat};
use log::debug;
use shape_model_generator_common::{
    GeneratorError, Result, SchemaProvider, ServiceSchema,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Loads service schemas from a directory tree
///
/// For a service `iam`, the first match wins:
/// - `<root>/iam.json`
/// - `<root>/iam/service-2.json`
/// - the last `.json` file below `<root>/iam/` in path order, which for
///   botocore (`iam/2010-05-08/service-2.json`) and api-models-aws
///   (`iam/service/2010-05-08/iam-2010-05-08.json`) layouts is the
///   latest API version
///
/// Companion files next to a model (paginators, waiters, examples, endpoint
/// rule sets, sdk extras) are never candidates.
pub struct SchemaDirectory {
    root: PathBuf,
    format: Option<SchemaFormat>,
}

impl SchemaDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            format: None,
        }
    }

    /// Force a format instead of detecting it per file
    pub fn with_format(mut self, format: Option<SchemaFormat>) -> Self {
        self.format = format;
        self
    }

    /// Locate the schema file of a service
    pub fn find_schema_file(&self, service: &str) -> Result<PathBuf> {
        let flat = self.root.join(format!("{}.json", service));
        if flat.is_file() {
            return Ok(flat);
        }

        let service_dir = self.root.join(service);
        let direct = service_dir.join("service-2.json");
        if direct.is_file() {
            return Ok(direct);
        }

        let mut candidates = Vec::new();
        if service_dir.is_dir() {
            collect_json_files(&service_dir, &mut candidates)?;
        }
        candidates.sort();
        candidates
            .pop()
            .ok_or_else(|| GeneratorError::ServiceNotFound {
                service: service.to_string(),
                dir: self.root.display().to_string(),
            })
    }
}

impl SchemaProvider for SchemaDirectory {
    fn load_service(&self, service: &str) -> Result<ServiceSchema> {
        let path = self.find_schema_file(service)?;
        debug!("Using {} for service {}", path.display(), service);
        load_schema(&path, service, self.format)
    }
}

/// File name prefixes of botocore files that accompany a service model
const COMPANION_PREFIXES: &[&str] = &["paginators", "waiters", "examples", "endpoint-rule-set"];

/// Whether a file name belongs to a companion file rather than a model
fn is_companion(file_name: &str) -> bool {
    COMPANION_PREFIXES
        .iter()
        .any(|prefix| file_name.starts_with(prefix))
        || file_name.ends_with(".sdk-extras.json")
}

/// Recursively collect `.json` model files
fn collect_json_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_json_files(&path, files)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("json") {
            let companion = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_companion);
            if !companion {
                files.push(path);
            }
        }
    }
    Ok(())
}
