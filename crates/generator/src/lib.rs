//! Python class generation for compiled models
//!
//! This crate renders compiled `Model`s into attrs resource class
//! declarations with json-bender mapping tables.

mod python;
mod templates;

pub use python::{bender, type_string, value_type};

use log::debug;
use serde::Serialize;
use shape_model_generator_common::{GeneratorError, Model, Result};
use std::fs;
use std::path::Path;
use tera::Tera;

/// Base class of every root model
const RESOURCE_BASE: &str = "AwsResource";

/// Model renderer
///
/// Turns each model into one class:
/// - `kind` and, for roots, `api_info` class variables
/// - the `mapping` table, base-class fields first
/// - one attribute per declared field
pub struct ModelRenderer {
    tera: Tera,
}

#[derive(Serialize)]
struct ClassContext<'m> {
    name: &'m str,
    bases: String,
    kind: &'m str,
    api: Option<ApiContext<'m>>,
    mappings: Vec<MappingEntry<'m>>,
    attributes: Vec<AttributeContext<'m>>,
}

#[derive(Serialize)]
struct ApiContext<'m> {
    service: &'m str,
    action: &'m str,
    result_field: &'m str,
}

#[derive(Serialize)]
struct MappingEntry<'m> {
    name: &'m str,
    bender: String,
}

#[derive(Serialize)]
struct AttributeContext<'m> {
    name: &'m str,
    type_string: String,
    assignment: &'static str,
}

impl ModelRenderer {
    /// Create a new renderer with the built-in templates
    pub fn new() -> Result<Self> {
        let tera = templates::load_templates()?;
        Ok(Self { tera })
    }

    /// Render one model as a class declaration
    pub fn render_model(&self, model: &Model) -> Result<String> {
        let context = tera::Context::from_serialize(Self::create_context(model))
            .map_err(|e| GeneratorError::Generation(format!("Template error: {}", e)))?;

        self.tera
            .render(templates::MODEL_TEMPLATE, &context)
            .map_err(|e| {
                GeneratorError::Generation(format!("Failed to render {}: {:?}", model.name, e))
            })
    }

    /// Render all models in order, separated by blank lines
    pub fn render_all(&self, models: &[Model]) -> Result<String> {
        let classes = models
            .iter()
            .map(|model| self.render_model(model))
            .collect::<Result<Vec<_>>>()?;
        debug!("Rendered {} classes", classes.len());
        Ok(classes.join("\n\n"))
    }

    /// Render all models into a file, creating parent directories
    pub fn write_to_file(&self, models: &[Model], path: &Path) -> Result<()> {
        let rendered = self.render_all(models)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                GeneratorError::Generation(format!("Failed to create output directory: {}", e))
            })?;
        }

        fs::write(path, rendered).map_err(|e| {
            GeneratorError::Generation(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Create template context from a model
    fn create_context(model: &Model) -> ClassContext<'_> {
        let bases = match (model.is_root, &model.base_class) {
            (true, Some(base)) => format!("({}, {})", RESOURCE_BASE, base),
            (true, None) => format!("({})", RESOURCE_BASE),
            (false, Some(base)) => format!("({})", base),
            (false, None) => String::new(),
        };

        ClassContext {
            name: &model.name,
            bases,
            kind: &model.kind,
            api: model.api.as_ref().map(|api| ApiContext {
                service: &api.service,
                action: &api.action,
                result_field: &api.result_field,
            }),
            mappings: model
                .fields
                .iter()
                .map(|field| MappingEntry {
                    name: &field.name,
                    bender: bender(&field.mapping),
                })
                .collect(),
            attributes: model
                .declared_fields()
                .map(|field| AttributeContext {
                    name: &field.name,
                    type_string: type_string(field),
                    assignment: python::assignment(field),
                })
                .collect(),
        }
    }
}
