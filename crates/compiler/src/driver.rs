//! Root driver: compiles every configured root into one model collection

use crate::{CompileOptions, CompileRequest, ModelCompiler, TypeIndex};
use log::{debug, info, warn};
use shape_model_generator_common::{
    GeneratorConfig, GeneratorError, Model, Result, RootSpec, SchemaProvider, ServiceSchema,
};
use std::collections::HashSet;

/// Runs the model compiler over all services and root specs of a config
pub struct RootDriver<'p, P: SchemaProvider + ?Sized> {
    provider: &'p P,
}

impl<'p, P: SchemaProvider + ?Sized> RootDriver<'p, P> {
    pub fn new(provider: &'p P) -> Self {
        Self { provider }
    }

    /// Compile all roots of the config, in config order
    ///
    /// One type index is shared by every root and service, so a shape
    /// reachable from several roots is compiled once in total.
    pub fn compile_all(&self, config: &GeneratorConfig) -> Result<Vec<Model>> {
        let options = CompileOptions::from(config);
        let mut index = TypeIndex::new();
        let mut models = Vec::new();

        for (service, specs) in &config.services {
            if specs.is_empty() {
                debug!("Service {} has no root specs, skipping", service);
                continue;
            }

            info!("Compiling {} root(s) of service {}", specs.len(), service);
            let schema = self.provider.load_service(service)?;
            models.extend(compile_service(
                service, &schema, specs, &options, &mut index,
            )?);
        }

        check_references(&models)?;
        info!("Compiled {} models", models.len());
        Ok(models)
    }
}

/// Compile the root specs of one service against its schema
pub fn compile_service(
    service: &str,
    schema: &ServiceSchema,
    specs: &[RootSpec],
    options: &CompileOptions,
    index: &mut TypeIndex,
) -> Result<Vec<Model>> {
    let mut compiler = ModelCompiler::new(schema, options, index);
    let mut models = Vec::new();

    for spec in specs {
        let shape = schema
            .shape(&spec.result_shape)
            .ok_or_else(|| GeneratorError::UnresolvedRootShape {
                service: service.to_string(),
                shape: spec.result_shape.clone(),
            })?;

        let compiled = compiler.compile(shape, &CompileRequest::root(service, spec))?;
        if compiled.is_empty() {
            warn!(
                "Root {} of {} ({}) produced no model",
                spec.result_shape, service, spec.api_action
            );
        }
        models.extend(compiled);
    }

    Ok(models)
}

/// Verify that model names are unique and every model reference resolves
pub fn check_references(models: &[Model]) -> Result<()> {
    let mut names = HashSet::new();
    for model in models {
        if !names.insert(model.name.as_str()) {
            return Err(GeneratorError::DuplicateModel {
                name: model.name.clone(),
            });
        }
    }

    for model in models {
        for field in &model.fields {
            if let Some(target) = field
                .value_type
                .referenced_models()
                .into_iter()
                .find(|target| !names.contains(target))
            {
                return Err(GeneratorError::DanglingReference {
                    model: model.name.clone(),
                    field: field.name.clone(),
                    target: target.to_string(),
                });
            }
        }
    }

    Ok(())
}
