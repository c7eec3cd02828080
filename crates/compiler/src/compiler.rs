//! Recursive shape-to-model compilation

use crate::classifier::{classify, try_collapse, ShapeClass};
use crate::{mapping, to_snake_case, TypeNormalizer};
use indexmap::IndexMap;
use log::{debug, warn};
use shape_model_generator_common::{
    ApiDescriptor, GeneratorConfig, GeneratorError, Mapping, Model, ModelField, Result, RootSpec,
    ServiceSchema, Shape, ShapeKind, ValueType,
};

/// Deepest record nesting the compiler follows
pub const MAX_NESTING_DEPTH: usize = 64;

/// Members handled by the resource base class instead of plain fields
const IGNORED_MEMBERS: &[&str] = &["tags"];

/// Naming options shared by every model of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    /// Prepended to every qualified type name
    pub class_prefix: String,
    /// Prepended to every resource kind
    pub kind_prefix: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            class_prefix: String::new(),
            kind_prefix: "aws_".to_string(),
        }
    }
}

impl From<&GeneratorConfig> for CompileOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            class_prefix: config.class_prefix.clone(),
            kind_prefix: config.kind_prefix.clone(),
        }
    }
}

/// Qualified type names already compiled in this run
///
/// Maps each qualified type name to the name of the model it produced,
/// which differs when a root spec renames its class.
#[derive(Debug, Clone, Default)]
pub struct TypeIndex {
    known: IndexMap<String, String>,
}

impl TypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.known.contains_key(type_name)
    }

    /// Model name registered for a qualified type name
    pub fn model_name(&self, type_name: &str) -> Option<&str> {
        self.known.get(type_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.known.len()
    }

    pub fn is_empty(&self) -> bool {
        self.known.is_empty()
    }

    fn register(&mut self, type_name: String, model_name: String) {
        self.known.insert(type_name, model_name);
    }
}

/// Per-call parameters of a compilation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileRequest {
    /// Inserted between the class prefix and the shape name
    pub prefix: String,
    /// Prepended to the model's own field names
    pub field_prefix: String,
    /// Class name replacing the qualified type name
    pub class_name: Option<String>,
    pub base_class: Option<String>,
    pub is_root: bool,
    pub api: Option<ApiDescriptor>,
    /// Field name to extraction rule used verbatim
    pub overrides: IndexMap<String, Mapping>,
}

impl CompileRequest {
    /// Request for a shape reached from another model's field
    pub fn nested(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            ..Self::default()
        }
    }

    /// Request for the result shape of a root spec
    pub fn root(service: &str, spec: &RootSpec) -> Self {
        Self {
            prefix: spec.prefix.clone().unwrap_or_default(),
            field_prefix: spec.prop_prefix.clone().unwrap_or_default(),
            class_name: spec.name.clone(),
            base_class: spec.base.clone(),
            is_root: true,
            api: Some(ApiDescriptor {
                service: service.to_string(),
                action: spec.api_action.clone(),
                result_field: spec.result_property.clone(),
            }),
            overrides: spec.overrides.clone(),
        }
    }
}

/// Compiles record shapes of one service schema into models
///
/// The type index is borrowed for the whole run, so a shape reached from
/// several fields, roots or services is compiled once.
pub struct ModelCompiler<'a> {
    schema: &'a ServiceSchema,
    options: &'a CompileOptions,
    index: &'a mut TypeIndex,
    /// Qualified type names of the records currently being compiled
    in_progress: Vec<String>,
}

impl<'a> ModelCompiler<'a> {
    pub fn new(
        schema: &'a ServiceSchema,
        options: &'a CompileOptions,
        index: &'a mut TypeIndex,
    ) -> Self {
        Self {
            schema,
            options,
            index,
            in_progress: Vec::new(),
        }
    }

    /// Compile a shape and every record it reaches that is not yet known
    ///
    /// Nested models come before the models referencing them. An already
    /// compiled or non-record shape yields no models.
    pub fn compile(&mut self, shape: &'a Shape, request: &CompileRequest) -> Result<Vec<Model>> {
        self.in_progress.clear();
        self.compile_at(shape, request, 0)
    }

    /// Qualified type name of a shape under a prefix
    pub fn type_name(&self, shape: &Shape, prefix: &str) -> String {
        format!("{}{}{}", self.options.class_prefix, prefix, shape.name)
    }

    fn kind_of(&self, model_name: &str) -> String {
        let bare = model_name
            .strip_prefix(self.options.class_prefix.as_str())
            .unwrap_or(model_name);
        format!("{}{}", self.options.kind_prefix, to_snake_case(bare))
    }

    fn compile_at(
        &mut self,
        shape: &'a Shape,
        request: &CompileRequest,
        depth: usize,
    ) -> Result<Vec<Model>> {
        if depth > MAX_NESTING_DEPTH {
            return Err(GeneratorError::NestingTooDeep {
                shape: shape.name.clone(),
                depth,
            });
        }

        let schema = self.schema;
        let type_name = self.type_name(shape, &request.prefix);
        if self.index.contains(&type_name) {
            debug!("Skipping {}: already compiled", type_name);
            return Ok(Vec::new());
        }

        let ShapeKind::Structure { members } = &shape.kind else {
            warn!(
                "Shape {} is a {}, not a structure: no model generated",
                shape.name,
                shape.type_name()
            );
            return Ok(Vec::new());
        };

        let name = request
            .class_name
            .clone()
            .unwrap_or_else(|| type_name.clone());
        self.index.register(type_name.clone(), name.clone());
        self.in_progress.push(type_name);

        let mut models = Vec::new();
        let mut fields = if request.is_root {
            mapping::root_fields()
        } else {
            Vec::new()
        };
        let nested = CompileRequest::nested(&request.prefix);

        for (member, member_ref) in members {
            let prop = to_snake_case(member);
            if IGNORED_MEMBERS.contains(&prop.as_str()) {
                continue;
            }

            let target = schema.resolve(member_ref)?;
            let description = member_ref
                .documentation
                .clone()
                .or_else(|| target.documentation.clone());
            let field_name = format!("{}{}", request.field_prefix, prop);
            if let Some(builtin) = shadowed_builtin(&fields, &field_name) {
                warn!(
                    "Member {} of {} shadows the base-class field {}",
                    member, name, builtin.name
                );
            }

            let field = self
                .compile_member(&mut models, &nested, member, field_name, target, depth)?
                .with_description(description);
            fields.push(field);
        }
        self.in_progress.pop();

        for field in fields.iter_mut().filter(|f| !f.builtin) {
            field.mapping = match request.overrides.get(&field.name) {
                Some(custom) => custom.clone(),
                None => mapping::synthesize(field),
            };
        }
        for unused in request
            .overrides
            .keys()
            .filter(|key| !fields.iter().any(|f| &f.name == *key))
        {
            warn!("Override {} matches no field of {}", unused, name);
        }

        debug!("Compiled {} with {} fields", name, fields.len());
        models.push(Model {
            kind: self.kind_of(&name),
            name,
            description: shape.documentation.clone(),
            fields,
            is_root: request.is_root,
            base_class: request.base_class.clone(),
            api: request.api.clone(),
        });

        Ok(models)
    }

    /// Build the field for one member, compiling nested records into `models`
    fn compile_member(
        &mut self,
        models: &mut Vec<Model>,
        nested: &CompileRequest,
        member: &str,
        field_name: String,
        target: &'a Shape,
        depth: usize,
    ) -> Result<ModelField> {
        let schema = self.schema;
        let source = vec![member.to_string()];

        let field = match classify(schema, target)? {
            ShapeClass::Primitive(scalar) => {
                ModelField::new(field_name, source, ValueType::scalar(scalar))
            }
            ShapeClass::List(element) => {
                if let Some(scalar) = TypeNormalizer::normalize(element) {
                    ModelField::new(field_name, source, ValueType::scalar(scalar)).array()
                } else if let Some(collapsed) = try_collapse(schema, element)? {
                    ModelField::new(
                        field_name,
                        vec![member.to_string(), collapsed.member],
                        ValueType::scalar(collapsed.scalar),
                    )
                    .array()
                } else if is_record(element) {
                    let model = self.compile_nested(models, element, nested, depth)?;
                    ModelField::new(field_name, source, ValueType::model(model))
                        .array()
                        .nested()
                } else {
                    return Err(unsupported(element));
                }
            }
            ShapeClass::Map { key, value } => {
                let key_type =
                    TypeNormalizer::normalize(key).ok_or_else(|| GeneratorError::InvalidMapKey {
                        shape: target.name.clone(),
                        key: key.name.clone(),
                    })?;
                let value_type = if let Some(scalar) = TypeNormalizer::normalize(value) {
                    ValueType::scalar(scalar)
                } else if is_record(value) {
                    ValueType::model(self.compile_nested(models, value, nested, depth)?)
                } else {
                    return Err(unsupported(value));
                };
                ModelField::new(
                    field_name,
                    source,
                    ValueType::Map {
                        key: key_type,
                        value: Box::new(value_type),
                    },
                )
            }
            ShapeClass::Record(_) => {
                if let Some(collapsed) = try_collapse(schema, target)? {
                    // Named after both segments: Owner.Name -> owner_name
                    ModelField::new(
                        format!("{}_{}", field_name, to_snake_case(&collapsed.member)),
                        vec![member.to_string(), collapsed.member],
                        ValueType::scalar(collapsed.scalar),
                    )
                } else {
                    // A plain record field may not lead back to an enclosing record
                    if self
                        .in_progress
                        .contains(&self.type_name(target, &nested.prefix))
                    {
                        return Err(GeneratorError::RecursiveShape {
                            shape: target.name.clone(),
                            field: field_name,
                        });
                    }
                    let model = self.compile_nested(models, target, nested, depth)?;
                    ModelField::new(field_name, source, ValueType::model(model)).nested()
                }
            }
        };

        Ok(field)
    }

    /// Compile a nested record if needed and return the model name it maps to
    fn compile_nested(
        &mut self,
        models: &mut Vec<Model>,
        shape: &'a Shape,
        nested: &CompileRequest,
        depth: usize,
    ) -> Result<String> {
        let type_name = self.type_name(shape, &nested.prefix);
        models.extend(self.compile_at(shape, nested, depth + 1)?);
        Ok(self
            .index
            .model_name(&type_name)
            .map(str::to_string)
            .unwrap_or(type_name))
    }
}

/// Base-class field a declared field of the same name would shadow
fn shadowed_builtin<'f>(fields: &'f [ModelField], name: &str) -> Option<&'f ModelField> {
    fields.iter().find(|f| f.builtin && f.name == name)
}

fn is_record(shape: &Shape) -> bool {
    matches!(shape.kind, ShapeKind::Structure { .. })
}

fn unsupported(shape: &Shape) -> GeneratorError {
    GeneratorError::UnsupportedShape {
        shape: shape.name.clone(),
        kind: shape.type_name().to_string(),
    }
}
