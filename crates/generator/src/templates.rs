//! Template loading and management

use crate::python;
use shape_model_generator_common::{GeneratorError, Result};
use std::collections::HashMap;
use tera::{Tera, Value};

/// Name of the per-model class template
pub const MODEL_TEMPLATE: &str = "model.py";

/// Load all templates
pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.register_filter("python_str", python_str_filter);

    tera.add_raw_template(MODEL_TEMPLATE, include_str!("../templates/model.py.tera"))
        .map_err(|e| {
            GeneratorError::Generation(format!("Failed to load model.py template: {}", e))
        })?;

    Ok(tera)
}

/// Filter to render a string as a double-quoted Python literal
fn python_str_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let s = value
        .as_str()
        .ok_or_else(|| tera::Error::msg("python_str filter expects a string"))?;

    Ok(Value::String(python::string_literal(s)))
}
