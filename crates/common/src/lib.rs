//! Common types and utilities for the Shape Model Generator
//!
//! This crate contains the schema IR read by the compiler, the model IR it
//! produces, the run configuration and the shared error type used across
//! the parser, compiler, generator, and CLI components.

mod config;
mod model;
mod schema;

pub use config::{GeneratorConfig, RootSpec};
pub use model::{ApiDescriptor, FieldDefault, Mapping, Model, ModelField, ScalarType, ValueType};
pub use schema::{MemberRef, SchemaProvider, ServiceSchema, Shape, ShapeKind};

use thiserror::Error;

/// Errors that can occur while loading schemas or compiling models
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported shape {shape} of kind {kind}")]
    UnsupportedShape { shape: String, kind: String },

    #[error("Key type of map {shape} must be a simple type, got {key}")]
    InvalidMapKey { shape: String, key: String },

    #[error("Result shape {shape} not found in service {service}")]
    UnresolvedRootShape { service: String, shape: String },

    #[error("Shape {shape} is referenced but not defined")]
    UnknownShape { shape: String },

    #[error("Field {field} nests record {shape} inside itself")]
    RecursiveShape { shape: String, field: String },

    #[error("Shape {shape} is nested {depth} levels deep")]
    NestingTooDeep { shape: String, depth: usize },

    #[error("No schema for service {service} in {dir}")]
    ServiceNotFound { service: String, dir: String },

    #[error("Field {field} of {model} references unknown model {target}")]
    DanglingReference {
        model: String,
        field: String,
        target: String,
    },

    #[error("Model {name} is generated more than once")]
    DuplicateModel { name: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;
