//! Shape-to-model compilation
//!
//! This crate walks a service schema from a set of root result shapes and
//! produces one `Model` per distinct record shape reached, each field
//! annotated with the `Mapping` that extracts it from a raw response.
//!
//! ## Pipeline
//!
//! - [`TypeNormalizer`] maps schema primitives to canonical scalars
//! - [`to_snake_case`] converts member names to field names
//! - [`classify`] and [`try_collapse`] decide how a member is represented
//! - [`ModelCompiler`] recurses through records, deduplicating by type name
//! - [`synthesize`] builds each field's extraction rule
//! - [`RootDriver`] compiles every configured root into one collection
//!
//! ## Usage
//! ```rust,ignore
//! use shape_model_generator_compiler::RootDriver;
//!
//! let models = RootDriver::new(&provider).compile_all(&config)?;
//! ```

mod classifier;
mod compiler;
mod driver;
mod mapping;
mod naming;
mod normalizer;

pub use classifier::{classify, try_collapse, Collapsed, ShapeClass};
pub use compiler::{CompileOptions, CompileRequest, ModelCompiler, TypeIndex, MAX_NESTING_DEPTH};
pub use driver::{check_references, compile_service, RootDriver};
pub use mapping::{root_fields, synthesize};
pub use naming::to_snake_case;
pub use normalizer::TypeNormalizer;

use shape_model_generator_common::{GeneratorConfig, Model, Result, SchemaProvider};

/// Compile every root of a config (convenience function)
pub fn compile_all<P: SchemaProvider + ?Sized>(
    provider: &P,
    config: &GeneratorConfig,
) -> Result<Vec<Model>> {
    RootDriver::new(provider).compile_all(config)
}
