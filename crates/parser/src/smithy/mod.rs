//! Smithy JSON AST model parser
//!
//! Parses AWS Smithy JSON AST format into a `ServiceSchema`.
//!
//! Smithy specs are available at: https://github.com/aws/api-models-aws
//!
//! ## Format
//! Smithy JSON AST contains:
//! - Shape definitions keyed by absolute ID (`namespace#Name`)
//! - Members referencing their target by ID (`{"target": ...}`)
//! - Traits (metadata like documentation)
//!
//! ## Usage
//! ```rust,ignore
//! use shape_model_generator_parser::smithy::SmithyParser;
//!
//! let parser = SmithyParser::from_file("ec2-2016-11-15.json", "ec2")?;
//! let schema = parser.parse()?;
//! ```

mod converter;
mod parser;
mod types;

pub use parser::SmithyParser;
pub use types::*;
