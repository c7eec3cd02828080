//! Botocore service model parser
//!
//! Parses the `service-2.json` documents shipped with botocore into a
//! `ServiceSchema`.
//!
//! ## Format
//! A botocore service model contains:
//! - `metadata` with the service identifier and API version
//! - `shapes`, keyed by shape name, each with a `type` and kind-specific
//!   `members` / `member` / `key` / `value` references (`{"shape": ...}`)
//!
//! ## Usage
//! ```rust,ignore
//! use shape_model_generator_parser::botocore::BotocoreParser;
//!
//! let parser = BotocoreParser::from_file("botocore/data/iam/2010-05-08/service-2.json", "iam")?;
//! let schema = parser.parse()?;
//! ```

mod converter;
mod parser;
mod types;

pub use parser::BotocoreParser;
pub use types::*;
