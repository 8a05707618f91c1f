//! Core types shared by the statement tree crates.
//!
//! - [`Language`]: languages with a statement grammar, keyed by editor language id
//! - [`Config`]: layered project/user configuration

mod config;
mod language;

pub use config::{Config, ConfigError, OffsetEncoding, ParserConfig};
pub use language::Language;
