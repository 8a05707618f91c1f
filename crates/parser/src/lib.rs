//! Statement trees for editor completions.
//!
//! Parses a document with tree-sitter and keeps only the statements that
//! overlap (or enclose) a requested offset range, each marked compound or
//! atomic. Callers use the result to decide where a completion may stop.
//!
//! # Example
//! ```ignore
//! use stree::StatementTree;
//!
//! let mut tree = StatementTree::create("typescript", text, cursor, text.chars().count())?;
//! tree.build().await?;
//! if let Some(statement) = tree.statement_at(cursor) {
//!   println!("{}", statement.dump_path("", ""));
//! }
//! ```

mod error;
pub mod languages;
mod locate;
mod offsets;
mod parser;
mod reduce;
mod registry;
pub mod rules;
mod tree;


pub use error::TreeError;
pub use tree::{DisposeHandle, StatementNode, StatementTree};

// Re-export for convenience
pub use stree_core::{Config, Language, OffsetEncoding, ParserConfig};
