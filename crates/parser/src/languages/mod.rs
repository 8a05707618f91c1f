//! Statement classification tables, one module per grammar family.
//!
//! JavaScript, TypeScript and their JSX dialects share [`typescript`].

pub mod c;
pub mod cpp;
pub mod csharp;
pub mod go;
pub mod java;
pub mod php;
pub mod python;
pub mod ruby;
pub mod typescript;
