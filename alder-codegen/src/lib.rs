//! Shared code generation utilities for the alder UI generator.
//!
//! This crate provides the framework-agnostic building blocks used by
//! framework-specific generators (e.g., `alder-codegen-swiftui`):
//!
//! - [`CodeBuilder`] / [`Indent`] - fluent assembly of indented source text
//! - [`escape`] - string-literal escaping for embedded content
//! - [`SourceFile`] / [`write_source`] - generated-file value and writer
//! - [`ModuleCodegen`] - the trait every framework generator implements

pub mod escape;

mod code_builder;
mod file;
mod language;

pub use code_builder::{CodeBuilder, Indent};
pub use file::{SourceFile, write_source};
pub use language::ModuleCodegen;
