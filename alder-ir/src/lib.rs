//! View-tree intermediate representation for the alder UI generator.
//!
//! This crate provides the immutable value types that describe a small
//! declarative UI tree, along with the builder protocol used to assemble
//! them. The types are the single source of truth consumed by the code
//! generators (e.g., `alder-codegen-swiftui`).
//!
//! # Architecture
//!
//! ```text
//! builder calls → ViewNode tree + Metadata → Module → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Immutable once constructed (modifiers return new values)
//! - Framework-agnostic (no target-language syntax concerns)
//! - Self-contained (no shared mutable state between trees)

mod builder;
mod metadata;
mod node;
mod style;

pub use builder::{Group, either, list, optional, pair, triple};
pub use metadata::{Metadata, Module};
pub use node::{Branch, HorizontalAlignment, VerticalAlignment, ViewNode};
pub use style::{Color, Font};
