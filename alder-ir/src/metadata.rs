//! Module metadata and the top-level module wrapper.
//!
//! A [`Module`] pairs a constructed view tree with its [`Metadata`] triple.
//! The metadata is stored as a directly reachable field, so extraction is
//! a plain accessor that always succeeds. The `id` is the stable identity
//! used by the downstream publishing pipeline; it is opaque here and never
//! validated for format.

use serde::{Deserialize, Serialize};

use crate::node::ViewNode;

const DEFAULT_VERSION: &str = "1.0.0";
const DEFAULT_AUTHOR: &str = "Unknown";
const FALLBACK_ID: &str = "unknown";

/// The identifying triple attached to a generated module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Stable module identity (e.g., `com.example.greeting`). Opaque.
    pub id: String,
    /// Module version, defaults to `1.0.0`.
    pub version: String,
    /// Module author, defaults to `Unknown`.
    pub author: String,
}

impl Metadata {
    /// Create metadata with the given id and default version/author.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: DEFAULT_VERSION.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
        }
    }

    /// Set the version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Returns true if this is the fallback triple produced when no real
    /// metadata was supplied. Callers that require exact metadata should
    /// check this before trusting the values.
    pub fn is_fallback(&self) -> bool {
        self == &Self::default()
    }
}

impl Default for Metadata {
    /// The documented fallback triple: `{unknown, 1.0.0, Unknown}`.
    fn default() -> Self {
        Self::new(FALLBACK_ID)
    }
}

/// A view tree paired with its metadata; the unit of code generation.
///
/// Modules are immutable once constructed and carry no shared state, so
/// independent modules can be generated concurrently without
/// synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    meta: Metadata,
    content: ViewNode,
}

impl Module {
    /// Create a module from explicit metadata and a content tree.
    pub fn new(meta: Metadata, content: ViewNode) -> Self {
        Self { meta, content }
    }

    /// Create a module with the fallback metadata triple.
    pub fn with_defaults(content: ViewNode) -> Self {
        Self {
            meta: Metadata::default(),
            content,
        }
    }

    /// The metadata triple. Always succeeds; if the module was built
    /// without explicit metadata this is the fallback triple.
    pub fn metadata(&self) -> &Metadata {
        &self.meta
    }

    /// The root content node.
    pub fn content(&self) -> &ViewNode {
        &self.content
    }

    /// Split the module into its metadata and content.
    pub fn into_parts(self) -> (Metadata, ViewNode) {
        (self.meta, self.content)
    }
}
