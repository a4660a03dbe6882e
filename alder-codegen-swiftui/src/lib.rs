//! SwiftUI source generator for the alder UI generator.
//!
//! This crate unparses an [`alder_ir`] view-tree module into SwiftUI source
//! text. Generation is deterministic: identical trees and metadata always
//! produce byte-identical output, so a module can be rendered repeatedly
//! (or concurrently with other modules) without surprises.
//!
//! # Usage
//!
//! ```
//! use alder_codegen::ModuleCodegen;
//! use alder_codegen_swiftui::Generator;
//! use alder_ir::{Metadata, Module, ViewNode};
//!
//! let module = Module::new(
//!     Metadata::new("com.example.greeting"),
//!     ViewNode::vstack(ViewNode::text("Hello, World!")),
//! );
//! let generator = Generator::new(&module);
//!
//! // Preview the file without writing
//! let file = generator.preview();
//! assert!(file.content.contains("createDynamicView"));
//! ```
//!
//! # Generated Output
//!
//! Each module becomes a single `.swift` compilation unit:
//!
//! - a header comment with the module's id, version, and author
//! - `import SwiftUI`
//! - a `DynamicView` wrapper struct whose body is the unparsed tree
//! - the exported `createDynamicView` entry point returning a boxed handle
//!
//! The entry-point symbol and signature are a fixed contract; dynamic
//! loaders locate the function by exact name with no further negotiation.

mod chain;
mod module;
mod naming;
mod renderer;

pub use alder_codegen::{ModuleCodegen, SourceFile};
pub use chain::ModifierChain;
pub use module::{ENTRY_POINT, Generator, WRAPPER_TYPE};
pub use renderer::render_node;
