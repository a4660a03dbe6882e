//! Compilation-unit generation for view-tree modules.
//!
//! A generated unit is a single Swift source file: a metadata header
//! comment, the framework import, a wrapper view struct, and the exported
//! entry-point function. The entry-point symbol name and zero-argument,
//! opaque-handle signature are a fixed contract; dynamic loaders resolve
//! the symbol by exact name.

use alder_codegen::{CodeBuilder, ModuleCodegen, SourceFile};
use alder_ir::Module;

use crate::naming::module_file_stem;
use crate::renderer::render_node;

/// The exported symbol every generated unit must define.
pub const ENTRY_POINT: &str = "createDynamicView";

/// The wrapper view type every generated unit declares.
pub const WRAPPER_TYPE: &str = "DynamicView";

/// SwiftUI code generator for a single module.
pub struct Generator<'a> {
    module: &'a Module,
}

impl ModuleCodegen for Generator<'_> {
    fn framework(&self) -> &'static str {
        "swiftui"
    }

    fn file_extension(&self) -> &'static str {
        "swift"
    }

    fn preview(&self) -> SourceFile {
        let stem = module_file_stem(&self.module.metadata().id);
        SourceFile::new(format!("{stem}.swift"), self.render())
    }
}

impl<'a> Generator<'a> {
    /// Create a generator over a constructed module.
    pub fn new(module: &'a Module) -> Self {
        Self { module }
    }

    /// Render the full compilation unit.
    ///
    /// Pure function of the module: repeated calls yield byte-identical
    /// output.
    pub fn render(&self) -> String {
        let meta = self.module.metadata();
        let body = render_node(self.module.content());

        CodeBuilder::swift()
            // Header comment block with the metadata triple.
            .line("//")
            .line(&format!("//  Module: {}", meta.id))
            .line(&format!("//  Version: {}", meta.version))
            .line(&format!("//  Author: {}", meta.author))
            .line("//")
            .blank()
            .line("import SwiftUI")
            .blank()
            .block(&format!("struct {WRAPPER_TYPE}: View {{"), "}", |b| {
                b.block("var body: some View {", "}", |b| b.lines(&body))
            })
            .blank()
            .line(&format!("@_cdecl(\"{ENTRY_POINT}\")"))
            .block(
                &format!("public func {ENTRY_POINT}() -> UnsafeMutableRawPointer {{"),
                "}",
                |b| {
                    b.line(&format!("let view = AnyView({WRAPPER_TYPE}())"))
                        .line("return Unmanaged.passRetained(ViewHandle(view)).toOpaque()")
                },
            )
            .blank()
            .block("final class ViewHandle {", "}", |b| {
                b.line("let view: AnyView")
                    .blank()
                    .block("init(_ view: AnyView) {", "}", |b| {
                        b.line("self.view = view")
                    })
            })
            .build()
    }
}
