//! Recursive unparser from view-tree nodes to SwiftUI syntax.

use alder_codegen::{CodeBuilder, escape::quote};
use alder_ir::ViewNode;

use crate::chain::ModifierChain;

/// Unparse a node (recursively) into SwiftUI source text.
///
/// The result has no trailing newline; containers embed child output by
/// re-indenting whole rendered chunks. Rendering is total and a pure
/// function of the tree: no validation, no I/O, no locale dependence.
///
/// Text modifiers are emitted in a fixed order (font, foregroundColor,
/// bold, italic) independent of the order the builder applied them; the
/// tree records field values, not call order.
pub fn render_node(node: &ViewNode) -> String {
    match node {
        ViewNode::Text {
            content,
            font,
            color,
            bold,
            italic,
        } => ModifierChain::new("Text")
            .arg(quote(content))
            .call_opt("font", font.map(|f| format!(".{}", f.keyword())))
            .call_opt(
                "foregroundColor",
                color.map(|c| format!(".{}", c.keyword())),
            )
            .call_if(*bold, "bold")
            .call_if(*italic, "italic")
            .build(),
        // The action closure is not representable as text; a placeholder
        // comment stands in for the body.
        ViewNode::Button { label, .. } => finish(
            CodeBuilder::swift().block(
                "Button(action: { /* action not serialized */ }) {",
                "}",
                |b| b.lines(&render_node(label)),
            ),
        ),
        ViewNode::VStack {
            alignment,
            spacing,
            child,
        } => render_stack("VStack", alignment.keyword(), *spacing, child),
        ViewNode::HStack {
            alignment,
            spacing,
            child,
        } => render_stack("HStack", alignment.keyword(), *spacing, child),
        ViewNode::Tuple2 { first, second } => {
            format!("{}\n{}", render_node(first), render_node(second))
        }
        ViewNode::Tuple3 {
            first,
            second,
            third,
        } => format!(
            "{}\n{}\n{}",
            render_node(first),
            render_node(second),
            render_node(third)
        ),
        // Only the taken side was recorded; no marker survives in output.
        ViewNode::Either { branch } => render_node(branch.node()),
        ViewNode::Optional { inner } => match inner {
            Some(node) => render_node(node),
            None => "EmptyView()".to_string(),
        },
        ViewNode::List { items } => finish(CodeBuilder::swift().block("VStack {", "}", |b| {
            b.each(items, |b, item| b.lines(&render_node(item)))
        })),
    }
}

fn render_stack(kind: &str, alignment: &str, spacing: Option<f64>, child: &ViewNode) -> String {
    let header = match spacing {
        // f64 Display drops a whole value's fractional part: 8.0 -> "8".
        Some(s) => format!("{kind}(alignment: .{alignment}, spacing: {s}) {{"),
        None => format!("{kind}(alignment: .{alignment}) {{"),
    };
    finish(
        CodeBuilder::swift().block(&header, "}", |b| b.lines(&render_node(child))),
    )
}

/// Drop the trailing newline CodeBuilder appends to its last line.
fn finish(builder: CodeBuilder) -> String {
    let mut s = builder.build();
    if s.ends_with('\n') {
        s.pop();
    }
    s
}
