//! The view-tree node model.
//!
//! [`ViewNode`] is a closed set of variants covering leaf views (text,
//! button) and structural composition (stacks, tuples, conditional and
//! optional content, lists). Trees are plain immutable values: every
//! fluent method consumes the receiver and returns a new node, so separate
//! trees never share mutable state.

use crate::style::{Color, Font};

/// Horizontal alignment for vertical stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    Leading,
    #[default]
    Center,
    Trailing,
}

impl HorizontalAlignment {
    /// Get the framework keyword for this alignment.
    pub fn keyword(&self) -> &'static str {
        match self {
            HorizontalAlignment::Leading => "leading",
            HorizontalAlignment::Center => "center",
            HorizontalAlignment::Trailing => "trailing",
        }
    }
}

/// Vertical alignment for horizontal stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
}

impl VerticalAlignment {
    /// Get the framework keyword for this alignment.
    pub fn keyword(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "bottom",
        }
    }
}

/// Which side of a conditional was taken during tree construction.
///
/// The untaken side is never evaluated, so only the chosen subtree is
/// recorded here.
#[derive(Debug, Clone, PartialEq)]
pub enum Branch {
    First(Box<ViewNode>),
    Second(Box<ViewNode>),
}

impl Branch {
    /// The subtree recorded for the taken side.
    pub fn node(&self) -> &ViewNode {
        match self {
            Branch::First(node) | Branch::Second(node) => node,
        }
    }
}

/// One element of the declarative view tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewNode {
    /// A text leaf with optional style attributes.
    Text {
        content: String,
        font: Option<Font>,
        color: Option<Color>,
        bold: bool,
        italic: bool,
    },
    /// A button wrapping a label subtree.
    ///
    /// The action tag is opaque to the IR and is never serialized; the
    /// generator emits a placeholder comment in place of the action body.
    Button {
        label: Box<ViewNode>,
        action_tag: Option<String>,
    },
    /// A vertical stack with a single child subtree.
    VStack {
        alignment: HorizontalAlignment,
        spacing: Option<f64>,
        child: Box<ViewNode>,
    },
    /// A horizontal stack with a single child subtree.
    HStack {
        alignment: VerticalAlignment,
        spacing: Option<f64>,
        child: Box<ViewNode>,
    },
    /// Two sibling subtrees in declaration order, no implicit container.
    Tuple2 {
        first: Box<ViewNode>,
        second: Box<ViewNode>,
    },
    /// Three sibling subtrees in declaration order, no implicit container.
    Tuple3 {
        first: Box<ViewNode>,
        second: Box<ViewNode>,
        third: Box<ViewNode>,
    },
    /// The result of a conditional builder expression.
    Either { branch: Branch },
    /// Optionally present content; absence serializes to an empty view.
    Optional { inner: Option<Box<ViewNode>> },
    /// Repeated content in iteration order.
    List { items: Vec<ViewNode> },
}

impl ViewNode {
    /// Create a text leaf with no style attributes.
    pub fn text(content: impl Into<String>) -> Self {
        ViewNode::Text {
            content: content.into(),
            font: None,
            color: None,
            bold: false,
            italic: false,
        }
    }

    /// Create a button with the given label subtree and no action tag.
    pub fn button(label: ViewNode) -> Self {
        ViewNode::Button {
            label: Box::new(label),
            action_tag: None,
        }
    }

    /// Create a button carrying an opaque action tag.
    ///
    /// The tag identifies the action to the host at load time; it does not
    /// appear in generated source.
    pub fn button_tagged(label: ViewNode, tag: impl Into<String>) -> Self {
        ViewNode::Button {
            label: Box::new(label),
            action_tag: Some(tag.into()),
        }
    }

    /// Create a vertical stack with center alignment and no spacing.
    pub fn vstack(child: ViewNode) -> Self {
        ViewNode::VStack {
            alignment: HorizontalAlignment::default(),
            spacing: None,
            child: Box::new(child),
        }
    }

    /// Create a horizontal stack with center alignment and no spacing.
    pub fn hstack(child: ViewNode) -> Self {
        ViewNode::HStack {
            alignment: VerticalAlignment::default(),
            spacing: None,
            child: Box::new(child),
        }
    }

    /// Set the alignment of a vertical stack.
    ///
    /// Returns the receiver unchanged for any other variant.
    pub fn aligned(self, alignment: HorizontalAlignment) -> Self {
        match self {
            ViewNode::VStack { spacing, child, .. } => ViewNode::VStack {
                alignment,
                spacing,
                child,
            },
            other => other,
        }
    }

    /// Set the alignment of a horizontal stack.
    ///
    /// Returns the receiver unchanged for any other variant.
    pub fn aligned_vertical(self, alignment: VerticalAlignment) -> Self {
        match self {
            ViewNode::HStack { spacing, child, .. } => ViewNode::HStack {
                alignment,
                spacing,
                child,
            },
            other => other,
        }
    }

    /// Set the spacing of a stack.
    ///
    /// Returns the receiver unchanged for non-stack variants.
    pub fn spacing(self, value: f64) -> Self {
        match self {
            ViewNode::VStack {
                alignment, child, ..
            } => ViewNode::VStack {
                alignment,
                spacing: Some(value),
                child,
            },
            ViewNode::HStack {
                alignment, child, ..
            } => ViewNode::HStack {
                alignment,
                spacing: Some(value),
                child,
            },
            other => other,
        }
    }

    /// Mark a text leaf as bold.
    ///
    /// Modifiers only affect [`ViewNode::Text`]; any other variant is
    /// returned unchanged. Each modifier replaces exactly one field, so
    /// call order never changes the resulting value.
    pub fn bold(self) -> Self {
        match self {
            ViewNode::Text {
                content,
                font,
                color,
                italic,
                ..
            } => ViewNode::Text {
                content,
                font,
                color,
                bold: true,
                italic,
            },
            other => other,
        }
    }

    /// Mark a text leaf as italic.
    pub fn italic(self) -> Self {
        match self {
            ViewNode::Text {
                content,
                font,
                color,
                bold,
                ..
            } => ViewNode::Text {
                content,
                font,
                color,
                bold,
                italic: true,
            },
            other => other,
        }
    }

    /// Set the font of a text leaf (last write wins).
    pub fn font(self, font: Font) -> Self {
        match self {
            ViewNode::Text {
                content,
                color,
                bold,
                italic,
                ..
            } => ViewNode::Text {
                content,
                font: Some(font),
                color,
                bold,
                italic,
            },
            other => other,
        }
    }

    /// Set the foreground color of a text leaf (last write wins).
    pub fn foreground_color(self, color: Color) -> Self {
        match self {
            ViewNode::Text {
                content,
                font,
                bold,
                italic,
                ..
            } => ViewNode::Text {
                content,
                font,
                color: Some(color),
                bold,
                italic,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_defaults() {
        let node = ViewNode::text("hello");
        match node {
            ViewNode::Text {
                content,
                font,
                color,
                bold,
                italic,
            } => {
                assert_eq!(content, "hello");
                assert_eq!(font, None);
                assert_eq!(color, None);
                assert!(!bold);
                assert!(!italic);
            }
            _ => panic!("expected Text variant"),
        }
    }

    #[test]
    fn test_modifiers_are_copy_on_write() {
        let plain = ViewNode::text("hi");
        let styled = plain.clone().bold().font(Font::Headline);

        // The original value is untouched.
        assert_eq!(plain, ViewNode::text("hi"));
        match styled {
            ViewNode::Text { font, bold, .. } => {
                assert_eq!(font, Some(Font::Headline));
                assert!(bold);
            }
            _ => panic!("expected Text variant"),
        }
    }

    #[test]
    fn test_modifier_order_is_irrelevant() {
        let a = ViewNode::text("x").bold().italic();
        let b = ViewNode::text("x").italic().bold();
        assert_eq!(a, b);
    }

    #[test]
    fn test_font_last_write_wins() {
        let node = ViewNode::text("x").font(Font::Title).font(Font::Body);
        match node {
            ViewNode::Text { font, .. } => assert_eq!(font, Some(Font::Body)),
            _ => panic!("expected Text variant"),
        }
    }

    #[test]
    fn test_modifiers_ignore_non_text() {
        let stack = ViewNode::vstack(ViewNode::text("x"));
        let same = stack.clone().bold().italic().foreground_color(Color::Red);
        assert_eq!(stack, same);
    }

    #[test]
    fn test_stack_configuration() {
        let node = ViewNode::vstack(ViewNode::text("x"))
            .aligned(HorizontalAlignment::Leading)
            .spacing(8.0);
        match node {
            ViewNode::VStack {
                alignment, spacing, ..
            } => {
                assert_eq!(alignment, HorizontalAlignment::Leading);
                assert_eq!(spacing, Some(8.0));
            }
            _ => panic!("expected VStack variant"),
        }
    }

    #[test]
    fn test_vertical_alignment_ignores_vstack() {
        let node = ViewNode::vstack(ViewNode::text("x")).aligned_vertical(VerticalAlignment::Top);
        match node {
            ViewNode::VStack { alignment, .. } => {
                assert_eq!(alignment, HorizontalAlignment::Center)
            }
            _ => panic!("expected VStack variant"),
        }
    }

    #[test]
    fn test_alignment_keywords() {
        assert_eq!(HorizontalAlignment::Leading.keyword(), "leading");
        assert_eq!(HorizontalAlignment::Center.keyword(), "center");
        assert_eq!(HorizontalAlignment::Trailing.keyword(), "trailing");
        assert_eq!(VerticalAlignment::Top.keyword(), "top");
        assert_eq!(VerticalAlignment::Bottom.keyword(), "bottom");
    }

    #[test]
    fn test_button_tag_is_opaque() {
        let node = ViewNode::button_tagged(ViewNode::text("Tap"), "primary-action");
        match node {
            ViewNode::Button { action_tag, .. } => {
                assert_eq!(action_tag.as_deref(), Some("primary-action"))
            }
            _ => panic!("expected Button variant"),
        }
    }

    #[test]
    fn test_branch_node_access() {
        let branch = Branch::First(Box::new(ViewNode::text("yes")));
        assert_eq!(branch.node(), &ViewNode::text("yes"));
    }
}
