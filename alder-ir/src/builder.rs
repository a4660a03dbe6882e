//! The builder protocol: combinators that assemble sibling, conditional,
//! optional, and repeated content into a single [`ViewNode`].
//!
//! Declaration order is always preserved. Conditionals are short-circuit:
//! only the taken side's closure is evaluated, and the result records which
//! side was taken. Zero-child composition is not representable; [`Group`]
//! requires its first child at construction.

use crate::node::{Branch, ViewNode};

/// Combine two sibling nodes, preserving declaration order.
pub fn pair(first: ViewNode, second: ViewNode) -> ViewNode {
    ViewNode::Tuple2 {
        first: Box::new(first),
        second: Box::new(second),
    }
}

/// Combine three sibling nodes, preserving declaration order.
pub fn triple(first: ViewNode, second: ViewNode, third: ViewNode) -> ViewNode {
    ViewNode::Tuple3 {
        first: Box::new(first),
        second: Box::new(second),
        third: Box::new(third),
    }
}

/// Evaluate exactly one side of a conditional and record which was taken.
///
/// The untaken closure is never called.
pub fn either<F, G>(condition: bool, if_true: F, if_false: G) -> ViewNode
where
    F: FnOnce() -> ViewNode,
    G: FnOnce() -> ViewNode,
{
    let branch = if condition {
        Branch::First(Box::new(if_true()))
    } else {
        Branch::Second(Box::new(if_false()))
    };
    ViewNode::Either { branch }
}

/// Wrap optionally present content, preserving presence or absence.
pub fn optional(inner: Option<ViewNode>) -> ViewNode {
    ViewNode::Optional {
        inner: inner.map(Box::new),
    }
}

/// Collect repeated content into a list node, preserving iteration order.
pub fn list(items: impl IntoIterator<Item = ViewNode>) -> ViewNode {
    ViewNode::List {
        items: items.into_iter().collect(),
    }
}

impl FromIterator<ViewNode> for ViewNode {
    fn from_iter<I: IntoIterator<Item = ViewNode>>(iter: I) -> Self {
        list(iter)
    }
}

/// Fluent accumulator for sibling composition.
///
/// One child builds to the child itself, two to a tuple pair, three to a
/// tuple triple, and four or more to a list. The first child is required
/// at construction, so an empty group cannot be expressed.
///
/// # Example
///
/// ```
/// use alder_ir::{Group, ViewNode};
///
/// let node = Group::new(ViewNode::text("a"))
///     .add(ViewNode::text("b"))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct Group {
    first: ViewNode,
    rest: Vec<ViewNode>,
}

impl Group {
    /// Start a group with its first child.
    pub fn new(first: ViewNode) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Append a child, preserving declaration order.
    #[allow(clippy::should_implement_trait)]
    pub fn add(mut self, child: ViewNode) -> Self {
        self.rest.push(child);
        self
    }

    /// Conditionally append a child.
    pub fn add_if(self, condition: bool, child: ViewNode) -> Self {
        if condition { self.add(child) } else { self }
    }

    /// Append a child if present.
    pub fn add_opt(self, child: Option<ViewNode>) -> Self {
        match child {
            Some(c) => self.add(c),
            None => self,
        }
    }

    /// Number of accumulated children (always at least one).
    pub fn child_count(&self) -> usize {
        1 + self.rest.len()
    }

    /// Collapse the accumulated children into a single node.
    pub fn build(self) -> ViewNode {
        let Group { first, rest } = self;
        let mut rest = rest.into_iter();
        match (rest.next(), rest.next()) {
            (None, _) => first,
            (Some(second), None) => pair(first, second),
            (Some(second), Some(third)) => match rest.next() {
                None => triple(first, second, third),
                Some(fourth) => {
                    let mut items = vec![first, second, third, fourth];
                    items.extend(rest);
                    ViewNode::List { items }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_preserves_order() {
        let node = pair(ViewNode::text("a"), ViewNode::text("b"));
        match node {
            ViewNode::Tuple2 { first, second } => {
                assert_eq!(*first, ViewNode::text("a"));
                assert_eq!(*second, ViewNode::text("b"));
            }
            _ => panic!("expected Tuple2 variant"),
        }
    }

    #[test]
    fn test_triple_preserves_order() {
        let node = triple(
            ViewNode::text("a"),
            ViewNode::text("b"),
            ViewNode::text("c"),
        );
        match node {
            ViewNode::Tuple3 { first, third, .. } => {
                assert_eq!(*first, ViewNode::text("a"));
                assert_eq!(*third, ViewNode::text("c"));
            }
            _ => panic!("expected Tuple3 variant"),
        }
    }

    #[test]
    fn test_either_takes_first_branch() {
        let node = either(true, || ViewNode::text("yes"), || unreachable!());
        match node {
            ViewNode::Either {
                branch: Branch::First(inner),
            } => assert_eq!(*inner, ViewNode::text("yes")),
            _ => panic!("expected first branch"),
        }
    }

    #[test]
    fn test_either_takes_second_branch() {
        let node = either(false, || unreachable!(), || ViewNode::text("no"));
        match node {
            ViewNode::Either {
                branch: Branch::Second(inner),
            } => assert_eq!(*inner, ViewNode::text("no")),
            _ => panic!("expected second branch"),
        }
    }

    #[test]
    fn test_either_short_circuits() {
        // The untaken closure must never run; unreachable!() would panic.
        let _ = either(true, || ViewNode::text("kept"), || unreachable!());
    }

    #[test]
    fn test_optional_presence() {
        let present = optional(Some(ViewNode::text("x")));
        let absent = optional(None);
        assert_eq!(
            present,
            ViewNode::Optional {
                inner: Some(Box::new(ViewNode::text("x")))
            }
        );
        assert_eq!(absent, ViewNode::Optional { inner: None });
    }

    #[test]
    fn test_list_preserves_iteration_order() {
        let node = list((0..3).map(|i| ViewNode::text(format!("item {i}"))));
        match node {
            ViewNode::List { items } => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0], ViewNode::text("item 0"));
                assert_eq!(items[2], ViewNode::text("item 2"));
            }
            _ => panic!("expected List variant"),
        }
    }

    #[test]
    fn test_from_iterator() {
        let node: ViewNode = vec![ViewNode::text("a"), ViewNode::text("b")]
            .into_iter()
            .collect();
        assert!(matches!(node, ViewNode::List { .. }));
    }

    #[test]
    fn test_group_single_child_unwraps() {
        let node = Group::new(ViewNode::text("only")).build();
        assert_eq!(node, ViewNode::text("only"));
    }

    #[test]
    fn test_group_two_children_is_pair() {
        let node = Group::new(ViewNode::text("a"))
            .add(ViewNode::text("b"))
            .build();
        assert!(matches!(node, ViewNode::Tuple2 { .. }));
    }

    #[test]
    fn test_group_three_children_is_triple() {
        let node = Group::new(ViewNode::text("a"))
            .add(ViewNode::text("b"))
            .add(ViewNode::text("c"))
            .build();
        assert!(matches!(node, ViewNode::Tuple3 { .. }));
    }

    #[test]
    fn test_group_many_children_is_list() {
        let node = Group::new(ViewNode::text("a"))
            .add(ViewNode::text("b"))
            .add(ViewNode::text("c"))
            .add(ViewNode::text("d"))
            .build();
        match node {
            ViewNode::List { items } => assert_eq!(items.len(), 4),
            _ => panic!("expected List variant"),
        }
    }

    #[test]
    fn test_group_conditional_children() {
        let node = Group::new(ViewNode::text("a"))
            .add_if(false, ViewNode::text("skipped"))
            .add_opt(Some(ViewNode::text("b")))
            .add_opt(None)
            .build();
        assert!(matches!(node, ViewNode::Tuple2 { .. }));
    }
}
