//! Selector matching algorithm.

use std::collections::HashSet;
use std::hash::Hash;

use super::{Combinator, PseudoClass, Selector, SelectorList, SelectorPart, TypeSelector};

/// Read-only view of a labeled tree that selectors can be matched against.
///
/// Node handles are cheap copies; the matcher never stores them beyond a
/// single call.
pub trait StyleTree {
    /// Handle to one node of the tree.
    type Node: Copy + Eq + Hash;

    /// The node's element name, or `None` for an anonymous node.
    fn element_name(&self, node: Self::Node) -> Option<&str>;

    /// Whether `class` is one of the node's classes.
    fn has_class(&self, node: Self::Node, class: &str) -> bool;

    /// The node's parent; `None` for the root.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Number of children of `node`.
    fn child_count(&self, node: Self::Node) -> usize;

    /// The child at `index`, in document order.
    fn nth_child(&self, node: Self::Node, index: usize) -> Option<Self::Node>;

    /// Zero-based position of `node` among its parent's children.
    fn sibling_index(&self, node: Self::Node) -> usize;

    /// The sibling immediately before `node`.
    fn previous_sibling(&self, node: Self::Node) -> Option<Self::Node> {
        let parent = self.parent(node)?;
        let index = self.sibling_index(node).checked_sub(1)?;
        self.nth_child(parent, index)
    }

    /// Whether `node` has a parent and comes first among its siblings.
    fn is_first_child(&self, node: Self::Node) -> bool {
        self.parent(node).is_some() && self.sibling_index(node) == 0
    }

    /// Whether `node` has a parent and comes last among its siblings.
    fn is_last_child(&self, node: Self::Node) -> bool {
        self.parent(node)
            .is_some_and(|parent| self.sibling_index(node) + 1 == self.child_count(parent))
    }

    /// Children of `node` in document order.
    fn children(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> {
        (0..self.child_count(node)).filter_map(move |index| self.nth_child(node, index))
    }
}

/// Selector matching engine.
pub struct SelectorMatcher;

impl SelectorMatcher {
    /// Check if a compound selector matches the node itself.
    pub fn part_matches<T: StyleTree>(tree: &T, part: &SelectorPart, node: T::Node) -> bool {
        // Check type selector
        if let Some(TypeSelector::Element(name)) = &part.type_selector
            && tree.element_name(node) != Some(name.as_str())
        {
            return false;
        }

        // Check class selectors (all must match)
        if !part.classes.iter().all(|class| tree.has_class(node, class)) {
            return false;
        }

        match part.pseudo_class {
            Some(PseudoClass::FirstChild) => tree.is_first_child(node),
            Some(PseudoClass::LastChild) => tree.is_last_child(node),
            None => true,
        }
    }

    /// Check if a complex selector matches, walking it right to left.
    pub fn matches<T: StyleTree>(tree: &T, selector: &Selector, node: T::Node) -> bool {
        match selector.parts.len() {
            0 => false,
            len => Self::matches_from(tree, selector, len - 1, node, &mut HashSet::new()),
        }
    }

    /// Check if any selector of the list matches.
    pub fn matches_any<T: StyleTree>(tree: &T, list: &SelectorList, node: T::Node) -> bool {
        list.iter().any(|selector| Self::matches(tree, selector, node))
    }

    /// Match `selector.parts[..=index]` with `parts[index]` anchored at `node`.
    ///
    /// `failed` remembers `(index, node)` pairs already known not to match, so
    /// each pair is explored at most once per call to [`SelectorMatcher::matches`].
    fn matches_from<T: StyleTree>(
        tree: &T,
        selector: &Selector,
        index: usize,
        node: T::Node,
        failed: &mut HashSet<(usize, T::Node)>,
    ) -> bool {
        if failed.contains(&(index, node)) {
            return false;
        }
        let matched = Self::matches_chain(tree, selector, index, node, failed);
        if !matched {
            failed.insert((index, node));
        }
        matched
    }

    fn matches_chain<T: StyleTree>(
        tree: &T,
        selector: &Selector,
        index: usize,
        node: T::Node,
        failed: &mut HashSet<(usize, T::Node)>,
    ) -> bool {
        if !Self::part_matches(tree, &selector.parts[index], node) {
            return false;
        }
        if index == 0 {
            return true;
        }

        match selector.combinators[index - 1] {
            Combinator::Child => tree
                .parent(node)
                .is_some_and(|parent| Self::matches_from(tree, selector, index - 1, parent, failed)),
            Combinator::AdjacentSibling => tree
                .previous_sibling(node)
                .is_some_and(|prev| Self::matches_from(tree, selector, index - 1, prev, failed)),
            Combinator::Descendant => {
                // Nearest ancestor first; farther ones are tried if the rest of
                // the chain fails from there.
                let mut ancestor = tree.parent(node);
                while let Some(candidate) = ancestor {
                    if Self::matches_from(tree, selector, index - 1, candidate, failed) {
                        return true;
                    }
                    ancestor = tree.parent(candidate);
                }
                false
            }
        }
    }
}

/// Every node under `root` (inclusive) matched by `list`, in pre-order.
pub fn query<T: StyleTree>(tree: &T, root: T::Node, list: &SelectorList) -> Vec<T::Node> {
    let mut matched = Vec::new();
    let mut stack = vec![root];
    let mut visited = 0usize;
    while let Some(node) = stack.pop() {
        visited += 1;
        if SelectorMatcher::matches_any(tree, list, node) {
            matched.push(node);
        }
        let first = stack.len();
        stack.extend(tree.children(node));
        stack[first..].reverse();
    }
    tracing::trace!("selector \"{}\" matched {} of {} nodes", list, matched.len(), visited);
    matched
}
