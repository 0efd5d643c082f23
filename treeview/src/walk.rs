//! Depth-first traversal of a subtree.
//!
//! Every piece of the tree that needs "document order" (selection, contract,
//! painting, hit testing) walks through here, so they all agree on which rows
//! exist and in what order.

use std::ops::ControlFlow;

use crate::node::{Arena, Node, NodeId};

/// Which nodes a walk descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    /// Only the children of expanded nodes.
    Visible,
    /// Every node, collapsed or not.
    Full,
}

/// The node after `node` in a depth-first walk of `root`'s subtree.
///
/// Descends into children when the mode allows, otherwise moves to the next
/// sibling of `node` or of its nearest ancestor below `root` that has one.
pub(crate) fn step<D>(nodes: &Arena<D>, root: NodeId, node: NodeId, mode: WalkMode) -> Option<NodeId> {
    let current = &nodes[node];
    if mode == WalkMode::Full || current.expanded {
        if let Some(child) = current.first_child {
            return Some(child);
        }
    }

    let mut cursor = node;
    while cursor != root {
        let n = &nodes[cursor];
        if let Some(next) = n.next_sibling {
            return Some(next);
        }
        cursor = n.parent?;
    }
    None
}

/// Visit every node strictly below `root`. Returns `true` if `visit` broke
/// out of the walk early.
pub(crate) fn walk<D>(
    nodes: &Arena<D>,
    root: NodeId,
    mode: WalkMode,
    mut visit: impl FnMut(NodeId, &Node<D>) -> ControlFlow<()>,
) -> bool {
    let mut node = root;
    while let Some(next) = step(nodes, root, node, mode) {
        if visit(next, &nodes[next]).is_break() {
            return true;
        }
        node = next;
    }
    false
}

/// Like [`walk`], but `visit` may change the visited node. Descent is
/// decided after `visit` returns, so a node collapsed by the callback is
/// not descended into in [`WalkMode::Visible`].
pub(crate) fn walk_mut<D>(
    nodes: &mut Arena<D>,
    root: NodeId,
    mode: WalkMode,
    mut visit: impl FnMut(NodeId, &mut Node<D>) -> ControlFlow<()>,
) -> bool {
    let mut node = root;
    while let Some(next) = step(nodes, root, node, mode) {
        if visit(next, &mut nodes[next]).is_break() {
            return true;
        }
        node = next;
    }
    false
}

/// Iterator form of a walk.
pub struct Walk<'a, D> {
    nodes: &'a Arena<D>,
    root: NodeId,
    current: NodeId,
    mode: WalkMode,
}

impl<'a, D> Walk<'a, D> {
    pub(crate) fn new(nodes: &'a Arena<D>, root: NodeId, mode: WalkMode) -> Self {
        Self {
            nodes,
            root,
            current: root,
            mode,
        }
    }
}

impl<'a, D> Iterator for Walk<'a, D> {
    type Item = (NodeId, &'a Node<D>);

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let next = step(nodes, self.root, self.current, self.mode)?;
        self.current = next;
        Some((next, &nodes[next]))
    }
}
