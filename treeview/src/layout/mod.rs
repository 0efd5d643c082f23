//! Incremental row-height bookkeeping.
//!
//! Every node keeps `height = own rows + (expanded ? heights of children : 0)`.
//! Expanding, contracting, inserting and deleting only touch the changed node
//! and the chain of ancestors that actually include it, stopping at the first
//! collapsed one.

mod rect;

pub use rect::Rect;

use crate::error::Result;
use crate::node::{NodeId, NodeKind};
use crate::tree::Tree;
use crate::walk::{walk_mut, Walk, WalkMode};

impl<D> Tree<D> {
    /// Show a folder's children or an entry's secondary fields.
    pub fn expand(&mut self, id: NodeId) -> Result<()> {
        let node = self.get(id)?;
        if node.kind == NodeKind::Root {
            log::warn!("[layout] tried to expand the root");
            return Ok(());
        }
        if node.expanded {
            log::warn!("[layout] tried to expand an expanded node {id:?}");
            return Ok(());
        }
        // Contract only reaches visible descendants, so nothing hidden may be expanded.
        if !self.is_visible(id) {
            log::warn!("[layout] tried to expand hidden node {id:?}");
            return Ok(());
        }

        let additional_height: i32 = match node.kind {
            NodeKind::Folder => {
                if node.first_child.is_none() {
                    return Ok(());
                }
                self.children(id).map(|child| self.nodes[child].height).sum()
            }
            _ => self.metrics.line_height * node.fields.len() as i32,
        };

        let parent = {
            let node = &mut self.nodes[id];
            node.expanded = true;
            node.height += additional_height;
            node.parent
        };
        self.propagate(parent, additional_height);
        self.measure_revealed(id);
        log::trace!("[layout] expanded {id:?} by {additional_height}");
        Ok(())
    }

    /// Collapse a node and every expanded node shown below it.
    pub fn contract(&mut self, id: NodeId) -> Result<()> {
        let node = self.get(id)?;
        if node.kind == NodeKind::Root {
            log::warn!("[layout] tried to contract the root");
            return Ok(());
        }
        if !node.expanded {
            log::warn!("[layout] tried to contract a contracted node {id:?}");
            return Ok(());
        }

        let expanded: Vec<NodeId> = Walk::new(&self.nodes, id, WalkMode::Visible)
            .filter(|(_, n)| n.expanded)
            .map(|(child, _)| child)
            .collect();

        // Deepest first, so each shrink stops at a still-expanded parent.
        for child in expanded.into_iter().rev() {
            self.contract_one(child);
        }
        self.contract_one(id);
        Ok(())
    }

    /// Expand a collapsed node or contract an expanded one.
    pub fn toggle(&mut self, id: NodeId) -> Result<()> {
        if self.get(id)?.expanded {
            self.contract(id)
        } else {
            self.expand(id)
        }
    }

    fn contract_one(&mut self, id: NodeId) {
        let line_height = self.metrics.line_height;
        let (parent, reduction) = {
            let node = &mut self.nodes[id];
            let reduction = node.height - line_height;
            debug_assert!(reduction >= 0);
            node.expanded = false;
            node.height = line_height;
            (node.parent, reduction)
        };
        self.propagate(parent, -reduction);
    }

    /// Apply a height change below `from` to `from` and its ancestors, up to
    /// the first one that is collapsed and so does not include it.
    pub(crate) fn propagate(&mut self, from: Option<NodeId>, delta: i32) {
        if delta == 0 {
            return;
        }
        let mut cursor = from;
        while let Some(id) = cursor {
            let node = &mut self.nodes[id];
            if !node.expanded {
                break;
            }
            node.height += delta;
            cursor = node.parent;
        }
    }

    /// Measure any text that has just become visible below `id`.
    fn measure_revealed(&mut self, id: NodeId) {
        let measure = &*self.measure;
        let style = &self.measure_style;
        let expanded_entry = {
            let node = &self.nodes[id];
            node.kind == NodeKind::Entry && node.expanded
        };
        if expanded_entry {
            for value in &mut self.nodes[id].fields {
                value.ensure_measured(measure, style);
            }
            return;
        }

        walk_mut(&mut self.nodes, id, WalkMode::Visible, |_, node| {
            node.text.ensure_measured(measure, style);
            if node.expanded {
                for value in &mut node.fields {
                    value.ensure_measured(measure, style);
                }
            }
            std::ops::ControlFlow::Continue(())
        });
    }
}
