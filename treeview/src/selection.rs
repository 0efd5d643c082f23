//! Whole-tree selection queries and commands.
//!
//! Selection lives on the nodes themselves; nothing here caches it.

use std::ops::ControlFlow;

use crate::error::{Result, TreeError};
use crate::layout::Rect;
use crate::node::{NodeId, NodeKind};
use crate::tree::Tree;
use crate::walk::{walk, walk_mut, WalkMode};

impl<D> Tree<D> {
    /// Whether any visible row is selected.
    pub fn has_selection(&self) -> bool {
        walk(&self.nodes, self.root, WalkMode::Visible, |_, node| {
            if node.selected {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    /// Selected visible rows in paint order.
    pub fn selected(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.visible()
            .filter(|(_, node)| node.selected)
            .map(|(id, _)| id)
    }

    /// Deselect every visible row. Returns the area to repaint, or `None`
    /// if nothing was selected.
    pub fn clear_selection(&mut self) -> Option<Rect> {
        self.set_all_selected(false)
    }

    /// Select every visible row. Returns the area to repaint, or `None` if
    /// everything was already selected.
    pub fn select_all(&mut self) -> Option<Rect> {
        self.set_all_selected(true)
    }

    fn set_all_selected(&mut self, selected: bool) -> Option<Rect> {
        let line_height = self.metrics.line_height;
        let mut current_y = 0;
        let mut span: Option<(i32, i32)> = None;

        walk_mut(&mut self.nodes, self.root, WalkMode::Visible, |_, node| {
            let height = node.row_height(line_height);
            current_y += height;

            if node.selected != selected {
                node.selected = selected;
                let top = span.map_or(current_y - height, |(top, _)| top);
                span = Some((top, current_y));
            }
            ControlFlow::Continue(())
        });

        let (top, bottom) = span?;
        log::trace!("[select] set all to {selected}, dirty {top}..{bottom}");
        Some(Rect::from_edges(0, top, self.metrics.redraw_max, bottom))
    }

    /// Set one node's selection flag. Returns whether it changed.
    pub fn set_selected(&mut self, id: NodeId, selected: bool) -> Result<bool> {
        let node = self.nodes.get_mut(id).ok_or(TreeError::StaleNode(id))?;
        if node.kind == NodeKind::Root {
            return Err(TreeError::bad_parameter("the root cannot be selected"));
        }
        let changed = node.selected != selected;
        node.selected = selected;
        Ok(changed)
    }
}
