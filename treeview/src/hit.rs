//! Pointer hit testing and dispatch.
//!
//! Rows are located by walking the visible tree and summing row heights the
//! same way [`Tree::redraw`] does, so a point always maps to the row painted
//! under it.

use crate::event::{MouseState, NodeMsg};
use crate::layout::Rect;
use crate::node::{NodeId, NodeKind};
use crate::tree::Tree;

/// A visible row found under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowHit {
    pub node: NodeId,
    /// Top of the row, in tree coordinates.
    pub top: i32,
    /// Row height, including an expanded entry's field rows.
    pub height: i32,
    /// The point is over the expand/contract toggle.
    pub on_toggle: bool,
}

impl<D> Tree<D> {
    /// Find the visible row containing `(x, y)`, in tree coordinates.
    pub fn row_at(&self, x: i32, y: i32) -> Option<RowHit> {
        if y < 0 {
            return None;
        }
        let line_height = self.metrics.line_height;
        let mut current_y = 0;
        for (id, node) in self.visible() {
            let height = node.row_height(line_height);
            if y >= current_y + height {
                current_y += height;
                continue;
            }
            let on_toggle = x >= node.inset - 1 && x < node.inset + self.metrics.furniture_width;
            return Some(RowHit {
                node: id,
                top: current_y,
                height,
                on_toggle,
            });
        }
        None
    }

    /// Full-width rectangle of a visible row, in tree coordinates.
    pub fn row_rect(&self, id: NodeId) -> Option<Rect> {
        let line_height = self.metrics.line_height;
        let mut current_y = 0;
        for (visited, node) in self.visible() {
            let height = node.row_height(line_height);
            if visited == id {
                return Some(Rect::new(0, current_y, self.metrics.redraw_max, height));
            }
            current_y += height;
        }
        None
    }

    /// Handle a pointer event at `(x, y)`, in tree coordinates.
    ///
    /// At most one row is affected. If anything visibly changed, the host
    /// window gets a single redraw request covering it.
    pub fn mouse_action(&mut self, mouse: MouseState, x: i32, y: i32) {
        let Some(hit) = self.row_at(x, y) else {
            return;
        };
        let (kind, selected) = {
            let node = &self.nodes[hit.node];
            (node.kind, node.selected)
        };
        let click = mouse.is_click();
        let redraw_max = self.metrics.redraw_max;

        let mut dirty: Option<Rect> = None;
        let mut select = false;

        if click && ((kind == NodeKind::Folder && mouse.double_click) || hit.on_toggle) {
            dirty = self.clear_selection();

            let old_height = self.height();
            if let Err(e) = self.toggle(hit.node) {
                log::warn!("[input] toggle failed: {e}");
            }
            let bottom = old_height.max(self.height());
            dirty = Some(union(dirty, Rect::from_edges(0, hit.top, redraw_max, bottom)));
            log::debug!("[input] toggled {:?}", hit.node);
        } else if kind == NodeKind::Entry && mouse.double_click && click {
            dirty = self.clear_selection();
            log::debug!("[input] launching {:?}", hit.node);
            self.notify(hit.node, NodeMsg::Launch { mouse });
        } else if mouse.press_1 && !mouse.mod_2 && !selected && !hit.on_toggle {
            dirty = self.clear_selection();
            select = true;
        } else if mouse.press_2 || (mouse.press_1 && mouse.mod_2) {
            select = true;
        }

        if select {
            let node = &mut self.nodes[hit.node];
            node.selected = !node.selected;
            let row = Rect::new(0, hit.top, redraw_max, hit.height);
            dirty = Some(union(dirty, row));
        }

        if let Some(rect) = dirty {
            self.window.redraw_request(rect);
        }
    }
}

fn union(a: Option<Rect>, b: Rect) -> Rect {
    match a {
        Some(a) => a.union(b),
        None => b,
    }
}
