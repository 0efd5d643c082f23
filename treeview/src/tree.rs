//! The tree aggregate: node store, schema and host collaborators.

use crate::config::Metrics;
use crate::error::{Result, TreeError};
use crate::event::{CoreWindow, NodeMsg, TreeCallbacks};
use crate::node::{Arena, Node, NodeId, NodeKind, Relationship};
use crate::schema::{FieldData, Schema};
use crate::text::{TextMeasure, TextValue};
use crate::theme::Theme;
use crate::types::FontStyle;
use crate::walk::{Walk, WalkMode};

/// A tree of folders and entries shown in one host window.
///
/// `D` is the client data attached to each folder and entry. The tree
/// never looks inside it; it is handed back through [`TreeCallbacks`] when
/// its node is deleted or launched.
pub struct Tree<D> {
    pub(crate) nodes: Arena<D>,
    pub(crate) root: NodeId,
    pub(crate) schema: Schema,
    /// Widest "show name" label plus one step.
    pub(crate) field_width: i32,
    pub(crate) metrics: Metrics,
    pub(crate) measure: Box<dyn TextMeasure>,
    pub(crate) measure_style: FontStyle,
    pub(crate) callbacks: Box<dyn TreeCallbacks<D>>,
    pub(crate) window: Box<dyn CoreWindow>,
}

impl<D> Tree<D> {
    /// Create an empty tree showing `schema`, sized by `theme`'s metrics.
    pub fn new(
        mut schema: Schema,
        theme: &Theme,
        measure: Box<dyn TextMeasure>,
        callbacks: Box<dyn TreeCallbacks<D>>,
        window: Box<dyn CoreWindow>,
    ) -> Result<Self> {
        let metrics = theme.metrics;
        let measure_style = *theme.measure_style();

        let mut field_width = 0;
        let flags: Vec<_> = schema.fields().iter().map(|f| f.flags).collect();
        for (label, flags) in schema.labels_mut().iter_mut().zip(flags) {
            label.ensure_measured(&*measure, &measure_style);
            if flags.show_name {
                field_width = field_width.max(label.width());
            }
        }
        field_width += metrics.step_width;

        let mut nodes = Arena::new();
        let root = nodes.insert(Node::root(metrics.root_inset()))?;

        log::debug!(
            "[tree] created with {} fields, field_width={}",
            schema.fields().len(),
            field_width
        );

        Ok(Self {
            nodes,
            root,
            schema,
            field_width,
            metrics,
            measure,
            measure_style,
            callbacks,
            window,
        })
    }

    /// Delete every node, notifying the client of each, then drop the tree.
    pub fn destroy(mut self) {
        while let Some(child) = self.nodes[self.root].first_child {
            if let Err(e) = self.delete_node(child) {
                log::warn!("[tree] destroy stopped early: {e}");
                break;
            }
        }
        log::debug!("[tree] destroyed");
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Total height of all visible rows.
    pub fn height(&self) -> i32 {
        self.nodes[self.root].height
    }

    pub fn field_width(&self) -> i32 {
        self.field_width
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of folders and entries.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<D>> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    pub fn client_data(&self, id: NodeId) -> Option<&D> {
        self.nodes.get(id)?.data.as_ref()
    }

    pub fn client_data_mut(&mut self, id: NodeId) -> Option<&mut D> {
        self.nodes.get_mut(id)?.data.as_mut()
    }

    /// Direct children of `id`, first to last.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let first = self.nodes.get(id).and_then(|n| n.first_child);
        std::iter::successors(first, move |&child| self.nodes[child].next_sibling)
    }

    /// Visible rows in paint order.
    pub fn visible(&self) -> Walk<'_, D> {
        Walk::new(&self.nodes, self.root, WalkMode::Visible)
    }

    /// Nodes strictly below `id`, depth first.
    pub fn walk(&self, id: NodeId, mode: WalkMode) -> Result<Walk<'_, D>> {
        self.get(id)?;
        Ok(Walk::new(&self.nodes, id, mode))
    }

    /// Whether every ancestor of `id` is expanded.
    pub fn is_visible(&self, id: NodeId) -> bool {
        let mut cursor = self.nodes.get(id).and_then(|n| n.parent);
        while let Some(ancestor) = cursor {
            let node = &self.nodes[ancestor];
            if !node.expanded {
                return false;
            }
            cursor = node.parent;
        }
        true
    }

    pub(crate) fn get(&self, id: NodeId) -> Result<&Node<D>> {
        self.nodes.get(id).ok_or(TreeError::StaleNode(id))
    }

    /// Insert a folder titled by `field` next to or under `relation`.
    /// With no relation it becomes the first child of the root.
    pub fn create_folder(
        &mut self,
        relation: Option<NodeId>,
        rel: Relationship,
        field: &FieldData,
        data: D,
    ) -> Result<NodeId> {
        self.schema.check_folder(field)?;

        let node = Node::new(
            NodeKind::Folder,
            self.metrics.line_height,
            TextValue::new(field.value.as_str()),
            Vec::new(),
            data,
        );
        let id = self.insert(node, relation, rel)?;
        log::trace!("[tree] folder {:?} {:?}", id, field.value);
        Ok(id)
    }

    /// Insert an entry carrying every entry field of the schema, in order.
    pub fn create_entry(
        &mut self,
        relation: Option<NodeId>,
        rel: Relationship,
        fields: &[FieldData],
        data: D,
    ) -> Result<NodeId> {
        self.schema.check_entry(fields)?;

        let mut values = Vec::new();
        values.try_reserve_exact(fields.len() - 1)?;
        values.extend(fields[1..].iter().map(|f| TextValue::new(f.value.as_str())));

        let node = Node::new(
            NodeKind::Entry,
            self.metrics.line_height,
            TextValue::new(fields[0].value.as_str()),
            values,
            data,
        );
        let id = self.insert(node, relation, rel)?;
        log::trace!("[tree] entry {:?} {:?}", id, fields[0].value);
        Ok(id)
    }

    /// Replace an entry's field values. Widths of values that are on screen
    /// are measured straight away; the rest are measured when they appear.
    pub fn update_entry(&mut self, entry: NodeId, fields: &[FieldData]) -> Result<()> {
        if self.get(entry)?.kind != NodeKind::Entry {
            return Err(TreeError::bad_parameter("update_entry on a non-entry node"));
        }
        self.schema.check_entry(fields)?;

        let visible = self.is_visible(entry);
        let measure = &*self.measure;
        let style = &self.measure_style;
        let node = &mut self.nodes[entry];

        node.text.set(fields[0].value.as_str());
        if visible {
            node.text.ensure_measured(measure, style);
        }
        let expanded = node.expanded;
        for (value, field) in node.fields.iter_mut().zip(&fields[1..]) {
            value.set(field.value.as_str());
            if visible && expanded {
                value.ensure_measured(measure, style);
            }
        }
        Ok(())
    }

    /// Delete `id` and everything below it, children before parents.
    ///
    /// The subtree's height is removed from its ancestors, and the client
    /// is told about each node as it goes.
    pub fn delete_node(&mut self, id: NodeId) -> Result<()> {
        let node = self.get(id)?;
        if node.kind == NodeKind::Root {
            return Err(TreeError::bad_parameter("the root can only go with its tree"));
        }
        let (parent, height) = (node.parent, node.height);
        self.propagate(parent, -height);

        let mut cursor = id;
        loop {
            while let Some(child) = self.nodes[cursor].first_child {
                cursor = child;
            }
            let parent = self.nodes[cursor].parent;
            self.release(cursor);
            if cursor == id {
                break;
            }
            match parent {
                Some(p) => cursor = p,
                None => break,
            }
        }
        Ok(())
    }

    /// Unlink a childless node, tell the client, and free it.
    fn release(&mut self, id: NodeId) {
        let (parent, prev, next) = {
            let n = &self.nodes[id];
            (n.parent, n.prev_sibling, n.next_sibling)
        };

        match parent {
            Some(p) if self.nodes[p].first_child == Some(id) => self.nodes[p].first_child = next,
            _ => {
                if let Some(prev) = prev {
                    self.nodes[prev].next_sibling = next;
                }
            }
        }
        if let Some(next) = next {
            self.nodes[next].prev_sibling = prev;
        }

        let Some(mut node) = self.nodes.remove(id) else {
            return;
        };
        if let Some(data) = node.data.as_mut() {
            match node.kind {
                NodeKind::Folder => self.callbacks.folder(NodeMsg::Deleted, data),
                NodeKind::Entry => self.callbacks.entry(NodeMsg::Deleted, data),
                NodeKind::Root => {}
            }
        }
    }

    fn insert(&mut self, node: Node<D>, relation: Option<NodeId>, rel: Relationship) -> Result<NodeId> {
        let (relation, rel) = match relation {
            Some(relation) => (relation, rel),
            None => (self.root, Relationship::FirstChild),
        };

        match (rel, self.get(relation)?.kind) {
            (Relationship::FirstChild, NodeKind::Entry) => {
                return Err(TreeError::bad_parameter("an entry cannot have children"));
            }
            (Relationship::NextSibling, NodeKind::Root) => {
                return Err(TreeError::bad_parameter("the root cannot have siblings"));
            }
            _ => {}
        }

        let id = self.nodes.insert(node)?;

        let parent = match rel {
            Relationship::FirstChild => {
                let next = self.nodes[relation].first_child;
                self.nodes[relation].first_child = Some(id);
                self.link(id, relation, None, next);
                relation
            }
            Relationship::NextSibling => {
                let b = &self.nodes[relation];
                let (parent, next) = (b.parent.unwrap_or(self.root), b.next_sibling);
                self.nodes[relation].next_sibling = Some(id);
                self.link(id, parent, Some(relation), next);
                parent
            }
        };

        let height = self.nodes[id].height;
        self.propagate(Some(parent), height);

        if self.is_visible(id) {
            let measure = &*self.measure;
            self.nodes[id].text.ensure_measured(measure, &self.measure_style);
        }
        Ok(id)
    }

    fn link(&mut self, id: NodeId, parent: NodeId, prev: Option<NodeId>, next: Option<NodeId>) {
        if let Some(next) = next {
            self.nodes[next].prev_sibling = Some(id);
        }
        let inset = self.nodes[parent].inset + self.metrics.step_width;
        let node = &mut self.nodes[id];
        node.parent = Some(parent);
        node.prev_sibling = prev;
        node.next_sibling = next;
        node.inset = inset;
    }

    /// Hand a message to the client owning `id`'s data.
    pub(crate) fn notify(&mut self, id: NodeId, msg: NodeMsg) {
        let Some(node) = self.nodes.get_mut(id) else {
            return;
        };
        let kind = node.kind;
        if let Some(data) = node.data.as_mut() {
            match kind {
                NodeKind::Folder => self.callbacks.folder(msg, data),
                NodeKind::Entry => self.callbacks.entry(msg, data),
                NodeKind::Root => {}
            }
        }
    }
}
