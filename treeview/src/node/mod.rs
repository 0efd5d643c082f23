mod arena;

pub(crate) use arena::Arena;

use crate::text::TextValue;

/// Handle to a node in a [`Tree`](crate::Tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Folder,
    Entry,
}

/// Where a new node goes relative to an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relationship {
    FirstChild,
    NextSibling,
}

/// One row of the tree, or the invisible root.
#[derive(Debug)]
pub struct Node<D> {
    pub(crate) kind: NodeKind,
    pub(crate) expanded: bool,
    pub(crate) selected: bool,

    /// Height of this row plus, while expanded, everything shown below it.
    pub(crate) height: i32,
    pub(crate) inset: i32,

    pub(crate) parent: Option<NodeId>,
    pub(crate) prev_sibling: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
    pub(crate) first_child: Option<NodeId>,

    pub(crate) text: TextValue,
    /// Secondary field values; always empty for folders and the root.
    pub(crate) fields: Vec<TextValue>,

    pub(crate) data: Option<D>,
}

impl<D> Node<D> {
    pub(crate) fn root(inset: i32) -> Self {
        Self {
            kind: NodeKind::Root,
            expanded: true,
            selected: false,
            height: 0,
            inset,
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            first_child: None,
            text: TextValue::default(),
            fields: Vec::new(),
            data: None,
        }
    }

    pub(crate) fn new(
        kind: NodeKind,
        line_height: i32,
        text: TextValue,
        fields: Vec<TextValue>,
        data: D,
    ) -> Self {
        Self {
            kind,
            expanded: false,
            selected: false,
            height: line_height,
            inset: 0,
            parent: None,
            prev_sibling: None,
            next_sibling: None,
            first_child: None,
            text,
            fields,
            data: Some(data),
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn inset(&self) -> i32 {
        self.inset
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }

    pub fn prev_sibling(&self) -> Option<NodeId> {
        self.prev_sibling
    }

    /// Primary (title) text.
    pub fn text(&self) -> &TextValue {
        &self.text
    }

    /// Secondary field values of an entry, in schema order.
    pub fn fields(&self) -> &[TextValue] {
        &self.fields
    }

    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    /// Height of the node's own rows: one row, or for an entry its primary
    /// row plus any expanded field rows.
    pub(crate) fn row_height(&self, line_height: i32) -> i32 {
        match self.kind {
            NodeKind::Entry => self.height,
            _ => line_height,
        }
    }
}
