#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use treeview::{
    CellMeasure, CoreWindow, FieldData, FieldDesc, FieldFlags, FontStyle, IconKind, NodeMsg,
    PlotStyle, Plotter, Rect, Rgb, Schema, SystemColours, Theme, Tree, TreeCallbacks, TreeConfig,
};

/// Client data used by the tests: a name to report back.
pub type Data = &'static str;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Folder(NodeMsg, Data),
    Entry(NodeMsg, Data),
}

#[derive(Clone, Default)]
pub struct Recorder {
    pub notices: Rc<RefCell<Vec<Notice>>>,
    pub redraws: Rc<RefCell<Vec<Rect>>>,
}

impl Recorder {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn redraws(&self) -> Vec<Rect> {
        self.redraws.borrow().clone()
    }

    pub fn clear(&self) {
        self.notices.borrow_mut().clear();
        self.redraws.borrow_mut().clear();
    }
}

impl TreeCallbacks<Data> for Recorder {
    fn folder(&mut self, msg: NodeMsg, data: &mut Data) {
        self.notices.borrow_mut().push(Notice::Folder(msg, *data));
    }

    fn entry(&mut self, msg: NodeMsg, data: &mut Data) {
        self.notices.borrow_mut().push(Notice::Entry(msg, *data));
    }
}

impl CoreWindow for Recorder {
    fn redraw_request(&mut self, rect: Rect) {
        self.redraws.borrow_mut().push(rect);
    }
}

/// Rows 10 high. Toggle glyphs measure one cell, so the indent step is 6.
pub fn config() -> TreeConfig {
    TreeConfig::new()
        .line_height(10)
        .window_padding(4)
        .icon_step(3)
}

pub fn theme() -> Theme {
    Theme::init(&config(), SystemColours::default(), &CellMeasure)
}

pub const LINE: i32 = 10;

pub struct Fields {
    pub name: Arc<str>,
    pub size: Arc<str>,
    pub kind: Arc<str>,
    pub folder: Arc<str>,
}

impl Fields {
    pub fn new() -> Self {
        Self {
            name: Arc::from("Name"),
            size: Arc::from("Size"),
            kind: Arc::from("Type"),
            folder: Arc::from("Folder"),
        }
    }

    /// name (default), size (show name), type, folder (default)
    pub fn schema(&self) -> Schema {
        Schema::new(vec![
            FieldDesc::new(Arc::clone(&self.name), FieldFlags::default_field()),
            FieldDesc::new(Arc::clone(&self.size), FieldFlags::show_name()),
            FieldDesc::new(Arc::clone(&self.kind), FieldFlags::new()),
            FieldDesc::new(Arc::clone(&self.folder), FieldFlags::default_field()),
        ])
        .expect("valid schema")
    }

    pub fn folder(&self, title: &str) -> FieldData {
        FieldData::new(&self.folder, title)
    }

    pub fn entry(&self, title: &str, size: &str, kind: &str) -> Vec<FieldData> {
        vec![
            FieldData::new(&self.name, title),
            FieldData::new(&self.size, size),
            FieldData::new(&self.kind, kind),
        ]
    }
}

pub fn tree(fields: &Fields) -> (Tree<Data>, Recorder) {
    let recorder = Recorder::default();
    let tree = Tree::new(
        fields.schema(),
        &theme(),
        Box::new(CellMeasure),
        Box::new(recorder.clone()),
        Box::new(recorder.clone()),
    )
    .expect("tree");
    (tree, recorder)
}

/// Sum of children's heights for every expanded node, recursively.
pub fn check_heights(tree: &Tree<Data>) {
    check_node(tree, tree.root());
}

fn check_node(tree: &Tree<Data>, id: treeview::NodeId) -> i32 {
    let node = tree.node(id).expect("live node");
    let own = match node.kind() {
        treeview::NodeKind::Root => 0,
        treeview::NodeKind::Folder => LINE,
        treeview::NodeKind::Entry => {
            LINE + if node.is_expanded() {
                LINE * node.fields().len() as i32
            } else {
                0
            }
        }
    };
    let children: i32 = tree.children(id).map(|child| check_node(tree, child)).sum();
    let expected = if node.is_expanded() && node.kind() != treeview::NodeKind::Entry {
        own + children
    } else {
        own
    };
    assert_eq!(node.height(), expected, "height of {id:?}");
    node.height()
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clip(Rect),
    Rectangle(Rect, Rgb),
    Text(i32, i32, String, Rgb),
    Icon(IconKind, Rect),
    KnockoutStart,
    KnockoutEnd,
}

#[derive(Default)]
pub struct RecordingPlotter {
    pub ops: Vec<Op>,
    pub knockout: bool,
}

impl RecordingPlotter {
    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(_, _, text, _) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Primary row titles, skipping toggle glyphs and field rows.
    pub fn titles(&self, theme: &Theme) -> Vec<String> {
        let step = theme.metrics.step_width + theme.metrics.icon_step;
        let mut titles = Vec::new();
        let mut last_glyph_x = None;
        for op in &self.ops {
            if let Op::Text(x, _, text, _) = op {
                if text == "\u{25b8}" || text == "\u{25be}" {
                    last_glyph_x = Some(*x);
                } else if last_glyph_x.take().is_some_and(|gx| gx + step == *x) {
                    titles.push(text.clone());
                }
            }
        }
        titles
    }

    pub fn rectangles(&self) -> Vec<(Rect, Rgb)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rectangle(rect, fill) => Some((*rect, *fill)),
                _ => None,
            })
            .collect()
    }
}

impl Plotter for RecordingPlotter {
    fn clip(&mut self, rect: Rect) {
        self.ops.push(Op::Clip(rect));
    }

    fn rectangle(&mut self, rect: Rect, style: &PlotStyle) {
        self.ops.push(Op::Rectangle(rect, style.fill));
    }

    fn text(&mut self, x: i32, y: i32, text: &str, style: &FontStyle) {
        self.ops.push(Op::Text(x, y, text.to_string(), style.foreground));
    }

    fn icon(&mut self, kind: IconKind, rect: Rect, _background: Rgb) {
        self.ops.push(Op::Icon(kind, rect));
    }

    fn option_knockout(&self) -> bool {
        self.knockout
    }

    fn knockout_start(&mut self) {
        self.ops.push(Op::KnockoutStart);
    }

    fn knockout_end(&mut self) {
        self.ops.push(Op::KnockoutEnd);
    }
}
