mod common;

use common::{Fields, Notice, LINE};
use treeview::{MouseButton, MouseState, NodeId, NodeMsg, Rect, Relationship, RowHit, Tree};

/// a { x, y }, b. Returns the tree collapsed.
fn small_tree(fields: &Fields) -> (Tree<common::Data>, common::Recorder, [NodeId; 4]) {
    let (mut tree, recorder) = common::tree(fields);
    let a = tree.create_folder(None, Relationship::FirstChild, &fields.folder("a"), "a").unwrap();
    let b = tree.create_folder(Some(a), Relationship::NextSibling, &fields.folder("b"), "b").unwrap();
    let x = tree.create_entry(Some(a), Relationship::FirstChild, &fields.entry("x", "1", "t"), "x").unwrap();
    let y = tree.create_entry(Some(x), Relationship::NextSibling, &fields.entry("y", "2", "t"), "y").unwrap();
    (tree, recorder, [a, x, y, b])
}

fn row(tree: &Tree<common::Data>, top: i32, bottom: i32) -> Rect {
    Rect::from_edges(0, top, tree.metrics().redraw_max, bottom)
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_row_at_finds_visible_rows() {
    let fields = Fields::new();
    let (mut tree, _, [a, x, y, b]) = small_tree(&fields);
    tree.expand(a).unwrap();

    let text_x = 40;
    assert_eq!(tree.row_at(text_x, 0).map(|h| h.node), Some(a));
    assert_eq!(tree.row_at(text_x, LINE - 1).map(|h| h.node), Some(a));
    assert_eq!(tree.row_at(text_x, LINE).map(|h| h.node), Some(x));
    assert_eq!(tree.row_at(text_x, 25).map(|h| h.node), Some(y));
    assert_eq!(
        tree.row_at(text_x, 35),
        Some(RowHit {
            node: b,
            top: 3 * LINE,
            height: LINE,
            on_toggle: false,
        })
    );
    assert_eq!(tree.row_at(text_x, 4 * LINE), None);
    assert_eq!(tree.row_at(text_x, -1), None);
}

#[test]
fn test_toggle_zone_spans_glyph_column() {
    let fields = Fields::new();
    let (tree, _, [a, ..]) = small_tree(&fields);
    let inset = tree.node(a).unwrap().inset();
    let furniture = tree.metrics().furniture_width;
    assert_eq!(furniture, 6, "one-cell glyph plus padding");

    assert!(!tree.row_at(inset - 2, 5).unwrap().on_toggle);
    assert!(tree.row_at(inset - 1, 5).unwrap().on_toggle);
    assert!(tree.row_at(inset + furniture - 1, 5).unwrap().on_toggle);
    assert!(!tree.row_at(inset + furniture, 5).unwrap().on_toggle);
}

#[test]
fn test_hits_agree_with_row_rects() {
    let fields = Fields::new();
    let (mut tree, _, [a, x, ..]) = small_tree(&fields);
    tree.expand(a).unwrap();
    tree.expand(x).unwrap();

    for y in 0..tree.height() {
        let hit = tree.row_at(40, y).unwrap();
        let rect = tree.row_rect(hit.node).unwrap();
        assert_eq!((rect.top(), rect.height), (hit.top, hit.height), "y = {y}");
        assert!(rect.contains(0, y));
    }
    assert_eq!(tree.row_at(40, 2 * LINE + 5).unwrap().node, x, "field rows belong to the entry");
}

// ============================================================================
// Selection by pointer
// ============================================================================

#[test]
fn test_press_selects_single_row() {
    let fields = Fields::new();
    let (mut tree, recorder, [a, .., b]) = small_tree(&fields);

    tree.mouse_action(MouseState::press(MouseButton::Left), 40, 5);
    assert_eq!(tree.selected().collect::<Vec<_>>(), vec![a]);
    assert_eq!(recorder.redraws(), vec![row(&tree, 0, LINE)]);
    recorder.clear();

    tree.mouse_action(MouseState::press(MouseButton::Left), 40, 15);
    assert_eq!(tree.selected().collect::<Vec<_>>(), vec![b]);
    assert_eq!(recorder.redraws(), vec![row(&tree, 0, 2 * LINE)], "one request for both rows");
}

#[test]
fn test_press_on_selected_row_does_nothing() {
    let fields = Fields::new();
    let (mut tree, recorder, [a, ..]) = small_tree(&fields);
    tree.set_selected(a, true).unwrap();

    tree.mouse_action(MouseState::press(MouseButton::Left), 40, 5);
    assert!(tree.node(a).unwrap().is_selected());
    assert!(recorder.redraws().is_empty());
}

#[test]
fn test_ctrl_press_toggles_without_clearing() {
    let fields = Fields::new();
    let (mut tree, recorder, [a, .., b]) = small_tree(&fields);
    tree.set_selected(a, true).unwrap();

    let ctrl = MouseState::press(MouseButton::Left).with_ctrl();
    tree.mouse_action(ctrl, 40, 15);
    assert_eq!(tree.selected().collect::<Vec<_>>(), vec![a, b]);
    assert_eq!(recorder.redraws(), vec![row(&tree, LINE, 2 * LINE)]);

    tree.mouse_action(ctrl, 40, 5);
    assert_eq!(tree.selected().collect::<Vec<_>>(), vec![b]);
}

#[test]
fn test_right_press_toggles_selection() {
    let fields = Fields::new();
    let (mut tree, _, [a, .., b]) = small_tree(&fields);

    let right = MouseState::press(MouseButton::Right);
    tree.mouse_action(right, 40, 5);
    tree.mouse_action(right, 40, 15);
    assert_eq!(tree.selected().collect::<Vec<_>>(), vec![a, b]);

    tree.mouse_action(right, 40, 5);
    assert_eq!(tree.selected().collect::<Vec<_>>(), vec![b]);
}

#[test]
fn test_press_on_toggle_does_not_select() {
    let fields = Fields::new();
    let (mut tree, recorder, [a, ..]) = small_tree(&fields);
    let inset = tree.node(a).unwrap().inset();

    tree.mouse_action(MouseState::press(MouseButton::Left), inset, 5);
    assert!(!tree.has_selection());
    assert!(!tree.node(a).unwrap().is_expanded(), "toggling waits for the click");
    assert!(recorder.redraws().is_empty());
}

#[test]
fn test_miss_is_ignored() {
    let fields = Fields::new();
    let (mut tree, recorder, _) = small_tree(&fields);
    tree.mouse_action(MouseState::press(MouseButton::Left), 40, 500);
    tree.mouse_action(MouseState::click(MouseButton::Left), 40, -3);
    assert!(recorder.redraws().is_empty());
    assert!(recorder.notices().is_empty());
}

// ============================================================================
// Expand and launch
// ============================================================================

#[test]
fn test_click_on_toggle_expands_and_contracts() {
    let fields = Fields::new();
    let (mut tree, recorder, [a, ..]) = small_tree(&fields);
    let inset = tree.node(a).unwrap().inset();
    let click = MouseState::click(MouseButton::Left);

    tree.mouse_action(click, inset, 5);
    assert!(tree.node(a).unwrap().is_expanded());
    assert_eq!(tree.height(), 4 * LINE);
    assert_eq!(recorder.redraws(), vec![row(&tree, 0, 4 * LINE)]);
    recorder.clear();

    tree.mouse_action(click, inset, 5);
    assert!(!tree.node(a).unwrap().is_expanded());
    assert_eq!(tree.height(), 2 * LINE);
    assert_eq!(recorder.redraws(), vec![row(&tree, 0, 4 * LINE)], "old height is repainted");
}

#[test]
fn test_toggle_clears_selection_in_same_request() {
    let fields = Fields::new();
    let (mut tree, recorder, [a, x, _, b]) = small_tree(&fields);
    tree.expand(a).unwrap();
    tree.set_selected(b, true).unwrap();
    let inset = tree.node(x).unwrap().inset();

    tree.mouse_action(MouseState::click(MouseButton::Left), inset, 15);

    assert!(tree.node(x).unwrap().is_expanded());
    assert!(!tree.has_selection());
    // x's row down to the new bottom, plus b's old row
    assert_eq!(recorder.redraws(), vec![row(&tree, LINE, 6 * LINE)]);
}

#[test]
fn test_double_click_folder_toggles() {
    let fields = Fields::new();
    let (mut tree, recorder, [a, ..]) = small_tree(&fields);

    tree.mouse_action(MouseState::double_click(MouseButton::Left), 40, 5);
    assert!(tree.node(a).unwrap().is_expanded());
    assert!(recorder.notices().is_empty());
    assert_eq!(recorder.redraws().len(), 1);
}

#[test]
fn test_double_click_entry_launches() {
    let fields = Fields::new();
    let (mut tree, recorder, [a, x, ..]) = small_tree(&fields);
    tree.expand(a).unwrap();
    tree.set_selected(a, true).unwrap();

    let mouse = MouseState::double_click(MouseButton::Left);
    tree.mouse_action(mouse, 40, 15);

    assert_eq!(recorder.notices(), vec![Notice::Entry(NodeMsg::Launch { mouse }, "x")]);
    assert!(!tree.node(x).unwrap().is_expanded());
    assert!(!tree.has_selection());
    assert_eq!(recorder.redraws(), vec![row(&tree, 0, LINE)]);
}

#[test]
fn test_plain_click_on_entry_is_ignored() {
    let fields = Fields::new();
    let (mut tree, recorder, [a, ..]) = small_tree(&fields);
    tree.expand(a).unwrap();

    tree.mouse_action(MouseState::click(MouseButton::Left), 40, 15);
    assert!(recorder.redraws().is_empty());
    assert!(recorder.notices().is_empty());
}
