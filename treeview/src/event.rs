use crate::layout::Rect;

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer button and modifier state for one input event.
///
/// Button 1 is the left button, button 2 the right. A press is reported
/// when the button goes down, a click when it is released without a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseState {
    pub press_1: bool,
    pub press_2: bool,
    pub click_1: bool,
    pub click_2: bool,
    pub double_click: bool,
    /// Shift
    pub mod_1: bool,
    /// Ctrl, the multi-select modifier
    pub mod_2: bool,
    /// Alt
    pub mod_3: bool,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self {
                press_1: true,
                ..Default::default()
            },
            MouseButton::Right => Self {
                press_2: true,
                ..Default::default()
            },
            MouseButton::Middle => Self::default(),
        }
    }

    pub fn click(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self {
                click_1: true,
                ..Default::default()
            },
            MouseButton::Right => Self {
                click_2: true,
                ..Default::default()
            },
            MouseButton::Middle => Self::default(),
        }
    }

    pub fn double_click(button: MouseButton) -> Self {
        Self {
            double_click: true,
            ..Self::click(button)
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.mod_1 = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.mod_2 = true;
        self
    }

    pub fn with_alt(mut self) -> Self {
        self.mod_3 = true;
        self
    }

    pub fn is_click(&self) -> bool {
        self.click_1 || self.click_2
    }

    pub fn none(&self) -> bool {
        *self == Self::default()
    }
}

/// Message delivered to the owner of a node's client data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeMsg {
    /// The node has been removed from the tree; its data is dropped after
    /// this call returns.
    Deleted,
    /// An entry was double-clicked.
    Launch { mouse: MouseState },
}

/// Notifications from a tree to the owner of its nodes' client data.
pub trait TreeCallbacks<D> {
    fn folder(&mut self, msg: NodeMsg, data: &mut D);
    fn entry(&mut self, msg: NodeMsg, data: &mut D);
}

/// The host window a tree is shown in.
pub trait CoreWindow {
    /// Ask the host to repaint `rect`, in tree coordinates.
    fn redraw_request(&mut self, rect: Rect);
}
