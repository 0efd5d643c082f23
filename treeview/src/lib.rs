pub mod buffer;
pub mod config;
pub mod error;
pub mod event;
pub mod hit;
pub mod layout;
pub mod node;
pub mod render;
pub mod schema;
pub mod selection;
pub mod text;
pub mod theme;
pub mod tree;
pub mod types;
pub mod walk;

pub use buffer::{Buffer, Cell};
pub use config::{Metrics, TreeConfig};
pub use error::{Result, TreeError};
pub use event::{CoreWindow, MouseButton, MouseState, NodeMsg, TreeCallbacks};
pub use hit::RowHit;
pub use layout::Rect;
pub use node::{Node, NodeId, NodeKind, Relationship};
pub use render::{CellPlotter, Plotter};
pub use schema::{FieldData, FieldDesc, FieldFlags, Schema};
pub use text::{CellMeasure, TextMeasure, TextValue};
pub use theme::{Furniture, IconKind, IconResource, Resources, SystemColours, Theme};
pub use tree::Tree;
pub use types::*;
pub use walk::{Walk, WalkMode};
