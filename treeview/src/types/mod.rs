mod color;
mod style;

pub use color::Rgb;
pub use style::{FontFamily, FontStyle, NodeStyle, PlotStyle};
