use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::FontStyle;

/// Text measurement backend.
pub trait TextMeasure {
    /// Width in pixels of `text` painted in `style`.
    fn width(&self, style: &FontStyle, text: &str) -> i32;
}

/// Measures text in character cells, one pixel per cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn width(&self, _style: &FontStyle, text: &str) -> i32 {
        display_width(text) as i32
    }
}

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// A text value with its cached pixel width.
///
/// A width of zero means "not measured yet", never a measured zero width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextValue {
    data: String,
    width: i32,
}

impl TextValue {
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            width: 0,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Cached width, or zero if not measured yet.
    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn is_measured(&self) -> bool {
        self.width != 0
    }

    /// Replace the text and drop the cached width.
    pub fn set(&mut self, data: impl Into<String>) {
        self.data = data.into();
        self.width = 0;
    }

    /// Measure the text unless a width is already cached.
    pub fn ensure_measured(&mut self, measure: &dyn TextMeasure, style: &FontStyle) {
        if self.width == 0 {
            self.width = measure.width(style, &self.data);
        }
    }
}
