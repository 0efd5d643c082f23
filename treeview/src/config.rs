//! Tree view configuration.

/// Process-wide configuration used to derive tree [`Metrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    /// Font size in points.
    pub font_pt_size: i32,

    /// Screen resolution in dots per inch.
    pub screen_dpi: i32,

    /// Left padding of top-level rows.
    pub window_padding: i32,

    /// Horizontal space reserved for a row's icon.
    pub icon_step: i32,

    /// Space added after the widest toggle glyph.
    pub furniture_padding: i32,

    /// Width used for full-width redraw rectangles.
    pub redraw_max: i32,

    /// Fixed row height. When unset it is derived from the font size.
    pub line_height: Option<i32>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            font_pt_size: 11,
            screen_dpi: 90,
            window_padding: 6,
            icon_step: 23,
            furniture_padding: 5,
            redraw_max: 8000,
            line_height: None,
        }
    }
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for hosts that paint in character cells.
    pub fn cells() -> Self {
        Self {
            window_padding: 1,
            icon_step: 1,
            furniture_padding: 1,
            redraw_max: u16::MAX as i32,
            line_height: Some(1),
            ..Default::default()
        }
    }

    pub fn font_pt_size(mut self, size: i32) -> Self {
        self.font_pt_size = size;
        self
    }

    pub fn screen_dpi(mut self, dpi: i32) -> Self {
        self.screen_dpi = dpi;
        self
    }

    pub fn window_padding(mut self, padding: i32) -> Self {
        self.window_padding = padding;
        self
    }

    pub fn icon_step(mut self, step: i32) -> Self {
        self.icon_step = step;
        self
    }

    pub fn line_height(mut self, height: i32) -> Self {
        self.line_height = Some(height);
        self
    }

    /// Font size in pixels at the configured resolution.
    pub fn font_px_size(&self) -> i32 {
        (self.font_pt_size * self.screen_dpi + 36) / 72
    }

    /// Derive metrics given the widest toggle glyph.
    pub fn metrics(&self, glyph_width: i32) -> Metrics {
        let line_height = self
            .line_height
            .unwrap_or_else(|| (self.font_px_size() * 8 + 3) / 6);
        let furniture_width = glyph_width + self.furniture_padding;

        Metrics {
            line_height,
            furniture_width,
            step_width: furniture_width,
            window_padding: self.window_padding,
            icon_step: self.icon_step,
            redraw_max: self.redraw_max,
        }
    }
}

/// Pixel metrics shared by every tree painted with one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub line_height: i32,
    /// Width of the toggle glyph column, which is also the click target.
    pub furniture_width: i32,
    /// Indent added per tree level.
    pub step_width: i32,
    pub window_padding: i32,
    pub icon_step: i32,
    pub redraw_max: i32,
}

impl Metrics {
    /// Offset of the text baseline from the top of a row.
    pub fn baseline(&self) -> i32 {
        (self.line_height * 3 + 2) / 4
    }

    /// Inset of the invisible root, chosen so top-level rows sit at the padding.
    pub fn root_inset(&self) -> i32 {
        self.window_padding - self.step_width
    }
}
