use super::Rgb;

/// Fill style for a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlotStyle {
    pub fill: Rgb,
}

impl PlotStyle {
    pub const fn solid(fill: Rgb) -> Self {
        Self { fill }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontFamily {
    #[default]
    SansSerif,
    Serif,
    Monospace,
}

/// Font style for a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontStyle {
    pub family: FontFamily,
    /// Size in points.
    pub size: i32,
    pub weight: u16,
    pub foreground: Rgb,
    pub background: Rgb,
}

impl Default for FontStyle {
    fn default() -> Self {
        Self {
            family: FontFamily::SansSerif,
            size: 11,
            weight: 400,
            foreground: Rgb::new(0, 0, 0),
            background: Rgb::new(255, 255, 255),
        }
    }
}

impl FontStyle {
    pub fn foreground(mut self, color: Rgb) -> Self {
        self.foreground = color;
        self
    }

    pub fn background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }
}

/// The styles used to paint one row, in its normal and selected states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStyle {
    /// Background
    pub bg: PlotStyle,
    /// Primary text
    pub text: FontStyle,
    /// Entry field text
    pub itext: FontStyle,
    /// Selected background
    pub sbg: PlotStyle,
    /// Selected primary text
    pub stext: FontStyle,
    /// Selected entry field text
    pub sitext: FontStyle,
}

impl NodeStyle {
    /// Background, text and field text styles for a row.
    pub fn pick(&self, selected: bool) -> (&PlotStyle, &FontStyle, &FontStyle) {
        if selected {
            (&self.sbg, &self.stext, &self.sitext)
        } else {
            (&self.bg, &self.text, &self.itext)
        }
    }
}
