//! Per-process tree styles, toggle furniture and icon resources.

use crate::config::{Metrics, TreeConfig};
use crate::node::NodeKind;
use crate::text::{TextMeasure, TextValue};
use crate::types::{FontStyle, NodeStyle, PlotStyle, Rgb};

/// Host colours the tree styles are derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemColours {
    pub window: Rgb,
    pub window_text: Rgb,
    pub highlight: Rgb,
    pub highlight_text: Rgb,
}

impl Default for SystemColours {
    fn default() -> Self {
        Self {
            window: Rgb::new(255, 255, 255),
            window_text: Rgb::new(0, 0, 0),
            highlight: Rgb::new(0xee, 0xdd, 0xcc),
            highlight_text: Rgb::new(0, 0, 0),
        }
    }
}

/// Expand/contract toggle glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Furniture {
    Expand,
    Contract,
}

impl Furniture {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Expand => "\u{25b8}",
            Self::Contract => "\u{25be}",
        }
    }
}

/// Icon resource slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Content,
    Folder,
}

impl IconKind {
    pub const ALL: [IconKind; 2] = [IconKind::Content, IconKind::Folder];

    pub const fn url(self) -> &'static str {
        match self {
            Self::Content => "resource:icons/content.png",
            Self::Folder => "resource:icons/directory.png",
        }
    }

    /// Icon painted for a node kind, if any.
    pub fn for_node(kind: NodeKind) -> Option<Self> {
        match kind {
            NodeKind::Entry => Some(Self::Content),
            NodeKind::Folder => Some(Self::Folder),
            NodeKind::Root => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Content => 0,
            Self::Folder => 1,
        }
    }
}

/// A shared icon handle. The loader lives outside the tree; the tree only
/// reads whether it is ready and how tall it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconResource {
    pub kind: IconKind,
    pub ready: bool,
    pub height: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    icons: [IconResource; 2],
}

impl Default for Resources {
    fn default() -> Self {
        Self::new()
    }
}

impl Resources {
    pub fn new() -> Self {
        Self {
            icons: IconKind::ALL.map(|kind| IconResource {
                kind,
                ready: false,
                height: 0,
            }),
        }
    }

    pub fn get(&self, kind: IconKind) -> &IconResource {
        &self.icons[kind.index()]
    }

    /// The icon if its loader has finished.
    pub fn ready(&self, kind: IconKind) -> Option<&IconResource> {
        Some(self.get(kind)).filter(|icon| icon.ready)
    }

    /// Called by the host when the resource at `kind.url()` has loaded.
    pub fn mark_ready(&mut self, kind: IconKind, height: i32) {
        log::debug!("[theme] icon {} ready, height {}", kind.url(), height);
        let icon = &mut self.icons[kind.index()];
        icon.ready = true;
        icon.height = height;
    }

    fn release(&mut self) {
        for icon in &mut self.icons {
            if icon.ready {
                log::trace!("[theme] releasing {}", icon.kind.url());
            }
            icon.ready = false;
            icon.height = 0;
        }
    }
}

/// Styles, metrics and resources shared by every tree in the process.
#[derive(Debug, Clone)]
pub struct Theme {
    pub metrics: Metrics,
    pub odd: NodeStyle,
    pub even: NodeStyle,
    pub resources: Resources,
    expand: TextValue,
    contract: TextValue,
}

impl Theme {
    pub fn init(config: &TreeConfig, colours: SystemColours, measure: &dyn TextMeasure) -> Self {
        let (odd, even) = plot_styles(config.font_pt_size, colours);

        let mut expand = TextValue::new(Furniture::Expand.glyph());
        let mut contract = TextValue::new(Furniture::Contract.glyph());
        expand.ensure_measured(measure, &odd.text);
        contract.ensure_measured(measure, &odd.text);

        let metrics = config.metrics(expand.width().max(contract.width()));
        log::debug!(
            "[theme] line_height={} step_width={} icon_step={}",
            metrics.line_height,
            metrics.step_width,
            metrics.icon_step
        );

        Self {
            metrics,
            odd,
            even,
            resources: Resources::new(),
            expand,
            contract,
        }
    }

    /// Release the icon handles. Icons stay unready until marked again.
    pub fn fini(&mut self) {
        self.resources.release();
    }

    pub fn furniture(&self, which: Furniture) -> &TextValue {
        match which {
            Furniture::Expand => &self.expand,
            Furniture::Contract => &self.contract,
        }
    }

    /// Zebra style for the `count`th painted row, counting from one.
    pub fn row_style(&self, count: u32) -> &NodeStyle {
        if count & 1 == 1 {
            &self.odd
        } else {
            &self.even
        }
    }

    /// Style text is measured with.
    pub fn measure_style(&self) -> &FontStyle {
        &self.odd.text
    }
}

fn plot_styles(font_pt_size: i32, colours: SystemColours) -> (NodeStyle, NodeStyle) {
    let bg = PlotStyle::solid(colours.window);
    let text = FontStyle {
        size: font_pt_size,
        ..FontStyle::default()
    }
    .foreground(colours.window_text)
    .background(colours.window);
    let itext = text.foreground(text.foreground.mix(text.background, 6.0 / 16.0));

    let sbg = PlotStyle::solid(colours.highlight);
    let stext = text
        .foreground(colours.highlight_text)
        .background(colours.highlight);
    let sitext = stext.foreground(stext.foreground.mix(stext.background, 7.0 / 32.0));

    let even = NodeStyle {
        bg,
        text,
        itext,
        sbg,
        stext,
        sitext,
    };

    let odd_bg = PlotStyle::solid(colours.window.mix(colours.window_text, 1.0 / 16.0));
    let odd_text = text.background(odd_bg.fill);
    let odd = NodeStyle {
        bg: odd_bg,
        text: odd_text,
        itext: odd_text.foreground(odd_text.foreground.mix(odd_text.background, 6.0 / 16.0)),
        ..even
    };

    (odd, even)
}
