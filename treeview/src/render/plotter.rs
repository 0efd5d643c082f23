use crate::buffer::{Buffer, Cell};
use crate::layout::Rect;
use crate::text::char_width;
use crate::theme::IconKind;
use crate::types::{FontStyle, PlotStyle, Rgb};

/// Paint backend a tree draws through.
pub trait Plotter {
    /// Restrict further painting to `rect`.
    fn clip(&mut self, rect: Rect);

    fn rectangle(&mut self, rect: Rect, style: &PlotStyle);

    /// Paint `text` starting at `x` with its baseline at `y`.
    fn text(&mut self, x: i32, y: i32, text: &str, style: &FontStyle);

    /// Paint a ready icon resource into `rect` over `background`.
    fn icon(&mut self, kind: IconKind, rect: Rect, background: Rgb);

    /// Whether the backend wants a knockout pass around each redraw.
    fn option_knockout(&self) -> bool {
        false
    }

    fn knockout_start(&mut self) {}

    fn knockout_end(&mut self) {}
}

/// Paints into a [`Buffer`], one pixel per cell.
///
/// A glyph whose baseline is at `y` lands on cell row `y - baseline`, so
/// text sits on the row it was laid out for.
pub struct CellPlotter<'a> {
    buf: &'a mut Buffer,
    baseline: i32,
    clip: Rect,
}

impl<'a> CellPlotter<'a> {
    pub fn new(buf: &'a mut Buffer, baseline: i32) -> Self {
        let clip = buf.area();
        Self {
            buf,
            baseline,
            clip,
        }
    }
}

impl Plotter for CellPlotter<'_> {
    fn clip(&mut self, rect: Rect) {
        self.clip = rect.intersection(self.buf.area());
    }

    fn rectangle(&mut self, rect: Rect, style: &PlotStyle) {
        self.buf.fill(rect.intersection(self.clip), style.fill);
    }

    fn text(&mut self, x: i32, y: i32, text: &str, style: &FontStyle) {
        let row = y - self.baseline;
        if row < self.clip.top() || row >= self.clip.bottom() {
            return;
        }

        let mut x = x;
        for ch in text.chars() {
            let width = char_width(ch) as i32;
            if x >= self.clip.right() {
                break;
            }
            if width == 0 {
                continue;
            }
            if x >= self.clip.left() && x + width <= self.clip.right() {
                if let Some(cell) = self.buf.get_mut(x, row) {
                    *cell = Cell::new(ch).with_fg(style.foreground).with_bg(cell.bg);
                }
                for extra in 1..width {
                    if let Some(cell) = self.buf.get_mut(x + extra, row) {
                        cell.wide_continuation = true;
                    }
                }
            }
            x += width;
        }
    }

    fn icon(&mut self, kind: IconKind, rect: Rect, background: Rgb) {
        let ch = match kind {
            IconKind::Content => '-',
            IconKind::Folder => '+',
        };
        let area = rect.intersection(self.clip);
        if area.is_empty() {
            return;
        }
        if let Some(cell) = self.buf.get_mut(area.left(), area.top()) {
            *cell = Cell::new(ch).with_bg(background);
        }
    }
}
