//! Virtualized painting of the visible rows.

mod plotter;

pub use plotter::{CellPlotter, Plotter};

use crate::layout::Rect;
use crate::node::NodeKind;
use crate::theme::{Furniture, IconKind, Theme};
use crate::tree::Tree;

/// Icons are painted at most this wide.
const ICON_SIZE: i32 = 17;

impl<D> Tree<D> {
    /// Paint the part of the tree inside `clip`.
    ///
    /// `clip` is relative to the tree's origin, which is placed at `(x, y)`
    /// in plot coordinates. Rows are walked top to bottom; those above the
    /// clip are only counted, and painting stops at the first row starting
    /// below it.
    pub fn redraw(&self, x: i32, y: i32, clip: Rect, theme: &Theme, plot: &mut dyn Plotter) {
        let knockout = plot.option_knockout();
        if knockout {
            plot.knockout_start();
        }

        let r = clip.translate(x, y);
        plot.clip(r);

        let metrics = &self.metrics;
        let baseline = metrics.baseline();
        let secondary = self.schema.secondary_fields();
        let mut render_y = y;
        let mut count: u32 = 0;
        let mut painted: u32 = 0;

        for (_, node) in self.visible() {
            count += 1;
            let height = node.row_height(metrics.line_height);

            if render_y + height <= r.top() {
                render_y += height;
                continue;
            }
            if render_y >= r.bottom() {
                break;
            }
            painted += 1;

            let (bg, text, itext) = theme.row_style(count).pick(node.selected);

            plot.rectangle(Rect::from_edges(r.left(), render_y, r.right(), render_y + height), bg);

            let inset = x + node.inset;
            let toggle = if node.expanded {
                Furniture::Contract
            } else {
                Furniture::Expand
            };
            plot.text(inset, render_y + baseline, theme.furniture(toggle).as_str(), text);

            let icon = IconKind::for_node(node.kind).and_then(|kind| theme.resources.ready(kind));
            if let Some(icon) = icon {
                let icon_y = render_y + (metrics.line_height - icon.height + 1) / 2;
                plot.icon(
                    icon.kind,
                    Rect::new(
                        inset + metrics.step_width,
                        icon_y,
                        ICON_SIZE.min(metrics.icon_step),
                        icon.height,
                    ),
                    bg.fill,
                );
            }

            let x0 = inset + metrics.step_width + metrics.icon_step;
            plot.text(x0, render_y + baseline, node.text.as_str(), text);

            if node.kind == NodeKind::Entry && node.expanded {
                let mut field_y = render_y + metrics.line_height;
                for (i, (desc, value)) in secondary.iter().zip(&node.fields).enumerate() {
                    if desc.flags.show_name {
                        let label = self.schema.secondary_label(i);
                        plot.text(
                            x0 + self.field_width - label.width() - metrics.step_width,
                            field_y + baseline,
                            label.as_str(),
                            itext,
                        );
                        plot.text(x0 + self.field_width, field_y + baseline, value.as_str(), itext);
                    } else {
                        plot.text(x0, field_y + baseline, value.as_str(), itext);
                    }
                    field_y += metrics.line_height;
                }
            }

            render_y += height;
        }

        if render_y < r.bottom() {
            plot.rectangle(
                Rect::from_edges(r.left(), render_y, r.right(), r.bottom()),
                &theme.even.bg,
            );
        }

        log::trace!("[redraw] clip {:?}: painted {} of {} rows", clip, painted, count);

        if knockout {
            plot.knockout_end();
        }
    }
}
