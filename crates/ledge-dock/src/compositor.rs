//! Per-surface rectangle computation.
//!
//! All output rects are host-window-relative; the host window's origin is
//! pinned to the target display's bounds origin, so converting a
//! virtual-screen point into this frame is a single subtraction.

use ledge_common::{Display, Rect};

use crate::layout::ContentSize;

/// Fixed pixel width of the toolbar strip on the left edge of the dock.
pub const TOOLBAR_WIDTH: i32 = 48;

/// Rectangles for the toolbar surface and the active page's content
/// surfaces at a given vertical offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceLayout {
    pub toolbar: Rect,
    pub content: Vec<Rect>,
}

impl SurfaceLayout {
    /// Whether a host-window-relative point hits any surface.
    pub fn hit(&self, x: i32, y: i32) -> bool {
        self.toolbar.contains(x, y) || self.content.iter().any(|r| r.contains(x, y))
    }
}

/// Lay out the toolbar plus content surfaces at vertical offset `offset_y`.
///
/// The total content span is centered horizontally within the display's
/// work area. The toolbar takes a fixed width on the left; the remaining
/// span is partitioned proportionally to `widths` (percentages), with the
/// last surface taking the exact remainder so rounding never opens a gap
/// or overlap. Callable in any visibility state, including toolbar-only
/// pages (`widths` empty).
pub fn surface_rects(
    display: &Display,
    size: ContentSize,
    widths: &[f64],
    offset_y: i32,
) -> SurfaceLayout {
    let centered_x = (display.work_area.x - display.bounds.x)
        + (display.work_area.width - size.width) / 2;

    let toolbar_width = TOOLBAR_WIDTH.min(size.width).max(0);
    let toolbar = Rect::new(centered_x, offset_y, toolbar_width, size.height);

    let span = size.width - toolbar_width;
    let mut content = Vec::with_capacity(widths.len());
    let mut x = centered_x + toolbar_width;

    for (i, pct) in widths.iter().enumerate() {
        let width = if i + 1 == widths.len() {
            // Remainder of the span, absorbing accumulated rounding.
            (centered_x + size.width - x).max(0)
        } else {
            ((span as f64 * pct / 100.0).floor() as i32).max(0)
        };
        content.push(Rect::new(x, offset_y, width, size.height));
        x += width;
    }

    SurfaceLayout { toolbar, content }
}
