//! Percent-based content sizing.

use ledge_common::Display;

/// Pixel size of the dock content, derived from the target display.
///
/// Recomputed on every show/hide/config change and never cached — work
/// areas move at runtime (monitor reconfiguration, taskbar auto-hide).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSize {
    pub width: i32,
    pub height: i32,
    pub taskbar_height: i32,
}

/// Compute the dock's pixel size from work-area percentages.
pub fn content_size(display: &Display, width_pct: f64, height_pct: f64) -> ContentSize {
    ContentSize {
        width: (display.work_area.width as f64 * width_pct / 100.0).floor() as i32,
        height: (display.work_area.height as f64 * height_pct / 100.0).floor() as i32,
        taskbar_height: display.taskbar_height(),
    }
}
