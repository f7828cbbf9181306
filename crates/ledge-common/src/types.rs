use serde::{Deserialize, Serialize};
use std::fmt;

/// An axis-aligned rectangle in integer pixels.
///
/// Every rect in the dock lives in one of two frames: virtual-screen
/// coordinates (displays, cursor) or host-window coordinates (surfaces).
/// Functions state which frame they expect; the math is identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: the right/bottom edges are exclusive.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(pub u32);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface-{}", self.0)
    }
}

/// Immutable-per-query snapshot of a physical display.
///
/// `bounds` and `work_area` are virtual-screen coordinates; `work_area` is
/// `bounds` minus OS-reserved regions (taskbar, menu bar). Snapshots are
/// taken fresh on every query — work areas change at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    /// Stable identifier, used to match `display_id` from config.
    pub id: String,
    pub is_primary: bool,
    pub bounds: Rect,
    pub work_area: Rect,
}

impl Display {
    /// Height of the OS-reserved strip at the bottom of the display.
    pub fn taskbar_height(&self) -> i32 {
        self.bounds.height - self.work_area.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.bounds.contains(x, y)
    }
}
