//! Target display selection.

use ledge_common::{Display, Rect};
use tracing::warn;

/// Identifier that selects the primary display.
pub const PRIMARY_DISPLAY_ID: &str = "primary";

/// Pick the target display for the dock.
///
/// Returns the display whose id matches `display_id`, the primary display
/// when `display_id` is `"primary"` or unmatched (the configured display
/// may have been unplugged), and a synthetic 1920x1080 primary when the
/// platform reports no displays at all. Never fails.
pub fn resolve_display(displays: &[Display], display_id: &str) -> Display {
    if display_id != PRIMARY_DISPLAY_ID {
        if let Some(display) = displays.iter().find(|d| d.id == display_id) {
            return display.clone();
        }
        warn!(display_id, "configured display not attached, using primary");
    }

    displays
        .iter()
        .find(|d| d.is_primary)
        .or_else(|| displays.first())
        .cloned()
        .unwrap_or_else(|| Display {
            id: PRIMARY_DISPLAY_ID.into(),
            is_primary: true,
            bounds: Rect::new(0, 0, 1920, 1080),
            work_area: Rect::new(0, 0, 1920, 1080),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display(id: &str, is_primary: bool, x: i32) -> Display {
        Display {
            id: id.into(),
            is_primary,
            bounds: Rect::new(x, 0, 1920, 1080),
            work_area: Rect::new(x, 0, 1920, 1040),
        }
    }

    #[test]
    fn primary_keyword_selects_primary() {
        let displays = vec![display("1", false, -1920), display("2", true, 0)];
        assert_eq!(resolve_display(&displays, "primary").id, "2");
    }

    #[test]
    fn matching_id_selects_that_display() {
        let displays = vec![display("1", false, -1920), display("2", true, 0)];
        assert_eq!(resolve_display(&displays, "1").id, "1");
    }

    #[test]
    fn unmatched_id_falls_back_to_primary() {
        let displays = vec![display("1", false, -1920), display("2", true, 0)];
        assert_eq!(resolve_display(&displays, "unplugged").id, "2");
    }

    #[test]
    fn no_primary_flag_falls_back_to_first() {
        let displays = vec![display("1", false, -1920), display("2", false, 0)];
        assert_eq!(resolve_display(&displays, "primary").id, "1");
    }

    #[test]
    fn empty_display_list_synthesizes_a_display() {
        let d = resolve_display(&[], "primary");
        assert!(d.is_primary);
        assert_eq!(d.bounds.width, 1920);
        assert_eq!(d.bounds.height, 1080);
    }
}
