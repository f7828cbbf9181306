//! Global cursor sampling.

use mouse_position::mouse_position::Mouse;

/// Sample the global cursor position in virtual-screen coordinates.
///
/// Returns `None` when the platform cannot report a position (headless
/// session, permission denied); callers treat that as "pointer nowhere".
pub fn global_cursor_position() -> Option<(i32, i32)> {
    match Mouse::get_mouse_position() {
        Mouse::Position { x, y } => Some((x, y)),
        Mouse::Error => {
            tracing::debug!("cursor sample failed");
            None
        }
    }
}
