use ledge_common::{Rect, SurfaceId};
use wry::WebView;

use crate::events::LifecycleState;

/// Convert a host-window-relative pixel rect to a wry rect.
pub fn to_wry_rect(rect: Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(
            rect.width.max(0) as u32,
            rect.height.max(0) as u32,
        )),
    }
}

/// Handle to a managed surface.
pub struct SurfaceHandle {
    pub(super) webview: WebView,
    pub(super) id: SurfaceId,
    /// Owning page index; `None` for the toolbar surface.
    pub(super) page: Option<usize>,
    pub(super) url: String,
    pub(super) load_state: LifecycleState,
}

impl SurfaceHandle {
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    pub fn page(&self) -> Option<usize> {
        self.page
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn load_state(&self) -> LifecycleState {
        self.load_state
    }

    pub(crate) fn set_load_state(&mut self, state: LifecycleState) {
        self.load_state = state;
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.url = url.to_string();
        self.load_state = LifecycleState::Loading;
        self.webview.load_url(url)
    }

    /// Reload the current document in place (preserves the surface).
    pub fn reload(&self) -> Result<(), wry::Error> {
        self.webview.evaluate_script("window.location.reload();")
    }

    /// Execute JavaScript in the surface.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Send a typed IPC message to the page.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Position the surface within the host window (host-window frame).
    pub fn set_bounds(&self, rect: Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(to_wry_rect(rect))
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), wry::Error> {
        self.webview.set_visible(visible)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_rect_converts_to_physical_wry_rect() {
        let rect = Rect::new(480, 520, 912, 520);
        let wry_rect = to_wry_rect(rect);

        match wry_rect.position {
            wry::dpi::Position::Physical(pos) => {
                assert_eq!(pos.x, 480);
                assert_eq!(pos.y, 520);
            }
            _ => panic!("expected physical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Physical(size) => {
                assert_eq!(size.width, 912);
                assert_eq!(size.height, 520);
            }
            _ => panic!("expected physical size"),
        }
    }

    #[test]
    fn negative_offsets_keep_position_but_clamp_size() {
        // Off-screen positions are legal (hidden offset); negative sizes
        // are not and clamp to zero.
        let rect = Rect::new(-100, 1130, -5, 520);
        let wry_rect = to_wry_rect(rect);

        match wry_rect.position {
            wry::dpi::Position::Physical(pos) => {
                assert_eq!(pos.x, -100);
                assert_eq!(pos.y, 1130);
            }
            _ => panic!("expected physical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Physical(size) => {
                assert_eq!(size.width, 0);
                assert_eq!(size.height, 520);
            }
            _ => panic!("expected physical size"),
        }
    }
}
