//! Geometry application and page operations.
//!
//! Everything here works in the canonical host-window frame: the overlay
//! window's origin is pinned to the target display's bounds origin, and
//! every surface rect the compositor produces is relative to it.

use serde_json::json;
use winit::event_loop::ActiveEventLoop;

use ledge_common::Display;
use ledge_dock::{content_size, resolve_display, surface_rects, ContentSize, HIDDEN_MARGIN};

use super::core::DockApp;
use super::displays::snapshot_displays;

impl DockApp {
    /// Fresh snapshot of the configured target display.
    pub(super) fn target_display(&self, event_loop: &ActiveEventLoop) -> Display {
        let displays = snapshot_displays(event_loop);
        resolve_display(&displays, &self.config.display_id)
    }

    /// Content size for the current config on `display`. Never cached.
    pub(super) fn dock_size(&self, display: &Display) -> ContentSize {
        content_size(display, self.config.width, self.config.height)
    }

    /// Offset at which the dock rests fully shown (host-window frame):
    /// bottom of the work area, leaving the taskbar uncovered.
    pub(super) fn shown_offset(&self, display: &Display, size: ContentSize) -> i32 {
        (display.work_area.y - display.bounds.y) + display.work_area.height - size.height
    }

    /// Offset at which the dock is fully off-screen.
    pub(super) fn hidden_offset(&self, display: &Display) -> i32 {
        display.bounds.height + HIDDEN_MARGIN
    }

    /// URLs and resolved width percentages for `page`, with items lacking
    /// a resolvable URL skipped (configuration hygiene, not an error).
    pub(super) fn page_plan(&self, page: usize) -> (Vec<String>, Vec<f64>) {
        let Some(page_cfg) = self.config.pages.get(page) else {
            return (Vec::new(), Vec::new());
        };
        let valid = ledge_config::PageConfig {
            items: page_cfg
                .items
                .iter()
                .filter(|item| !item.url.trim().is_empty())
                .cloned()
                .collect(),
        };
        let urls = valid.items.iter().map(|item| item.url.clone()).collect();
        let widths = valid.resolved_widths();
        (urls, widths)
    }

    /// Recompute and apply every surface rect for vertical offset `y`.
    /// Callable in any visibility state.
    pub(super) fn apply_offset(&mut self, display: &Display, y: i32) {
        let size = self.dock_size(display);
        let page = self
            .surfaces
            .as_ref()
            .and_then(|s| s.attached_page())
            .unwrap_or(self.active_page);
        let (_, widths) = self.page_plan(page);
        let layout = surface_rects(display, size, &widths, y);
        if let Some(registry) = self.registry() {
            registry.apply_layout(layout.toolbar, &layout.content);
        }
    }

    /// Create (or reuse) and attach `page`'s surfaces at the current
    /// offset.
    pub(super) fn mount_page(&mut self, display: &Display, page: usize) {
        let size = self.dock_size(display);
        let (urls, widths) = self.page_plan(page);
        let layout = surface_rects(display, size, &widths, self.slider.offset_y());

        let Some(window) = self.window.clone() else {
            return;
        };
        if let Some(registry) = self.registry() {
            registry.get_or_create_page(window.as_ref(), page, &urls, &layout.content);
            registry.attach_page(page);
        }
        self.active_page = page;
        self.apply_offset(display, self.slider.offset_y());
        self.push_page_state();
    }

    /// Switch to another page: validate, detach, reuse-or-create, attach.
    /// An invalid index fails with no side effects.
    pub(super) fn switch_page(&mut self, event_loop: &ActiveEventLoop, index: usize) -> bool {
        if !page_index_valid(index, self.config.pages.len()) {
            tracing::warn!(index, pages = self.config.pages.len(), "invalid page index");
            return false;
        }
        if self.surfaces.as_ref().and_then(|s| s.attached_page()) == Some(index) {
            return true;
        }

        let display = self.target_display(event_loop);
        if let Some(registry) = self.registry() {
            registry.detach_current();
        }
        self.mount_page(&display, index);
        tracing::info!(page = index, "switched page");
        true
    }

    /// Reload every live surface of the active page in place.
    pub(super) fn refresh_current_page(&mut self) {
        let page = self.active_page;
        if let Some(registry) = self.registry() {
            registry.refresh_page(page);
        }
    }

    /// Adopt a changed configuration: persist-side effects already done.
    ///
    /// URLs and widths may have moved, so the entire content cache is
    /// invalidated and page 0 is rebuilt at the hidden position; the
    /// toolbar surface is untouched. The host window is repositioned in
    /// case the target display changed.
    pub(super) fn reapply_config(&mut self, event_loop: &ActiveEventLoop) {
        let display = self.target_display(event_loop);

        if let Some(window) = &self.window {
            window.set_outer_position(winit::dpi::PhysicalPosition::new(
                display.bounds.x,
                display.bounds.y,
            ));
            let _ = window.request_inner_size(winit::dpi::PhysicalSize::new(
                display.bounds.width.max(0) as u32,
                display.bounds.height.max(0) as u32,
            ));
        }

        if let Some(registry) = self.registry() {
            registry.detach_current();
            registry.invalidate_all();
        }
        self.slider.reset_hidden(self.hidden_offset(&display));
        self.mount_page(&display, 0);
        tracing::info!("config reapplied");
    }

    /// Tell the toolbar page how many page dots to draw and which is lit.
    pub(super) fn push_page_state(&mut self) {
        let payload = json!({
            "count": self.config.pages.len(),
            "active": self.active_page,
        });
        if let Some(registry) = self.registry() {
            registry.send_to_toolbar("pages", &payload);
        }
    }
}

/// `0 <= index < page_count`.
fn page_index_valid(index: usize, page_count: usize) -> bool {
    index < page_count
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledge_config::{DockConfig, PageConfig, PageItemConfig};

    fn two_page_config() -> DockConfig {
        let page = |url: &str| PageConfig {
            items: vec![PageItemConfig {
                url: url.into(),
                width: None,
            }],
        };
        DockConfig {
            pages: vec![page("https://a.example"), page("https://b.example")],
            ..Default::default()
        }
    }

    #[test]
    fn page_index_bounds() {
        assert!(page_index_valid(0, 2));
        assert!(page_index_valid(1, 2));
        assert!(!page_index_valid(2, 2));
        assert!(!page_index_valid(5, 2));
        assert!(!page_index_valid(0, 0));
    }

    #[test]
    fn page_plan_skips_items_without_urls() {
        let mut config = two_page_config();
        config.pages[0].items.push(PageItemConfig {
            url: "   ".into(),
            width: Some(40.0),
        });
        let app = crate::app::DockApp::new(config, false);

        let (urls, widths) = app.page_plan(0);
        assert_eq!(urls, vec!["https://a.example".to_string()]);
        // The blank item is gone entirely; the survivor takes the span.
        assert_eq!(widths, vec![100.0]);
    }

    #[test]
    fn page_plan_for_out_of_range_page_is_empty() {
        let app = crate::app::DockApp::new(two_page_config(), false);
        let (urls, widths) = app.page_plan(9);
        assert!(urls.is_empty());
        assert!(widths.is_empty());
    }

    #[test]
    fn shown_and_hidden_offsets_from_display_geometry() {
        use ledge_common::{Display, Rect};
        use ledge_dock::HIDDEN_MARGIN;

        let app = crate::app::DockApp::new(two_page_config(), false);
        let display = Display {
            id: "1".into(),
            is_primary: true,
            bounds: Rect::new(0, 0, 1920, 1080),
            work_area: Rect::new(0, 0, 1920, 1040),
        };
        let size = app.dock_size(&display);

        // 50% default height of the 1040px work area = 520px tall.
        assert_eq!(app.shown_offset(&display, size), 1040 - 520);
        assert_eq!(app.hidden_offset(&display), 1080 + HIDDEN_MARGIN);
    }
}
