//! Overlay window creation and initial surface setup.

use std::sync::Arc;

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{WindowAttributes, WindowLevel};

use ledge_dock::surface_rects;
use ledge_webview::{pages, SurfaceManager, SurfaceRegistry};

use super::core::DockApp;
use super::tray::Tray;

impl DockApp {
    /// Create the host overlay window, the toolbar surface, and the first
    /// page's surfaces, all at the hidden offset. Returns `false` if the
    /// event loop should exit.
    pub(super) fn initialize(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let display = self.target_display(event_loop);

        // The host window covers the full display bounds; surfaces move
        // inside it. Undecorated, transparent, never focused on launch,
        // always on top, absent from the taskbar.
        let attrs = WindowAttributes::default()
            .with_title("Ledge")
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false)
            .with_window_level(WindowLevel::AlwaysOnTop)
            .with_position(PhysicalPosition::new(display.bounds.x, display.bounds.y))
            .with_inner_size(PhysicalSize::new(
                display.bounds.width.max(0) as u32,
                display.bounds.height.max(0) as u32,
            ));

        #[cfg(target_os = "windows")]
        let attrs = {
            use winit::platform::windows::WindowAttributesExtWindows;
            attrs.with_skip_taskbar(true)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create overlay window: {e}");
                return false;
            }
        };

        // Start click-through; the tracker re-applies this every tick.
        if let Err(e) = window.set_cursor_hittest(false) {
            tracing::debug!("cursor hittest unsupported: {e}");
        }

        let mut registry = SurfaceRegistry::new(SurfaceManager::new());

        let hidden_y = self.hidden_offset(&display);
        self.slider.reset_hidden(hidden_y);

        let size = self.dock_size(&display);
        let (_, widths) = self.page_plan(0);
        let layout = surface_rects(&display, size, &widths, hidden_y);

        if let Err(e) =
            registry.ensure_toolbar(window.as_ref(), layout.toolbar, pages::TOOLBAR_HTML)
        {
            tracing::error!("Failed to create toolbar surface: {e}");
            return false;
        }

        self.window = Some(window);
        self.surfaces = Some(registry);

        self.mount_page(&display, 0);
        self.tracker.start();

        self.tray = match Tray::build() {
            Ok(tray) => Some(tray),
            Err(e) => {
                tracing::warn!("Tray unavailable: {e}");
                None
            }
        };

        tracing::info!(
            display = %display.id,
            width = size.width,
            height = size.height,
            "Overlay initialized"
        );
        true
    }
}
