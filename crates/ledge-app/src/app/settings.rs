//! On-demand settings window.

use std::sync::Arc;

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId, WindowLevel};

use ledge_common::Rect;
use ledge_webview::{pages, SurfaceHandle};

use super::core::DockApp;

const SETTINGS_WIDTH: i32 = 520;
const SETTINGS_HEIGHT: i32 = 720;

/// The settings window plus its embedded page surface. Dropping it tears
/// both down.
pub(super) struct SettingsWindow {
    pub window: Arc<Window>,
    pub surface: SurfaceHandle,
}

impl DockApp {
    /// Open the settings window, or focus it if it is already open.
    pub(super) fn open_settings(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(settings) = &self.settings {
            settings.window.focus_window();
            return;
        }

        let display = self.target_display(event_loop);
        let x = display.work_area.x + (display.work_area.width - SETTINGS_WIDTH) / 2;
        let y = display.work_area.y + (display.work_area.height - SETTINGS_HEIGHT) / 2;

        let attrs = WindowAttributes::default()
            .with_title("Ledge Settings")
            .with_decorations(false)
            .with_transparent(true)
            .with_resizable(false)
            .with_window_level(WindowLevel::AlwaysOnTop)
            .with_position(PhysicalPosition::new(x, y))
            .with_inner_size(PhysicalSize::new(
                SETTINGS_WIDTH as u32,
                SETTINGS_HEIGHT as u32,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create settings window: {e}");
                return;
            }
        };

        let bounds = Rect::new(0, 0, SETTINGS_WIDTH, SETTINGS_HEIGHT);
        let surface = match self
            .surfaces
            .as_mut()
            .map(|r| r.create_standalone(window.as_ref(), bounds, pages::SETTINGS_HTML))
        {
            Some(Ok(surface)) => surface,
            Some(Err(e)) => {
                tracing::error!("Failed to create settings surface: {e}");
                return;
            }
            None => return,
        };

        tracing::info!("Settings window opened");
        self.settings = Some(SettingsWindow { window, surface });
    }

    /// Close and destroy the settings window. Unlike the overlay, closing
    /// this window is allowed.
    pub(super) fn close_settings(&mut self) {
        if self.settings.take().is_some() {
            tracing::info!("Settings window closed");
        }
    }

    pub(super) fn is_settings_window(&self, id: WindowId) -> bool {
        self.settings
            .as_ref()
            .map(|s| s.window.id() == id)
            .unwrap_or(false)
    }
}
