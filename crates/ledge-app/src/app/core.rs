//! DockApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use ledge_config::DockConfig;
use ledge_dock::{PointerTracker, SlideAnimator, TrackerSettings, HIDDEN_MARGIN};
use ledge_webview::SurfaceRegistry;

use super::settings::SettingsWindow;
use super::tray::Tray;

/// Top-level application state. Owns every handle and timer; there are no
/// ambient globals.
pub struct DockApp {
    pub(super) config: DockConfig,

    // Host overlay window, full display bounds, borderless, always-on-top
    pub(super) window: Option<Arc<Window>>,

    // Surfaces: toolbar + per-page content cache
    pub(super) surfaces: Option<SurfaceRegistry>,
    pub(super) active_page: usize,

    // Visibility state machine and pointer tracker
    pub(super) slider: SlideAnimator,
    pub(super) tracker: PointerTracker,
    pub(super) pinned: bool,

    // Tray affordance and on-demand settings window
    pub(super) tray: Option<Tray>,
    pub(super) settings: Option<SettingsWindow>,

    // Open the settings window on first launch (no config existed)
    pub(super) first_run: bool,

    pub(super) should_exit: bool,
    pub(super) quitting: bool,
    pub(super) last_poll: Instant,
}

impl DockApp {
    pub fn new(config: DockConfig, first_run: bool) -> Self {
        Self {
            config,
            window: None,
            surfaces: None,
            active_page: 0,
            // Placeholder hidden offset until the target display is known.
            slider: SlideAnimator::new(1080 + HIDDEN_MARGIN),
            tracker: PointerTracker::new(TrackerSettings::default()),
            pinned: false,
            tray: None,
            settings: None,
            first_run,
            should_exit: false,
            quitting: false,
            last_poll: Instant::now(),
        }
    }

    pub(super) fn registry(&mut self) -> Option<&mut SurfaceRegistry> {
        self.surfaces.as_mut()
    }
}
