//! The single quit path.

use winit::event_loop::ActiveEventLoop;

use super::core::DockApp;

impl DockApp {
    /// Release every timer and handle. Idempotent.
    ///
    /// Order:
    /// 1. Stop the pointer tracker (clears both debounce slots)
    /// 2. Cancel the slide animation
    /// 3. Destroy all surfaces, toolbar included
    /// 4. Drop the settings window
    /// 5. Drop the tray affordance
    /// 6. Drop the overlay window
    pub(super) fn teardown(&mut self) {
        self.tracker.stop();
        self.slider.cancel();

        if let Some(mut registry) = self.surfaces.take() {
            registry.destroy_all();
        }
        self.settings = None;
        self.tray = None;
        self.window = None;
    }

    /// The only path that actually ends the process.
    pub(super) fn quit(&mut self, event_loop: &ActiveEventLoop) {
        if self.quitting {
            return;
        }
        self.quitting = true;
        tracing::info!("Quit requested, tearing down");

        self.teardown();
        self.should_exit = true;
        event_loop.exit();
    }
}

#[cfg(test)]
mod tests {
    use crate::app::DockApp;
    use ledge_config::DockConfig;

    #[test]
    fn teardown_on_fresh_app_does_not_panic() {
        let mut app = DockApp::new(DockConfig::default(), false);
        app.teardown();

        assert!(app.surfaces.is_none());
        assert!(app.settings.is_none());
        assert!(app.tray.is_none());
        assert!(app.window.is_none());
        assert!(!app.tracker.is_running());
        assert!(!app.slider.is_animating());
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut app = DockApp::new(DockConfig::default(), false);
        app.teardown();
        app.teardown(); // second call must not panic

        assert!(app.surfaces.is_none());
        assert!(app.window.is_none());
    }

    #[test]
    fn teardown_clears_pending_tracker_timers() {
        let mut app = DockApp::new(DockConfig::default(), false);
        app.tracker.start();
        app.teardown();
        assert!(!app.tracker.has_pending_timer());
    }
}
