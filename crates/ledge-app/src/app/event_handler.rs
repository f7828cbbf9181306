//! `ApplicationHandler` implementation for the winit event loop.

use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::DockApp;

impl ApplicationHandler for DockApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize(event_loop) {
            event_loop.exit();
            return;
        }

        if self.first_run {
            self.first_run = false;
            self.open_settings(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.is_settings_window(window_id) {
            if matches!(event, WindowEvent::CloseRequested | WindowEvent::Destroyed) {
                self.close_settings();
            }
            return;
        }

        match event {
            // The overlay never closes from a window signal: it slides
            // away and persists hidden. Only the quit path ends the
            // process.
            WindowEvent::CloseRequested => {
                tracing::info!("Overlay close suppressed, hiding instead");
                let display = self.target_display(event_loop);
                let target = self.hidden_offset(&display);
                self.slider.request_hide(Instant::now(), target);
            }

            WindowEvent::RedrawRequested => {
                // Surfaces paint themselves; the host window is empty.
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.run_timers(event_loop);
    }
}
