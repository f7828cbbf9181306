//! Timer multiplexing: pointer poll, animation frames, debounce fires.
//!
//! Single-threaded cooperative model. Every timer is an `Instant`
//! deadline; `about_to_wait` runs whatever is due and schedules the next
//! wake-up with `ControlFlow::WaitUntil`.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowLevel;

use ledge_dock::{surface_rects, TickInput};
use ledge_platform::global_cursor_position;

use super::core::DockApp;

impl DockApp {
    /// Run due work and schedule the next wake-up.
    pub(super) fn run_timers(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        self.process_surface_events(event_loop);
        self.poll_tray(event_loop);
        if self.should_exit {
            event_loop.exit();
            return;
        }

        self.pointer_tick(now, event_loop);
        self.animation_tick(now, event_loop);

        // Next wake: the earlier of the tracker's poll/debounce deadline
        // and the animation frame.
        let mut next = self.tracker.next_deadline(now);
        if let Some(frame) = self.slider.next_frame(now) {
            next = Some(next.map_or(frame, |n| n.min(frame)));
        }
        match next {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }

    /// One pointer-tracker tick over a single consistent snapshot.
    fn pointer_tick(&mut self, now: Instant, event_loop: &ActiveEventLoop) {
        if !self.tracker.is_running() {
            return;
        }
        // Window events wake the loop between poll deadlines; hold the
        // fixed 50ms cadence regardless.
        if now.duration_since(self.last_poll) < self.tracker.settings().poll_interval {
            return;
        }
        self.last_poll = now;

        let display = self.target_display(event_loop);
        let size = self.dock_size(&display);
        let (_, widths) = self.page_plan(self.active_page);
        let layout = surface_rects(&display, size, &widths, self.slider.offset_y());

        let input = TickInput {
            cursor: global_cursor_position(),
            display: &display,
            toolbar: layout.toolbar,
            content: &layout.content,
            visible: self.slider.is_visible(),
            animating: self.slider.is_animating(),
            pinned: self.pinned,
            trigger_distance: self.config.trigger_distance,
        };

        let Some(actions) = self.tracker.tick(now, &input) else {
            return;
        };

        // Click-through first, re-applied every tick: there is no way to
        // read the previous state back. Hit-testing off means events pass
        // through to whatever is beneath.
        if let Some(window) = &self.window {
            if let Err(e) = window.set_cursor_hittest(!actions.click_through) {
                tracing::debug!("cursor hittest update failed: {e}");
            }
        }

        if actions.show {
            let target = self.shown_offset(&display, size);
            self.slider.request_show(now, target);
        } else if actions.hide {
            let target = self.hidden_offset(&display);
            self.slider.request_hide(now, target);
        }
    }

    /// Advance the slide animation and apply the new offset.
    fn animation_tick(&mut self, now: Instant, event_loop: &ActiveEventLoop) {
        let Some(update) = self.slider.tick(now) else {
            return;
        };

        let display = self.target_display(event_loop);
        self.apply_offset(&display, update.offset_y);

        if update.reassert_topmost {
            // Other windows can steal the top-most order mid-animation.
            if let Some(window) = &self.window {
                window.set_window_level(WindowLevel::AlwaysOnTop);
            }
        }
        if let Some(state) = update.completed {
            tracing::debug!(?state, offset = update.offset_y, "slide finished");
        }
    }
}
