//! Pointer tracking: trigger-zone classification and debounced
//! show/hide intent.
//!
//! The tracker is a pure per-tick classifier. The app layer samples the
//! global cursor, hands in one consistent snapshot per tick, and executes
//! whatever [`TickActions`] come back (click-through flag first, then
//! show/hide). Debounce timers are single-slot `Option<Instant>` deadlines.

use std::time::{Duration, Instant};

use ledge_common::{Display, Rect};

#[derive(Debug, Clone, Copy)]
pub struct TrackerSettings {
    pub poll_interval: Duration,
    /// Dwell before a trigger-zone entry shows the dock.
    pub show_delay: Duration,
    /// Grace period before a pointer departure hides the dock.
    pub hide_delay: Duration,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(50),
            show_delay: Duration::from_millis(100),
            hide_delay: Duration::from_millis(300),
        }
    }
}

/// One consistent snapshot of the world for a single poll tick.
#[derive(Debug, Clone, Copy)]
pub struct TickInput<'a> {
    /// Global cursor position, virtual-screen coordinates. `None` when the
    /// platform sample failed.
    pub cursor: Option<(i32, i32)>,
    pub display: &'a Display,
    /// Toolbar rect, host-window coordinates.
    pub toolbar: Rect,
    /// Active content surface rects, host-window coordinates.
    pub content: &'a [Rect],
    pub visible: bool,
    pub animating: bool,
    pub pinned: bool,
    pub trigger_distance: i32,
}

/// What the app must do after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickActions {
    /// Value for the host window's click-through flag. Re-applied every
    /// tick; there is no reliable way to read the previous state back.
    pub click_through: bool,
    pub show: bool,
    pub hide: bool,
}

pub struct PointerTracker {
    settings: TrackerSettings,
    running: bool,
    show_deadline: Option<Instant>,
    hide_deadline: Option<Instant>,
}

impl PointerTracker {
    pub fn new(settings: TrackerSettings) -> Self {
        Self {
            settings,
            running: false,
            show_deadline: None,
            hide_deadline: None,
        }
    }

    /// Idempotent.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Idempotent; clears both debounce slots.
    pub fn stop(&mut self) {
        self.running = false;
        self.clear_timers();
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn settings(&self) -> TrackerSettings {
        self.settings
    }

    pub fn clear_timers(&mut self) {
        self.show_deadline = None;
        self.hide_deadline = None;
    }

    pub fn has_pending_timer(&self) -> bool {
        self.show_deadline.is_some() || self.hide_deadline.is_some()
    }

    /// When this tracker next needs to run: the earlier of the regular
    /// poll tick and any pending debounce deadline.
    pub fn next_deadline(&self, now: Instant) -> Option<Instant> {
        if !self.running {
            return None;
        }
        let mut next = now + self.settings.poll_interval;
        if let Some(d) = self.show_deadline {
            next = next.min(d);
        }
        if let Some(d) = self.hide_deadline {
            next = next.min(d);
        }
        Some(next)
    }

    /// Classify one pointer snapshot. Returns `None` while stopped.
    pub fn tick(&mut self, now: Instant, input: &TickInput<'_>) -> Option<TickActions> {
        if !self.running {
            return None;
        }

        let mut actions = TickActions {
            click_through: true,
            show: false,
            hide: false,
        };

        let Some((cx, cy)) = input.cursor else {
            // No usable sample: pass events through and hold all timers.
            self.clear_timers();
            return Some(actions);
        };

        let display = input.display;
        let on_display = display.contains(cx, cy);

        // Host window origin is pinned to the display bounds origin.
        let wx = cx - display.bounds.x;
        let wy = cy - display.bounds.y;
        let inside_content = input.toolbar.contains(wx, wy)
            || input.content.iter().any(|r| r.contains(wx, wy));
        actions.click_through = !inside_content;

        let in_trigger_zone = on_display
            && (display.work_area.y + display.bounds.height - cy) <= input.trigger_distance;
        let in_taskbar = on_display && !display.work_area.contains(cx, cy);

        if in_trigger_zone && !input.animating {
            self.hide_deadline = None;
            if !input.visible {
                match self.show_deadline {
                    Some(deadline) if now >= deadline => {
                        self.show_deadline = None;
                        actions.show = true;
                    }
                    Some(_) => {}
                    // Single-slot: arm only when empty.
                    None => self.show_deadline = Some(now + self.settings.show_delay),
                }
            }
        } else {
            self.show_deadline = None;

            if input.visible && !input.animating {
                if input.pinned {
                    // Pinned: tracker-issued hides are suppressed entirely.
                    self.hide_deadline = None;
                } else if !inside_content && !in_taskbar {
                    match self.hide_deadline {
                        Some(deadline) if now >= deadline => {
                            self.hide_deadline = None;
                            actions.hide = true;
                        }
                        Some(_) => {}
                        None => self.hide_deadline = Some(now + self.settings.hide_delay),
                    }
                } else {
                    // Re-entry into content or the taskbar cancels the hide.
                    self.hide_deadline = None;
                }
            }
        }

        Some(actions)
    }
}
