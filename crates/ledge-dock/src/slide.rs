//! Visibility state machine and slide animation driver.
//!
//! The animator owns the dock's visibility state and the continuous
//! vertical offset of the surfaces inside the host window. It never
//! touches a clock: the app layer passes `Instant`s in and applies the
//! returned offsets through the compositor.

use std::time::{Duration, Instant};

use crate::easing::Easing;

/// Pixels the surfaces sit below the screen bottom while hidden.
pub const HIDDEN_MARGIN: i32 = 50;

/// Offsets may land within this many pixels of the target and still be
/// treated as arrived (skips zero-length animations).
const SNAP_TOLERANCE: i32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Showing,
    Shown,
    Hiding,
}

/// Run-time animation knobs. Configurable but not persisted.
#[derive(Debug, Clone, Copy)]
pub struct AnimationSettings {
    pub duration: Duration,
    pub fps: u32,
    pub show_easing: Easing,
    pub hide_easing: Easing,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(250),
            fps: 60,
            show_easing: Easing::EaseOutCubic,
            hide_easing: Easing::EaseInOutCubic,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ActiveSlide {
    start_offset: i32,
    target_offset: i32,
    started: Instant,
    easing: Easing,
}

/// Result of one animation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickUpdate {
    /// New offset to apply through the compositor.
    pub offset_y: i32,
    /// Set when this tick finished the animation.
    pub completed: Option<Visibility>,
    /// Reassert the host window's always-on-top level (show completion
    /// only; other windows can steal the top-most order mid-animation).
    pub reassert_topmost: bool,
}

pub struct SlideAnimator {
    visibility: Visibility,
    offset_y: i32,
    slide: Option<ActiveSlide>,
    settings: AnimationSettings,
}

impl SlideAnimator {
    /// Start hidden at the given offset.
    pub fn new(hidden_offset: i32) -> Self {
        Self {
            visibility: Visibility::Hidden,
            offset_y: hidden_offset,
            slide: None,
            settings: AnimationSettings::default(),
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Current vertical offset of the surfaces' top edge, host-window frame.
    pub fn offset_y(&self) -> i32 {
        self.offset_y
    }

    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    /// Anything above the fully-hidden position counts as visible.
    pub fn is_visible(&self) -> bool {
        self.visibility != Visibility::Hidden
    }

    pub fn settings(&self) -> AnimationSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: AnimationSettings) {
        self.settings = settings;
    }

    /// Begin sliding toward `target` (the shown offset).
    ///
    /// No-op while a show animation is already running. A show during a
    /// hide cancels the hide and restarts from the hide's last-applied
    /// offset, so the dock reverses without a visual jump. If the offset is
    /// already at the target, transitions straight to `Shown`.
    pub fn request_show(&mut self, now: Instant, target: i32) {
        if self.visibility == Visibility::Showing {
            return;
        }
        if (self.offset_y - target).abs() <= SNAP_TOLERANCE {
            self.slide = None;
            self.offset_y = target;
            self.visibility = Visibility::Shown;
            return;
        }
        // Cancels any in-flight hide: one animation at a time.
        self.slide = Some(ActiveSlide {
            start_offset: self.offset_y,
            target_offset: target,
            started: now,
            easing: self.settings.show_easing,
        });
        self.visibility = Visibility::Showing;
    }

    /// Begin sliding toward `target` (the hidden offset). Symmetric to
    /// [`request_show`](Self::request_show).
    pub fn request_hide(&mut self, now: Instant, target: i32) {
        if self.visibility == Visibility::Hiding {
            return;
        }
        if (self.offset_y - target).abs() <= SNAP_TOLERANCE {
            self.slide = None;
            self.offset_y = target;
            self.visibility = Visibility::Hidden;
            return;
        }
        self.slide = Some(ActiveSlide {
            start_offset: self.offset_y,
            target_offset: target,
            started: now,
            easing: self.settings.hide_easing,
        });
        self.visibility = Visibility::Hiding;
    }

    /// Advance the active animation. Returns `None` when idle.
    ///
    /// On completion the offset snaps exactly to the target (no rounding
    /// drift) and the state settles to `Shown`/`Hidden`.
    pub fn tick(&mut self, now: Instant) -> Option<TickUpdate> {
        let slide = self.slide?;

        let elapsed = now.saturating_duration_since(slide.started);
        let progress =
            (elapsed.as_secs_f64() / self.settings.duration.as_secs_f64()).min(1.0);
        let eased = slide.easing.apply(progress);

        let distance = (slide.target_offset - slide.start_offset) as f64;
        self.offset_y = slide.start_offset + (distance * eased).round() as i32;

        if progress >= 1.0 {
            self.offset_y = slide.target_offset;
            self.slide = None;
            let settled = match self.visibility {
                Visibility::Showing => Visibility::Shown,
                _ => Visibility::Hidden,
            };
            self.visibility = settled;
            return Some(TickUpdate {
                offset_y: self.offset_y,
                completed: Some(settled),
                reassert_topmost: settled == Visibility::Shown,
            });
        }

        Some(TickUpdate {
            offset_y: self.offset_y,
            completed: None,
            reassert_topmost: false,
        })
    }

    /// When the next animation frame is due, or `None` while idle.
    pub fn next_frame(&self, now: Instant) -> Option<Instant> {
        self.slide?;
        Some(now + Duration::from_secs_f64(1.0 / self.settings.fps as f64))
    }

    /// Drop the active animation without settling. Teardown-only; calling
    /// it twice is fine.
    pub fn cancel(&mut self) {
        self.slide = None;
    }

    /// Jump straight to a hidden position. Used on config reapply, where
    /// geometry may have changed under the animation.
    pub fn reset_hidden(&mut self, hidden_offset: i32) {
        self.slide = None;
        self.offset_y = hidden_offset;
        self.visibility = Visibility::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOWN_Y: i32 = 520;
    const HIDDEN_Y: i32 = 1130;

    fn ms(base: Instant, millis: u64) -> Instant {
        base + Duration::from_millis(millis)
    }

    #[test]
    fn show_animates_from_hidden_to_shown() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(HIDDEN_Y);

        anim.request_show(t0, SHOWN_Y);
        assert_eq!(anim.visibility(), Visibility::Showing);
        assert!(anim.is_animating());

        let mid = anim.tick(ms(t0, 125)).unwrap();
        assert!(mid.offset_y < HIDDEN_Y && mid.offset_y > SHOWN_Y);
        assert!(mid.completed.is_none());

        let done = anim.tick(ms(t0, 300)).unwrap();
        assert_eq!(done.offset_y, SHOWN_Y);
        assert_eq!(done.completed, Some(Visibility::Shown));
        assert!(done.reassert_topmost);
        assert_eq!(anim.visibility(), Visibility::Shown);
        assert!(!anim.is_animating());
        assert!(anim.tick(ms(t0, 400)).is_none());
    }

    #[test]
    fn hide_completion_does_not_reassert_topmost() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(HIDDEN_Y);
        anim.request_show(t0, SHOWN_Y);
        anim.tick(ms(t0, 300));

        anim.request_hide(ms(t0, 400), HIDDEN_Y);
        let done = anim.tick(ms(t0, 700)).unwrap();
        assert_eq!(done.completed, Some(Visibility::Hidden));
        assert!(!done.reassert_topmost);
    }

    #[test]
    fn show_then_hide_before_completion_ends_hidden_with_no_timer() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(HIDDEN_Y);

        anim.request_show(t0, SHOWN_Y);
        anim.tick(ms(t0, 100));
        let mid_offset = anim.offset_y();
        assert!(mid_offset < HIDDEN_Y);

        // Hide cancels the show and starts from the in-flight offset.
        anim.request_hide(ms(t0, 100), HIDDEN_Y);
        assert_eq!(anim.visibility(), Visibility::Hiding);

        let done = anim.tick(ms(t0, 400)).unwrap();
        assert_eq!(done.completed, Some(Visibility::Hidden));
        assert_eq!(anim.offset_y(), HIDDEN_Y);
        assert!(!anim.is_animating(), "no leftover active timer");
        assert!(anim.next_frame(ms(t0, 400)).is_none());
    }

    #[test]
    fn show_while_hiding_restarts_from_current_offset() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(HIDDEN_Y);
        anim.request_show(t0, SHOWN_Y);
        anim.tick(ms(t0, 300));

        anim.request_hide(ms(t0, 400), HIDDEN_Y);
        anim.tick(ms(t0, 500));
        let mid_offset = anim.offset_y();
        assert!(mid_offset > SHOWN_Y && mid_offset < HIDDEN_Y);

        anim.request_show(ms(t0, 500), SHOWN_Y);
        assert_eq!(anim.visibility(), Visibility::Showing);
        // First frame continues from where the hide left off, not from
        // the fully-hidden position.
        let first = anim.tick(ms(t0, 505)).unwrap();
        assert!((first.offset_y - mid_offset).abs() < 80);
    }

    #[test]
    fn show_while_showing_is_a_noop() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(HIDDEN_Y);
        anim.request_show(t0, SHOWN_Y);
        anim.tick(ms(t0, 100));
        let offset = anim.offset_y();

        // A second request must not restart the animation.
        anim.request_show(ms(t0, 100), SHOWN_Y);
        let update = anim.tick(ms(t0, 101)).unwrap();
        assert!(update.offset_y <= offset + 1);
        assert!((update.offset_y - offset).abs() < 40);
    }

    #[test]
    fn show_twice_while_shown_is_idempotent() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(HIDDEN_Y);
        anim.request_show(t0, SHOWN_Y);
        anim.tick(ms(t0, 300));
        assert_eq!(anim.visibility(), Visibility::Shown);

        anim.request_show(ms(t0, 400), SHOWN_Y);
        assert_eq!(anim.visibility(), Visibility::Shown);
        assert!(!anim.is_animating());
        assert_eq!(anim.offset_y(), SHOWN_Y);

        anim.request_show(ms(t0, 500), SHOWN_Y);
        assert_eq!(anim.offset_y(), SHOWN_Y);
        assert!(anim.tick(ms(t0, 500)).is_none());
    }

    #[test]
    fn hide_while_hidden_is_idempotent() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(HIDDEN_Y);
        anim.request_hide(t0, HIDDEN_Y);
        assert_eq!(anim.visibility(), Visibility::Hidden);
        assert!(!anim.is_animating());
    }

    #[test]
    fn near_target_snaps_without_animation() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(SHOWN_Y + 1);
        anim.request_show(t0, SHOWN_Y);
        assert_eq!(anim.visibility(), Visibility::Shown);
        assert_eq!(anim.offset_y(), SHOWN_Y);
        assert!(!anim.is_animating());
    }

    #[test]
    fn completion_snaps_exactly_to_target() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(HIDDEN_Y);
        anim.request_show(t0, SHOWN_Y);
        // Tick far past the duration in one jump.
        let done = anim.tick(ms(t0, 10_000)).unwrap();
        assert_eq!(done.offset_y, SHOWN_Y);
    }

    #[test]
    fn visibility_flags_during_lifecycle() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(HIDDEN_Y);
        assert!(!anim.is_visible());

        anim.request_show(t0, SHOWN_Y);
        assert!(anim.is_visible());

        anim.tick(ms(t0, 300));
        assert!(anim.is_visible());

        anim.request_hide(ms(t0, 400), HIDDEN_Y);
        assert!(anim.is_visible(), "still visible while sliding out");

        anim.tick(ms(t0, 700));
        assert!(!anim.is_visible());
    }

    #[test]
    fn next_frame_follows_configured_fps() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(HIDDEN_Y);
        assert!(anim.next_frame(t0).is_none());

        anim.request_show(t0, SHOWN_Y);
        let frame = anim.next_frame(t0).unwrap();
        let interval = frame - t0;
        assert!(interval >= Duration::from_millis(16) && interval <= Duration::from_millis(17));
    }

    #[test]
    fn cancel_is_idempotent() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(HIDDEN_Y);
        anim.request_show(t0, SHOWN_Y);
        anim.cancel();
        anim.cancel();
        assert!(!anim.is_animating());
        assert!(anim.tick(ms(t0, 100)).is_none());
    }

    #[test]
    fn reset_hidden_drops_animation_and_repositions() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(HIDDEN_Y);
        anim.request_show(t0, SHOWN_Y);
        anim.tick(ms(t0, 100));

        anim.reset_hidden(HIDDEN_Y + 70);
        assert_eq!(anim.visibility(), Visibility::Hidden);
        assert_eq!(anim.offset_y(), HIDDEN_Y + 70);
        assert!(!anim.is_animating());
    }

    #[test]
    fn custom_duration_is_honored() {
        let t0 = Instant::now();
        let mut anim = SlideAnimator::new(HIDDEN_Y);
        anim.set_settings(AnimationSettings {
            duration: Duration::from_millis(100),
            ..AnimationSettings::default()
        });
        anim.request_show(t0, SHOWN_Y);
        let done = anim.tick(ms(t0, 100)).unwrap();
        assert_eq!(done.completed, Some(Visibility::Shown));
    }
}
