//! Dock core: the edge-trigger/visibility state machine and the
//! multi-surface compositing math.
//!
//! Everything in this crate is pure — no windowing, no webviews, no wall
//! clock. Time-dependent pieces take explicit `Instant`s so the app layer
//! drives them from its event loop and tests drive them from fabricated
//! timelines.

pub mod compositor;
pub mod easing;
pub mod layout;
pub mod resolver;
pub mod slide;
pub mod tracker;

pub use compositor::{surface_rects, SurfaceLayout, TOOLBAR_WIDTH};
pub use easing::Easing;
pub use layout::{content_size, ContentSize};
pub use resolver::resolve_display;
pub use slide::{AnimationSettings, SlideAnimator, TickUpdate, Visibility, HIDDEN_MARGIN};
pub use tracker::{PointerTracker, TickActions, TickInput, TrackerSettings};
