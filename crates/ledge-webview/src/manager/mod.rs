//! Surface lifecycle management.
//!
//! `SurfaceManager` creates `wry::WebView` instances as children of the
//! host window; `SurfaceRegistry` layers the toolbar surface and the
//! page-index cache on top.

use std::sync::{Arc, Mutex};

use crate::events::SurfaceEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod registry;
mod types;

pub use handle::SurfaceHandle;
pub use registry::SurfaceRegistry;
pub use types::SurfaceSpec;

/// Builds surfaces and collects their events for the event-loop thread.
pub struct SurfaceManager {
    /// Event sink — handler callbacks push here, the main loop drains.
    pub(crate) events: Arc<Mutex<Vec<SurfaceEvent>>>,
    next_id: u32,
}

impl SurfaceManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            next_id: 0,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<SurfaceEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }

    pub(crate) fn allocate_id(&mut self) -> ledge_common::SurfaceId {
        let id = ledge_common::SurfaceId(self.next_id);
        self.next_id += 1;
        id
    }
}

impl Default for SurfaceManager {
    fn default() -> Self {
        Self::new()
    }
}
