//! Surface event types.

use ledge_common::SurfaceId;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Lifecycle of a content surface, observed via load events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleState {
    Loading,
    Ready,
    Destroyed,
}

/// Events emitted by a surface, drained on the event-loop thread.
#[derive(Debug, Clone)]
pub enum SurfaceEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        id: SurfaceId,
        state: PageLoadState,
        url: String,
    },
    /// An IPC message arrived from the page's JavaScript.
    IpcMessage { id: SurfaceId, body: String },
    /// Surface was destroyed.
    Closed { id: SurfaceId },
}
