use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use ledge_common::SurfaceId;

use crate::events::{PageLoadState, SurfaceEvent};

use super::SurfaceManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Allowed URL schemes for surface navigation.
///
/// Dock pages are user-configured and can point at any host, so the check
/// is scheme-level: web content plus the blank page, nothing that can
/// reach the local machine.
pub const ALLOWED_SCHEMES: &[&str] = &["https://", "http://", "about:blank"];

/// Check whether a URL may be navigated to.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_SCHEMES.iter().any(|scheme| url.starts_with(scheme))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl SurfaceManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<SurfaceEvent>>>,
        id: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(%id, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(%id, body_len = body.len(), "IPC message from page");
            if let Ok(mut evts) = events.lock() {
                evts.push(SurfaceEvent::IpcMessage { id, body });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<SurfaceEvent>>>,
        id: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%id, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(SurfaceEvent::PageLoad { id, state, url });
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        id: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(%id, url = %url, "navigation blocked: scheme not allowed");
                return false;
            }
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
