use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::events::LifecycleState;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::{to_wry_rect, SurfaceHandle};
use super::types::SurfaceSpec;
use super::SurfaceManager;

impl SurfaceManager {
    /// Create a surface as a child of the host window, positioned at
    /// `bounds` (host-window frame).
    ///
    /// Creation is fire-and-forget: navigation completion arrives later
    /// as a `PageLoad` event.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        window: &W,
        bounds: ledge_common::Rect,
        page: Option<usize>,
        spec: SurfaceSpec,
    ) -> Result<SurfaceHandle, wry::Error> {
        let id = self.allocate_id();
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(to_wry_rect(bounds))
            .with_transparent(spec.transparent)
            .with_devtools(spec.devtools)
            .with_autoplay(spec.autoplay)
            .with_focused(false)
            .with_initialization_script(IPC_INIT_SCRIPT);

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), id);
        builder = Self::attach_page_load_handler(builder, events, id);
        builder = Self::attach_navigation_handler(builder, id);

        let initial_url;
        if let Some(url) = &spec.url {
            builder = builder.with_url(url);
            initial_url = url.clone();
        } else if let Some(html) = &spec.html {
            builder = builder.with_html(html);
            initial_url = "about:blank".to_string();
        } else {
            builder = builder.with_html("<html><body></body></html>");
            initial_url = "about:blank".to_string();
        }

        let webview = builder.build_as_child(window)?;

        debug!(%id, ?page, url = %initial_url, "surface created");

        Ok(SurfaceHandle {
            webview,
            id,
            page,
            url: initial_url,
            load_state: LifecycleState::Loading,
        })
    }
}
