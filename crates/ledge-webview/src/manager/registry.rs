use tracing::{debug, error, warn};
use wry::raw_window_handle;

use ledge_common::{Rect, SurfaceId};

use crate::cache::PageCache;
use crate::events::{LifecycleState, SurfaceEvent};
use crate::inject;

use super::handle::SurfaceHandle;
use super::types::SurfaceSpec;
use super::SurfaceManager;

/// Owns the toolbar surface and the per-page content surface cache.
///
/// The toolbar is created once and survives page switches and config
/// changes; content surfaces live in the cache and are destroyed only by
/// `invalidate_all` (config change) or `destroy_all` (teardown).
pub struct SurfaceRegistry {
    manager: SurfaceManager,
    toolbar: Option<SurfaceHandle>,
    cache: PageCache<SurfaceHandle>,
    /// Optional user script evaluated in every content surface after load.
    custom_script: Option<String>,
}

impl SurfaceRegistry {
    pub fn new(manager: SurfaceManager) -> Self {
        Self {
            manager,
            toolbar: None,
            cache: PageCache::new(),
            custom_script: None,
        }
    }

    pub fn set_custom_script(&mut self, script: Option<String>) {
        self.custom_script = script;
    }

    /// Create the toolbar surface if it does not exist yet.
    pub fn ensure_toolbar<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        window: &W,
        bounds: Rect,
        html: &str,
    ) -> Result<(), wry::Error> {
        if self.toolbar.is_some() {
            return Ok(());
        }
        let handle = self
            .manager
            .create(window, bounds, None, SurfaceSpec::with_html(html))?;
        self.toolbar = Some(handle);
        Ok(())
    }

    pub fn toolbar(&self) -> Option<&SurfaceHandle> {
        self.toolbar.as_ref()
    }

    /// Push an IPC message to the toolbar page.
    pub fn send_to_toolbar(&self, kind: &str, payload: &serde_json::Value) {
        if let Some(toolbar) = &self.toolbar {
            if let Err(e) = toolbar.send_ipc(kind, payload) {
                warn!("toolbar IPC send failed: {e}");
            }
        }
    }

    /// The cached surfaces for `page`, creating them on a miss.
    ///
    /// `urls` must already exclude items without a resolvable URL (they
    /// are skipped upstream, not an error); `rects` positions each new
    /// surface. Returns how many surfaces the page has. A surface whose
    /// creation fails is logged and left out — that slot degrades to
    /// "no content".
    pub fn get_or_create_page<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        window: &W,
        page: usize,
        urls: &[String],
        rects: &[Rect],
    ) -> usize {
        if !self.cache.contains(page) {
            let mut surfaces = Vec::with_capacity(urls.len());
            for (i, url) in urls.iter().enumerate() {
                let bounds = rects
                    .get(i)
                    .copied()
                    .unwrap_or_else(|| Rect::new(0, 0, 0, 0));
                match self
                    .manager
                    .create(window, bounds, Some(page), SurfaceSpec::with_url(url))
                {
                    Ok(handle) => surfaces.push(handle),
                    Err(e) => error!(page, url = %url, "surface creation failed: {e}"),
                }
            }
            debug!(page, count = surfaces.len(), "page surfaces created");
            self.cache.get_or_create(page, move || surfaces);
        }
        self.cache.get(page).map(|s| s.len()).unwrap_or(0)
    }

    pub fn attached_page(&self) -> Option<usize> {
        self.cache.attached()
    }

    /// Hide the currently attached page's surfaces without destroying
    /// them; their scroll/session state survives in the cache.
    pub fn detach_current(&mut self) {
        if let Some(page) = self.cache.detach() {
            if let Some(surfaces) = self.cache.get(page) {
                for surface in surfaces {
                    if let Err(e) = surface.set_visible(false) {
                        warn!(id = %surface.id(), "detach hide failed: {e}");
                    }
                }
            }
        }
    }

    /// Mark `page` attached and make its surfaces visible.
    pub fn attach_page(&mut self, page: usize) {
        self.cache.attach(page);
        if let Some(surfaces) = self.cache.get(page) {
            for surface in surfaces {
                if let Err(e) = surface.set_visible(true) {
                    warn!(id = %surface.id(), "attach show failed: {e}");
                }
            }
        }
    }

    /// Destroy every cached content surface and clear the cache.
    ///
    /// Called on config change — URLs and widths may have moved. The
    /// toolbar surface is unaffected. Destruction and clearing are one
    /// step; a following `get_or_create_page` always builds fresh.
    pub fn invalidate_all(&mut self) {
        let drained = self.cache.invalidate_all();
        for mut surface in drained {
            surface.set_load_state(LifecycleState::Destroyed);
            if let Ok(mut evts) = self.manager.events.lock() {
                evts.push(SurfaceEvent::Closed { id: surface.id() });
            }
            // Dropping the handle tears down the underlying webview.
        }
        debug!("surface cache invalidated");
    }

    /// Reload every live surface of `page` in place.
    pub fn refresh_page(&mut self, page: usize) {
        if let Some(surfaces) = self.cache.get(page) {
            for surface in surfaces {
                if surface.load_state() == LifecycleState::Destroyed {
                    continue;
                }
                if let Err(e) = surface.reload() {
                    warn!(id = %surface.id(), "reload failed: {e}");
                }
            }
        }
    }

    /// Apply compositor output: toolbar rect plus one rect per attached
    /// content surface. Per-surface failures are logged and skipped so a
    /// dead surface never aborts an animation tick.
    pub fn apply_layout(&self, toolbar: Rect, content: &[Rect]) {
        if let Some(handle) = &self.toolbar {
            if let Err(e) = handle.set_bounds(toolbar) {
                warn!("toolbar bounds update failed: {e}");
            }
        }
        if let Some(page) = self.cache.attached() {
            if let Some(surfaces) = self.cache.get(page) {
                for (surface, rect) in surfaces.iter().zip(content) {
                    if let Err(e) = surface.set_bounds(*rect) {
                        warn!(id = %surface.id(), "bounds update failed: {e}");
                    }
                }
            }
        }
    }

    /// Handle a load-finished notification: flip the surface to `Ready`
    /// and run the injection hooks. Injection failures are logged per
    /// script and do not affect the surface.
    pub fn on_load_finished(&mut self, id: SurfaceId, url: &str) {
        if let Some(toolbar) = &mut self.toolbar {
            if toolbar.id() == id {
                toolbar.set_load_state(LifecycleState::Ready);
                return;
            }
        }

        let custom_script = self.custom_script.clone();
        if let Some(surface) = self.find_content_mut(id) {
            surface.set_load_state(LifecycleState::Ready);

            if let Some(script) = inject::ad_skip_script_for(url) {
                if let Err(e) = surface.evaluate_script(script) {
                    warn!(%id, "ad-skip injection failed: {e}");
                }
            }
            if let Some(script) = custom_script {
                if let Err(e) = surface.evaluate_script(&script) {
                    warn!(%id, "custom script injection failed: {e}");
                }
            }
        }
    }

    fn find_content_mut(&mut self, id: SurfaceId) -> Option<&mut SurfaceHandle> {
        // Loads can finish on pages that are cached but not attached.
        self.cache.surfaces_mut().find(|s| s.id() == id)
    }

    /// Create a surface outside the toolbar/cache lifecycle (the settings
    /// window's page). The caller owns the handle; its events still arrive
    /// through this registry's sink.
    pub fn create_standalone<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        window: &W,
        bounds: Rect,
        html: &str,
    ) -> Result<SurfaceHandle, wry::Error> {
        self.manager
            .create(window, bounds, None, SurfaceSpec::with_html(html))
    }

    /// Drain all pending surface events.
    pub fn drain_events(&self) -> Vec<SurfaceEvent> {
        self.manager.drain_events()
    }

    /// Destroy everything, toolbar included. Teardown only.
    pub fn destroy_all(&mut self) {
        self.invalidate_all();
        if let Some(toolbar) = self.toolbar.take() {
            if let Ok(mut evts) = self.manager.events.lock() {
                evts.push(SurfaceEvent::Closed { id: toolbar.id() });
            }
        }
        debug!("all surfaces destroyed");
    }
}
