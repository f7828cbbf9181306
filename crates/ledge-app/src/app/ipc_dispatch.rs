//! Routing of surface events and toolbar/settings IPC commands.

use serde_json::{json, Value};
use winit::event_loop::ActiveEventLoop;

use ledge_common::SurfaceId;
use ledge_config::DockConfig;
use ledge_webview::{DockCommand, PageLoadState, SurfaceEvent};

use super::core::DockApp;
use super::displays::snapshot_displays;

impl DockApp {
    /// Drain and route every pending surface event.
    pub(super) fn process_surface_events(&mut self, event_loop: &ActiveEventLoop) {
        let events = match &self.surfaces {
            Some(registry) => registry.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                SurfaceEvent::PageLoad { id, state, url } => {
                    if state == PageLoadState::Finished {
                        if let Some(registry) = self.registry() {
                            registry.on_load_finished(id, &url);
                        }
                    }
                }
                SurfaceEvent::IpcMessage { id, body } => match DockCommand::parse(&body) {
                    Some(command) => self.handle_command(event_loop, id, command),
                    None => tracing::warn!(%id, "unrecognized IPC message dropped"),
                },
                SurfaceEvent::Closed { id } => {
                    tracing::debug!(%id, "surface closed");
                }
            }
        }
    }

    fn handle_command(
        &mut self,
        event_loop: &ActiveEventLoop,
        from: SurfaceId,
        command: DockCommand,
    ) {
        match command {
            DockCommand::TogglePin => {
                self.pinned = !self.pinned;
                tracing::info!(pinned = self.pinned, "pin toggled");
                self.push_pin_state();
            }
            DockCommand::GetPin => self.push_pin_state(),
            DockCommand::SwitchPage(index) => {
                self.switch_page(event_loop, index);
            }
            DockCommand::Refresh => self.refresh_current_page(),
            DockCommand::OpenSettings => self.open_settings(event_loop),
            DockCommand::OpenExternal(url) => {
                if let Err(e) = ledge_platform::open_external(&url) {
                    tracing::warn!("open external failed: {e}");
                }
            }
            DockCommand::GetConfig => self.push_config_to_settings(event_loop, from),
            DockCommand::SaveConfig(patch) => self.save_config(event_loop, patch),
            DockCommand::Quit => self.quit(event_loop),
        }
    }

    fn push_pin_state(&mut self) {
        let payload = json!(self.pinned);
        if let Some(registry) = self.registry() {
            registry.send_to_toolbar("pin-state", &payload);
        }
    }

    /// Answer the settings page's `get-config` with the current config
    /// and the display list.
    fn push_config_to_settings(&mut self, event_loop: &ActiveEventLoop, from: SurfaceId) {
        let Some(settings) = &self.settings else {
            return;
        };
        if settings.surface.id() != from {
            return;
        }

        let config_value =
            serde_json::to_value(&self.config).unwrap_or_else(|_| Value::Null);
        if let Err(e) = settings.surface.send_ipc("load-config", &config_value) {
            tracing::warn!("settings config push failed: {e}");
        }

        let target = self.target_display(event_loop);
        let displays: Vec<Value> = snapshot_displays(event_loop)
            .iter()
            .map(|d| {
                json!({
                    "id": d.id,
                    "label": format!(
                        "{} ({}x{})",
                        d.id, d.bounds.width, d.bounds.height
                    ),
                    "primary": d.is_primary,
                    "selected": d.id == target.id,
                })
            })
            .collect();
        if let Err(e) = settings.surface.send_ipc("load-displays", &json!(displays)) {
            tracing::warn!("settings display push failed: {e}");
        }
    }

    /// Merge a settings patch over the current config, persist, reapply.
    fn save_config(&mut self, event_loop: &ActiveEventLoop, patch: Value) {
        let current =
            serde_json::to_value(&self.config).unwrap_or_else(|_| json!({}));
        let merged_value = merge_config(current, patch);

        let mut merged: DockConfig = match serde_json::from_value(merged_value) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("rejecting malformed settings payload: {e}");
                return;
            }
        };
        ledge_config::validation::normalize(&mut merged);

        if let Err(e) = ledge_config::save_config(&merged) {
            tracing::error!("config save failed: {e}");
        }
        self.config = merged;
        self.reapply_config(event_loop);
    }
}

/// Shallow-merge `patch`'s top-level keys over `current` (both JSON
/// objects). Non-object inputs fall back to the patch.
fn merge_config(current: Value, patch: Value) -> Value {
    match (current, patch) {
        (Value::Object(mut base), Value::Object(overlay)) => {
            for (key, value) in overlay {
                base.insert(key, value);
            }
            Value::Object(base)
        }
        (_, patch) => patch,
    }
}
