//! IPC protocol between the dock core and the toolbar/settings pages.
//!
//! JS calls `window.ledge.ipc.send(kind, payload)`, which posts a JSON
//! body to the surface's `ipc_handler`; Rust answers by evaluating a
//! dispatch snippet in the page.

use serde::{Deserialize, Serialize};

/// Raw IPC message shape shared with the page JavaScript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC body (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

/// A validated command from the toolbar or settings page.
#[derive(Debug, Clone, PartialEq)]
pub enum DockCommand {
    TogglePin,
    GetPin,
    SwitchPage(usize),
    Refresh,
    OpenSettings,
    OpenExternal(String),
    GetConfig,
    SaveConfig(serde_json::Value),
    Quit,
}

impl DockCommand {
    /// Parse a raw IPC body into a command. Unknown kinds and malformed
    /// payloads return `None` and are dropped by the dispatcher.
    pub fn parse(body: &str) -> Option<Self> {
        let msg = IpcMessage::from_json(body)?;
        match msg.kind.as_str() {
            "toggle-pin" => Some(Self::TogglePin),
            "get-pin" => Some(Self::GetPin),
            "switch-page" => msg.payload.as_u64().map(|i| Self::SwitchPage(i as usize)),
            "refresh" => Some(Self::Refresh),
            "open-settings" => Some(Self::OpenSettings),
            "open-external" => msg
                .payload
                .as_str()
                .map(|url| Self::OpenExternal(url.to_string())),
            "get-config" => Some(Self::GetConfig),
            "save-config" => Some(Self::SaveConfig(msg.payload)),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// JavaScript bridge injected into every surface before any page script.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.ledge = window.ledge || {};
    window.ledge.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// JS snippet that dispatches a message to the page's IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.ledge.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(
            DockCommand::parse(r#"{"kind":"toggle-pin","payload":null}"#),
            Some(DockCommand::TogglePin)
        );
        assert_eq!(
            DockCommand::parse(r#"{"kind":"refresh"}"#),
            Some(DockCommand::Refresh)
        );
        assert_eq!(
            DockCommand::parse(r#"{"kind":"quit","payload":null}"#),
            Some(DockCommand::Quit)
        );
    }

    #[test]
    fn parse_switch_page_with_index() {
        assert_eq!(
            DockCommand::parse(r#"{"kind":"switch-page","payload":2}"#),
            Some(DockCommand::SwitchPage(2))
        );
    }

    #[test]
    fn switch_page_without_index_is_dropped() {
        assert_eq!(
            DockCommand::parse(r#"{"kind":"switch-page","payload":"two"}"#),
            None
        );
        assert_eq!(DockCommand::parse(r#"{"kind":"switch-page"}"#), None);
    }

    #[test]
    fn parse_open_external_url() {
        assert_eq!(
            DockCommand::parse(r#"{"kind":"open-external","payload":"https://example.com"}"#),
            Some(DockCommand::OpenExternal("https://example.com".into()))
        );
    }

    #[test]
    fn parse_save_config_keeps_payload() {
        let cmd = DockCommand::parse(r#"{"kind":"save-config","payload":{"width":60}}"#).unwrap();
        assert_eq!(cmd, DockCommand::SaveConfig(json!({"width": 60})));
    }

    #[test]
    fn unknown_kind_and_garbage_are_dropped() {
        assert_eq!(DockCommand::parse(r#"{"kind":"format-disk"}"#), None);
        assert_eq!(DockCommand::parse("not json"), None);
        assert_eq!(DockCommand::parse(""), None);
    }

    #[test]
    fn dispatch_snippet_escapes_kind_and_payload() {
        let script = js_dispatch_message("pin-state", &json!(true));
        assert_eq!(script, "window.ledge.ipc._dispatch(\"pin-state\", true);");

        let script = js_dispatch_message("load-config", &json!({"displayId": "primary"}));
        assert!(script.contains("\"displayId\":\"primary\""));
    }

    #[test]
    fn init_script_defines_the_bridge() {
        assert!(IPC_INIT_SCRIPT.contains("window.ledge.ipc"));
        assert!(IPC_INIT_SCRIPT.contains("postMessage"));
    }
}
