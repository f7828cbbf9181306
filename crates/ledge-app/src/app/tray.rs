//! System tray: the dock's only persistent affordance while hidden.

use tray_icon::menu::{Menu, MenuEvent, MenuId, MenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};
use winit::event_loop::ActiveEventLoop;

use ledge_common::LedgeError;

use super::core::DockApp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TrayAction {
    OpenSettings,
    Quit,
}

pub(super) struct Tray {
    _icon: TrayIcon,
    settings_id: MenuId,
    quit_id: MenuId,
}

impl Tray {
    pub fn build() -> Result<Self, LedgeError> {
        let menu = Menu::new();
        let settings_item = MenuItem::new("Settings…", true, None);
        let quit_item = MenuItem::new("Quit Ledge", true, None);
        menu.append(&settings_item)
            .and_then(|_| menu.append(&quit_item))
            .map_err(|e| LedgeError::Tray(e.to_string()))?;

        let settings_id = settings_item.id().clone();
        let quit_id = quit_item.id().clone();

        let (rgba, width, height) = tray_icon_rgba();
        let icon =
            Icon::from_rgba(rgba, width, height).map_err(|e| LedgeError::Tray(e.to_string()))?;

        let tray = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip("Ledge")
            .with_icon(icon)
            .build()
            .map_err(|e| LedgeError::Tray(e.to_string()))?;

        Ok(Self {
            _icon: tray,
            settings_id,
            quit_id,
        })
    }

    /// Pop the next pending menu action, if any.
    pub fn next_action(&self) -> Option<TrayAction> {
        while let Ok(event) = MenuEvent::receiver().try_recv() {
            if event.id == self.settings_id {
                return Some(TrayAction::OpenSettings);
            }
            if event.id == self.quit_id {
                return Some(TrayAction::Quit);
            }
        }
        None
    }
}

/// A generated 32x32 icon: dark tile with a lit dock strip at the bottom.
fn tray_icon_rgba() -> (Vec<u8>, u32, u32) {
    const SIZE: u32 = 32;
    let mut rgba = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    for y in 0..SIZE {
        for x in 0..SIZE {
            let corner = (x < 2 || x >= SIZE - 2) && (y < 2 || y >= SIZE - 2);
            let (r, g, b, a) = if corner {
                (0, 0, 0, 0)
            } else if y >= 24 {
                (110, 170, 255, 255)
            } else {
                (36, 36, 44, 255)
            };
            rgba.extend_from_slice(&[r, g, b, a]);
        }
    }
    (rgba, SIZE, SIZE)
}

impl DockApp {
    /// Drain pending tray menu events.
    pub(super) fn poll_tray(&mut self, event_loop: &ActiveEventLoop) {
        let mut actions = Vec::new();
        if let Some(tray) = &self.tray {
            while let Some(action) = tray.next_action() {
                actions.push(action);
            }
        }
        for action in actions {
            match action {
                TrayAction::OpenSettings => self.open_settings(event_loop),
                TrayAction::Quit => self.quit(event_loop),
            }
        }
    }
}
