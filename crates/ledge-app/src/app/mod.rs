//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates the overlay window, surfaces, slide animator,
//! pointer tracker, tray, and settings window. All timers are
//! `Instant` deadlines multiplexed through `ControlFlow::WaitUntil`.

mod core;
mod displays;
mod event_handler;
mod init;
mod ipc_dispatch;
mod settings;
mod shutdown;
mod surfaces;
mod timers;
mod tray;

pub use core::DockApp;
