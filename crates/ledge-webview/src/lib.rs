//! Embedded web surfaces for the dock.
//!
//! Wraps the `wry` crate to provide:
//! - One persistent toolbar surface plus per-page content surfaces
//! - A page-index cache so switching pages never reloads
//! - IPC from the toolbar/settings pages to the dock core
//! - Post-load script injection (user script, site ad-skip)

pub mod cache;
pub mod events;
pub mod inject;
pub mod ipc;
pub mod manager;
pub mod pages;

pub use cache::PageCache;
pub use events::{LifecycleState, PageLoadState, SurfaceEvent};
pub use ipc::{DockCommand, IpcMessage};
pub use manager::{SurfaceHandle, SurfaceManager, SurfaceRegistry, SurfaceSpec};
