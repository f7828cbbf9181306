//! winit monitor enumeration → `Display` snapshots.

use winit::event_loop::ActiveEventLoop;

use ledge_common::{Display, Rect};
use ledge_platform::work_area_for;

/// Snapshot every attached display in virtual-screen coordinates.
///
/// Taken fresh on each query; work areas change at runtime (taskbar
/// auto-hide, monitor reconfiguration), so nothing here is cached.
pub(super) fn snapshot_displays(event_loop: &ActiveEventLoop) -> Vec<Display> {
    let primary = event_loop.primary_monitor();

    event_loop
        .available_monitors()
        .map(|monitor| {
            let pos = monitor.position();
            let size = monitor.size();
            let bounds = Rect::new(pos.x, pos.y, size.width as i32, size.height as i32);
            Display {
                id: monitor
                    .name()
                    .unwrap_or_else(|| format!("{},{}", pos.x, pos.y)),
                is_primary: primary.as_ref() == Some(&monitor),
                bounds,
                work_area: work_area_for(bounds),
            }
        })
        .collect()
}
