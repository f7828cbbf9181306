//! Display work-area lookup.
//!
//! The windowing layer reports monitor bounds but not the OS-reserved
//! regions. On Windows the work area comes from `GetMonitorInfoW`
//! (`rcWork`); elsewhere the work area falls back to the full bounds and
//! the taskbar height resolves to zero.

use ledge_common::Rect;

/// Resolve the work area for the monitor whose bounds are `bounds`
/// (virtual-screen coordinates).
pub fn work_area_for(bounds: Rect) -> Rect {
    #[cfg(target_os = "windows")]
    {
        if let Some(work_area) = windows_work_area(bounds) {
            return work_area;
        }
    }
    bounds
}

#[cfg(target_os = "windows")]
fn windows_work_area(bounds: Rect) -> Option<Rect> {
    use std::mem;
    use windows::Win32::Foundation::{BOOL, LPARAM, RECT};
    use windows::Win32::Graphics::Gdi::{
        EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO,
    };

    struct Search {
        bounds: Rect,
        work_area: Option<Rect>,
    }

    extern "system" fn monitor_enum_proc(
        monitor: HMONITOR,
        _hdc: HDC,
        _rc_clip: *mut RECT,
        data: LPARAM,
    ) -> BOOL {
        let search = unsafe { &mut *(data.0 as *mut Search) };
        let mut info = MONITORINFO {
            cbSize: mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };
        if unsafe { GetMonitorInfoW(monitor, &mut info) }.as_bool() {
            let rc = info.rcMonitor;
            let monitor_bounds = Rect::new(rc.left, rc.top, rc.right - rc.left, rc.bottom - rc.top);
            if monitor_bounds == search.bounds {
                let rw = info.rcWork;
                search.work_area =
                    Some(Rect::new(rw.left, rw.top, rw.right - rw.left, rw.bottom - rw.top));
                return BOOL(0);
            }
        }
        BOOL(1)
    }

    let mut search = Search {
        bounds,
        work_area: None,
    };
    unsafe {
        let _ = EnumDisplayMonitors(
            HDC::default(),
            None,
            Some(monitor_enum_proc),
            LPARAM(&mut search as *mut Search as isize),
        );
    }
    search.work_area
}
