//! Raw window-manager messages and the answers the controller gives back.

use crate::geometry::Point;

/// Activation state changed.
pub const WM_ACTIVATE: u32 = 0x0006;
/// Maximum size/position query; `lparam` points at a [`MinMaxInfo`].
pub const WM_GETMINMAXINFO: u32 = 0x0024;
/// Non-client size calculation; `wparam != 0` asks for the client rectangle.
pub const WM_NCCALCSIZE: u32 = 0x0083;
/// Non-client hit test; `lparam` packs the screen point.
pub const WM_NCHITTEST: u32 = 0x0084;

/// Opaque native window identity. Never dereferenced by the core.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// One message as delivered by the window manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMessage {
    pub hwnd: WindowHandle,
    pub id: u32,
    pub wparam: usize,
    pub lparam: isize,
}

impl RawMessage {
    pub const fn new(hwnd: WindowHandle, id: u32, wparam: usize, lparam: isize) -> Self {
        Self {
            hwnd,
            id,
            wparam,
            lparam,
        }
    }

    /// Build a `WM_NCHITTEST` for `point` in screen coordinates.
    pub fn hit_test(hwnd: WindowHandle, point: Point) -> Self {
        Self::new(hwnd, WM_NCHITTEST, 0, pack_point(point))
    }

    pub fn activate(hwnd: WindowHandle) -> Self {
        // WA_ACTIVE
        Self::new(hwnd, WM_ACTIVATE, 1, 0)
    }

    /// Signed screen point carried in `lparam` (`GET_X_LPARAM`/`GET_Y_LPARAM`).
    pub fn point(&self) -> Point {
        unpack_point(self.lparam)
    }
}

fn pack_point(point: Point) -> isize {
    let x = point.x as u16 as isize;
    let y = point.y as u16 as isize;
    (y << 16) | x
}

fn unpack_point(lparam: isize) -> Point {
    let x = (lparam & 0xFFFF) as u16 as i16 as i32;
    let y = ((lparam >> 16) & 0xFFFF) as u16 as i16 as i32;
    Point::new(x, y)
}

/// Result of routing a message through the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The controller answered; return this value from the window procedure.
    Handled(isize),
    /// Not ours; hand the message to the toolkit / default procedure unchanged.
    Forward,
}

/// Layout-compatible with Win32 `MINMAXINFO`.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MinMaxInfo {
    pub reserved: Point,
    pub max_size: Point,
    pub max_position: Point,
    pub min_track_size: Point,
    pub max_track_size: Point,
}
