//! Native DWM and USER32 bindings for the chrome collaborators.

use std::cell::Cell;
use std::mem;
use std::ptr;

use windows_sys::Win32::Foundation::{HWND, LRESULT, RECT};
use windows_sys::Win32::Graphics::Dwm::{
    DwmDefWindowProc, DwmExtendFrameIntoClientArea, DwmIsCompositionEnabled,
};
use windows_sys::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MONITOR_DEFAULTTONEAREST, MONITORINFO, MonitorFromWindow,
};
use windows_sys::Win32::UI::Controls::MARGINS;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    AdjustWindowRectEx, GetSystemMetrics, GetWindowRect, IsIconic, IsZoomed, SM_CXPADDEDBORDER,
    SM_CXSIZEFRAME, SM_CYCAPTION, SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOZORDER, SetWindowPos,
    WS_CAPTION, WS_OVERLAPPEDWINDOW,
};

use crate::error::ChromeError;
use crate::geometry::{Margins, Rect};
use crate::host::{Compositor, HostWindow, StyleMetrics, WindowState};
use crate::message::{RawMessage, WindowHandle};

impl WindowHandle {
    pub fn from_hwnd(hwnd: HWND) -> Self {
        WindowHandle(hwnd as isize)
    }

    pub fn as_hwnd(self) -> HWND {
        self.0 as HWND
    }
}

impl From<RECT> for Rect {
    fn from(rc: RECT) -> Self {
        Rect::new(rc.left, rc.top, rc.right, rc.bottom)
    }
}

/// The desktop window manager.
#[derive(Debug, Default, Clone, Copy)]
pub struct DwmCompositor;

impl Compositor for DwmCompositor {
    fn is_composition_enabled(&self) -> Result<bool, ChromeError> {
        let mut enabled = 0;
        // SAFETY: `enabled` is a local out-parameter.
        let hr = unsafe { DwmIsCompositionEnabled(&mut enabled) };
        if hr < 0 {
            return Err(ChromeError::CompositionQuery(hr));
        }
        Ok(enabled != 0)
    }

    fn extend_frame_into_client_area(
        &self,
        hwnd: WindowHandle,
        margins: Margins,
    ) -> Result<(), ChromeError> {
        let margins = MARGINS {
            cxLeftWidth: margins.left,
            cxRightWidth: margins.right,
            cyTopHeight: margins.top,
            cyBottomHeight: margins.bottom,
        };
        // SAFETY: `margins` outlives the call; an invalid handle is reported
        // as a failed HRESULT.
        let hr = unsafe { DwmExtendFrameIntoClientArea(hwnd.as_hwnd(), &margins) };
        if hr < 0 {
            return Err(ChromeError::FrameExtension(hr));
        }
        Ok(())
    }

    fn default_window_proc(&self, msg: &RawMessage) -> Option<isize> {
        let mut result: LRESULT = 0;
        // SAFETY: `result` is a local out-parameter. The message parameters
        // are forwarded unchanged from the window procedure that received
        // them, so DWM reads them under their own message contract.
        let handled = unsafe {
            DwmDefWindowProc(
                msg.hwnd.as_hwnd(),
                msg.id,
                msg.wparam,
                msg.lparam,
                &mut result,
            )
        };
        (handled != 0).then_some(result)
    }
}

/// System metrics of the standard resizable frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemMetrics;

impl StyleMetrics for SystemMetrics {
    fn frame_width(&self) -> Result<i32, ChromeError> {
        // SAFETY: plain metric queries without pointers.
        let frame = unsafe { GetSystemMetrics(SM_CXSIZEFRAME) };
        let padding = unsafe { GetSystemMetrics(SM_CXPADDEDBORDER) };
        if frame == 0 {
            return Err(ChromeError::Metric("frame_width"));
        }
        Ok(frame + padding)
    }

    fn title_bar_height(&self) -> Result<i32, ChromeError> {
        // SAFETY: plain metric query without pointers.
        match unsafe { GetSystemMetrics(SM_CYCAPTION) } {
            0 => Err(ChromeError::Metric("title_bar_height")),
            height => Ok(height),
        }
    }

    fn system_frame_top(&self) -> Result<i32, ChromeError> {
        let mut frame = RECT {
            left: 0,
            top: 0,
            right: 0,
            bottom: 0,
        };
        // SAFETY: `frame` is a local RECT.
        let ok = unsafe { AdjustWindowRectEx(&mut frame, WS_OVERLAPPEDWINDOW & !WS_CAPTION, 0, 0) };
        if ok == 0 {
            return Err(ChromeError::Metric("system_frame_top"));
        }
        Ok(-frame.top)
    }
}

/// A top-level USER32 window.
///
/// Content margins are kept here for the window's own layout and painting;
/// the per-pixel alpha flag is informational because a DWM-extended frame
/// composites the client's black pixels as glass already.
#[derive(Debug)]
pub struct Win32Window {
    hwnd: HWND,
    metrics: SystemMetrics,
    margins: Cell<Margins>,
    translucent: Cell<bool>,
}

impl Win32Window {
    /// # Safety
    ///
    /// `hwnd` must be a valid top-level window that outlives this value.
    pub unsafe fn new(hwnd: HWND) -> Self {
        Self {
            hwnd,
            metrics: SystemMetrics,
            margins: Cell::new(Margins::ZERO),
            translucent: Cell::new(false),
        }
    }

    pub fn contents_margins(&self) -> Margins {
        self.margins.get()
    }

    pub fn is_translucent(&self) -> bool {
        self.translucent.get()
    }
}

impl HostWindow for Win32Window {
    fn handle(&self) -> WindowHandle {
        WindowHandle::from_hwnd(self.hwnd)
    }

    fn window_rect(&self) -> Result<Rect, ChromeError> {
        // SAFETY: RECT is plain data, so all-zero is valid. `self.hwnd` is
        // live per `Win32Window::new` and `rc` is a local.
        let mut rc: RECT = unsafe { mem::zeroed() };
        if unsafe { GetWindowRect(self.hwnd, &mut rc) } == 0 {
            return Err(ChromeError::WindowRect);
        }
        Ok(rc.into())
    }

    fn window_state(&self) -> WindowState {
        // SAFETY: `self.hwnd` is live per `Win32Window::new`.
        if unsafe { IsZoomed(self.hwnd) } != 0 {
            WindowState::Maximized
        } else if unsafe { IsIconic(self.hwnd) } != 0 {
            WindowState::Minimized
        } else {
            WindowState::Normal
        }
    }

    fn work_area(&self) -> Result<Rect, ChromeError> {
        // SAFETY: `self.hwnd` is live per `Win32Window::new`.
        let monitor = unsafe { MonitorFromWindow(self.hwnd, MONITOR_DEFAULTTONEAREST) };
        if monitor.is_null() {
            return Err(ChromeError::WorkArea);
        }
        // SAFETY: MONITORINFO is plain data. `monitor` was just checked
        // non-null and `info` is a local with `cbSize` set as the API requires.
        let mut info: MONITORINFO = unsafe { mem::zeroed() };
        info.cbSize = mem::size_of::<MONITORINFO>() as u32;
        if unsafe { GetMonitorInfoW(monitor, &mut info) } == 0 {
            return Err(ChromeError::WorkArea);
        }
        Ok(info.rcWork.into())
    }

    fn metrics(&self) -> &dyn StyleMetrics {
        &self.metrics
    }

    fn set_contents_margins(&self, margins: Margins) {
        self.margins.set(margins);
    }

    fn set_translucent_background(&self, enabled: bool) {
        self.translucent.set(enabled);
    }

    fn notify_frame_changed(&self) {
        let Ok(rc) = self.window_rect() else {
            return;
        };
        // SAFETY: `self.hwnd` is live per `Win32Window::new`; a null insert-after
        // handle is ignored because SWP_NOZORDER is set.
        unsafe {
            SetWindowPos(
                self.hwnd,
                ptr::null_mut(),
                rc.left,
                rc.top,
                rc.width(),
                rc.height(),
                SWP_FRAMECHANGED | SWP_NOZORDER | SWP_NOACTIVATE,
            );
        }
    }
}
