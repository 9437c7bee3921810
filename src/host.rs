//! Collaborator seams: the compositor, the host window and the widgets the
//! chrome reads from.
//!
//! The controller only ever borrows these. Implementations that wrap native
//! handles must keep the underlying window alive for at least as long as the
//! controller that borrows them.

use crate::error::ChromeError;
use crate::geometry::{Margins, Point, Rect};
use crate::message::{RawMessage, WindowHandle};

/// The window manager's composition engine.
pub trait Compositor {
    /// Whether desktop composition is currently running.
    fn is_composition_enabled(&self) -> Result<bool, ChromeError>;

    /// Extend the rendered frame into the client area by `margins`.
    fn extend_frame_into_client_area(
        &self,
        hwnd: WindowHandle,
        margins: Margins,
    ) -> Result<(), ChromeError>;

    /// Give the compositor first refusal on a message.
    ///
    /// Returns `Some(result)` when the compositor handled it (for hit tests:
    /// the caption buttons it still draws).
    fn default_window_proc(&self, msg: &RawMessage) -> Option<isize>;
}

/// Style-derived pixel metrics of the host toolkit.
pub trait StyleMetrics {
    /// Resizable-border thickness of a normal window.
    fn frame_width(&self) -> Result<i32, ChromeError>;

    /// Height of the standard caption.
    fn title_bar_height(&self) -> Result<i32, ChromeError>;

    /// Distance from the top of the window to the window manager's own top
    /// frame line for a captionless resizable window.
    fn system_frame_top(&self) -> Result<i32, ChromeError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

impl WindowState {
    pub fn is_maximized(self) -> bool {
        matches!(self, WindowState::Maximized)
    }
}

/// The top-level window whose chrome is replaced.
///
/// Only the chrome controller may call [`HostWindow::set_contents_margins`].
pub trait HostWindow {
    fn handle(&self) -> WindowHandle;

    /// Outer window bounds in screen coordinates.
    fn window_rect(&self) -> Result<Rect, ChromeError>;

    fn window_state(&self) -> WindowState;

    /// Available geometry of the window's monitor, taskbar excluded.
    fn work_area(&self) -> Result<Rect, ChromeError>;

    fn metrics(&self) -> &dyn StyleMetrics;

    fn set_contents_margins(&self, margins: Margins);

    /// Enable per-pixel alpha so the compositor's corner and edge
    /// anti-aliasing blends with the extended frame.
    fn set_translucent_background(&self, enabled: bool);

    /// Ask the window manager to recompute the non-client area.
    fn notify_frame_changed(&self);
}

/// The tab bar painted inside the fake caption.
pub trait TabStrip {
    /// Index of the tab under `point` (tab-strip-local), if any.
    fn tab_at(&self, point: Point) -> Option<usize>;
}

/// Widget parked in the leading corner of the tab strip.
pub trait CornerWidget {
    fn width(&self) -> i32;

    fn preferred_height(&self) -> i32;
}

/// Where the toolkit should place the corner widget relative to the tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerPlacement {
    /// Native chrome: the widget sits after the tabs.
    TopRight,
    /// Tabs in the titlebar: the widget leads the fake caption.
    TopLeft,
}
