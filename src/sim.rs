//! In-memory collaborators.
//!
//! These stand in for the toolkit and the compositor wherever no native
//! window exists: the `chrome-probe` tool, the demo's fixed tab layout, and
//! the test suites. Every side effect is recorded so callers can inspect what
//! the controller asked for.

use std::cell::{Cell, RefCell};

use crate::error::ChromeError;
use crate::geometry::{Margins, Point, Rect};
use crate::host::{Compositor, CornerWidget, HostWindow, StyleMetrics, TabStrip, WindowState};
use crate::message::{RawMessage, WM_NCHITTEST, WindowHandle};

/// Style metrics with fixed values; `None` simulates a failed query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedMetrics {
    pub frame_width: Option<i32>,
    pub title_bar_height: Option<i32>,
    pub system_frame_top: Option<i32>,
}

impl FixedMetrics {
    pub const fn new(frame_width: i32, title_bar_height: i32, system_frame_top: i32) -> Self {
        Self {
            frame_width: Some(frame_width),
            title_bar_height: Some(title_bar_height),
            system_frame_top: Some(system_frame_top),
        }
    }

    pub const fn unavailable() -> Self {
        Self {
            frame_width: None,
            title_bar_height: None,
            system_frame_top: None,
        }
    }
}

impl StyleMetrics for FixedMetrics {
    fn frame_width(&self) -> Result<i32, ChromeError> {
        self.frame_width.ok_or(ChromeError::Metric("frame_width"))
    }

    fn title_bar_height(&self) -> Result<i32, ChromeError> {
        self.title_bar_height
            .ok_or(ChromeError::Metric("title_bar_height"))
    }

    fn system_frame_top(&self) -> Result<i32, ChromeError> {
        self.system_frame_top
            .ok_or(ChromeError::Metric("system_frame_top"))
    }
}

/// Evenly sized tabs laid out left to right from the strip origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTabStrip {
    pub tab_width: i32,
    pub count: usize,
    pub height: i32,
}

impl FixedTabStrip {
    pub const fn new(tab_width: i32, count: usize, height: i32) -> Self {
        Self {
            tab_width,
            count,
            height,
        }
    }

    /// Strip-local rectangle of tab `index`.
    pub fn tab_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.count {
            return None;
        }
        let left = self.tab_width.saturating_mul(index as i32);
        Some(Rect::new(left, 0, left + self.tab_width, self.height))
    }
}

impl TabStrip for FixedTabStrip {
    fn tab_at(&self, point: Point) -> Option<usize> {
        if self.tab_width <= 0 || point.x < 0 || point.y < 0 || point.y >= self.height {
            return None;
        }
        let index = (point.x / self.tab_width) as usize;
        (index < self.count).then_some(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCorner {
    pub width: i32,
    pub preferred_height: i32,
}

impl FixedCorner {
    pub const fn new(width: i32, preferred_height: i32) -> Self {
        Self {
            width,
            preferred_height,
        }
    }
}

impl CornerWidget for FixedCorner {
    fn width(&self) -> i32 {
        self.width
    }

    fn preferred_height(&self) -> i32 {
        self.preferred_height
    }
}

/// A window that only exists as numbers.
#[derive(Debug)]
pub struct SimWindow {
    handle: WindowHandle,
    rect: Cell<Option<Rect>>,
    state: Cell<WindowState>,
    work_area: Cell<Option<Rect>>,
    metrics: FixedMetrics,
    margins: RefCell<Vec<Margins>>,
    translucent: Cell<bool>,
    frame_changes: Cell<usize>,
    rect_queries: Cell<usize>,
}

impl SimWindow {
    pub fn new(rect: Rect, metrics: FixedMetrics) -> Self {
        Self {
            handle: WindowHandle(1),
            rect: Cell::new(Some(rect)),
            state: Cell::new(WindowState::Normal),
            work_area: Cell::new(None),
            metrics,
            margins: RefCell::new(Vec::new()),
            translucent: Cell::new(false),
            frame_changes: Cell::new(0),
            rect_queries: Cell::new(0),
        }
    }

    pub fn with_state(self, state: WindowState) -> Self {
        self.state.set(state);
        self
    }

    pub fn with_work_area(self, work_area: Rect) -> Self {
        self.work_area.set(Some(work_area));
        self
    }

    pub fn set_state(&self, state: WindowState) {
        self.state.set(state);
    }

    /// `None` makes rectangle queries fail.
    pub fn set_rect(&self, rect: Option<Rect>) {
        self.rect.set(rect);
    }

    /// Every margin set the controller applied, oldest first.
    pub fn margin_history(&self) -> Vec<Margins> {
        self.margins.borrow().clone()
    }

    pub fn current_margins(&self) -> Option<Margins> {
        self.margins.borrow().last().copied()
    }

    pub fn is_translucent(&self) -> bool {
        self.translucent.get()
    }

    pub fn frame_changes(&self) -> usize {
        self.frame_changes.get()
    }

    pub fn rect_queries(&self) -> usize {
        self.rect_queries.get()
    }
}

impl HostWindow for SimWindow {
    fn handle(&self) -> WindowHandle {
        self.handle
    }

    fn window_rect(&self) -> Result<Rect, ChromeError> {
        self.rect_queries.set(self.rect_queries.get() + 1);
        self.rect.get().ok_or(ChromeError::WindowRect)
    }

    fn window_state(&self) -> WindowState {
        self.state.get()
    }

    fn work_area(&self) -> Result<Rect, ChromeError> {
        self.work_area.get().ok_or(ChromeError::WorkArea)
    }

    fn metrics(&self) -> &dyn StyleMetrics {
        &self.metrics
    }

    fn set_contents_margins(&self, margins: Margins) {
        self.margins.borrow_mut().push(margins);
    }

    fn set_translucent_background(&self, enabled: bool) {
        self.translucent.set(enabled);
    }

    fn notify_frame_changed(&self) {
        self.frame_changes.set(self.frame_changes.get() + 1);
    }
}

/// Compositor double. Caption buttons are screen rectangles answered from
/// [`Compositor::default_window_proc`] for hit tests.
#[derive(Debug, Default)]
pub struct SimCompositor {
    available: Option<bool>,
    reject_extension: Cell<bool>,
    buttons: Vec<(Rect, isize)>,
    extensions: RefCell<Vec<Margins>>,
    availability_queries: Cell<usize>,
    default_proc_calls: Cell<usize>,
}

impl SimCompositor {
    pub fn available() -> Self {
        Self {
            available: Some(true),
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: Some(false),
            ..Self::default()
        }
    }

    pub fn failing_query() -> Self {
        Self::default()
    }

    /// Report `code` for hit tests inside `rect`.
    pub fn with_button(mut self, rect: Rect, code: isize) -> Self {
        self.buttons.push((rect, code));
        self
    }

    pub fn set_reject_extension(&self, reject: bool) {
        self.reject_extension.set(reject);
    }

    /// Every extension request, accepted or not.
    pub fn extensions(&self) -> Vec<Margins> {
        self.extensions.borrow().clone()
    }

    pub fn availability_queries(&self) -> usize {
        self.availability_queries.get()
    }

    pub fn default_proc_calls(&self) -> usize {
        self.default_proc_calls.get()
    }
}

impl Compositor for SimCompositor {
    fn is_composition_enabled(&self) -> Result<bool, ChromeError> {
        self.availability_queries
            .set(self.availability_queries.get() + 1);
        // E_FAIL
        self.available
            .ok_or(ChromeError::CompositionQuery(0x8000_4005_u32 as i32))
    }

    fn extend_frame_into_client_area(
        &self,
        _hwnd: WindowHandle,
        margins: Margins,
    ) -> Result<(), ChromeError> {
        self.extensions.borrow_mut().push(margins);
        if self.reject_extension.get() {
            return Err(ChromeError::FrameExtension(0x8000_4005_u32 as i32));
        }
        Ok(())
    }

    fn default_window_proc(&self, msg: &RawMessage) -> Option<isize> {
        self.default_proc_calls.set(self.default_proc_calls.get() + 1);
        if msg.id != WM_NCHITTEST {
            return None;
        }
        let point = msg.point();
        self.buttons
            .iter()
            .find(|(rect, _)| rect.contains(point))
            .map(|&(_, code)| code)
    }
}
