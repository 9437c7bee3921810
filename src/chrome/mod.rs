//! Tabs-in-titlebar controller.
//!
//! [`TitlebarChromeController`] sits in front of a window's message handler.
//! When desktop composition is available it extends the compositor frame over
//! the client area, reserves simulated frame margins around the toolkit's
//! content, and answers the window manager's non-client queries so resizing,
//! dragging and the caption buttons keep working while the tab strip is drawn
//! where the caption used to be. Without composition it forwards everything
//! and the window keeps native chrome.

pub mod frame;
pub mod gate;
pub mod profile;

pub use gate::{CompositionGate, InactiveReason};
pub use hit_test::{HitRegion, HitTestInput, HitTestOutcome, classify_point};
pub use profile::GeometryProfile;

use tracing::{debug, trace};

use crate::config::ChromeConfig;
use crate::geometry::{Margins, Point};
use crate::host::{Compositor, CornerPlacement, CornerWidget, HostWindow, TabStrip, WindowState};
use crate::message::{Dispatch, MinMaxInfo, RawMessage, WM_ACTIVATE, WM_NCCALCSIZE, WM_NCHITTEST};

/// Geometry the controller keeps while it owns the titlebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeState {
    profile: GeometryProfile,
    tab_strip_height: i32,
}

impl ChromeState {
    pub fn profile(&self) -> GeometryProfile {
        self.profile
    }

    pub fn is_maximized(&self) -> bool {
        self.profile.is_maximized()
    }

    pub fn window_frame_width(&self) -> i32 {
        self.profile.window_frame_width()
    }

    pub fn titlebar_frame_width(&self) -> i32 {
        self.profile.titlebar_frame_width()
    }

    /// Height of the caption-equivalent band holding the tabs.
    pub fn tab_strip_height(&self) -> i32 {
        self.tab_strip_height
    }

    pub fn content_margins(&self) -> Margins {
        self.profile.content_margins()
    }
}

/// Chrome controller bound to one window.
///
/// The window and widgets are borrowed for `'w`; the controller cannot
/// outlive the window it decorates. All entry points are synchronous and must
/// be called on the thread that owns the window.
pub struct TitlebarChromeController<'w, C: Compositor> {
    compositor: C,
    window: &'w dyn HostWindow,
    tab_strip: &'w dyn TabStrip,
    corner: Option<&'w dyn CornerWidget>,
    /// `None` for the controller's whole lifetime when the gate was closed.
    state: Option<ChromeState>,
}

impl<'w, C: Compositor> TitlebarChromeController<'w, C> {
    pub fn new(
        config: ChromeConfig,
        compositor: C,
        window: &'w dyn HostWindow,
        tab_strip: &'w dyn TabStrip,
    ) -> Self {
        let gate = CompositionGate::evaluate(&config, &compositor);
        let mut controller = Self {
            compositor,
            window,
            tab_strip,
            corner: None,
            state: None,
        };
        if !gate.is_active() {
            debug!(hwnd = window.handle().0, ?gate, "titlebar chrome inactive");
            return controller;
        }

        let metrics = window.metrics();
        let tab_strip_height =
            profile::metric_or_zero("title_bar_height", metrics.title_bar_height());
        controller.state = Some(ChromeState {
            profile: GeometryProfile::Maximized,
            tab_strip_height,
        });

        window.set_translucent_background(true);
        window.notify_frame_changed();
        controller.on_window_state_changed(window.window_state());
        debug!(
            hwnd = window.handle().0,
            tab_strip_height, "titlebar chrome active"
        );
        controller
    }

    /// Whether the titlebar has been taken over. Fixed at construction.
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&ChromeState> {
        self.state.as_ref()
    }

    pub fn compositor(&self) -> &C {
        &self.compositor
    }

    /// Install the widget that leads the tab strip.
    ///
    /// With native chrome the widget belongs after the tabs; otherwise it
    /// sits in the caption's leading corner and its preferred height becomes
    /// the caption band height.
    pub fn set_corner_widget(&mut self, widget: &'w dyn CornerWidget) -> CornerPlacement {
        let Some(state) = self.state.as_mut() else {
            return CornerPlacement::TopRight;
        };
        self.corner = Some(widget);
        state.tab_strip_height = widget.preferred_height().max(0);
        trace!(
            tab_strip_height = state.tab_strip_height,
            "corner widget installed"
        );
        CornerPlacement::TopLeft
    }

    /// Recompute the frame profile for `state` and push the matching content
    /// margins to the window before returning.
    pub fn on_window_state_changed(&mut self, state: WindowState) {
        let Some(chrome) = self.state.as_mut() else {
            return;
        };
        let profile = GeometryProfile::for_state(state, self.window.metrics());
        chrome.profile = profile;
        self.window.set_contents_margins(profile.content_margins());
        trace!(?state, ?profile, "chrome geometry updated");
    }

    /// Route one window-manager message.
    ///
    /// Only the scalar parameters of `msg` are read. `WM_GETMINMAXINFO` carries
    /// a pointer in `lparam`, so it is answered by [`Self::handle_min_max_info`]
    /// once the caller has turned that pointer into a reference; here it only
    /// reaches the compositor.
    pub fn handle_message(&self, msg: &RawMessage) -> Dispatch {
        let Some(chrome) = self.state.as_ref() else {
            return Dispatch::Forward;
        };

        if msg.id == WM_NCHITTEST {
            return match self.classify_with(chrome, msg) {
                HitTestOutcome::System(code) => Dispatch::Handled(code),
                HitTestOutcome::Region(HitRegion::Nowhere) => Dispatch::Forward,
                HitTestOutcome::Region(region) => Dispatch::Handled(region.code()),
            };
        }

        let compositor_result = self.compositor.default_window_proc(msg);
        match msg.id {
            WM_ACTIVATE => {
                frame::extend_into_client(&self.compositor, self.window.handle());
                Dispatch::Forward
            }
            // Client area covers the whole window; nothing left to paint natively.
            WM_NCCALCSIZE if msg.wparam != 0 => Dispatch::Handled(0),
            _ => compositor_result.map_or(Dispatch::Forward, Dispatch::Handled),
        }
    }

    /// Route `WM_GETMINMAXINFO` with its `MINMAXINFO` already borrowed.
    ///
    /// The compositor sees the message first. When the maximized bounds could
    /// be clamped the message is handled, otherwise the compositor's answer or
    /// [`Dispatch::Forward`] is returned and `info` is left as it was.
    pub fn handle_min_max_info(&self, msg: &RawMessage, info: &mut MinMaxInfo) -> Dispatch {
        if self.state.is_none() {
            return Dispatch::Forward;
        }
        let compositor_result = self.compositor.default_window_proc(msg);
        if self.adjust_max_size(info) {
            return Dispatch::Handled(0);
        }
        compositor_result.map_or(Dispatch::Forward, Dispatch::Handled)
    }

    /// Clamp the maximized bounds to the monitor's work area.
    ///
    /// Returns false, leaving `info` untouched, when the chrome is inactive
    /// or the work area is unknown.
    pub fn adjust_max_size(&self, info: &mut MinMaxInfo) -> bool {
        if self.state.is_none() {
            return false;
        }
        match self.window.work_area() {
            Ok(work_area) => {
                profile::clamp_max_size(info, work_area);
                trace!(max_size = ?info.max_size, "maximum size clamped to work area");
                true
            }
            Err(err) => {
                debug!(%err, "work area unavailable; default maximum size kept");
                false
            }
        }
    }

    /// Hit-test a screen point as `WM_NCHITTEST` would. `None` when inactive.
    pub fn classify(&self, point: Point) -> Option<HitTestOutcome> {
        let chrome = self.state.as_ref()?;
        let msg = RawMessage::hit_test(self.window.handle(), point);
        Some(self.classify_with(chrome, &msg))
    }

    fn classify_with(&self, chrome: &ChromeState, msg: &RawMessage) -> HitTestOutcome {
        // Caption buttons are still drawn and owned by the compositor.
        if let Some(code) = self.compositor.default_window_proc(msg) {
            return HitTestOutcome::System(code);
        }

        let window_rect = match self.window.window_rect() {
            Ok(rect) => rect,
            Err(err) => {
                debug!(%err, "hit test without window rectangle");
                return HitTestOutcome::Region(HitRegion::Nowhere);
            }
        };
        let system_frame_top = profile::metric_or_zero(
            "system_frame_top",
            self.window.metrics().system_frame_top(),
        );
        let input = HitTestInput {
            window_rect,
            point: msg.point(),
            window_frame: chrome.window_frame_width(),
            titlebar_frame: chrome.titlebar_frame_width(),
            tab_strip_height: chrome.tab_strip_height,
            system_frame_top,
            corner_width: self.corner.map(|corner| corner.width()),
            tab_strip: self.tab_strip,
        };
        HitTestOutcome::Region(classify_point(&input))
    }
}
