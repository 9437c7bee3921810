use tracing::warn;

use crate::constants::{CAPTION_SLIVER_DENOMINATOR, CAPTION_SLIVER_NUMERATOR, TASKBAR_REVEAL_GAP};
use crate::error::ChromeError;
use crate::geometry::{Margins, Point, Rect};
use crate::host::{StyleMetrics, WindowState};
use crate::message::MinMaxInfo;

/// Simulated frame geometry for the current window state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryProfile {
    /// The window already fills the work area; no simulated frame.
    Maximized,
    Normal {
        window_frame: i32,
        titlebar_frame: i32,
    },
}

impl GeometryProfile {
    pub fn for_state(state: WindowState, metrics: &dyn StyleMetrics) -> Self {
        if state.is_maximized() {
            return GeometryProfile::Maximized;
        }
        let window_frame = metric_or_zero("frame_width", metrics.frame_width());
        let caption = metric_or_zero("title_bar_height", metrics.title_bar_height());
        GeometryProfile::Normal {
            window_frame,
            titlebar_frame: CAPTION_SLIVER_NUMERATOR * caption / CAPTION_SLIVER_DENOMINATOR,
        }
    }

    pub fn is_maximized(&self) -> bool {
        matches!(self, GeometryProfile::Maximized)
    }

    pub fn window_frame_width(&self) -> i32 {
        match *self {
            GeometryProfile::Maximized => 0,
            GeometryProfile::Normal { window_frame, .. } => window_frame,
        }
    }

    pub fn titlebar_frame_width(&self) -> i32 {
        match *self {
            GeometryProfile::Maximized => 0,
            GeometryProfile::Normal { titlebar_frame, .. } => titlebar_frame,
        }
    }

    /// Content margins the toolkit must lay out with under this profile.
    pub fn content_margins(&self) -> Margins {
        match *self {
            GeometryProfile::Maximized => Margins::ZERO,
            GeometryProfile::Normal {
                window_frame,
                titlebar_frame,
            } => Margins::new(window_frame, titlebar_frame, window_frame, window_frame),
        }
    }
}

pub(crate) fn metric_or_zero(name: &'static str, value: Result<i32, ChromeError>) -> i32 {
    match value {
        Ok(px) => px.max(0),
        Err(err) => {
            warn!(metric = name, %err, "style metric unavailable; using 0");
            0
        }
    }
}

/// Clamp the maximized size to `work_area`, leaving the taskbar reveal gap.
pub fn clamp_max_size(info: &mut MinMaxInfo, work_area: Rect) {
    info.max_size = Point::new(
        work_area.width(),
        work_area.height().saturating_sub(TASKBAR_REVEAL_GAP),
    );
    info.max_position = Point::new(0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::FixedMetrics;

    #[test]
    fn normal_profile_keeps_three_quarters_of_caption() {
        let metrics = FixedMetrics::new(8, 32, 8);
        let profile = GeometryProfile::for_state(WindowState::Normal, &metrics);
        assert_eq!(
            profile,
            GeometryProfile::Normal {
                window_frame: 8,
                titlebar_frame: 24,
            }
        );
        assert_eq!(profile.content_margins(), Margins::new(8, 24, 8, 8));
    }

    #[test]
    fn maximized_profile_has_no_frame() {
        let metrics = FixedMetrics::new(8, 32, 8);
        let profile = GeometryProfile::for_state(WindowState::Maximized, &metrics);
        assert!(profile.is_maximized());
        assert_eq!(profile.window_frame_width(), 0);
        assert_eq!(profile.titlebar_frame_width(), 0);
        assert_eq!(profile.content_margins(), Margins::ZERO);
    }

    #[test]
    fn minimized_uses_normal_profile() {
        let metrics = FixedMetrics::new(4, 20, 4);
        let profile = GeometryProfile::for_state(WindowState::Minimized, &metrics);
        assert_eq!(profile.window_frame_width(), 4);
        assert_eq!(profile.titlebar_frame_width(), 15);
    }

    #[test]
    fn failed_metrics_degrade_to_zero() {
        let metrics = FixedMetrics::unavailable();
        let profile = GeometryProfile::for_state(WindowState::Normal, &metrics);
        assert_eq!(profile.content_margins(), Margins::ZERO);
        assert!(!profile.is_maximized());
    }

    #[test]
    fn max_size_leaves_reveal_gap_above_taskbar() {
        let mut info = MinMaxInfo {
            max_size: Point::new(1936, 1096),
            max_position: Point::new(-8, -8),
            ..MinMaxInfo::default()
        };
        clamp_max_size(&mut info, Rect::new(0, 0, 1920, 1040));
        assert_eq!(info.max_size, Point::new(1920, 1039));
        assert_eq!(info.max_position, Point::new(0, 0));
    }
}
