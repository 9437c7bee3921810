use tracing::{trace, warn};

use crate::geometry::Margins;
use crate::host::Compositor;
use crate::message::WindowHandle;

/// Extend the compositor frame over the whole client area.
///
/// Returns whether the compositor accepted. A rejection leaves native chrome
/// in place until the next activation asks again.
pub(crate) fn extend_into_client<C: Compositor + ?Sized>(
    compositor: &C,
    hwnd: WindowHandle,
) -> bool {
    match compositor.extend_frame_into_client_area(hwnd, Margins::EXTEND_ALL) {
        Ok(()) => {
            trace!(hwnd = hwnd.0, "frame extended into client area");
            true
        }
        Err(err) => {
            warn!(hwnd = hwnd.0, %err, "frame extension rejected; retrying on next activation");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimCompositor;

    #[test]
    fn requests_full_extension() {
        let compositor = SimCompositor::available();
        assert!(extend_into_client(&compositor, WindowHandle(7)));
        assert_eq!(compositor.extensions(), vec![Margins::EXTEND_ALL]);
    }

    #[test]
    fn rejection_is_swallowed() {
        let compositor = SimCompositor::available();
        compositor.set_reject_extension(true);
        assert!(!extend_into_client(&compositor, WindowHandle(7)));
        compositor.set_reject_extension(false);
        assert!(extend_into_client(&compositor, WindowHandle(7)));
        assert_eq!(compositor.extensions().len(), 2);
    }
}
