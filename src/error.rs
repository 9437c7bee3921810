use thiserror::Error;

/// Failures reported by the platform collaborators.
///
/// None of these cross the controller's public surface: each one degrades to
/// native chrome, a zero metric, or an unmodified message.
#[derive(Debug, Error)]
pub enum ChromeError {
    #[error("composition status query failed (HRESULT {0:#010x})")]
    CompositionQuery(i32),
    #[error("frame extension rejected (HRESULT {0:#010x})")]
    FrameExtension(i32),
    #[error("style metric `{0}` unavailable")]
    Metric(&'static str),
    #[error("window rectangle unavailable")]
    WindowRect,
    #[error("monitor work area unavailable")]
    WorkArea,
}
