//! Shared crate-wide constants.

/// Numerator of the share of the style's caption height kept as the
/// simulated titlebar frame when the window is restored.
///
/// Three quarters of the caption leaves a draggable sliver above the tab
/// strip while keeping the tabs visually inside the titlebar. The ratio is
/// empirical and tuned against the stock caption buttons; changing it moves
/// the tabs relative to the minimize/maximize/close glyphs.
pub const CAPTION_SLIVER_NUMERATOR: i32 = 3;

/// Denominator paired with [`CAPTION_SLIVER_NUMERATOR`].
pub const CAPTION_SLIVER_DENOMINATOR: i32 = 4;

/// Pixels withheld from the work-area height when answering the
/// maximum-size query.
///
/// A maximized window that covers the work area exactly stops an auto-hide
/// taskbar from reappearing when the pointer reaches the screen edge. One
/// pixel is the smallest gap that keeps the taskbar reachable.
pub const TASKBAR_REVEAL_GAP: i32 = 1;
