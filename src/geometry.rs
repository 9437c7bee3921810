//! Screen-space geometry shared by the chrome controller and its collaborators.

/// A point in physical pixels. Layout-compatible with Win32 `POINT`.
#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Edge-based rectangle, `right`/`bottom` exclusive, as the window manager
/// reports window and work-area bounds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }
}

/// Per-side pixel insets.
///
/// Used both for the toolkit's content margins and for the compositor's
/// frame-extension request, where a negative value on every side means
/// "extend across the whole client area".
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    pub const ZERO: Margins = Margins::new(0, 0, 0, 0);

    /// Sentinel asking the compositor to extend the frame over the entire
    /// client rectangle ("sheet of glass").
    pub const EXTEND_ALL: Margins = Margins::new(-1, -1, -1, -1);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_full_extension(&self) -> bool {
        self.left < 0 && self.top < 0 && self.right < 0 && self.bottom < 0
    }
}
