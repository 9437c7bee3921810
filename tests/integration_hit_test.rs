use tab_chrome::chrome::{HitRegion, HitTestOutcome, TitlebarChromeController};
use tab_chrome::config::ChromeConfig;
use tab_chrome::geometry::{Point, Rect};
use tab_chrome::message::{Dispatch, RawMessage, WindowHandle};
use tab_chrome::sim::{FixedMetrics, FixedTabStrip, SimCompositor, SimWindow};

// frame 8, caption 32 -> titlebar frame 24, band height 32
const METRICS: FixedMetrics = FixedMetrics::new(8, 32, 8);
const WINDOW: Rect = Rect::new(100, 100, 900, 700);

fn region(chrome: &TitlebarChromeController<'_, SimCompositor>, x: i32, y: i32) -> HitRegion {
    match chrome.classify(Point::new(x, y)) {
        Some(HitTestOutcome::Region(region)) => region,
        other => panic!("expected emulated region at ({x}, {y}), got {other:?}"),
    }
}

#[test]
fn reference_window_scenario() {
    let window = SimWindow::new(WINDOW, METRICS);
    let tabs = FixedTabStrip::new(100, 3, 40);
    let chrome = TitlebarChromeController::new(
        ChromeConfig::default(),
        SimCompositor::available(),
        &window,
        &tabs,
    );
    let state = chrome.state().expect("composition available");
    assert_eq!(state.window_frame_width(), 8);
    assert_eq!(state.titlebar_frame_width(), 24);

    assert_eq!(region(&chrome, 104, 105), HitRegion::TopLeft);
    assert_eq!(region(&chrome, 500, 110), HitRegion::Caption);
    assert_eq!(region(&chrome, 500, 400), HitRegion::Nowhere);

    // caption band origin is (108, 124); y at the band boundary over tab 2
    let band = state.tab_strip_height();
    assert_eq!(region(&chrome, 108 + 250, 124 + band), HitRegion::Client);
}

#[test]
fn frame_bands_resize_with_corner_precedence() {
    let window = SimWindow::new(WINDOW, METRICS);
    let tabs = FixedTabStrip::new(100, 0, 32);
    let chrome = TitlebarChromeController::new(
        ChromeConfig::default(),
        SimCompositor::available(),
        &window,
        &tabs,
    );

    for d in 0..8 {
        assert_eq!(region(&chrome, 100 + d, 400), HitRegion::Left);
        assert_eq!(region(&chrome, 899 - d, 400), HitRegion::Right);
        assert_eq!(region(&chrome, 500, 699 - d), HitRegion::Bottom);
        assert_eq!(region(&chrome, 500, 100 + d), HitRegion::Top);
        assert_eq!(region(&chrome, 100 + d, 100 + d), HitRegion::TopLeft);
        assert_eq!(region(&chrome, 899 - d, 100 + d), HitRegion::TopRight);
        assert_eq!(region(&chrome, 100 + d, 699 - d), HitRegion::BottomLeft);
        assert_eq!(region(&chrome, 899 - d, 699 - d), HitRegion::BottomRight);
    }
}

#[test]
fn center_cell_is_left_to_the_toolkit() {
    let window = SimWindow::new(WINDOW, METRICS);
    let tabs = FixedTabStrip::new(100, 3, 32);
    let chrome = TitlebarChromeController::new(
        ChromeConfig::default(),
        SimCompositor::available(),
        &window,
        &tabs,
    );
    // below the caption band (124 + 32) and inside the side/bottom frames
    for (x, y) in [(108, 157), (500, 400), (891, 691), (300, 690)] {
        assert_eq!(region(&chrome, x, y), HitRegion::Nowhere, "({x}, {y})");
        let msg = RawMessage::hit_test(WindowHandle(1), Point::new(x, y));
        assert_eq!(chrome.handle_message(&msg), Dispatch::Forward);
    }
}

#[test]
fn maximized_window_has_no_side_frames() {
    let window = SimWindow::new(Rect::new(-8, -8, 1928, 1048), METRICS);
    let tabs = FixedTabStrip::new(100, 3, 32);
    let mut chrome = TitlebarChromeController::new(
        ChromeConfig::default(),
        SimCompositor::available(),
        &window,
        &tabs,
    );
    chrome.on_window_state_changed(tab_chrome::host::WindowState::Maximized);

    // with zero frames the left edge is ordinary client area
    assert_eq!(region(&chrome, -8, 500), HitRegion::Nowhere);
    // tab strip now starts at the window origin
    assert_eq!(region(&chrome, -8 + 150, 10), HitRegion::Client);
    // past the tabs the band still drags
    assert_eq!(region(&chrome, 1000, 10), HitRegion::Caption);
}
