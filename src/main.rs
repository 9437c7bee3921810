#[cfg(windows)]
fn main() -> std::io::Result<()> {
    tab_chrome::tracing_sub::init_default();
    demo::run()
}

#[cfg(not(windows))]
fn main() {
    eprintln!(
        "{}",
        indoc::indoc! {"
            tab-chrome: the demo window needs a composited Windows desktop.
            Use `chrome-probe` to inspect hit-test regions on this platform.
        "}
    );
}

#[cfg(windows)]
mod demo {
    use std::cell::RefCell;
    use std::io;
    use std::ptr;

    use windows_sys::Win32::Foundation::{HWND, LPARAM, LRESULT, RECT, WPARAM};
    use windows_sys::Win32::Graphics::Gdi::{
        BLACK_BRUSH, BeginPaint, CreateSolidBrush, DeleteObject, EndPaint, FillRect, GRAY_BRUSH,
        GetStockObject, HBRUSH, HDC, InvalidateRect, PAINTSTRUCT,
    };
    use windows_sys::Win32::System::LibraryLoader::GetModuleHandleW;
    use windows_sys::Win32::UI::WindowsAndMessaging::{
        CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, CreateWindowExW, DefWindowProcW,
        DispatchMessageW, GetMessageW, IDC_ARROW, LoadCursorW, MSG, PostQuitMessage,
        RegisterClassW, SW_SHOW, ShowWindow, TranslateMessage, WM_DESTROY, WM_PAINT, WM_SIZE,
        WNDCLASSW, WS_OVERLAPPEDWINDOW,
    };

    use tab_chrome::chrome::TitlebarChromeController;
    use tab_chrome::config::ChromeConfig;
    use tab_chrome::host::{CornerPlacement, HostWindow};
    use tab_chrome::message::{Dispatch, MinMaxInfo, RawMessage, WM_GETMINMAXINFO, WindowHandle};
    use tab_chrome::sim::{FixedCorner, FixedTabStrip};
    use tab_chrome::win32::{DwmCompositor, Win32Window};

    static TABS: FixedTabStrip = FixedTabStrip::new(160, 3, 28);
    static CORNER: FixedCorner = FixedCorner::new(36, 28);

    struct Demo {
        window: &'static Win32Window,
        chrome: TitlebarChromeController<'static, DwmCompositor>,
        corner_leads: bool,
    }

    thread_local! {
        static DEMO: RefCell<Option<Demo>> = const { RefCell::new(None) };
    }

    fn wide(text: &str) -> Vec<u16> {
        text.encode_utf16().chain(Some(0)).collect()
    }

    pub fn run() -> io::Result<()> {
        let class_name = wide("TabChromeDemo");
        let title = wide("tab-chrome");
        // SAFETY: every pointer handed to USER32 here is either null where the
        // API allows it or borrows a buffer that outlives the call.
        let hwnd = unsafe {
            let instance = GetModuleHandleW(ptr::null());
            let class = WNDCLASSW {
                style: CS_HREDRAW | CS_VREDRAW,
                lpfnWndProc: Some(wnd_proc),
                cbClsExtra: 0,
                cbWndExtra: 0,
                hInstance: instance,
                hIcon: ptr::null_mut(),
                hCursor: LoadCursorW(ptr::null_mut(), IDC_ARROW),
                hbrBackground: GetStockObject(BLACK_BRUSH) as HBRUSH,
                lpszMenuName: ptr::null(),
                lpszClassName: class_name.as_ptr(),
            };
            if RegisterClassW(&class) == 0 {
                return Err(io::Error::last_os_error());
            }
            CreateWindowExW(
                0,
                class_name.as_ptr(),
                title.as_ptr(),
                WS_OVERLAPPEDWINDOW,
                CW_USEDEFAULT,
                CW_USEDEFAULT,
                960,
                640,
                ptr::null_mut(),
                ptr::null_mut(),
                instance,
                ptr::null(),
            )
        };
        if hwnd.is_null() {
            return Err(io::Error::last_os_error());
        }

        // The window lives until the message loop ends, which is also the end
        // of the process, so the host view is leaked for a 'static borrow.
        // SAFETY: `hwnd` was just created and is destroyed only when the
        // message loop below has ended.
        let window: &'static Win32Window = Box::leak(Box::new(unsafe { Win32Window::new(hwnd) }));
        let mut chrome =
            TitlebarChromeController::new(ChromeConfig::default(), DwmCompositor, window, &TABS);
        let corner_leads = chrome.set_corner_widget(&CORNER) == CornerPlacement::TopLeft;
        DEMO.with(|demo| {
            *demo.borrow_mut() = Some(Demo {
                window,
                chrome,
                corner_leads,
            })
        });
        // Re-run the frame calculation now that the controller answers it.
        window.notify_frame_changed();

        // SAFETY: `msg` is a local the loop owns; `hwnd` is live.
        unsafe {
            ShowWindow(hwnd, SW_SHOW);
            let mut msg: MSG = std::mem::zeroed();
            while GetMessageW(&mut msg, ptr::null_mut(), 0, 0) > 0 {
                TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }
        Ok(())
    }

    unsafe extern "system" fn wnd_proc(
        hwnd: HWND,
        msg: u32,
        wparam: WPARAM,
        lparam: LPARAM,
    ) -> LRESULT {
        let raw = RawMessage::new(WindowHandle::from_hwnd(hwnd), msg, wparam, lparam);
        let dispatch = DEMO.with(|demo| {
            // Re-entrant messages sent while the controller is borrowed
            // mutably fall through to the default procedure.
            let Ok(mut slot) = demo.try_borrow_mut() else {
                return Dispatch::Forward;
            };
            let Some(demo) = slot.as_mut() else {
                return Dispatch::Forward;
            };
            if msg == WM_SIZE {
                demo.chrome
                    .on_window_state_changed(demo.window.window_state());
                // SAFETY: `hwnd` is the window this procedure is running for.
                unsafe { InvalidateRect(hwnd, ptr::null(), 1) };
            }
            match msg {
                WM_PAINT => {
                    paint(hwnd, demo);
                    Dispatch::Handled(0)
                }
                WM_DESTROY => {
                    // SAFETY: no pointer arguments.
                    unsafe { PostQuitMessage(0) };
                    Dispatch::Handled(0)
                }
                WM_GETMINMAXINFO => {
                    // SAFETY: for WM_GETMINMAXINFO the system passes a pointer
                    // to a live MINMAXINFO, valid for this call, and
                    // MinMaxInfo is layout-compatible with it.
                    match unsafe { (lparam as *mut MinMaxInfo).as_mut() } {
                        Some(info) => demo.chrome.handle_min_max_info(&raw, info),
                        None => Dispatch::Forward,
                    }
                }
                _ => demo.chrome.handle_message(&raw),
            }
        });
        match dispatch {
            Dispatch::Handled(result) => result,
            // SAFETY: the parameters are passed through exactly as received.
            Dispatch::Forward => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
        }
    }

    fn paint(hwnd: HWND, demo: &Demo) {
        let margins = demo.window.contents_margins();
        let band_height = demo
            .chrome
            .state()
            .map_or(TABS.height, |state| state.tab_strip_height());
        let lead = if demo.corner_leads { CORNER.width } else { 0 };
        // Black client pixels show the extended frame through.
        let background = if demo.window.is_translucent() {
            BLACK_BRUSH
        } else {
            GRAY_BRUSH
        };

        // SAFETY: called from WM_PAINT for `hwnd`; every RECT and the
        // PAINTSTRUCT are locals, and each created brush is deleted once used.
        unsafe {
            let mut ps: PAINTSTRUCT = std::mem::zeroed();
            let hdc: HDC = BeginPaint(hwnd, &mut ps);
            FillRect(hdc, &ps.rcPaint, GetStockObject(background) as HBRUSH);

            let corner_brush = CreateSolidBrush(0x0060_6060);
            let corner = RECT {
                left: margins.left,
                top: margins.top,
                right: margins.left + lead,
                bottom: margins.top + band_height,
            };
            FillRect(hdc, &corner, corner_brush);
            DeleteObject(corner_brush);

            let tab_brush = CreateSolidBrush(0x0040_4040);
            for index in 0..TABS.count {
                let Some(tab) = TABS.tab_rect(index) else {
                    continue;
                };
                let rect = RECT {
                    left: margins.left + lead + tab.left + 1,
                    top: margins.top,
                    right: margins.left + lead + tab.right - 1,
                    bottom: margins.top + tab.bottom.min(band_height),
                };
                FillRect(hdc, &rect, tab_brush);
            }
            DeleteObject(tab_brush);

            EndPaint(hwnd, &ps);
        }
    }
}
