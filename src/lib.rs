//! Tabs-in-titlebar window chrome for composited Windows desktops.
//!
//! The decision logic lives in [`chrome`] and only talks to the outside world
//! through the traits in [`host`], so it runs (and is tested) anywhere. The
//! native collaborators are in `win32`, compiled on Windows only.

pub mod chrome;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod host;
pub mod message;
pub mod sim;
pub mod tracing_sub;
#[cfg(windows)]
pub mod win32;

pub use chrome::{ChromeState, HitRegion, HitTestOutcome, TitlebarChromeController};
pub use config::ChromeConfig;
pub use error::ChromeError;
