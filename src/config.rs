/// Construction-time switches for the titlebar chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeConfig {
    /// When false the controller never queries the compositor and leaves the
    /// window's native chrome untouched.
    pub enabled: bool,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl ChromeConfig {
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
