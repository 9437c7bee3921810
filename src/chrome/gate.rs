use tracing::debug;

use crate::config::ChromeConfig;
use crate::host::Compositor;

/// Why the chrome stays native for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InactiveReason {
    Disabled,
    Unavailable,
    QueryFailed,
}

/// One-shot decision on whether the titlebar can be taken over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionGate {
    Active,
    Inactive(InactiveReason),
}

impl CompositionGate {
    /// Evaluate the gate. A disabled config never touches the compositor.
    pub fn evaluate<C: Compositor + ?Sized>(config: &ChromeConfig, compositor: &C) -> Self {
        if !config.enabled {
            return CompositionGate::Inactive(InactiveReason::Disabled);
        }
        match compositor.is_composition_enabled() {
            Ok(true) => CompositionGate::Active,
            Ok(false) => {
                debug!("desktop composition off; keeping native chrome");
                CompositionGate::Inactive(InactiveReason::Unavailable)
            }
            Err(err) => {
                debug!(%err, "composition query failed; keeping native chrome");
                CompositionGate::Inactive(InactiveReason::QueryFailed)
            }
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, CompositionGate::Active)
    }
}
