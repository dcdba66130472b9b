//! Deep-link address synchronization.
//!
//! When enabled, the wizard mirrors the active step's id into an external
//! address token (a URL fragment, typically) and accepts inbound token
//! changes as navigation requests. The controller only ever exchanges
//! string tokens with the [`AddressBar`] collaborator; the
//! browser/platform transport behind it is out of scope.
//!
//! Inbound requests are not honored at face value: the controller clamps
//! forward jumps to the completion watermark, so a hand-edited link can
//! never skip ahead of what the user has legitimately unlocked. See
//! [`crate::Wizard::activate_by_id`].

use std::sync::Arc;

/// External address-token collaborator.
///
/// Implemented by whatever owns the shareable location string: a browser
/// URL-fragment bridge, a test double, an application-level router.
pub trait AddressBar: Send + Sync {
    /// The current address token.
    fn token(&self) -> String;

    /// Replace the address token.
    ///
    /// `propagate` asks the collaborator to notify its other integrations
    /// of the change (the wizard passes `false` for ordinary outbound
    /// writes so its own updates do not echo back as inbound navigation).
    fn set_token(&self, token: &str, propagate: bool);
}

/// Outbound half of address synchronization. Disabled by default.
pub(crate) struct AddressSynchronizer {
    enabled: bool,
    bar: Option<Arc<dyn AddressBar>>,
}

impl AddressSynchronizer {
    pub(crate) fn new() -> Self {
        Self {
            enabled: false,
            bar: None,
        }
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled && self.bar.is_some()
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_bar(&mut self, bar: Arc<dyn AddressBar>) {
        self.bar = Some(bar);
    }

    /// Write the active step's token outbound. No-op while disabled.
    pub(crate) fn publish(&self, token: &str) {
        if !self.is_enabled() {
            return;
        }
        if let Some(bar) = &self.bar {
            tracing::debug!(target: "horizon_wizard::address", token = %token, "publishing address token");
            bar.set_token(token, false);
        }
    }

    /// Rewrite a malformed/empty inbound token to its canonical form,
    /// letting the collaborator propagate the correction.
    pub(crate) fn canonicalize(&self, token: &str) {
        if !self.is_enabled() {
            return;
        }
        if let Some(bar) = &self.bar {
            tracing::debug!(target: "horizon_wizard::address", token = %token, "canonicalizing address token");
            bar.set_token(token, true);
        }
    }
}
