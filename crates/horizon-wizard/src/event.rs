//! The progress-listener protocol.
//!
//! The wizard broadcasts four event kinds through its public
//! [`Signal`](horizon_wizard_core::Signal) fields. A collaborator that
//! wants all four through one object implements [`WizardProgressListener`]
//! and registers it with [`crate::Wizard::add_listener`]; a collaborator
//! interested in a single kind simply connects a closure to that signal.
//!
//! Dispatch is a plain connection table, one slot per event kind. Firing
//! is synchronous: every listener runs before the operation that emitted
//! the event returns, and always after the controller's state mutation
//! has fully settled.

use horizon_wizard_core::ConnectionId;

use crate::step::SharedStep;

/// Aggregate observer for all four wizard event kinds.
///
/// Every callback has a no-op default, so a listener interested in a
/// subset overrides only what it needs. This is the protocol a
/// progress-bar renderer typically implements.
pub trait WizardProgressListener: Send + Sync {
    /// The active step changed; the listener should update itself to show
    /// `step` as current.
    fn active_step_changed(&self, step: &SharedStep) {
        let _ = step;
    }

    /// The step collection changed (a step was added or removed).
    fn step_set_changed(&self) {}

    /// The wizard finished successfully.
    fn wizard_completed(&self) {}

    /// The wizard was cancelled by the user.
    fn wizard_cancelled(&self) {}
}

/// Handle for a registered [`WizardProgressListener`].
///
/// Returned by [`crate::Wizard::add_listener`]; pass it to
/// [`crate::Wizard::remove_listener`] to detach all four callbacks at
/// once.
#[derive(Debug, Clone, Copy)]
pub struct ListenerRegistration {
    pub(crate) activation: ConnectionId,
    pub(crate) set_changed: ConnectionId,
    pub(crate) completed: ConnectionId,
    pub(crate) cancelled: ConnectionId,
}
