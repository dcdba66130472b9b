//! The wizard navigation controller.
//!
//! [`Wizard`] owns the ordered step sequence, gates every transition
//! through the current step's approval hooks, tracks the furthest step the
//! user has completed, and broadcasts lifecycle events to connected
//! observers. It never renders anything: buttons, progress bars, and step
//! content are collaborators driving (or observing) this state machine.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_wizard::{Wizard, WizardStep};
//!
//! struct Greeting;
//!
//! impl WizardStep for Greeting {
//!     fn caption(&self) -> String {
//!         "Welcome".to_string()
//!     }
//! }
//!
//! let mut wizard = Wizard::new();
//! wizard.completed.connect(|_| println!("Wizard completed!"));
//!
//! wizard.add_step(Arc::new(Greeting)).unwrap();
//! wizard.finish();
//! ```

use std::sync::Arc;

use horizon_wizard_core::Signal;

use crate::address::{AddressBar, AddressSynchronizer};
use crate::error::{Error, Result};
use crate::event::{ListenerRegistration, WizardProgressListener};
use crate::registry::StepRegistry;
use crate::state::{NavigationState, WizardPhase};
use crate::step::SharedStep;

/// Derived enablement of the three navigation buttons.
///
/// Recomputed from step positions after every successful transition;
/// whether a rendering collaborator disables or hides the next/finish
/// pairing is its own policy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// The current step is not the first step.
    pub back_enabled: bool,
    /// The current step is not the last step.
    pub next_enabled: bool,
    /// The current step is the last step.
    pub finish_enabled: bool,
}

/// A multi-step navigation controller.
///
/// The controller moves through four phases: `Uninitialized` until the
/// first step is activated, `Active` while navigating, and the terminal
/// `Completed`/`Cancelled` phases, from which no built-in transition
/// returns (construct a fresh instance to restart).
///
/// All operations are synchronous and designed for a single logical UI
/// thread. Gating-hook rejection is a normal outcome, not an error: when a
/// hook vetoes a transition the controller leaves no observable state
/// change and fires no event.
///
/// # Signals
///
/// - `step_activated(SharedStep)`: fired exactly once per successful activation
/// - `step_set_changed(())`: fired once per successful step add/remove
/// - `completed(())`: fired once when `finish()` succeeds on the last step
/// - `cancelled(())`: fired once when `cancel()` ends the wizard
pub struct Wizard {
    /// Ordered steps plus the unique id index.
    registry: StepRegistry,
    /// Current step, completion watermark, lifecycle phase.
    nav: NavigationState,
    /// Optional deep-link synchronization.
    address: AddressSynchronizer,

    /// Signal emitted when a step becomes active.
    pub step_activated: Signal<SharedStep>,
    /// Signal emitted when the step collection changes.
    pub step_set_changed: Signal<()>,
    /// Signal emitted when the wizard completes.
    pub completed: Signal<()>,
    /// Signal emitted when the wizard is cancelled.
    pub cancelled: Signal<()>,
}

impl Wizard {
    /// Create an empty wizard.
    pub fn new() -> Self {
        Self {
            registry: StepRegistry::new(),
            nav: NavigationState::new(),
            address: AddressSynchronizer::new(),
            step_activated: Signal::new(),
            step_set_changed: Signal::new(),
            completed: Signal::new(),
            cancelled: Signal::new(),
        }
    }

    // =========================================================================
    // Step Management
    // =========================================================================

    /// Append a step under the next auto-generated id.
    ///
    /// The first step ever added becomes the active step immediately.
    /// Returns the id the step was registered under.
    pub fn add_step(&mut self, step: SharedStep) -> Result<String> {
        let id = self.registry.add(step.clone())?;
        self.after_add(step);
        Ok(id)
    }

    /// Append a step under a caller-supplied id.
    ///
    /// Fails with [`Error::DuplicateStepId`] if the id is taken, leaving
    /// the wizard unchanged.
    pub fn add_step_with_id(&mut self, step: SharedStep, id: impl Into<String>) -> Result<()> {
        self.registry.add_with_id(step.clone(), id)?;
        self.after_add(step);
        Ok(())
    }

    fn after_add(&mut self, step: SharedStep) {
        self.step_set_changed.emit(());
        if self.nav.current().is_none() && !self.nav.is_terminal() {
            self.activate_step(step);
        }
    }

    /// Remove a step.
    ///
    /// A step that is currently displayed or already passed cannot vanish
    /// from under the user: removal fails with [`Error::StepInUse`] and
    /// mutates nothing. Removing a step that was never registered is a
    /// soft no-op.
    pub fn remove_step(&mut self, step: &SharedStep) -> Result<()> {
        if self.registry.position_of(step).is_none() {
            tracing::debug!(
                target: "horizon_wizard::navigation",
                "ignoring removal of unregistered step"
            );
            return Ok(());
        }
        if self.nav.is_active(step) || self.nav.is_completed(step, &self.registry) {
            let id = self.registry.id_of(step).unwrap_or_default().to_string();
            return Err(Error::step_in_use(id));
        }

        self.nav.clear_watermark_if(step);
        self.registry.remove(step);
        self.step_set_changed.emit(());
        Ok(())
    }

    /// Remove a step by its id. Unknown ids are a soft no-op.
    pub fn remove_step_by_id(&mut self, id: &str) -> Result<()> {
        match self.registry.step_of(id) {
            Some(step) => self.remove_step(&step),
            None => Ok(()),
        }
    }

    /// Read-only view of the steps in navigation order.
    pub fn steps(&self) -> &[SharedStep] {
        self.registry.steps()
    }

    /// Resolve a step id to its step.
    pub fn step_of(&self, id: &str) -> Option<SharedStep> {
        self.registry.step_of(id)
    }

    /// Resolve a step to its registered id.
    pub fn id_of(&self, step: &SharedStep) -> Option<&str> {
        self.registry.id_of(step)
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Whether `step` lies strictly before the current step.
    pub fn is_completed(&self, step: &SharedStep) -> bool {
        self.nav.is_completed(step, &self.registry)
    }

    /// Whether `step` is the currently displayed step.
    pub fn is_active(&self, step: &SharedStep) -> bool {
        self.nav.is_active(step)
    }

    /// Whether `step` is the first step. False for unregistered steps.
    pub fn is_first_step(&self, step: &SharedStep) -> bool {
        self.registry.is_first(step)
    }

    /// Whether `step` is the last step. False for unregistered steps.
    pub fn is_last_step(&self, step: &SharedStep) -> bool {
        self.registry.is_last(step)
    }

    /// The currently active step, if any.
    pub fn current_step(&self) -> Option<&SharedStep> {
        self.nav.current()
    }

    /// The furthest step the user ever advanced past (the watermark).
    pub fn last_completed_step(&self) -> Option<&SharedStep> {
        self.nav.last_completed()
    }

    /// The controller's lifecycle phase.
    pub fn phase(&self) -> WizardPhase {
        self.nav.phase()
    }

    /// Derived button enablement for the current position.
    pub fn button_state(&self) -> ButtonState {
        match self.nav.current() {
            Some(current) if !self.nav.is_terminal() => ButtonState {
                back_enabled: !self.registry.is_first(current),
                next_enabled: !self.registry.is_last(current),
                finish_enabled: self.registry.is_last(current),
            },
            _ => ButtonState::default(),
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Activate `step` — the master transition primitive.
    ///
    /// Activating the already-active step is a silent no-op that reports
    /// success without firing events. Otherwise the current step's gating
    /// hook is consulted (`on_advance` when moving forward, `on_back` when
    /// moving backward); a `false` aborts the whole activation with no
    /// state change and no event. On success the completion watermark is
    /// raised monotonically, the step is swapped in, the outbound address
    /// token is refreshed, and `step_activated` fires exactly once.
    ///
    /// Returns whether the activation took (or was a silent no-op).
    pub fn activate_step(&mut self, step: SharedStep) -> bool {
        if self.nav.is_terminal() {
            return false;
        }
        if self.nav.is_active(&step) {
            return true;
        }
        let Some(target_pos) = self.registry.position_of(&step) else {
            tracing::debug!(
                target: "horizon_wizard::navigation",
                "ignoring activation of unregistered step"
            );
            return false;
        };

        if let Some(current) = self.nav.current().cloned() {
            let Some(current_pos) = self.registry.position_of(&current) else {
                return false;
            };
            let advancing = target_pos > current_pos;
            let allowed = if advancing {
                current.on_advance()
            } else {
                current.on_back()
            };
            if !allowed {
                tracing::debug!(
                    target: "horizon_wizard::navigation",
                    advancing,
                    "transition vetoed by gating hook"
                );
                return false;
            }
            self.nav.raise_watermark(current, &self.registry);
        }

        tracing::debug!(
            target: "horizon_wizard::navigation",
            position = target_pos,
            caption = %step.caption(),
            "step activated"
        );
        self.nav.set_current(step.clone());

        let token = self.registry.id_of(&step).unwrap_or_default().to_string();
        self.address.publish(&token);

        self.step_activated.emit(step);
        true
    }

    /// Advance to the next step, or delegate to [`finish`](Self::finish)
    /// when the current step is the last.
    pub fn next(&mut self) -> bool {
        if self.nav.is_terminal() {
            return false;
        }
        let Some(current) = self.nav.current().cloned() else {
            return false;
        };
        if self.registry.is_last(&current) {
            return self.finish();
        }
        let Some(position) = self.registry.position_of(&current) else {
            return false;
        };
        match self.registry.get(position + 1) {
            Some(next) => self.activate_step(next),
            None => false,
        }
    }

    /// Retreat to the previous step. No-op on the first step; unlike
    /// [`next`](Self::next), there is no finish delegation.
    pub fn back(&mut self) -> bool {
        if self.nav.is_terminal() {
            return false;
        }
        let Some(current) = self.nav.current().cloned() else {
            return false;
        };
        match self.registry.position_of(&current) {
            Some(position) if position > 0 => match self.registry.get(position - 1) {
                Some(previous) => self.activate_step(previous),
                None => false,
            },
            _ => false,
        }
    }

    /// Finish the wizard.
    ///
    /// Fires `completed` only if the current step is the last step and its
    /// `on_advance` hook passes; anything else is a no-op (a stale UI can
    /// legitimately produce the call).
    pub fn finish(&mut self) -> bool {
        if self.nav.is_terminal() {
            return false;
        }
        let Some(current) = self.nav.current().cloned() else {
            return false;
        };
        if !self.registry.is_last(&current) {
            return false;
        }
        if !current.on_advance() {
            tracing::debug!(
                target: "horizon_wizard::navigation",
                "finish vetoed by gating hook"
            );
            return false;
        }

        tracing::debug!(target: "horizon_wizard::navigation", "wizard completed");
        self.nav.complete();
        self.completed.emit(());
        true
    }

    /// Cancel the wizard.
    ///
    /// A first-class user-triggered business event: no gating hook is
    /// consulted and no particular step is required. Fires `cancelled`
    /// exactly once and enters the terminal `Cancelled` phase.
    pub fn cancel(&mut self) -> bool {
        if self.nav.is_terminal() {
            return false;
        }

        tracing::debug!(target: "horizon_wizard::navigation", "wizard cancelled");
        self.nav.cancel();
        self.cancelled.emit(());
        true
    }

    /// Address-driven activation with the clamping policy.
    ///
    /// A request at or below the completion watermark activates the
    /// requested step directly — free navigation back to anything already
    /// unlocked. A request beyond the watermark is not honored at face
    /// value: the controller activates the watermark step instead, so an
    /// externally supplied address can never skip ahead of what the user
    /// has legitimately completed. Unknown ids are a soft no-op.
    pub fn activate_by_id(&mut self, id: &str) -> bool {
        let Some(step) = self.registry.step_of(id) else {
            tracing::debug!(
                target: "horizon_wizard::navigation",
                id = %id,
                "ignoring unknown address token"
            );
            return false;
        };
        if self.nav.is_active(&step) {
            return true;
        }

        let target = self.registry.position_of(&step);
        let watermark = self.nav.watermark_position(&self.registry);
        let unlocked = matches!((target, watermark), (Some(t), Some(w)) if t <= w);

        if unlocked {
            self.activate_step(step)
        } else if let Some(clamp) = self.nav.last_completed().cloned() {
            tracing::debug!(
                target: "horizon_wizard::navigation",
                id = %id,
                "clamping forward jump to the completion watermark"
            );
            self.activate_step(clamp)
        } else {
            false
        }
    }

    // =========================================================================
    // Address Synchronization
    // =========================================================================

    /// Attach the external address-token collaborator.
    pub fn set_address_bar(&mut self, bar: Arc<dyn AddressBar>) {
        self.address.set_bar(bar);
    }

    /// Enable or disable address synchronization (disabled by default).
    ///
    /// Enabling publishes the current step's token immediately so the
    /// external address reflects reality.
    pub fn set_address_sync_enabled(&mut self, enabled: bool) {
        self.address.set_enabled(enabled);
        if enabled && let Some(current) = self.nav.current() {
            let token = self.registry.id_of(current).unwrap_or_default().to_string();
            self.address.publish(&token);
        }
    }

    /// Inbound notification that the external address token changed.
    ///
    /// An empty token, when steps exist, canonicalizes to the first step:
    /// the token is rewritten to the first step's id and the first step is
    /// activated. Anything else resolves through
    /// [`activate_by_id`](Self::activate_by_id). No-op while address
    /// synchronization is disabled.
    pub fn address_changed(&mut self, token: &str) -> bool {
        if !self.address.is_enabled() {
            return false;
        }
        if token.is_empty() {
            let Some(first) = self.registry.first() else {
                return false;
            };
            let id = self.registry.id_of(&first).unwrap_or_default().to_string();
            self.address.canonicalize(&id);
            return self.activate_step(first);
        }
        self.activate_by_id(token)
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    /// Register an aggregate listener for all four event kinds.
    ///
    /// Each callback is bound to the corresponding signal; the returned
    /// registration detaches all four at once via
    /// [`remove_listener`](Self::remove_listener).
    pub fn add_listener(&self, listener: Arc<dyn WizardProgressListener>) -> ListenerRegistration {
        let l = listener.clone();
        let activation = self
            .step_activated
            .connect(move |step| l.active_step_changed(step));
        let l = listener.clone();
        let set_changed = self.step_set_changed.connect(move |_| l.step_set_changed());
        let l = listener.clone();
        let completed = self.completed.connect(move |_| l.wizard_completed());
        let cancelled = self.cancelled.connect(move |_| listener.wizard_cancelled());
        ListenerRegistration {
            activation,
            set_changed,
            completed,
            cancelled,
        }
    }

    /// Detach a previously registered aggregate listener.
    ///
    /// Returns `true` if any of its connections were still attached.
    pub fn remove_listener(&self, registration: ListenerRegistration) -> bool {
        let mut any = self.step_activated.disconnect(registration.activation);
        any |= self.step_set_changed.disconnect(registration.set_changed);
        any |= self.completed.disconnect(registration.completed);
        any |= self.cancelled.disconnect(registration.cancelled);
        any
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

static_assertions::assert_impl_all!(Wizard: Send, Sync);
