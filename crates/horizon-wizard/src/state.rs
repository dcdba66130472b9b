//! Navigation bookkeeping: the active step, the completion watermark, and
//! the controller phase.

use crate::registry::StepRegistry;
use crate::step::{same_step, SharedStep};

/// Lifecycle phase of a wizard instance.
///
/// `Completed` and `Cancelled` are dead ends: no built-in transition
/// resets them, a fresh [`crate::Wizard`] is the prescribed recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardPhase {
    /// No step has been activated yet.
    #[default]
    Uninitialized,
    /// A step is currently active.
    Active,
    /// `finish()` succeeded on the last step.
    Completed,
    /// `cancel()` was invoked.
    Cancelled,
}

/// Mutable navigation state owned by the controller.
///
/// Mutated exclusively by the transition operations on
/// [`crate::Wizard`]; lives exactly as long as the owning instance.
#[derive(Default)]
pub(crate) struct NavigationState {
    /// The step currently displayed, empty only before first activation.
    current: Option<SharedStep>,
    /// Furthest step the user has ever been allowed past. Monotonically
    /// non-decreasing in sequence position, except it is eagerly cleared
    /// when its referent is removed from the registry.
    last_completed: Option<SharedStep>,
    /// Lifecycle phase.
    phase: WizardPhase,
}

impl NavigationState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn phase(&self) -> WizardPhase {
        self.phase
    }

    /// Whether the wizard has reached a terminal phase.
    pub(crate) fn is_terminal(&self) -> bool {
        matches!(self.phase, WizardPhase::Completed | WizardPhase::Cancelled)
    }

    pub(crate) fn complete(&mut self) {
        self.phase = WizardPhase::Completed;
    }

    pub(crate) fn cancel(&mut self) {
        self.phase = WizardPhase::Cancelled;
    }

    pub(crate) fn current(&self) -> Option<&SharedStep> {
        self.current.as_ref()
    }

    pub(crate) fn set_current(&mut self, step: SharedStep) {
        self.current = Some(step);
        self.phase = WizardPhase::Active;
    }

    pub(crate) fn last_completed(&self) -> Option<&SharedStep> {
        self.last_completed.as_ref()
    }

    /// Position of the watermark step, or `None` when unset (or dangling).
    pub(crate) fn watermark_position(&self, registry: &StepRegistry) -> Option<usize> {
        self.last_completed
            .as_ref()
            .and_then(|s| registry.position_of(s))
    }

    /// Raise the watermark to `step` if its position exceeds the current
    /// watermark position. Going back and forth never regresses it.
    pub(crate) fn raise_watermark(&mut self, step: SharedStep, registry: &StepRegistry) {
        let candidate = registry.position_of(&step);
        let existing = self.watermark_position(registry);
        match (candidate, existing) {
            (Some(c), Some(e)) if c <= e => {}
            (Some(_), _) => self.last_completed = Some(step),
            (None, _) => {}
        }
    }

    /// Eagerly clear the watermark when its referent is removed, so no
    /// predicate ever evaluates a dangling reference.
    pub(crate) fn clear_watermark_if(&mut self, step: &SharedStep) {
        if let Some(watermark) = &self.last_completed
            && same_step(watermark, step)
        {
            self.last_completed = None;
        }
    }

    /// Whether `step` is the currently displayed step.
    pub(crate) fn is_active(&self, step: &SharedStep) -> bool {
        self.current.as_ref().is_some_and(|c| same_step(c, step))
    }

    /// Whether `step` lies strictly before the current step in navigation
    /// order. False when either step is unregistered or nothing is active.
    pub(crate) fn is_completed(&self, step: &SharedStep, registry: &StepRegistry) -> bool {
        let Some(current) = &self.current else {
            return false;
        };
        match (registry.position_of(step), registry.position_of(current)) {
            (Some(s), Some(c)) => s < c,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::step::WizardStep;

    struct NamedStep(&'static str);

    impl WizardStep for NamedStep {
        fn caption(&self) -> String {
            self.0.to_string()
        }
    }

    fn registry_of(names: &[&'static str]) -> (StepRegistry, Vec<SharedStep>) {
        let mut registry = StepRegistry::new();
        let steps: Vec<SharedStep> = names
            .iter()
            .map(|n| Arc::new(NamedStep(n)) as SharedStep)
            .collect();
        for step in &steps {
            registry.add(step.clone()).unwrap();
        }
        (registry, steps)
    }

    #[test]
    fn test_watermark_is_monotonic() {
        let (registry, steps) = registry_of(&["a", "b", "c"]);
        let mut nav = NavigationState::new();

        nav.raise_watermark(steps[1].clone(), &registry);
        assert_eq!(nav.watermark_position(&registry), Some(1));

        // Retreating never regresses the watermark.
        nav.raise_watermark(steps[0].clone(), &registry);
        assert_eq!(nav.watermark_position(&registry), Some(1));

        nav.raise_watermark(steps[2].clone(), &registry);
        assert_eq!(nav.watermark_position(&registry), Some(2));
    }

    #[test]
    fn test_clear_watermark_on_removal() {
        let (registry, steps) = registry_of(&["a", "b"]);
        let mut nav = NavigationState::new();

        nav.raise_watermark(steps[1].clone(), &registry);
        nav.clear_watermark_if(&steps[0]);
        assert!(nav.last_completed().is_some());

        nav.clear_watermark_if(&steps[1]);
        assert!(nav.last_completed().is_none());
    }

    #[test]
    fn test_completion_predicate_is_positional() {
        let (registry, steps) = registry_of(&["a", "b", "c"]);
        let mut nav = NavigationState::new();

        assert!(!nav.is_completed(&steps[0], &registry));

        nav.set_current(steps[1].clone());
        assert!(nav.is_completed(&steps[0], &registry));
        assert!(!nav.is_completed(&steps[1], &registry));
        assert!(!nav.is_completed(&steps[2], &registry));
        assert!(nav.is_active(&steps[1]));
    }

    #[test]
    fn test_terminal_phases() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.phase(), WizardPhase::Uninitialized);
        assert!(!nav.is_terminal());

        nav.complete();
        assert_eq!(nav.phase(), WizardPhase::Completed);
        assert!(nav.is_terminal());

        let mut nav = NavigationState::new();
        nav.cancel();
        assert_eq!(nav.phase(), WizardPhase::Cancelled);
        assert!(nav.is_terminal());
    }
}
