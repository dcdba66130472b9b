//! Ordered step storage with a unique string-id index.
//!
//! Insertion order defines navigation order and is never resorted. Every
//! registered step has exactly one id and every id maps to exactly one
//! step; the two structures move together or not at all.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::step::{same_step, SharedStep};

/// Prefix for auto-generated step ids.
const AUTO_ID_PREFIX: &str = "wizard-step-";

/// Ordered collection of steps plus a unique id index.
pub struct StepRegistry {
    /// Navigation order. Never implicitly resorted.
    sequence: Vec<SharedStep>,
    /// Unique id -> step. Bijective with `sequence`.
    id_index: HashMap<String, SharedStep>,
    /// Counter for auto-generated ids. Strictly increasing, never reused
    /// even after removals, so a removed `wizard-step-2` is never handed
    /// out again.
    next_auto_id: u64,
}

impl StepRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            id_index: HashMap::new(),
            next_auto_id: 0,
        }
    }

    /// Append a step under the next auto-generated id.
    ///
    /// Returns the id the step was registered under.
    pub fn add(&mut self, step: SharedStep) -> Result<String> {
        // The counter advances past user-supplied ids that happen to use
        // the auto pattern, and never moves backwards.
        let id = loop {
            let candidate = format!("{}{}", AUTO_ID_PREFIX, self.next_auto_id);
            self.next_auto_id += 1;
            if !self.id_index.contains_key(&candidate) {
                break candidate;
            }
        };
        self.add_with_id(step, id.clone())?;
        Ok(id)
    }

    /// Append a step under a caller-supplied id.
    ///
    /// Fails with [`Error::DuplicateStepId`] if the id is already taken,
    /// leaving the registry unchanged.
    pub fn add_with_id(&mut self, step: SharedStep, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        if self.id_index.contains_key(&id) {
            return Err(Error::duplicate_step_id(id));
        }

        tracing::debug!(target: "horizon_wizard::registry", id = %id, "step added");
        self.id_index.insert(id, step.clone());
        self.sequence.push(step);
        Ok(())
    }

    /// Remove a step, returning the id it was registered under.
    ///
    /// Returns `None` (leaving the registry untouched) if the step is not
    /// registered.
    pub fn remove(&mut self, step: &SharedStep) -> Option<String> {
        let position = self.position_of(step)?;
        let id = self.id_of(step)?.to_string();

        self.sequence.remove(position);
        self.id_index.remove(&id);
        tracing::debug!(target: "horizon_wizard::registry", id = %id, "step removed");
        Some(id)
    }

    /// Resolve an id to its step. O(1).
    pub fn step_of(&self, id: &str) -> Option<SharedStep> {
        self.id_index.get(id).cloned()
    }

    /// Resolve a step to its id. O(n), acceptable for wizard-sized
    /// collections; maintain an inverse index if steps ever number in the
    /// thousands.
    pub fn id_of(&self, step: &SharedStep) -> Option<&str> {
        self.id_index
            .iter()
            .find(|(_, s)| same_step(s, step))
            .map(|(id, _)| id.as_str())
    }

    /// Index of a step in navigation order, or `None` if not registered.
    pub fn position_of(&self, step: &SharedStep) -> Option<usize> {
        self.sequence.iter().position(|s| same_step(s, step))
    }

    /// The step at `position`, if any.
    pub fn get(&self, position: usize) -> Option<SharedStep> {
        self.sequence.get(position).cloned()
    }

    /// The first step in navigation order.
    pub fn first(&self) -> Option<SharedStep> {
        self.sequence.first().cloned()
    }

    /// Whether `step` is at position 0. False for unregistered steps.
    pub fn is_first(&self, step: &SharedStep) -> bool {
        self.position_of(step) == Some(0)
    }

    /// Whether `step` is the final step. False for unregistered steps.
    pub fn is_last(&self, step: &SharedStep) -> bool {
        !self.sequence.is_empty() && self.position_of(step) == Some(self.sequence.len() - 1)
    }

    /// Read-only view of the steps in navigation order.
    pub fn steps(&self) -> &[SharedStep] {
        &self.sequence
    }

    /// Number of registered steps.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the registry holds no steps.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl Default for StepRegistry {
    fn default() -> Self {
        Self::new()
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

    fn step(name: &'static str) -> SharedStep {
        Arc::new(NamedStep(name))
    }

    #[test]
    fn test_add_assigns_sequential_auto_ids() {
        let mut registry = StepRegistry::new();
        let a = registry.add(step("a")).unwrap();
        let b = registry.add(step("b")).unwrap();

        assert_eq!(a, "wizard-step-0");
        assert_eq!(b, "wizard-step-1");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_id_rejected_without_mutation() {
        let mut registry = StepRegistry::new();
        registry.add_with_id(step("a"), "intro").unwrap();

        let err = registry.add_with_id(step("b"), "intro").unwrap_err();
        assert_eq!(err, Error::duplicate_step_id("intro"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.steps()[0].caption(), "a");
    }

    #[test]
    fn test_remove_and_add_never_reuses_auto_id() {
        // Regression test: removing a step and adding a new one used to
        // reassign the removed step's id, producing a duplicate-id failure.
        let mut registry = StepRegistry::new();
        let a = step("a");
        let b = step("b");
        let c = step("c");
        registry.add(a.clone()).unwrap();
        registry.add(b.clone()).unwrap();
        registry.add(c.clone()).unwrap();

        registry.remove(&b);
        let d_id = registry.add(step("d")).unwrap();

        assert_eq!(registry.len(), 3);
        assert_eq!(d_id, "wizard-step-3");
        let order: Vec<String> = registry.steps().iter().map(|s| s.caption()).collect();
        assert_eq!(order, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_auto_id_skips_user_supplied_collision() {
        let mut registry = StepRegistry::new();
        registry
            .add_with_id(step("manual"), "wizard-step-0")
            .unwrap();

        let id = registry.add(step("auto")).unwrap();
        assert_eq!(id, "wizard-step-1");
    }

    #[test]
    fn test_lookup_round_trips() {
        let mut registry = StepRegistry::new();
        let a = step("a");
        registry.add_with_id(a.clone(), "intro").unwrap();

        assert!(same_step(&registry.step_of("intro").unwrap(), &a));
        assert_eq!(registry.id_of(&a), Some("intro"));
        assert_eq!(registry.position_of(&a), Some(0));
        assert!(registry.step_of("missing").is_none());
    }

    #[test]
    fn test_remove_unknown_step_is_noop() {
        let mut registry = StepRegistry::new();
        registry.add(step("a")).unwrap();

        let stranger = step("stranger");
        assert_eq!(registry.remove(&stranger), None);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_first_last_positional_predicates() {
        let mut registry = StepRegistry::new();
        let a = step("a");
        let b = step("b");
        let c = step("c");
        registry.add(a.clone()).unwrap();
        registry.add(b.clone()).unwrap();
        registry.add(c.clone()).unwrap();

        assert!(registry.is_first(&a));
        assert!(!registry.is_first(&b));
        assert!(registry.is_last(&c));
        assert!(!registry.is_last(&b));

        let stranger = step("stranger");
        assert!(!registry.is_first(&stranger));
        assert!(!registry.is_last(&stranger));
    }
}
