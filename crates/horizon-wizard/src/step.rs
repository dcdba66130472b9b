//! The step capability interface.
//!
//! A [`WizardStep`] is one page of the flow. The controller consumes the
//! capability set described here and never looks inside a step's content:
//! rendering the content, and deciding what `on_advance`/`on_back` mean,
//! belong entirely to the embedding application.

use std::sync::Arc;

use horizon_wizard_core::ObjectId;

/// A single step of a wizard flow.
///
/// Steps supply a display caption, an opaque content handle, and the two
/// gating hooks the controller consults before leaving the step. A hook
/// returning `false` vetoes the transition; this is the step's mechanism
/// for blocking progression (unsaved form data, a "you will lose your
/// choices" confirmation, and so on), not an error.
///
/// Hooks are expected to return synchronously and quickly. A step that
/// needs asynchronous work (server-side validation, say) should have the
/// surrounding application defer the `next()`/`back()` call until that
/// work resolves.
///
/// Step identity is pointer identity: the controller compares the
/// [`SharedStep`] allocations it was handed, never step contents.
pub trait WizardStep: Send + Sync {
    /// The caption shown for this step in progress displays.
    fn caption(&self) -> String;

    /// Opaque handle to the step's visual content, if any.
    ///
    /// The controller stores and returns this handle untouched; resolving
    /// it is the rendering collaborator's job.
    fn content(&self) -> Option<ObjectId> {
        None
    }

    /// Called before advancing past this step. Return `false` to veto.
    fn on_advance(&self) -> bool {
        true
    }

    /// Called before retreating from this step. Return `false` to veto.
    fn on_back(&self) -> bool {
        true
    }
}

/// Shared handle to a registered step.
///
/// The application owns its steps; the wizard holds cloned handles for as
/// long as a step is registered.
pub type SharedStep = Arc<dyn WizardStep>;

/// Pointer-identity comparison for step handles.
#[inline]
pub(crate) fn same_step(a: &SharedStep, b: &SharedStep) -> bool {
    Arc::ptr_eq(a, b)
}
