//! # Horizon Wizard
//!
//! A multi-step wizard navigation controller, rendering-agnostic by
//! design: it owns the ordered step sequence, the gated navigation state
//! machine, deep-link address synchronization, and the progress-event
//! protocol, and leaves drawing entirely to the embedding UI.
//!
//! ## Architecture
//!
//! - [`Wizard`]: the controller — step management, gated transitions,
//!   finish/cancel lifecycle, address-driven navigation
//! - [`WizardStep`]: the step contract — caption, optional content
//!   handle, and the `on_advance`/`on_back` gating hooks
//! - [`WizardProgressListener`]: aggregate observer over all four event
//!   kinds, or connect to the individual [`Signal`]s directly
//! - [`AddressBar`]: the external deep-link collaborator (URL fragment,
//!   router, history stack)
//!
//! Events are delivered through the synchronous [`Signal`] type from
//! `horizon-wizard-core`.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use horizon_wizard::{Wizard, WizardStep};
//!
//! struct Details;
//!
//! impl WizardStep for Details {
//!     fn caption(&self) -> String {
//!         "Details".to_string()
//!     }
//!
//!     fn on_advance(&self) -> bool {
//!         // Validate user input here.
//!         true
//!     }
//! }
//!
//! let mut wizard = Wizard::new();
//! wizard.step_activated.connect(|step| {
//!     println!("now on: {}", step.caption());
//! });
//!
//! wizard.add_step(Arc::new(Details)).unwrap();
//! assert!(wizard.button_state().finish_enabled);
//! ```

pub mod address;
pub mod error;
pub mod event;
pub mod registry;
pub mod state;
pub mod step;
pub mod wizard;

pub use address::AddressBar;
pub use error::{Error, Result};
pub use event::{ListenerRegistration, WizardProgressListener};
pub use state::WizardPhase;
pub use step::{SharedStep, WizardStep};
pub use wizard::{ButtonState, Wizard};

pub use horizon_wizard_core::{ConnectionGuard, ConnectionId, ObjectId, Signal};
