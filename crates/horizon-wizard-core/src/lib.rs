//! Core systems for Horizon Wizard.
//!
//! This crate provides the foundational pieces the wizard controller is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous notification dispatch
//! - **Opaque Object Handles**: Stable [`ObjectId`] handles for content the
//!   controller never inspects
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_wizard_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod object;
pub mod signal;

pub use object::ObjectId;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
