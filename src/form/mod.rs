//! Form engine, selection state machine, validity aggregation, delegates.

pub mod delegate;
pub mod engine;
pub mod selection;
pub mod validity;

pub use delegate::{ComponentDelegate, FormDelegate};
pub use engine::{Form, SubmitAction, TapOutcome};
pub use selection::{SelectionChange, SelectionState};
pub use validity::form_is_valid;
