//! Deterministic form engine.
//!
//! Invariant: at most one component is selected, and only the form's
//! selection state machine changes which one.
//!
//! # Public API Overview
//! - Build components ([`TextInput`], [`Picker`], [`Button`], [`Custom`],
//!   [`StaticContent`], gaps) and hand them to a [`Form`].
//! - Route taps through [`Form::handle_tap`] with any [`HitTest`]
//!   implementation; [`FormView`] is a line-based one.
//! - Observe committed values and submits with a [`FormDelegate`].
//! - Read aggregated validity with [`Form::is_valid`].

pub mod config;
pub mod logging;

pub mod components;
pub mod core;
pub mod form;
pub mod render;

/// Component kinds and the component sum type.
pub use crate::components::{
    Button, Custom, CustomOptions, FormComponent, Gap, KeyboardKind, ModeHandler, Picker,
    Placeholder, StaticContent, TextInput, TextInputOptions, Validator,
};

/// Leaf types.
pub use crate::core::error::FormError;
pub use crate::core::handle::RenderHandle;
pub use crate::core::hit_test::{resolve_component, HitTest, Point};
pub use crate::core::mode::{ExpansionMode, SelectionMode};
pub use crate::core::title::{Title, TitleStyle};

/// Form engine.
pub use crate::form::{
    form_is_valid, ComponentDelegate, Form, FormDelegate, SelectionChange, SelectionState,
    SubmitAction, TapOutcome,
};

/// Line-based presentation.
pub use crate::render::{FormView, Region};

/// Ambient configuration and logging.
pub use crate::config::EnvConfig;
pub use crate::logging::{init_logging, LoggingError};

/// Width helpers shared with the line presentation.
pub use crate::core::text::{truncate_to_width, visible_width};
