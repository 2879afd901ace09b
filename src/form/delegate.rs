//! Delegate surfaces.
//!
//! Both links are non-owning: components hold a `Weak` to the form's
//! [`ComponentDelegate`] surface, and the form holds a `Weak` to its external
//! [`FormDelegate`].

use crate::components::FormComponent;

/// What a component reports to the form that contains it.
pub trait ComponentDelegate {
    /// A value was committed (text editing ended, a wheel settled).
    fn did_select_value(&self, component: &FormComponent);

    /// A button fired.
    fn did_submit(&self, component: &FormComponent);
}

/// What the form reports to its owner.
pub trait FormDelegate {
    fn did_select_value(&self, component: &FormComponent);

    fn did_submit_form(&self, component: &FormComponent);

    /// Called after every value event with the freshly aggregated validity.
    fn did_update_validity(&self, _is_valid: bool) {}
}
