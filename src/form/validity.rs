use crate::components::FormComponent;

/// Form-level validity: every component is valid.
///
/// Not cached: component validity can change without telling the form, so
/// this is recomputed on each call. Pure and idempotent.
pub fn form_is_valid(components: &[FormComponent]) -> bool {
    components.iter().all(FormComponent::is_valid)
}
