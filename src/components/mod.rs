//! Form components.
//!
//! The component set is closed, so it is a sum type: [`FormComponent`] has one
//! case per kind and dispatches validity, mode configuration, handle access and
//! delegate hookup with a single match. Interactive kinds are cheap-clone
//! handles over shared state, so the caller can keep a handle to drive edits
//! while the form owns the sequence.

pub mod button;
pub mod custom;
pub mod picker;
pub mod static_content;
pub mod text_input;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::core::handle::RenderHandle;
use crate::core::mode::SelectionMode;
use crate::form::delegate::ComponentDelegate;

pub use button::Button;
pub use custom::{Custom, CustomOptions, ModeHandler};
pub use picker::Picker;
pub use static_content::{Gap, StaticContent};
pub use text_input::{KeyboardKind, Placeholder, TextInput, TextInputOptions, Validator};

/// One form field or decorative element.
#[derive(Clone)]
pub enum FormComponent {
    Gap(Gap),
    StaticContent(StaticContent),
    TextInput(TextInput),
    Picker(Picker),
    Button(Button),
    Custom(Custom),
}

impl FormComponent {
    /// Spacer of `height` rows.
    pub fn gap(height: usize) -> Self {
        FormComponent::Gap(Gap::new(height))
    }

    pub fn handle(&self) -> RenderHandle {
        match self {
            FormComponent::Gap(gap) => gap.handle(),
            FormComponent::StaticContent(content) => content.handle(),
            FormComponent::TextInput(input) => input.handle(),
            FormComponent::Picker(picker) => picker.handle(),
            FormComponent::Button(button) => button.handle(),
            FormComponent::Custom(custom) => custom.handle(),
        }
    }

    /// Pure; safe to call on every keystroke.
    pub fn is_valid(&self) -> bool {
        match self {
            FormComponent::Gap(_)
            | FormComponent::StaticContent(_)
            | FormComponent::Picker(_)
            | FormComponent::Button(_) => true,
            FormComponent::TextInput(input) => input.is_valid(),
            FormComponent::Custom(custom) => custom.is_valid(),
        }
    }

    /// Apply a selection-axis transition. No-op for kinds without that axis.
    pub fn configure_mode(&self, mode: SelectionMode) {
        match self {
            FormComponent::Gap(_) | FormComponent::StaticContent(_) | FormComponent::Button(_) => {}
            FormComponent::TextInput(input) => input.configure_mode(mode),
            FormComponent::Picker(picker) => picker.configure_mode(mode),
            FormComponent::Custom(custom) => custom.configure_mode(mode),
        }
    }

    pub fn set_delegate(&self, delegate: Option<Weak<dyn ComponentDelegate>>) {
        match self {
            FormComponent::Gap(_) | FormComponent::StaticContent(_) => {}
            FormComponent::TextInput(input) => input.set_delegate(delegate),
            FormComponent::Picker(picker) => picker.set_delegate(delegate),
            FormComponent::Button(button) => button.set_delegate(delegate),
            FormComponent::Custom(custom) => custom.set_delegate(delegate),
        }
    }

    /// Values staged for collection; empty for everything but keyed text inputs.
    pub fn output(&self) -> BTreeMap<String, String> {
        match self {
            FormComponent::TextInput(input) => input.output(),
            _ => BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FormComponent::Gap(_) => "gap",
            FormComponent::StaticContent(_) => "static",
            FormComponent::TextInput(_) => "text",
            FormComponent::Picker(_) => "picker",
            FormComponent::Button(_) => "button",
            FormComponent::Custom(_) => "custom",
        }
    }

    pub fn as_text_input(&self) -> Option<&TextInput> {
        match self {
            FormComponent::TextInput(input) => Some(input),
            _ => None,
        }
    }

    pub fn as_picker(&self) -> Option<&Picker> {
        match self {
            FormComponent::Picker(picker) => Some(picker),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            FormComponent::Button(button) => Some(button),
            _ => None,
        }
    }
}

/// Identity comparison: two components are equal when they share a render handle.
impl PartialEq for FormComponent {
    fn eq(&self, other: &Self) -> bool {
        self.handle() == other.handle()
    }
}

impl Eq for FormComponent {}

impl fmt::Debug for FormComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormComponent")
            .field("kind", &self.kind())
            .field("handle", &self.handle())
            .field("valid", &self.is_valid())
            .finish()
    }
}

impl From<Gap> for FormComponent {
    fn from(gap: Gap) -> Self {
        FormComponent::Gap(gap)
    }
}

impl From<StaticContent> for FormComponent {
    fn from(content: StaticContent) -> Self {
        FormComponent::StaticContent(content)
    }
}

impl From<TextInput> for FormComponent {
    fn from(input: TextInput) -> Self {
        FormComponent::TextInput(input)
    }
}

impl From<Picker> for FormComponent {
    fn from(picker: Picker) -> Self {
        FormComponent::Picker(picker)
    }
}

impl From<Button> for FormComponent {
    fn from(button: Button) -> Self {
        FormComponent::Button(button)
    }
}

impl From<Custom> for FormComponent {
    fn from(custom: Custom) -> Self {
        FormComponent::Custom(custom)
    }
}

/// Non-owning back-reference from a component to whoever listens to it.
#[derive(Default)]
pub(crate) struct DelegateSlot {
    delegate: RefCell<Option<Weak<dyn ComponentDelegate>>>,
}

impl DelegateSlot {
    pub(crate) fn set(&self, delegate: Option<Weak<dyn ComponentDelegate>>) {
        *self.delegate.borrow_mut() = delegate;
    }

    /// Upgraded delegate; the slot borrow is released before returning.
    pub(crate) fn get(&self) -> Option<Rc<dyn ComponentDelegate>> {
        self.delegate.borrow().as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.get().is_some()
    }

    pub(crate) fn notify_value(&self, component: FormComponent) {
        if let Some(delegate) = self.get() {
            delegate.did_select_value(&component);
        }
    }

    pub(crate) fn notify_submit(&self, component: FormComponent) {
        if let Some(delegate) = self.get() {
            delegate.did_submit(&component);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Button, Custom, FormComponent, Picker, StaticContent, TextInput, TextInputOptions};
    use crate::core::handle::RenderHandle;
    use crate::core::mode::{ExpansionMode, SelectionMode};
    use crate::core::title::Title;

    #[test]
    fn passive_kinds_are_always_valid() {
        let gap = FormComponent::gap(2);
        let content = FormComponent::from(StaticContent::new(RenderHandle::next()));
        let button = FormComponent::from(Button::new("Go"));
        let picker = Picker::new(Title::major("Servings"), vec![vec!["1".to_string()]])
            .map(FormComponent::from);
        assert!(gap.is_valid());
        assert!(content.is_valid());
        assert!(button.is_valid());
        assert!(picker.map(|picker| picker.is_valid()).unwrap_or(false));
    }

    #[test]
    fn custom_validity_is_caller_controlled() {
        let custom = Custom::new(RenderHandle::next(), false);
        let component = FormComponent::from(custom.clone());
        assert!(!component.is_valid());
        custom.set_valid(true);
        assert!(component.is_valid());
    }

    #[test]
    fn equality_is_identity() {
        let input = TextInput::new(Title::major("Name"), TextInputOptions::default());
        let a = FormComponent::from(input.clone());
        let b = FormComponent::from(input);
        let other = FormComponent::from(TextInput::new(
            Title::major("Name"),
            TextInputOptions::default(),
        ));
        assert_eq!(a, b);
        assert_ne!(a, other);
    }

    #[test]
    fn configure_mode_dispatches_per_axis() {
        let input = TextInput::new(Title::major("Name"), TextInputOptions::default());
        let picker = match Picker::new(Title::major("Unit"), vec![vec!["oz".to_string()]]) {
            Ok(picker) => picker,
            Err(err) => panic!("picker: {err}"),
        };
        let gap = FormComponent::gap(1);

        FormComponent::from(input.clone()).configure_mode(SelectionMode::Selected);
        FormComponent::from(picker.clone()).configure_mode(SelectionMode::Selected);
        gap.configure_mode(SelectionMode::Selected);

        assert!(input.is_focused());
        assert_eq!(picker.expansion(), ExpansionMode::BottomShowing);
    }

    #[test]
    fn downcasts_match_only_their_kind() {
        let input = FormComponent::from(TextInput::new(
            Title::major("Name"),
            TextInputOptions::default().with_output_key("name"),
        ));
        let button = FormComponent::from(Button::new("Go"));
        let picker = match Picker::new(Title::major("Unit"), vec![vec!["oz".to_string()]]) {
            Ok(picker) => FormComponent::from(picker),
            Err(err) => panic!("picker: {err}"),
        };

        assert_eq!(
            input.as_text_input().and_then(TextInput::output_key),
            Some("name")
        );
        assert!(input.as_picker().is_none());
        assert_eq!(button.as_button().map(Button::label), Some("Go"));
        assert!(button.as_text_input().is_none());
        assert_eq!(
            picker.as_picker().map(Picker::selected_values),
            Some(vec!["oz".to_string()])
        );
        assert!(picker.as_button().is_none());
    }
}
