//! Single-line text field.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::{Rc, Weak};

use crate::components::{DelegateSlot, FormComponent};
use crate::core::handle::RenderHandle;
use crate::core::mode::SelectionMode;
use crate::core::title::Title;
use crate::form::delegate::ComponentDelegate;

/// Pure predicate over the current text.
pub type Validator = Rc<dyn Fn(&str) -> bool>;

/// Whether the field must be filled, and what to show while it is empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Placeholder {
    Required,
    #[default]
    Optional,
    /// Custom hint text; the field is treated as required.
    Custom(String),
}

impl Placeholder {
    pub fn as_str(&self) -> &str {
        match self {
            Placeholder::Required => "required",
            Placeholder::Optional => "optional",
            Placeholder::Custom(text) => text,
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Placeholder::Optional)
    }
}

/// Keyboard the presentation layer should offer while the field is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyboardKind {
    #[default]
    Text,
    Number,
    Decimal,
}

#[derive(Clone, Default)]
pub struct TextInputOptions {
    pub placeholder: Placeholder,
    pub keyboard: KeyboardKind,
    pub validator: Option<Validator>,
    /// Field name under which committed text is staged for collection.
    pub output_key: Option<String>,
}

impl TextInputOptions {
    pub fn required() -> Self {
        Self {
            placeholder: Placeholder::Required,
            ..Self::default()
        }
    }

    pub fn optional() -> Self {
        Self::default()
    }

    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn with_keyboard(mut self, keyboard: KeyboardKind) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn with_validator(mut self, validator: impl Fn(&str) -> bool + 'static) -> Self {
        self.validator = Some(Rc::new(validator));
        self
    }

    pub fn with_output_key(mut self, key: impl Into<String>) -> Self {
        self.output_key = Some(key.into());
        self
    }
}

struct TextInputState {
    handle: RenderHandle,
    field_handle: RenderHandle,
    title: Title,
    placeholder: RefCell<Placeholder>,
    keyboard: Cell<KeyboardKind>,
    validator: Option<Validator>,
    output_key: Option<String>,
    text: RefCell<String>,
    output: RefCell<BTreeMap<String, String>>,
    mode: Cell<SelectionMode>,
    delegate: DelegateSlot,
}

/// Text field handle. Clones share state.
#[derive(Clone)]
pub struct TextInput {
    state: Rc<TextInputState>,
}

impl TextInput {
    pub fn new(title: impl Into<Title>, options: TextInputOptions) -> Self {
        Self {
            state: Rc::new(TextInputState {
                handle: RenderHandle::next(),
                field_handle: RenderHandle::next(),
                title: title.into(),
                placeholder: RefCell::new(options.placeholder),
                keyboard: Cell::new(options.keyboard),
                validator: options.validator,
                output_key: options.output_key,
                text: RefCell::new(String::new()),
                output: RefCell::new(BTreeMap::new()),
                mode: Cell::new(SelectionMode::Unselected),
                delegate: DelegateSlot::default(),
            }),
        }
    }

    pub fn handle(&self) -> RenderHandle {
        self.state.handle
    }

    /// Handle of the editable field nested inside the component surface.
    pub fn field_handle(&self) -> RenderHandle {
        self.state.field_handle
    }

    pub fn title(&self) -> &Title {
        &self.state.title
    }

    pub fn placeholder(&self) -> Placeholder {
        self.state.placeholder.borrow().clone()
    }

    pub fn set_placeholder(&self, placeholder: Placeholder) {
        *self.state.placeholder.borrow_mut() = placeholder;
    }

    pub fn keyboard(&self) -> KeyboardKind {
        self.state.keyboard.get()
    }

    pub fn set_keyboard(&self, keyboard: KeyboardKind) {
        self.state.keyboard.set(keyboard);
    }

    pub fn output_key(&self) -> Option<&str> {
        self.state.output_key.as_deref()
    }

    pub fn text(&self) -> String {
        self.state.text.borrow().clone()
    }

    /// Replace the text without committing it: nothing is staged and no
    /// delegate is notified.
    pub fn set_text(&self, text: impl Into<String>) {
        *self.state.text.borrow_mut() = text.into();
    }

    /// Empty text is valid only for optional fields; anything else is checked
    /// by the validator, if there is one.
    pub fn is_valid(&self) -> bool {
        let text = self.state.text.borrow();
        if text.is_empty() {
            return !self.state.placeholder.borrow().is_required();
        }
        match self.state.validator.as_ref() {
            Some(validator) => run_validator(validator, &text),
            None => true,
        }
    }

    /// Text editing ended: commit `text`, stage it under the output key, and
    /// notify the delegate.
    pub fn end_editing(&self, text: impl Into<String>) {
        let text = text.into();
        if let Some(key) = self.state.output_key.as_ref() {
            *self.state.output.borrow_mut() = BTreeMap::from([(key.clone(), text.clone())]);
        }
        *self.state.text.borrow_mut() = text;
        self.state.delegate.notify_value(FormComponent::TextInput(self.clone()));
    }

    /// Last committed `{output_key: text}`; empty before the first commit or
    /// when the field has no key.
    pub fn output(&self) -> BTreeMap<String, String> {
        self.state.output.borrow().clone()
    }

    pub fn mode(&self) -> SelectionMode {
        self.state.mode.get()
    }

    /// Whether the field currently owns keyboard input.
    pub fn is_focused(&self) -> bool {
        self.mode() == SelectionMode::Selected
    }

    pub fn configure_mode(&self, mode: SelectionMode) {
        let old = self.state.mode.replace(mode);
        if old != mode {
            tracing::trace!(handle = %self.state.handle, ?old, new = ?mode, "text input mode");
        }
    }

    pub fn set_delegate(&self, delegate: Option<Weak<dyn ComponentDelegate>>) {
        self.state.delegate.set(delegate);
    }

    pub fn has_delegate(&self) -> bool {
        self.state.delegate.is_attached()
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("handle", &self.state.handle)
            .field("title", &self.state.title.text)
            .field("text", &*self.state.text.borrow())
            .field("mode", &self.state.mode.get())
            .finish()
    }
}

fn run_validator(validator: &Validator, text: &str) -> bool {
    match catch_unwind(AssertUnwindSafe(|| validator(text))) {
        Ok(valid) => valid,
        Err(_) => {
            tracing::warn!(text, "validator panicked; treating value as invalid");
            false
        }
    }
}
