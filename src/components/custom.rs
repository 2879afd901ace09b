//! Extension point: caller-drawn component with caller-controlled validity.

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::components::{DelegateSlot, FormComponent};
use crate::core::handle::RenderHandle;
use crate::core::mode::SelectionMode;
use crate::form::delegate::ComponentDelegate;

/// Observer for selection-axis transitions of a custom component.
pub type ModeHandler = Box<dyn Fn(SelectionMode)>;

#[derive(Default)]
pub struct CustomOptions {
    pub text: Option<String>,
    pub on_mode: Option<ModeHandler>,
}

impl CustomOptions {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_mode_handler(mut self, handler: impl Fn(SelectionMode) + 'static) -> Self {
        self.on_mode = Some(Box::new(handler));
        self
    }
}

struct CustomState {
    handle: RenderHandle,
    valid: Cell<bool>,
    text: Option<String>,
    on_mode: Option<ModeHandler>,
    delegate: DelegateSlot,
}

#[derive(Clone)]
pub struct Custom {
    state: Rc<CustomState>,
}

impl Custom {
    pub fn new(handle: RenderHandle, is_valid: bool) -> Self {
        Self::with_options(handle, is_valid, CustomOptions::default())
    }

    pub fn with_options(handle: RenderHandle, is_valid: bool, options: CustomOptions) -> Self {
        Self {
            state: Rc::new(CustomState {
                handle,
                valid: Cell::new(is_valid),
                text: options.text,
                on_mode: options.on_mode,
                delegate: DelegateSlot::default(),
            }),
        }
    }

    pub fn handle(&self) -> RenderHandle {
        self.state.handle
    }

    pub fn text(&self) -> Option<&str> {
        self.state.text.as_deref()
    }

    pub fn is_valid(&self) -> bool {
        self.state.valid.get()
    }

    pub fn set_valid(&self, valid: bool) {
        self.state.valid.set(valid);
    }

    /// Report a committed value to the delegate.
    pub fn commit(&self) {
        self.state.delegate.notify_value(FormComponent::Custom(self.clone()));
    }

    pub fn configure_mode(&self, mode: SelectionMode) {
        if let Some(handler) = self.state.on_mode.as_ref() {
            handler(mode);
        }
    }

    pub fn set_delegate(&self, delegate: Option<Weak<dyn ComponentDelegate>>) {
        self.state.delegate.set(delegate);
    }

    pub fn has_delegate(&self) -> bool {
        self.state.delegate.is_attached()
    }
}

impl fmt::Debug for Custom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("handle", &self.state.handle)
            .field("valid", &self.state.valid.get())
            .finish()
    }
}
