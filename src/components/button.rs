//! Submit button.

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::components::{DelegateSlot, FormComponent};
use crate::core::handle::RenderHandle;
use crate::form::delegate::ComponentDelegate;

struct ButtonState {
    handle: RenderHandle,
    face_handle: RenderHandle,
    label: String,
    enabled: Cell<bool>,
    delegate: DelegateSlot,
}

/// Button handle. Clones share state. Pressing is the form's submit event.
#[derive(Clone)]
pub struct Button {
    state: Rc<ButtonState>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            state: Rc::new(ButtonState {
                handle: RenderHandle::next(),
                face_handle: RenderHandle::next(),
                label: label.into(),
                enabled: Cell::new(true),
                delegate: DelegateSlot::default(),
            }),
        }
    }

    pub fn handle(&self) -> RenderHandle {
        self.state.handle
    }

    /// Handle of the pressable face nested inside the component surface.
    pub fn face_handle(&self) -> RenderHandle {
        self.state.face_handle
    }

    pub fn label(&self) -> &str {
        &self.state.label
    }

    pub fn is_enabled(&self) -> bool {
        self.state.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.state.enabled.set(enabled);
    }

    /// Fire the button. Returns `false` (and emits nothing) when disabled.
    pub fn press(&self) -> bool {
        if !self.is_enabled() {
            tracing::debug!(label = %self.state.label, "ignoring press on disabled button");
            return false;
        }
        self.state.delegate.notify_submit(FormComponent::Button(self.clone()));
        true
    }

    pub fn set_delegate(&self, delegate: Option<Weak<dyn ComponentDelegate>>) {
        self.state.delegate.set(delegate);
    }

    pub fn has_delegate(&self) -> bool {
        self.state.delegate.is_attached()
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("handle", &self.state.handle)
            .field("label", &self.state.label)
            .field("enabled", &self.state.enabled.get())
            .finish()
    }
}
