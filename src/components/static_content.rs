//! Non-interactive components: spacing and caller-supplied content.

use crate::core::handle::RenderHandle;

/// Vertical spacer, `height` rows tall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gap {
    handle: RenderHandle,
    height: usize,
}

impl Gap {
    pub fn new(height: usize) -> Self {
        Self {
            handle: RenderHandle::next(),
            height,
        }
    }

    pub fn handle(&self) -> RenderHandle {
        self.handle
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

/// Passive content drawn by the caller under its own handle.
///
/// `text` is optional; presentations that draw the content themselves leave it
/// empty and only use the handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticContent {
    handle: RenderHandle,
    text: Option<String>,
}

impl StaticContent {
    pub fn new(handle: RenderHandle) -> Self {
        Self { handle, text: None }
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            handle: RenderHandle::next(),
            text: Some(text.into()),
        }
    }

    pub fn handle(&self) -> RenderHandle {
        self.handle
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}
