//! Render handles: opaque identity tokens for visual surfaces.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HANDLE: AtomicU64 = AtomicU64::new(1);

/// Identity of "the visual surface for a component".
///
/// Semantics:
/// - Handles are unique within a process.
/// - Handles are never reused for the lifetime of the process.
/// - Equality is identity; the raw value carries no other meaning.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RenderHandle(u64);

impl RenderHandle {
    /// Allocate a fresh handle.
    pub fn next() -> Self {
        let raw = NEXT_HANDLE.fetch_add(1, Ordering::Relaxed);
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RenderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
