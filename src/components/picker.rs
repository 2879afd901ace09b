//! Multi-wheel picker.
//!
//! Every column starts at row 0, so a picker always has a well-defined
//! selection and is never invalid.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::components::{DelegateSlot, FormComponent};
use crate::core::error::FormError;
use crate::core::handle::RenderHandle;
use crate::core::mode::{ExpansionMode, SelectionMode};
use crate::core::title::Title;
use crate::form::delegate::ComponentDelegate;

/// Row every column is positioned on after construction.
pub const DEFAULT_ROW: usize = 0;

struct PickerState {
    handle: RenderHandle,
    wheel_handles: Vec<RenderHandle>,
    title: Title,
    columns: Vec<Vec<String>>,
    selected: RefCell<Vec<usize>>,
    expansion: Cell<ExpansionMode>,
    delegate: DelegateSlot,
}

/// Picker handle. Clones share state.
#[derive(Clone)]
pub struct Picker {
    state: Rc<PickerState>,
}

impl Picker {
    /// Fails with [`FormError::EmptyColumn`] if any column has no options.
    pub fn new(title: impl Into<Title>, columns: Vec<Vec<String>>) -> Result<Self, FormError> {
        if let Some(column) = columns.iter().position(Vec::is_empty) {
            return Err(FormError::EmptyColumn { column });
        }

        Ok(Self {
            state: Rc::new(PickerState {
                handle: RenderHandle::next(),
                wheel_handles: columns.iter().map(|_| RenderHandle::next()).collect(),
                title: title.into(),
                selected: RefCell::new(vec![DEFAULT_ROW; columns.len()]),
                columns,
                expansion: Cell::new(ExpansionMode::BottomHidden),
                delegate: DelegateSlot::default(),
            }),
        })
    }

    pub fn handle(&self) -> RenderHandle {
        self.state.handle
    }

    /// Handles of the wheels, one per column, nested inside the component surface.
    pub fn wheel_handles(&self) -> &[RenderHandle] {
        &self.state.wheel_handles
    }

    pub fn title(&self) -> &Title {
        &self.state.title
    }

    pub fn columns(&self) -> &[Vec<String>] {
        &self.state.columns
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.state.selected.borrow().clone()
    }

    /// Selected option of every column, in column order.
    pub fn selected_values(&self) -> Vec<String> {
        let selected = self.state.selected.borrow();
        self.state
            .columns
            .iter()
            .zip(selected.iter())
            .filter_map(|(options, row)| options.get(*row).cloned())
            .collect()
    }

    /// Summary shown next to the title: selected values joined by spaces.
    pub fn label(&self) -> String {
        self.selected_values().join(" ")
    }

    /// Select one value per column. All-or-nothing: on error no column moves.
    ///
    /// Programmatic; the delegate is not notified.
    pub fn set_selected_values<S: AsRef<str>>(&self, values: &[S]) -> Result<(), FormError> {
        if values.len() != self.state.columns.len() {
            return Err(FormError::ColumnCountMismatch {
                expected: self.state.columns.len(),
                found: values.len(),
            });
        }

        let mut rows = Vec::with_capacity(values.len());
        for (column, (options, value)) in self.state.columns.iter().zip(values).enumerate() {
            let value = value.as_ref();
            let Some(row) = options.iter().position(|option| option == value) else {
                return Err(FormError::ValueMismatch {
                    column,
                    value: value.to_string(),
                });
            };
            rows.push(row);
        }

        *self.state.selected.borrow_mut() = rows;
        Ok(())
    }

    /// A wheel settled on `row`: record it and notify the delegate.
    pub fn settle_wheel(&self, column: usize, row: usize) -> Result<(), FormError> {
        let Some(options) = self.state.columns.get(column) else {
            return Err(FormError::ColumnOutOfBounds { column });
        };
        if row >= options.len() {
            return Err(FormError::RowOutOfBounds { column, row });
        }

        self.state.selected.borrow_mut()[column] = row;
        self.state.delegate.notify_value(FormComponent::Picker(self.clone()));
        Ok(())
    }

    pub fn expansion(&self) -> ExpansionMode {
        self.state.expansion.get()
    }

    /// Selected shows the wheels; anything else collapses them.
    pub fn configure_mode(&self, mode: SelectionMode) {
        let new = ExpansionMode::from(mode);
        let old = self.state.expansion.replace(new);
        if old != new {
            tracing::trace!(handle = %self.state.handle, ?old, ?new, "picker expansion");
        }
    }

    pub fn set_delegate(&self, delegate: Option<Weak<dyn ComponentDelegate>>) {
        self.state.delegate.set(delegate);
    }

    pub fn has_delegate(&self) -> bool {
        self.state.delegate.is_attached()
    }
}

impl fmt::Debug for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("handle", &self.state.handle)
            .field("title", &self.state.title.text)
            .field("selected", &*self.state.selected.borrow())
            .field("expansion", &self.state.expansion.get())
            .finish()
    }
}
