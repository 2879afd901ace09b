//! Single-active-component state machine.

use crate::components::FormComponent;
use crate::core::mode::SelectionMode;

/// At most one component is selected at any time.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SelectionState {
    #[default]
    NoneSelected,
    Selected(usize),
}

/// What a tap did to the selection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SelectionChange {
    /// The tap missed every component.
    Unchanged,
    /// The selected component was tapped again.
    Deselected { index: usize },
    Selected {
        previous: Option<usize>,
        index: usize,
    },
}

impl SelectionChange {
    /// Mode calls this change implies, in the order they must run.
    pub fn transitions(self, components: &[FormComponent]) -> Vec<(FormComponent, SelectionMode)> {
        let mut calls = Vec::new();
        let mut push = |index: usize, mode: SelectionMode| {
            if let Some(component) = components.get(index) {
                calls.push((component.clone(), mode));
            }
        };

        match self {
            SelectionChange::Unchanged => {}
            SelectionChange::Deselected { index } => push(index, SelectionMode::Unselected),
            SelectionChange::Selected { previous, index } => {
                if let Some(previous) = previous {
                    push(previous, SelectionMode::Unselected);
                }
                push(index, SelectionMode::Selected);
            }
        }
        calls
    }
}

impl SelectionState {
    pub fn index(self) -> Option<usize> {
        match self {
            SelectionState::NoneSelected => None,
            SelectionState::Selected(index) => Some(index),
        }
    }

    /// Apply a resolved tap. `None` means the tap missed.
    pub fn tap(&mut self, hit: Option<usize>) -> SelectionChange {
        let Some(index) = hit else {
            return SelectionChange::Unchanged;
        };

        match *self {
            SelectionState::Selected(current) if current == index => {
                *self = SelectionState::NoneSelected;
                SelectionChange::Deselected { index }
            }
            previous => {
                *self = SelectionState::Selected(index);
                SelectionChange::Selected {
                    previous: previous.index(),
                    index,
                }
            }
        }
    }

    /// Follow the selected component (by identity) into a replacement
    /// sequence. Returns `true` when the selection was dropped because the
    /// component is gone; no mode call is made for it.
    pub fn reconcile(&mut self, old: &[FormComponent], new: &[FormComponent]) -> bool {
        let SelectionState::Selected(index) = *self else {
            return false;
        };

        let moved = old
            .get(index)
            .and_then(|selected| new.iter().position(|component| component == selected));
        match moved {
            Some(new_index) => {
                *self = SelectionState::Selected(new_index);
                false
            }
            None => {
                *self = SelectionState::NoneSelected;
                true
            }
        }
    }
}
