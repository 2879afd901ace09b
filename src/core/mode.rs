//! Display modes.
//!
//! The selection axis and the expansion axis are independent: a picker can be
//! selected and showing its wheels at the same time, so they are separate enums.

/// Selection axis, driven by the form's selection state machine.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum SelectionMode {
    #[default]
    Unselected,
    Selected,
    Error,
}

/// Expansion axis for components with a collapsible body (pickers).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum ExpansionMode {
    #[default]
    BottomHidden,
    BottomShowing,
}

impl From<SelectionMode> for ExpansionMode {
    fn from(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Selected => ExpansionMode::BottomShowing,
            SelectionMode::Unselected | SelectionMode::Error => ExpansionMode::BottomHidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ExpansionMode, SelectionMode};

    #[test]
    fn only_selected_expands() {
        assert_eq!(ExpansionMode::from(SelectionMode::Selected), ExpansionMode::BottomShowing);
        assert_eq!(ExpansionMode::from(SelectionMode::Unselected), ExpansionMode::BottomHidden);
        assert_eq!(ExpansionMode::from(SelectionMode::Error), ExpansionMode::BottomHidden);
    }
}
