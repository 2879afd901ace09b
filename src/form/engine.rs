//! The form engine: owns the component sequence and the selection, listens to
//! its components, and forwards events to its own delegate.
//!
//! Everything runs synchronously on the caller's thread. No `RefCell` borrow
//! is held while component or delegate code runs, so callbacks may query the
//! form freely. Replacing the components from inside a callback is queued
//! until the outermost event finishes.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::components::FormComponent;
use crate::core::handle::RenderHandle;
use crate::core::hit_test::{resolve_component, HitTest, Point};
use crate::form::delegate::{ComponentDelegate, FormDelegate};
use crate::form::selection::{SelectionChange, SelectionState};
use crate::form::validity::form_is_valid;

pub type SubmitAction = Box<dyn FnMut()>;

/// Result of [`Form::handle_tap`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TapOutcome {
    pub change: SelectionChange,
    /// Newly selected surface; the presentation should scroll it into view.
    pub scroll_to: Option<RenderHandle>,
}

#[derive(Default)]
struct FormState {
    components: Vec<FormComponent>,
    selection: SelectionState,
}

struct FormShared {
    handle: RenderHandle,
    this: Weak<FormShared>,
    state: RefCell<FormState>,
    delegate: RefCell<Option<Weak<dyn FormDelegate>>>,
    submit_action: RefCell<Option<SubmitAction>>,
    dispatch_depth: Cell<usize>,
    pending_components: RefCell<Option<Vec<FormComponent>>>,
}

/// Form handle. Clones refer to the same form.
#[derive(Clone)]
pub struct Form {
    shared: Rc<FormShared>,
}

impl Form {
    pub fn new(components: Vec<FormComponent>) -> Self {
        let shared = Rc::new_cyclic(|this| FormShared {
            handle: RenderHandle::next(),
            this: this.clone(),
            state: RefCell::new(FormState::default()),
            delegate: RefCell::new(None),
            submit_action: RefCell::new(None),
            dispatch_depth: Cell::new(0),
            pending_components: RefCell::new(None),
        });
        shared.replace_components(components);
        Self { shared }
    }

    /// The form's own surface; hit resolution stops here.
    pub fn handle(&self) -> RenderHandle {
        self.shared.handle
    }

    pub fn components(&self) -> Vec<FormComponent> {
        self.shared.components()
    }

    pub fn component(&self, index: usize) -> Option<FormComponent> {
        self.shared.state.borrow().components.get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.shared.state.borrow().components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the component sequence.
    ///
    /// Removed components are detached, new ones attached, and the selection
    /// follows the selected component by identity or is cleared if it is gone.
    /// Called from inside an event callback, the replacement is applied when
    /// the event finishes.
    pub fn set_components(&self, components: Vec<FormComponent>) {
        if self.shared.dispatch_depth.get() > 0 {
            tracing::debug!(count = components.len(), "queueing component replacement");
            *self.shared.pending_components.borrow_mut() = Some(components);
            return;
        }
        self.shared.replace_components(components);
    }

    /// Aggregated validity, recomputed on every call.
    pub fn is_valid(&self) -> bool {
        self.shared.is_valid()
    }

    pub fn selection(&self) -> SelectionState {
        self.shared.state.borrow().selection
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection().index()
    }

    pub fn selected_component(&self) -> Option<FormComponent> {
        let state = self.shared.state.borrow();
        let index = state.selection.index()?;
        debug_assert!(index < state.components.len(), "selection index out of bounds");
        state.components.get(index).cloned()
    }

    /// Resolve a tap through `hit` and update the selection.
    pub fn handle_tap(&self, hit: &dyn HitTest, point: Point) -> TapOutcome {
        let _dispatch = self.shared.begin_dispatch();

        let handles: Vec<RenderHandle> = self
            .shared
            .state
            .borrow()
            .components
            .iter()
            .map(FormComponent::handle)
            .collect();
        // The hit tester is caller code and may query the form.
        let resolved = resolve_component(hit, self.shared.handle, &handles, point);

        let (change, calls, scroll_to) = {
            let mut state = self.shared.state.borrow_mut();
            let change = state.selection.tap(resolved);
            let calls = change.transitions(&state.components);
            let scroll_to = match change {
                SelectionChange::Selected { index, .. } => handles.get(index).copied(),
                _ => None,
            };
            (change, calls, scroll_to)
        };

        for (component, mode) in calls {
            component.configure_mode(mode);
        }
        tracing::debug!(?change, x = point.x, y = point.y, "tap");

        TapOutcome { change, scroll_to }
    }

    /// Register the owner. Held weakly: the form never keeps it alive.
    pub fn set_delegate<D: FormDelegate + 'static>(&self, delegate: &Rc<D>) {
        let delegate: Weak<D> = Rc::downgrade(delegate);
        self.set_delegate_weak(delegate);
    }

    /// Register an owner that is already type-erased or only weakly held.
    pub fn set_delegate_weak(&self, delegate: Weak<dyn FormDelegate>) {
        *self.shared.delegate.borrow_mut() = Some(delegate);
    }

    pub fn clear_delegate(&self) {
        *self.shared.delegate.borrow_mut() = None;
    }

    /// Action run after `did_submit_form` is forwarded.
    pub fn set_submit_action(&self, action: Option<SubmitAction>) {
        *self.shared.submit_action.borrow_mut() = action;
    }

    /// Staged `{output_key: text}` entries of every component, merged in
    /// component order (later components win on duplicate keys).
    pub fn collected_values(&self) -> BTreeMap<String, String> {
        let mut values = BTreeMap::new();
        for component in self.components() {
            values.extend(component.output());
        }
        values
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.borrow();
        f.debug_struct("Form")
            .field("handle", &self.shared.handle)
            .field("components", &state.components)
            .field("selection", &state.selection)
            .finish()
    }
}

struct DispatchGuard<'a> {
    shared: &'a FormShared,
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        let depth = self.shared.dispatch_depth.get().saturating_sub(1);
        self.shared.dispatch_depth.set(depth);
        if depth == 0 {
            let pending = self.shared.pending_components.borrow_mut().take();
            if let Some(components) = pending {
                self.shared.replace_components(components);
            }
        }
    }
}

impl FormShared {
    fn begin_dispatch(&self) -> DispatchGuard<'_> {
        self.dispatch_depth.set(self.dispatch_depth.get() + 1);
        DispatchGuard { shared: self }
    }

    fn components(&self) -> Vec<FormComponent> {
        self.state.borrow().components.clone()
    }

    fn is_valid(&self) -> bool {
        // Validators are caller code; run them without holding the state borrow.
        form_is_valid(&self.components())
    }

    fn delegate(&self) -> Option<Rc<dyn FormDelegate>> {
        self.delegate.borrow().as_ref().and_then(Weak::upgrade)
    }

    fn replace_components(&self, components: Vec<FormComponent>) {
        let (removed, added, cleared) = {
            let mut guard = self.state.borrow_mut();
            let state = &mut *guard;
            let old = std::mem::replace(&mut state.components, components);
            let cleared = state.selection.reconcile(&old, &state.components);
            let removed: Vec<FormComponent> = old
                .into_iter()
                .filter(|component| !state.components.contains(component))
                .collect();
            (removed, state.components.clone(), cleared)
        };

        for component in &removed {
            component.set_delegate(None);
        }
        let this: Weak<dyn ComponentDelegate> = self.this.clone();
        for component in &added {
            component.set_delegate(Some(this.clone()));
        }

        tracing::debug!(
            removed = removed.len(),
            count = added.len(),
            selection_cleared = cleared,
            "components replaced"
        );
    }
}

impl ComponentDelegate for FormShared {
    fn did_select_value(&self, component: &FormComponent) {
        let _dispatch = self.begin_dispatch();
        tracing::trace!(handle = %component.handle(), kind = component.kind(), "value committed");

        let Some(delegate) = self.delegate() else {
            return;
        };
        delegate.did_select_value(component);
        delegate.did_update_validity(self.is_valid());
    }

    fn did_submit(&self, component: &FormComponent) {
        let _dispatch = self.begin_dispatch();
        tracing::trace!(handle = %component.handle(), "form submitted");

        if let Some(delegate) = self.delegate() {
            delegate.did_submit_form(component);
        }

        let action = self.submit_action.borrow_mut().take();
        if let Some(mut action) = action {
            action();
            let mut slot = self.submit_action.borrow_mut();
            if slot.is_none() {
                *slot = Some(action);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Form;
    use crate::components::{Button, Custom, CustomOptions, FormComponent};
    use crate::core::handle::RenderHandle;
    use crate::core::hit_test::{HitTest, Point};
    use crate::core::mode::SelectionMode;
    use crate::form::delegate::FormDelegate;
    use crate::form::selection::{SelectionChange, SelectionState};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Hit-tests straight to whichever handle `target` holds.
    struct Direct {
        target: Cell<Option<RenderHandle>>,
    }

    impl Direct {
        fn new() -> Self {
            Self {
                target: Cell::new(None),
            }
        }

        fn at(&self, handle: Option<RenderHandle>) -> &Self {
            self.target.set(handle);
            self
        }
    }

    impl HitTest for Direct {
        fn hit_test(&self, _point: Point) -> Option<RenderHandle> {
            self.target.get()
        }

        fn parent(&self, _handle: RenderHandle) -> Option<RenderHandle> {
            None
        }
    }

    fn recording_custom(log: &Rc<RefCell<Vec<(usize, SelectionMode)>>>, id: usize) -> Custom {
        let log = Rc::clone(log);
        Custom::with_options(
            RenderHandle::next(),
            true,
            CustomOptions::default().with_mode_handler(move |mode| log.borrow_mut().push((id, mode))),
        )
    }

    #[test]
    fn switching_selection_calls_each_mode_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let first = recording_custom(&log, 0);
        let second = recording_custom(&log, 1);
        let form = Form::new(vec![first.clone().into(), second.clone().into()]);
        let hit = Direct::new();

        form.handle_tap(hit.at(Some(first.handle())), Point::default());
        log.borrow_mut().clear();

        let outcome = form.handle_tap(hit.at(Some(second.handle())), Point::default());
        assert_eq!(
            outcome.change,
            SelectionChange::Selected {
                previous: Some(0),
                index: 1
            }
        );
        assert_eq!(outcome.scroll_to, Some(second.handle()));
        assert_eq!(
            *log.borrow(),
            vec![(0, SelectionMode::Unselected), (1, SelectionMode::Selected)]
        );
    }

    /// One row per component, laid out from the form itself at hit time.
    struct RowsFromForm {
        form: Form,
    }

    impl HitTest for RowsFromForm {
        fn hit_test(&self, point: Point) -> Option<RenderHandle> {
            let _ = self.form.selected_index();
            self.form
                .components()
                .get(point.y as usize)
                .map(FormComponent::handle)
        }

        fn parent(&self, _handle: RenderHandle) -> Option<RenderHandle> {
            Some(self.form.handle())
        }
    }

    #[test]
    fn hit_tester_may_query_the_form() {
        let form = Form::new(vec![FormComponent::gap(1), FormComponent::gap(1)]);
        let hit = RowsFromForm { form: form.clone() };

        let outcome = form.handle_tap(&hit, Point::new(0.0, 1.0));
        assert_eq!(
            outcome.change,
            SelectionChange::Selected {
                previous: None,
                index: 1
            }
        );
        assert_eq!(form.selected_index(), Some(1));
    }

    #[test]
    fn type_erased_delegate_can_be_registered() {
        struct Counter {
            values: Cell<usize>,
        }
        impl FormDelegate for Counter {
            fn did_select_value(&self, _component: &FormComponent) {
                self.values.set(self.values.get() + 1);
            }
            fn did_submit_form(&self, _component: &FormComponent) {}
        }

        let custom = Custom::new(RenderHandle::next(), true);
        let form = Form::new(vec![custom.clone().into()]);
        let counter = Rc::new(Counter {
            values: Cell::new(0),
        });
        let erased: Rc<dyn FormDelegate> = counter.clone();
        form.set_delegate_weak(Rc::downgrade(&erased));

        custom.commit();
        assert_eq!(counter.values.get(), 1);
    }

    #[test]
    fn submit_runs_action_and_keeps_it() {
        let button = Button::new("Go");
        let form = Form::new(vec![button.clone().into()]);
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        form.set_submit_action(Some(Box::new(move || counter.set(counter.get() + 1))));

        assert!(button.press());
        assert!(button.press());
        assert_eq!(runs.get(), 2);
    }

    struct Replacer {
        form: RefCell<Option<Form>>,
        seen_len_during_callback: Cell<Option<usize>>,
    }

    impl FormDelegate for Replacer {
        fn did_select_value(&self, _component: &FormComponent) {
            if let Some(form) = self.form.borrow().as_ref() {
                form.set_components(vec![FormComponent::gap(1)]);
                self.seen_len_during_callback.set(Some(form.len()));
            }
        }

        fn did_submit_form(&self, _component: &FormComponent) {}
    }

    #[test]
    fn replacement_inside_callback_is_deferred() {
        let custom = Custom::new(RenderHandle::next(), true);
        let form = Form::new(vec![custom.clone().into(), FormComponent::gap(2)]);
        let replacer = Rc::new(Replacer {
            form: RefCell::new(Some(form.clone())),
            seen_len_during_callback: Cell::new(None),
        });
        form.set_delegate(&replacer);

        custom.commit();

        assert_eq!(replacer.seen_len_during_callback.get(), Some(2));
        assert_eq!(form.len(), 1);
        assert!(!custom.has_delegate());
        replacer.form.borrow_mut().take();
    }

    #[test]
    fn dropped_delegate_is_not_called() {
        struct Panics;
        impl FormDelegate for Panics {
            fn did_select_value(&self, _component: &FormComponent) {
                panic!("delegate should be gone");
            }
            fn did_submit_form(&self, _component: &FormComponent) {
                panic!("delegate should be gone");
            }
        }

        let custom = Custom::new(RenderHandle::next(), true);
        let form = Form::new(vec![custom.clone().into()]);
        let delegate = Rc::new(Panics);
        form.set_delegate(&delegate);
        drop(delegate);

        custom.commit();
        assert_eq!(form.selection(), SelectionState::NoneSelected);
    }
}
