use std::cell::RefCell;
use std::rc::Rc;

use form_kit::{
    Custom, CustomOptions, ExpansionMode, Form, FormComponent, FormView, Picker, Point, RenderHandle,
    SelectionChange, SelectionMode, SelectionState, TextInput, TextInputOptions, Title,
};
use pretty_assertions::assert_eq;

const WIDTH: usize = 40;

type ModeLog = Rc<RefCell<Vec<(&'static str, SelectionMode)>>>;

fn tracked(log: &ModeLog, name: &'static str) -> Custom {
    let log = Rc::clone(log);
    Custom::with_options(
        RenderHandle::next(),
        true,
        CustomOptions::default()
            .with_text(name)
            .with_mode_handler(move |mode| log.borrow_mut().push((name, mode))),
    )
}

fn tap(form: &Form, view: &mut FormView, handle: RenderHandle) -> SelectionChange {
    view.render(form, WIDTH);
    let Some(point) = view.point_in(handle) else {
        panic!("{handle} was not rendered");
    };
    form.handle_tap(&*view, point).change
}

#[test]
fn tap_twice_returns_to_none_selected() {
    let log = ModeLog::default();
    let a = tracked(&log, "a");
    let form = Form::new(vec![a.clone().into()]);
    let mut view = FormView::new();

    assert_eq!(
        tap(&form, &mut view, a.handle()),
        SelectionChange::Selected {
            previous: None,
            index: 0
        }
    );
    assert_eq!(form.selected_component(), Some(FormComponent::from(a.clone())));

    assert_eq!(tap(&form, &mut view, a.handle()), SelectionChange::Deselected { index: 0 });
    assert_eq!(form.selection(), SelectionState::NoneSelected);
    assert_eq!(
        *log.borrow(),
        vec![("a", SelectionMode::Selected), ("a", SelectionMode::Unselected)]
    );
}

#[test]
fn moving_selection_calls_each_side_exactly_once() {
    let log = ModeLog::default();
    let a = tracked(&log, "a");
    let b = tracked(&log, "b");
    let form = Form::new(vec![a.clone().into(), FormComponent::gap(1), b.clone().into()]);
    let mut view = FormView::new();

    tap(&form, &mut view, a.handle());
    log.borrow_mut().clear();

    tap(&form, &mut view, b.handle());
    assert_eq!(
        *log.borrow(),
        vec![("a", SelectionMode::Unselected), ("b", SelectionMode::Selected)]
    );
    assert_eq!(form.selected_index(), Some(2));
}

#[test]
fn tap_outside_components_keeps_selection() {
    let log = ModeLog::default();
    let a = tracked(&log, "a");
    let form = Form::new(vec![a.clone().into()]);
    let mut view = FormView::new();

    tap(&form, &mut view, a.handle());
    log.borrow_mut().clear();

    let below = Point::new(0.0, (view.height() + 3) as f32);
    let outcome = form.handle_tap(&view, below);
    assert_eq!(outcome.change, SelectionChange::Unchanged);
    assert_eq!(outcome.scroll_to, None);
    assert_eq!(form.selected_index(), Some(0));
    assert!(log.borrow().is_empty());
}

#[test]
fn tapping_a_gap_selects_the_gap() {
    let gap = FormComponent::gap(2);
    let form = Form::new(vec![gap.clone()]);
    let mut view = FormView::new();

    tap(&form, &mut view, gap.handle());
    assert_eq!(form.selected_component(), Some(gap));
}

#[test]
fn nested_field_tap_selects_text_input() {
    let name = TextInput::new(Title::major("Name"), TextInputOptions::required());
    let form = Form::new(vec![name.clone().into()]);
    let mut view = FormView::new();
    view.render(&form, WIDTH);

    let Some(field) = view.point_in(name.field_handle()) else {
        panic!("field not rendered");
    };
    let outcome = form.handle_tap(&view, field);
    assert_eq!(outcome.scroll_to, Some(name.handle()));
    assert!(name.is_focused());
}

#[test]
fn picker_wheel_tap_resolves_to_picker() {
    let columns = vec![
        vec!["1".to_string(), "2".to_string()],
        vec!["oz".to_string(), "gm".to_string()],
    ];
    let picker = match Picker::new(Title::major("Servings"), columns) {
        Ok(picker) => picker,
        Err(err) => panic!("picker: {err}"),
    };
    let form = Form::new(vec![picker.clone().into()]);
    let mut view = FormView::new();

    tap(&form, &mut view, picker.handle());
    assert_eq!(picker.expansion(), ExpansionMode::BottomShowing);

    view.render(&form, WIDTH);
    let wheel = picker.wheel_handles()[1];
    assert_eq!(tap(&form, &mut view, wheel), SelectionChange::Deselected { index: 0 });
    assert_eq!(picker.expansion(), ExpansionMode::BottomHidden);
}

#[test]
fn replacing_components_drops_missing_selection_silently() {
    let log = ModeLog::default();
    let a = tracked(&log, "a");
    let b = tracked(&log, "b");
    let form = Form::new(vec![a.clone().into(), b.clone().into()]);
    let mut view = FormView::new();

    tap(&form, &mut view, a.handle());
    log.borrow_mut().clear();

    form.set_components(vec![b.clone().into()]);
    assert_eq!(form.selected_component(), None);
    assert!(log.borrow().is_empty(), "no mode call for a removed component");
}

#[test]
fn replacing_components_keeps_surviving_selection() {
    let log = ModeLog::default();
    let a = tracked(&log, "a");
    let b = tracked(&log, "b");
    let form = Form::new(vec![a.clone().into(), b.clone().into()]);
    let mut view = FormView::new();

    tap(&form, &mut view, b.handle());
    form.set_components(vec![b.clone().into(), FormComponent::gap(1)]);

    assert_eq!(form.selected_index(), Some(0));
    assert_eq!(form.selected_component(), Some(FormComponent::from(b)));
}
