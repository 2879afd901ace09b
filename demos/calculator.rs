//! Nutrition calculator: a scripted walk through a form.
//!
//! Run with `cargo run --example calculator`. `FORM_KIT_WIDTH` sets the
//! render width and `FORM_KIT_DEBUG=1` shows engine events.

use std::collections::BTreeMap;
use std::error::Error;
use std::rc::Rc;

use form_kit::{
    init_logging, Button, EnvConfig, Form, FormComponent, FormDelegate, FormView, KeyboardKind,
    Picker, StaticContent, TextInput, TextInputOptions, Title,
};

fn dim(text: &str) -> String {
    format!("\x1b[2m{text}\x1b[22m")
}

fn is_int(text: &str) -> bool {
    text.parse::<i64>().is_ok()
}

/// Typed result, mapped explicitly from the collected field values.
struct Nutrition {
    name: String,
    calories: i64,
    fat_grams: Option<i64>,
    saturated_fat_grams: i64,
    servings: String,
}

impl Nutrition {
    fn from_values(values: &BTreeMap<String, String>, servings: String) -> Option<Self> {
        let int = |key: &str| values.get(key).and_then(|value| value.parse::<i64>().ok());
        Some(Self {
            name: values.get("name")?.clone(),
            calories: int("calories")?,
            fat_grams: int("fat"),
            saturated_fat_grams: int("saturated_fat")?,
            servings,
        })
    }
}

struct Printer;

impl FormDelegate for Printer {
    fn did_select_value(&self, component: &FormComponent) {
        println!("{}", dim(&format!("value committed on {} {}", component.kind(), component.handle())));
    }

    fn did_submit_form(&self, _component: &FormComponent) {
        println!("{}", dim("form submitted"));
    }

    fn did_update_validity(&self, is_valid: bool) {
        println!("{}", dim(&format!("form valid: {is_valid}")));
    }
}

fn number_field(title: Title, key: &str, required: bool) -> TextInput {
    let options = if required {
        TextInputOptions::required()
    } else {
        TextInputOptions::optional()
    };
    TextInput::new(
        title,
        options
            .with_keyboard(KeyboardKind::Number)
            .with_validator(is_int)
            .with_output_key(key),
    )
}

fn print_frame(view: &mut FormView, form: &Form, width: usize) {
    for line in view.render(form, width) {
        println!("|{line}|");
    }
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = EnvConfig::from_env();
    init_logging(&config)?;

    let calories = number_field(Title::major("Calories"), "calories", true);
    let fat = number_field(Title::major("Fat (g)"), "fat", false);
    let saturated_fat = number_field(Title::minor("Saturated Fat (g)"), "saturated_fat", true);
    let servings = Picker::new(
        Title::major("Servings"),
        vec![
            (0..1000).map(|n| n.to_string()).collect(),
            ["1/8", "1/4", "1/2"].map(String::from).to_vec(),
            ["servings", "oz", "gm", "cups"].map(String::from).to_vec(),
        ],
    )?;
    let name = TextInput::new(
        Title::major("Name"),
        TextInputOptions::required().with_output_key("name"),
    );
    let calculate = Button::new("Calculate");

    let form = Form::new(vec![
        StaticContent::with_text("NUTRITIONAL DETAILS").into(),
        calories.clone().into(),
        fat.into(),
        saturated_fat.clone().into(),
        FormComponent::gap(1),
        servings.clone().into(),
        name.clone().into(),
        FormComponent::gap(1),
        calculate.clone().into(),
    ]);
    let printer = Rc::new(Printer);
    form.set_delegate(&printer);

    let width = config.width;
    let mut view = FormView::new();
    print_frame(&mut view, &form, width);

    for (field, text) in [(&calories, "250"), (&saturated_fat, "3"), (&name, "Granola")] {
        view.render(&form, width);
        if let Some(point) = view.point_in(field.field_handle()) {
            form.handle_tap(&view, point);
        }
        field.end_editing(text);
    }

    view.render(&form, width);
    if let Some(point) = view.point_in(servings.handle()) {
        form.handle_tap(&view, point);
    }
    servings.settle_wheel(0, 2)?;
    servings.settle_wheel(2, 1)?;
    print_frame(&mut view, &form, width);

    calculate.set_enabled(form.is_valid());
    calculate.press();

    match Nutrition::from_values(&form.collected_values(), servings.label()) {
        Some(nutrition) => println!(
            "{}: {} kcal, fat {} g, saturated fat {} g, per {}",
            nutrition.name,
            nutrition.calories,
            nutrition
                .fat_grams
                .map_or_else(|| "-".to_string(), |grams| grams.to_string()),
            nutrition.saturated_fat_grams,
            nutrition.servings,
        ),
        None => println!("form is incomplete"),
    }
    Ok(())
}
