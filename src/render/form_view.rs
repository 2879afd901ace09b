//! Line-oriented presentation of a form.
//!
//! `FormView` stacks components vertically into terminal lines and remembers
//! where each surface landed, so it can answer hit tests for the form's tap
//! handling. Points are `(column, row)` in the last rendered frame.

use crate::components::{Button, FormComponent, Picker, TextInput};
use crate::core::handle::RenderHandle;
use crate::core::hit_test::{HitTest, Point};
use crate::core::mode::{ExpansionMode, SelectionMode};
use crate::core::text::{justify, truncate_to_width, visible_width, wrap_words};
use crate::core::title::Title;
use crate::form::Form;

/// Rectangle of cells, `[col, col + width) x [row, row + height)`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Region {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub fn contains(&self, col: usize, row: usize) -> bool {
        row >= self.row
            && row < self.row + self.height
            && col >= self.col
            && col < self.col + self.width
    }
}

#[derive(Clone, Copy, Debug)]
struct Node {
    handle: RenderHandle,
    parent: Option<RenderHandle>,
    region: Region,
    depth: usize,
}

#[derive(Debug, Default)]
pub struct FormView {
    nodes: Vec<Node>,
    height: usize,
}

impl FormView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render `form` at `width` columns, replacing the previous layout.
    pub fn render(&mut self, form: &Form, width: usize) -> Vec<String> {
        self.nodes.clear();

        let root = form.handle();
        let selected = form.selected_component().map(|component| component.handle());
        let mut lines = Vec::new();

        for component in form.components() {
            let top = lines.len();
            let is_selected = selected == Some(component.handle());
            let block = match &component {
                FormComponent::Gap(gap) => vec![" ".repeat(width); gap.height()],
                FormComponent::StaticContent(content) => render_text(content.text(), width),
                FormComponent::Custom(custom) => render_text(custom.text(), width),
                FormComponent::TextInput(input) => self.render_text_input(input, is_selected, top, width),
                FormComponent::Picker(picker) => self.render_picker(picker, is_selected, top, width),
                FormComponent::Button(button) => self.render_button(button, top, width),
            };

            self.push_node(
                component.handle(),
                Some(root),
                Region {
                    row: top,
                    col: 0,
                    width,
                    height: block.len(),
                },
                1,
            );
            lines.extend(block);
        }

        self.height = lines.len();
        self.push_node(
            root,
            None,
            Region {
                row: 0,
                col: 0,
                width,
                height: self.height,
            },
            0,
        );
        lines
    }

    /// Rows produced by the last render.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Where `handle` was drawn in the last render.
    pub fn region(&self, handle: RenderHandle) -> Option<Region> {
        self.nodes
            .iter()
            .find(|node| node.handle == handle)
            .map(|node| node.region)
    }

    /// Center of `handle`'s region, convenient for synthesizing taps.
    pub fn point_in(&self, handle: RenderHandle) -> Option<Point> {
        let region = self.region(handle)?;
        if region.width == 0 || region.height == 0 {
            return None;
        }
        Some(Point::new(
            (region.col + region.width / 2) as f32,
            (region.row + region.height / 2) as f32,
        ))
    }

    fn push_node(&mut self, handle: RenderHandle, parent: Option<RenderHandle>, region: Region, depth: usize) {
        self.nodes.push(Node {
            handle,
            parent,
            region,
            depth,
        });
    }

    fn render_text_input(&mut self, input: &TextInput, selected: bool, top: usize, width: usize) -> Vec<String> {
        let value = input.text();
        let shown = if value.is_empty() {
            input.placeholder().as_str().to_string()
        } else {
            value
        };
        let marker = match input.mode() {
            SelectionMode::Error => "!",
            _ if selected => ">",
            _ => " ",
        };
        let label = title_text(input.title(), marker);
        let line = justify(&label, &shown, width);

        let field_width = visible_width(&shown).min(width);
        self.push_node(
            input.field_handle(),
            Some(input.handle()),
            Region {
                row: top,
                col: width - field_width,
                width: field_width,
                height: 1,
            },
            2,
        );
        vec![line]
    }

    fn render_picker(&mut self, picker: &Picker, selected: bool, top: usize, width: usize) -> Vec<String> {
        let marker = if selected { ">" } else { " " };
        let label = title_text(picker.title(), marker);
        let mut lines = vec![justify(&label, &picker.label(), width)];

        if picker.expansion() == ExpansionMode::BottomShowing {
            let selected_rows = picker.selected_indices();
            for (column, (options, wheel)) in picker
                .columns()
                .iter()
                .zip(picker.wheel_handles())
                .enumerate()
            {
                let row = selected_rows.get(column).copied().unwrap_or_default();
                let value = options.get(row).map(String::as_str).unwrap_or_default();
                let wheel_line = format!("    ‹ {value} ›  {}/{}", row + 1, options.len());
                self.push_node(
                    *wheel,
                    Some(picker.handle()),
                    Region {
                        row: top + lines.len(),
                        col: 0,
                        width,
                        height: 1,
                    },
                    2,
                );
                lines.push(truncate_to_width(&wheel_line, width, "…", true));
            }
        }
        lines
    }

    fn render_button(&mut self, button: &Button, top: usize, width: usize) -> Vec<String> {
        let face = if button.is_enabled() {
            format!("[ {} ]", button.label())
        } else {
            format!("( {} )", button.label())
        };
        let face = truncate_to_width(&face, width, "…", false);
        let face_width = visible_width(&face);
        let left = (width.saturating_sub(face_width)) / 2;

        self.push_node(
            button.face_handle(),
            Some(button.handle()),
            Region {
                row: top,
                col: left,
                width: face_width,
                height: 1,
            },
            2,
        );
        let line = format!("{}{face}", " ".repeat(left));
        vec![truncate_to_width(&line, width, "", true)]
    }
}

impl HitTest for FormView {
    fn hit_test(&self, point: Point) -> Option<RenderHandle> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let (col, row) = (point.x as usize, point.y as usize);
        self.nodes
            .iter()
            .filter(|node| node.region.contains(col, row))
            .max_by_key(|node| node.depth)
            .map(|node| node.handle)
    }

    fn parent(&self, handle: RenderHandle) -> Option<RenderHandle> {
        self.nodes
            .iter()
            .find(|node| node.handle == handle)
            .and_then(|node| node.parent)
    }
}

fn title_text(title: &Title, marker: &str) -> String {
    let inset = title.style.inset().saturating_sub(1);
    format!("{marker}{}{}", " ".repeat(inset), title.text)
}

fn render_text(text: Option<&str>, width: usize) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };
    wrap_words(text, width)
        .into_iter()
        .map(|line| truncate_to_width(&line, width, "", true))
        .collect()
}
