//! The button group component.

use crate::button::Button;
use crate::render::Render;

/// A `role="group"` wrapper around related buttons.
#[derive(Default)]
pub struct ButtonGroup {
    id: String,
    label: String,
    size: String,
    extra_class: String,
    buttons: Vec<Button>,
}

impl ButtonGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Accessible name, rendered as `aria-label`.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Size variant applied to the whole group (`sm`, `lg`).
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.extra_class = class.into();
        self
    }

    pub fn button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }
}

impl Render for ButtonGroup {
    fn render(&self) -> String {
        let mut class = String::from("btn-group");
        if !self.size.is_empty() {
            class.push_str(&format!(" btn-group-{}", self.size));
        }
        if !self.extra_class.is_empty() {
            class.push(' ');
            class.push_str(&self.extra_class);
        }

        let mut out = format!("<div class=\"{}\" role=\"group\"", class);
        if !self.id.is_empty() {
            out.push_str(&format!(" id=\"{}\"", self.id));
        }
        if !self.label.is_empty() {
            out.push_str(&format!(" aria-label=\"{}\"", self.label));
        }
        out.push('>');
        for button in &self.buttons {
            out.push_str(&button.render());
        }
        out.push_str("</div>");
        out
    }
}
