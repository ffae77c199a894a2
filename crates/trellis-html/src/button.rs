//! The button element.

use crate::render::Render;

/// A `<button>` with Bootstrap-style variant classes.
pub struct Button {
    id: String,
    label: String,
    color: String,
    outline: bool,
    size: String,
    block: bool,
    disabled: bool,
    active: bool,
    extra_class: String,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            label: label.into(),
            color: "primary".to_string(),
            outline: false,
            size: "md".to_string(),
            block: false,
            disabled: false,
            active: false,
            extra_class: String::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Color variant (`primary`, `secondary`, `danger`, …).
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Use the outline variant of the color.
    pub fn outline(mut self) -> Self {
        self.outline = true;
        self
    }

    /// Size variant (`sm`, `md`, `lg`).
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Stretch to the container's full width.
    pub fn block(mut self) -> Self {
        self.block = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Render in the toggled-on state.
    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    /// Extra classes appended after the variant classes.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.extra_class = class.into();
        self
    }
}

impl Render for Button {
    fn render(&self) -> String {
        let mut class = if self.outline {
            format!("btn btn-outline-{}", self.color)
        } else {
            format!("btn btn-{}", self.color)
        };
        class.push_str(&format!(" btn-{}", self.size));
        if self.block {
            class.push_str(" btn-block");
        }
        if self.disabled {
            class.push_str(" disabled");
        }
        if self.active {
            class.push_str(" active");
        }
        if !self.extra_class.is_empty() {
            class.push(' ');
            class.push_str(&self.extra_class);
        }

        let id = if self.id.is_empty() {
            String::new()
        } else {
            format!(" id=\"{}\"", self.id)
        };
        format!(
            "<button type=\"button\"{} class=\"{}\">{}</button>",
            id, class, self.label
        )
    }
}
