//! The text input element.

use crate::render::Render;

/// Input types the builder accepts; anything else falls back to `text`.
const INPUT_TYPES: &[&str] = &[
    "text",
    "email",
    "password",
    "number",
    "tel",
    "url",
    "file",
    "color",
    "date",
    "time",
    "datetime-local",
];

/// A labelled `<input class="form-control">`, optionally with a
/// floating label, a datalist, and help text.
pub struct TextInput {
    name: String,
    id: String,
    label: String,
    value: String,
    placeholder: String,
    help_text: String,
    input_type: String,
    floating: bool,
    datalist: Vec<String>,
}

impl TextInput {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: format!("{}-input", name),
            name,
            label: String::new(),
            value: String::new(),
            placeholder: String::new(),
            help_text: String::new(),
            input_type: "text".to_string(),
            floating: false,
            datalist: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = help_text.into();
        self
    }

    /// Set the input type; unrecognized types fall back to `text`.
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        let input_type = input_type.into();
        self.input_type = if INPUT_TYPES.contains(&input_type.as_str()) {
            input_type
        } else {
            "text".to_string()
        };
        self
    }

    /// Use the floating-label variant.
    pub fn floating(mut self) -> Self {
        self.floating = true;
        self
    }

    /// Attach a datalist of suggested values.
    pub fn datalist(mut self, options: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.datalist = options.into_iter().map(Into::into).collect();
        self
    }

    fn label_html(&self) -> String {
        format!(
            "<label for=\"{}\" class=\"form-label\">{}</label>",
            self.id, self.label
        )
    }

    fn input_html(&self, list_attr: &str) -> String {
        format!(
            "<input type=\"{}\" class=\"form-control\" id=\"{}\" name=\"{}\" \
             value=\"{}\" placeholder=\"{}\"{}>",
            self.input_type, self.id, self.name, self.value, self.placeholder, list_attr
        )
    }
}

impl Render for TextInput {
    fn render(&self) -> String {
        let help = if self.help_text.is_empty() {
            String::new()
        } else {
            format!("<div class=\"form-text\">{}</div>", self.help_text)
        };

        if !self.datalist.is_empty() {
            let list_id = format!("{}-datalist", self.id);
            let mut datalist = format!("<datalist id=\"{}\">", list_id);
            for option in &self.datalist {
                datalist.push_str(&format!("<option value=\"{}\">", option));
            }
            datalist.push_str("</datalist>");
            let list_attr = format!(" list=\"{}\"", list_id);
            return format!(
                "{}{}{}{}",
                self.label_html(),
                self.input_html(&list_attr),
                datalist,
                help
            );
        }

        if self.floating {
            return format!(
                "<div class=\"form-floating\">{}<label for=\"{}\">{}</label></div>{}",
                self.input_html(""),
                self.id,
                self.label,
                help
            );
        }

        format!("{}{}{}", self.label_html(), self.input_html(""), help)
    }
}
