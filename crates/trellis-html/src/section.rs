//! The section scaffold.
//!
//! A titled content region: header with optional icon, description,
//! action slots and collapse toggle, a body holding arbitrary child
//! elements, and an optional action footer.

use crate::attrs::Attributes;
use crate::render::Render;

/// A `<section>` with a structured header, body, and footer.
#[derive(Default)]
pub struct Section {
    id: String,
    title: String,
    icon: String,
    description: String,
    header_actions: Vec<Box<dyn Render>>,
    footer_actions: Vec<Box<dyn Render>>,
    collapsible: bool,
    collapsed: bool,
    aside: bool,
    attrs: Attributes,
    content: Vec<Box<dyn Render>>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Icon class rendered next to the title.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn header_action(mut self, action: impl Render + 'static) -> Self {
        self.header_actions.push(Box::new(action));
        self
    }

    pub fn footer_action(mut self, action: impl Render + 'static) -> Self {
        self.footer_actions.push(Box::new(action));
        self
    }

    /// Make the section collapsible (renders the toggle button).
    pub fn collapsible(mut self) -> Self {
        self.collapsible = true;
        self
    }

    /// Start collapsed.
    pub fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }

    /// Render as an aside region.
    pub fn aside(mut self) -> Self {
        self.aside = true;
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    pub fn child(mut self, child: impl Render + 'static) -> Self {
        self.content.push(Box::new(child));
        self
    }
}

impl Render for Section {
    fn render(&self) -> String {
        let mut class = String::from("section");
        if self.aside {
            class.push_str(" aside");
        }
        if self.collapsible {
            class.push_str(" collapse");
        }
        if self.collapsed {
            class.push_str(" collapsed");
        }

        let mut out = format!("<section class=\"{}\"", class);
        if !self.id.is_empty() {
            out.push_str(&format!(" id=\"{}\"", self.id));
        }
        out.push_str(&self.attrs.render());
        out.push('>');

        out.push_str("<header class=\"section-header\">");
        out.push_str(&format!(
            "<h2 class=\"section-title\">{}</h2>",
            self.title
        ));
        if !self.icon.is_empty() {
            out.push_str(&format!("<i class=\"section-icon {}\"></i>", self.icon));
        }
        if !self.description.is_empty() {
            out.push_str(&format!(
                "<p class=\"section-description\">{}</p>",
                self.description
            ));
        }
        if !self.header_actions.is_empty() {
            out.push_str("<div class=\"section-actions\">");
            for action in &self.header_actions {
                out.push_str(&action.render());
            }
            out.push_str("</div>");
        }
        if self.collapsible {
            let expanded = if self.collapsed { "false" } else { "true" };
            out.push_str(&format!(
                "<button class=\"section-toggle\" aria-expanded=\"{}\">\
                 <i class=\"section-toggle-icon\"></i></button>",
                expanded
            ));
        }
        out.push_str("</header>");

        let body: String = self.content.iter().map(|child| child.render()).collect();
        if !body.is_empty() {
            out.push_str(&format!("<div class=\"section-content\">{}</div>", body));
        }

        if !self.footer_actions.is_empty() {
            out.push_str("<footer class=\"section-footer\">");
            for action in &self.footer_actions {
                out.push_str(&action.render());
            }
            out.push_str("</footer>");
        }

        out.push_str("</section>");
        out
    }
}
