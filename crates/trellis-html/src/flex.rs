//! The flex container element.

use crate::attrs::Attributes;
use crate::render::{join_class_parts, Render};
use trellis_classes::{FlexSpec, SpacingProperty, SpacingSpec};
use trellis_core::{ClassValue, Responsive};

/// A `d-flex` container carrying compiled flex and spacing classes.
#[derive(Default)]
pub struct Flex {
    spec: FlexSpec,
    margin: SpacingSpec,
    padding: SpacingSpec,
    attrs: Attributes,
    children: Vec<Box<dyn Render>>,
}

impl Flex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.spec.set_direction(value);
        self
    }

    pub fn justify_content(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.spec.set_justify_content(value);
        self
    }

    pub fn align_items(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.spec.set_align_items(value);
        self
    }

    pub fn align_content(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.spec.set_align_content(value);
        self
    }

    pub fn align_self(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.spec.set_align_self(value);
        self
    }

    /// Set both row and column gap.
    pub fn gap(mut self, gap: i64) -> Self {
        self.spec.set_gap(gap);
        self
    }

    pub fn gap_row(mut self, gap: i64) -> Self {
        self.spec.set_gap_row(gap);
        self
    }

    pub fn gap_column(mut self, gap: i64) -> Self {
        self.spec.set_gap_column(gap);
        self
    }

    pub fn nowrap(mut self) -> Self {
        self.spec.set_nowrap();
        self
    }

    pub fn margin(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.margin.set_all(value);
        self
    }

    pub fn margin_x(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.margin.set_x(value);
        self
    }

    pub fn margin_y(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.margin.set_y(value);
        self
    }

    pub fn padding(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.padding.set_all(value);
        self
    }

    pub fn padding_x(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.padding.set_x(value);
        self
    }

    pub fn padding_y(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.padding.set_y(value);
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    pub fn child(mut self, child: impl Render + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Render for Flex {
    fn render(&self) -> String {
        let class = join_class_parts([
            "d-flex",
            self.spec.classes().as_str(),
            self.margin.compile(SpacingProperty::Margin).as_str(),
            self.padding.compile(SpacingProperty::Padding).as_str(),
        ]);
        let mut out = format!("<div class=\"{}\"{}>", class, self.attrs.render());
        for child in &self.children {
            out.push_str(&child.render());
        }
        out.push_str("</div>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flex_renders_container_classes() {
        let flex = Flex::new()
            .direction([("default", "row"), ("md", "column")])
            .align_items("center")
            .gap(2)
            .child("<span>x</span>");
        assert_eq!(
            flex.render(),
            "<div class=\"d-flex flex-row flex-md-column align-items-center gap-2\">\
             <span>x</span></div>"
        );
    }

    #[test]
    fn test_empty_flex_is_a_bare_d_flex_div() {
        assert_eq!(Flex::new().render(), "<div class=\"d-flex\"></div>");
    }

    #[test]
    fn test_flex_spacing_composes_after_flex_classes() {
        let flex = Flex::new().nowrap().margin_y(1).padding(2);
        assert_eq!(
            flex.render(),
            "<div class=\"d-flex flex-nowrap my-1 p-2\"></div>"
        );
    }
}
