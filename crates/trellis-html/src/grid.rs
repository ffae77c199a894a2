//! The grid container and its items.
//!
//! A [`Grid`] declares per-breakpoint column counts and renders a
//! `row` div; each [`GridItem`] wraps a child element together with
//! its span and spacing declarations, and is rendered inside a div
//! carrying its effective width classes (the span delta against the
//! grid's columns) followed by its compiled margin and padding.

use crate::attrs::Attributes;
use crate::render::{join_class_parts, Render};
use trellis_classes::{ColumnSpec, FlexSpec, OrderSpec, SpacingProperty, SpacingSpec, SpanSpec};
use trellis_core::{ClassValue, Responsive};

/// A responsive grid row.
#[derive(Default)]
pub struct Grid {
    columns: ColumnSpec,
    container: FlexSpec,
    margin: SpacingSpec,
    padding: SpacingSpec,
    attrs: Attributes,
    items: Vec<GridItem>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the grid's column counts; a bare integer sets the
    /// `default` breakpoint.
    pub fn columns(mut self, value: impl Into<Responsive<i64>>) -> Self {
        self.columns.set(value);
        self
    }

    pub fn justify_content(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.container.set_justify_content(value);
        self
    }

    pub fn align_items(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.container.set_align_items(value);
        self
    }

    pub fn align_content(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.container.set_align_content(value);
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

    pub fn margin_top(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.margin.set_top(value);
        self
    }

    pub fn margin_bottom(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.margin.set_bottom(value);
        self
    }

    pub fn margin_start(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.margin.set_start(value);
        self
    }

    pub fn margin_end(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.margin.set_end(value);
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

    pub fn padding_top(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.padding.set_top(value);
        self
    }

    pub fn padding_bottom(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.padding.set_bottom(value);
        self
    }

    pub fn padding_start(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.padding.set_start(value);
        self
    }

    pub fn padding_end(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.padding.set_end(value);
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Add a child wrapped in its own [`GridItem`].
    pub fn item(mut self, item: GridItem) -> Self {
        self.items.push(item);
        self
    }

    /// Add a child that fills the grid's declared width.
    pub fn child(mut self, child: impl Render + 'static) -> Self {
        self.items.push(GridItem::new(child));
        self
    }
}

impl Render for Grid {
    fn render(&self) -> String {
        let container = join_class_parts([
            self.container.classes().as_str(),
            self.margin.compile(SpacingProperty::Margin).as_str(),
            self.padding.compile(SpacingProperty::Padding).as_str(),
        ]);

        // A grid with neither container classes nor a column
        // declaration contributes no structure of its own.
        if container.is_empty() && self.columns.is_empty() && self.attrs.is_empty() {
            return self
                .items
                .iter()
                .map(|item| item.content.render())
                .collect();
        }

        let class = join_class_parts(["row", container.as_str()]);
        let mut out = format!("<div class=\"{}\"{}>", class, self.attrs.render());
        for item in &self.items {
            let classes = item.classes(&self.columns);
            if classes.is_empty() {
                out.push_str("<div>");
            } else {
                out.push_str(&format!("<div class=\"{}\">", classes));
            }
            out.push_str(&item.content.render());
            out.push_str("</div>");
        }
        out.push_str("</div>");
        out
    }
}

/// One grid child with its span and spacing declarations.
pub struct GridItem {
    span: SpanSpec,
    margin: SpacingSpec,
    padding: SpacingSpec,
    order: OrderSpec,
    content: Box<dyn Render>,
}

impl GridItem {
    pub fn new(content: impl Render + 'static) -> Self {
        Self {
            span: SpanSpec::new(),
            margin: SpacingSpec::new(),
            padding: SpacingSpec::new(),
            order: OrderSpec::new(),
            content: Box::new(content),
        }
    }

    /// Declare how many columns this item yields back to its
    /// siblings; a bare integer sets only the `default` entry.
    pub fn span(mut self, value: impl Into<Responsive<i64>>) -> Self {
        self.span.set(value);
        self
    }

    /// Declare the item's display order (a level or `first`/`last`).
    pub fn order(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.order.set(value);
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

    pub fn margin_top(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.margin.set_top(value);
        self
    }

    pub fn margin_bottom(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.margin.set_bottom(value);
        self
    }

    pub fn margin_start(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.margin.set_start(value);
        self
    }

    pub fn margin_end(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.margin.set_end(value);
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

    pub fn padding_top(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.padding.set_top(value);
        self
    }

    pub fn padding_bottom(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.padding.set_bottom(value);
        self
    }

    pub fn padding_start(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.padding.set_start(value);
        self
    }

    pub fn padding_end(mut self, value: impl Into<Responsive<ClassValue>>) -> Self {
        self.padding.set_end(value);
        self
    }

    /// The item's full class string against its parent grid: width
    /// classes, then compiled margin, padding, and order classes.
    pub fn classes(&self, parent: &ColumnSpec) -> String {
        join_class_parts([
            self.span.width_classes(parent).as_str(),
            self.margin.compile(SpacingProperty::Margin).as_str(),
            self.padding.compile(SpacingProperty::Padding).as_str(),
            self.order.classes().as_str(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_classes_compose_in_category_order() {
        let mut parent = ColumnSpec::new();
        parent.set([("default", 12), ("md", 4)]);
        let item = GridItem::new("x").span(4).margin_y(2).padding_x(1);
        assert_eq!(
            item.classes(&parent),
            "split-col-8 split-col-md-1 my-2 px-1"
        );
    }

    #[test]
    fn test_item_order_classes_come_last() {
        let mut parent = ColumnSpec::new();
        parent.set(12);
        let item = GridItem::new("x").span(4).order(2).order([("md", "first")]);
        assert_eq!(item.classes(&parent), "split-col-8 order-2 order-md-first");
    }

    #[test]
    fn test_item_without_span_fills_parent() {
        let mut parent = ColumnSpec::new();
        parent.set(6);
        let item = GridItem::new("x");
        assert_eq!(item.classes(&parent), "split-col-6");
    }

    #[test]
    fn test_grid_renders_row_with_wrapped_items() {
        let grid = Grid::new()
            .columns([("default", 12)])
            .item(GridItem::new("<p>a</p>").span(4))
            .item(GridItem::new("<p>b</p>").span(8));
        assert_eq!(
            grid.render(),
            "<div class=\"row\">\
             <div class=\"split-col-8\"><p>a</p></div>\
             <div class=\"split-col-4\"><p>b</p></div>\
             </div>"
        );
    }

    #[test]
    fn test_grid_container_classes() {
        let grid = Grid::new()
            .columns(12)
            .justify_content("between")
            .margin_y(3)
            .child("<p>c</p>");
        assert_eq!(
            grid.render(),
            "<div class=\"row justify-content-between my-3\">\
             <div class=\"split-col-12\"><p>c</p></div>\
             </div>"
        );
    }

    #[test]
    fn test_bare_grid_passes_children_through() {
        let grid = Grid::new().child("<p>a</p>").child("<p>b</p>");
        assert_eq!(grid.render(), "<p>a</p><p>b</p>");
    }

    #[test]
    fn test_grid_attributes_render_in_order() {
        let grid = Grid::new()
            .columns(6)
            .attr("id", "hero")
            .attr("data-kind", "grid");
        assert_eq!(
            grid.render(),
            "<div class=\"row\" id=\"hero\" data-kind=\"grid\"></div>"
        );
    }
}
