//! The rendering seam.
//!
//! Every element builder implements [`Render`]; containers hold their
//! children as `Box<dyn Render>` so layouts, form fields, and raw
//! markup snippets compose freely.

/// Produce the element's HTML markup.
pub trait Render {
    fn render(&self) -> String;
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self) -> String {
        (**self).render()
    }
}

/// Raw markup passes through unchanged, so prerendered fragments can
/// be used as children or action slots.
impl Render for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Render for &str {
    fn render(&self) -> String {
        (*self).to_string()
    }
}

/// Join class-string fragments, skipping empty ones, preserving the
/// category order the fragments were given in.
pub(crate) fn join_class_parts<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for part in parts {
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}
