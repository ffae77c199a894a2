//! HTML render assembly for trellis layouts.
//!
//! This crate is the consumer of the class compilers in
//! `trellis-classes`: element builders accumulate responsive style
//! declarations through fluent setters, and at render time the
//! compiled class strings are embedded into structural markup.
//!
//! ```
//! use trellis_html::{Grid, GridItem, Render};
//!
//! let html = Grid::new()
//!     .columns([("default", 12), ("md", 6)])
//!     .item(GridItem::new("<p>hello</p>").span(4).margin_y(2))
//!     .render();
//! assert_eq!(
//!     html,
//!     "<div class=\"row\"><div class=\"split-col-8 split-col-md-2 my-2\"><p>hello</p></div></div>"
//! );
//! ```

pub mod attrs;
pub mod button;
pub mod button_group;
pub mod flex;
pub mod grid;
pub mod input;
pub mod render;
pub mod section;

pub use attrs::Attributes;
pub use button::Button;
pub use button_group::ButtonGroup;
pub use flex::Flex;
pub use grid::{Grid, GridItem};
pub use input::TextInput;
pub use render::Render;
pub use section::Section;
