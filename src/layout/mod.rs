//! Layout module: proportional overlay layout for named screen regions.
//!
//! An [`Overlay`] owns a flat set of named [`Section`]s. Sections carry
//! proportional size targets and recompute their pixel geometry whenever the
//! container resizes - there is no layout tree, just one fan-out per resize.

mod error;
mod overlay;
mod rect;
mod section;

pub use error::LayoutError;
pub use overlay::Overlay;
pub use rect::Rect;
pub use section::Section;
