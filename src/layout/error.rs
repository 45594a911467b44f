//! Error taxonomy for overlay and section construction.
//!
//! All construction errors surface synchronously to the caller; resizing and
//! repositioning cannot fail.

use thiserror::Error;

/// Errors produced while building an [`Overlay`](super::Overlay) or parsing
/// [`Section`](super::Section) properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A property entry had no `:` separator.
    #[error("malformed property {property:?}: expected \"key:value\"")]
    MalformedProperty {
        /// The offending entry, verbatim.
        property: String,
    },

    /// A proportion value was not a number in `[0, 1]`.
    #[error("invalid proportion for {key:?}: {value:?} is not a fraction in [0, 1]")]
    InvalidProportion {
        /// The property key being set.
        key: String,
        /// The rejected value, verbatim.
        value: String,
    },

    /// No non-empty `name` property was supplied.
    #[error("section has no name")]
    MissingName,

    /// Two sections handed to the same overlay share a name.
    #[error("duplicate section name {name:?}")]
    DuplicateName {
        /// The colliding name.
        name: String,
    },
}
