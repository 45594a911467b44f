//! # Blockdrop
//!
//! A minimal Tetris-style game shell built around a proportional overlay
//! layout.
//!
//! ## Core Concepts
//!
//! - **Overlay/Section layout**: named screen regions sized as fractions of
//!   their container, repositioned on every window resize
//! - **Property strings**: sections are declared from `"key:value"` entries,
//!   validated at construction
//! - **Shell**: terminal bootstrap plus an event loop that forwards resize
//!   notifications into the layout
//!
//! ## Example
//!
//! ```rust
//! use blockdrop::{Overlay, Section};
//!
//! let board = Section::from_properties(["name:board", "prop_width:0.5"])?;
//! let mut overlay = Overlay::new(320, 320, [board])?;
//!
//! overlay.resize(640, 640);
//! assert_eq!(overlay.section("board").unwrap().rect.width, 320);
//! # Ok::<(), blockdrop::LayoutError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod layout;
pub mod shell;

// Re-exports for convenience
pub use layout::{LayoutError, Overlay, Rect, Section};
pub use shell::{Shell, ShellEvent, WindowConfig};
