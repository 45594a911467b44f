//! Overlay: a container of named sections sharing one coordinate space.
//!
//! The overlay owns its sections exclusively. It is built once with a fixed
//! window size and a fixed section list; afterwards the only mutation is
//! `resize`, which fans the new container size out to every section.

use std::collections::HashMap;

use super::error::LayoutError;
use super::section::Section;

/// A container managing a named set of screen regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    /// Container width in pixels.
    width: u16,
    /// Container height in pixels.
    height: u16,
    /// Owned sections, keyed by their unique names.
    sections: HashMap<String, Section>,
}

impl Overlay {
    /// Build an overlay of the given size from an ordered sequence of
    /// sections.
    ///
    /// Every section is placed against the container size immediately, so the
    /// overlay never holds stale geometry.
    ///
    /// # Errors
    ///
    /// [`LayoutError::DuplicateName`] if two sections share a name. Collisions
    /// are rejected rather than resolved last-wins.
    pub fn new<I>(width: u16, height: u16, sections: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = Section>,
    {
        let mut overlay = Self {
            width,
            height,
            sections: HashMap::new(),
        };

        for mut section in sections {
            section.resize(width, height);
            let name = section.name().to_string();
            if overlay.sections.insert(name.clone(), section).is_some() {
                return Err(LayoutError::DuplicateName { name });
            }
        }

        Ok(overlay)
    }

    /// Get the container width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the container height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Look up a section by name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Look up a section by name, mutably.
    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.get_mut(name)
    }

    /// Iterate over the section names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Iterate over the sections, in no particular order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check whether the overlay has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Update the container size and reposition every section against it.
    ///
    /// Never fails; zero dimensions produce a degenerate (invisible) layout.
    /// Calling twice with the same size is a no-op the second time.
    pub fn resize(&mut self, width: u16, height: u16) {
        log::debug!("overlay resize to {width}x{height}");
        self.width = width;
        self.height = height;
        for section in self.sections.values_mut() {
            section.resize(width, height);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;

    fn named(name: &str) -> Section {
        Section::from_properties([format!("name:{name}")]).unwrap()
    }

    #[test]
    fn test_each_name_resolves_to_its_section() {
        let overlay =
            Overlay::new(320, 320, [named("board"), named("score"), named("preview")]).unwrap();

        assert_eq!(overlay.len(), 3);
        for name in ["board", "score", "preview"] {
            assert_eq!(overlay.section(name).unwrap().name(), name);
        }
        assert!(overlay.section("hud").is_none());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Overlay::new(320, 320, [named("board"), named("board")]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::DuplicateName {
                name: "board".to_string()
            }
        );
    }

    #[test]
    fn test_sections_placed_at_construction() {
        let board = Section::from_properties(["name:board", "prop_width:0.5"]).unwrap();
        let overlay = Overlay::new(320, 320, [board]).unwrap();

        let board = overlay.section("board").unwrap();
        assert_eq!(board.source_width(), 320);
        assert_eq!(board.rect, Rect::new(0, 0, 160, 320));
    }

    #[test]
    fn test_resize_updates_dimensions() {
        let mut overlay = Overlay::new(320, 320, std::iter::empty()).unwrap();
        overlay.resize(800, 600);
        assert_eq!(overlay.width(), 800);
        assert_eq!(overlay.height(), 600);
    }

    #[test]
    fn test_resize_propagates_to_every_section() {
        let mut overlay = Overlay::new(320, 320, [named("score"), named("board")]).unwrap();

        overlay.resize(640, 640);

        assert_eq!(overlay.width(), 640);
        assert_eq!(overlay.section("score").unwrap().source_width(), 640);
        assert_eq!(overlay.section("board").unwrap().source_width(), 640);
    }

    #[test]
    fn test_resize_is_idempotent() {
        let mut once = Overlay::new(320, 320, [named("board"), named("score")]).unwrap();
        once.resize(640, 480);
        let mut twice = once.clone();
        twice.resize(640, 480);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_zero_size_is_degenerate_not_an_error() {
        let mut overlay = Overlay::new(320, 320, [named("board")]).unwrap();
        overlay.resize(0, 0);
        assert_eq!(overlay.width(), 0);
        assert!(overlay.section("board").unwrap().rect.is_empty());
    }
}
