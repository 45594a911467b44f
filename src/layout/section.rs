//! Section: a named rectangular region with proportional size targets.
//!
//! A section tracks the size of its container (the overlay) and derives its
//! own pixel geometry from proportional targets whenever that size changes.

use super::error::LayoutError;
use super::rect::Rect;

/// A named screen region sized as a fraction of its container.
///
/// Sections are built from `"key:value"` property strings and owned by an
/// [`Overlay`](super::Overlay), which forwards container resizes to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Identifier, unique within the owning overlay.
    name: String,
    /// Computed pixel geometry within the container.
    pub rect: Rect,
    /// Target width as a fraction of the container width.
    pub prop_width: f64,
    /// Target height as a fraction of the container height.
    pub prop_height: f64,
    /// Left edge offset as a fraction of the container width.
    pub prop_x: f64,
    /// Top edge offset as a fraction of the container height.
    pub prop_y: f64,
    /// Last container width used for placement.
    source_width: u16,
    /// Last container height used for placement.
    source_height: u16,
}

impl Section {
    /// Build a section from `"key:value"` property strings.
    ///
    /// Each entry is split on its first `:`. Recognized keys are `name`,
    /// `prop_width`, `prop_height`, `prop_x`, and `prop_y`; proportions are
    /// fractions in `[0, 1]` and default to a full-container region at the
    /// origin. Unknown keys are ignored (and logged) so property lists stay
    /// forward compatible.
    ///
    /// # Errors
    ///
    /// [`LayoutError::MalformedProperty`] for an entry without a `:`,
    /// [`LayoutError::InvalidProportion`] for an unparsable or out-of-range
    /// fraction, and [`LayoutError::MissingName`] if no non-empty `name` was
    /// supplied.
    pub fn from_properties<I, S>(properties: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut section = Self {
            name: String::new(),
            rect: Rect::ZERO,
            prop_width: 1.0,
            prop_height: 1.0,
            prop_x: 0.0,
            prop_y: 0.0,
            source_width: 0,
            source_height: 0,
        };

        for property in properties {
            let property = property.as_ref();
            let (key, value) =
                property
                    .split_once(':')
                    .ok_or_else(|| LayoutError::MalformedProperty {
                        property: property.to_string(),
                    })?;
            section.apply_property(key, value)?;
        }

        if section.name.is_empty() {
            return Err(LayoutError::MissingName);
        }

        Ok(section)
    }

    /// Single dispatch point for recognized property keys.
    ///
    /// Supporting a new key means adding one arm here.
    fn apply_property(&mut self, key: &str, value: &str) -> Result<(), LayoutError> {
        match key {
            "name" => self.name = value.to_string(),
            "prop_width" => self.prop_width = parse_proportion(key, value)?,
            "prop_height" => self.prop_height = parse_proportion(key, value)?,
            "prop_x" => self.prop_x = parse_proportion(key, value)?,
            "prop_y" => self.prop_y = parse_proportion(key, value)?,
            _ => log::warn!("ignoring unknown section property {key:?}"),
        }
        Ok(())
    }

    /// Get the section name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the last container width this section was placed against.
    pub const fn source_width(&self) -> u16 {
        self.source_width
    }

    /// Get the last container height this section was placed against.
    pub const fn source_height(&self) -> u16 {
        self.source_height
    }

    /// Record a new container size and recompute placement.
    ///
    /// Never fails; a zero container yields a degenerate (invisible) rect.
    /// Calling twice with the same size is a no-op the second time.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.source_width = width;
        self.source_height = height;
        self.reposition();
    }

    /// Recompute pixel geometry from the proportional targets and the last
    /// recorded container size.
    ///
    /// Afterwards `rect.width == round(prop_width * source_width)` (same for
    /// the other three coordinates), with the rect clamped inside the
    /// container bounds.
    pub fn reposition(&mut self) {
        let source_w = f64::from(self.source_width);
        let source_h = f64::from(self.source_height);
        let target = Rect::new(
            scale(self.prop_x, source_w),
            scale(self.prop_y, source_h),
            scale(self.prop_width, source_w),
            scale(self.prop_height, source_h),
        );
        self.rect = target.clamp_within(self.source_width, self.source_height);
    }
}

/// Parse a proportion value as a finite fraction in `[0, 1]`.
fn parse_proportion(key: &str, value: &str) -> Result<f64, LayoutError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && (0.0..=1.0).contains(p))
        .ok_or_else(|| LayoutError::InvalidProportion {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// Scale a container dimension by a proportion, rounding to whole pixels.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scale(proportion: f64, dimension: f64) -> u16 {
    (proportion * dimension).round().clamp(0.0, f64::from(u16::MAX)) as u16
}
