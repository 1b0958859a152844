//! # Raw Form Input
//!
//! What a user submits for one price request.

use std::ops::RangeInclusive;

use crate::diamond::grade::{Clarity, Color, Cut};
use crate::error::PricingError;

/// Accepted carat weights.
pub const CARAT_RANGE: RangeInclusive<f64> = 0.0..=50.0;

/// Accepted length, width and depth in millimetres.
pub const DIMENSION_RANGE: RangeInclusive<f64> = 0.0..=1000.0;

/// One submitted form.
///
/// The grades are typed, so a category outside its scale cannot be
/// represented. Numeric ranges are the input layer's job; [`RawInput::validate`]
/// is provided for layers that do not enforce them themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawInput {
    pub carat: f64,
    /// Length in mm.
    pub x: f64,
    /// Width in mm.
    pub y: f64,
    /// Depth in mm.
    pub z: f64,
    pub cut: Cut,
    pub color: Color,
    pub clarity: Clarity,
}

impl Default for RawInput {
    /// The values the form is pre-filled with.
    fn default() -> Self {
        Self {
            carat: 0.7,
            x: 4.0,
            y: 4.0,
            z: 2.5,
            cut: Cut::Fair,
            color: Color::D,
            clarity: Clarity::I1,
        }
    }
}

impl RawInput {
    /// Builds an input from untyped form values.
    ///
    /// Fails with [`PricingError::InvalidCategory`] on the first grade label
    /// that does not belong to its scale.
    pub fn from_form(
        carat: f64,
        x: f64,
        y: f64,
        z: f64,
        cut: &str,
        color: &str,
        clarity: &str,
    ) -> Result<Self, PricingError> {
        Ok(Self {
            carat,
            x,
            y,
            z,
            cut: cut.parse()?,
            color: color.parse()?,
            clarity: clarity.parse()?,
        })
    }

    /// Product of the three dimensions, in cubic millimetres.
    pub fn volume(&self) -> f64 {
        self.x * self.y * self.z
    }

    /// Checks every numeric field against the form's domain.
    pub fn validate(&self) -> Result<(), PricingError> {
        check_range("carat", self.carat, &CARAT_RANGE)?;
        check_range("x", self.x, &DIMENSION_RANGE)?;
        check_range("y", self.y, &DIMENSION_RANGE)?;
        check_range("z", self.z, &DIMENSION_RANGE)?;
        Ok(())
    }
}

/// NaN fails the check because it is not contained in any range.
pub fn check_range(
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
) -> Result<(), PricingError> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(PricingError::OutOfRange {
        field,
        value,
        min: *range.start(),
        max: *range.end(),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
