//! # Feature Record
//!
//! The numeric representation of a diamond that price models consume.
//!
//! The layout is a frozen contract with the model artifact: two numeric columns
//! followed by drop-first indicator columns for cut, color and clarity. Column
//! names follow the `<field>_<label>` pattern, spaces included
//! (`cut_Very Good`), and must not be changed without retraining the model.

use std::fmt;

/// Number of columns in a [`FeatureRecord`].
pub const FEATURE_COUNT: usize = 19;

/// Column names in the order models receive them.
pub const FEATURE_SCHEMA: [&str; FEATURE_COUNT] = [
    "carat",
    "volume",
    "cut_Good",
    "cut_Very Good",
    "cut_Premium",
    "cut_Ideal",
    "color_E",
    "color_F",
    "color_G",
    "color_H",
    "color_I",
    "color_J",
    "clarity_SI2",
    "clarity_SI1",
    "clarity_VS2",
    "clarity_VS1",
    "clarity_VVS2",
    "clarity_VVS1",
    "clarity_IF",
];

pub const CARAT_COLUMN: usize = 0;
pub const VOLUME_COLUMN: usize = 1;

/// Position of a column in [`FEATURE_SCHEMA`].
pub fn column_index(name: &str) -> Option<usize> {
    FEATURE_SCHEMA.iter().position(|column| *column == name)
}

/// A single row laid out in [`FEATURE_SCHEMA`] order.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRecord {
    values: [f64; FEATURE_COUNT],
}

impl FeatureRecord {
    pub fn from_values(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn carat(&self) -> f64 {
        self.values[CARAT_COLUMN]
    }

    pub fn volume(&self) -> f64 {
        self.values[VOLUME_COLUMN]
    }

    /// Value of a column by name, `None` for names outside the schema.
    pub fn get(&self, name: &str) -> Option<f64> {
        column_index(name).map(|idx| self.values[idx])
    }

    /// Positional view for order-sensitive consumers.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// `(column, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_SCHEMA.iter().copied().zip(self.values.iter().copied())
    }
}

impl fmt::Display for FeatureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
