//! # Grading Scales
//!
//! The three categorical attributes of a diamond.
//!
//! Each scale lists its labels from the reference grade upwards in the order the
//! price model was trained with. The first label of [`Grade::ALL`] is the
//! reference category and gets no indicator column in the feature record.

use std::fmt;
use std::str::FromStr;

use crate::error::PricingError;

/// A categorical scale that is one-hot encoded with its first value dropped.
pub trait Grade: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Column prefix in the feature schema (`cut`, `color`, `clarity`).
    const FIELD: &'static str;

    /// Every value of the scale, reference first.
    const ALL: &'static [Self];

    /// Label as shown in the form and used in the column names.
    fn label(self) -> &'static str;

    /// The value represented by an all-zero indicator group.
    fn reference() -> Self {
        Self::ALL[0]
    }

    /// Values that own an indicator column, in schema order.
    fn indicators() -> &'static [Self] {
        &Self::ALL[1..]
    }
}

macro_rules! grade {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal, [$($variant:ident => $label:literal),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Grade for $name {
            const FIELD: &'static str = $field;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = PricingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_label(s)
            }
        }
    };
}

grade!(
    /// Quality of the cut, `Fair` being the reference.
    Cut, "cut", [
        Fair => "Fair",
        Good => "Good",
        VeryGood => "Very Good",
        Premium => "Premium",
        Ideal => "Ideal",
    ]
);

grade!(
    /// Color grade from `D` (colorless, reference) to `J`.
    Color, "color", [
        D => "D",
        E => "E",
        F => "F",
        G => "G",
        H => "H",
        I => "I",
        J => "J",
    ]
);

grade!(
    /// Clarity grade from `I1` (reference) to `IF`.
    Clarity, "clarity", [
        I1 => "I1",
        SI2 => "SI2",
        SI1 => "SI1",
        VS2 => "VS2",
        VS1 => "VS1",
        VVS2 => "VVS2",
        VVS1 => "VVS1",
        IF => "IF",
    ]
);

/// Parses a grade label.
///
/// Matching ignores case as well as spaces, dashes and underscores, so
/// `"Very Good"`, `"very-good"` and `"VERY_GOOD"` all select [`Cut::VeryGood`].
/// Anything else is reported as [`PricingError::InvalidCategory`].
pub fn parse_label<G: Grade>(s: &str) -> Result<G, PricingError> {
    let wanted = normalize(s);
    G::ALL
        .iter()
        .copied()
        .find(|grade| normalize(grade.label()) == wanted)
        .ok_or_else(|| PricingError::InvalidCategory {
            field: G::FIELD,
            value: s.to_string(),
            expected: G::ALL
                .iter()
                .map(|grade| grade.label())
                .collect::<Vec<_>>()
                .join(", "),
        })
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
