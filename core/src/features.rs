//! # Feature Builder
//!
//! Turns a [`RawInput`] into the [`FeatureRecord`] the price model was trained on.

use lustre_common::diamond::features::{CARAT_COLUMN, FEATURE_COUNT, VOLUME_COLUMN};
use lustre_common::{Clarity, Color, Cut, FeatureRecord, Grade, RawInput};

/// Encodes one submitted form.
///
/// `carat` is copied, `volume` is `x * y * z`, and each grade contributes
/// one indicator per non-reference value. The reference grades (`Fair`, `D`,
/// `I1`) leave their whole group at zero. Pure and deterministic.
pub fn build_features(raw: &RawInput) -> FeatureRecord {
    let mut values = [0.0; FEATURE_COUNT];
    values[CARAT_COLUMN] = raw.carat;
    values[VOLUME_COLUMN] = raw.volume();

    let mut next = VOLUME_COLUMN + 1;
    next = encode_indicators::<Cut>(raw.cut, &mut values, next);
    next = encode_indicators::<Color>(raw.color, &mut values, next);
    next = encode_indicators::<Clarity>(raw.clarity, &mut values, next);
    debug_assert_eq!(next, FEATURE_COUNT);

    FeatureRecord::from_values(values)
}

/// Writes the indicator group of `value` starting at `offset`.
///
/// Returns the offset of the column after the group.
fn encode_indicators<G: Grade>(value: G, values: &mut [f64], offset: usize) -> usize {
    let indicators = G::indicators();
    for (idx, grade) in indicators.iter().enumerate() {
        values[offset + idx] = if *grade == value { 1.0 } else { 0.0 };
    }
    offset + indicators.len()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
