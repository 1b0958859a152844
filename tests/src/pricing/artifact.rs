use lustre_common::{FEATURE_SCHEMA, PredictiveModel};
use lustre_core::{ArtifactModel, LoadError, load_model};

use super::bundled_model_path;

#[test]
fn bundled_artifact_matches_schema() {
    let model = load_model(&bundled_model_path()).unwrap();

    assert_eq!(model.name(), "diamond-price-linear-demo");
    assert!(model.is_schema_ordered());
    assert_eq!(model.feature_names(), FEATURE_SCHEMA);
}

#[test]
fn bundled_artifact_survives_column_shuffle() {
    let json = std::fs::read_to_string(bundled_model_path()).unwrap();
    let mut doc: serde_json::Value = serde_json::from_str(&json).unwrap();

    // Rotate names and coefficients together; predictions must not move.
    let names = doc["feature_names"].as_array_mut().unwrap();
    names.rotate_left(5);
    let coefficients = doc["estimator"]["coefficients"].as_array_mut().unwrap();
    coefficients.rotate_left(5);

    let shuffled = ArtifactModel::from_json(&doc.to_string()).unwrap();
    let original = ArtifactModel::from_json(&json).unwrap();
    assert!(!shuffled.is_schema_ordered());

    let raw = lustre_common::RawInput::from_form(1.1, 6.6, 6.6, 4.1, "Good", "H", "VS2").unwrap();
    let features = lustre_core::build_features(&raw);
    let a = original.predict(&features).unwrap();
    let b = shuffled.predict(&features).unwrap();
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn artifact_with_renamed_column_is_refused() {
    let json = std::fs::read_to_string(bundled_model_path())
        .unwrap()
        .replace("\"cut_Very Good\"", "\"cut_VeryGood\"");

    match ArtifactModel::from_json(&json) {
        Err(LoadError::Schema(mismatch)) => {
            assert_eq!(mismatch.missing, vec!["cut_Very Good"]);
            assert_eq!(mismatch.unexpected, vec!["cut_VeryGood"]);
        }
        other => panic!("expected a schema mismatch, got {other:?}"),
    }
}
