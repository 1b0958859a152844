//! # Prediction Gate
//!
//! Decides whether a request may reach the model and converts its answer.
//!
//! The training data has little support above [`MAX_CARAT`] carats or
//! [`MAX_VOLUME`] mm³, so such requests are answered with a
//! [`Rejection`] instead of a price. Both limits are exclusive: a value equal to
//! the limit still goes to the model.

use lustre_common::{
    FeatureRecord, PredictionResult, PredictiveModel, PriceQuote, PricingError, RawInput,
    Rejection,
};
use tracing::debug;

pub const MAX_CARAT: f64 = 5.0;

/// In cubic millimetres.
pub const MAX_VOLUME: f64 = 500.0;

/// Fixed USD to SGD rate.
pub const USD_TO_SGD: f64 = 1.28;

/// Returns the guard clause `raw` and `features` trip, if any.
///
/// The carat clause is checked first.
pub fn check_guard(raw: &RawInput, features: &FeatureRecord) -> Option<Rejection> {
    if raw.carat > MAX_CARAT {
        return Some(Rejection::CaratAboveLimit {
            carat: raw.carat,
            limit: MAX_CARAT,
        });
    }
    if features.volume() > MAX_VOLUME {
        return Some(Rejection::VolumeAboveLimit {
            volume: features.volume(),
            limit: MAX_VOLUME,
        });
    }
    None
}

/// Runs one request through the guard and, if it passes, the model.
///
/// # Errors
/// [`PricingError::PredictionFailed`] when the model fails. A rejection is
/// `Ok(PredictionResult::Rejected(_))`, not an error.
pub fn predict_and_format(
    raw: &RawInput,
    features: &FeatureRecord,
    model: &dyn PredictiveModel,
) -> Result<PredictionResult, PricingError> {
    if let Some(rejection) = check_guard(raw, features) {
        return Ok(PredictionResult::Rejected(rejection));
    }

    let price_usd = model.predict(features)?;
    debug!("Model '{}' predicted {price_usd} USD", model.name());

    Ok(PredictionResult::Priced(convert(price_usd)))
}

/// Builds a quote from a USD amount.
pub fn convert(price_usd: f64) -> PriceQuote {
    PriceQuote {
        price_usd,
        price_sgd: price_usd * USD_TO_SGD,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::build_features;
    use lustre_common::ModelError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed price and counts how often it was asked.
    struct FixedModel {
        price: Result<f64, ModelError>,
        calls: AtomicUsize,
    }

    impl FixedModel {
        fn new(price: Result<f64, ModelError>) -> Self {
            Self {
                price,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl PredictiveModel for FixedModel {
        fn predict(&self, _features: &FeatureRecord) -> Result<f64, ModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.price.clone()
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    fn run(raw: RawInput, model: &FixedModel) -> Result<PredictionResult, PricingError> {
        let features = build_features(&raw);
        predict_and_format(&raw, &features, model)
    }

    fn with_carat(carat: f64) -> RawInput {
        RawInput {
            carat,
            x: 1.0,
            y: 1.0,
            z: 1.0,
            ..RawInput::default()
        }
    }

    fn with_volume(volume: f64) -> RawInput {
        RawInput {
            carat: 1.0,
            x: volume,
            y: 1.0,
            z: 1.0,
            ..RawInput::default()
        }
    }

    #[test]
    fn test_carat_threshold_is_exclusive() {
        let model = FixedModel::new(Ok(100.0));
        assert!(!run(with_carat(5.0), &model).unwrap().is_rejected());
        assert!(run(with_carat(5.0001), &model).unwrap().is_rejected());
        assert_eq!(model.calls(), 1);
    }

    #[test]
    fn test_volume_threshold_is_exclusive() {
        let model = FixedModel::new(Ok(100.0));
        assert!(!run(with_volume(500.0), &model).unwrap().is_rejected());
        assert!(run(with_volume(500.0001), &model).unwrap().is_rejected());
        assert_eq!(model.calls(), 1);
    }

    #[test]
    fn test_heavy_stone_never_reaches_model() {
        let model = FixedModel::new(Ok(100.0));
        let result = run(with_carat(6.0), &model).unwrap();
        assert_eq!(
            result,
            PredictionResult::Rejected(Rejection::CaratAboveLimit {
                carat: 6.0,
                limit: MAX_CARAT
            })
        );
        assert_eq!(model.calls(), 0);
    }

    #[test]
    fn test_large_volume_rejected_via_volume_clause() {
        let model = FixedModel::new(Ok(100.0));
        let raw = RawInput {
            carat: 1.0,
            x: 10.0,
            y: 10.0,
            z: 10.0,
            ..RawInput::default()
        };
        let result = run(raw, &model).unwrap();
        assert_eq!(
            result,
            PredictionResult::Rejected(Rejection::VolumeAboveLimit {
                volume: 1000.0,
                limit: MAX_VOLUME
            })
        );
        assert_eq!(model.calls(), 0);
    }

    #[test]
    fn test_carat_clause_reported_first() {
        let raw = RawInput {
            carat: 7.0,
            x: 20.0,
            y: 20.0,
            z: 20.0,
            ..RawInput::default()
        };
        let features = build_features(&raw);
        assert!(matches!(
            check_guard(&raw, &features),
            Some(Rejection::CaratAboveLimit { .. })
        ));
    }

    #[test]
    fn test_conversion_is_exact() {
        for price in [0.0, 1.0, 326.0, 3942.57, 18823.0] {
            let model = FixedModel::new(Ok(price));
            let result = run(RawInput::default(), &model).unwrap();
            let quote = result.quote().copied().unwrap();
            assert_eq!(quote.price_usd, price);
            assert_eq!(quote.price_sgd, price * 1.28);
        }
    }

    #[test]
    fn test_model_failure_propagates() {
        let model = FixedModel::new(Err(ModelError::Backend("shape mismatch".into())));
        let err = run(RawInput::default(), &model).unwrap_err();
        assert!(matches!(
            err,
            PricingError::PredictionFailed(ModelError::Backend(_))
        ));
        assert!(!err.is_rejection());
        assert_eq!(model.calls(), 1);
    }
}
