//! # Pricing Service
//!
//! Implements the "Estimate Price" use case.
//!
//! Owns the model handle for the lifetime of the process and runs each request
//! through the [`features`](crate::features) builder and the
//! [`gate`](crate::gate).

use std::sync::Arc;

use lustre_common::{PredictionResult, PredictiveModel, PricingError, RawInput};
use tracing::{debug, warn};

use crate::features::build_features;
use crate::gate::predict_and_format;

/// Application service for price estimation.
///
/// The model is injected once and only ever read, so the service can be
/// cloned freely and shared between threads.
#[derive(Clone)]
pub struct PricingService {
    model: Arc<dyn PredictiveModel>,
}

impl PricingService {
    pub fn new(model: Arc<dyn PredictiveModel>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &dyn PredictiveModel {
        self.model.as_ref()
    }

    /// Estimates the price of one submitted diamond.
    ///
    /// The process involves:
    /// 1. **Encoding**: building the feature record.
    /// 2. **Gating**: rejecting stones outside the model's range.
    /// 3. **Inference**: asking the model and converting the answer.
    pub fn quote(&self, raw: &RawInput) -> Result<PredictionResult, PricingError> {
        let features = build_features(raw);
        debug!("Features: {features}");

        let result = predict_and_format(raw, &features, self.model.as_ref())?;
        if let PredictionResult::Rejected(rejection) = &result {
            warn!("Request rejected: {rejection}");
        }
        Ok(result)
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
    use lustre_common::{FeatureRecord, ModelError};
    use std::sync::Mutex;

    /// Records every feature record it is asked about.
    #[derive(Default)]
    struct RecordingModel {
        seen: Mutex<Vec<FeatureRecord>>,
    }

    impl PredictiveModel for RecordingModel {
        fn predict(&self, features: &FeatureRecord) -> Result<f64, ModelError> {
            self.seen
                .lock()
                .map_err(|e| ModelError::Backend(e.to_string()))?
                .push(features.clone());
            Ok(features.carat() * 1000.0)
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    #[test]
    fn test_quote_passes_built_features_to_model() {
        let model = Arc::new(RecordingModel::default());
        let service = PricingService::new(model.clone());

        let raw = RawInput::from_form(0.7, 4.0, 4.0, 2.5, "Ideal", "E", "VS1").unwrap();
        let result = service.quote(&raw).unwrap();

        let quote = result.quote().copied().unwrap();
        assert_eq!(quote.price_usd, 700.0);
        assert_eq!(quote.price_sgd, 700.0 * 1.28);

        let seen = model.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], build_features(&raw));
    }

    #[test]
    fn test_rejected_quote_skips_model() {
        let model = Arc::new(RecordingModel::default());
        let service = PricingService::new(model.clone());

        let raw = RawInput {
            carat: 6.0,
            ..RawInput::default()
        };
        assert!(service.quote(&raw).unwrap().is_rejected());
        assert!(model.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_service_is_shareable() {
        let service = PricingService::new(Arc::new(RecordingModel::default()));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let service = service.clone();
                std::thread::spawn(move || {
                    let raw = RawInput {
                        carat: 0.5 + i as f64,
                        ..RawInput::default()
                    };
                    service.quote(&raw).map(|result| result.is_rejected())
                })
            })
            .collect();

        for handle in handles {
            assert!(!handle.join().unwrap().unwrap());
        }
        assert_eq!(service.model().name(), "recording");
    }
}
