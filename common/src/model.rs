use thiserror::Error;

use crate::diamond::features::FeatureRecord;

/// Defines the contract of a pre-trained price regressor.
///
/// Implementations are loaded once and shared read-only for the rest of the
/// process, hence `&self` and the `Send + Sync` bound.
pub trait PredictiveModel: Send + Sync {
    /// Predicts the price of one diamond, in USD.
    ///
    /// # Arguments
    /// * `features` - A record laid out in [`FEATURE_SCHEMA`](crate::FEATURE_SCHEMA) order.
    ///
    /// # Returns
    /// * `Ok(f64)` - The predicted price.
    /// * `Err(ModelError)` - The model could not produce a usable value.
    fn predict(&self, features: &FeatureRecord) -> Result<f64, ModelError>;

    /// Human readable identifier of the loaded model.
    fn name(&self) -> &str;
}

/// Faults raised while a model runs inference.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("model produced a non-finite value ({0})")]
    NonFinite(f64),

    #[error("tree {tree} did not reach a leaf within {limit} steps")]
    UnterminatedTree { tree: usize, limit: usize },

    #[error("{0}")]
    Backend(String),
}
