//! # Error Taxonomy
//!
//! Every failure a price request can run into. A guard rejection is *not*
//! reported through here by the gate itself; it is a regular
//! [`PredictionResult::Rejected`](crate::diamond::quote::PredictionResult)
//! outcome. [`PricingError::OutOfDistributionRejected`] exists for callers that
//! want to treat it as a failure via
//! [`PredictionResult::into_quote`](crate::diamond::quote::PredictionResult::into_quote).

use thiserror::Error;

use crate::diamond::quote::Rejection;
use crate::model::ModelError;

#[derive(Debug, Error)]
pub enum PricingError {
    /// A categorical input is not one of the labels of its grade.
    #[error("invalid {field} '{value}', expected one of: {expected}")]
    InvalidCategory {
        field: &'static str,
        value: String,
        expected: String,
    },

    /// A numeric input lies outside the domain the form accepts.
    #[error("{field} = {value} is outside the accepted range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The model was invoked and failed. Never retried.
    #[error("prediction failed")]
    PredictionFailed(#[from] ModelError),

    /// The out-of-distribution guard short-circuited the request.
    #[error("request rejected: {0}")]
    OutOfDistributionRejected(Rejection),
}

impl PricingError {
    /// Whether this is the expected guard short-circuit rather than a fault.
    pub fn is_rejection(&self) -> bool {
        matches!(self, PricingError::OutOfDistributionRejected(_))
    }
}
