//! # Lustre Common
//!
//! Shared vocabulary of the `lustre` workspace.
//!
//! * **[`diamond`]**: the domain models. Grades, the raw form input, the frozen
//!   feature schema and the outcome of a price request.
//! * **[`model`]**: the port every pre-trained price model implements.
//! * **[`error`]**: the error taxonomy surfaced to callers.
//! * **[`config`]**: runtime configuration shared by the binary and the core.

pub mod config;
pub mod diamond;
pub mod error;
pub mod model;

pub use diamond::features::{FEATURE_COUNT, FEATURE_SCHEMA, FeatureRecord};
pub use diamond::grade::{Clarity, Color, Cut, Grade};
pub use diamond::input::RawInput;
pub use diamond::quote::{PredictionResult, PriceQuote, Rejection};
pub use error::PricingError;
pub use model::{ModelError, PredictiveModel};
