//! # Diamond Models
//!
//! The data structures a single price request flows through.
//!
//! ## Request lifecycle
//! * [`input::RawInput`]: the submitted form, one per request.
//! * [`features::FeatureRecord`]: the numeric record handed to the model.
//! * [`quote::PredictionResult`]: either a rejection or a two-currency quote.
//!
//! None of these outlive the request that created them.

pub mod features;
pub mod grade;
pub mod input;
pub mod quote;
