//! # Lustre Core
//!
//! The price estimation pipeline.
//!
//! * **[`features`]**: encodes a submitted form into a feature record.
//! * **[`gate`]**: out-of-distribution guard, inference and currency conversion.
//! * **[`pricing`]**: the service the binary drives, wiring the two together.
//! * **[`artifact`]**: loads the serialized model and checks it against the
//!   feature schema.

pub mod artifact;
pub mod features;
pub mod gate;
pub mod pricing;

pub use artifact::{ArtifactModel, LoadError, load_model};
pub use features::build_features;
pub use gate::predict_and_format;
pub use pricing::PricingService;
