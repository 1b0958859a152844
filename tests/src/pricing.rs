#![cfg(test)]

mod artifact;
mod scenarios;

use std::path::PathBuf;
use std::sync::Arc;

use lustre_core::{ArtifactModel, PricingService, load_model};

/// The artifact shipped in `models/` at the workspace root.
pub(crate) fn bundled_model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("models")
        .join("diamond_price.json")
}

pub(crate) fn bundled_model() -> anyhow::Result<Arc<ArtifactModel>> {
    Ok(Arc::new(load_model(&bundled_model_path())?))
}

pub(crate) fn bundled_service() -> anyhow::Result<PricingService> {
    Ok(PricingService::new(bundled_model()?))
}
