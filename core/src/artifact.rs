//! # Model Artifact
//!
//! Loads the serialized price model and adapts it to [`PredictiveModel`].
//!
//! An artifact is a JSON document:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "name": "diamond-price",
//!   "feature_names": ["carat", "volume", "cut_Good", "..."],
//!   "estimator": { "kind": "linear", "intercept": 0.0, "coefficients": [] }
//! }
//! ```
//!
//! `estimator.kind` is either `linear` ([`linear::LinearRegressor`]) or
//! `forest` ([`forest::ForestRegressor`]).
//!
//! **Schema binding:** `feature_names` must name every column of
//! [`FEATURE_SCHEMA`] exactly once. The columns may come in any order; each one
//! is bound to its schema position by name at load time, so a model trained on
//! a differently ordered frame still receives the values it expects.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use lustre_common::diamond::features::column_index;
use lustre_common::{FEATURE_COUNT, FEATURE_SCHEMA, FeatureRecord, ModelError, PredictiveModel};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

pub mod forest;
pub mod linear;

use forest::ForestRegressor;
use linear::LinearRegressor;

pub const SUPPORTED_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read model artifact {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed model artifact")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported artifact format version {found}, expected {expected}")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("artifact features do not match the feature schema: {0}")]
    Schema(SchemaMismatch),

    #[error("invalid estimator: {0}")]
    InvalidEstimator(String),
}

/// Differences between an artifact's column names and [`FEATURE_SCHEMA`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaMismatch {
    pub missing: Vec<String>,
    pub unexpected: Vec<String>,
    pub duplicated: Vec<String>,
}

impl SchemaMismatch {
    fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty() && self.duplicated.is_empty()
    }
}

impl fmt::Display for SchemaMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing [{}]", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected [{}]", self.unexpected.join(", ")));
        }
        if !self.duplicated.is_empty() {
            parts.push(format!("duplicated [{}]", self.duplicated.join(", ")));
        }
        f.write_str(&parts.join("; "))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    Linear(LinearRegressor),
    Forest(ForestRegressor),
}

impl Estimator {
    fn validate(&self, n_features: usize) -> Result<(), String> {
        match self {
            Estimator::Linear(model) => model.validate(n_features),
            Estimator::Forest(model) => model.validate(n_features),
        }
    }

    fn evaluate(&self, row: &[f64]) -> Result<f64, ModelError> {
        match self {
            Estimator::Linear(model) => model.evaluate(row),
            Estimator::Forest(model) => model.evaluate(row),
        }
    }

    /// Short description for terminal output.
    pub fn describe(&self) -> String {
        match self {
            Estimator::Linear(model) => {
                format!("linear regression, {} coefficients", model.coefficients.len())
            }
            Estimator::Forest(model) => format!(
                "regression forest, {} trees, {} nodes",
                model.trees.len(),
                model.node_count()
            ),
        }
    }
}

#[derive(Deserialize)]
struct ArtifactFile {
    format_version: u32,
    name: String,
    feature_names: Vec<String>,
    estimator: Estimator,
}

/// A loaded, validated model. Immutable after construction.
#[derive(Debug)]
pub struct ArtifactModel {
    name: String,
    feature_names: Vec<String>,
    /// `columns[i]` is the schema position feeding artifact input `i`.
    columns: Vec<usize>,
    estimator: Estimator,
}

impl ArtifactModel {
    /// Parses and validates an artifact held in memory.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let file: ArtifactFile = serde_json::from_str(json)?;
        Self::from_file(file)
    }

    fn from_file(file: ArtifactFile) -> Result<Self, LoadError> {
        if file.format_version != SUPPORTED_FORMAT_VERSION {
            return Err(LoadError::UnsupportedVersion {
                found: file.format_version,
                expected: SUPPORTED_FORMAT_VERSION,
            });
        }

        let columns = bind_columns(&file.feature_names).map_err(LoadError::Schema)?;
        file.estimator
            .validate(columns.len())
            .map_err(LoadError::InvalidEstimator)?;

        Ok(Self {
            name: file.name,
            feature_names: file.feature_names,
            columns,
            estimator: file.estimator,
        })
    }

    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    /// Column names in the order the estimator consumes them.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Whether the artifact consumes columns in schema order.
    pub fn is_schema_ordered(&self) -> bool {
        self.columns.iter().enumerate().all(|(idx, column)| idx == *column)
    }
}

impl PredictiveModel for ArtifactModel {
    fn predict(&self, features: &FeatureRecord) -> Result<f64, ModelError> {
        let values = features.as_slice();
        let row: Vec<f64> = self.columns.iter().map(|column| values[*column]).collect();

        let price = self.estimator.evaluate(&row)?;
        if !price.is_finite() {
            return Err(ModelError::NonFinite(price));
        }
        Ok(price)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Reads the artifact at `path`. Called once at startup.
pub fn load_model(path: &Path) -> Result<ArtifactModel, LoadError> {
    debug!("Reading model artifact from {}", path.display());
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let model = ArtifactModel::from_json(&json)?;
    info!(
        "Loaded model '{}' ({})",
        model.name(),
        model.estimator().describe()
    );
    if !model.is_schema_ordered() {
        debug!("Artifact columns are reordered by name");
    }
    Ok(model)
}

/// Maps every artifact column to its position in [`FEATURE_SCHEMA`].
pub fn bind_columns(names: &[String]) -> Result<Vec<usize>, SchemaMismatch> {
    let mut mismatch = SchemaMismatch::default();
    let mut seen = [false; FEATURE_COUNT];
    let mut columns = Vec::with_capacity(names.len());

    for name in names {
        match column_index(name) {
            Some(idx) if seen[idx] => {
                if !mismatch.duplicated.contains(name) {
                    mismatch.duplicated.push(name.clone());
                }
            }
            Some(idx) => {
                seen[idx] = true;
                columns.push(idx);
            }
            None => mismatch.unexpected.push(name.clone()),
        }
    }

    mismatch.missing = FEATURE_SCHEMA
        .iter()
        .zip(seen)
        .filter(|(_, found)| !found)
        .map(|(name, _)| name.to_string())
        .collect();

    if mismatch.is_empty() {
        Ok(columns)
    } else {
        Err(mismatch)
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
