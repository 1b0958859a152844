use std::path::PathBuf;

/// Where the model artifact is looked up when nothing else is given.
///
/// Relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "models/diamond_price.json";

pub struct Config {
    /// Path of the serialized price model.
    ///
    /// The artifact is read once at startup and never reloaded.
    pub model_path: PathBuf,
    /// Suppresses the version banner.
    pub no_banner: bool,
    /// Verbosity reduction. `0` prints everything, `1` drops headers,
    /// `2` prints only the outcome.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            no_banner: false,
            quiet: 0,
        }
    }
}
