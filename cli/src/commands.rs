pub mod info;
pub mod predict;
pub mod schema;

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use lustre_common::config::{Config, DEFAULT_MODEL_PATH};
use lustre_common::diamond::input::{CARAT_RANGE, DIMENSION_RANGE, check_range};
use lustre_common::{Clarity, Color, Cut, RawInput};

#[derive(Parser)]
#[command(name = "lustre")]
#[command(about = "A diamond price estimator.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Path of the model artifact. A relative path is looked up in the
    /// working directory, then next to the executable
    #[arg(long, global = true, env = "LUSTRE_MODEL", default_value = DEFAULT_MODEL_PATH)]
    pub model: PathBuf,

    /// Print less; repeat for only the outcome
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the version banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the price of a diamond
    #[command(alias = "p")]
    Predict(PredictArgs),
    /// Show the feature schema and how the model binds to it
    #[command(alias = "s")]
    Schema,
    /// Show information about the tool and the loaded model
    #[command(alias = "i")]
    Info,
}

/// The form. Every field defaults to the value the form is pre-filled with.
#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Carat weight, 0 to 50
    #[arg(short, long, default_value_t = RawInput::default().carat, value_parser = parse_carat)]
    pub carat: f64,

    /// Length (x) in mm, 0 to 1000
    #[arg(short = 'x', long = "length", default_value_t = RawInput::default().x, value_parser = parse_dimension)]
    pub x: f64,

    /// Width (y) in mm, 0 to 1000
    #[arg(short = 'y', long = "width", default_value_t = RawInput::default().y, value_parser = parse_dimension)]
    pub y: f64,

    /// Depth (z) in mm, 0 to 1000
    #[arg(short = 'z', long = "depth", default_value_t = RawInput::default().z, value_parser = parse_dimension)]
    pub z: f64,

    /// Cut: Fair, Good, Very Good, Premium, Ideal
    #[arg(long, default_value_t = Cut::Fair)]
    pub cut: Cut,

    /// Color: D (best) to J
    #[arg(long, default_value_t = Color::D)]
    pub color: Color,

    /// Clarity: I1, SI2, SI1, VS2, VS1, VVS2, VVS1, IF
    #[arg(long, default_value_t = Clarity::I1)]
    pub clarity: Clarity,
}

impl PredictArgs {
    pub fn into_input(self) -> RawInput {
        RawInput {
            carat: self.carat,
            x: self.x,
            y: self.y,
            z: self.z,
            cut: self.cut,
            color: self.color,
            clarity: self.clarity,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            model_path: resolve_model_path(&self.model),
            no_banner: self.no_banner,
            quiet: self.quiet,
        }
    }
}

/// Falls back to the executable's directory when a relative path does not
/// exist under the working directory.
fn resolve_model_path(path: &Path) -> PathBuf {
    if path.is_absolute() || path.exists() {
        return path.to_path_buf();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(path)))
        .filter(|candidate| candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

fn parse_carat(s: &str) -> Result<f64, String> {
    parse_bounded("carat", s, &CARAT_RANGE)
}

fn parse_dimension(s: &str) -> Result<f64, String> {
    parse_bounded("dimension", s, &DIMENSION_RANGE)
}

fn parse_bounded(field: &'static str, s: &str, range: &RangeInclusive<f64>) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|e| format!("'{s}' is not a number: {e}"))?;
    check_range(field, value, range).map_err(|e| e.to_string())?;
    Ok(value)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
