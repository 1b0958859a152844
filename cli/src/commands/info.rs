use colored::*;
use lustre_common::config::Config;
use lustre_common::{FEATURE_COUNT, PredictiveModel};
use lustre_core::gate::{MAX_CARAT, MAX_VOLUME, USD_TO_SGD};
use lustre_core::load_model;
use tracing::warn;

use crate::terminal::{colors, print, print::GLOBAL_KEY_WIDTH};

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    print::print(&format!(
        "{}",
        "Lustre estimates diamond prices from a pre-trained regression model."
            .color(colors::TEXT_DEFAULT)
    ));
    print::print("");
    GLOBAL_KEY_WIDTH.set(10);

    print_about_the_tool();
    print_pricing_rules(cfg);
    print_model(cfg);

    print::end_of_program(cfg.quiet);
    Ok(())
}

fn print_about_the_tool() {
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line("Model env", "LUSTRE_MODEL");
}

fn print_pricing_rules(cfg: &Config) {
    print::header("pricing rules", cfg.quiet);
    print::aligned_line("Max carat", format!("{MAX_CARAT}"));
    print::aligned_line("Max volume", format!("{MAX_VOLUME} mm³"));
    print::aligned_line("Rate (SGD)", format!("{USD_TO_SGD}"));
}

/// A missing or broken artifact is reported, not fatal, here.
fn print_model(cfg: &Config) {
    print::header("model", cfg.quiet);
    print::aligned_line("Path", cfg.model_path.display().to_string());

    match load_model(&cfg.model_path) {
        Ok(model) => {
            print::aligned_line("Name", model.name().color(colors::SECONDARY));
            print::aligned_line("Estimator", model.estimator().describe());
            print::aligned_line("Features", format!("{FEATURE_COUNT}"));
            let binding: ColoredString = if model.is_schema_ordered() {
                "schema order".green()
            } else {
                "reordered by name".yellow()
            };
            print::aligned_line("Binding", binding);
        }
        Err(e) => {
            print::aligned_line("Status", "unavailable".red().bold());
            warn!("{:#}", anyhow::Error::new(e));
        }
    }
}
