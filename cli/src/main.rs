mod commands;
mod terminal;

use std::sync::Arc;

use anyhow::Context;
use commands::{CommandLine, Commands, info, predict, schema};
use lustre_common::config::Config;
use lustre_core::{ArtifactModel, load_model};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(cfg.quiet)?;
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Predict(args) => {
            let model = load(&cfg)?;
            print::header("diamond price estimate", cfg.quiet);
            predict::predict(args.into_input(), model, &cfg)
        }
        Commands::Schema => {
            let model = load(&cfg)?;
            print::header("feature schema", cfg.quiet);
            schema::schema(&model, &cfg)
        }
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(&cfg)
        }
    }
}

/// Loads the model artifact. Happens once per process.
fn load(cfg: &Config) -> anyhow::Result<Arc<ArtifactModel>> {
    let model = load_model(&cfg.model_path)
        .with_context(|| format!("could not load model from {}", cfg.model_path.display()))?;
    Ok(Arc::new(model))
}
