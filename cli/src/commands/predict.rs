use std::sync::Arc;

use anyhow::Context;
use colored::*;
use lustre_common::config::Config;
use lustre_common::diamond::quote::RARE_DIAMOND_MESSAGE;
use lustre_common::{PredictionResult, PriceQuote, RawInput};
use lustre_core::{ArtifactModel, PricingService};

use crate::mprint;
use crate::terminal::{colors, print, print::GLOBAL_KEY_WIDTH};

pub fn predict(raw: RawInput, model: Arc<ArtifactModel>, cfg: &Config) -> anyhow::Result<()> {
    let service = PricingService::new(model);

    GLOBAL_KEY_WIDTH.set(8);
    if cfg.quiet < 2 {
        print_input(&raw);
    }

    let result = service.quote(&raw).context("price estimation failed")?;

    match result {
        PredictionResult::Rejected(_) => print_rejection(cfg),
        PredictionResult::Priced(quote) => print_quote(&quote, cfg),
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}

fn print_input(raw: &RawInput) {
    print::aligned_line("Carat", format!("{}", raw.carat));
    print::aligned_line("Length", format!("{} mm", raw.x));
    print::aligned_line("Width", format!("{} mm", raw.y));
    print::aligned_line("Depth", format!("{} mm", raw.z));
    print::aligned_line("Volume", format!("{:.2} mm³", raw.volume()));
    print::aligned_line("Cut", raw.cut.label_colored());
    print::aligned_line("Color", raw.color.label_colored());
    print::aligned_line("Clarity", raw.clarity.label_colored());
}

fn print_rejection(cfg: &Config) {
    if cfg.quiet > 1 {
        mprint!(RARE_DIAMOND_MESSAGE);
        return;
    }
    mprint!();
    print::alert_box(RARE_DIAMOND_MESSAGE);
}

fn print_quote(quote: &PriceQuote, cfg: &Config) {
    if cfg.quiet > 1 {
        for (currency, amount) in quote.display_pairs() {
            mprint!(&format!("{currency}: {amount}"));
        }
        return;
    }

    print::header("estimated price", cfg.quiet);
    if cfg.quiet > 0 {
        mprint!();
    }
    for (currency, amount) in quote.display_pairs() {
        print::aligned_line(currency, amount.color(colors::PRICE).bold());
    }
}

trait LabelColored {
    fn label_colored(self) -> ColoredString;
}

impl<G: lustre_common::Grade> LabelColored for G {
    fn label_colored(self) -> ColoredString {
        self.label().color(colors::SECONDARY)
    }
}
