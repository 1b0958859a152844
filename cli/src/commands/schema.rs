use colored::*;
use lustre_common::config::Config;
use lustre_common::diamond::features::{CARAT_COLUMN, VOLUME_COLUMN};
use lustre_common::{Clarity, Color, Cut, FEATURE_COUNT, FEATURE_SCHEMA, Grade, PredictiveModel};
use lustre_core::ArtifactModel;

use crate::mprint;
use crate::terminal::{colors, print, print::GLOBAL_KEY_WIDTH};

type Detail = (String, ColoredString);

pub fn schema(model: &ArtifactModel, cfg: &Config) -> anyhow::Result<()> {
    let groups: [(&str, Vec<Detail>); 4] = [
        ("numeric", numeric_details()),
        (Cut::FIELD, grade_details::<Cut>()),
        (Color::FIELD, grade_details::<Color>()),
        (Clarity::FIELD, grade_details::<Clarity>()),
    ];

    for (idx, (name, details)) in groups.into_iter().enumerate() {
        print::tree_head(idx, name);
        print::as_tree_one_level(details);
        mprint!();
    }

    print::header("model binding", cfg.quiet);
    GLOBAL_KEY_WIDTH.set(8);
    print::aligned_line("Model", model.name().color(colors::SECONDARY));
    print::aligned_line("Columns", format!("{FEATURE_COUNT}"));
    let binding: ColoredString = if model.is_schema_ordered() {
        "schema order".green()
    } else {
        "reordered by name".yellow()
    };
    print::aligned_line("Binding", binding);

    print::end_of_program(cfg.quiet);
    Ok(())
}

fn numeric_details() -> Vec<Detail> {
    vec![
        column_detail(FEATURE_SCHEMA[CARAT_COLUMN], "copied"),
        column_detail(FEATURE_SCHEMA[VOLUME_COLUMN], "x · y · z"),
    ]
}

/// One line per indicator column, plus the implicit reference value.
fn grade_details<G: Grade>() -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![(
        format!("{}_{}", G::FIELD, G::reference().label()),
        "reference, all zero".color(colors::SEPARATOR),
    )];
    for grade in G::indicators() {
        let column = format!("{}_{}", G::FIELD, grade.label());
        details.push(column_detail(&column, &format!("1 if {} = {}", G::FIELD, grade)));
    }
    details
}

fn column_detail(column: &str, meaning: &str) -> Detail {
    let position: String = FEATURE_SCHEMA
        .iter()
        .position(|name| *name == column)
        .map(|idx| format!("#{idx:<2} "))
        .unwrap_or_default();
    (
        column.to_string(),
        format!("{}{}", position.color(colors::ACCENT), meaning.color(colors::TEXT_DEFAULT)).normal(),
    )
}
