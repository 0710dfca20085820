//! Lexicon subcommands: show, check, init

use crate::config::UserConfig;
use crate::lexicon::{Lexicon, WEIGHT_RANGE};
use crate::models::Polarity;
use anyhow::{bail, Context, Result};
use std::path::Path;

use super::analyze::resolve_lexicon;
use super::LexiconAction;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

fn polarity_color(polarity: Polarity) -> &'static str {
    match polarity {
        Polarity::Positive => "\x1b[32m",
        Polarity::Negative => "\x1b[31m",
        Polarity::Neutral => "\x1b[90m",
    }
}

pub(crate) fn run(action: LexiconAction) -> Result<()> {
    match action {
        LexiconAction::Show {
            lexicon,
            no_builtin,
        } => {
            let config = UserConfig::load()?;
            let lexicon = resolve_lexicon(lexicon.as_deref(), &config, no_builtin)?;
            show(&lexicon);
            Ok(())
        }
        LexiconAction::Check { path } => check(&path),
        LexiconAction::Init { path } => init(&path),
    }
}

fn show(lexicon: &Lexicon) {
    println!("\n{BOLD}Active lexicon{RESET} ({} words)\n", lexicon.len());
    for (word, weight) in lexicon.entries() {
        let color = polarity_color(Polarity::from_weight(weight));
        println!("  {color}{:>3}{RESET}  {}", format_weight(weight), word);
    }
    println!();
}

fn format_weight(weight: i32) -> String {
    if weight > 0 {
        format!("+{}", weight)
    } else {
        weight.to_string()
    }
}

fn check(path: &Path) -> Result<()> {
    let lexicon = Lexicon::from_path(path)
        .with_context(|| format!("validating lexicon {}", path.display()))?;

    if lexicon.is_empty() {
        bail!("{} contains no words", path.display());
    }

    let out_of_range: Vec<(&str, i32)> = lexicon
        .entries()
        .into_iter()
        .filter(|(_, w)| !WEIGHT_RANGE.contains(w))
        .collect();

    println!("✅ {} is valid ({} words)", path.display(), lexicon.len());
    if !out_of_range.is_empty() {
        println!(
            "\n⚠️  {} word(s) outside the conventional {}..{} range:",
            out_of_range.len(),
            WEIGHT_RANGE.start(),
            WEIGHT_RANGE.end()
        );
        for (word, weight) in out_of_range {
            println!("  {DIM}{} = {}{RESET}", word, weight);
        }
    }
    Ok(())
}

fn init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists, refusing to overwrite", path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    std::fs::write(path, STARTER_LEXICON)
        .with_context(|| format!("writing lexicon to {}", path.display()))?;
    println!("✅ Starter lexicon written to {}", path.display());
    println!("\nUse it with:");
    println!("  sentilex analyze \"some text\" --lexicon {}", path.display());
    Ok(())
}

/// Starter lexicon file, kept loadable by `Lexicon::from_path`
const STARTER_LEXICON: &str = r#"# Sentilex lexicon file
#
# Weights are small signed integers: positive words above 0, negative
# below, stopwords pinned to 0. The conventional range is -3..=3; the
# analyzer accepts any integer but `sentilex lexicon check` warns
# outside that range.

[words]
love = 3
great = 2
okay = 1
the = 0
meh = -1
bad = -2
terrible = -3
"#;
