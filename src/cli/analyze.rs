//! Analyze command: gather input texts, score them, render the results

use crate::config::UserConfig;
use crate::lexicon::Lexicon;
use crate::models::{AnalysisResult, Sentiment};
use crate::reporters;
use crate::scoring::{Analyzer, ThresholdPolicy};
use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub(crate) struct AnalyzeOptions {
    pub text: Vec<String>,
    pub stdin: bool,
    pub file: Option<PathBuf>,
    pub format: String,
    pub output: Option<PathBuf>,
    pub lexicon: Option<PathBuf>,
    pub no_builtin: bool,
    pub policy: Option<String>,
    pub no_emoji: bool,
    pub fail_on: Option<String>,
    pub explain: bool,
}

pub(crate) fn run(opts: AnalyzeOptions) -> Result<()> {
    let config = UserConfig::load()?;
    let lexicon = resolve_lexicon(opts.lexicon.as_deref(), &config, opts.no_builtin)?;
    let policy = resolve_policy(opts.policy.as_deref(), &config)?;
    let emoji = !opts.no_emoji && config.emoji();

    let texts = gather_texts(&opts)?;
    debug!(texts = texts.len(), %policy, lexicon_words = lexicon.len(), "starting analysis");

    let analyzer = Analyzer::new(lexicon, policy);
    let results: Vec<AnalysisResult> = texts.iter().map(|t| analyzer.analyze(t)).collect();

    let mut rendered = reporters::report(&results, &opts.format, emoji)?;
    if opts.explain {
        if opts.format == "text" {
            for result in &results {
                rendered.push_str(&reporters::render_explain(result, emoji));
            }
        } else {
            warn!("--explain only applies to the text format, ignoring");
        }
    }

    match &opts.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("writing report to {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    if let Some(fail_on) = &opts.fail_on {
        let sentinel: Sentiment = fail_on
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;
        if results.iter().any(|r| r.sentiment == sentinel) {
            debug!(%sentinel, "fail-on sentiment matched, exiting nonzero");
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Collect the texts to analyze: --file (one per non-empty line), --stdin
/// (all of standard input as one text), or the positional args joined.
fn gather_texts(opts: &AnalyzeOptions) -> Result<Vec<String>> {
    if let Some(path) = &opts.file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading input file {}", path.display()))?;
        let lines: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_owned)
            .collect();
        if lines.is_empty() {
            bail!("input file {} has no non-empty lines", path.display());
        }
        return Ok(lines);
    }

    if opts.stdin {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("reading standard input")?;
        return Ok(vec![buffer]);
    }

    if opts.text.is_empty() {
        bail!("no text to analyze; pass TEXT, --stdin, or --file <path>");
    }
    Ok(vec![opts.text.join(" ")])
}

/// Build the active lexicon from the built-in table and an optional custom
/// file (flag wins over config). With `no_builtin` the custom file stands
/// alone.
pub(crate) fn resolve_lexicon(
    flag: Option<&Path>,
    config: &UserConfig,
    no_builtin: bool,
) -> Result<Lexicon> {
    let custom_path = flag.or(config.lexicon_path().map(PathBuf::as_path));
    let custom = match custom_path {
        Some(path) => Some(
            Lexicon::from_path(path)
                .with_context(|| format!("loading lexicon {}", path.display()))?,
        ),
        None => None,
    };

    match (no_builtin, custom) {
        (true, Some(custom)) => Ok(custom),
        (true, None) => bail!("--no-builtin requires a custom lexicon (--lexicon or config)"),
        (false, Some(custom)) => Ok(Lexicon::built_in().merge(custom)),
        (false, None) => Ok(Lexicon::built_in()),
    }
}

/// Resolve the threshold policy: flag > config/env > default
pub(crate) fn resolve_policy(
    flag: Option<&str>,
    config: &UserConfig,
) -> Result<ThresholdPolicy> {
    match flag {
        Some(s) => s.parse().map_err(|e: String| anyhow::anyhow!(e)),
        None => Ok(config.policy()),
    }
}
