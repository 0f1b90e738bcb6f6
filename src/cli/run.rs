use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::args::FindArgs;
use crate::{
    config::{CONFIG_FILE_NAME, default_config_json, load_config},
    core::{FinderContext, FinderOptions, UsageRecord},
    issues::ScanWarning,
    rules::unused::{UnusedKeysReport, check_unused_keys_report},
};

/// Everything the report layer needs from one finder run.
#[derive(Debug)]
pub struct RunResult {
    pub report: UnusedKeysReport,
    /// Used keys with their records, sorted by key.
    pub usages: Vec<(String, UsageRecord)>,
    pub warnings: Vec<ScanWarning>,
}

/// Merge CLI arguments with the config file and run the finder.
///
/// Priority for every setting: CLI arguments > `.unused-i18n.json` > defaults.
/// The config file is searched from the root directory upwards.
pub fn run(args: &FindArgs) -> Result<RunResult> {
    let root = args.root.clone().unwrap_or_else(|| PathBuf::from("."));

    let config_result = load_config(&root)?;
    if args.verbose {
        match &config_result.path {
            Some(path) => eprintln!("Note: Using configuration from {}", path.display()),
            None => eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            ),
        }
    }

    let Some(keys_path) = args.keys.clone().or_else(|| config_result.keys_path()) else {
        bail!(
            "No key file given. Pass {} or set \"keys\" in {}",
            "--keys <PATH>".cyan(),
            CONFIG_FILE_NAME
        );
    };

    let mut config = config_result.config;
    if !args.file_formats.is_empty() {
        config.file_formats = args.file_formats.clone();
    }
    config.ignores.extend(args.ignores.iter().cloned());
    config.validate()?;

    let options = FinderOptions {
        root,
        keys_path,
        extensions: config.file_formats,
        ignores: config.ignores,
        verbose: args.verbose,
    };

    let ctx = FinderContext::new(options)?;
    let report = check_unused_keys_report(&ctx);

    let mut usages: Vec<(String, UsageRecord)> = if args.usages {
        ctx.usages()
            .iter()
            .map(|(key, record)| (key.clone(), record.clone()))
            .collect()
    } else {
        Vec::new()
    };
    usages.sort_by(|a, b| a.0.cmp(&b.0));

    let warnings = ctx.warnings().into_iter().cloned().collect();

    Ok(RunResult {
        report,
        usages,
        warnings,
    })
}

/// Write a default `.unused-i18n.json` into `dir`.
pub fn init(dir: &Path) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", config_path.display());
    }

    let json = default_config_json()?;
    fs::write(&config_path, format!("{}\n", json))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}
