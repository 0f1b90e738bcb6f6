//! CLI argument definitions using clap.
//!
//! Running without a subcommand searches for unused keys. The only
//! subcommand is `init`, which writes a default configuration file.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Find unused i18n keys in your project in order to clean up your i18n file.
///
/// Searches all files of the given formats (default .html and .ts) under the
/// root folder and its subfolders for the top-level keys of a JSON file, and
/// lists the keys that are not used anywhere.
///
/// Example: `unused-i18n -r ./project -k en.json -f .html -f .ts`
#[derive(Debug, Parser)]
#[command(author, version, about, long_about, args_conflicts_with_subcommands = true)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub find: FindArgs,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FindArgs {
    /// Path to root directory of project (default: current directory)
    #[arg(short = 'r', long = "root", visible_alias = "path-to-root")]
    pub root: Option<PathBuf>,

    /// Path to JSON i18n file (overrides config file)
    #[arg(
        short = 'k',
        long = "keys",
        visible_alias = "path-to-keys",
        env = "UNUSED_I18N_KEYS"
    )]
    pub keys: Option<PathBuf>,

    /// File format to search through, with leading dot (e.g. -f .html -f .ts)
    #[arg(short = 'f', long = "file-format", value_name = "EXT")]
    pub file_formats: Vec<String>,

    /// Glob pattern or path (relative to root) to skip; adds to config ignores
    #[arg(short = 'i', long = "ignore", value_name = "PATTERN")]
    pub ignores: Vec<String>,

    /// Also list where every used key appears
    #[arg(long)]
    pub usages: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 when unused keys are found
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .unused-i18n.json configuration file in the root directory
    Init {
        /// Directory to create the config file in (default: current directory)
        #[arg(short = 'r', long = "root")]
        root: Option<PathBuf>,
    },
}
