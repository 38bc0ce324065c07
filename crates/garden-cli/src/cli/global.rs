//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-p`, `-z`,
//! `-v`, `-q`, etc. are available on any invocation without repetition.

use clap::Args;
use std::path::PathBuf;

use garden_core::domain::PlantFilter;

/// Global arguments for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Operate on a single plant.
    ///
    /// Takes precedence over `--zone` when both are given.
    #[arg(
        short = 'p',
        long = "plant",
        global = true,
        value_name = "ID",
        help = "Select a single plant by id"
    )]
    pub plant: Option<String>,

    /// Operate on every plant in a zone.
    #[arg(
        short = 'z',
        long = "zone",
        global = true,
        value_name = "ID",
        help = "Select every plant in a zone"
    )]
    pub zone: Option<String>,

    /// Garden directory to use instead of the discovery probe
    /// (`./.garden`, then `~/.garden`).
    #[arg(
        short = 'g',
        long = "garden-dir",
        global = true,
        value_name = "DIR",
        env = "GARDEN_DIR",
        help = "Garden directory (skips ./.garden and ~/.garden discovery)"
    )]
    pub garden_dir: Option<PathBuf>,

    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>). The falsey parser accepts the
    /// convention's "any non-empty value" form, so `NO_COLOR=1` works.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// Build the plant selection filter from the `--plant` / `--zone` flags.
    pub fn plant_filter(&self) -> PlantFilter {
        PlantFilter::from_options(self.plant.clone(), self.zone.clone())
    }
}
