//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "garden",
    bin_name = "garden",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f331} Declarative project inventory",
    long_about = "Garden grows project instances (plants) from seed template \
                  directories and runs commands across them, driven by a \
                  single declarative map document.",
    after_help = "EXAMPLES:\n\
        \x20 garden grow                       # grow every plant\n\
        \x20 garden grow --plant api-prod      # grow one plant\n\
        \x20 garden grow --zone backend        # grow a zone\n\
        \x20 garden reap --zone backend -- git pull\n\
        \x20 garden view\n\
        \x20 garden completions bash > /usr/share/bash-completion/completions/garden",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Grow plants from their seeds.
    #[command(
        visible_alias = "g",
        about = "Grow plants from their seed templates",
        after_help = "EXAMPLES:\n\
            \x20 garden grow                    # every plant in the map\n\
            \x20 garden grow --plant api-prod\n\
            \x20 garden grow --zone backend"
    )]
    Grow,

    /// Run an external command once per plant.
    #[command(
        visible_alias = "r",
        about = "Run a command in each plant's environment",
        after_help = "EXAMPLES:\n\
            \x20 garden reap -- git status\n\
            \x20 garden reap --plant api-prod -- make deploy\n\
            \x20 garden reap --zone backend -- sh -c 'echo $_GARDEN_PLANT_PATH'\n\n\
            The command sees _GARDEN_PLANT_PATH, _GARDEN_PLANT_ID and one\n\
            _GARDENVAR_<KEY> per resolved variable."
    )]
    Reap(ReapArgs),

    /// Show the plants the map declares.
    #[command(
        visible_alias = "v",
        about = "View declared plants and their variables",
        after_help = "EXAMPLES:\n\
            \x20 garden view\n\
            \x20 garden view --zone backend\n\
            \x20 garden view --plant api-prod --format json"
    )]
    View(ViewArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 garden completions bash > ~/.local/share/bash-completion/completions/garden\n\
            \x20 garden completions zsh  > ~/.zfunc/_garden\n\
            \x20 garden completions fish > ~/.config/fish/completions/garden.fish"
    )]
    Completions(CompletionsArgs),
}

// ── reap ──────────────────────────────────────────────────────────────────────

/// Arguments for `garden reap`.
#[derive(Debug, Args)]
pub struct ReapArgs {
    /// Command to run, given after `--`.  The first word is the program,
    /// the rest are its arguments; nothing goes through a shell.
    #[arg(
        value_name = "COMMAND",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Command and arguments to run per plant (after --)"
    )]
    pub command: Vec<String>,
}

// ── view ──────────────────────────────────────────────────────────────────────

/// Arguments for `garden view`.
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ViewFormat,
}

/// Output format for the `view` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ViewFormat {
    /// Human-readable blocks, one per plant.
    Table,
    /// One plant id per line.
    List,
    /// JSON array of plant objects.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `garden completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
