use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tint::tool;
use tint::tool::OutputFormat;

#[derive(Parser)]
#[command(name = "tint", version, about = "A command-line palette generator for creatives.")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = tool::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a starter Tint.toml in the current directory.
    Init,

    /// Generate the configured palette and print it, one color per line.
    Palette {
        /// Restore samplers from a saved sampler file instead of the config.
        #[arg(long)]
        saved: Option<PathBuf>,

        /// Remove duplicate colors, overriding the config.
        #[arg(long, conflicts_with = "no_dedupe")]
        dedupe: bool,

        /// Keep duplicate colors, overriding the config.
        #[arg(long)]
        no_dedupe: bool,

        /// Output format for each color, overriding the config.
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Encode the configured samplers as text for later restoration.
    Save {
        /// Write the serialized samplers to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Init => tool::init(),
        Command::Palette { saved, dedupe, no_dedupe, format } => {
            let dedupe_override = if dedupe {
                Some(true)
            } else if no_dedupe {
                Some(false)
            } else {
                None
            };

            tool::palette::run(Some(&cli.config), saved.as_deref(), dedupe_override, format)
        }
        Command::Save { out } => tool::save::run(Some(&cli.config), out.as_deref()),
    }
}
