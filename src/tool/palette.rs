//! Generates and prints the configured palette.
//!
//! The `palette` command reads sampler definitions from a
//! `Tint.toml` file (or restores them from a saved sampler file),
//! samples every definition in order, and prints the resulting
//! colors one per line.

use std::io;
use std::path::Path;

use crate::color::Rgb;
use crate::palette::{dedupe, palette};
use crate::sampler::Sampler;
use crate::tool::{DEFAULT_CONFIG_FILE, OutputFormat};

/// Runs the palette command.
///
/// If `saved_file` is given, samplers are restored from it instead
/// of the configuration file. `dedupe_override` and
/// `format_override` take precedence over the config's output
/// options.
pub fn run(
    config_file: Option<&Path>,
    saved_file: Option<&Path>,
    dedupe_override: Option<bool>,
    format_override: Option<OutputFormat>,
) -> io::Result<()> {
    let config_path = config_file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));

    let (samplers, output) = if let Some(saved_path) = saved_file {
        let samplers = load_saved_samplers(saved_path)?;

        // A saved sampler file carries no output options; fall
        // back to the config's options only if a config exists.
        let output = match crate::tool::load_config(config_path) {
            Ok(config) => config.output,
            Err(_) => Default::default(),
        };

        (samplers, output)
    } else {
        let config = crate::tool::load_config(config_path)?;
        let output = config.output.clone();
        let set = crate::tool::sampler_set(&config)?;

        (set.samplers().to_vec(), output)
    };

    tracing::info!("Sampling {} palette generators", samplers.len());

    let mut colors = palette(&samplers)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    tracing::debug!("Sampled {} colors", colors.len());

    if dedupe_override.unwrap_or(output.dedupe) {
        let sampled = colors.len();
        colors = dedupe(&colors);
        if colors.len() < sampled {
            tracing::info!("Removed {} duplicate colors", sampled - colors.len());
        }
    }

    let format = format_override.unwrap_or(output.format);
    for color in &colors {
        println!("{}", format_color(*color, format));
    }

    Ok(())
}

/// Restores serialized samplers from `path`, one per line.
///
/// Blank lines and `#` comment lines are skipped.
pub fn load_saved_samplers(path: &Path) -> io::Result<Vec<Sampler>> {
    let text = std::fs::read_to_string(path)?;

    let mut samplers = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let sampler = Sampler::deserialize(line).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("bad saved sampler in {}: {}", path.display(), e),
            )
        })?;
        samplers.push(sampler);
    }

    Ok(samplers)
}

/// Formats one palette color for printing.
fn format_color(color: Rgb, format: OutputFormat) -> String {
    match format {
        OutputFormat::Hex => color.to_hex(),
        OutputFormat::Rgb => format!("{} {} {}", color.r, color.g, color.b),
    }
}
