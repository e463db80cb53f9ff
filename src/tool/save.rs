//! Encodes the configured samplers for later restoration.
//!
//! The `save` command builds the samplers declared in a
//! `Tint.toml` file and writes their serialized text forms, one
//! per line. A saved file restores the exact same palette via
//! `tint palette --saved <FILE>`, even if the configuration
//! changes afterwards.

use std::io;
use std::io::Write;
use std::path::Path;

use crate::tool::DEFAULT_CONFIG_FILE;

/// Runs the save command, writing to `out_file` or stdout.
pub fn run(config_file: Option<&Path>, out_file: Option<&Path>) -> io::Result<()> {
    let config_path = config_file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
    let config = crate::tool::load_config(config_path)?;
    let set = crate::tool::sampler_set(&config)?;

    let mut lines = String::new();
    for sampler in set.samplers() {
        lines.push_str(&sampler.serialize());
        lines.push('\n');
    }

    match out_file {
        Some(path) => {
            std::fs::write(path, &lines)?;
            tracing::info!("Saved {} samplers to {}", set.len(), path.display());
        }
        None => {
            io::stdout().write_all(lines.as_bytes())?;
        }
    }

    Ok(())
}
