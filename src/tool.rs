//! This module contains implementations for the command-line tools.

pub mod palette;
pub mod save;

use std::io;
use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

use crate::color::{Hsv, Rgb};
use crate::palette::SamplerSet;
use crate::sampler::{
    BezierFastParams, BezierQuadParams, GradientParams, HsvGridParams, Sampler,
};

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = "Tint.toml";

/// Default configuration file contents.
pub const DEFAULT_CONFIG_TOML: &str = r##"# Tint palette configuration
# See: https://github.com/caer/tint

[output]
dedupe = true
format = "hex"

# A neutral ramp from black to white.
[[samplers]]
kind = "linear"
start = "#000000"
end = "#FFFFFF"
count = 16

# Eight hues around the wheel, crossed with three
# saturation and three value bands.
[[samplers]]
kind = "hsv"
start = { h = 0.0, s = 100.0, v = 100.0 }
end = { h = 360.0, s = 30.0, v = 30.0 }
hue_count = 8
sat_count = 3
val_count = 3
"##;

/// A loaded `Tint.toml` configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub samplers: Vec<SamplerConfig>,
}

/// Output options in a [Config].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub dedupe: bool,
    #[serde(default)]
    pub format: OutputFormat,
}

/// How each palette color is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Uppercase hex, like `#FF8000`.
    #[default]
    Hex,

    /// Decimal channel triples, like `255 128 0`.
    Rgb,
}

/// A single sampler definition in a [Config], tagged by the
/// same kind tags the serialization contract uses.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind")]
pub enum SamplerConfig {
    #[serde(rename = "linear")]
    Linear {
        start: String,
        end: String,
        #[serde(default = "default_count")]
        count: u32,
    },

    #[serde(rename = "linear-srgb")]
    LinearSrgb {
        start: String,
        end: String,
        #[serde(default = "default_count")]
        count: u32,
    },

    #[serde(rename = "bezier-fast")]
    BezierFast {
        start: String,
        end: String,
        #[serde(default = "default_count")]
        count: u32,
        control: f64,
    },

    #[serde(rename = "bezier-quad")]
    BezierQuad {
        start: String,
        end: String,
        #[serde(default = "default_count")]
        count: u32,
        control: [f64; 2],
    },

    #[serde(rename = "hsv")]
    Hsv {
        start: Hsv,
        end: Hsv,
        hue_count: u32,
        sat_count: u32,
        val_count: u32,
    },
}

/// Default gradient color count.
fn default_count() -> u32 {
    16
}

impl SamplerConfig {
    /// Builds the sampler this definition describes, correlated
    /// to the configuration by `handle`.
    pub fn build(&self, handle: u32) -> Result<Sampler, crate::Error> {
        let sampler = match self {
            SamplerConfig::Linear { start, end, count } => Sampler::Linear(GradientParams {
                handle,
                start: Rgb::from_hex(start)?,
                end: Rgb::from_hex(end)?,
                count: *count,
            }),
            SamplerConfig::LinearSrgb { start, end, count } => {
                Sampler::LinearSrgb(GradientParams {
                    handle,
                    start: Rgb::from_hex(start)?,
                    end: Rgb::from_hex(end)?,
                    count: *count,
                })
            }
            SamplerConfig::BezierFast { start, end, count, control } => {
                Sampler::BezierFast(BezierFastParams {
                    handle,
                    start: Rgb::from_hex(start)?,
                    end: Rgb::from_hex(end)?,
                    count: *count,
                    control: *control,
                })
            }
            SamplerConfig::BezierQuad { start, end, count, control } => {
                Sampler::BezierQuad(BezierQuadParams {
                    handle,
                    start: Rgb::from_hex(start)?,
                    end: Rgb::from_hex(end)?,
                    count: *count,
                    control: *control,
                })
            }
            SamplerConfig::Hsv { start, end, hue_count, sat_count, val_count } => {
                Sampler::HsvGrid(HsvGridParams {
                    handle,
                    start: *start,
                    end: *end,
                    hue_count: *hue_count,
                    sat_count: *sat_count,
                    val_count: *val_count,
                })
            }
        };

        sampler.validate()?;

        Ok(sampler)
    }
}

/// Loads and validates a `Tint.toml` configuration file.
///
/// Reads the file at `config_path`, then delegates to
/// [load_config_from_str].
pub fn load_config(config_path: &Path) -> io::Result<Config> {
    let toml_str = std::fs::read_to_string(config_path)?;
    load_config_from_str(&toml_str)
}

/// Parses and validates a `Tint.toml` configuration string.
fn load_config_from_str(toml_str: &str) -> io::Result<Config> {
    toml::from_str(toml_str)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("invalid TOML: {}", e)))
}

/// Builds the configured samplers into a [SamplerSet], minting
/// a handle for each in declaration order.
pub fn sampler_set(config: &Config) -> io::Result<SamplerSet> {
    let mut set = SamplerSet::new();

    for sampler_config in &config.samplers {
        let handle = set.next_handle();
        let sampler = sampler_config.build(handle).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("bad sampler definition {}: {}", handle, e),
            )
        })?;
        set.add(sampler);
    }

    Ok(set)
}

/// Creates a default configuration file in the current directory
/// if one doesn't exist.
pub fn init() -> io::Result<()> {
    let config_path = Path::new(DEFAULT_CONFIG_FILE);

    if config_path.try_exists()? {
        tracing::warn!("{} already exists", DEFAULT_CONFIG_FILE);
        return Ok(());
    }

    std::fs::write(config_path, DEFAULT_CONFIG_TOML)?;
    tracing::info!("Created {}", DEFAULT_CONFIG_FILE);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_config() {
        let config = load_config_from_str(DEFAULT_CONFIG_TOML).unwrap();

        assert!(config.output.dedupe);
        assert_eq!(config.output.format, OutputFormat::Hex);
        assert_eq!(config.samplers.len(), 2);
    }

    #[test]
    fn builds_samplers_with_sequential_handles() {
        let config = load_config_from_str(DEFAULT_CONFIG_TOML).unwrap();
        let set = sampler_set(&config).unwrap();

        let handles: Vec<_> = set.samplers().iter().map(Sampler::handle).collect();
        assert_eq!(handles, vec![1, 2]);
        assert_eq!(set.samplers()[0].kind(), "linear");
        assert_eq!(set.samplers()[1].kind(), "hsv");
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = load_config_from_str("").unwrap();

        assert!(!config.output.dedupe);
        assert_eq!(config.output.format, OutputFormat::Hex);
        assert!(config.samplers.is_empty());
    }

    #[test]
    fn defaults_gradient_counts() {
        let toml = r##"
[[samplers]]
kind = "bezier-fast"
start = "#000000"
end = "#FF0000"
control = 0.25
"##;
        let config = load_config_from_str(toml).unwrap();
        let set = sampler_set(&config).unwrap();

        match &set.samplers()[0] {
            Sampler::BezierFast(params) => assert_eq!(params.count, 16),
            other => panic!("expected bezier-fast, got {}", other.kind()),
        }
    }

    #[test]
    fn rejects_invalid_toml() {
        assert!(load_config_from_str("samplers = ").is_err());
    }

    #[test]
    fn rejects_unknown_sampler_kind() {
        let toml = r#"
[[samplers]]
kind = "spline"
"#;
        assert!(load_config_from_str(toml).is_err());
    }

    #[test]
    fn rejects_bad_hex_colors() {
        let toml = r##"
[[samplers]]
kind = "linear"
start = "#XYZ123"
end = "#FFFFFF"
"##;
        let config = load_config_from_str(toml).unwrap();
        assert!(sampler_set(&config).is_err());
    }

    #[test]
    fn rejects_unusable_parameters() {
        let toml = r##"
[[samplers]]
kind = "bezier-quad"
start = "#000000"
end = "#FFFFFF"
control = [0.5, 1.5]
"##;
        let config = load_config_from_str(toml).unwrap();
        assert!(sampler_set(&config).is_err());
    }
}
