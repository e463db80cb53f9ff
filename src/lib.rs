use std::fmt;

pub mod color;
pub mod curve;
pub mod palette;
pub mod sampler;
pub mod tool;

pub use color::{Hsv, Rgb};
pub use palette::SamplerSet;
pub use sampler::Sampler;

/// An error that occurs while decoding colors
/// or sampling palettes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A color was encoded as a malformed hex string,
    /// or carried out-of-range HSV coordinates.
    InvalidColorFormat { message: String },

    /// A sampler was configured with unusable parameters,
    /// like a zero count or an out-of-range control point.
    InvalidSamplerConfig { message: String },

    /// A serialized sampler carried a kind tag that doesn't
    /// match any known sampler kind.
    UnknownSamplerKind { kind: String },

    /// A serialized sampler's parameter payload could not
    /// be decoded into the shape its kind tag requires.
    MalformedSamplerPayload { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidColorFormat { message } => {
                write!(f, "invalid color format: {}", message)
            }
            Error::InvalidSamplerConfig { message } => {
                write!(f, "invalid sampler config: {}", message)
            }
            Error::UnknownSamplerKind { kind } => {
                write!(f, "unknown sampler kind: {}", kind)
            }
            Error::MalformedSamplerPayload { message } => {
                write!(f, "malformed sampler payload: {}", message)
            }
        }
    }
}

impl std::error::Error for Error {}
