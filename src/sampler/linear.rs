use serde::{Deserialize, Serialize};

use crate::Error;
use crate::color::Rgb;
use crate::curve::{lerp_sequence, srgb_gamma};

/// Parameters shared by the two linear gradient sampler kinds:
/// a start color, an end color, and the number of colors to
/// generate between them (inclusive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradientParams {
    pub handle: u32,
    pub start: Rgb,
    pub end: Rgb,
    pub count: u32,
}

impl GradientParams {
    /// Returns the default black-to-white, 16-color gradient.
    pub fn new(handle: u32) -> Self {
        Self {
            handle,
            start: Rgb::new(0, 0, 0),
            end: Rgb::new(255, 255, 255),
            count: 16,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.count < 1 {
            return Err(Error::InvalidSamplerConfig {
                message: "count must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Samples the gradient with plain linear interpolation.
    pub(crate) fn sample_linear(&self) -> Vec<Rgb> {
        lerp_sequence(self.start, self.end, self.count)
    }

    /// Samples the gradient, then gamma-weights every channel so
    /// the distribution matches sRGB perception.
    pub(crate) fn sample_srgb(&self) -> Vec<Rgb> {
        lerp_sequence(self.start, self.end, self.count)
            .into_iter()
            .map(|color| Rgb {
                r: srgb_gamma(color.r),
                g: srgb_gamma(color.g),
                b: srgb_gamma(color.b),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_span_black_to_white() {
        let params = GradientParams::new(1);
        let colors = params.sample_linear();

        assert_eq!(colors.len(), 16);
        assert_eq!(colors[0], Rgb::new(0, 0, 0));
        assert_eq!(colors[15], Rgb::new(255, 255, 255));
    }

    #[test]
    fn rejects_zero_count() {
        let mut params = GradientParams::new(1);
        params.count = 0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn single_count_yields_start() {
        let mut params = GradientParams::new(1);
        params.start = Rgb::new(9, 9, 9);
        params.count = 1;

        assert_eq!(params.sample_linear(), vec![Rgb::new(9, 9, 9)]);
        // The gamma-weighted variant still applies its curve to
        // the one resulting color.
        assert_eq!(
            params.sample_srgb(),
            vec![Rgb::new(srgb_gamma(9), srgb_gamma(9), srgb_gamma(9))]
        );
    }
}
