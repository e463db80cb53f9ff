use serde::{Deserialize, Serialize};

use crate::Error;
use crate::color::Rgb;
use crate::curve::{lerp_sequence, quad_bezier_exact, quad_bezier_fast};

/// Parameters for the approximate Bézier-eased gradient: a linear
/// gradient re-weighted per channel by a single control weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierFastParams {
    pub handle: u32,
    pub start: Rgb,
    pub end: Rgb,
    pub count: u32,
    pub control: f64,
}

impl BezierFastParams {
    /// Returns the default black-to-white, 16-color gradient
    /// with an ease-in control weight.
    pub fn new(handle: u32) -> Self {
        Self {
            handle,
            start: Rgb::new(0, 0, 0),
            end: Rgb::new(255, 255, 255),
            count: 16,
            control: 0.25,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.count < 1 {
            return Err(Error::InvalidSamplerConfig {
                message: "count must be at least 1".to_string(),
            });
        }

        if !self.control.is_finite() || !(0.0..=1.0).contains(&self.control) {
            return Err(Error::InvalidSamplerConfig {
                message: format!("control weight must be in [0, 1]: {}", self.control),
            });
        }

        Ok(())
    }

    pub(crate) fn sample(&self) -> Vec<Rgb> {
        lerp_sequence(self.start, self.end, self.count)
            .into_iter()
            .map(|color| Rgb {
                r: quad_bezier_fast(color.r, self.control),
                g: quad_bezier_fast(color.g, self.control),
                b: quad_bezier_fast(color.b, self.control),
            })
            .collect()
    }
}

/// Parameters for the geometrically exact Bézier-eased gradient,
/// with a shared `[x, y]` control point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierQuadParams {
    pub handle: u32,
    pub start: Rgb,
    pub end: Rgb,
    pub count: u32,
    pub control: [f64; 2],
}

impl BezierQuadParams {
    /// Returns the default black-to-white, 16-color gradient
    /// with a shallow ease-in control point.
    pub fn new(handle: u32) -> Self {
        Self {
            handle,
            start: Rgb::new(0, 0, 0),
            end: Rgb::new(255, 255, 255),
            count: 16,
            control: [0.50, 0.15],
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.count < 1 {
            return Err(Error::InvalidSamplerConfig {
                message: "count must be at least 1".to_string(),
            });
        }

        for component in self.control {
            if !component.is_finite() || !(0.0..=1.0).contains(&component) {
                return Err(Error::InvalidSamplerConfig {
                    message: format!("control point components must be in [0, 1]: {:?}", self.control),
                });
            }
        }

        Ok(())
    }

    pub(crate) fn sample(&self) -> Vec<Rgb> {
        let control = (self.control[0], self.control[1]);

        lerp_sequence(self.start, self.end, self.count)
            .into_iter()
            .map(|color| Rgb {
                r: quad_bezier_exact(color.r, control),
                g: quad_bezier_exact(color.g, control),
                b: quad_bezier_exact(color.b, control),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_preserves_gradient_endpoints() {
        let colors = BezierFastParams::new(1).sample();
        assert_eq!(colors.len(), 16);
        assert_eq!(colors[0], Rgb::new(0, 0, 0));
        assert_eq!(colors[15], Rgb::new(255, 255, 255));
    }

    #[test]
    fn exact_preserves_gradient_endpoints() {
        let colors = BezierQuadParams::new(1).sample();
        assert_eq!(colors.len(), 16);
        assert_eq!(colors[0], Rgb::new(0, 0, 0));
        assert_eq!(colors[15], Rgb::new(255, 255, 255));
    }

    #[test]
    fn low_control_weight_darkens_midtones() {
        let linear = lerp_sequence(Rgb::new(0, 0, 0), Rgb::new(255, 255, 255), 16);
        let eased = BezierFastParams::new(1).sample();

        // An ease-in weight below 0.5 pulls every interior
        // gray below its linear position.
        for (eased, linear) in eased.iter().zip(&linear).skip(1).take(14) {
            assert!(eased.r < linear.r);
        }
    }

    #[test]
    fn rejects_out_of_range_controls() {
        let mut fast = BezierFastParams::new(1);
        fast.control = -0.1;
        assert!(fast.validate().is_err());
        fast.control = f64::NAN;
        assert!(fast.validate().is_err());

        let mut quad = BezierQuadParams::new(1);
        quad.control = [0.5, 1.1];
        assert!(quad.validate().is_err());
    }

    #[test]
    fn rejects_zero_counts() {
        let mut fast = BezierFastParams::new(1);
        fast.count = 0;
        assert!(fast.validate().is_err());

        let mut quad = BezierQuadParams::new(1);
        quad.count = 0;
        assert!(quad.validate().is_err());
    }
}
