use serde::{Deserialize, Serialize};

use crate::Error;
use crate::color::{Hsv, Rgb, hsv_to_rgb};

/// Parameters for the HSV grid sweep: each axis steps linearly
/// from its start to its end coordinate over its own count, and
/// every grid cell becomes one color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HsvGridParams {
    pub handle: u32,
    pub start: Hsv,
    pub end: Hsv,
    pub hue_count: u32,
    pub sat_count: u32,
    pub val_count: u32,
}

impl HsvGridParams {
    /// Returns the default sweep: eight hues around the full
    /// wheel, crossed with three saturation and three value bands
    /// fading toward a muted dark.
    pub fn new(handle: u32) -> Self {
        Self {
            handle,
            start: Hsv::new(0.0, 100.0, 100.0),
            end: Hsv::new(360.0, 30.0, 30.0),
            hue_count: 8,
            sat_count: 3,
            val_count: 3,
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.hue_count < 1 || self.sat_count < 1 || self.val_count < 1 {
            return Err(Error::InvalidSamplerConfig {
                message: "every axis count must be at least 1".to_string(),
            });
        }

        for endpoint in [&self.start, &self.end] {
            if !endpoint.h.is_finite() || !(0.0..=360.0).contains(&endpoint.h) {
                return Err(Error::InvalidSamplerConfig {
                    message: format!("hue endpoints must be in [0, 360]: {:?}", endpoint),
                });
            }
            if !(0.0..=100.0).contains(&endpoint.s) || !(0.0..=100.0).contains(&endpoint.v) {
                return Err(Error::InvalidSamplerConfig {
                    message: format!(
                        "saturation and value endpoints must be in [0, 100]: {:?}",
                        endpoint
                    ),
                });
            }
        }

        Ok(())
    }

    /// Sweeps the grid in saturation-major, then value, then hue
    /// order, rounding each coordinate to the nearest whole
    /// degree or percent before conversion.
    pub(crate) fn sample(&self) -> Result<Vec<Rgb>, Error> {
        let h_step = axis_step(self.start.h, self.end.h, self.hue_count);
        let s_step = axis_step(self.start.s, self.end.s, self.sat_count);
        let v_step = axis_step(self.start.v, self.end.v, self.val_count);

        let cells =
            self.sat_count as usize * self.val_count as usize * self.hue_count as usize;
        let mut colors = Vec::with_capacity(cells);
        for s_index in 0..self.sat_count {
            let s = (self.start.s + s_step * f64::from(s_index)).round();

            for v_index in 0..self.val_count {
                let v = (self.start.v + v_step * f64::from(v_index)).round();

                for h_index in 0..self.hue_count {
                    let h = (self.start.h + h_step * f64::from(h_index)).round();

                    colors.push(hsv_to_rgb(Hsv::new(h, s, v))?);
                }
            }
        }

        Ok(colors)
    }
}

/// Returns the per-step increment for one grid axis. An axis with
/// a single band takes no steps and stays pinned at its start.
fn axis_step(start: f64, end: f64, count: u32) -> f64 {
    if count <= 1 {
        0.0
    } else {
        (end - start) / f64::from(count - 1)
    }
}
