//! An ordered collection of samplers and the palette
//! aggregated from their outputs.

use crate::Error;
use crate::color::Rgb;
use crate::sampler::Sampler;

/// An ordered collection of samplers, plus the accumulator that
/// mints their correlation handles.
///
/// Handles are unique and stable for the lifetime of a sampler;
/// they never affect color output.
#[derive(Debug, Default, Clone)]
pub struct SamplerSet {
    samplers: Vec<Sampler>,
    accumulator: u32,
}

impl SamplerSet {
    /// Returns an empty sampler set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints the next correlation handle.
    pub fn next_handle(&mut self) -> u32 {
        self.accumulator += 1;
        self.accumulator
    }

    /// Appends `sampler` to the end of the set.
    pub fn add(&mut self, sampler: Sampler) {
        self.samplers.push(sampler);
    }

    /// Removes and returns the sampler with the given handle,
    /// if the set contains one.
    pub fn remove(&mut self, handle: u32) -> Option<Sampler> {
        let index = self.samplers.iter().position(|s| s.handle() == handle)?;
        Some(self.samplers.remove(index))
    }

    /// Returns the sampler with the given handle, if the set
    /// contains one.
    pub fn get(&self, handle: u32) -> Option<&Sampler> {
        self.samplers.iter().find(|s| s.handle() == handle)
    }

    /// Returns the samplers in registration order.
    pub fn samplers(&self) -> &[Sampler] {
        &self.samplers
    }

    pub fn len(&self) -> usize {
        self.samplers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samplers.is_empty()
    }

    /// Removes every sampler and restarts the handle accumulator.
    pub fn reset(&mut self) {
        self.samplers.clear();
        self.accumulator = 0;
    }

    /// Generates the palette of every sampler in the set.
    pub fn palette(&self) -> Result<Vec<Rgb>, Error> {
        palette(&self.samplers)
    }
}

/// Generates the concatenated palette of `samplers`, in
/// registration order and each sampler's own generation order.
///
/// Pure with respect to the samplers' parameters: repeated calls
/// yield identical palettes until a parameter changes. Duplicate
/// colors are kept; see [dedupe].
pub fn palette(samplers: &[Sampler]) -> Result<Vec<Rgb>, Error> {
    let mut colors = Vec::new();

    for sampler in samplers {
        colors.extend(sampler.sample()?);
    }

    Ok(colors)
}

/// Returns `colors` with every repeated color removed, keeping
/// the first occurrence of each distinct color and the relative
/// order of first occurrences.
pub fn dedupe(colors: &[Rgb]) -> Vec<Rgb> {
    let mut cleaned: Vec<Rgb> = Vec::new();

    for color in colors {
        if !cleaned.contains(color) {
            cleaned.push(*color);
        }
    }

    cleaned
}
