use tint::color::{Hsv, Rgb};
use tint::palette::{SamplerSet, dedupe, palette};
use tint::sampler::{
    BezierFastParams, BezierQuadParams, GradientParams, HsvGridParams, Sampler,
};
use tint::tool::palette::load_saved_samplers;

/// Builds a sampler set exercising every sampler kind with
/// non-default parameters.
fn customized_set() -> SamplerSet {
    let mut set = SamplerSet::new();

    let mut linear = GradientParams::new(set.next_handle());
    linear.start = Rgb::new(16, 32, 64);
    linear.end = Rgb::new(240, 120, 60);
    linear.count = 5;
    set.add(Sampler::Linear(linear));

    let mut srgb = GradientParams::new(set.next_handle());
    srgb.count = 9;
    set.add(Sampler::LinearSrgb(srgb));

    let mut fast = BezierFastParams::new(set.next_handle());
    fast.control = 0.65;
    set.add(Sampler::BezierFast(fast));

    let mut quad = BezierQuadParams::new(set.next_handle());
    quad.control = [0.3, 0.9];
    quad.count = 11;
    set.add(Sampler::BezierQuad(quad));

    let mut grid = HsvGridParams::new(set.next_handle());
    grid.start = Hsv::new(10.0, 95.0, 90.0);
    grid.end = Hsv::new(350.0, 40.0, 35.0);
    grid.hue_count = 5;
    grid.sat_count = 2;
    grid.val_count = 2;
    set.add(Sampler::HsvGrid(grid));

    set
}

#[test_log::test]
fn restores_saved_palettes() {
    let set = customized_set();
    let expected = set.palette().expect("sampling a valid set succeeds");

    // Save the set the way the save command does: one serialized
    // sampler per line.
    let saved: String = set
        .samplers()
        .iter()
        .map(|s| s.serialize() + "\n")
        .collect();

    let temp = std::env::temp_dir().join("tint_restores_saved_palettes.txt");
    std::fs::write(&temp, &saved).expect("failed to write saved samplers");
    let restored = load_saved_samplers(&temp).expect("failed to restore samplers");
    std::fs::remove_file(&temp).expect("failed to clean up saved samplers");

    // The restored samplers are parameter-equal, carry the same
    // handles, and regenerate the exact same palette.
    assert_eq!(restored, set.samplers());
    assert_eq!(
        restored.iter().map(Sampler::handle).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
    assert_eq!(palette(&restored).expect("sampling restored set succeeds"), expected);
}

#[test_log::test]
fn deduped_palettes_preserve_first_occurrences() {
    let mut set = SamplerSet::new();

    // Two gradients that share their black endpoint.
    let mut first = GradientParams::new(set.next_handle());
    first.end = Rgb::new(0, 0, 255);
    first.count = 3;
    set.add(Sampler::Linear(first));

    let mut second = GradientParams::new(set.next_handle());
    second.end = Rgb::new(255, 0, 0);
    second.count = 3;
    set.add(Sampler::Linear(second));

    let colors = set.palette().expect("sampling a valid set succeeds");
    assert_eq!(colors.len(), 6);

    let cleaned = dedupe(&colors);
    assert_eq!(cleaned.len(), 5);
    // The shared black endpoint survives only in its first position.
    assert_eq!(cleaned[0], Rgb::new(0, 0, 0));
    assert!(!cleaned[1..].contains(&Rgb::new(0, 0, 0)));
}
