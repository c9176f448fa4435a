//! Segment sampling for the lookahead collision scan.

use bevy::prelude::*;

/// Sample the segment from `start` to `end` inclusive, ordered from `start`
/// toward `end`, with at most `spacing` between consecutive samples.
///
/// Deterministic and finite: the segment is divided into evenly sized steps,
/// so both endpoints are always yielded exactly (a zero-length segment
/// yields `start` once).
pub fn sample_line(start: Vec3, end: Vec3, spacing: f32) -> impl Iterator<Item = Vec3> {
    let span = end - start;
    let steps = if spacing > 0.0 {
        (span.length() / spacing).ceil() as u32
    } else {
        0
    };
    let step = if steps > 0 {
        span / steps as f32
    } else {
        Vec3::ZERO
    };
    (0..=steps).map(move |i| start + step * i as f32)
}
