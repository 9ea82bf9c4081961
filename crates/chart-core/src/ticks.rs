// File: crates/chart-core/src/ticks.rs
// Summary: Axis tick layout and fixed-point label formatting.

use crate::scale::Value;

/// One axis tick: the data-space value and its surface-space position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    pub value: Value,
    pub px: f32,
}

/// Evenly spaced ticks for [min, max] over the pixel span [px_start, px_end].
///
/// Produces `steps + 1` entries with value_i = min + (max - min) / steps * i,
/// so the first and last ticks land exactly on the range endpoints. A step
/// count of 0 is treated as 1. A collapsed range puts every tick at px_start,
/// matching the scale's degenerate-range policy.
pub fn ticks(min: Value, max: Value, steps: u32, px_start: f32, px_end: f32) -> Vec<Tick> {
    let n = steps.max(1);
    let span = max - min;
    (0..=n)
        .map(|i| {
            let t = if span == 0.0 { 0.0 } else { i as f64 / n as f64 };
            Tick {
                value: min + span / n as f64 * i as f64,
                px: px_start + t as f32 * (px_end - px_start),
            }
        })
        .collect()
}

/// Fixed-point tick label, e.g. 1.5 at precision 2 renders "1.50".
pub fn format_value(value: Value, precision: usize) -> String {
    format!("{value:.precision$}")
}
