// File: crates/chart-core/src/scale.rs
// Summary: Data-space to surface-space scale transforms for the X and Y axes.

/// Data-space value.
pub type Value = f64;

/// Normalized position of `v` within [min, max].
/// A collapsed range (max == min) maps every value to 0 exactly.
#[inline]
pub fn ratio(v: Value, min: Value, max: Value) -> f64 {
    let span = max - min;
    if span == 0.0 { 0.0 } else { (v - min) / span }
}

/// Horizontal scale mapping [vmin, vmax] to [left_px, right_px].
#[derive(Clone, Copy, Debug)]
pub struct XScale {
    pub left_px: f32,
    pub right_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl XScale {
    pub fn new(left_px: f32, right_px: f32, vmin: Value, vmax: Value) -> Self {
        Self { left_px, right_px, vmin, vmax }
    }
    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        self.left_px + ratio(v, self.vmin, self.vmax) as f32 * (self.right_px - self.left_px)
    }
}

/// Vertical scale mapping [vmin, vmax] to [bottom_px, top_px].
/// Pixel Y grows downward, so vmin lands at bottom_px and vmax at top_px.
#[derive(Clone, Copy, Debug)]
pub struct YScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl YScale {
    pub fn new(top_px: f32, bottom_px: f32, vmin: Value, vmax: Value) -> Self {
        Self { top_px, bottom_px, vmin, vmax }
    }
    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        self.bottom_px - ratio(v, self.vmin, self.vmax) as f32 * (self.bottom_px - self.top_px)
    }
}

/// Min/max over a sequence of values; None when the sequence is empty.
pub fn value_range<I: IntoIterator<Item = Value>>(values: I) -> Option<(Value, Value)> {
    let mut it = values.into_iter();
    let first = it.next()?;
    let (mut min, mut max) = (first, first);
    for v in it {
        min = min.min(v);
        max = max.max(v);
    }
    Some((min, max))
}
