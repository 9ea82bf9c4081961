// File: crates/chart-core/src/palette.rs
// Summary: Color assignment from a finite palette with wrap/clamp policies.

use crate::error::ChartError;
use crate::types::Color;

/// How item indexes past the palette end are resolved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CyclePolicy {
    /// index % len — the canonical policy.
    #[default]
    Wrap,
    /// min(index, len - 1) — accepted alternative; later items share the last color.
    Clamp,
}

/// Indexed color lookup over a non-empty palette.
#[derive(Clone, Copy, Debug)]
pub struct ColorCycle<'a> {
    colors: &'a [Color],
    policy: CyclePolicy,
}

impl<'a> ColorCycle<'a> {
    /// Rejects an empty palette before any instruction can be emitted.
    pub fn new(colors: &'a [Color], policy: CyclePolicy) -> Result<Self, ChartError> {
        if colors.is_empty() {
            return Err(ChartError::EmptyPalette);
        }
        Ok(Self { colors, policy })
    }

    pub fn color_at(&self, index: usize) -> Color {
        match self.policy {
            CyclePolicy::Wrap => self.colors[index % self.colors.len()],
            CyclePolicy::Clamp => self.colors[index.min(self.colors.len() - 1)],
        }
    }
}
