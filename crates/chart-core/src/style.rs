// File: crates/chart-core/src/style.rs
// Summary: Explicit per-render style configuration with light/dark presets.

use crate::instruction::LineCap;
use crate::palette::CyclePolicy;
use crate::types::{Color, Insets};

/// Resolved style bundle passed into every render call.
/// There is no process-wide default state; callers override fields as needed.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Per-item colors for pie wedges and bars.
    pub palette: Vec<Color>,
    pub cycle_policy: CyclePolicy,
    pub background: Color,
    pub line_stroke: Color,
    /// Top/bottom stops of the fill gradient under the line curve.
    pub gradient: (Color, Color),
    pub stroke_width: f32,
    pub stroke_cap: LineCap,
    pub axis_x_color: Color,
    pub axis_y_color: Color,
    pub label_x_color: Color,
    pub label_y_color: Color,
    pub axis_stroke_width: f32,
    pub label_size: f32,
    /// Fixed-point decimals on tick labels.
    pub label_precision: usize,
    pub x_steps: u32,
    pub y_steps: u32,
    pub insets: Insets,
    /// Radius for per-point markers on the line chart; None draws no markers.
    pub point_radius: Option<f32>,
}

impl Style {
    pub fn light() -> Self {
        Self {
            palette: vec![Color::from_rgb(0xBB, 0x86, 0xFC), Color::from_rgb(0x37, 0x00, 0xB3)],
            cycle_policy: CyclePolicy::Wrap,
            background: Color::WHITE,
            line_stroke: Color::from_rgb(0xBB, 0x86, 0xFC),
            gradient: (Color::from_rgb(0xBB, 0x86, 0xFC), Color::from_rgb(0x37, 0x00, 0xB3)),
            stroke_width: 8.0,
            stroke_cap: LineCap::Round,
            axis_x_color: Color::LIGHT_GRAY,
            axis_y_color: Color::LIGHT_GRAY,
            label_x_color: Color::BLACK,
            label_y_color: Color::BLACK,
            axis_stroke_width: 2.0,
            label_size: 30.0,
            label_precision: 2,
            x_steps: 5,
            y_steps: 5,
            insets: Insets::default(),
            point_radius: None,
        }
    }

    pub fn dark() -> Self {
        Self {
            palette: vec![
                Color::from_rgb(64, 160, 255),
                Color::from_rgb(40, 200, 120),
                Color::from_rgb(220, 80, 80),
                Color::from_rgb(255, 230, 70),
            ],
            cycle_policy: CyclePolicy::Wrap,
            background: Color::from_rgb(18, 18, 20),
            line_stroke: Color::from_rgb(64, 160, 255),
            gradient: (Color::from_rgb(64, 160, 255), Color::from_rgb(24, 24, 80)),
            stroke_width: 8.0,
            stroke_cap: LineCap::Round,
            axis_x_color: Color::from_rgb(180, 180, 190),
            axis_y_color: Color::from_rgb(180, 180, 190),
            label_x_color: Color::from_rgb(235, 235, 245),
            label_y_color: Color::from_rgb(235, 235, 245),
            axis_stroke_width: 2.0,
            label_size: 30.0,
            label_precision: 2,
            x_steps: 5,
            y_steps: 5,
            insets: Insets::default(),
            point_radius: None,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::light()
    }
}
