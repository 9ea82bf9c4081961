// File: crates/chart-core/src/instruction.rs
// Summary: Drawing instruction set handed to the host's drawing surface.

use crate::geometry::{Point, Rect};
use crate::path::PathCmd;
use crate::types::Color;

/// Stroke endpoint shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Horizontal anchoring of emitted text relative to its origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Two-stop vertical gradient spanning [start_y, end_y] in surface space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalGradient {
    pub top: Color,
    pub bottom: Color,
    pub start_y: f32,
    pub end_y: f32,
}

/// One resolved drawing primitive. A render call returns an ordered sequence
/// of these; the surface consumes them once, in order, and retains nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Filled wedge of the ellipse inscribed in `bounds`, angles in degrees,
    /// 0 at 3 o'clock, sweeping clockwise.
    FillArc {
        bounds: Rect,
        start_angle: f32,
        sweep_angle: f32,
        color: Color,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    /// Closed region filled with a vertical gradient.
    FillPath {
        path: Vec<PathCmd>,
        gradient: VerticalGradient,
    },
    StrokePath {
        path: Vec<PathCmd>,
        color: Color,
        width: f32,
        cap: LineCap,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    Text {
        text: String,
        origin: Point,
        color: Color,
        size: f32,
        align: TextAlign,
    },
}
