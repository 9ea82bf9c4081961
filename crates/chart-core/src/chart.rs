// File: crates/chart-core/src/chart.rs
// Summary: Chart model and the instruction-emitting pipeline for pie, bar, and line layouts.

use crate::error::{ChartError, ChartResult};
use crate::geometry::{centered_square, Point, Rect};
use crate::instruction::{DrawOp, TextAlign, VerticalGradient};
use crate::palette::ColorCycle;
use crate::path::{baseline_fill_path, smooth_path};
use crate::scale::{value_range, XScale, YScale};
use crate::style::Style;
use crate::ticks::{format_value, ticks};
use crate::types::SurfaceSize;

/// Alpha on the gradient's top stop; the bottom stop fades to fully transparent.
const GRADIENT_TOP_ALPHA: u8 = 204;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

/// One data point: a numeric (x, y) pair with an optional category label.
/// Pie and Bar read only `y` (and carry `label` through for host legends);
/// Line reads both coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartItem {
    pub x: f64,
    pub y: f64,
    pub label: Option<String>,
}

impl ChartItem {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    /// Categorical item: a labeled value, with no meaningful X coordinate.
    pub fn labeled(label: impl Into<String>, value: f64) -> Self {
        Self { x: 0.0, y: value, label: Some(label.into()) }
    }
}

/// One chart per render call: a kind selector plus the ordered data.
/// Holds no other state; re-rendering is a fresh, independent call.
pub struct Chart {
    pub kind: ChartKind,
    pub items: Vec<ChartItem>,
}

impl Chart {
    pub fn new(kind: ChartKind) -> Self {
        Self { kind, items: Vec::new() }
    }

    pub fn with_items(kind: ChartKind, items: Vec<ChartItem>) -> Self {
        Self { kind, items }
    }

    pub fn add_item(&mut self, item: ChartItem) {
        self.items.push(item);
    }

    /// Produce the drawing instructions for this chart on `surface`.
    ///
    /// All validation happens up front: on error, zero instructions are
    /// emitted (never a partial sequence).
    pub fn render(&self, style: &Style, surface: SurfaceSize) -> ChartResult<Vec<DrawOp>> {
        if self.items.is_empty() {
            return Err(ChartError::EmptyData);
        }
        match self.kind {
            ChartKind::Pie => draw_pie_chart(&self.items, style, surface),
            ChartKind::Bar => draw_bar_chart(&self.items, style, surface),
            ChartKind::Line => draw_line_chart(&self.items, style, surface),
        }
    }
}

// ---- layout strategies ------------------------------------------------------

fn draw_pie_chart(items: &[ChartItem], style: &Style, surface: SurfaceSize) -> ChartResult<Vec<DrawOp>> {
    let cycle = ColorCycle::new(&style.palette, style.cycle_policy)?;
    let total: f64 = items.iter().map(|it| it.y).sum();
    let bounds = centered_square(surface);

    let mut ops = Vec::with_capacity(items.len());
    let mut start_angle = 0.0f32;
    for (index, item) in items.iter().enumerate() {
        // Zero total degrades to zero-sweep wedges, not an error.
        let sweep_angle = if total == 0.0 { 0.0 } else { (item.y / total * 360.0) as f32 };
        ops.push(DrawOp::FillArc {
            bounds,
            start_angle,
            sweep_angle,
            color: cycle.color_at(index),
        });
        start_angle += sweep_angle;
    }
    Ok(ops)
}

fn draw_bar_chart(items: &[ChartItem], style: &Style, surface: SurfaceSize) -> ChartResult<Vec<DrawOp>> {
    let cycle = ColorCycle::new(&style.palette, style.cycle_policy)?;
    let max_value = items.iter().map(|it| it.y).fold(f64::NEG_INFINITY, f64::max);
    // One bar width of gap between bars, by construction.
    let bar_width = surface.width / (items.len() as f32 * 2.0);

    let mut ops = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let bar_height = if max_value == 0.0 {
            0.0
        } else {
            (item.y / max_value) as f32 * surface.height
        };
        let left = index as f32 * 2.0 * bar_width;
        let top = surface.height - bar_height;
        ops.push(DrawOp::FillRect {
            rect: Rect::from_ltwh(left, top, bar_width, bar_height),
            color: cycle.color_at(index),
        });
    }
    Ok(ops)
}

fn draw_line_chart(items: &[ChartItem], style: &Style, surface: SurfaceSize) -> ChartResult<Vec<DrawOp>> {
    if items.len() < 2 {
        return Err(ChartError::InsufficientPoints { needed: 2, got: items.len() });
    }
    let (x_min, x_max) = value_range(items.iter().map(|it| it.x)).ok_or(ChartError::EmptyData)?;
    let (y_min, y_max) = value_range(items.iter().map(|it| it.y)).ok_or(ChartError::EmptyData)?;

    let plot = Rect::from_ltrb(
        style.insets.start,
        style.insets.top,
        surface.width - style.insets.end,
        surface.height - style.insets.bottom,
    );
    let xs = XScale::new(plot.left, plot.right, x_min, x_max);
    let ys = YScale::new(plot.top, plot.bottom, y_min, y_max);
    let points: Vec<Point> = items
        .iter()
        .map(|it| Point::new(xs.to_px(it.x), ys.to_px(it.y)))
        .collect();

    let mut ops = Vec::new();

    ops.push(DrawOp::FillRect {
        rect: Rect::from_ltwh(0.0, 0.0, surface.width, surface.height),
        color: style.background,
    });

    // Fill under the curve, closed against the plot baseline.
    let (grad_top, grad_bottom) = style.gradient;
    ops.push(DrawOp::FillPath {
        path: baseline_fill_path(&points, plot.bottom),
        gradient: VerticalGradient {
            top: grad_top.with_alpha(GRADIENT_TOP_ALPHA),
            bottom: grad_bottom.with_alpha(0),
            start_y: plot.top,
            end_y: plot.bottom,
        },
    });

    ops.push(DrawOp::StrokePath {
        path: smooth_path(&points),
        color: style.line_stroke,
        width: style.stroke_width,
        cap: style.stroke_cap,
    });

    if let Some(radius) = style.point_radius {
        for p in &points {
            ops.push(DrawOp::FillCircle { center: *p, radius, color: style.line_stroke });
        }
    }

    ops.push(DrawOp::Line {
        from: Point::new(plot.left, plot.top),
        to: Point::new(plot.left, plot.bottom),
        color: style.axis_y_color,
        width: style.axis_stroke_width,
    });
    ops.push(DrawOp::Line {
        from: Point::new(plot.left, plot.bottom),
        to: Point::new(surface.width, plot.bottom),
        color: style.axis_x_color,
        width: style.axis_stroke_width,
    });

    for tick in ticks(y_min, y_max, style.y_steps, plot.bottom, plot.top) {
        ops.push(DrawOp::Text {
            text: format_value(tick.value, style.label_precision),
            origin: Point::new(plot.left, tick.px),
            color: style.label_y_color,
            size: style.label_size,
            align: TextAlign::Center,
        });
    }
    for tick in ticks(x_min, x_max, style.x_steps, plot.left, plot.right) {
        ops.push(DrawOp::Text {
            text: format_value(tick.value, style.label_precision),
            origin: Point::new(tick.px, surface.height),
            color: style.label_x_color,
            size: style.label_size,
            align: TextAlign::Center,
        });
    }

    Ok(ops)
}
