// File: crates/chart-render-svg/src/lib.rs
// Summary: Reference drawing surface; serializes instruction lists into SVG documents.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chart_core::{Color, DrawOp, LineCap, PathCmd, Rect, SurfaceSize, TextAlign, VerticalGradient};

/// Serialize an instruction sequence into a standalone SVG document.
pub fn svg_document(ops: &[DrawOp], surface: SurfaceSize) -> String {
    let mut defs = String::new();
    let mut body = String::new();
    let mut gradient_count = 0usize;

    for op in ops {
        match op {
            DrawOp::FillArc { bounds, start_angle, sweep_angle, color } => {
                push_arc(&mut body, bounds, *start_angle, *sweep_angle, *color);
            }
            DrawOp::FillRect { rect, color } => {
                let (x, y, w, h) = rect_xywh(rect);
                let _ = writeln!(
                    body,
                    r#"  <rect x="{x}" y="{y}" width="{w}" height="{h}" fill="{}"{}/>"#,
                    css_color(*color),
                    opacity_attr("fill-opacity", *color),
                );
            }
            DrawOp::FillPath { path, gradient } => {
                let id = format!("grad{gradient_count}");
                gradient_count += 1;
                push_gradient_def(&mut defs, &id, gradient);
                let _ = writeln!(body, r#"  <path d="{}" fill="url(#{id})"/>"#, path_data(path));
            }
            DrawOp::StrokePath { path, color, width, cap } => {
                let _ = writeln!(
                    body,
                    r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{width}" stroke-linecap="{}"{}/>"#,
                    path_data(path),
                    css_color(*color),
                    cap_name(*cap),
                    opacity_attr("stroke-opacity", *color),
                );
            }
            DrawOp::Line { from, to, color, width } => {
                let _ = writeln!(
                    body,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{width}"{}/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    css_color(*color),
                    opacity_attr("stroke-opacity", *color),
                );
            }
            DrawOp::FillCircle { center, radius, color } => {
                let _ = writeln!(
                    body,
                    r#"  <circle cx="{}" cy="{}" r="{radius}" fill="{}"{}/>"#,
                    center.x,
                    center.y,
                    css_color(*color),
                    opacity_attr("fill-opacity", *color),
                );
            }
            DrawOp::Text { text, origin, color, size, align } => {
                let _ = writeln!(
                    body,
                    r#"  <text x="{}" y="{}" fill="{}" font-size="{size}" text-anchor="{}">{}</text>"#,
                    origin.x,
                    origin.y,
                    css_color(*color),
                    anchor_name(*align),
                    escape_text(text),
                );
            }
        }
    }

    let mut doc = String::new();
    let _ = writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = surface.width,
        h = surface.height,
    );
    if !defs.is_empty() {
        let _ = writeln!(doc, "  <defs>");
        doc.push_str(&defs);
        let _ = writeln!(doc, "  </defs>");
    }
    doc.push_str(&body);
    doc.push_str("</svg>\n");
    doc
}

/// Render the instruction sequence to an SVG file, creating parent directories.
pub fn write_svg(path: impl AsRef<Path>, ops: &[DrawOp], surface: SurfaceSize) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output directory for '{}'", path.display()))?;
    }
    std::fs::write(path, svg_document(ops, surface))
        .with_context(|| format!("write SVG '{}'", path.display()))?;
    Ok(())
}

// ---- serialization helpers --------------------------------------------------

fn css_color(c: Color) -> String {
    format!("rgb({},{},{})", c.r, c.g, c.b)
}

/// Opacity attribute for a translucent color; empty for opaque ones.
fn opacity_attr(attr: &str, c: Color) -> String {
    if c.a == 255 {
        String::new()
    } else {
        format!(r#" {attr}="{:.3}""#, c.a as f32 / 255.0)
    }
}

fn cap_name(cap: LineCap) -> &'static str {
    match cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
        LineCap::Square => "square",
    }
}

fn anchor_name(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn rect_xywh(rect: &Rect) -> (f32, f32, f32, f32) {
    // Normalize so a rect built with a negative extent still serializes validly.
    let x = rect.left.min(rect.right);
    let y = rect.top.min(rect.bottom);
    (x, y, rect.width().abs(), rect.height().abs())
}

fn path_data(cmds: &[PathCmd]) -> String {
    let mut d = String::new();
    for cmd in cmds {
        if !d.is_empty() {
            d.push(' ');
        }
        match cmd {
            PathCmd::MoveTo(p) => {
                let _ = write!(d, "M {} {}", p.x, p.y);
            }
            PathCmd::LineTo(p) => {
                let _ = write!(d, "L {} {}", p.x, p.y);
            }
            PathCmd::CubicTo { c1, c2, to } => {
                let _ = write!(d, "C {} {} {} {} {} {}", c1.x, c1.y, c2.x, c2.y, to.x, to.y);
            }
            PathCmd::Close => d.push('Z'),
        }
    }
    d
}

fn push_gradient_def(defs: &mut String, id: &str, g: &VerticalGradient) {
    let _ = writeln!(
        defs,
        r#"    <linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="0" y1="{}" x2="0" y2="{}">"#,
        g.start_y, g.end_y,
    );
    let _ = writeln!(
        defs,
        r#"      <stop offset="0" stop-color="{}" stop-opacity="{:.3}"/>"#,
        css_color(g.top),
        g.top.a as f32 / 255.0,
    );
    let _ = writeln!(
        defs,
        r#"      <stop offset="1" stop-color="{}" stop-opacity="{:.3}"/>"#,
        css_color(g.bottom),
        g.bottom.a as f32 / 255.0,
    );
    let _ = writeln!(defs, "    </linearGradient>");
}

/// Wedge for a filled arc. Angles are degrees, 0 at 3 o'clock, sweeping
/// clockwise in screen space (pixel Y grows downward, so increasing angle
/// maps to SVG sweep-flag 1).
fn push_arc(body: &mut String, bounds: &Rect, start_angle: f32, sweep_angle: f32, color: Color) {
    if sweep_angle == 0.0 {
        return; // zero-sweep wedge has no visible geometry
    }
    let center = bounds.center();
    let rx = bounds.width() / 2.0;
    let ry = bounds.height() / 2.0;

    if sweep_angle >= 360.0 {
        let _ = writeln!(
            body,
            r#"  <ellipse cx="{}" cy="{}" rx="{rx}" ry="{ry}" fill="{}"{}/>"#,
            center.x,
            center.y,
            css_color(color),
            opacity_attr("fill-opacity", color),
        );
        return;
    }

    let (sx, sy) = arc_point(center.x, center.y, rx, ry, start_angle);
    let (ex, ey) = arc_point(center.x, center.y, rx, ry, start_angle + sweep_angle);
    let large_arc = if sweep_angle > 180.0 { 1 } else { 0 };
    let _ = writeln!(
        body,
        r#"  <path d="M {} {} L {sx} {sy} A {rx} {ry} 0 {large_arc} 1 {ex} {ey} Z" fill="{}"{}/>"#,
        center.x,
        center.y,
        css_color(color),
        opacity_attr("fill-opacity", color),
    );
}

fn arc_point(cx: f32, cy: f32, rx: f32, ry: f32, angle_deg: f32) -> (f32, f32) {
    let rad = angle_deg.to_radians();
    (cx + rx * rad.cos(), cy + ry * rad.sin())
}
