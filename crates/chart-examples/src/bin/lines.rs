// File: crates/chart-examples/src/bin/lines.rs
// Summary: Minimal example that renders a smoothed line chart to SVG.

use chart_core::{Chart, ChartItem, ChartKind, Style, SurfaceSize};

fn main() {
    // Build a simple rising-falling series
    let items = vec![
        ChartItem::new(0.0, 0.0),
        ChartItem::new(1.0, 1.2),
        ChartItem::new(2.0, 0.8),
        ChartItem::new(3.0, 1.8),
        ChartItem::new(4.0, 1.4),
        ChartItem::new(5.0, 2.0),
    ];

    let chart = Chart::with_items(ChartKind::Line, items);
    let mut style = Style::default();
    style.point_radius = Some(6.0);

    let surface = SurfaceSize::new(800.0, 500.0);
    let ops = chart.render(&style, surface).expect("render line chart");

    let out = std::path::PathBuf::from("target/out/example_lines.svg");
    chart_render_svg::write_svg(&out, &ops, surface).expect("write svg");
    println!("Wrote {}", out.display());
}
