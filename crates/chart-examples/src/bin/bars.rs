// File: crates/chart-examples/src/bin/bars.rs
// Summary: Minimal example that renders a bar chart to SVG.

use chart_core::{Chart, ChartItem, ChartKind, Style, SurfaceSize};

fn main() {
    let items = vec![
        ChartItem::labeled("mon", 3.0),
        ChartItem::labeled("tue", 7.0),
        ChartItem::labeled("wed", 5.0),
        ChartItem::labeled("thu", 9.0),
        ChartItem::labeled("fri", 4.0),
    ];

    let chart = Chart::with_items(ChartKind::Bar, items);
    let style = Style::default();

    let surface = SurfaceSize::new(800.0, 400.0);
    let ops = chart.render(&style, surface).expect("render bar chart");

    let out = std::path::PathBuf::from("target/out/example_bars.svg");
    chart_render_svg::write_svg(&out, &ops, surface).expect("write svg");
    println!("Wrote {}", out.display());
}
