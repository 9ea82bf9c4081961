// File: crates/chart-examples/src/bin/pie.rs
// Summary: Minimal example that renders a pie chart to SVG.

use chart_core::{Chart, ChartItem, ChartKind, Style, SurfaceSize};

fn main() {
    let items = vec![
        ChartItem::labeled("alpha", 10.0),
        ChartItem::labeled("beta", 20.0),
        ChartItem::labeled("gamma", 30.0),
        ChartItem::labeled("delta", 40.0),
    ];

    let chart = Chart::with_items(ChartKind::Pie, items);
    let style = Style::dark();

    let surface = SurfaceSize::new(500.0, 500.0);
    let ops = chart.render(&style, surface).expect("render pie chart");

    let out = std::path::PathBuf::from("target/out/example_pie.svg");
    chart_render_svg::write_svg(&out, &ops, surface).expect("write svg");
    println!("Wrote {}", out.display());
}
