// File: crates/demo/src/main.rs
// Summary: Demo loads (x, y) rows from CSV and renders pie, bar, and line charts to SVGs.

use anyhow::{Context, Result};
use chart_core::{Chart, ChartItem, ChartKind, Style, SurfaceSize};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept a CSV path from the CLI or fall back to a built-in sample series
    let items = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            if !path.exists() {
                anyhow::bail!("file not found: {}", path.display());
            }
            println!("Using input file: {}", path.display());
            load_items_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => sample_items(),
    };

    println!("Loaded {} data points", items.len());
    if items.is_empty() {
        anyhow::bail!("no data points loaded - check headers/delimiter.");
    }
    for item in items.iter().filter(|it| it.label.is_some()) {
        if let Some(label) = &item.label {
            println!("  {} = {}", label, item.y);
        }
    }

    let style = Style::default();
    let surface = SurfaceSize::new(900.0, 560.0);

    for (kind, suffix) in [
        (ChartKind::Pie, "pie"),
        (ChartKind::Bar, "bars"),
        (ChartKind::Line, "line"),
    ] {
        let chart = Chart::with_items(kind, items.clone());
        let ops = chart
            .render(&style, surface)
            .with_context(|| format!("rendering {suffix} chart"))?;
        let out = out_name_with(suffix);
        chart_render_svg::write_svg(&out, &ops, surface)?;
        println!("Wrote {} ({} instructions)", out.display(), ops.len());
    }

    Ok(())
}

/// Sample series matching the shape of the chart examples.
fn sample_items() -> Vec<ChartItem> {
    vec![
        ChartItem::new(0.10, 0.010),
        ChartItem::new(0.20, 0.020),
        ChartItem::new(0.50, 0.070),
        ChartItem::new(0.70, 0.050),
        ChartItem::new(1.00, 0.070),
        ChartItem::new(1.10, 0.050),
    ]
}

/// Produce output file name like target/out/chart_<suffix>.svg
fn out_name_with(suffix: &str) -> PathBuf {
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(format!("chart_{suffix}.svg"))
}

/// Load (x, y) or (label, value) rows into chart items.
fn load_items_csv(path: &Path) -> Result<Vec<ChartItem>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_x = idx(&["x", "time", "index"]);
    let i_y = idx(&["y", "value", "v"]);
    let i_label = idx(&["label", "name", "category"]);

    if i_y.is_none() {
        println!("Warning: no y/value column found; using the last column.");
    }

    let mut out = Vec::new();
    let mut row_index = 0_f64;
    for rec in rdr.records() {
        let rec = rec?;
        let parse = |i: usize| -> Option<f64> {
            rec.get(i).and_then(|s| s.trim().parse::<f64>().ok())
        };

        let y = match i_y {
            Some(ix) => parse(ix),
            None => rec.len().checked_sub(1).and_then(parse),
        };
        let Some(y) = y else { continue };

        let x = i_x.and_then(parse).unwrap_or(row_index);
        row_index += 1.0;

        let mut item = ChartItem::new(x, y);
        if let Some(ix) = i_label {
            if let Some(label) = rec.get(ix) {
                if !label.trim().is_empty() {
                    item.label = Some(label.trim().to_string());
                }
            }
        }
        out.push(item);
    }
    Ok(out)
}
