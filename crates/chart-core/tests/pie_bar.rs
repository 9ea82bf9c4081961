// File: crates/chart-core/tests/pie_bar.rs
// Purpose: Validate pie wedge angles and bar layout, including zero-value degeneracy.

use chart_core::{Chart, ChartItem, ChartKind, DrawOp, Style, SurfaceSize};

fn values(kind: ChartKind, ys: &[f64]) -> Chart {
    Chart::with_items(kind, ys.iter().map(|&y| ChartItem::new(0.0, y)).collect())
}

fn pie_wedges(ops: &[DrawOp]) -> Vec<(f32, f32)> {
    ops.iter()
        .map(|op| match op {
            DrawOp::FillArc { start_angle, sweep_angle, .. } => (*start_angle, *sweep_angle),
            other => panic!("pie chart emits only arcs, got {other:?}"),
        })
        .collect()
}

#[test]
fn pie_reference_scenario() {
    let chart = values(ChartKind::Pie, &[10.0, 20.0, 30.0, 40.0]);
    let ops = chart.render(&Style::default(), SurfaceSize::new(400.0, 400.0)).unwrap();
    let wedges = pie_wedges(&ops);
    let expect = [(0.0, 36.0), (36.0, 72.0), (108.0, 108.0), (216.0, 144.0)];
    assert_eq!(wedges.len(), expect.len());
    for ((start, sweep), (want_start, want_sweep)) in wedges.iter().zip(expect) {
        assert!((start - want_start).abs() < 1e-3, "start {start} vs {want_start}");
        assert!((sweep - want_sweep).abs() < 1e-3, "sweep {sweep} vs {want_sweep}");
    }
}

#[test]
fn pie_sweeps_sum_to_full_circle() {
    let chart = values(ChartKind::Pie, &[0.3, 1.9, 2.2, 0.01, 5.5]);
    let ops = chart.render(&Style::default(), SurfaceSize::new(300.0, 300.0)).unwrap();
    let total: f32 = pie_wedges(&ops).iter().map(|(_, sweep)| sweep).sum();
    assert!((total - 360.0).abs() < 1e-3, "sum {total}");
}

#[test]
fn pie_zero_total_degrades_to_zero_sweeps() {
    let chart = values(ChartKind::Pie, &[0.0, 0.0, 0.0]);
    let ops = chart.render(&Style::default(), SurfaceSize::new(300.0, 300.0)).unwrap();
    let wedges = pie_wedges(&ops);
    assert_eq!(wedges.len(), 3);
    for (start, sweep) in wedges {
        assert_eq!(start, 0.0);
        assert_eq!(sweep, 0.0);
    }
}

#[test]
fn pie_bounds_are_the_centered_square() {
    let chart = values(ChartKind::Pie, &[1.0, 2.0]);
    let ops = chart.render(&Style::default(), SurfaceSize::new(200.0, 100.0)).unwrap();
    match &ops[0] {
        DrawOp::FillArc { bounds, .. } => {
            assert_eq!(bounds.left, 50.0);
            assert_eq!(bounds.top, 0.0);
            assert_eq!(bounds.right, 150.0);
            assert_eq!(bounds.bottom, 100.0);
        }
        other => panic!("expected arc, got {other:?}"),
    }
}

#[test]
fn pie_colors_cycle_through_the_palette() {
    let style = Style::default(); // two palette colors
    let chart = values(ChartKind::Pie, &[1.0, 1.0, 1.0]);
    let ops = chart.render(&style, SurfaceSize::new(300.0, 300.0)).unwrap();
    let colors: Vec<_> = ops
        .iter()
        .map(|op| match op {
            DrawOp::FillArc { color, .. } => *color,
            other => panic!("expected arc, got {other:?}"),
        })
        .collect();
    assert_eq!(colors[0], style.palette[0]);
    assert_eq!(colors[1], style.palette[1]);
    assert_eq!(colors[2], style.palette[0]);
}

#[test]
fn bar_heights_are_proportional_to_values() {
    let chart = values(ChartKind::Bar, &[1.0, 2.0, 4.0]);
    let surface = SurfaceSize::new(600.0, 100.0);
    let ops = chart.render(&Style::default(), surface).unwrap();
    assert_eq!(ops.len(), 3);

    // bar width is surface / (2 * count); one bar of gap between bars
    let bar_width = 600.0 / 6.0;
    let want_heights = [25.0, 50.0, 100.0];
    for (i, op) in ops.iter().enumerate() {
        match op {
            DrawOp::FillRect { rect, .. } => {
                assert_eq!(rect.left, i as f32 * 2.0 * bar_width, "bar {i} left edge");
                assert_eq!(rect.width(), bar_width, "bar {i} width");
                assert!((rect.height() - want_heights[i]).abs() < 1e-4, "bar {i} height");
                assert!((rect.bottom - 100.0).abs() < 1e-4, "bar {i} sits on the floor");
            }
            other => panic!("bar chart emits only rects, got {other:?}"),
        }
    }
}

#[test]
fn tallest_bar_fills_the_surface_height() {
    let chart = values(ChartKind::Bar, &[3.0, 9.0]);
    let surface = SurfaceSize::new(400.0, 250.0);
    let ops = chart.render(&Style::default(), surface).unwrap();
    match &ops[1] {
        DrawOp::FillRect { rect, .. } => {
            assert_eq!(rect.top, 0.0);
            assert_eq!(rect.height(), 250.0);
        }
        other => panic!("expected rect, got {other:?}"),
    }
}

#[test]
fn all_zero_bars_have_zero_height() {
    let chart = values(ChartKind::Bar, &[0.0, 0.0, 0.0]);
    let surface = SurfaceSize::new(300.0, 200.0);
    let ops = chart.render(&Style::default(), surface).unwrap();
    assert_eq!(ops.len(), 3);
    for op in &ops {
        match op {
            DrawOp::FillRect { rect, .. } => {
                assert_eq!(rect.height(), 0.0);
                assert_eq!(rect.top, 200.0);
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }
}
