//! Canvas throughput benchmarks.
//!
//! Run with: cargo bench -p btui-canvas --bench canvas_bench
//!
//! The animation loop of a plot clears, redraws a curve, and renders every
//! frame, so all three are measured at typical pane sizes.

use btui_canvas::{Canvas, Plot};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::f64::consts::TAU;
use std::hint::black_box;

const SIZES: [(u16, u16); 3] = [(40, 10), (80, 24), (200, 60)];

// ── Helpers ─────────────────────────────────────────────────────────────

fn filled_canvas(cols: u16, rows: u16) -> Canvas {
    let mut canvas = Canvas::new(cols, rows);
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    canvas.line(0, 0, w - 1, h - 1);
    canvas.line(0, h - 1, w - 1, 0);
    canvas.circle(w / 2, h / 2, h / 3);
    canvas
}

// ── Benchmark Functions ─────────────────────────────────────────────────

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas/draw");
    for (cols, rows) in SIZES {
        let canvas = filled_canvas(cols, rows);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{cols}x{rows}")),
            &canvas,
            |b, canvas| b.iter(|| black_box(canvas.draw())),
        );
    }
    group.finish();
}

fn bench_plot_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas/plot_frame");
    for (cols, rows) in SIZES {
        let mut plot = Plot::new(cols, rows, 0.0, -1.0, TAU, 1.0)
            .unwrap_or_else(|err| panic!("bench plot: {err}"));
        group.bench_function(BenchmarkId::from_parameter(format!("{cols}x{rows}")), |b| {
            b.iter(|| {
                plot.clear();
                plot.line(0.0, 0.0, TAU, 0.0);
                let steps = u32::from(cols) * 2;
                let mut prev = (0.0, 0.0);
                for i in 1..=steps {
                    let x = TAU * f64::from(i) / f64::from(steps);
                    let next = (x, x.sin());
                    plot.line(prev.0, prev.1, next.0, next.1);
                    prev = next;
                }
                black_box(plot.draw())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_draw, bench_plot_frame);
criterion_main!(benches);
