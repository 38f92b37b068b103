#![forbid(unsafe_code)]

//! One period of a sine wave over its X axis.

use std::f64::consts::PI;

use btui::Plot;

fn main() -> btui::Result<()> {
    btui_demos::init_logging();

    let mut plot = Plot::new(40, 10, 0.0, -1.0, 2.0 * PI, 1.0)?;
    plot.line(0.0, 0.0, 2.0 * PI, 0.0);
    for x in btui_demos::sample(0.0, 2.0 * PI, 0.1) {
        plot.point(x, x.sin());
    }

    println!("{}", plot.draw());
    Ok(())
}
