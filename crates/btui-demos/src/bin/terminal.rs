#![forbid(unsafe_code)]

//! Fill the whole terminal with a sine wave.

use std::f64::consts::PI;

use btui::{Plot, Terminal};

fn main() -> btui::Result<()> {
    btui_demos::init_logging();

    let mut terminal = Terminal::new();
    terminal.enter_fullscreen()?;

    let size = terminal.size();
    tracing::info!(columns = size.columns, lines = size.lines, "terminal size");
    // Leave the last line for the trailing newline.
    let rows = size.lines.saturating_sub(1);
    let mut plot = Plot::new(size.columns, rows, 0.0, -1.0, 2.0 * PI, 1.0)?;
    plot.line(0.0, 0.0, 2.0 * PI, 0.0);
    for x in btui_demos::sample(0.0, 2.0 * PI, 0.01) {
        plot.point(x, x.sin());
    }

    terminal.write(&plot.draw())?;
    terminal.write("\n")?;
    terminal.reset()?;
    terminal.flush()?;
    Ok(())
}
