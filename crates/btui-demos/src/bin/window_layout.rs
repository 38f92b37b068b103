#![forbid(unsafe_code)]

//! Header, footer, and a body split into a log column and a random plot.

use std::io::{self, Write};

use btui::{Justify, Pane, Plot, SplitDirective, Window};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn main() -> btui::Result<()> {
    btui_demos::init_logging();

    let screen = Window::new(0, 0, 50, 25);
    let mut rows = screen
        .hsplit([1u16.into(), SplitDirective::Remaining, 1u16.into()])?
        .into_iter();
    let (Some(mut header), Some(body), Some(mut footer)) = (rows.next(), rows.next(), rows.next())
    else {
        return Err(io::Error::other("expected three panes").into());
    };

    // 20% left, the rest goes to an implicit second pane.
    let mut columns = body.vsplit([SplitDirective::Ratio(0.2)])?.into_iter();
    let (Some(mut left), Some(mut right)) = (columns.next(), columns.next()) else {
        return Err(io::Error::other("expected two columns").into());
    };

    header.append_line("--- Header ---", Justify::Center)?;
    footer.append_line("--- Footer ---", Justify::Center)?;

    let mut rng = SmallRng::from_os_rng();
    let mut plot = Plot::new(right.width(), right.height(), 0.0, 0.0, 100.0, 100.0)?;
    let (mut px, mut py) = (0.0, 0.0);
    for x in 0..100u32 {
        let y: u32 = rng.random_range(0..100);
        plot.line(px, py, f64::from(x), f64::from(y));
        (px, py) = (f64::from(x), f64::from(y));
        left.append_line(&format!("{x}, {y}"), Justify::Left)?;
    }
    right.update_content(&plot.draw());

    let mut out = io::stdout().lock();
    let panes: [&dyn Pane; 4] = [&header, &footer, &left, &right];
    for pane in panes {
        pane.draw_to(&mut out)?;
    }
    out.write_all(b"\n\n")?;
    out.flush()?;
    Ok(())
}
