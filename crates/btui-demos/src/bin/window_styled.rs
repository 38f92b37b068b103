#![forbid(unsafe_code)]

//! Styled panes: split children inherit the screen style until restyled.

use std::io::{self, Write};

use btui::{Justify, Rgb, SplitDirective, Style, StyledWindow};

const FG: u32 = 0xa9b1d6;
const BG: u32 = 0x1a1b26;

fn main() -> btui::Result<()> {
    btui_demos::init_logging();

    let screen_style = Style::new().fg(Rgb::from_hex(FG)).bg(Rgb::from_hex(BG));
    let screen = StyledWindow::new(0, 0, 50, 25, screen_style);
    let mut panes = screen
        .hsplit([3u16.into(), SplitDirective::Remaining, 1u16.into()])?
        .into_iter();
    let (Some(mut header), Some(mut body), Some(mut footer)) =
        (panes.next(), panes.next(), panes.next())
    else {
        return Err(io::Error::other("expected three panes").into());
    };

    header.set_style(Style::new().fg(Rgb::from_hex(BG)).bg(Rgb::from_hex(FG)));
    footer.set_style(Style::new().fg(Rgb::from_hex(0x565f89)).bg(Rgb::from_hex(0x414868)));

    header.append_line("", Justify::Left)?;
    header.append_line("--- Header ---", Justify::Center)?;
    footer.append_line("--- Footer ---", Justify::Center)?;

    body.append_line("body", Justify::Left)?;
    let inline = Style::new().fg(Rgb::from_hex(0xf7768e)).bg(Rgb::from_hex(BG));
    body.append_line(&inline.paint("styled inline text"), Justify::Left)?;

    let mut out = io::stdout().lock();
    for pane in [&header, &footer, &body] {
        pane.draw_to(&mut out)?;
    }
    out.write_all(b"\n\n")?;
    out.flush()?;
    Ok(())
}
