#![forbid(unsafe_code)]

//! Draw a circle on a braille canvas.

use btui::Canvas;

fn main() {
    btui_demos::init_logging();

    // Cells are taller than wide, so a 20x10 canvas is roughly square.
    let mut canvas = Canvas::new(20, 10);
    let (cx, cy) = (i32::from(canvas.cols() / 2), i32::from(canvas.rows() / 2));
    canvas.circle(cx, cy, 10);

    println!("{}", canvas.draw());
}
