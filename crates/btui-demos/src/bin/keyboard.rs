#![forbid(unsafe_code)]

//! Echo key presses until `q`.

use std::time::Duration;

use btui::{Key, Keyboard, on_interrupt, shutdown};

fn main() -> btui::Result<()> {
    btui_demos::init_logging();

    let keyboard = Keyboard::new()?;

    // Ctrl+C must restore the terminal before it has been touched.
    let _interrupt = on_interrupt(|_| shutdown())?;

    keyboard.listen(|key| match key {
        Key::Char('q') => {
            println!("quitting");
            shutdown();
        }
        other => println!("{other} - press q to quit"),
    })?;

    loop {
        std::thread::sleep(Duration::from_secs(1));
    }
}
