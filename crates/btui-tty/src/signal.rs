#![forbid(unsafe_code)]

//! Interrupt handling and terminal cleanup.

use std::io::{self, Write};

use crate::keyboard::restore_initial_attrs;
use crate::terminal::Terminal;

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

/// Keeps the interrupt thread registered. Dropping it unregisters the
/// handler and joins the thread.
#[derive(Debug)]
pub struct InterruptGuard {
    #[cfg(unix)]
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

/// Run `handler` on a dedicated thread whenever SIGINT or SIGTERM arrives.
///
/// The handler receives the signal number. It usually restores the
/// terminal and exits, e.g. by calling [`shutdown`].
#[cfg(unix)]
pub fn on_interrupt<F>(handler: F) -> io::Result<InterruptGuard>
where
    F: Fn(i32) + Send + 'static,
{
    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    let handle = signals.handle();
    let thread = std::thread::Builder::new()
        .name("btui-interrupt".into())
        .spawn(move || {
            for signal in signals.forever() {
                tracing::warn!(signal, "termination signal received");
                handler(signal);
            }
        })?;
    Ok(InterruptGuard {
        handle,
        thread: Some(thread),
    })
}

#[cfg(not(unix))]
pub fn on_interrupt<F>(_handler: F) -> io::Result<InterruptGuard>
where
    F: Fn(i32) + Send + 'static,
{
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "signal handling requires a Unix platform",
    ))
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        #[cfg(unix)]
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Best-effort terminal restore: colors, cursor, and the keyboard's
/// original attributes.
pub fn restore_terminal() {
    let mut term = Terminal::new();
    let _ = term.reset();
    let _ = term.flush();
    if let Err(err) = restore_initial_attrs() {
        tracing::warn!(%err, "failed to restore terminal attributes");
    }
    let _ = io::stderr().flush();
}

/// Restore the terminal and exit the process with status 0.
pub fn shutdown() -> ! {
    restore_terminal();
    tracing::info!("shutdown");
    std::process::exit(0)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Duration;

    #[test]
    fn handler_sees_raised_signal() {
        let (tx, rx) = mpsc::channel();
        let guard = on_interrupt(move |sig| {
            let _ = tx.send(sig);
        })
        .unwrap();
        signal_hook::low_level::raise(SIGTERM).unwrap();
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(SIGTERM));
        drop(guard);
    }
}
