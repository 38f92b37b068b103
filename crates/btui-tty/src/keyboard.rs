#![forbid(unsafe_code)]

//! Single-key input.
//!
//! [`Keyboard::listen`] puts the terminal in cbreak mode (keys arrive
//! immediately and are not echoed) and starts one reader thread on stdin.
//! Every decoded [`Key`] is handed to every registered listener in
//! registration order.
//!
//! Decoding is deliberately small: printable characters (UTF-8), and the
//! four arrow keys. Any other `ESC x y` sequence becomes [`Key::Unknown`].
//! Modifier keys are not reported.

use std::io::{self, Read};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
#[cfg(unix)]
use std::sync::OnceLock;

#[cfg(unix)]
use nix::sys::termios::{self, LocalFlags, SetArg, SpecialCharacterIndices, Termios};
#[cfg(unix)]
use std::os::fd::AsFd;

/// A decoded key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Right,
    Left,
    /// An escape sequence that is not an arrow key, or invalid UTF-8.
    Unknown,
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{c}"),
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
            Self::Right => f.write_str("right"),
            Self::Left => f.write_str("left"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Incremental byte-to-[`Key`] decoder.
///
/// An escape byte consumes the next two bytes whatever they are; the second
/// selects the arrow direction.
#[derive(Debug, Default, Clone)]
pub struct KeyDecoder {
    pending: Vec<u8>,
}

impl KeyDecoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte, returning a key once one is complete.
    pub fn feed(&mut self, byte: u8) -> Option<Key> {
        self.pending.push(byte);
        let key = match self.pending.as_slice() {
            [0x1b] | [0x1b, _] => return None,
            [0x1b, _, final_byte] => match *final_byte {
                b'A' => Key::Up,
                b'B' => Key::Down,
                b'C' => Key::Right,
                b'D' => Key::Left,
                _ => Key::Unknown,
            },
            [lead, rest @ ..] => {
                let need = utf8_len(*lead);
                if need == 0 || rest.iter().any(|b| b & 0xC0 != 0x80) {
                    Key::Unknown
                } else if self.pending.len() < need {
                    return None;
                } else {
                    std::str::from_utf8(&self.pending)
                        .ok()
                        .and_then(|s| s.chars().next())
                        .map_or(Key::Unknown, Key::Char)
                }
            }
            [] => return None,
        };
        self.pending.clear();
        Some(key)
    }

    /// True when a partial key is buffered.
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

/// Expected UTF-8 sequence length for a lead byte, or 0 if it cannot lead.
fn utf8_len(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Decode a complete byte string. A trailing partial key is dropped.
#[must_use]
pub fn decode_keys(bytes: &[u8]) -> Vec<Key> {
    let mut decoder = KeyDecoder::new();
    bytes.iter().filter_map(|&b| decoder.feed(b)).collect()
}

type Listener = Arc<dyn Fn(Key) + Send + Sync>;
type Listeners = Arc<Mutex<Vec<Listener>>>;

fn lock(listeners: &Mutex<Vec<Listener>>) -> MutexGuard<'_, Vec<Listener>> {
    listeners.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Hand `key` to every listener registered so far.
///
/// The list is snapshotted first so a listener may register more listeners.
/// A listener that panics is logged and the rest still run.
fn dispatch(listeners: &Mutex<Vec<Listener>>, key: Key) {
    let snapshot: Vec<Listener> = lock(listeners).clone();
    for listener in snapshot {
        if panic::catch_unwind(AssertUnwindSafe(|| listener(key))).is_err() {
            tracing::warn!(?key, "keyboard listener panicked");
        }
    }
}

/// Read keys from `input` until EOF or a read error, dispatching each one.
fn pump<R: Read>(input: R, listeners: &Mutex<Vec<Listener>>) -> io::Result<()> {
    let mut decoder = KeyDecoder::new();
    for byte in input.bytes() {
        if let Some(key) = decoder.feed(byte?) {
            tracing::trace!(?key, "key");
            dispatch(listeners, key);
        }
    }
    Ok(())
}

#[cfg(unix)]
static INITIAL_ATTRS: OnceLock<Mutex<Termios>> = OnceLock::new();

/// Restore stdin to the attributes captured by the first [`Keyboard`].
///
/// A no-op if no keyboard was ever created.
pub(crate) fn restore_initial_attrs() -> io::Result<()> {
    #[cfg(unix)]
    if let Some(saved) = INITIAL_ATTRS.get() {
        let saved = saved.lock().unwrap_or_else(|p| p.into_inner());
        termios::tcsetattr(io::stdin().as_fd(), SetArg::TCSADRAIN, &saved)
            .map_err(io::Error::from)?;
    }
    Ok(())
}

/// Keyboard listener hub.
///
/// Shareable across threads; all methods take `&self`. Dropping the
/// keyboard restores the terminal attributes, but the reader thread stays
/// blocked on stdin until the process exits.
pub struct Keyboard {
    #[cfg(unix)]
    saved: Mutex<Termios>,
    listeners: Listeners,
    listening: AtomicBool,
}

impl std::fmt::Debug for Keyboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keyboard")
            .field("listeners", &lock(&self.listeners).len())
            .field("listening", &self.listening.load(Ordering::Relaxed))
            .finish()
    }
}

impl Keyboard {
    /// Capture the current attributes of stdin.
    ///
    /// Fails when stdin is not a terminal.
    #[cfg(unix)]
    pub fn new() -> io::Result<Self> {
        let saved = termios::tcgetattr(io::stdin().as_fd()).map_err(io::Error::from)?;
        INITIAL_ATTRS.get_or_init(|| Mutex::new(saved.clone()));
        Ok(Self {
            saved: Mutex::new(saved),
            listeners: Arc::default(),
            listening: AtomicBool::new(false),
        })
    }

    #[cfg(not(unix))]
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            listeners: Arc::default(),
            listening: AtomicBool::new(false),
        })
    }

    /// Register a listener. The first call enters cbreak mode and starts
    /// the reader thread.
    pub fn listen<F>(&self, listener: F) -> io::Result<()>
    where
        F: Fn(Key) + Send + Sync + 'static,
    {
        lock(&self.listeners).push(Arc::new(listener));
        if self.listening.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        if let Err(err) = self.start() {
            self.listening.store(false, Ordering::Release);
            return Err(err);
        }
        Ok(())
    }

    fn start(&self) -> io::Result<()> {
        self.enter_cbreak()?;
        let listeners = Arc::clone(&self.listeners);
        std::thread::Builder::new()
            .name("btui-keyboard".into())
            .spawn(move || {
                tracing::debug!("keyboard reader started");
                match pump(io::stdin().lock(), &listeners) {
                    Ok(()) => tracing::debug!("keyboard reader reached end of input"),
                    Err(err) => tracing::warn!(%err, "keyboard reader stopped"),
                }
            })?;
        Ok(())
    }

    #[cfg(unix)]
    fn enter_cbreak(&self) -> io::Result<()> {
        let mut attrs = self.saved.lock().unwrap_or_else(|p| p.into_inner()).clone();
        attrs.local_flags.remove(LocalFlags::ECHO | LocalFlags::ICANON);
        attrs.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        attrs.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;
        termios::tcsetattr(io::stdin().as_fd(), SetArg::TCSAFLUSH, &attrs)
            .map_err(io::Error::from)?;
        tracing::info!("entered cbreak mode");
        Ok(())
    }

    #[cfg(not(unix))]
    fn enter_cbreak(&self) -> io::Result<()> {
        Ok(())
    }

    /// Whether the reader thread has been started.
    pub fn is_listening(&self) -> bool {
        self.listening.load(Ordering::Acquire)
    }

    /// Restore the attributes captured by [`new`](Self::new).
    #[cfg(unix)]
    pub fn reset(&self) -> io::Result<()> {
        let saved = self.saved.lock().unwrap_or_else(|p| p.into_inner());
        termios::tcsetattr(io::stdin().as_fd(), SetArg::TCSADRAIN, &saved)
            .map_err(io::Error::from)?;
        tracing::info!("restored terminal attributes");
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn reset(&self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for Keyboard {
    fn drop(&mut self) {
        if self.is_listening() {
            let _ = self.reset();
        }
    }
}
