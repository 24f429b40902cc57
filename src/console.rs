//! The presentation port and its terminal implementation.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Pause between house draws.
const HOUSE_DRAW_PAUSE: Duration = Duration::from_secs(1);

/// Line-oriented presentation port.
///
/// The round and session logic talk to the terminal only through this
/// trait, so tests can script input and capture output without real
/// terminal timing or clearing.
pub trait Console {
    /// Writes one line of output.
    fn line(&mut self, text: &str);

    /// Writes a prompt and reads one line of input, trimmed.
    ///
    /// Returns `None` when the input stream has closed.
    fn prompt(&mut self, text: &str) -> Option<String>;

    /// Pauses briefly between house draws. Purely cosmetic.
    fn pause(&mut self);

    /// Clears the screen if the environment supports it. No semantic effect.
    fn clear(&mut self);
}

/// [`Console`] implementation over stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a terminal console.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn line(&mut self, text: &str) {
        println!("{text}");
    }

    fn prompt(&mut self, text: &str) -> Option<String> {
        print!("{text}");
        let _ = io::stdout().flush();

        let mut input = String::new();
        match io::stdin().lock().read_line(&mut input) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(input.trim().to_string()),
        }
    }

    fn pause(&mut self) {
        thread::sleep(HOUSE_DRAW_PAUSE);
    }

    fn clear(&mut self) {
        // ANSI clear-and-home; harmless where unsupported.
        print!("\u{1b}[2J\u{1b}[1;1H");
        let _ = io::stdout().flush();
    }
}
