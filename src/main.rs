//! Terminal entry point for the vingt-et-un game.

use std::time::{SystemTime, UNIX_EPOCH};

use vingtun::{Session, StdConsole};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut session = Session::new(StdConsole::new(), seed);
    session.run();
}
