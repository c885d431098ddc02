use std::io::{self, BufRead};
use std::path::Path;

use xymo_fiction::{FictionSession, SessionConfig};

use crate::console::ConsoleSink;

/// Run a session on stdin/stdout until stdin is exhausted.
///
/// The session has no quit command; ending it is up to the host, here EOF.
pub fn run(world: Option<&Path>, intro: bool, color: bool) -> Result<(), String> {
    let world = super::load_world(world)?;
    tracing::info!(world = %world.meta.name, "starting session");

    let config = SessionConfig::default().with_intro(intro);
    let mut session = FictionSession::with_config(world, config);
    let mut sink = ConsoleSink::new(io::stdout().lock(), color);

    session.start(&mut sink);
    if !intro || session.world().meta.intro.is_none() {
        sink.prompt();
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        // Undecodable bytes become U+FFFD and fail to parse like any other typo.
        let line = String::from_utf8_lossy(&buf);
        session.process(line.trim(), &mut sink);
        if let Some(e) = sink.take_error() {
            return Err(e.to_string());
        }
    }

    Ok(())
}
