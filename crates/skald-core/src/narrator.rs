//! The narration sink: an append-only log of every state-changing or
//! rejected action.
//!
//! Events are always retained in memory so callers and tests can inspect
//! them; optionally they are also written through to a sink (the story log
//! file) line by line. The sink is opened once before the command loop and
//! failing to open it is the only fatal startup error. The log is
//! best-effort after that; mid-run write failures are ignored.

use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// The append-only event log, with an optional write-through sink.
#[derive(Default)]
pub struct Narrator {
    events: Vec<String>,
    sink: Option<Box<dyn Write>>,
}

impl Narrator {
    /// Create a narrator that only retains events in memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a narrator that also writes each event to the given sink.
    pub fn with_sink(sink: impl Write + 'static) -> Self {
        Self {
            events: Vec::new(),
            sink: Some(Box::new(sink)),
        }
    }

    /// Open (truncating) a log file as the write-through sink.
    pub fn to_file(path: &Path) -> io::Result<Self> {
        Ok(Self::with_sink(File::create(path)?))
    }

    /// Append one event line, flushing it to the sink immediately.
    pub fn event(&mut self, line: impl Into<String>) {
        let line = line.into();
        if let Some(sink) = self.sink.as_mut() {
            let _ = writeln!(sink, "{line}");
            let _ = sink.flush();
        }
        self.events.push(line);
    }

    /// All events appended so far, in order.
    pub fn events(&self) -> &[String] {
        &self.events
    }
}

impl fmt::Debug for Narrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Narrator")
            .field("events", &self.events)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_retained_in_order() {
        let mut narrator = Narrator::new();
        narrator.event("first");
        narrator.event(String::from("second"));
        assert_eq!(narrator.events(), ["first", "second"]);
    }

    #[test]
    fn file_sink_receives_every_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("story_log.txt");
        {
            let mut narrator = Narrator::to_file(&path).unwrap();
            narrator.event("Bob has died.");
            narrator.event("Error caught: Container is full. Cannot add Sword.");
        }
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "Bob has died.\nError caught: Container is full. Cannot add Sword.\n"
        );
    }

    #[test]
    fn to_file_fails_for_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("story_log.txt");
        assert!(Narrator::to_file(&path).is_err());
    }
}
