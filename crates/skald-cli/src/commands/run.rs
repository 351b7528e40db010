//! Process a command script, narrating to stdout and logging events.

use std::io::{self, BufRead};
use std::path::Path;

use skald_core::Narrator;
use skald_engine::Interpreter;

/// Run the command loop over a script file or standard input.
///
/// The event log is opened before the loop and failing to open it is the
/// only fatal error. Hard command failures are appended to the log as
/// `Error caught: …` and the loop continues; end-of-input is a normal
/// exit.
pub fn run(script: Option<&Path>, log: &Path) -> Result<(), String> {
    let narrator = Narrator::to_file(log)
        .map_err(|e| format!("failed to open log file {}: {e}", log.display()))?;
    let mut interpreter = Interpreter::new(narrator);

    let lines: Box<dyn Iterator<Item = io::Result<String>>> = match script {
        Some(path) => {
            let file = std::fs::File::open(path)
                .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
            Box::new(io::BufReader::new(file).lines())
        }
        None => Box::new(io::stdin().lock().lines()),
    };

    for line in lines {
        let line = line.map_err(|e| format!("failed to read input: {e}"))?;
        match interpreter.process(&line) {
            Ok(Some(text)) => println!("{text}"),
            Ok(None) => {}
            Err(e) => interpreter
                .narrator_mut()
                .event(format!("Error caught: {e}.")),
        }
    }

    Ok(())
}
