use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use sr_core::DirStore;
use sr_fiction::{GameConfig, Session, Status};

pub fn run(rooms: &Path, saves: &Path) -> Result<(), String> {
    let store = DirStore::new(saves);
    let mut session = Session::load(rooms, GameConfig::default(), Box::new(store))
        .map_err(|e| format!("failed to load rooms: {e}"))?;
    tracing::debug!(rooms = %rooms.display(), saves = %saves.display(), "session started");

    println!("  {}", "SHRINK RAY".bold());
    println!("  Type 'help' for commands, 'quit' to save and exit.");
    println!("{}\n", session.opening());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    while !session.is_over() {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match session.process(line.trim()) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{}\n", paint(&output, session.status()));
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    tracing::debug!(status = ?session.status(), "session ended");
    Ok(())
}

fn paint(output: &str, status: Status) -> String {
    match status {
        Status::Won => output.green().bold().to_string(),
        Status::Lost => output.red().bold().to_string(),
        Status::Ongoing | Status::Exited => output.to_string(),
    }
}
