//! Bookmark Manager terminal client.
//!
//! Reads one command per line from stdin and prints the resulting list.

use std::io::{self, Write};

use bookmark_manager::app::{App, Flow};
use bookmark_manager::services::logging;
use bookmark_manager::ui::commands;
use bookmark_manager::ui::prompter::TerminalPrompter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("bookmarks: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1);
    let mut app = App::new(config_path)?;
    logging::init(&app.settings.log_level);

    let mut out = io::stdout();
    let mut prompter = TerminalPrompter::stdio();

    writeln!(out, "Bookmark Manager v{} (type 'help')", env!("CARGO_PKG_VERSION"))?;
    app.startup(&mut out).await;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let Some(line) = prompter.read_line() else {
            break;
        };

        let command = match commands::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        if app.execute(command, &mut prompter, &mut out).await == Flow::Quit {
            break;
        }
    }

    Ok(())
}
