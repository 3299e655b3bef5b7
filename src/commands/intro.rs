use std::io;

use log::error;

use crate::terminal::Typer;

pub fn intro_lines() -> Vec<String> {
    vec![
        format!("Initializing neon-shell v{}...", env!("CARGO_PKG_VERSION")),
        "Loading modules: ui, media, core, coffee...".to_owned(),
        "Welcome, I'm Safe. Explore with `neon-shell shell` and try `help`.".to_owned(),
    ]
}

pub struct Intro {
    typer: Typer,
}

impl Intro {
    pub fn new() -> Self {
        Intro {
            typer: Typer::new(intro_lines()),
        }
    }

    pub fn execute(self) {
        let mut stdout = io::stdout();
        if let Err(err) = self.typer.play(&mut stdout) {
            error!("intro playback failed: {}", err);
        }
    }
}
