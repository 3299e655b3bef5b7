mod interpreter;
mod typer;

pub use interpreter::Interpreter;
pub use typer::Typer;

/// Navigable page sections, the targets of interpreter navigation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Social,
}

impl Section {
    pub fn slug(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Social => "social",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Neon,
    Alt,
}

/// Per-run display state. The theme is only ever changed through
/// `toggle_theme`, there is no other writer.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub theme: ThemeMode,
}

impl Session {
    pub fn new() -> Self {
        Session {
            theme: ThemeMode::Neon,
        }
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = match self.theme {
            ThemeMode::Neon => ThemeMode::Alt,
            ThemeMode::Alt => ThemeMode::Neon,
        };
        self.theme
    }
}

/// What an interpreter can do besides writing to its own scrollback.
/// The real surface drives the terminal; tests substitute a recorder.
pub trait Surface {
    fn navigate(&mut self, section: Section);
    fn toggle_theme(&mut self) -> ThemeMode;
}

/// Surface backed by the actual terminal the shell runs in.
pub struct TermSurface {
    session: Session,
}

impl TermSurface {
    pub fn new(session: Session) -> Self {
        TermSurface { session }
    }
}

impl Surface for TermSurface {
    fn navigate(&mut self, section: Section) {
        // closest a scanline terminal gets to scroll-into-view
        println!("-- {} --", section.slug());
    }

    fn toggle_theme(&mut self) -> ThemeMode {
        self.session.toggle_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::{Session, ThemeMode};

    #[test]
    fn test_theme_toggle_round_trips() {
        let mut session = Session::new();
        assert_eq!(session.theme, ThemeMode::Neon);

        assert_eq!(session.toggle_theme(), ThemeMode::Alt);
        assert_eq!(session.theme, ThemeMode::Alt);

        assert_eq!(session.toggle_theme(), ThemeMode::Neon);
    }
}
