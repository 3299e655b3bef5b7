use super::{Section, Surface};

/// Which fixed command table an interpreter answers to. The two tables
/// differ in wording and command set on purpose and are kept separate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandSet {
    About,
    Mini,
}

pub struct Interpreter {
    commands: CommandSet,
    log: Vec<String>,
}

impl Interpreter {
    pub fn about() -> Self {
        Interpreter {
            commands: CommandSet::About,
            log: Vec::new(),
        }
    }

    pub fn mini() -> Self {
        Interpreter {
            commands: CommandSet::Mini,
            log: Vec::new(),
        }
    }

    pub fn banner(&self) -> &'static str {
        match self.commands {
            CommandSet::About => "about-shell ready. Type 'help'.",
            CommandSet::Mini => "neon-mini ready. Type 'help'.",
        }
    }

    /// The scrollback: append-only, except for `clear`.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn submit(&mut self, raw: &str, surface: &mut dyn Surface) {
        let raw = raw.trim();
        if raw.is_empty() {
            return;
        }
        self.print(format!("~$ {}", raw));

        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let name = tokens[0].to_lowercase();
        let args = &tokens[1..];

        match self.commands {
            CommandSet::About => self.dispatch_about(&name, args, surface),
            CommandSet::Mini => self.dispatch_mini(&name, args, surface),
        }
    }

    fn print(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }

    fn dispatch_about(&mut self, name: &str, args: &[&str], surface: &mut dyn Surface) {
        match name {
            "help" => self.print(
                "commands: help, whoami, bio, skills, learning, projects, social, clear, echo, theme",
            ),
            "whoami" => self.print(
                "Safe — 16 years old, from India. I like programming and editing. Studying in 11th grade.",
            ),
            "bio" => self.print(
                "Hi — I'm Safe (in this online world). I make videos, code, and edit. I explore Godot and Python while learning new things.",
            ),
            "skills" => {
                self.print("Skills: programming basics, editing, game dev (Godot), Python basics.")
            }
            "learning" => {
                self.print("Currently learning: Godot (game dev), Python (scripting & automation).")
            }
            "projects" => {
                surface.navigate(Section::Projects);
                self.print("Jumping to projects section...");
            }
            "social" => {
                surface.navigate(Section::Social);
                self.print("Opening social section...");
            }
            "clear" => self.log.clear(),
            "echo" => self.print(args.join(" ")),
            "theme" => {
                surface.toggle_theme();
                self.print("Toggled theme.");
            }
            _ => self.print(format!("Command not found: {}", name)),
        }
    }

    fn dispatch_mini(&mut self, name: &str, args: &[&str], surface: &mut dyn Surface) {
        match name {
            "help" => {
                self.print("mini-commands: help, ls, about, projects, social, home, clear, echo, theme")
            }
            "ls" => self.print("about  projects  social  home"),
            "about" => {
                self.print("navigating to about...");
                surface.navigate(Section::About);
            }
            "projects" => {
                self.print("navigating to projects...");
                surface.navigate(Section::Projects);
            }
            "social" => {
                self.print("navigating to social...");
                surface.navigate(Section::Social);
            }
            "home" => {
                self.print("navigating home...");
                surface.navigate(Section::Home);
            }
            "clear" => self.log.clear(),
            "echo" => self.print(args.join(" ")),
            "theme" => {
                surface.toggle_theme();
                self.print("toggled theme");
            }
            _ => self.print(format!("command not found: {}", name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Interpreter;
    use crate::terminal::{Section, Session, Surface, ThemeMode};

    struct RecordingSurface {
        session: Session,
        navigations: Vec<Section>,
        toggles: usize,
    }

    impl RecordingSurface {
        fn new() -> Self {
            RecordingSurface {
                session: Session::new(),
                navigations: Vec::new(),
                toggles: 0,
            }
        }
    }

    impl Surface for RecordingSurface {
        fn navigate(&mut self, section: Section) {
            self.navigations.push(section);
        }

        fn toggle_theme(&mut self) -> ThemeMode {
            self.toggles += 1;
            self.session.toggle_theme()
        }
    }

    fn submit(interpreter: &mut Interpreter, surface: &mut RecordingSurface, line: &str) {
        interpreter.submit(line, surface);
    }

    #[test]
    fn test_empty_input_is_ignored() {
        let mut about = Interpreter::about();
        let mut surface = RecordingSurface::new();

        submit(&mut about, &mut surface, "");
        submit(&mut about, &mut surface, "   ");
        assert!(about.log().is_empty());
    }

    #[test]
    fn test_input_is_echoed_with_prompt() {
        let mut about = Interpreter::about();
        let mut surface = RecordingSurface::new();

        submit(&mut about, &mut surface, "  help  ");
        assert_eq!(about.log()[0], "~$ help");
    }

    #[test]
    fn test_command_name_is_case_insensitive() {
        let mut about = Interpreter::about();
        let mut surface = RecordingSurface::new();

        submit(&mut about, &mut surface, "WHOAMI");
        assert!(about.log()[1].contains("Safe"));
    }

    #[test]
    fn test_about_help_lists_its_table() {
        let mut about = Interpreter::about();
        let mut surface = RecordingSurface::new();

        submit(&mut about, &mut surface, "help");
        assert_eq!(
            about.log()[1],
            "commands: help, whoami, bio, skills, learning, projects, social, clear, echo, theme"
        );
    }

    #[test]
    fn test_mini_help_lists_its_table() {
        let mut mini = Interpreter::mini();
        let mut surface = RecordingSurface::new();

        submit(&mut mini, &mut surface, "help");
        assert_eq!(
            mini.log()[1],
            "mini-commands: help, ls, about, projects, social, home, clear, echo, theme"
        );
    }

    #[test]
    fn test_about_info_commands_reply_in_kind() {
        let mut about = Interpreter::about();
        let mut surface = RecordingSurface::new();

        submit(&mut about, &mut surface, "bio");
        submit(&mut about, &mut surface, "skills");
        submit(&mut about, &mut surface, "learning");

        assert!(about.log()[1].starts_with("Hi"));
        assert!(about.log()[3].starts_with("Skills:"));
        assert!(about.log()[5].starts_with("Currently learning:"));
        assert!(surface.navigations.is_empty());
    }

    #[test]
    fn test_unknown_command_wording_differs_by_table() {
        let mut about = Interpreter::about();
        let mut mini = Interpreter::mini();
        let mut surface = RecordingSurface::new();

        submit(&mut about, &mut surface, "frobnicate");
        submit(&mut mini, &mut surface, "frobnicate");

        assert_eq!(about.log()[1], "Command not found: frobnicate");
        assert_eq!(mini.log()[1], "command not found: frobnicate");
    }

    #[test]
    fn test_mini_only_commands_are_unknown_to_about() {
        let mut about = Interpreter::about();
        let mut surface = RecordingSurface::new();

        submit(&mut about, &mut surface, "ls");
        assert_eq!(about.log()[1], "Command not found: ls");
    }

    #[test]
    fn test_echo_joins_arguments() {
        let mut about = Interpreter::about();
        let mut surface = RecordingSurface::new();

        submit(&mut about, &mut surface, "echo a   b");
        assert_eq!(about.log()[1], "a b");
    }

    #[test]
    fn test_echo_without_arguments_appends_empty_line() {
        let mut mini = Interpreter::mini();
        let mut surface = RecordingSurface::new();

        submit(&mut mini, &mut surface, "echo");
        assert_eq!(mini.log()[1], "");
    }

    #[test]
    fn test_clear_empties_only_the_scrollback() {
        let mut about = Interpreter::about();
        let mut surface = RecordingSurface::new();

        submit(&mut about, &mut surface, "bio");
        submit(&mut about, &mut surface, "clear");
        assert!(about.log().is_empty());

        submit(&mut about, &mut surface, "skills");
        assert_eq!(about.log().len(), 2);
    }

    #[test]
    fn test_about_navigation_commands() {
        let mut about = Interpreter::about();
        let mut surface = RecordingSurface::new();

        submit(&mut about, &mut surface, "projects");
        submit(&mut about, &mut surface, "social");

        assert_eq!(surface.navigations, vec![Section::Projects, Section::Social]);
        assert_eq!(about.log()[1], "Jumping to projects section...");
        assert_eq!(about.log()[3], "Opening social section...");
    }

    #[test]
    fn test_mini_navigation_commands() {
        let mut mini = Interpreter::mini();
        let mut surface = RecordingSurface::new();

        submit(&mut mini, &mut surface, "about");
        submit(&mut mini, &mut surface, "projects");
        submit(&mut mini, &mut surface, "social");
        submit(&mut mini, &mut surface, "home");

        assert_eq!(
            surface.navigations,
            vec![
                Section::About,
                Section::Projects,
                Section::Social,
                Section::Home
            ]
        );
        assert_eq!(mini.log()[7], "navigating home...");
    }

    #[test]
    fn test_mini_ls_lists_sections() {
        let mut mini = Interpreter::mini();
        let mut surface = RecordingSurface::new();

        submit(&mut mini, &mut surface, "ls");
        assert_eq!(mini.log()[1], "about  projects  social  home");
    }

    #[test]
    fn test_theme_toggles_through_the_surface() {
        let mut about = Interpreter::about();
        let mut mini = Interpreter::mini();
        let mut surface = RecordingSurface::new();

        submit(&mut about, &mut surface, "theme");
        submit(&mut mini, &mut surface, "theme");

        assert_eq!(surface.toggles, 2);
        assert_eq!(surface.session.theme, ThemeMode::Neon);
        assert_eq!(about.log()[1], "Toggled theme.");
        assert_eq!(mini.log()[1], "toggled theme");
    }

    #[test]
    fn test_banners() {
        assert_eq!(Interpreter::about().banner(), "about-shell ready. Type 'help'.");
        assert_eq!(Interpreter::mini().banner(), "neon-mini ready. Type 'help'.");
    }
}
