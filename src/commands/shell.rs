use std::io::{self, BufRead};

use crate::terminal::{Interpreter, Session, TermSurface};

/// Interactive wrapper around one interpreter: reads lines from stdin,
/// submits them, and prints whatever the scrollback gained. Ends on EOF.
pub struct Shell {
    interpreter: Interpreter,
}

impl Shell {
    pub fn about() -> Self {
        Shell {
            interpreter: Interpreter::about(),
        }
    }

    pub fn mini() -> Self {
        Shell {
            interpreter: Interpreter::mini(),
        }
    }

    pub fn execute(mut self) {
        let mut surface = TermSurface::new(Session::new());
        println!("{}", self.interpreter.banner());

        let stdin = io::stdin();
        let mut printed = 0;

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            self.interpreter.submit(&line, &mut surface);
            printed = self.flush_scrollback(printed);
        }
    }

    fn flush_scrollback(&self, printed: usize) -> usize {
        let log = self.interpreter.log();
        let mut printed = printed;

        if log.len() < printed {
            // the log shrank, so `clear` ran; wipe the screen to match
            print!("\x1b[2J\x1b[H");
            printed = 0;
        }
        for entry in &log[printed..] {
            println!("{}", entry);
        }
        log.len()
    }
}
