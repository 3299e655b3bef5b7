use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use rand::Rng;

// Per-character pause is 24ms plus up to 30ms of jitter, matching the
// cadence of a quick typist. Line breaks pause noticeably longer.
const CHAR_DELAY_MIN_MS: u64 = 24;
const CHAR_DELAY_JITTER_MS: u64 = 30;
const LINE_DELAY_MS: u64 = 400;

/// Reveals a fixed sequence of lines one character at a time. `play`
/// consumes the typer, so a finished animation cannot be restarted.
pub struct Typer {
    lines: Vec<String>,
}

impl Typer {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Typer {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Text visible once `revealed` characters of line `index` are out:
    /// every earlier line in full, then the partial current line.
    fn frame(&self, index: usize, revealed: usize) -> String {
        let mut text = self.lines[..index].join("\n");
        if index > 0 {
            text.push('\n');
        }
        if let Some(line) = self.lines.get(index) {
            let cut = line
                .char_indices()
                .nth(revealed)
                .map(|(at, _)| at)
                .unwrap_or(line.len());
            text.push_str(&line[..cut]);
        }
        text
    }

    pub fn play(self, out: &mut dyn Write) -> io::Result<()> {
        let mut rng = rand::thread_rng();
        let mut shown = String::new();

        for index in 0..self.lines.len() {
            let chars = self.lines[index].chars().count();
            for revealed in 0..=chars {
                let next = self.frame(index, revealed);
                // frames only ever grow, so the delta is a plain suffix
                out.write_all(next[shown.len()..].as_bytes())?;
                out.flush()?;
                shown = next;
                thread::sleep(Duration::from_millis(
                    CHAR_DELAY_MIN_MS + rng.gen_range(0..CHAR_DELAY_JITTER_MS),
                ));
            }
            thread::sleep(Duration::from_millis(LINE_DELAY_MS));
        }

        if !self.lines.is_empty() {
            out.write_all(b"\n")?;
            out.flush()?;
        }
        Ok(())
    }
}
