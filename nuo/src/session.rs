use crate::terminal::Terminal;
use std::io;

/// The interactive session for one run
///
/// Owns the terminal handle. Progress narration and menu picks both go
/// through here, and [`Session::close`] consumes the session so the handle is
/// released exactly once.
pub struct Session<T: Terminal> {
    terminal: T,
}

impl<T: Terminal> Session<T> {
    pub fn new(terminal: T) -> Self {
        Self { terminal }
    }

    /// Write one progress line
    pub fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        self.terminal.write_line(line.as_ref())
    }

    /// Show a single-choice menu and wait for the pick
    pub async fn choose(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> io::Result<Option<usize>> {
        self.terminal.select(prompt, items, default).await
    }

    pub fn close(mut self) -> io::Result<()> {
        self.terminal.close()
    }
}
