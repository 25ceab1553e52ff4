use async_trait::async_trait;
use dialoguer::Select;
use dialoguer::console::Term;
use std::io;
use tracing::debug;

/// The interactive input/output handle behind a [`crate::session::Session`]
#[async_trait]
pub trait Terminal: Send {
    /// Write a full line
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Let the user pick one of `items`, with the cursor starting on
    /// `default`. `None` when the menu is dismissed (Esc or `q`); Ctrl-C is an
    /// [`io::ErrorKind::Interrupted`] error.
    async fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> io::Result<Option<usize>>;

    /// Release the handle
    fn close(&mut self) -> io::Result<()>;
}

/// Terminal on stdout, with menus drawn by dialoguer
pub struct DialoguerTerminal {
    term: Term,
}

impl DialoguerTerminal {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for DialoguerTerminal {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Terminal for DialoguerTerminal {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }

    async fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> io::Result<Option<usize>> {
        if !self.term.is_term() {
            return Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "stdout is not a terminal",
            ));
        }

        let term = self.term.clone();
        let prompt = prompt.to_string();
        let items = items.to_vec();

        // dialoguer blocks on key reads
        tokio::task::spawn_blocking(move || {
            let picked = Select::new()
                .with_prompt(prompt)
                .items(&items)
                .default(default)
                .interact_on_opt(&term)
                .map_err(io::Error::from);

            if let Err(err) = &picked {
                debug!(kind = ?err.kind(), "select prompt aborted");
                // Ctrl-C leaves dialoguer's hidden cursor behind
                term.show_cursor()?;
            }
            picked
        })
        .await
        .map_err(io::Error::other)?
    }

    fn close(&mut self) -> io::Result<()> {
        debug!("closing terminal session");
        self.term.show_cursor()?;
        self.term.flush()
    }
}
