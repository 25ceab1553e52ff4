use crate::error::{Result, UpdateError};
use crate::session::Session;
use crate::terminal::Terminal;
use std::io;

/// A single-choice menu with a pre-selected option
///
/// Esc, `q` and Ctrl-C all cancel.
pub struct Select<'a> {
    message: &'a str,
    options: Vec<String>,
    default: usize,
}

impl<'a> Select<'a> {
    pub fn new(message: &'a str, options: Vec<String>) -> Self {
        Self {
            message,
            options,
            default: 0,
        }
    }

    pub fn with_default(mut self, default: usize) -> Self {
        self.default = default.min(self.options.len().saturating_sub(1));
        self
    }

    /// Block until an option is picked; returns its index
    pub async fn run<T: Terminal>(&self, session: &mut Session<T>) -> Result<usize> {
        let picked = session
            .choose(self.message, &self.options, self.default)
            .await;

        match picked {
            Ok(Some(idx)) if idx < self.options.len() => Ok(idx),
            Ok(Some(_)) | Ok(None) => Err(UpdateError::Cancelled),
            Err(err) => Err(match err.kind() {
                io::ErrorKind::Interrupted => UpdateError::Cancelled,
                io::ErrorKind::NotConnected => UpdateError::NotInteractive,
                _ => UpdateError::Io(err),
            }),
        }
    }
}
