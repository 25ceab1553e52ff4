use std::io;
use thiserror::Error;
use update_outdated_core::ParseError;

/// Process status for a cancelled prompt (`-1` as seen by the shell)
pub const CANCELLED_EXIT_CODE: u8 = 255;

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` failed with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Update cancelled")]
    Cancelled,

    #[error("Choosing versions needs an interactive terminal; use --auto-wanted to update without prompting")]
    NotInteractive,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl UpdateError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, UpdateError::Cancelled)
    }

    /// Exit status for the process when this error ends the run
    pub fn exit_code(&self) -> u8 {
        if self.is_cancelled() {
            CANCELLED_EXIT_CODE
        } else {
            1
        }
    }
}

pub type Result<T> = std::result::Result<T, UpdateError>;
