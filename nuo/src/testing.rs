//! In-crate fakes for the package manager and the terminal

use crate::error::{Result, UpdateError};
use crate::npm::PackageManager;
use crate::terminal::Terminal;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};
use update_outdated_core::UpdateDirective;

/// Package manager that records every call instead of running anything
pub struct RecordingManager {
    outdated: String,
    fail_sync: bool,
    fail_install: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl RecordingManager {
    pub fn new(outdated: &str) -> Self {
        Self {
            outdated: outdated.to_string(),
            fail_sync: false,
            fail_install: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_sync(mut self) -> Self {
        self.fail_sync = true;
        self
    }

    /// Fail the install of `spec` (`name@version`)
    pub fn failing_install(mut self, spec: &str) -> Self {
        self.fail_install = Some(spec.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn installs(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| call.strip_prefix("install ").map(String::from))
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn failure(command: &str) -> UpdateError {
        UpdateError::CommandFailed {
            command: command.to_string(),
            status: "exit status: 1".to_string(),
            stderr: "npm error".to_string(),
        }
    }
}

#[async_trait]
impl PackageManager for RecordingManager {
    fn program(&self) -> &str {
        "npm"
    }

    async fn sync(&self) -> Result<()> {
        self.lock().push("sync".to_string());
        if self.fail_sync {
            return Err(Self::failure("npm install"));
        }
        Ok(())
    }

    async fn outdated(&self) -> Result<String> {
        self.lock().push("outdated".to_string());
        Ok(self.outdated.clone())
    }

    async fn install(&self, directive: &UpdateDirective) -> Result<()> {
        let spec = directive.to_string();
        self.lock().push(format!("install {spec}"));
        if self.fail_install.as_deref() == Some(spec.as_str()) {
            return Err(Self::failure(&format!("npm install {spec}")));
        }
        Ok(())
    }
}

/// How the scripted user answers one menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Move to this index and confirm
    Pick(usize),
    /// Confirm the pre-selected option
    Default,
    /// Esc or `q`
    Dismiss,
    /// Ctrl-C
    Interrupt,
    /// Not attached to a terminal
    NoTerminal,
}

/// One menu the terminal was asked to show
#[derive(Debug, Clone)]
pub struct Menu {
    pub prompt: String,
    pub items: Vec<String>,
    pub default: usize,
}

/// Everything a [`ScriptedTerminal`] saw
#[derive(Debug, Default)]
pub struct Transcript {
    pub lines: Vec<String>,
    pub menus: Vec<Menu>,
    pub closes: usize,
}

impl Transcript {
    pub fn contains_line(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

/// Terminal fed from a fixed list of replies. Running out of replies reads
/// as a dismissed menu.
pub struct ScriptedTerminal {
    replies: VecDeque<Reply>,
    transcript: Arc<Mutex<Transcript>>,
}

impl ScriptedTerminal {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            transcript: Arc::new(Mutex::new(Transcript::default())),
        }
    }

    /// Shared view of the transcript that outlives the session
    pub fn transcript(&self) -> Arc<Mutex<Transcript>> {
        Arc::clone(&self.transcript)
    }

    fn lock(&self) -> MutexGuard<'_, Transcript> {
        self.transcript
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Terminal for ScriptedTerminal {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.lock().lines.push(line.to_string());
        Ok(())
    }

    async fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> io::Result<Option<usize>> {
        self.lock().menus.push(Menu {
            prompt: prompt.to_string(),
            items: items.to_vec(),
            default,
        });

        match self.replies.pop_front().unwrap_or(Reply::Dismiss) {
            Reply::Pick(idx) => Ok(Some(idx)),
            Reply::Default => Ok(Some(default)),
            Reply::Dismiss => Ok(None),
            Reply::Interrupt => Err(io::Error::new(
                io::ErrorKind::Interrupted,
                "read interrupted",
            )),
            Reply::NoTerminal => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "not a terminal",
            )),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        self.lock().closes += 1;
        Ok(())
    }
}
