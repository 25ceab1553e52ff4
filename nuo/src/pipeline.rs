use crate::cli::RunOptions;
use crate::error::Result;
use crate::executor::UpdateExecutor;
use crate::npm::PackageManager;
use crate::selector::SelectionEngine;
use crate::session::Session;
use crate::terminal::Terminal;
use tracing::debug;
use update_outdated_core::OutdatedParser;

/// How a completed run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NothingToUpdate,
    Updated(usize),
}

/// sync → list outdated → parse → select → install → report
pub struct Pipeline<'a, M: PackageManager> {
    manager: &'a M,
    options: RunOptions,
    show_colors: bool,
}

impl<'a, M: PackageManager> Pipeline<'a, M> {
    pub fn new(manager: &'a M, options: RunOptions) -> Self {
        Self {
            manager,
            options,
            show_colors: true,
        }
    }

    pub fn with_colors(mut self, show_colors: bool) -> Self {
        self.show_colors = show_colors;
        self
    }

    /// Run to completion, closing the session on every path
    pub async fn run<T: Terminal>(&self, mut session: Session<T>) -> Result<Outcome> {
        let result = self.drive(&mut session).await;
        let closed = session.close();
        let outcome = result?;
        closed?;
        Ok(outcome)
    }

    async fn drive<T: Terminal>(&self, session: &mut Session<T>) -> Result<Outcome> {
        self.manager.sync().await?;

        let raw = self.manager.outdated().await?;
        let table = OutdatedParser::new().parse(&raw)?;
        if table.is_empty() {
            session.say("No package to update")?;
            return Ok(Outcome::NothingToUpdate);
        }
        debug!(records = table.records.len(), "outdated packages listed");

        let directives = SelectionEngine::new(self.options, self.show_colors)
            .select_all(session, &table)
            .await?;

        let updated = UpdateExecutor::new(self.manager)
            .apply(session, &directives)
            .await?;

        session.say(format!("{updated} package(s) updated"))?;
        Ok(Outcome::Updated(updated))
    }
}
