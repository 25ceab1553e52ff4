use crate::error::Result;
use crate::npm::PackageManager;
use crate::session::Session;
use crate::terminal::Terminal;
use tracing::debug;
use update_outdated_core::UpdateDirective;

/// Applies directives one install at a time
pub struct UpdateExecutor<'a, M: PackageManager> {
    manager: &'a M,
}

impl<'a, M: PackageManager> UpdateExecutor<'a, M> {
    pub fn new(manager: &'a M) -> Self {
        Self { manager }
    }

    /// Install every directive in order, each finishing before the next
    /// starts. The first failure stops the run; earlier installs stay.
    pub async fn apply<T: Terminal>(
        &self,
        session: &mut Session<T>,
        directives: &[UpdateDirective],
    ) -> Result<usize> {
        for (done, directive) in directives.iter().enumerate() {
            session.say(format!(
                "Running command {} install {directive}",
                self.manager.program()
            ))?;
            self.manager.install(directive).await?;
            debug!(%directive, installed = done + 1, "install finished");
        }
        Ok(directives.len())
    }
}
