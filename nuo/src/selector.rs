use crate::cli::RunOptions;
use crate::error::Result;
use crate::prompt::Select;
use crate::session::Session;
use crate::terminal::Terminal;
use tracing::info;
use update_outdated_core::{
    AutoDecision, OutdatedRecord, OutdatedTable, TableRenderer, UpdateDirective, auto_wanted,
    choices_for, default_choice,
};

/// Decides, record by record, what gets installed
pub struct SelectionEngine {
    options: RunOptions,
    renderer: TableRenderer,
}

impl SelectionEngine {
    pub fn new(options: RunOptions, show_colors: bool) -> Self {
        Self {
            options,
            renderer: TableRenderer::new(show_colors),
        }
    }

    /// Walk the records in listing order and collect the directives
    ///
    /// One record is fully decided before the next is looked at. A cancelled
    /// prompt stops the walk and nothing collected so far is returned.
    pub async fn select_all<T: Terminal>(
        &self,
        session: &mut Session<T>,
        table: &OutdatedTable,
    ) -> Result<Vec<UpdateDirective>> {
        let mut directives = Vec::new();
        for record in &table.records {
            if let Some(directive) = self.select(session, &table.header, record).await? {
                directives.push(directive);
            }
        }
        Ok(directives)
    }

    /// Decide one record: at most one directive
    pub async fn select<T: Terminal>(
        &self,
        session: &mut Session<T>,
        header: &[String],
        record: &OutdatedRecord,
    ) -> Result<Option<UpdateDirective>> {
        if self.options.auto_wanted {
            self.select_auto(session, record)
        } else {
            self.select_manual(session, header, record).await
        }
    }

    fn select_auto<T: Terminal>(
        &self,
        session: &mut Session<T>,
        record: &OutdatedRecord,
    ) -> Result<Option<UpdateDirective>> {
        let decision = auto_wanted(record);
        match &decision {
            AutoDecision::NoAction => {
                session.say(format!(
                    "{} is already at wanted version {}, no action",
                    record.name, record.current
                ))?;
            }
            AutoDecision::Selected(directive) => {
                session.say(format!("Selected {directive} (wanted)"))?;
            }
        }
        info!(package = %record.name, ?decision, "auto-wanted decision");
        Ok(decision.into_directive())
    }

    async fn select_manual<T: Terminal>(
        &self,
        session: &mut Session<T>,
        header: &[String],
        record: &OutdatedRecord,
    ) -> Result<Option<UpdateDirective>> {
        session.say("Package to update :")?;
        for line in self.renderer.render(header, record) {
            session.say(line)?;
        }

        let choices = choices_for(record);
        let default = default_choice(record);
        let labels = choices.iter().map(|choice| choice.label(record)).collect();
        let default_idx = choices.iter().position(|c| *c == default).unwrap_or(0);

        let picked = Select::new("Update package", labels)
            .with_default(default_idx)
            .run(session)
            .await?;

        let choice = choices.get(picked).copied().unwrap_or(default);
        info!(package = %record.name, ?choice, "manual decision");
        Ok(choice.directive(record))
    }
}
