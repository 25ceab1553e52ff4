use crate::types::{OutdatedRecord, UpdateDirective};

/// What the user can do with one outdated package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Skip,
    Wanted,
    Latest,
}

impl Choice {
    /// Menu label for this choice
    pub fn label(self, record: &OutdatedRecord) -> String {
        match self {
            Choice::Skip => "No".to_string(),
            Choice::Wanted => format!("Wanted : {}@{}", record.name, record.wanted),
            Choice::Latest => format!("Latest : {}@{}", record.name, record.latest),
        }
    }

    /// The directive this choice produces for a record, if any
    pub fn directive(self, record: &OutdatedRecord) -> Option<UpdateDirective> {
        match self {
            Choice::Skip => None,
            Choice::Wanted => Some(UpdateDirective::new(&record.name, &record.wanted)),
            Choice::Latest => Some(UpdateDirective::new(&record.name, &record.latest)),
        }
    }
}

/// The choices offered for a record, in menu order
///
/// Skip and Latest are always present. Wanted only shows up when it is a
/// distinct stop between current and latest.
pub fn choices_for(record: &OutdatedRecord) -> Vec<Choice> {
    let mut choices = vec![Choice::Skip];
    if record.has_intermediate_wanted() {
        choices.push(Choice::Wanted);
    }
    choices.push(Choice::Latest);
    choices
}

/// The pre-selected choice: Wanted when offered, otherwise Latest
pub fn default_choice(record: &OutdatedRecord) -> Choice {
    if record.has_intermediate_wanted() {
        Choice::Wanted
    } else {
        Choice::Latest
    }
}

/// Decision taken without prompting in auto-wanted mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoDecision {
    /// Already at wanted; nothing to install
    NoAction,
    /// Install wanted
    Selected(UpdateDirective),
}

impl AutoDecision {
    pub fn into_directive(self) -> Option<UpdateDirective> {
        match self {
            AutoDecision::NoAction => None,
            AutoDecision::Selected(directive) => Some(directive),
        }
    }
}

/// Auto-wanted rule: target wanted whenever it differs from current. Latest
/// is never picked.
pub fn auto_wanted(record: &OutdatedRecord) -> AutoDecision {
    if record.is_at_wanted() {
        AutoDecision::NoAction
    } else {
        AutoDecision::Selected(UpdateDirective::new(&record.name, &record.wanted))
    }
}
