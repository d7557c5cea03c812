use crate::commands::{sort, stats, CmdResult};
use crate::model::User;
use crate::state::ViewState;

/// Projects the visible record set through the active view configuration:
/// summary counts over the visible records, sort applied last for display.
pub fn run(visible: &[User], view: &ViewState) -> CmdResult {
    let summary = stats::run(visible);
    let ordered = sort::run(visible, view.sort_key.as_deref(), view.direction);
    CmdResult::default()
        .with_listed_users(ordered)
        .with_summary(summary)
}
