use crate::commands::stats::Summary;
use crate::model::User;

pub mod export;
pub mod filter;
pub mod list;
pub mod sort;
pub mod stats;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured result of a command, free of presentation concerns.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records to render in the list view, in display order
    pub listed_users: Vec<User>,
    /// The record for a detail view
    pub user: Option<User>,
    /// Grouped summary counts over the listed records
    pub summary: Option<Summary>,
    /// Serialized export payload
    pub export: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_users(mut self, users: Vec<User>) -> Self {
        self.listed_users = users;
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_export(mut self, payload: String) -> Self {
        self.export = Some(payload);
        self
    }
}
