//! Transient toast notifications
//!
//! Notices stack without a cap; each one removes itself after the configured
//! duration through a scheduled dismiss.

use serde::{Deserialize, Serialize};

use crate::core::{cmd::Cmd, msg::notice::NoticeMsg};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    #[default]
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct NoticesState {
    items: Vec<Notice>,
    next_id: u64,
    duration_ms: u64,
}

impl Default for NoticesState {
    fn default() -> Self {
        Self::new(3000)
    }
}

impl NoticesState {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            duration_ms,
        }
    }

    /// Oldest first
    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.items.last()
    }

    /// Shows a notice and returns the command that will take it down again.
    pub fn push(&mut self, level: NoticeLevel, text: impl Into<String>) -> Cmd {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice {
            id,
            level,
            text: text.into(),
        });
        Cmd::ScheduleNoticeDismiss {
            id,
            after_ms: self.duration_ms,
        }
    }

    pub fn info(&mut self, text: impl Into<String>) -> Cmd {
        self.push(NoticeLevel::Info, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> Cmd {
        self.push(NoticeLevel::Error, text)
    }

    /// Returns false when the notice was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|notice| notice.id != id);
        self.items.len() != before
    }

    pub fn update(&mut self, msg: NoticeMsg) -> Vec<Cmd> {
        match msg {
            NoticeMsg::Push { level, text } => vec![self.push(level, text)],
            NoticeMsg::Dismiss(id) => {
                if self.dismiss(id) {
                    vec![Cmd::RequestRender]
                } else {
                    vec![]
                }
            }
        }
    }
}
