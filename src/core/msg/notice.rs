use serde::{Deserialize, Serialize};

use crate::core::state::notices::NoticeLevel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NoticeMsg {
    Push { level: NoticeLevel, text: String },
    Dismiss(u64),
}
