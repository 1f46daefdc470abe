use serde::{Deserialize, Serialize};

/// Process and terminal lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    Quit,
    /// Hand the terminal back to the shell (ctrl-z)
    Suspend,
    /// Back in the foreground after a suspend
    Resume,
    /// New terminal size in columns and rows
    Resize(u16, u16),
}
