use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
    Suspend,
}

/// Side effects requested by `update`. Results come back as `Msg`s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Debounced search pass; a newer request replaces a pending one
    ScheduleSearch {
        query: String,
    },
    ScheduleNoticeDismiss {
        id: u64,
        after_ms: u64,
    },
    CopyToClipboard {
        text: String,
    },
    /// Checks that the proof path names an existing regular file
    CheckProofFile {
        path: String,
    },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via bounded render_req_sender and coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(mut commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.pop().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command completes later, reporting back through a message
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::ScheduleSearch { .. }
            | Cmd::ScheduleNoticeDismiss { .. }
            | Cmd::CopyToClipboard { .. }
            | Cmd::CheckProofFile { .. } => true,

            Cmd::Tui(..)
            | Cmd::RequestRender
            | Cmd::LogError { .. }
            | Cmd::LogInfo { .. }
            | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // UI-related has highest priority
            Cmd::Tui(..) | Cmd::RequestRender => 0,

            // Direct results of a user action
            Cmd::CopyToClipboard { .. } | Cmd::CheckProofFile { .. } => 1,

            // Timers
            Cmd::ScheduleSearch { .. } | Cmd::ScheduleNoticeDismiss { .. } => 2,

            // Logging have lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,

            // Batch takes highest priority of contained commands
            Cmd::Batch(cmds) => cmds.iter().map(|cmd| cmd.priority()).min().unwrap_or(255),

            Cmd::None => 255,
        }
    }

    /// Short name for execution logs
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::ScheduleSearch { .. } => "ScheduleSearch",
            Cmd::ScheduleNoticeDismiss { .. } => "ScheduleNoticeDismiss",
            Cmd::CopyToClipboard { .. } => "CopyToClipboard",
            Cmd::CheckProofFile { .. } => "CheckProofFile",
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)",
            Cmd::Tui(TuiCommand::Suspend) => "Tui(Suspend)",
            Cmd::RequestRender => "RequestRender",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
            Cmd::Batch(_) => "Batch",
            Cmd::None => "None",
        }
    }
}
