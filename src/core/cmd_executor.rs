use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::{catalog::CatalogMsg, dialog::DialogMsg, notice::NoticeMsg, Msg},
    },
    domain::debounce::Debouncer,
    infrastructure::clipboard::{ClipboardWriter, SystemClipboard},
};

/// Command executor that performs side effects and reports results back as `Msg`s
#[derive(Clone)]
pub struct CmdExecutor {
    msg_sender: mpsc::UnboundedSender<Msg>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::Sender<()>>,
    search: Arc<Mutex<Debouncer<String>>>,
    clipboard: Arc<dyn ClipboardWriter>,
}

impl CmdExecutor {
    /// Create a new command executor. Search passes are debounced by `search_delay`.
    pub fn new(msg_sender: mpsc::UnboundedSender<Msg>, search_delay: Duration) -> Self {
        let search_sender = msg_sender.clone();
        let search = Debouncer::new(search_delay, move |query: String| {
            let _ = search_sender.send(Msg::Catalog(CatalogMsg::ApplySearch(query)));
        });
        Self {
            msg_sender,
            tui_sender: None,
            render_req_sender: None,
            search: Arc::new(Mutex::new(search)),
            clipboard: Arc::new(SystemClipboard),
        }
    }

    /// Replace the clipboard backend (tests, headless sessions)
    pub fn with_clipboard(mut self, clipboard: Arc<dyn ClipboardWriter>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::Sender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command. Timers, clipboard writes and file checks are
    /// spawned on the tokio runtime and answer through the message channel.
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {
                // No-op command, nothing to execute
            }

            Cmd::ScheduleSearch { query } => {
                let mut search = self
                    .search
                    .lock()
                    .map_err(|_| eyre!("search debouncer lock poisoned"))?;
                search.call(query.clone());
            }

            Cmd::ScheduleNoticeDismiss { id, after_ms } => {
                let tx = self.msg_sender.clone();
                let id = *id;
                let delay = Duration::from_millis(*after_ms);
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(Msg::Notice(NoticeMsg::Dismiss(id)));
                });
            }

            Cmd::CopyToClipboard { text } => {
                let tx = self.msg_sender.clone();
                let clipboard = Arc::clone(&self.clipboard);
                let text = text.clone();
                tokio::spawn(async move {
                    let written =
                        tokio::task::spawn_blocking(move || clipboard.write_text(&text)).await;
                    let msg = match written {
                        Ok(Ok(())) => DialogMsg::SensitivityCopied,
                        Ok(Err(e)) => DialogMsg::CopyFailed(e.to_string()),
                        Err(e) => DialogMsg::CopyFailed(e.to_string()),
                    };
                    let _ = tx.send(Msg::Dialog(msg));
                });
            }

            Cmd::CheckProofFile { path } => {
                let tx = self.msg_sender.clone();
                let path = path.clone();
                tokio::spawn(async move {
                    let msg = match tokio::fs::metadata(&path).await {
                        Ok(meta) if meta.is_file() => DialogMsg::ProofAccepted(path),
                        Ok(_) => DialogMsg::ProofRejected {
                            path,
                            reason: "not a regular file".to_string(),
                        },
                        Err(e) => DialogMsg::ProofRejected {
                            path,
                            reason: e.to_string(),
                        },
                    };
                    let _ = tx.send(Msg::Dialog(msg));
                });
            }

            Cmd::Tui(tui_cmd) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(tui_cmd.clone());
                } else {
                    // No TUI sender configured: drop with warning
                    log::warn!("CmdExecutor: TUI sender not configured; dropping {tui_cmd:?}");
                }
            }

            Cmd::RequestRender => {
                // A full channel already holds a pending render request
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.try_send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            is_msg_sender_closed: self.msg_sender.is_closed(),
            has_tui_sender: self.tui_sender.is_some(),
            has_render_sender: self.render_req_sender.is_some(),
            search_pending: self
                .search
                .lock()
                .map(|search| search.is_pending())
                .unwrap_or(false),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub is_msg_sender_closed: bool,
    pub has_tui_sender: bool,
    pub has_render_sender: bool,
    pub search_pending: bool,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::clipboard::MemoryClipboard;

    fn create_test_executor() -> (CmdExecutor, mpsc::UnboundedReceiver<Msg>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let executor = CmdExecutor::new(tx, Duration::from_millis(300));
        (executor, rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_dismiss_fires_after_duration() -> Result<()> {
        let (executor, mut rx) = create_test_executor();
        executor.execute_command(&Cmd::ScheduleNoticeDismiss {
            id: 4,
            after_ms: 3000,
        })?;

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(rx.try_recv()?, Msg::Notice(NoticeMsg::Dismiss(4)));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_is_debounced() -> Result<()> {
        let (executor, mut rx) = create_test_executor();
        for query in ["p", "po", "poc", "poco"] {
            executor.execute_command(&Cmd::ScheduleSearch {
                query: query.to_string(),
            })?;
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        assert!(executor.get_stats().search_pending);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(
            rx.try_recv()?,
            Msg::Catalog(CatalogMsg::ApplySearch("poco".to_string()))
        );
        assert!(rx.try_recv().is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_copy_reports_success() -> Result<()> {
        let (executor, mut rx) = create_test_executor();
        let clipboard = MemoryClipboard::new();
        let executor = executor.with_clipboard(Arc::new(clipboard.clone()));

        executor.execute_command(&Cmd::CopyToClipboard {
            text: "Device: POCO X3\n".to_string(),
        })?;

        assert_eq!(
            rx.recv().await,
            Some(Msg::Dialog(DialogMsg::SensitivityCopied))
        );
        assert_eq!(clipboard.contents().as_deref(), Some("Device: POCO X3\n"));
        Ok(())
    }

    #[tokio::test]
    async fn test_copy_reports_failure() -> Result<()> {
        let (executor, mut rx) = create_test_executor();
        let executor = executor.with_clipboard(Arc::new(MemoryClipboard::failing()));

        executor.execute_command(&Cmd::CopyToClipboard {
            text: "x".to_string(),
        })?;

        assert!(matches!(
            rx.recv().await,
            Some(Msg::Dialog(DialogMsg::CopyFailed(_)))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_proof_file_check() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let proof = dir.path().join("proof.png");
        std::fs::write(&proof, b"png")?;
        let proof = proof.to_string_lossy().to_string();
        let missing = dir.path().join("missing.png").to_string_lossy().to_string();
        let folder = dir.path().to_string_lossy().to_string();

        let (executor, mut rx) = create_test_executor();

        executor.execute_command(&Cmd::CheckProofFile {
            path: proof.clone(),
        })?;
        assert_eq!(
            rx.recv().await,
            Some(Msg::Dialog(DialogMsg::ProofAccepted(proof)))
        );

        executor.execute_command(&Cmd::CheckProofFile {
            path: missing.clone(),
        })?;
        assert!(matches!(
            rx.recv().await,
            Some(Msg::Dialog(DialogMsg::ProofRejected { path, .. })) if path == missing
        ));

        executor.execute_command(&Cmd::CheckProofFile { path: folder })?;
        assert!(matches!(
            rx.recv().await,
            Some(Msg::Dialog(DialogMsg::ProofRejected { reason, .. })) if reason == "not a regular file"
        ));
        Ok(())
    }

    #[test]
    fn test_execute_resize() -> Result<()> {
        let (mut executor, _rx) = create_test_executor();
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel();
        executor.set_tui_sender(tui_tx);

        executor.execute_command(&Cmd::Tui(TuiCommand::Resize {
            width: 100,
            height: 50,
        }))?;

        assert_eq!(
            tui_rx.try_recv()?,
            TuiCommand::Resize {
                width: 100,
                height: 50
            }
        );
        Ok(())
    }

    #[test]
    fn test_render_requests_coalesce() -> Result<()> {
        let (mut executor, _rx) = create_test_executor();
        let (render_tx, mut render_rx) = mpsc::channel(1);
        executor.set_render_request_sender(render_tx);

        executor.execute_commands(&[Cmd::RequestRender, Cmd::RequestRender])?;

        assert!(render_rx.try_recv().is_ok());
        assert!(render_rx.try_recv().is_err());
        Ok(())
    }

    #[test]
    fn test_execute_batch_and_log() -> Result<()> {
        let (executor, _rx) = create_test_executor();
        let log = executor.execute_commands(&[
            Cmd::Batch(vec![
                Cmd::LogInfo {
                    message: "info".to_string(),
                },
                Cmd::None,
            ]),
            Cmd::LogError {
                message: "error".to_string(),
            },
        ])?;
        assert_eq!(
            log,
            vec![
                "✓ Executed: Batch".to_string(),
                "✓ Executed: LogError".to_string()
            ]
        );
        Ok(())
    }

    #[test]
    fn test_stats() {
        let (executor, rx) = create_test_executor();
        let stats = executor.get_stats();
        assert!(!stats.is_msg_sender_closed);
        assert!(!stats.has_tui_sender);
        assert!(!stats.search_pending);
        drop(rx);
        assert!(executor.get_stats().is_msg_sender_closed);
    }
}
