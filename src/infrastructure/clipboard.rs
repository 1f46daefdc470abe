//! System clipboard access
//!
//! Writes are blocking on most platforms, so callers run them on the blocking
//! thread pool.

use std::sync::{Arc, Mutex};

use color_eyre::eyre::{eyre, Result};

pub trait ClipboardWriter: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// arboard-backed clipboard. A handle is opened per write since the
/// underlying connection may not outlive the thread that created it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| eyre!("Clipboard not available: {e}"))?;
        clipboard
            .set_text(text)
            .map_err(|e| eyre!("Failed to copy to clipboard: {e}"))?;
        Ok(())
    }
}

/// In-memory clipboard for tests and headless runs
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

impl ClipboardWriter for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(eyre!("Clipboard not available"));
        }
        let mut guard = self
            .contents
            .lock()
            .map_err(|_| eyre!("Clipboard lock poisoned"))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_records_last_write() -> Result<()> {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);

        clipboard.write_text("first")?;
        clipboard.write_text("second")?;
        assert_eq!(clipboard.contents().as_deref(), Some("second"));
        Ok(())
    }

    #[test]
    fn test_failing_clipboard() {
        let clipboard = MemoryClipboard::failing();
        assert!(clipboard.write_text("anything").is_err());
        assert_eq!(clipboard.contents(), None);
    }
}
