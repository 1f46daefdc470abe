use crossterm::event::KeyEvent;

use crate::core::state::input::InputState;

/// Engine interface that applies a sequence of key events to a text box snapshot
/// and returns the resulting snapshot. The implementation should be deterministic
/// and free of external side effects so that it can be used from the pure update path.
pub trait TextAreaEngine: Send + Sync {
    /// Apply keys to the given snapshot and return the updated snapshot.
    fn apply_keys(&self, snapshot: &InputState, keys: &[KeyEvent]) -> InputState;

    /// Insert pasted text at the cursor.
    fn paste(&self, snapshot: &InputState, text: &str) -> InputState;
}

/// No-op engine used for tests or when no editing should occur.
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &InputState, _keys: &[KeyEvent]) -> InputState {
        snapshot.clone()
    }

    fn paste(&self, snapshot: &InputState, _text: &str) -> InputState {
        snapshot.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_engine_returns_same_snapshot() {
        let engine = NoopTextAreaEngine;
        let snap = InputState::with_content("abc");
        assert_eq!(engine.apply_keys(&snap, &[]), snap);
        assert_eq!(engine.paste(&snap, "xyz"), snap);
    }
}
