//! Cursor over a list whose length can change underneath it

/// Selected row of a list. `None` means nothing is highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn select(&mut self, index: usize) {
        self.selected_index = Some(index);
    }

    pub fn deselect(&mut self) {
        self.selected_index = None;
    }

    pub fn scroll_up(&mut self) {
        if let Some(index) = self.selected_index {
            self.selected_index = Some(index.saturating_sub(1));
        }
    }

    /// Moves down one row; the first call on an unselected list selects row 0.
    pub fn scroll_down(&mut self, len: usize) {
        match self.selected_index {
            Some(index) if index + 1 < len => self.selected_index = Some(index + 1),
            None if len > 0 => self.selected_index = Some(0),
            _ => {}
        }
    }

    pub fn select_first(&mut self, len: usize) {
        self.selected_index = if len > 0 { Some(0) } else { None };
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected_index = len.checked_sub(1);
    }

    /// Keeps the selection inside a list that just shrank or emptied.
    pub fn clamp(&mut self, len: usize) {
        if let Some(index) = self.selected_index {
            self.selected_index = if len == 0 {
                None
            } else {
                Some(index.min(len - 1))
            };
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected_index.is_some()
    }
}
