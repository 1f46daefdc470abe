//! Modal dialogs
//!
//! At most one dialog is open. Opening another replaces it.

use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::{
    core::{state::input::InputState, textarea_engine::TextAreaEngine},
    domain::plan::PlanTier,
};

/// Upper bound for dialog scrolling; the view clamps to the real content height
const MAX_SCROLL: u16 = 64;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveDialog {
    #[default]
    None,
    DeviceDetail(String),
    Payment(PlanTier),
}

impl ActiveDialog {
    pub fn is_open(&self) -> bool {
        !matches!(self, ActiveDialog::None)
    }

    pub fn is_payment(&self) -> bool {
        matches!(self, ActiveDialog::Payment(_))
    }

    pub fn device_name(&self) -> Option<&str> {
        match self {
            ActiveDialog::DeviceDetail(name) => Some(name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DialogState {
    active: ActiveDialog,
    /// Path of the payment screenshot
    upload: InputState,
    upload_focused: bool,
    scroll: u16,
}

impl DialogState {
    pub fn active(&self) -> &ActiveDialog {
        &self.active
    }

    pub fn is_open(&self) -> bool {
        self.active.is_open()
    }

    pub fn upload(&self) -> &InputState {
        &self.upload
    }

    pub fn is_upload_focused(&self) -> bool {
        self.upload_focused
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn open(&mut self, dialog: ActiveDialog) {
        log::debug!("Opening dialog {dialog:?} (was {:?})", self.active);
        self.active = dialog;
        self.scroll = 0;
        self.upload_focused = false;
    }

    pub fn close(&mut self) {
        self.active = ActiveDialog::None;
        self.scroll = 0;
        self.upload_focused = false;
        self.upload.clear();
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = (self.scroll + 1).min(MAX_SCROLL);
    }

    /// The upload box only exists on the payment dialog
    pub fn focus_upload(&mut self) -> bool {
        self.upload_focused = self.active.is_payment();
        self.upload_focused
    }

    pub fn blur_upload(&mut self) {
        self.upload_focused = false;
    }

    pub fn clear_upload(&mut self) {
        self.upload.clear();
    }

    pub fn edit_upload(&mut self, edit: impl FnOnce(&InputState) -> InputState) -> bool {
        if !self.upload_focused {
            return false;
        }
        self.upload = edit(&self.upload);
        true
    }

    pub fn type_upload(&mut self, key: KeyEvent, engine: &dyn TextAreaEngine) -> bool {
        self.edit_upload(|upload| engine.apply_keys(upload, &[key]))
    }
}
