use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::plan::PlanTier;

/// Device-detail and payment dialogs, plus the results of their side effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DialogMsg {
    OpenDeviceDetail(String),
    OpenPayment(PlanTier),
    Close,

    ScrollUp,
    ScrollDown,

    // Payment dialog upload box
    FocusUpload,
    BlurUpload,
    UploadInput(KeyEvent),
    UploadPaste(String),
    UploadProof,
    ProofAccepted(String),
    ProofRejected { path: String, reason: String },

    // Device-detail clipboard copy
    CopySensitivity,
    SensitivityCopied,
    CopyFailed(String),
}
