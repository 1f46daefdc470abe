use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::review::DeviceFilter;

/// Review list, device filter and the submission form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReviewMsg {
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,

    NextFilter,
    PrevFilter,
    SetFilter(DeviceFilter),

    OpenForm,
    CancelForm,
    FocusNextField,
    FocusPrevField,
    FormInput(KeyEvent),
    FormPaste(String),
    SetRating(u8),
    Submit,
}

impl ReviewMsg {
    /// Whether the message only makes sense while the form is open
    pub fn needs_form(&self) -> bool {
        matches!(
            self,
            ReviewMsg::CancelForm
                | ReviewMsg::FocusNextField
                | ReviewMsg::FocusPrevField
                | ReviewMsg::FormInput(_)
                | ReviewMsg::FormPaste(_)
                | ReviewMsg::SetRating(_)
                | ReviewMsg::Submit
        )
    }
}
