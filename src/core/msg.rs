use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod dialog;
pub mod notice;
pub mod plans;
pub mod review;
pub mod system;
pub mod ui;

use catalog::CatalogMsg;
use dialog::DialogMsg;
use notice::NoticeMsg;
use plans::PlansMsg;
use review::ReviewMsg;
use system::SystemMsg;
use ui::UiMsg;

use crate::core::state::notices::NoticeLevel;

/// Domain messages representing application intent
/// These are processed by the update function, one at a time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Ui(UiMsg),
    Catalog(CatalogMsg),
    Plans(PlansMsg),
    Review(ReviewMsg),
    Dialog(DialogMsg),
    Notice(NoticeMsg),
}

impl Msg {
    pub fn notify(text: impl Into<String>) -> Self {
        Msg::Notice(NoticeMsg::Push {
            level: NoticeLevel::Info,
            text: text.into(),
        })
    }

    pub fn notify_error(text: impl Into<String>) -> Self {
        Msg::Notice(NoticeMsg::Push {
            level: NoticeLevel::Error,
            text: text.into(),
        })
    }

    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(
            self,
            Msg::Catalog(CatalogMsg::SearchInput(_))
                | Msg::Review(ReviewMsg::FormInput(_))
                | Msg::Dialog(DialogMsg::UploadInput(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    #[test]
    fn test_msg_frequent_detection() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(Msg::Catalog(CatalogMsg::SearchInput(key)).is_frequent());
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Dialog(DialogMsg::Close).is_frequent());
    }

    #[test]
    fn test_notify_helpers() {
        assert_eq!(
            Msg::notify("hi"),
            Msg::Notice(NoticeMsg::Push {
                level: NoticeLevel::Info,
                text: "hi".to_string()
            })
        );
        assert!(matches!(
            Msg::notify_error("boom"),
            Msg::Notice(NoticeMsg::Push {
                level: NoticeLevel::Error,
                ..
            })
        ));
    }

    #[test]
    fn test_msg_serialization() -> color_eyre::Result<()> {
        let msg = Msg::Catalog(CatalogMsg::ApplySearch("poco".to_string()));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: Msg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
