use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::{
    core::{
        msg::{
            catalog::CatalogMsg, dialog::DialogMsg, plans::PlansMsg, review::ReviewMsg,
            system::SystemMsg, ui::UiMsg, Msg,
        },
        raw_msg::RawMsg,
        state::{reviews::FormField, ui::Tab, AppState},
    },
    presentation::{components::dialog::dialog_area, config::keybindings::Action},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),
        RawMsg::Paste(text) => translate_paste(text, state),

        RawMsg::Error(error) => vec![Msg::notify_error(error)],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings, innermost surface first
    if state.dialog.is_open() {
        translate_dialog_keys(key, state)
    } else if state.reviews.is_composing() {
        translate_form_keys(key, state)
    } else if state.catalog.is_search_focused() {
        translate_search_keys(key)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

fn translate_dialog_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if state.dialog.is_upload_focused() {
        return match key.code {
            KeyCode::Esc => vec![Msg::Dialog(DialogMsg::BlurUpload)],
            KeyCode::Enter => vec![Msg::Dialog(DialogMsg::UploadProof)],
            _ => vec![Msg::Dialog(DialogMsg::UploadInput(key))],
        };
    }

    // Escape always closes, whatever the bindings say
    if key.code == KeyCode::Esc {
        return vec![Msg::Dialog(DialogMsg::Close)];
    }

    match state.config.config.keybindings.action_for(&key) {
        Some(Action::CloseDialog) => vec![Msg::Dialog(DialogMsg::Close)],
        Some(Action::ScrollUp) => vec![Msg::Dialog(DialogMsg::ScrollUp)],
        Some(Action::ScrollDown) => vec![Msg::Dialog(DialogMsg::ScrollDown)],
        Some(Action::CopySensitivity) => vec![Msg::Dialog(DialogMsg::CopySensitivity)],
        Some(Action::FocusUpload) => vec![Msg::Dialog(DialogMsg::FocusUpload)],
        Some(Action::Select) if state.dialog.active().is_payment() => {
            vec![Msg::Dialog(DialogMsg::UploadProof)]
        }
        Some(Action::Quit) => vec![Msg::System(SystemMsg::Quit)],
        Some(Action::Suspend) => vec![Msg::System(SystemMsg::Suspend)],
        _ => vec![],
    }
}

fn translate_form_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let focus = state.reviews.form().map(|form| form.focus);
    match key {
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::Review(ReviewMsg::Submit)],

        KeyEvent {
            code: KeyCode::Esc, ..
        } => vec![Msg::Review(ReviewMsg::CancelForm)],

        KeyEvent {
            code: KeyCode::Tab, ..
        } => vec![Msg::Review(ReviewMsg::FocusNextField)],

        KeyEvent {
            code: KeyCode::BackTab,
            ..
        } => vec![Msg::Review(ReviewMsg::FocusPrevField)],

        // Enter advances, except inside the multi-line comment
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } if focus != Some(FormField::Review) => vec![Msg::Review(ReviewMsg::FocusNextField)],

        KeyEvent {
            code: KeyCode::Char(c @ '1'..='5'),
            ..
        } if focus == Some(FormField::Rating) => c
            .to_digit(10)
            .and_then(|digit| u8::try_from(digit).ok())
            .map(|rating| vec![Msg::Review(ReviewMsg::SetRating(rating))])
            .unwrap_or_default(),

        _ => vec![Msg::Review(ReviewMsg::FormInput(key))],
    }
}

fn translate_search_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
            vec![Msg::Catalog(CatalogMsg::BlurSearch)]
        }
        _ => vec![Msg::Catalog(CatalogMsg::SearchInput(key))],
    }
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    match state.config.config.keybindings.action_for(&key) {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![], // No matching keybinding found
    }
}

fn translate_action_to_msg(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::NextTab => vec![Msg::Ui(UiMsg::NextTab)],
        Action::PrevTab => vec![Msg::Ui(UiMsg::PrevTab)],
        Action::ScrollUp
        | Action::ScrollDown
        | Action::ScrollToTop
        | Action::ScrollToBottom => translate_list_motion(action, state),
        Action::Select => translate_select(state),
        Action::FocusSearch => vec![
            Msg::Ui(UiMsg::SelectTab(Tab::Catalog)),
            Msg::Catalog(CatalogMsg::FocusSearch),
        ],
        Action::NewReview => vec![
            Msg::Ui(UiMsg::SelectTab(Tab::Reviews)),
            Msg::Review(ReviewMsg::OpenForm),
        ],
        Action::NextFilter if state.ui.tab() == Tab::Reviews => {
            vec![Msg::Review(ReviewMsg::NextFilter)]
        }
        Action::PrevFilter if state.ui.tab() == Tab::Reviews => {
            vec![Msg::Review(ReviewMsg::PrevFilter)]
        }
        // Nothing to act on outside their own context
        Action::NextFilter
        | Action::PrevFilter
        | Action::CloseDialog
        | Action::CopySensitivity
        | Action::FocusUpload => vec![],
    }
}

/// Moves the selection of the list on the current tab
fn translate_list_motion(action: Action, state: &AppState) -> Vec<Msg> {
    if state.ui.is_scroll_locked() {
        return vec![];
    }
    let msg = match (state.ui.tab(), action) {
        (Tab::Catalog, Action::ScrollUp) => Msg::Catalog(CatalogMsg::SelectPrev),
        (Tab::Catalog, Action::ScrollDown) => Msg::Catalog(CatalogMsg::SelectNext),
        (Tab::Catalog, Action::ScrollToTop) => Msg::Catalog(CatalogMsg::SelectFirst),
        (Tab::Catalog, _) => Msg::Catalog(CatalogMsg::SelectLast),
        (Tab::Plans, Action::ScrollUp) => Msg::Plans(PlansMsg::SelectPrev),
        (Tab::Plans, Action::ScrollDown) => Msg::Plans(PlansMsg::SelectNext),
        (Tab::Plans, Action::ScrollToTop) => Msg::Plans(PlansMsg::SelectFirst),
        (Tab::Plans, _) => Msg::Plans(PlansMsg::SelectLast),
        (Tab::Reviews, Action::ScrollUp) => Msg::Review(ReviewMsg::SelectPrev),
        (Tab::Reviews, Action::ScrollDown) => Msg::Review(ReviewMsg::SelectNext),
        (Tab::Reviews, Action::ScrollToTop) => Msg::Review(ReviewMsg::SelectFirst),
        (Tab::Reviews, _) => Msg::Review(ReviewMsg::SelectLast),
    };
    vec![msg]
}

/// Opens the dialog for whatever is highlighted on the current tab
fn translate_select(state: &AppState) -> Vec<Msg> {
    let msg = match state.ui.tab() {
        Tab::Catalog => state
            .catalog
            .selected_device()
            .map(|device| DialogMsg::OpenDeviceDetail(device.name.clone())),
        Tab::Plans => state
            .plans
            .selected_plan()
            .map(|plan| DialogMsg::OpenPayment(plan.tier)),
        Tab::Reviews => state
            .reviews
            .selected_review()
            .map(|review| DialogMsg::OpenDeviceDetail(review.device.clone())),
    };
    msg.map(|msg| vec![Msg::Dialog(msg)]).unwrap_or_default()
}

fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    let position = Position::new(mouse.column, mouse.row);
    let inside_dialog =
        state.dialog.is_open() && dialog_area(state.ui.viewport()).contains(position);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if state.dialog.is_open() && !inside_dialog => {
            vec![Msg::Dialog(DialogMsg::Close)]
        }
        MouseEventKind::ScrollUp if inside_dialog => vec![Msg::Dialog(DialogMsg::ScrollUp)],
        MouseEventKind::ScrollDown if inside_dialog => vec![Msg::Dialog(DialogMsg::ScrollDown)],
        MouseEventKind::ScrollUp => translate_list_motion(Action::ScrollUp, state),
        MouseEventKind::ScrollDown => translate_list_motion(Action::ScrollDown, state),
        _ => vec![],
    }
}

/// Pasted text goes to whichever text box has focus
fn translate_paste(text: String, state: &AppState) -> Vec<Msg> {
    if state.dialog.is_upload_focused() {
        vec![Msg::Dialog(DialogMsg::UploadPaste(text))]
    } else if state.dialog.is_open() {
        vec![]
    } else if state.reviews.is_composing() {
        vec![Msg::Review(ReviewMsg::FormPaste(text))]
    } else if state.catalog.is_search_focused() {
        vec![Msg::Catalog(CatalogMsg::SearchPaste(text))]
    } else {
        vec![]
    }
}
