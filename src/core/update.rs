use crate::{
    core::{
        clock::{Clock, SystemClock},
        cmd::Cmd,
        msg::{dialog::DialogMsg, review::ReviewMsg, system::SystemMsg, Msg},
        state::{dialog::ActiveDialog, AppState},
        textarea_engine::TextAreaEngine,
    },
    infrastructure::tui::textarea_engine::TuiTextAreaEngine,
};

pub const REVIEW_THANKS: &str = "Thank you for your review! It has been submitted successfully.";
pub const COPY_DONE: &str = "Sensitivity settings copied to clipboard!";
pub const UPLOAD_MISSING: &str = "Please select a screenshot to upload.";
pub const UPLOAD_DONE: &str = "Screenshot uploaded successfully! We will contact you shortly.";

/// Collaborators `update` needs but must not own
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
    pub clock: &'a dyn Clock,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    static ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;
    static CLOCK: SystemClock = SystemClock;
    update_with_context(
        msg,
        state,
        &UpdateContext {
            text_area: &ENGINE,
            clock: &CLOCK,
        },
    )
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            if let SystemMsg::Resize(width, height) = system_msg {
                state.ui.set_viewport(width, height);
            }
            state.system.update(system_msg)
        }

        Msg::Ui(ui_msg) => state.ui.update(ui_msg),

        Msg::Catalog(catalog_msg) => state.catalog.update(catalog_msg, ctx.text_area),

        Msg::Plans(plans_msg) => state.plans.update(plans_msg),

        Msg::Review(ReviewMsg::Submit) => submit_review(&mut state, ctx),
        Msg::Review(review_msg) => state.reviews.update(review_msg, ctx.text_area),

        Msg::Dialog(dialog_msg) => update_dialog(&mut state, dialog_msg, ctx),

        Msg::Notice(notice_msg) => state.notices.update(notice_msg),
    };
    (state, commands)
}

fn submit_review(state: &mut AppState, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
    match state.reviews.submit_form(ctx.clock.now()) {
        None => vec![],
        Some(Ok(review)) => {
            log::info!("Review {} submitted for {}", review.id, review.device);
            vec![state.notices.info(REVIEW_THANKS), Cmd::RequestRender]
        }
        Some(Err(e)) => {
            log::debug!("Review rejected: {e}");
            vec![state.notices.error(e.to_string()), Cmd::RequestRender]
        }
    }
}

fn update_dialog(state: &mut AppState, msg: DialogMsg, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
    match msg {
        DialogMsg::OpenDeviceDetail(name) => {
            if let Err(e) = state.catalog.catalog().lookup(&name) {
                let message = e.to_string();
                return vec![
                    state.notices.error(message.clone()),
                    Cmd::LogError { message },
                    Cmd::RequestRender,
                ];
            }
            open_dialog(state, ActiveDialog::DeviceDetail(name))
        }
        DialogMsg::OpenPayment(tier) => {
            if let Err(e) = state.plans.book().get(tier) {
                let message = e.to_string();
                return vec![
                    state.notices.error(message.clone()),
                    Cmd::LogError { message },
                    Cmd::RequestRender,
                ];
            }
            open_dialog(state, ActiveDialog::Payment(tier))
        }
        DialogMsg::Close => {
            state.dialog.close();
            state.ui.unlock_scroll();
            vec![Cmd::RequestRender]
        }
        DialogMsg::ScrollUp => {
            state.dialog.scroll_up();
            vec![Cmd::RequestRender]
        }
        DialogMsg::ScrollDown => {
            state.dialog.scroll_down();
            vec![Cmd::RequestRender]
        }
        DialogMsg::FocusUpload => {
            state.dialog.focus_upload();
            vec![Cmd::RequestRender]
        }
        DialogMsg::BlurUpload => {
            state.dialog.blur_upload();
            vec![Cmd::RequestRender]
        }
        DialogMsg::UploadInput(key) => {
            if state.dialog.type_upload(key, ctx.text_area) {
                vec![Cmd::RequestRender]
            } else {
                vec![]
            }
        }
        DialogMsg::UploadPaste(text) => {
            if state
                .dialog
                .edit_upload(|upload| ctx.text_area.paste(upload, &text))
            {
                vec![Cmd::RequestRender]
            } else {
                vec![]
            }
        }
        DialogMsg::UploadProof => {
            if !state.dialog.active().is_payment() {
                return vec![];
            }
            let path = state.dialog.upload().value().trim().to_string();
            if path.is_empty() {
                vec![state.notices.error(UPLOAD_MISSING), Cmd::RequestRender]
            } else {
                vec![Cmd::CheckProofFile { path }]
            }
        }
        DialogMsg::ProofAccepted(path) => {
            if !awaiting_proof(state, &path) {
                log::debug!("Dropping stale proof check for {path}");
                return vec![];
            }
            log::info!("Payment proof selected: {path}");
            state.dialog.clear_upload();
            state.dialog.blur_upload();
            vec![state.notices.info(UPLOAD_DONE), Cmd::RequestRender]
        }
        DialogMsg::ProofRejected { path, reason } => {
            if !awaiting_proof(state, &path) {
                log::debug!("Dropping stale proof check for {path}");
                return vec![];
            }
            let message = format!("Could not use {path}: {reason}");
            vec![
                state.notices.error(message.clone()),
                Cmd::LogError { message },
                Cmd::RequestRender,
            ]
        }
        DialogMsg::CopySensitivity => {
            let Some(name) = state.dialog.active().device_name() else {
                return vec![];
            };
            match state.catalog.catalog().lookup(name) {
                Ok(device) => vec![Cmd::CopyToClipboard {
                    text: device.clipboard_text(),
                }],
                Err(e) => vec![state.notices.error(e.to_string()), Cmd::RequestRender],
            }
        }
        DialogMsg::SensitivityCopied => vec![state.notices.info(COPY_DONE), Cmd::RequestRender],
        DialogMsg::CopyFailed(reason) => {
            let message = format!("Failed to copy settings: {reason}");
            vec![
                state.notices.error(message.clone()),
                Cmd::LogError { message },
                Cmd::RequestRender,
            ]
        }
    }
}

/// A file check result only applies to the payment dialog that asked for it.
fn awaiting_proof(state: &AppState, path: &str) -> bool {
    state.dialog.active().is_payment() && state.dialog.upload().value().trim() == path
}

/// Replaces any open dialog. Background scrolling is frozen only for the
/// payment dialog on mobile.
fn open_dialog(state: &mut AppState, dialog: ActiveDialog) -> Vec<Cmd> {
    let lock = state.ui.platform().is_mobile() && dialog.is_payment();
    state.dialog.open(dialog);
    if lock {
        state.ui.lock_scroll();
    } else {
        state.ui.unlock_scroll();
    }
    vec![Cmd::RequestRender]
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::{
            clock::FixedClock,
            msg::{notice::NoticeMsg, review::ReviewMsg},
            state::notices::NoticeLevel,
        },
        domain::{plan::PlanTier, seed::StoreSeed},
        infrastructure::{config::Config, platform::Platform},
    };

    fn state_on(platform: Platform) -> AppState {
        let seed = StoreSeed::builtin().unwrap_or_default();
        let config = Config::builtin().unwrap_or_default();
        AppState::new_with_config(config, seed, platform)
    }

    fn run(state: AppState, msgs: Vec<Msg>) -> (AppState, Vec<Cmd>) {
        let clock = FixedClock(
            Local
                .with_ymd_and_hms(2024, 6, 1, 9, 0, 0)
                .single()
                .expect("valid local time"),
        );
        let ctx = UpdateContext {
            text_area: &TuiTextAreaEngine,
            clock: &clock,
        };
        msgs.into_iter()
            .fold((state, vec![]), |(state, mut cmds), msg| {
                let (state, new_cmds) = update_with_context(msg, state, &ctx);
                cmds.extend(new_cmds);
                (state, cmds)
            })
    }

    fn latest_notice(state: &AppState) -> Option<(NoticeLevel, &str)> {
        state
            .notices
            .latest()
            .map(|notice| (notice.level, notice.text.as_str()))
    }

    fn type_form(text: &str) -> Vec<Msg> {
        text.chars()
            .map(|c| {
                Msg::Review(ReviewMsg::FormInput(KeyEvent::new(
                    KeyCode::Char(c),
                    KeyModifiers::NONE,
                )))
            })
            .collect()
    }

    #[test]
    fn test_resize_records_viewport() {
        let (state, cmds) = run(
            AppState::default(),
            vec![Msg::System(SystemMsg::Resize(120, 40))],
        );
        assert_eq!(state.ui.viewport().width, 120);
        assert_eq!(state.ui.viewport().height, 40);
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn test_unknown_device_opens_nothing() {
        let (state, cmds) = run(
            state_on(Platform::Desktop),
            vec![Msg::Dialog(DialogMsg::OpenDeviceDetail("Nokia 3310".into()))],
        );
        assert_eq!(state.dialog.active(), &ActiveDialog::None);
        assert_eq!(
            latest_notice(&state),
            Some((NoticeLevel::Error, "Unknown device: Nokia 3310"))
        );
        assert!(cmds.contains(&Cmd::LogError {
            message: "Unknown device: Nokia 3310".into()
        }));
    }

    #[test]
    fn test_payment_replaces_detail() {
        let (state, _) = run(
            state_on(Platform::Desktop),
            vec![
                Msg::Dialog(DialogMsg::OpenDeviceDetail("POCO X3".into())),
                Msg::Dialog(DialogMsg::OpenPayment(PlanTier::Premium)),
            ],
        );
        assert_eq!(
            state.dialog.active(),
            &ActiveDialog::Payment(PlanTier::Premium)
        );
    }

    #[test]
    fn test_mobile_payment_locks_scroll_until_close() {
        let (state, _) = run(
            state_on(Platform::Mobile),
            vec![Msg::Dialog(DialogMsg::OpenPayment(PlanTier::Brutal))],
        );
        assert!(state.ui.is_scroll_locked());

        let (state, _) = run(state, vec![Msg::Dialog(DialogMsg::Close)]);
        assert_eq!(state.dialog.active(), &ActiveDialog::None);
        assert!(!state.ui.is_scroll_locked());
    }

    #[test]
    fn test_desktop_payment_never_locks() {
        let (state, _) = run(
            state_on(Platform::Desktop),
            vec![Msg::Dialog(DialogMsg::OpenPayment(PlanTier::Basic))],
        );
        assert!(!state.ui.is_scroll_locked());
    }

    #[test]
    fn test_switching_to_detail_on_mobile_unlocks() {
        let (state, _) = run(
            state_on(Platform::Mobile),
            vec![
                Msg::Dialog(DialogMsg::OpenPayment(PlanTier::Basic)),
                Msg::Dialog(DialogMsg::OpenDeviceDetail("POCO X3".into())),
            ],
        );
        assert!(!state.ui.is_scroll_locked());
    }

    #[test]
    fn test_upload_without_file_shows_error() {
        let (state, cmds) = run(
            state_on(Platform::Desktop),
            vec![
                Msg::Dialog(DialogMsg::OpenPayment(PlanTier::Basic)),
                Msg::Dialog(DialogMsg::UploadProof),
            ],
        );
        assert_eq!(
            latest_notice(&state),
            Some((NoticeLevel::Error, UPLOAD_MISSING))
        );
        assert!(!cmds
            .iter()
            .any(|cmd| matches!(cmd, Cmd::CheckProofFile { .. })));
    }

    #[test]
    fn test_upload_with_path_checks_file() {
        let (state, cmds) = run(
            state_on(Platform::Desktop),
            vec![
                Msg::Dialog(DialogMsg::OpenPayment(PlanTier::Basic)),
                Msg::Dialog(DialogMsg::FocusUpload),
                Msg::Dialog(DialogMsg::UploadPaste("/tmp/proof.png".into())),
                Msg::Dialog(DialogMsg::UploadProof),
            ],
        );
        assert_eq!(state.dialog.upload().value(), "/tmp/proof.png");
        assert!(cmds.contains(&Cmd::CheckProofFile {
            path: "/tmp/proof.png".into()
        }));

        let (state, _) = run(
            state,
            vec![Msg::Dialog(DialogMsg::ProofAccepted("/tmp/proof.png".into()))],
        );
        assert_eq!(latest_notice(&state), Some((NoticeLevel::Info, UPLOAD_DONE)));
        assert_eq!(state.dialog.upload().value(), "");
    }

    #[test]
    fn test_proof_result_after_close_is_ignored() {
        let (state, _) = run(
            state_on(Platform::Desktop),
            vec![
                Msg::Dialog(DialogMsg::OpenPayment(PlanTier::Basic)),
                Msg::Dialog(DialogMsg::FocusUpload),
                Msg::Dialog(DialogMsg::UploadPaste("/tmp/x.png".into())),
                Msg::Dialog(DialogMsg::UploadProof),
                Msg::Dialog(DialogMsg::Close),
            ],
        );
        let (state, cmds) = run(
            state,
            vec![
                Msg::Dialog(DialogMsg::ProofAccepted("/tmp/x.png".into())),
                Msg::Dialog(DialogMsg::ProofRejected {
                    path: "/tmp/x.png".into(),
                    reason: "gone".into(),
                }),
            ],
        );
        assert_eq!(state.dialog.active(), &ActiveDialog::None);
        assert_eq!(latest_notice(&state), None);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_proof_result_for_replaced_path_is_ignored() {
        let (state, cmds) = run(
            state_on(Platform::Desktop),
            vec![
                Msg::Dialog(DialogMsg::OpenPayment(PlanTier::Premium)),
                Msg::Dialog(DialogMsg::FocusUpload),
                Msg::Dialog(DialogMsg::UploadPaste("/tmp/new.png".into())),
                Msg::Dialog(DialogMsg::ProofAccepted("/tmp/old.png".into())),
            ],
        );
        assert_eq!(state.dialog.upload().value(), "/tmp/new.png");
        assert!(state.dialog.is_upload_focused());
        assert_eq!(latest_notice(&state), None);
        assert!(!cmds.iter().any(|cmd| matches!(cmd, Cmd::ScheduleNoticeDismiss { .. })));
    }

    #[test]
    fn test_copy_sensitivity_needs_detail_dialog() {
        let (state, cmds) = run(
            state_on(Platform::Desktop),
            vec![Msg::Dialog(DialogMsg::CopySensitivity)],
        );
        assert!(cmds.is_empty());

        let (_, cmds) = run(
            state,
            vec![
                Msg::Dialog(DialogMsg::OpenDeviceDetail("POCO X3".into())),
                Msg::Dialog(DialogMsg::CopySensitivity),
            ],
        );
        let copied = cmds.iter().find_map(|cmd| match cmd {
            Cmd::CopyToClipboard { text } => Some(text.clone()),
            _ => None,
        });
        assert!(copied.is_some_and(|text| text.starts_with("Device: POCO X3\n")));
    }

    #[test]
    fn test_copy_results_become_notices() {
        let (state, _) = run(
            state_on(Platform::Desktop),
            vec![Msg::Dialog(DialogMsg::SensitivityCopied)],
        );
        assert_eq!(latest_notice(&state), Some((NoticeLevel::Info, COPY_DONE)));

        let (state, _) = run(
            state,
            vec![Msg::Dialog(DialogMsg::CopyFailed("no display".into()))],
        );
        assert_eq!(
            latest_notice(&state),
            Some((NoticeLevel::Error, "Failed to copy settings: no display"))
        );
    }

    #[test]
    fn test_submit_review_flow() {
        let state = state_on(Platform::Desktop);
        let before = state.reviews.reviews().len();
        let first_id = state.reviews.reviews().first().map(|r| r.id);

        let mut msgs = vec![Msg::Review(ReviewMsg::OpenForm)];
        msgs.extend(type_form("Usman"));
        msgs.push(Msg::Review(ReviewMsg::FocusNextField));
        msgs.extend(type_form("usman@example.com"));
        msgs.push(Msg::Review(ReviewMsg::FocusNextField));
        msgs.extend(type_form(" "));
        msgs.push(Msg::Review(ReviewMsg::SetRating(5)));
        msgs.push(Msg::Review(ReviewMsg::FocusNextField));
        msgs.push(Msg::Review(ReviewMsg::FocusNextField));
        msgs.extend(type_form("Headshots everywhere"));
        msgs.push(Msg::Review(ReviewMsg::Submit));

        let (state, _) = run(state, msgs);

        assert!(!state.reviews.is_composing());
        assert_eq!(state.reviews.reviews().len(), before + 1);
        let newest = &state.reviews.reviews()[0];
        assert_eq!(newest.customer_name, "Usman");
        assert_eq!(newest.device, "POCO X3");
        assert_eq!(newest.rating.value(), 5);
        assert_eq!(state.reviews.reviews().get(1).map(|r| r.id), first_id);
        assert_eq!(latest_notice(&state), Some((NoticeLevel::Info, REVIEW_THANKS)));
    }

    #[test]
    fn test_invalid_review_keeps_form_open() {
        let (state, _) = run(
            state_on(Platform::Desktop),
            vec![
                Msg::Review(ReviewMsg::OpenForm),
                Msg::Review(ReviewMsg::Submit),
            ],
        );
        assert!(state.reviews.is_composing());
        assert_eq!(
            latest_notice(&state),
            Some((NoticeLevel::Error, "Please fill in the name field"))
        );
    }

    #[test]
    fn test_notice_dismiss_after_push() {
        let (state, cmds) = run(
            state_on(Platform::Desktop),
            vec![Msg::notify("hello")],
        );
        let id = cmds.iter().find_map(|cmd| match cmd {
            Cmd::ScheduleNoticeDismiss { id, after_ms } => {
                assert_eq!(*after_ms, 3000);
                Some(*id)
            }
            _ => None,
        });
        let (state, _) = run(
            state,
            vec![Msg::Notice(NoticeMsg::Dismiss(id.unwrap_or_default()))],
        );
        assert!(state.notices.is_empty());
    }
}
