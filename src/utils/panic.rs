use std::panic::{self, PanicHookInfo};

use color_eyre::{config::HookBuilder, eyre::Result};

use crate::{infrastructure::tui::real::RealTui, utils::paths::get_data_dir};

/// Installs color-eyre hooks and a panic hook that hands the terminal back
/// before anything is printed.
pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "sensdeck crashed. Please report it along with {}",
            get_data_dir().join(env!("CARGO_PKG_NAME")).with_extension("log").display()
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |info| {
        restore_terminal();

        let report = panic_hook.panic_report(info).to_string();
        log::error!("panic: {}", strip_ansi_escapes::strip_str(&report));

        if cfg!(debug_assertions) {
            debug_trace(info);
        } else {
            crash_report(info);
            eprintln!("{report}");
        }

        std::process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

fn restore_terminal() {
    match RealTui::new() {
        Ok(mut tui) => {
            if let Err(e) = tui.exit() {
                tracing::error!("Unable to restore terminal: {e:?}");
            }
        }
        Err(e) => tracing::error!("Unable to reopen terminal: {e:?}"),
    }
}

/// Full backtrace, most recent call last
fn debug_trace(info: &PanicHookInfo<'_>) {
    better_panic::Settings::auto()
        .most_recent_first(false)
        .lineno_suffix(true)
        .verbosity(better_panic::Verbosity::Full)
        .create_panic_handler()(info);
}

/// Dump file plus a short human readable message
fn crash_report(info: &PanicHookInfo<'_>) {
    let meta = human_panic::Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "));
    let dump = human_panic::handle_dump(&meta, info);
    if let Err(e) = human_panic::print_msg(dump, &meta) {
        eprintln!("failed to print crash report: {e}");
    }
}
