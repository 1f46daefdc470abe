//! The event loop against an in-memory terminal

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use sensdeck::{
    core::state::AppState,
    domain::seed::StoreSeed,
    infrastructure::{
        config::Config,
        platform::Platform,
        tui::{event_source::EventSource, test::TestTui, Event},
    },
    integration::{app_runner::AppRunner, runtime::Runtime},
    presentation::components::reviews::NO_REVIEWS,
};

fn runtime() -> Runtime {
    let state = AppState::new_with_config(
        Config::builtin().unwrap_or_default(),
        StoreSeed::builtin().unwrap_or_default(),
        Platform::Desktop,
    );
    Runtime::new_with_executor(state)
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[tokio::test]
async fn first_frame_shows_the_catalog() -> Result<()> {
    let (test_tui, tui) = TestTui::shared(100, 30)?;
    let mut runner =
        AppRunner::new(runtime(), tui)?.with_event_source(EventSource::test([Event::Init]));

    runner.run().await?;

    let guard = test_tui.lock().await;
    assert_eq!(guard.draw_count(), 1);
    let screen = guard.screen_lines().join("\n");
    assert!(screen.contains("Sensitivity Store"));
    assert!(screen.contains("Search devices"));
    assert!(screen.contains("POCO X3"));
    Ok(())
}

#[tokio::test]
async fn filtering_reviews_to_a_device_without_any() -> Result<()> {
    let (test_tui, tui) = TestTui::shared(100, 30)?;
    let (tx, source) = EventSource::channel();
    let mut runner = AppRunner::new(runtime(), tui)?.with_event_source(source);

    // Catalog -> Plans -> Reviews, then All -> POCO X3 -> Samsung A12 -> Redmi Note 10
    for event in [
        Event::Init,
        key(KeyCode::Tab),
        key(KeyCode::Tab),
        key(KeyCode::Char('f')),
        key(KeyCode::Char('f')),
        key(KeyCode::Char('f')),
    ] {
        tx.send(event)?;
    }
    drop(tx);
    runner.run().await?;

    let screen = test_tui.lock().await.screen_lines().join("\n");
    assert!(screen.contains("Redmi Note 10"));
    assert!(screen.contains(NO_REVIEWS));
    assert!(screen.contains("Total Reviews"));
    Ok(())
}

#[tokio::test]
async fn resize_reaches_state_and_terminal() -> Result<()> {
    let (test_tui, tui) = TestTui::shared(80, 24)?;
    let mut runner = AppRunner::new(runtime(), tui)?
        .with_event_source(EventSource::test([Event::Init, Event::Resize(120, 40)]));

    runner.run().await?;

    assert_eq!(runner.runtime().state().ui.viewport().width, 120);
    let guard = test_tui.lock().await;
    assert_eq!(guard.screen_lines().len(), 40);
    assert_eq!(guard.screen_lines()[0].chars().count(), 120);
    Ok(())
}

#[tokio::test]
async fn opening_a_device_draws_its_dialog() -> Result<()> {
    let (test_tui, tui) = TestTui::shared(100, 40)?;
    let mut runner = AppRunner::new(runtime(), tui)?.with_event_source(EventSource::test([
        Event::Init,
        key(KeyCode::Char('j')),
        key(KeyCode::Enter),
    ]));

    runner.run().await?;

    let screen = test_tui.lock().await.screen_lines().join("\n");
    assert!(screen.contains("POCO X3 Sensitivity Settings"));
    assert!(screen.contains("Pro Tips"));
    Ok(())
}
