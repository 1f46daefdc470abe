//! Terminal access behind a small trait so the runner can drive either the
//! crossterm terminal or a `TestBackend`.

pub mod event_source;
pub mod real;
pub mod test;
pub mod textarea_engine;

use std::{future::Future, pin::Pin};

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::{Rect, Size};
use serde::{Deserialize, Serialize};

pub type IO = std::io::Stdout;
pub type Frame<'a> = ratatui::Frame<'a>;

pub fn io() -> IO {
    std::io::stdout()
}

/// Terminal events as seen by the runner
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Event {
    /// First event after the terminal is entered
    Init,
    Quit,
    /// Reading from the terminal failed
    Error,
    /// The event stream ended
    Closed,
    Tick,
    /// Frame-rate heartbeat; drawing is driven by render requests instead
    Render,
    FocusGained,
    FocusLost,
    Paste(String),
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
}

pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    /// Leave the terminal and stop the process until it is continued
    fn suspend(&mut self) -> Result<()>;
    fn resume(&mut self) -> Result<()>;

    fn size(&self) -> Result<Size>;
    fn resize(&mut self, area: Rect) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;

    /// Next event, or `None` once the source is exhausted
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;
}
