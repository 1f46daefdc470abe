use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use color_eyre::eyre::Result;
use futures::future;
use ratatui::backend::TestBackend;
use ratatui::prelude::*;
use tokio::sync::Mutex;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// In-memory terminal on `TestBackend`. Events come from a queue that ends
/// with `None`; draws and suspends are counted for assertions.
pub struct TestTui {
    terminal: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    suspends: usize,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        Ok(Self {
            terminal: Terminal::new(TestBackend::new(width, height))?,
            events: VecDeque::new(),
            draws: 0,
            suspends: 0,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    /// A concrete handle for assertions and the trait-object handle the runner takes,
    /// both pointing at the same terminal.
    pub fn shared(
        width: u16,
        height: u16,
    ) -> Result<(Arc<Mutex<TestTui>>, Arc<Mutex<dyn TuiLike + Send>>)> {
        let concrete = Arc::new(Mutex::new(Self::new(width, height)?));
        let handle: Arc<Mutex<dyn TuiLike + Send>> = Arc::<Mutex<TestTui>>::clone(&concrete);
        Ok((concrete, handle))
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn suspend_count(&self) -> usize {
        self.suspends
    }

    /// Rendered screen contents, one string per row.
    pub fn screen_lines(&self) -> Vec<String> {
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        Ok(())
    }

    fn suspend(&mut self) -> Result<()> {
        self.suspends += 1;
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.terminal.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    /// Only the backend is resized; the terminal picks the new area up on the next draw.
    fn resize(&mut self, area: Rect) -> Result<()> {
        self.terminal.backend_mut().resize(area.width, area.height);
        Ok(())
    }

    fn size(&self) -> Result<Size> {
        Ok(self.terminal.size()?)
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        Box::pin(future::ready(self.events.pop_front()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::widgets::Paragraph;

    use super::*;

    #[tokio::test]
    async fn test_queued_events_then_none() -> Result<()> {
        let mut tui = TestTui::with_events(10, 2, [Event::Tick, Event::Resize(20, 5)])?;
        assert!(matches!(tui.next().await, Some(Event::Tick)));
        assert!(matches!(tui.next().await, Some(Event::Resize(20, 5))));
        assert!(tui.next().await.is_none());
        Ok(())
    }

    #[test]
    fn test_draw_counts_and_captures_screen() -> Result<()> {
        let mut tui = TestTui::new(8, 2)?;
        tui.draw(&mut |frame| frame.render_widget(Paragraph::new("hello"), frame.area()))?;
        assert_eq!(tui.draw_count(), 1);
        assert_eq!(tui.screen_lines()[0], "hello   ");
        Ok(())
    }
}
