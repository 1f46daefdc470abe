use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use ratatui::layout::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg},
    infrastructure::tui::{event_source::EventSource, Event, TuiLike},
    integration::{coalescer::RenderCoalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the runtime from terminal events and renders on request.
///
/// Each cycle pulls one event, runs the update cycle, applies terminal
/// commands, then draws at most one frame for however many render requests
/// piled up.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    event_source: EventSource,
    renderer: Renderer,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::Receiver<()>,
    size: Option<(u16, u16)>,
}

impl AppRunner {
    /// Wires the runtime's executor to this runner. Events come from the
    /// terminal itself unless replaced with `with_event_source`.
    pub fn new(mut runtime: Runtime, tui: Arc<Mutex<dyn TuiLike + Send>>) -> Result<Self> {
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        // one slot: a pending request already guarantees the next frame
        let (render_req_tx, render_req_rx) = mpsc::channel(1);
        runtime.add_tui_sender(tui_cmd_tx).map_err(|e| eyre!(e))?;
        runtime
            .add_render_request_sender(render_req_tx)
            .map_err(|e| eyre!(e))?;

        Ok(Self {
            runtime,
            event_source: EventSource::real(Arc::clone(&tui)),
            tui,
            renderer: Renderer::new(),
            tui_cmd_rx,
            render_req_rx,
            size: None,
        })
    }

    pub fn with_event_source(mut self, event_source: EventSource) -> Self {
        self.event_source = event_source;
        self
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Run until the state asks to quit or the event source ends
    pub async fn run(&mut self) -> Result<()> {
        self.start().await?;
        let result = self.run_loop().await;
        let exited = self.tui.lock().await.exit();
        result.and(exited)
    }

    async fn run_loop(&mut self) -> Result<()> {
        while self.run_one_cycle().await? {}
        log::info!("Event loop finished");
        Ok(())
    }

    /// Enters the terminal and queues its current size as the first message
    pub async fn start(&mut self) -> Result<()> {
        let size = {
            let mut tui = self.tui.lock().await;
            tui.enter()?;
            tui.size()?
        };
        self.runtime
            .send_raw_msg(RawMsg::Resize(size.width, size.height));
        Ok(())
    }

    /// One loop iteration. Returns `false` once the app should quit.
    pub async fn run_one_cycle(&mut self) -> Result<bool> {
        let mut force_render = match self.event_source.next().await {
            Some(event) => self.handle_event(event),
            None => {
                self.runtime.send_raw_msg(RawMsg::Quit);
                false
            }
        };

        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }

        force_render |= self.apply_tui_commands().await?;

        let mut queued_render_reqs = 0;
        while self.render_req_rx.try_recv().is_ok() {
            queued_render_reqs += 1;
        }
        if RenderCoalescer::decide_render(queued_render_reqs, force_render) {
            self.render().await?;
        }

        Ok(!self.runtime.state().system.should_quit())
    }

    /// Forwards an event to the runtime. Returns whether it needs a frame by itself.
    fn handle_event(&mut self, event: Event) -> bool {
        let raw = match event {
            Event::Init => return true,
            Event::Render | Event::FocusGained | Event::FocusLost => return false,
            Event::Quit | Event::Closed => RawMsg::Quit,
            Event::Error => RawMsg::Error("Failed to read terminal input".to_string()),
            Event::Tick => RawMsg::Tick,
            Event::Resize(width, height) => RawMsg::Resize(width, height),
            Event::Key(key) => RawMsg::Key(key),
            Event::Mouse(mouse) => RawMsg::Mouse(mouse),
            Event::Paste(text) => RawMsg::Paste(text),
        };
        self.runtime.send_raw_msg(raw);
        false
    }

    async fn apply_tui_commands(&mut self) -> Result<bool> {
        let mut resizes = Vec::new();
        let mut suspend = false;
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            match cmd {
                TuiCommand::Resize { width, height } => resizes.push((width, height)),
                TuiCommand::Suspend => suspend = true,
            }
        }

        let mut changed = false;
        if let Some((width, height)) = RenderCoalescer::decide_resize(self.size, &resizes) {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
            self.size = Some((width, height));
            changed = true;
        }

        if suspend {
            {
                let mut tui = self.tui.lock().await;
                tui.suspend()?;
                tui.resume()?;
            }
            self.runtime.send_raw_msg(RawMsg::Resume);
            changed = true;
        }

        Ok(changed)
    }

    pub async fn render(&mut self) -> Result<()> {
        self.renderer
            .render(&self.tui, self.runtime.state())
            .await
    }
}
