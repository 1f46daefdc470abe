use crate::core::{
    cmd::{Cmd, TuiCommand},
    msg::system::SystemMsg,
};

/// Process-level flags
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    should_quit: bool,
    should_suspend: bool,
}

impl SystemState {
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_suspend(&self) -> bool {
        self.should_suspend
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }
            SystemMsg::Suspend => {
                self.should_suspend = true;
                vec![Cmd::Tui(TuiCommand::Suspend)]
            }
            SystemMsg::Resume => {
                self.should_suspend = false;
                vec![Cmd::RequestRender]
            }
            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }
        }
    }
}
