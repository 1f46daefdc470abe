//! The storefront's state machine.
//!
//! Terminal input is translated into [`msg::Msg`], folded into
//! [`state::AppState`] by [`update`], and any effects come back out as
//! [`cmd::Cmd`] for [`cmd_executor::CmdExecutor`] to run.

pub mod clock;
pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod textarea_engine;
pub mod translator;
pub mod update;
