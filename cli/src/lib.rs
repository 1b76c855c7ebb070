// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of the shiftboard schedule engine.

mod cli;
mod cmd_board;
mod cmd_calendar;
mod cmd_parse;
mod cmd_worker;
mod config;
mod schedule_formatter;
mod session;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::cmd_board::CmdBoard;
pub use crate::cmd_calendar::CmdCalendar;
pub use crate::cmd_parse::CmdParse;
pub use crate::cmd_worker::CmdWorker;
pub use crate::session::Session;
pub use crate::util::ArgOutputFormat;
