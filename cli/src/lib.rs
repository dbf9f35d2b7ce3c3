// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line and terminal front ends for the teamup event form.

mod arg;
mod cli;
mod cmd_event;
mod cmd_generate_completion;
mod cmd_tui;
mod config;
mod credential;
mod form_formatter;
mod notify;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{AuthConfig, Config};
pub use crate::credential::CookieFileCredentials;
