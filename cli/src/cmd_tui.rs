// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! This module provides the tui commands for the teamup CLI.
//! They open the event form in the terminal instead of taking every field as flags.

use std::error::Error;

use chrono::Local;
use clap::{ArgMatches, Command};
use colored::Colorize;
use teamup_core::{EventFormSession, EventId, EventsApi, LoadOutcome, Notifier};

use crate::arg::EventArgs;
use crate::notify::{TerminalNavigator, ToastNotifier};
use crate::tui::run_event_form;

#[derive(Debug, Clone, Copy)]
pub struct CmdNew;

impl CmdNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create a new event using TUI")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, api: &impl EventsApi) -> Result<(), Box<dyn Error>> {
        tracing::debug!("creating event in tui...");
        let navigator = TerminalNavigator::default();
        let (mut session, _) =
            EventFormSession::mount(api, &navigator, ToastNotifier::new(), Local, None).await;

        run_event_form(&mut session).await?;
        if navigator.route().is_some() {
            println!("{} {}", "Created".green(), session.form().event_name().bold());
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEdit {
    pub id: EventId,
}

impl CmdEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Edit or delete an event using TUI")
            .arg(EventArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: EventArgs::get_id(matches)?,
        })
    }

    pub async fn run(self, api: &impl EventsApi) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event in tui...");
        let navigator = TerminalNavigator::default();
        let (mut session, outcome) = EventFormSession::mount(
            api,
            &navigator,
            ToastNotifier::new(),
            Local,
            Some(self.id.clone()),
        )
        .await;

        // the form stays open, empty, so the user can still delete the event
        if let LoadOutcome::Failed(e) = &outcome {
            session.notifier().notify(e.user_message());
        }

        run_event_form(&mut session).await?;
        if navigator.route().is_some() {
            println!("{} {}", "Saved".green(), self.id.as_str().bold());
        }
        Ok(())
    }
}
