// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::Local;
use clap::{ArgMatches, Command};
use colored::Colorize;
use teamup_core::{
    EventFormSession, EventId, EventsApi, Field, FormState, LoadOutcome, MutationDispatcher,
    Navigator, Notifier, load_event,
};

use crate::arg::EventArgs;
use crate::form_formatter::FormFormatter;
use crate::notify::{TerminalNavigator, TerminalNotifier};
use crate::util::ArgOutputFormat;

#[derive(Debug, Clone)]
pub struct CmdEventNew {
    pub fields: Vec<(Field, String)>,
}

impl CmdEventNew {
    pub const NAME: &str = "new";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("add")
            .about("Create a new event")
            .args(EventArgs::fields(true))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            fields: EventArgs::get_fields(matches),
        }
    }

    pub async fn run(self, api: &impl EventsApi) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "creating event...");
        let navigator = TerminalNavigator::default();
        let (mut session, _) =
            EventFormSession::mount(api, &navigator, TerminalNotifier, Local, None).await;

        apply_fields(&mut session, self.fields);
        session.create().await?;

        println!("{} {}", "Created".green(), session.form().event_name().bold());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventEdit {
    pub id: EventId,
    pub fields: Vec<(Field, String)>,
}

impl CmdEventEdit {
    pub const NAME: &str = "edit";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Update an existing event, keeping the fields not given")
            .arg(EventArgs::id())
            .args(EventArgs::fields(false))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: EventArgs::get_id(matches)?,
            fields: EventArgs::get_fields(matches),
        })
    }

    pub async fn run(self, api: &impl EventsApi) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "editing event...");
        let navigator = TerminalNavigator::default();
        let (mut session, outcome) = EventFormSession::mount(
            api,
            &navigator,
            TerminalNotifier,
            Local,
            Some(self.id.clone()),
        )
        .await;

        // updating an event that could not be loaded would blank its fields
        if let LoadOutcome::Failed(e) = outcome {
            return Err(e.into());
        }

        apply_fields(&mut session, self.fields);
        session.update().await?;

        println!("{} {}", "Updated".green(), self.id.as_str().bold());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventDelete {
    pub id: EventId,
}

impl CmdEventDelete {
    pub const NAME: &str = "delete";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("rm")
            .about("Delete an event")
            .arg(EventArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: EventArgs::get_id(matches)?,
        })
    }

    pub async fn run(self, api: &impl EventsApi) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "deleting event...");
        let navigator = TerminalNavigator::default();
        let dispatcher = MutationDispatcher::new(api, &navigator, TerminalNotifier);

        // nothing is read from the form when deleting
        let mut form = FormState::new();
        dispatcher.delete_event(&mut form, &self.id).await?;

        println!("{} {}", "Deleted".green(), self.id.as_str().bold());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventShow {
    pub id: EventId,
    pub output_format: ArgOutputFormat,
}

impl CmdEventShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("get")
            .about("Show the form fields of an event")
            .arg(EventArgs::id())
            .arg(ArgOutputFormat::arg())
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            id: EventArgs::get_id(matches)?,
            output_format: ArgOutputFormat::from(matches),
        })
    }

    pub async fn run(self, api: &impl EventsApi) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing event...");
        let form = load_event(api, &self.id, &Local).await?;
        let formatter = FormFormatter::new().with_output_format(self.output_format);
        println!("{}", formatter.format(&self.id, &form));
        Ok(())
    }
}

fn apply_fields<A, N, T>(
    session: &mut EventFormSession<A, N, T, Local>,
    fields: Vec<(Field, String)>,
) where
    A: EventsApi,
    N: Navigator,
    T: Notifier,
{
    for (field, value) in fields {
        session.set(field, value);
    }
}
