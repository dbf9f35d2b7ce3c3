// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{Arg, ArgMatches, arg};
use teamup_core::{EventId, Field};

#[derive(Debug, Clone, Copy)]
pub struct EventArgs;

impl EventArgs {
    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the event")
    }

    pub fn get_id(matches: &ArgMatches) -> Result<EventId, Box<dyn Error>> {
        matches
            .get_one::<String>("id")
            .map(|a| EventId::new(a.clone()))
            .ok_or_else(|| "Event id is required".into())
    }

    pub fn name(required: bool) -> Arg {
        arg!(name: -n --name <NAME> "Name of the event").required(required)
    }

    pub fn description() -> Arg {
        arg!(description: -d --description <DESCRIPTION> "Description of the event")
    }

    pub fn from() -> Arg {
        arg!(from: --from <FROM> "Start of the event, as YYYY-MM-DDTHH:MM local time")
    }

    pub fn to() -> Arg {
        arg!(to: --to <TO> "End of the event, as YYYY-MM-DDTHH:MM local time")
    }

    pub fn location() -> Arg {
        arg!(location: -l --location <LOCATION> "Location of the event")
    }

    /// All field arguments, in form order.
    pub fn fields(name_required: bool) -> [Arg; 5] {
        [
            Self::name(name_required),
            Self::description(),
            Self::from(),
            Self::to(),
            Self::location(),
        ]
    }

    /// The field values given on the command line.
    pub fn get_fields(matches: &ArgMatches) -> Vec<(Field, String)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| {
                matches
                    .get_one::<String>(Self::arg_id(field))
                    .map(|v| (field, v.clone()))
            })
            .collect()
    }

    const fn arg_id(field: Field) -> &'static str {
        match field {
            Field::EventName => "name",
            Field::Description => "description",
            Field::From => "from",
            Field::To => "to",
            Field::Location => "location",
        }
    }
}
