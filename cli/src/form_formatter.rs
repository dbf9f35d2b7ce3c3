// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::Colorize;
use teamup_core::{EventId, Field, FormState};
use unicode_width::UnicodeWidthStr;

use crate::util::ArgOutputFormat;

/// Prints the fields of an event form.
#[derive(Debug)]
pub struct FormFormatter {
    format: ArgOutputFormat,
}

impl FormFormatter {
    pub fn new() -> Self {
        Self {
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, id: &'a EventId, form: &'a FormState) -> Display<'a> {
        Display {
            id,
            form,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    id: &'a EventId,
    form: &'a FormState,
    formatter: &'a FormFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let value = serde_json::json!({
                    "id": self.id.as_str(),
                    "event_name": self.form.event_name(),
                    "description": self.form.description(),
                    "from": self.form.from_date(),
                    "to": self.form.to_date(),
                    "location": self.form.location(),
                });
                write!(f, "{value:#}")
            }
            ArgOutputFormat::Table => {
                let width = Field::ALL
                    .iter()
                    .map(|a| a.label().width())
                    .max()
                    .unwrap_or(0);

                let label = format!("{:<width$}", "Id");
                writeln!(f, "{}  {}", label.bold(), self.id)?;
                for (i, field) in Field::ALL.into_iter().enumerate() {
                    let label = format!("{:<width$}", field.label());
                    write!(f, "{}  {}", label.bold(), self.form.get(field))?;
                    if i < Field::ALL.len() - 1 {
                        writeln!(f)?;
                    }
                }
                Ok(())
            }
        }
    }
}
