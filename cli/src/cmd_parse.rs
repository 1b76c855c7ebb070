// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use jiff::civil::DateTime;
use shiftboard_core::{DateExpression, TimeWindow, anchor_date, classify};

use crate::util::{get_string, status_color};

/// Explains how a date expression is read and classified, without any snapshot.
#[derive(Debug, Clone)]
pub struct CmdParse {
    pub expr: String,
    pub time: Option<String>,
}

impl CmdParse {
    pub const NAME: &str = "parse";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Parse a date expression and classify it at the reference time")
            .arg(arg!(<EXPR> "Date expression, a day, a start~end range or a comma separated list"))
            .arg(arg!(-t --time <TIME> "Working hours, HH:MM - HH:MM"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            expr: get_string(matches, "EXPR").unwrap_or_default(),
            time: get_string(matches, "time"),
        }
    }

    pub fn run(self, now: DateTime) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, %now, "parsing date expression...");
        let report = Report::new(&self.expr, self.time.as_deref(), now)?;
        for (label, value) in report.rows() {
            println!("{:>8} {}", label.bold(), value);
        }
        Ok(())
    }
}

#[derive(Debug)]
struct Report {
    expression: DateExpression,
    window: Option<TimeWindow>,
    now: DateTime,
}

impl Report {
    /// Unreadable working hours fall back to the whole day.
    fn new(expr: &str, time: Option<&str>, now: DateTime) -> Result<Self, Box<dyn Error>> {
        let expression = expr.parse::<DateExpression>()?;
        let window = time.and_then(TimeWindow::parse);
        if window.is_none() && time.is_some() {
            tracing::debug!(?time, "unreadable working hours, classifying by whole days");
        }
        Ok(Self {
            expression,
            window,
            now,
        })
    }

    fn kind(&self) -> &'static str {
        match self.expression {
            DateExpression::Single(_) => "single",
            DateExpression::Range { .. } => "range",
            DateExpression::List(_) => "list",
        }
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        let status = classify(&self.expression, self.window.as_ref(), self.now);
        let anchor = anchor_date(status, &self.expression)
            .map(|d| d.to_string())
            .unwrap_or_default();
        let window = self
            .window
            .map(|w| w.to_string())
            .unwrap_or_else(|| "all day".to_string());

        vec![
            ("kind", self.kind().to_string()),
            ("dates", self.expression.dates().to_string()),
            ("time", window),
            ("now", self.now.to_string()),
            ("status", status.to_string().color(status_color(status)).to_string()),
            ("anchor", anchor),
        ]
    }
}
