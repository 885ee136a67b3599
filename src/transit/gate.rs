//! Ticket gates
//!
//! A gate stands at one station of a [`Line`]. Entering through it stamps the
//! ticket with that station; leaving through it prices the trip from the stamped
//! station and compares the price to what the ticket paid.

use crate::transit::error::{GateError, RouteError};
use crate::transit::line::{Line, DEFAULT_LINE};
use crate::transit::ticket::Ticket;
use serde::Serialize;
use tracing::{debug, warn};

/// Outcome of checking a ticket at an exit gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FareQuote {
    pub from: String,
    pub to: String,
    pub distance: usize,
    pub required: u32,
    pub paid: u32,
    pub accepted: bool,
}

/// A gate at a single station.
#[derive(Debug, Clone)]
pub struct Gate<'l> {
    name: String,
    line: &'l Line,
}

impl Gate<'static> {
    /// Gate on the compiled-in line.
    pub fn new(name: impl Into<String>) -> Self {
        Gate::on(&DEFAULT_LINE, name)
    }
}

impl<'l> Gate<'l> {
    /// Gate on an arbitrary line.
    ///
    /// The name is not checked here; an unknown station only fails once a fare
    /// is looked up.
    pub fn on(line: &'l Line, name: impl Into<String>) -> Self {
        Gate {
            name: name.into(),
            line,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stamp the ticket with this station.
    ///
    /// Entering again without exiting overwrites the earlier stamp.
    pub fn enter(&self, ticket: &mut Ticket) {
        match ticket.stamp(&self.name) {
            Some(previous) => warn!(
                station = %self.name,
                previous = %previous,
                "ticket re-stamped before exiting"
            ),
            None => debug!(station = %self.name, "ticket stamped"),
        }
    }

    /// Whether the ticket's fare covers the trip to this station.
    pub fn exit(&self, ticket: &Ticket) -> Result<bool, GateError> {
        self.quote(ticket).map(|quote| quote.accepted)
    }

    /// Fare required to travel from the stamped station to this one.
    pub fn calc_fare(&self, ticket: &Ticket) -> Result<u32, GateError> {
        self.quote(ticket).map(|quote| quote.required)
    }

    /// Price the trip and record the verdict.
    pub fn quote(&self, ticket: &Ticket) -> Result<FareQuote, GateError> {
        let from = ticket
            .stamped_at()
            .ok_or(GateError::UnstampedTicket { stamped_at: None })?;
        let from_index =
            self.line
                .position(from)
                .ok_or_else(|| GateError::UnstampedTicket {
                    stamped_at: Some(from.to_string()),
                })?;
        let to_index = self
            .line
            .position(&self.name)
            .ok_or_else(|| RouteError::UnknownStation(self.name.clone()))?;

        let distance = to_index as isize - from_index as isize;
        let required = self.line.fare_for(from, &self.name, distance)?;
        let accepted = ticket.fare() >= required;

        debug!(
            from,
            to = %self.name,
            distance,
            required,
            paid = ticket.fare(),
            accepted,
            "fare checked"
        );

        Ok(FareQuote {
            from: from.to_string(),
            to: self.name.clone(),
            distance: distance as usize,
            required,
            paid: ticket.fare(),
            accepted,
        })
    }
}
