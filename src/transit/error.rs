//! Errors raised by gates and line construction

use thiserror::Error;

/// Why a trip could not be priced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The station is not on the line.
    #[error("unknown station '{0}'")]
    UnknownStation(String),

    /// The trip distance has no entry in the fare table.
    ///
    /// Covers reverse travel (negative distance) and leaving through the
    /// entry station (distance zero).
    #[error("no fare from '{from}' to '{to}' (distance {distance}, fares cover 1..={max})")]
    DistanceOutOfRange {
        from: String,
        to: String,
        distance: isize,
        max: usize,
    },
}

/// Errors raised while checking a ticket at a gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("invalid route: {0}")]
    InvalidRoute(#[from] RouteError),

    /// The ticket was never stamped, or carries a station this line does not know.
    #[error("{}", unstamped_message(.stamped_at))]
    UnstampedTicket { stamped_at: Option<String> },
}

fn unstamped_message(stamped_at: &Option<String>) -> String {
    match stamped_at {
        None => "ticket was never stamped".to_string(),
        Some(station) => format!("ticket stamped at unknown station '{}'", station),
    }
}

/// Errors raised when building a [`Line`](super::Line) from tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("a line needs at least two stations, got {0}")]
    TooFewStations(usize),

    #[error("station '{0}' appears more than once")]
    DuplicateStation(String),

    #[error("a line needs at least one fare")]
    NoFares,
}
