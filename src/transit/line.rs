//! Station order and fare table for a single line

use crate::transit::error::{LineError, RouteError};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// The compiled-in line used by [`Gate::new`](super::Gate::new).
pub static DEFAULT_LINE: Lazy<Line> = Lazy::new(|| Line {
    stations: vec!["umeda".into(), "juso".into(), "mikuni".into()],
    fares: vec![150, 190],
});

/// Stations in travel order plus the fare for each distance.
///
/// `fares[0]` is the fare for one stop, `fares[1]` for two, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    stations: Vec<String>,
    fares: Vec<u32>,
}

impl Line {
    /// Build a line from its tables.
    pub fn new(stations: Vec<String>, fares: Vec<u32>) -> Result<Self, LineError> {
        if stations.len() < 2 {
            return Err(LineError::TooFewStations(stations.len()));
        }
        let mut seen = HashSet::new();
        for station in &stations {
            if !seen.insert(station.as_str()) {
                return Err(LineError::DuplicateStation(station.clone()));
            }
        }
        if fares.is_empty() {
            return Err(LineError::NoFares);
        }
        Ok(Line { stations, fares })
    }

    pub fn stations(&self) -> &[String] {
        &self.stations
    }

    pub fn fares(&self) -> &[u32] {
        &self.fares
    }

    /// Position of a station along the line.
    pub fn position(&self, station: &str) -> Option<usize> {
        self.stations.iter().position(|s| s == station)
    }

    /// Fare for a trip of `distance` stops.
    ///
    /// Only distances in `1..=fares.len()` are priced.
    pub fn fare_for(&self, from: &str, to: &str, distance: isize) -> Result<u32, RouteError> {
        let out_of_range = || RouteError::DistanceOutOfRange {
            from: from.to_string(),
            to: to.to_string(),
            distance,
            max: self.fares.len(),
        };
        let index = usize::try_from(distance - 1).map_err(|_| out_of_range())?;
        self.fares.get(index).copied().ok_or_else(out_of_range)
    }
}
