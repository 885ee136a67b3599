use serde::Serialize;

/// A ticket bought for a fixed fare.
///
/// The entry station is recorded by [`Gate::enter`](super::Gate::enter); nothing
/// else writes to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    fare: u32,
    stamped_at: Option<String>,
}

impl Ticket {
    pub fn new(fare: u32) -> Self {
        Ticket {
            fare,
            stamped_at: None,
        }
    }

    pub fn fare(&self) -> u32 {
        self.fare
    }

    /// Station the ticket entered through, if any.
    pub fn stamped_at(&self) -> Option<&str> {
        self.stamped_at.as_deref()
    }

    /// Record the entry station, returning the previous stamp if there was one.
    pub(crate) fn stamp(&mut self, station: &str) -> Option<String> {
        self.stamped_at.replace(station.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ticket_is_unstamped() {
        let ticket = Ticket::new(150);
        assert_eq!(ticket.fare(), 150);
        assert_eq!(ticket.stamped_at(), None);
    }

    #[test]
    fn test_stamp_returns_previous() {
        let mut ticket = Ticket::new(150);
        assert_eq!(ticket.stamp("umeda"), None);
        assert_eq!(ticket.stamp("juso"), Some("umeda".to_string()));
        assert_eq!(ticket.stamped_at(), Some("juso"));
    }
}
