//! Fare gate simulator
//!
//! A [`Ticket`] is bought for a fare, stamped by the [`Gate`] it enters through,
//! and checked by the gate it leaves through. The distance between the two
//! stations on the [`Line`] selects the required fare.
//!
//! ```ignore
//! use drills::transit::{Gate, Ticket};
//!
//! let umeda = Gate::new("umeda");
//! let juso = Gate::new("juso");
//!
//! let mut ticket = Ticket::new(150);
//! umeda.enter(&mut ticket);
//! assert!(juso.exit(&ticket)?);
//! ```

pub mod error;
pub mod gate;
pub mod line;
pub mod ticket;

pub use error::{GateError, LineError, RouteError};
pub use gate::{FareQuote, Gate};
pub use line::{Line, DEFAULT_LINE};
pub use ticket::Ticket;
