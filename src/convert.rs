//! Stateless conversion drills

pub mod color;
pub mod hash_syntax;
pub mod length;

pub use color::{to_hex, to_ints, ColorError};
pub use hash_syntax::convert_hash_syntax;
pub use length::{convert_length, Unit, UnitParseError};
