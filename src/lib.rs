//! # drills
//!
//! Small, self-contained exercises:
//!
//! - [`transit`]: tickets stamped at a gate on entry and checked against a fare table on exit
//! - [`synth`]: text effects chained through a [`synth::WordSynth`]
//! - [`convert`]: hash syntax rewriting, length units, and hex/RGB colors
//! - [`fizz_buzz`]: the classic counting drill
//!
//! Fare tables and the default effect chain can be layered from TOML through [`config`].

pub mod config;
pub mod convert;
pub mod fizz_buzz;
pub mod synth;
pub mod transit;
