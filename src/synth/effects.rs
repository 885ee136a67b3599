//! Effect trait and the built-in effect factories
//!
//! Any `Fn(&str) -> String` is an [`Effect`], so closures can be added to a
//! synth directly. The factories here return closures with their parameters
//! already bound; each one can be applied to as many phrases as needed.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A pure phrase-to-phrase transformation.
pub trait Effect {
    fn apply(&self, phrase: &str) -> String;
}

impl<F> Effect for F
where
    F: Fn(&str) -> String,
{
    fn apply(&self, phrase: &str) -> String {
        self(phrase)
    }
}

/// Reverse the characters of each word, keeping word order.
///
/// Words are separated by ASCII whitespace and rejoined with single spaces.
/// Other whitespace, such as U+3000, stays inside its word.
pub fn reverse() -> impl Fn(&str) -> String + Clone {
    |phrase: &str| {
        phrase
            .split_ascii_whitespace()
            .map(|word| word.chars().rev().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Repeat every non-space character `rate` times.
///
/// Space characters pass through once, so words grow while the gaps between
/// them stay a single space.
pub fn echo(rate: usize) -> impl Fn(&str) -> String + Clone {
    move |phrase: &str| {
        phrase
            .chars()
            .map(|c| {
                if c == ' ' {
                    c.to_string()
                } else {
                    c.to_string().repeat(rate)
                }
            })
            .collect()
    }
}

/// Uppercase each ASCII-whitespace-delimited word and follow it with `level`
/// exclamation marks.
pub fn loud(level: usize) -> impl Fn(&str) -> String + Clone {
    move |phrase: &str| {
        let bang = "!".repeat(level);
        phrase
            .split_ascii_whitespace()
            .map(|word| format!("{}{}", word.to_uppercase(), bang))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Errors from parsing an effect name such as `echo:2`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EffectParseError {
    #[error("unknown effect '{0}' (expected reverse, echo:<rate> or loud:<level>)")]
    UnknownEffect(String),

    #[error("effect '{0}' needs a parameter, e.g. '{0}:2'")]
    MissingParameter(String),

    #[error("effect 'reverse' takes no parameter")]
    UnexpectedParameter,

    #[error("invalid parameter '{value}' for effect '{effect}'")]
    InvalidParameter { effect: String, value: String },
}

/// A built-in effect together with its parameter.
///
/// Written as `reverse`, `echo:<rate>` or `loud:<level>`; this is the form used
/// on the command line and in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum EffectKind {
    Reverse,
    Echo(usize),
    Loud(usize),
}

impl EffectKind {
    /// Build the effect this kind names.
    pub fn build(self) -> Box<dyn Effect> {
        match self {
            EffectKind::Reverse => Box::new(reverse()),
            EffectKind::Echo(rate) => Box::new(echo(rate)),
            EffectKind::Loud(level) => Box::new(loud(level)),
        }
    }
}

impl FromStr for EffectKind {
    type Err = EffectParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, param) = match s.split_once(':') {
            Some((name, param)) => (name.trim(), Some(param.trim())),
            None => (s, None),
        };

        let parse_param = |effect: &str| -> Result<usize, EffectParseError> {
            let value = param.ok_or_else(|| EffectParseError::MissingParameter(effect.into()))?;
            value
                .parse()
                .map_err(|_| EffectParseError::InvalidParameter {
                    effect: effect.into(),
                    value: value.into(),
                })
        };

        match name {
            "reverse" if param.is_some() => Err(EffectParseError::UnexpectedParameter),
            "reverse" => Ok(EffectKind::Reverse),
            "echo" => parse_param(name).map(EffectKind::Echo),
            "loud" => parse_param(name).map(EffectKind::Loud),
            other => Err(EffectParseError::UnknownEffect(other.into())),
        }
    }
}

impl TryFrom<String> for EffectKind {
    type Error = EffectParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EffectKind::Reverse => write!(f, "reverse"),
            EffectKind::Echo(rate) => write!(f, "echo:{}", rate),
            EffectKind::Loud(level) => write!(f, "loud:{}", level),
        }
    }
}
