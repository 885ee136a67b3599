//! Configuration for the drills binary.
//!
//! `defaults/drills.default.toml` is embedded so the compiled-in fare line and
//! the default effect chain stay in one place. A user file may replace any of
//! its keys; [`DrillsConfig::load`] merges the two and validates the line tables
//! before handing back a ready-to-use [`Line`] and effect chain.

use crate::synth::{EffectKind, WordSynth};
use crate::transit::{Line, LineError};
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const DEFAULT_TOML: &str = include_str!("../defaults/drills.default.toml");

/// Errors from loading the configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] config::ConfigError),

    #[error("invalid line: {0}")]
    Line(#[from] LineError),
}

/// Tables as written in TOML, before validation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    transit: RawTransit,
    synth: RawSynth,
}

#[derive(Debug, Deserialize)]
struct RawTransit {
    stations: Vec<String>,
    fares: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct RawSynth {
    effects: Vec<EffectKind>,
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct DrillsConfig {
    line: Line,
    effects: Vec<EffectKind>,
}

impl DrillsConfig {
    /// Load the built-in configuration, with `user_file` layered on top.
    ///
    /// A user file that is given but missing is an error.
    pub fn load(user_file: Option<&Path>) -> Result<Self, LoadError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        if let Some(path) = user_file {
            debug!(path = %path.display(), "layering config file");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let raw: RawConfig = builder.build()?.try_deserialize()?;
        let line = Line::new(raw.transit.stations, raw.transit.fares)?;
        debug!(
            stations = line.stations().len(),
            effects = raw.synth.effects.len(),
            "configuration loaded"
        );
        Ok(DrillsConfig {
            line,
            effects: raw.synth.effects,
        })
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    pub fn effects(&self) -> &[EffectKind] {
        &self.effects
    }

    /// The configured effect chain, ready to play.
    pub fn word_synth(&self) -> WordSynth {
        self.effects.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transit::DEFAULT_LINE;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn user_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn loads_default_config() {
        let config = DrillsConfig::load(None).expect("defaults to load");
        assert_eq!(config.line(), &*DEFAULT_LINE);
        assert_eq!(
            config.effects(),
            &[EffectKind::Echo(2), EffectKind::Loud(3), EffectKind::Reverse]
        );
    }

    #[test]
    fn default_chain_plays() {
        let config = DrillsConfig::load(None).unwrap();
        assert_eq!(
            config.word_synth().play("Ruby is fun!"),
            "!!!YYBBUURR !!!SSII !!!!!NNUUFF"
        );
    }

    #[test]
    fn layers_user_file() {
        let file =
            user_file("[transit]\nstations = [\"a\", \"b\", \"c\", \"d\"]\nfares = [100, 120, 140]");

        let config = DrillsConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.line().stations().len(), 4);
        assert_eq!(config.line().fares(), &[100, 120, 140]);
        // untouched sections keep their defaults
        assert_eq!(config.effects().len(), 3);
    }

    #[test]
    fn user_effects_replace_default_chain() {
        let file = user_file("[synth]\neffects = [\"reverse\"]");

        let config = DrillsConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.effects(), &[EffectKind::Reverse]);
        assert_eq!(config.line(), &*DEFAULT_LINE);
    }

    #[test]
    fn missing_user_file_fails() {
        let result = DrillsConfig::load(Some(Path::new("/definitely/not/here/drills.toml")));
        assert!(matches!(result, Err(LoadError::Source(_))));
    }

    #[test]
    fn rejects_unknown_effect() {
        let file = user_file("[synth]\neffects = [\"whisper\"]");

        let result = DrillsConfig::load(Some(file.path()));
        assert!(matches!(result, Err(LoadError::Source(_))));
    }

    #[test]
    fn invalid_line_tables_fail_to_load() {
        let file = user_file("[transit]\nstations = [\"solo\"]");

        let err = DrillsConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, LoadError::Line(LineError::TooFewStations(1))));
        assert_eq!(err.to_string(), "invalid line: a line needs at least two stations, got 1");
    }
}
