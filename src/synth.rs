//! Text effects and the synth that chains them
//!
//! Effects are plain phrase-to-phrase functions. A [`WordSynth`] holds an ordered
//! chain of them and folds a phrase through the chain on [`WordSynth::play`].
//!
//! ```ignore
//! use drills::synth::{effects, WordSynth};
//!
//! let mut synth = WordSynth::new();
//! synth.add_effect(effects::echo(2));
//! synth.add_effect(effects::loud(3));
//! synth.add_effect(effects::reverse());
//!
//! assert_eq!(synth.play("Ruby is fun!"), "!!!YYBBUURR !!!SSII !!!!!NNUUFF");
//! ```

pub mod effects;
pub mod word_synth;

pub use effects::{Effect, EffectKind, EffectParseError};
pub use word_synth::WordSynth;
