//! Ordered effect chain
//!
//! # Design
//!
//! The synth keeps effects in the order they were added and never reorders or
//! removes them. [`WordSynth::play`] threads the phrase through the chain from
//! the first-added effect to the last; nothing is cached between calls.

use crate::synth::effects::{Effect, EffectKind};
use tracing::trace;

/// A chain of effects applied in insertion order.
pub struct WordSynth {
    effects: Vec<Box<dyn Effect>>,
}

impl WordSynth {
    /// Create a synth with no effects.
    ///
    /// Playing an empty synth returns the phrase unchanged.
    pub fn new() -> Self {
        WordSynth {
            effects: Vec::new(),
        }
    }

    /// Append an effect to the end of the chain.
    pub fn add_effect<E: Effect + 'static>(&mut self, effect: E) {
        self.effects.push(Box::new(effect));
    }

    /// Builder form of [`add_effect`](Self::add_effect).
    ///
    /// ```ignore
    /// let synth = WordSynth::new()
    ///     .with_effect(effects::echo(2))
    ///     .with_effect(effects::reverse());
    /// ```
    pub fn with_effect<E: Effect + 'static>(mut self, effect: E) -> Self {
        self.add_effect(effect);
        self
    }

    /// Run the phrase through every effect, first-added first.
    pub fn play(&self, phrase: &str) -> String {
        self.effects
            .iter()
            .enumerate()
            .fold(phrase.to_string(), |current, (index, effect)| {
                let next = effect.apply(&current);
                trace!(index, input = %current, output = %next, "effect applied");
                next
            })
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl Default for WordSynth {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<EffectKind> for WordSynth {
    fn from_iter<I: IntoIterator<Item = EffectKind>>(iter: I) -> Self {
        WordSynth {
            effects: iter.into_iter().map(EffectKind::build).collect(),
        }
    }
}

impl std::fmt::Debug for WordSynth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordSynth")
            .field("effects", &self.effects.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::effects::{echo, loud, reverse};

    #[test]
    fn test_play_without_effects() {
        let synth = WordSynth::new();
        assert!(synth.is_empty());
        assert_eq!(synth.play("Ruby is fun!"), "Ruby is fun!");
    }

    #[test]
    fn test_play_with_reverse() {
        let mut synth = WordSynth::new();
        synth.add_effect(reverse());
        assert_eq!(synth.play("Ruby is fun!"), "ybuR si !nuf");
    }

    #[test]
    fn test_play_with_many_effects() {
        let mut synth = WordSynth::new();
        synth.add_effect(echo(2));
        synth.add_effect(loud(3));
        synth.add_effect(reverse());
        assert_eq!(synth.len(), 3);
        assert_eq!(synth.play("Ruby is fun!"), "!!!YYBBUURR !!!SSII !!!!!NNUUFF");
    }

    #[test]
    fn test_order_matters() {
        let tag_a = |s: &str| format!("{}a", s);
        let tag_b = |s: &str| format!("{}b", s);

        let ab = WordSynth::new().with_effect(tag_a).with_effect(tag_b);
        let ba = WordSynth::new().with_effect(tag_b).with_effect(tag_a);

        assert_eq!(ab.play("x"), "xab");
        assert_eq!(ba.play("x"), "xba");
    }

    #[test]
    fn test_play_is_repeatable() {
        let synth = WordSynth::new().with_effect(loud(1));
        assert_eq!(synth.play("hi"), "HI!");
        assert_eq!(synth.play("hi"), "HI!");
    }

    #[test]
    fn test_collect_from_effect_kinds() {
        let synth: WordSynth = [EffectKind::Echo(2), EffectKind::Loud(3), EffectKind::Reverse]
            .into_iter()
            .collect();
        assert_eq!(synth.play("Ruby is fun!"), "!!!YYBBUURR !!!SSII !!!!!NNUUFF");
    }
}
