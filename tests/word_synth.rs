//! WordSynth chains built from the effect factories

use drills::synth::effects::{echo, loud, reverse};
use drills::synth::{Effect, EffectKind, WordSynth};
use proptest::prelude::*;

#[test]
fn test_play_without_effects() {
    let synth = WordSynth::new();
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
    assert_eq!(synth.play("Ruby is fun!"), "!!!YYBBUURR !!!SSII !!!!!NNUUFF");
}

#[test]
fn test_dropping_an_effect_changes_the_result() {
    let mut synth = WordSynth::new();
    synth.add_effect(echo(2));
    synth.add_effect(loud(3));
    assert_ne!(synth.play("Ruby is fun!"), "!!!YYBBUURR !!!SSII !!!!!NNUUFF");
}

#[test]
fn test_mixing_factories_and_closures() {
    let synth = WordSynth::new()
        .with_effect(|s: &str| s.replace("fun", "great"))
        .with_effect(loud(1));
    assert_eq!(synth.play("Ruby is fun"), "RUBY! IS! GREAT!");
}

fn phrase() -> impl Strategy<Value = String> {
    "[a-zA-Z!?]{1,8}( [a-zA-Z!?]{1,8}){0,5}"
}

fn effect_kind() -> impl Strategy<Value = EffectKind> {
    prop_oneof![
        Just(EffectKind::Reverse),
        (0usize..4).prop_map(EffectKind::Echo),
        (0usize..4).prop_map(EffectKind::Loud),
    ]
}

proptest! {
    #[test]
    fn empty_synth_is_identity(input in ".*") {
        prop_assert_eq!(WordSynth::new().play(&input), input);
    }

    #[test]
    fn two_effects_compose_left_to_right(
        input in phrase(),
        first in effect_kind(),
        second in effect_kind(),
    ) {
        let synth: WordSynth = [first, second].into_iter().collect();
        let expected = second.build().apply(&first.build().apply(&input));
        prop_assert_eq!(synth.play(&input), expected);
    }

    #[test]
    fn reverse_twice_restores_single_spaced_phrase(input in phrase()) {
        let synth = WordSynth::new().with_effect(reverse()).with_effect(reverse());
        prop_assert_eq!(synth.play(&input), input);
    }

    #[test]
    fn echo_multiplies_non_space_characters(input in phrase(), rate in 0usize..5) {
        let spaces = input.chars().filter(|c| *c == ' ').count();
        let others = input.chars().count() - spaces;
        let output = echo(rate)(&input);
        prop_assert_eq!(output.chars().count(), spaces + others * rate);
    }
}
