//! Rewrite `:key => value` hash pairs as `key: value`

use once_cell::sync::Lazy;
use regex::Regex;

/// A symbol key followed by a hash rocket, with any spaces around the rocket.
static ROCKET_KEY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([A-Za-z0-9_]+) *=> *").unwrap());

/// Replace every `:key => ` with `key: `.
///
/// Only the key side is rewritten; symbol values such as `:female` are left alone.
pub fn convert_hash_syntax(old_syntax: &str) -> String {
    ROCKET_KEY_REGEX
        .replace_all(old_syntax, "${1}: ")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_hash() {
        assert_eq!(convert_hash_syntax("{}"), "{}");
    }

    #[test]
    fn test_spacing_variants() {
        assert_eq!(convert_hash_syntax(":a=>1"), "a: 1");
        assert_eq!(convert_hash_syntax(":a   =>   1"), "a: 1");
        assert_eq!(convert_hash_syntax(":snake_case2 => 1"), "snake_case2: 1");
    }

    #[test]
    fn test_symbol_values_untouched() {
        assert_eq!(
            convert_hash_syntax("{ :gender => :female }"),
            "{ gender: :female }"
        );
    }

    #[test]
    fn test_string_keys_untouched() {
        assert_eq!(
            convert_hash_syntax(r#"{ "name" => "Alice" }"#),
            r#"{ "name" => "Alice" }"#
        );
    }
}
