// Transliteration table for common Latin-1 letters and ligatures.
//
// Keys are lowercase; callers lowercase a character before looking it up.

use std::collections::HashMap;
use std::sync::LazyLock;

const ENTRIES: &[(char, &str)] = &[
    ('á', "a"),
    ('à', "a"),
    ('â', "a"),
    ('ä', "a"),
    ('ã', "a"),
    ('å', "a"),
    ('é', "e"),
    ('è', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('í', "i"),
    ('ì', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ó', "o"),
    ('ò', "o"),
    ('ô', "o"),
    ('ö', "o"),
    ('õ', "o"),
    ('ú', "u"),
    ('ù', "u"),
    ('û', "u"),
    ('ü', "u"),
    ('ñ', "n"),
    ('ç', "c"),
    ('ý', "y"),
    ('ÿ', "y"),
    ('þ', "th"),
    ('ð', "d"),
    ('æ', "ae"),
    ('œ', "oe"),
];

static TABLE: LazyLock<HashMap<char, &'static str>> =
    LazyLock::new(|| ENTRIES.iter().copied().collect());

/// Look up the ASCII replacement for an already-lowercased character.
pub(crate) fn lookup(ch: char) -> Option<&'static str> {
    TABLE.get(&ch).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_replacement_is_lowercase_ascii() {
        for (key, replacement) in ENTRIES {
            assert!(!key.is_ascii(), "{key:?} should not be ASCII");
            assert!(
                replacement.bytes().all(|b| b.is_ascii_lowercase()),
                "{key:?} maps to {replacement:?}"
            );
        }
    }

    #[test]
    fn keys_are_unique_and_lowercase() {
        assert_eq!(TABLE.len(), ENTRIES.len());
        for (key, _) in ENTRIES {
            assert!(!key.is_uppercase(), "{key:?} should be stored lowercase");
        }
    }

    #[test]
    fn ligatures_expand_to_two_letters() {
        assert_eq!(lookup('æ'), Some("ae"));
        assert_eq!(lookup('œ'), Some("oe"));
        assert_eq!(lookup('þ'), Some("th"));
    }

    #[test]
    fn uppercase_keys_miss() {
        assert_eq!(lookup('É'), None);
        assert_eq!(lookup('ß'), None);
    }
}
