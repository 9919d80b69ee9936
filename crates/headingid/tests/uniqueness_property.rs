use std::collections::HashSet;

use headingid::{slugify, ElementKind, IdRegistry, Separator};
use proptest::collection::vec;
use proptest::prelude::*;

fn interesting_char() -> impl Strategy<Value = char> {
    prop_oneof![
        (b'a'..=b'z').prop_map(char::from),
        (b'A'..=b'Z').prop_map(char::from),
        (b'0'..=b'9').prop_map(char::from),
        Just(' '),
        Just('-'),
        Just('_'),
        Just('!'),
        Just('#'),
        Just('.'),
        Just('é'),
        Just('Ü'),
        Just('æ'),
        Just('ß'),
        Just('中'),
        Just('я'),
        Just('🚀'),
        Just('\u{0301}'),
    ]
}

fn heading_text() -> impl Strategy<Value = String> {
    vec(interesting_char(), 0..12).prop_map(|chars| chars.into_iter().collect())
}

#[derive(Debug, Clone)]
enum Op {
    Generate(String, ElementKind),
    Put(String),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (heading_text(), prop_oneof![Just(ElementKind::Heading), Just(ElementKind::Other)])
            .prop_map(|(text, kind)| Op::Generate(text, kind)),
        1 => heading_text().prop_map(Op::Put),
    ]
}

proptest! {
    #[test]
    fn slugify_is_deterministic(bytes in vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(slugify(&bytes, Separator::DASH), slugify(&bytes, Separator::DASH));
    }

    #[test]
    fn slugs_are_clean_ascii(bytes in vec(any::<u8>(), 0..64)) {
        let slug = slugify(&bytes, Separator::DASH);
        prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{:?}", slug);
        prop_assert!(!slug.contains("--"), "{:?}", slug);
        prop_assert!(
            slug.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-'),
            "{:?}",
            slug
        );
    }

    #[test]
    fn slugify_is_idempotent(text in heading_text()) {
        let once = slugify(&text, Separator::DASH);
        prop_assert_eq!(slugify(&once, Separator::DASH), once);
    }

    #[test]
    fn generated_ids_never_repeat(ops in vec(op(), 0..40)) {
        let mut ids = IdRegistry::new();
        let mut seen: HashSet<String> = HashSet::new();

        for op in ops {
            match op {
                Op::Generate(text, kind) => {
                    let id = ids.generate(&text, kind);
                    prop_assert!(!id.is_empty());
                    prop_assert!(seen.insert(id.clone()), "duplicate id {:?}", id);
                }
                Op::Put(id) => {
                    seen.insert(id.clone());
                    ids.put(id);
                }
            }
        }

        prop_assert_eq!(ids.len(), seen.len());
        for id in &seen {
            prop_assert!(ids.contains(id));
        }
    }
}
