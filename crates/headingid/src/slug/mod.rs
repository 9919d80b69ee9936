// Slug generation: lowercase ASCII, transliterated Latin-1, collapsed separators.

mod translit;

use crate::config::Separator;

/// Convert arbitrary text into a URL-safe slug.
///
/// - ASCII letters are lowercased, ASCII digits kept
/// - Common accented letters and ligatures are transliterated (`é` → `e`,
///   `æ` → `ae`), regardless of case
/// - Every other character, including letters from other scripts and bytes
///   that are not valid UTF-8, becomes `separator`
/// - Runs of separators collapse into one; none are kept at either end
///
/// Returns an empty string if nothing in `input` is convertible.
pub fn slugify(input: impl AsRef<[u8]>, separator: Separator) -> String {
    let input = input.as_ref();
    let mut slug = SlugBuilder::new(input.len(), separator);

    for chunk in input.utf8_chunks() {
        for ch in chunk.valid().chars() {
            slug.push_char(ch);
        }
        if !chunk.invalid().is_empty() {
            slug.push_separator();
        }
    }

    slug.finish()
}

struct SlugBuilder {
    out: String,
    separator: char,
    last_was_separator: bool,
}

impl SlugBuilder {
    fn new(capacity: usize, separator: Separator) -> Self {
        Self {
            out: String::with_capacity(capacity),
            separator: separator.as_char(),
            last_was_separator: false,
        }
    }

    fn push_char(&mut self, ch: char) {
        if ch.is_ascii() {
            if ch.is_ascii_alphanumeric() {
                self.out.push(ch.to_ascii_lowercase());
                self.last_was_separator = false;
            } else {
                self.push_separator();
            }
            return;
        }

        match translit::lookup(fold_case(ch)) {
            Some(replacement) => {
                self.out.push_str(replacement);
                self.last_was_separator = false;
            }
            // Letters and digits from other scripts are dropped like symbols.
            None => self.push_separator(),
        }
    }

    fn push_separator(&mut self) {
        if !self.last_was_separator && !self.out.is_empty() {
            self.out.push(self.separator);
            self.last_was_separator = true;
        }
    }

    fn finish(mut self) -> String {
        if self.out.ends_with(self.separator) {
            self.out.pop();
        }
        if self.out.starts_with(self.separator) {
            self.out.remove(0);
        }
        self.out
    }
}

/// Lowercase `ch` when its lowercase form is a single character.
fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => ch,
    }
}
