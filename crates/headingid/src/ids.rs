// Unique element ids for one document.
//
// A registry lives for a single rendering pass: create it when a document
// starts, feed it every heading in traversal order, drop it afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::{ConfigError, IdOptions};
use crate::slug::slugify;

/// What kind of element an id is generated for. Only affects the fallback
/// token used when the element's text has nothing to slugify.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    #[default]
    Heading,
    Other,
}

/// A collection of element ids.
pub trait Ids {
    /// Generate a new id for an element with the given text.
    fn generate(&mut self, text: &[u8], kind: ElementKind) -> String;

    /// Mark `id` as used so that generated ids never collide with it.
    fn put(&mut self, id: &str);
}

/// Tracks every id issued or reserved within one document.
///
/// Not synchronized: share across threads only behind the host's own lock,
/// or give each worker its own registry.
#[derive(Debug, Clone, Default)]
pub struct IdRegistry {
    used: HashSet<String>,
    options: IdOptions,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: IdOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self { used: HashSet::new(), options })
    }

    pub fn options(&self) -> &IdOptions {
        &self.options
    }

    /// Slugify `text` and make it unique by appending `-1`, `-2`, … as needed.
    ///
    /// Never returns an empty string: text with nothing to slugify falls back
    /// to `heading` or `id` depending on `kind`.
    pub fn generate(&mut self, text: impl AsRef<[u8]>, kind: ElementKind) -> String {
        let mut base = slugify(text, self.options.separator);
        if base.is_empty() {
            base = self.fallback(kind).to_string();
        }

        if !self.used.contains(&base) {
            self.used.insert(base.clone());
            return base;
        }

        let separator = self.options.separator.as_char();
        let mut suffix: u64 = 0;
        loop {
            suffix += 1;
            let candidate = format!("{base}{separator}{suffix}");
            if !self.used.contains(&candidate) {
                trace!(%base, %candidate, "resolved id collision");
                self.used.insert(candidate.clone());
                return candidate;
            }
        }
    }

    /// Reserve `id` verbatim. It is not slugified.
    pub fn put(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.used.insert(id.clone()) {
            debug!(%id, "id reserved more than once");
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.used.contains(id)
    }

    /// Number of distinct ids issued or reserved so far.
    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    fn fallback(&self, kind: ElementKind) -> &str {
        match kind {
            ElementKind::Heading => &self.options.heading_fallback,
            ElementKind::Other => &self.options.fallback,
        }
    }
}

impl Ids for IdRegistry {
    fn generate(&mut self, text: &[u8], kind: ElementKind) -> String {
        IdRegistry::generate(self, text, kind)
    }

    fn put(&mut self, id: &str) {
        IdRegistry::put(self, id)
    }
}
