// Types shared with hosts that render headings or tables of contents.

use serde::{Deserialize, Serialize};

/// A heading together with the fragment id assigned to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadingAnchor {
    /// Unique fragment id, e.g. "getting-started" or "heading-1".
    pub id: String,
    /// Plain heading text with inline markup removed.
    pub text: String,
    /// Heading level (1-6).
    pub level: u8,
    /// Line the heading starts on (1-based).
    pub line: u32,
    /// True when the id was authored in the document (`{#id}`).
    #[serde(default)]
    pub explicit: bool,
}
