// Markdown integration: walk a document's headings and assign their ids.

pub mod parser;

pub use parser::{collect_heading_anchors, collect_heading_anchors_with};
