// headingid: unique, URL-safe fragment ids for document headings.
//
// `slug::slugify` turns text into an ASCII slug; `ids::IdRegistry` keeps the
// ids of one document unique; `heading` wires both into a markdown walk.

pub mod config;
pub mod heading;
pub mod ids;
pub mod slug;
pub mod types;

pub use config::{ConfigError, IdOptions, Separator};
pub use heading::{collect_heading_anchors, collect_heading_anchors_with};
pub use ids::{ElementKind, IdRegistry, Ids};
pub use slug::slugify;
pub use types::HeadingAnchor;
