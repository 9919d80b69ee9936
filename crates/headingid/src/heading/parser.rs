use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use tracing::debug;

use crate::ids::{ElementKind, IdRegistry, Ids};
use crate::types::HeadingAnchor;

#[derive(Debug, Clone)]
struct HeadingDraft {
    text: String,
    level: u8,
    line: u32,
    explicit_id: Option<String>,
}

/// Assign a unique id to every heading in `markdown` using a fresh registry.
pub fn collect_heading_anchors(markdown: &str) -> Vec<HeadingAnchor> {
    let mut ids = IdRegistry::new();
    collect_heading_anchors_with(markdown, &mut ids)
}

/// Assign heading ids using the caller's registry.
///
/// Authored ids (`# Title {#custom}`) are reserved before any id is generated,
/// so a generated id never duplicates one written later in the document.
/// Authored ids are used verbatim: if two headings author the same id, both
/// keep it.
pub fn collect_heading_anchors_with(markdown: &str, ids: &mut dyn Ids) -> Vec<HeadingAnchor> {
    let drafts = parse_headings(markdown);

    for id in drafts.iter().filter_map(|draft| draft.explicit_id.as_deref()) {
        ids.put(id);
    }

    let anchors: Vec<HeadingAnchor> = drafts
        .into_iter()
        .map(|draft| {
            let (id, explicit) = match draft.explicit_id {
                Some(id) => (id, true),
                None => (ids.generate(draft.text.as_bytes(), ElementKind::Heading), false),
            };
            HeadingAnchor { id, text: draft.text, level: draft.level, line: draft.line, explicit }
        })
        .collect();

    debug!(
        count = anchors.len(),
        explicit = anchors.iter().filter(|anchor| anchor.explicit).count(),
        "heading anchors assigned"
    );
    anchors
}

fn parse_headings(markdown: &str) -> Vec<HeadingDraft> {
    let mut drafts = Vec::new();
    let mut current: Option<HeadingDraft> = None;
    let parser = Parser::new_ext(markdown, Options::ENABLE_HEADING_ATTRIBUTES);

    for (event, range) in parser.into_offset_iter() {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                current = Some(HeadingDraft {
                    text: String::new(),
                    level: level_to_u8(level),
                    line: line_number_for_offset(markdown, range.start),
                    explicit_id: id.filter(|id| !id.is_empty()).map(|id| id.to_string()),
                });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(heading) = current.as_mut() {
                    heading.text.push(' ');
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(mut heading) = current.take() {
                    heading.text = heading.text.trim().to_string();
                    drafts.push(heading);
                }
            }
            _ => {}
        }
    }

    drafts
}

fn line_number_for_offset(markdown: &str, offset: usize) -> u32 {
    markdown[..offset].bytes().filter(|byte| *byte == b'\n').count() as u32 + 1
}

fn level_to_u8(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
