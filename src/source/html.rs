//! Reading minutes pages with `scraper`.
//!
//! Headings on the wiki look like
//! `<h2><span class="mw-headline">Space upgrades</span></h2>`: the marker
//! span sits directly inside the heading element, and the section content is
//! the heading's following siblings. Each element that contains headings has
//! its children flattened into a [`ContentNode`] list, which is then
//! segmented.

use std::collections::HashMap;

use scraper::{CaseSensitivity, ElementRef, Html, Node};

use crate::domain::{ContentNode, SectionIndex, segment};

/// Errors that can occur when reading a minutes page.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The page is not valid UTF-8.
    #[error("page is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),
}

/// The flattened children of one element that holds marked headings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingRun {
    /// Element and text children, in order.
    pub nodes: Vec<ContentNode>,

    /// Document position of each heading in `nodes`, in the same order.
    pub positions: Vec<usize>,
}

/// Decodes raw page bytes.
///
/// # Errors
///
/// Returns [`ParseError::Encoding`] if the bytes are not UTF-8.
pub fn decode(markup: &[u8]) -> Result<&str, ParseError> {
    Ok(std::str::from_utf8(markup)?)
}

/// Parses a minutes page into its sections.
///
/// A page without heading markers yields an empty index. Sections are
/// indexed in the document order of their headings, so the later of two
/// headings with the same title wins.
///
/// # Errors
///
/// Returns an error if the page cannot be decoded.
pub fn parse_sections(markup: &[u8], headline_class: &str) -> Result<SectionIndex, ParseError> {
    let document = Html::parse_document(decode(markup)?);

    let mut sections = heading_runs(&document, headline_class)
        .into_iter()
        .flat_map(|run| run.positions.into_iter().zip(segment(&run.nodes)))
        .collect::<Vec<_>>();
    sections.sort_by_key(|(position, _)| *position);

    tracing::debug!(sections = sections.len(), "Parsed minutes page");
    Ok(SectionIndex::from_sections(
        sections.into_iter().map(|(_, section)| section),
    ))
}

/// Flattens the children of every element that holds a marked heading.
///
/// A marker is a `span` carrying `headline_class`; its parent element is the
/// heading. Runs are returned in the order their first heading appears.
/// Comments and other non-content nodes are dropped.
#[must_use]
pub fn heading_runs(document: &Html, headline_class: &str) -> Vec<HeadingRun> {
    let mut headings = HashMap::new();
    let mut containers = Vec::new();

    for (position, node) in document.root_element().descendants().enumerate() {
        let Some(marker) = ElementRef::wrap(node) else {
            continue;
        };
        if marker.value().name() != "span"
            || !marker
                .value()
                .has_class(headline_class, CaseSensitivity::CaseSensitive)
        {
            continue;
        }
        let Some(heading) = marker.parent().filter(|parent| parent.value().is_element()) else {
            continue;
        };
        headings.entry(heading.id()).or_insert(position);
        if let Some(container) = heading.parent() {
            if !containers.contains(&container) {
                containers.push(container);
            }
        }
    }

    containers
        .into_iter()
        .map(|container| {
            let mut run = HeadingRun {
                nodes: Vec::new(),
                positions: Vec::new(),
            };
            for child in container.children() {
                match child.value() {
                    Node::Element(element) => {
                        let position = headings.get(&child.id()).copied();
                        run.positions.extend(position);
                        run.nodes.push(ContentNode::Element {
                            tag: element.name().to_string(),
                            text: ElementRef::wrap(child)
                                .map(|element| element.text().collect())
                                .unwrap_or_default(),
                            heading: position.is_some(),
                        });
                    }
                    Node::Text(text) => run.nodes.push(ContentNode::text(&**text)),
                    _ => {}
                }
            }
            run
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Section;

    const HEADLINE: &str = "mw-headline";

    #[test]
    fn two_headings_end_to_end() {
        let page = r#"<h2><span class="mw-headline">Space upgrades</span></h2><p>Buy a laser.</p><h2><span class="mw-headline">Space downgrades</span></h2><p>Sell the lathe.</p>"#;

        let index = parse_sections(page.as_bytes(), HEADLINE).unwrap();

        assert_eq!(index.len(), 2);
        let upgrades = index.get("space upgrades").unwrap();
        assert_eq!(upgrades.to_speakable_string(), "Space upgrades. Buy a laser.");
        let downgrades = index.get("Space downgrades").unwrap();
        assert_eq!(
            downgrades.to_speakable_string(),
            "Space downgrades. Sell the lathe."
        );
    }

    #[test]
    fn page_without_markers_is_empty() {
        let page = "<h2>Welcome</h2><p>Nothing to see.</p>";
        let index = parse_sections(page.as_bytes(), HEADLINE).unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn invalid_utf8_is_a_parse_error() {
        let result = parse_sections(&[0x3c, 0x70, 0xff, 0xfe], HEADLINE);
        assert!(matches!(result, Err(ParseError::Encoding(_))));
    }

    #[test]
    fn odd_marker_class_matches_nothing() {
        let page = r#"<h2><span class="mw-headline">Notes</span></h2><p>a</p>"#;
        let index = parse_sections(page.as_bytes(), "not a class!").unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn marker_class_is_matched_as_a_whole_class() {
        let page = r#"<h2><span class="intro mw-headline">Notes</span></h2><p>a</p><h2><span class="mw-headline-old">Old</span></h2>"#;
        let index = parse_sections(page.as_bytes(), HEADLINE).unwrap();
        assert_eq!(index.titles().collect::<Vec<_>>(), ["Notes"]);
    }

    #[test]
    fn text_between_elements_is_kept() {
        let page = r#"<div id="content">
<h2><span class="mw-headline"> First time visitor info </span></h2>
Doors open at 7
<p>Ask for a tour.</p>
<!-- hidden -->
</div>"#;
        let document = Html::parse_document(page);

        let runs = heading_runs(&document, HEADLINE);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].positions.len(), 1);
        let nodes = &runs[0].nodes;
        assert!(nodes.iter().all(|node| node.tag() != Some("#comment")));
        let headings: Vec<_> = nodes.iter().filter(|node| node.is_heading()).collect();
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].tag(), Some("h2"));

        let index = parse_sections(page.as_bytes(), HEADLINE).unwrap();
        let section = index.get("first time visitor info").unwrap();
        assert_eq!(section.title(), "First time visitor info");
        assert_eq!(
            section.to_speakable_string(),
            "First time visitor info. Doors open at 7. Ask for a tour. "
        );
    }

    #[test]
    fn nested_lists_contribute_all_their_text() {
        let page = r#"<h3><span class="mw-headline">Equipment and supplies wanted</span></h3>
<ul><li>Solder</li><li>Wire <b>strippers</b></li></ul>
<h3><span class="mw-headline">Meeting notes</span></h3>"#;

        let index = parse_sections(page.as_bytes(), HEADLINE).unwrap();

        let section = index.get("equipment and supplies wanted").unwrap();
        let list = section.body().iter().find(|node| node.tag() == Some("ul"));
        assert_eq!(list.map(ContentNode::visible_text), Some("SolderWire strippers"));
        assert_eq!(index.titles().count(), 2);
    }

    #[test]
    fn duplicate_titles_keep_the_later_section() {
        let page = r#"<h2><span class="mw-headline">Meeting Notes</span></h2><p>old</p><h2><span class="mw-headline">meeting NOTES</span></h2><p>new</p>"#;

        let index = parse_sections(page.as_bytes(), HEADLINE).unwrap();

        assert_eq!(index.len(), 1);
        let section = index.get("meeting notes").map(Section::to_speakable_string);
        assert_eq!(section.as_deref(), Some("meeting NOTES. new"));
    }

    #[test]
    fn later_heading_wins_across_containers() {
        let page = r#"<h2><span class="mw-headline">Notes</span></h2><p>a</p><div><h2><span class="mw-headline">notes</span></h2><p>b</p></div><h2><span class="mw-headline">NOTES</span></h2><p>c</p>"#;

        let index = parse_sections(page.as_bytes(), HEADLINE).unwrap();

        let section = index.get("notes").unwrap();
        assert_eq!(section.title(), "NOTES");
        assert_eq!(section.to_speakable_string(), "NOTES. c");
    }
}
