use crate::domain::{ContentNode, Section};

/// Groups sibling nodes into sections.
///
/// Every heading node opens a section. A section collects each node after
/// its heading until it reaches a node with the same tag name as the heading
/// (that node is not included), or runs out of nodes.
///
/// Only the tag names are compared, not heading depth. An `h3` section is
/// therefore not closed by a following `h2`, and sections may overlap.
///
/// Sections are returned in the order of their headings.
#[must_use]
pub fn segment(nodes: &[ContentNode]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    // indices into `sections` that are still collecting nodes
    let mut open: Vec<usize> = Vec::new();

    for node in nodes {
        open.retain(|&i| sections[i].heading().tag() != node.tag());

        for &i in &open {
            sections[i].push(node.clone());
        }

        if node.is_heading() {
            open.push(sections.len());
            sections.push(Section::new(node.clone()));
        }
    }

    tracing::debug!(
        nodes = nodes.len(),
        sections = sections.len(),
        "Segmented nodes into sections"
    );

    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SectionIndex;

    fn titles(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(Section::title).collect()
    }

    fn body_text(section: &Section) -> Vec<&str> {
        section.body().iter().map(ContentNode::speakable).collect()
    }

    #[test]
    fn no_headings_no_sections() {
        let nodes = vec![
            ContentNode::element("p", "Intro"),
            ContentNode::text("\n"),
            ContentNode::element("h2", "Not a marked heading"),
        ];
        assert!(segment(&nodes).is_empty());
        assert!(SectionIndex::from_sections(segment(&nodes)).is_empty());
    }

    #[test]
    fn nodes_before_first_heading_are_ignored() {
        let nodes = vec![
            ContentNode::element("p", "Preamble"),
            ContentNode::heading("h2", "Meeting notes"),
            ContentNode::element("p", "Called to order."),
        ];
        let sections = segment(&nodes);
        assert_eq!(titles(&sections), ["Meeting notes"]);
        assert_eq!(body_text(&sections[0]), ["Called to order."]);
    }

    #[test]
    fn same_level_headings_split_sections() {
        let nodes = vec![
            ContentNode::heading("h2", "Space upgrades"),
            ContentNode::element("p", "Buy a laser."),
            ContentNode::text("\n"),
            ContentNode::heading("h2", "Space downgrades"),
            ContentNode::element("p", "Sell the lathe."),
            ContentNode::element("ul", "Old desk"),
        ];

        let sections = segment(&nodes);

        assert_eq!(titles(&sections), ["Space upgrades", "Space downgrades"]);
        assert_eq!(body_text(&sections[0]), ["Buy a laser.", ""]);
        assert_eq!(body_text(&sections[1]), ["Sell the lathe.", "Old desk"]);
        for section in &sections {
            assert!(
                section
                    .body()
                    .iter()
                    .all(|node| node.tag() != section.heading().tag())
            );
        }
    }

    #[test]
    fn deeper_heading_stays_inside_shallower_section() {
        let nodes = vec![
            ContentNode::heading("h2", "Projects"),
            ContentNode::element("p", "Overview"),
            ContentNode::heading("h3", "Robot"),
            ContentNode::element("p", "Arm works"),
            ContentNode::heading("h2", "Meeting notes"),
            ContentNode::element("p", "Adjourned"),
        ];

        let sections = segment(&nodes);

        assert_eq!(titles(&sections), ["Projects", "Robot", "Meeting notes"]);
        assert_eq!(
            body_text(&sections[0]),
            ["Overview", "Robot", "Arm works"]
        );
        // an h3 section only stops at another h3
        assert_eq!(
            body_text(&sections[1]),
            ["Arm works", "Meeting notes", "Adjourned"]
        );
        assert_eq!(body_text(&sections[2]), ["Adjourned"]);
    }

    #[test]
    fn last_section_runs_to_the_end() {
        let nodes = vec![
            ContentNode::heading("h2", "Regular meetups"),
            ContentNode::element("p", "Tuesdays"),
            ContentNode::element("h3", "Unmarked"),
            ContentNode::text("tail"),
        ];
        let sections = segment(&nodes);
        assert_eq!(sections.len(), 1);
        assert_eq!(body_text(&sections[0]), ["Tuesdays", "Unmarked", "tail"]);
    }

    #[test]
    fn unmarked_element_with_heading_tag_closes_section() {
        let nodes = vec![
            ContentNode::heading("h2", "Space upgrades"),
            ContentNode::element("p", "Buy a laser."),
            ContentNode::element("h2", "Contents"),
            ContentNode::element("p", "Orphan"),
        ];
        let sections = segment(&nodes);
        assert_eq!(body_text(&sections[0]), ["Buy a laser."]);
    }
}
