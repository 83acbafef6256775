use std::{collections::BTreeMap, fmt, sync::LazyLock};

use nonempty::NonEmpty;
use regex::{Captures, Regex};

use crate::domain::ContentNode;

/// Matches a line break together with the whitespace around it, and the
/// sentence-ending punctuation immediately before it, if any.
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([.!?])?(\s*\n\s*)").expect("this must never fail"));

/// A titled section of a minutes page.
///
/// The first node is always the heading the section was opened by; the rest
/// are the nodes that followed it up to the next heading with the same tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    title: String,
    nodes: NonEmpty<ContentNode>,
}

impl Section {
    /// Opens a section at the given heading node.
    #[must_use]
    pub fn new(heading: ContentNode) -> Self {
        Self {
            title: heading.visible_text().trim().to_string(),
            nodes: NonEmpty::new(heading),
        }
    }

    /// Appends a node to the end of the section.
    pub(crate) fn push(&mut self, node: ContentNode) {
        self.nodes.push(node);
    }

    /// The trimmed text of the heading.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The heading node this section was opened by.
    #[must_use]
    pub const fn heading(&self) -> &ContentNode {
        &self.nodes.head
    }

    /// Nodes following the heading.
    #[must_use]
    pub fn body(&self) -> &[ContentNode] {
        &self.nodes.tail
    }

    /// All nodes, starting with the heading.
    pub fn nodes(&self) -> impl Iterator<Item = &ContentNode> {
        self.nodes.iter()
    }

    /// Renders the section as a single line of text suitable for speech.
    ///
    /// Each node contributes its trimmed text and nodes are separated by line
    /// breaks. Every run of whitespace containing a line break then becomes
    /// the punctuation that ended the line (a full stop if there was none)
    /// followed by a single space.
    #[must_use]
    pub fn to_speakable_string(&self) -> String {
        let joined = self
            .nodes()
            .map(ContentNode::speakable)
            .collect::<Vec<_>>()
            .join("\n");
        simplify_whitespace(&joined)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

fn simplify_whitespace(text: &str) -> String {
    LINE_BREAK
        .replace_all(text, |captures: &Captures| {
            let stop = captures.get(1).map_or(".", |m| m.as_str());
            format!("{stop} ")
        })
        .into_owned()
}

/// Sections of one minutes page, keyed by lowercased title.
///
/// Built fresh for every fetched page. When two headings share a title
/// (ignoring case) the later one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionIndex {
    sections: BTreeMap<String, Section>,
}

impl SectionIndex {
    /// Builds an index from sections in document order.
    pub fn from_sections(sections: impl IntoIterator<Item = Section>) -> Self {
        let mut index = Self::default();
        for section in sections {
            index.insert(section);
        }
        index
    }

    /// Adds a section, replacing any earlier section with the same key.
    pub fn insert(&mut self, section: Section) {
        let key = section.title().to_lowercase();
        if self.sections.insert(key, section).is_some() {
            tracing::debug!("Replaced earlier section with a duplicate title");
        }
    }

    /// Looks up a section by title, ignoring case.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Section> {
        self.sections.get(&title.to_lowercase())
    }

    /// Takes a section out of the index by title, ignoring case.
    pub fn remove(&mut self, title: &str) -> Option<Section> {
        self.sections.remove(&title.to_lowercase())
    }

    /// Titles of all indexed sections, as written on the page.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.sections.values().map(Section::title)
    }

    /// Iterates over the sections, ordered by key.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Number of indexed sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the page had no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl FromIterator<Section> for SectionIndex {
    fn from_iter<T: IntoIterator<Item = Section>>(iter: T) -> Self {
        Self::from_sections(iter)
    }
}
