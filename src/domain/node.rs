// ContentNode - an owned snapshot of one node from a parsed minutes page.

/// A single node of a minutes page, in document order.
///
/// Nodes are captured from the parsed markup tree once and never refer back
/// to it. An element keeps its tag name and the concatenated text of all its
/// descendants; a text node keeps the raw fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentNode {
    /// An element such as `<h2>` or `<p>`.
    Element {
        /// Lowercase tag name, used as the heading level.
        tag: String,
        /// Visible text of the element and all of its descendants.
        text: String,
        /// Whether this element encloses a heading marker.
        heading: bool,
    },
    /// A bare text fragment between elements.
    Text(String),
}

impl ContentNode {
    /// Creates an ordinary (non-heading) element node.
    pub fn element(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            text: text.into(),
            heading: false,
        }
    }

    /// Creates an element node that opens a section.
    pub fn heading(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Element {
            tag: tag.into(),
            text: text.into(),
            heading: true,
        }
    }

    /// Creates a text fragment node.
    pub fn text(fragment: impl Into<String>) -> Self {
        Self::Text(fragment.into())
    }

    /// The tag name, or `None` for a text fragment.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Element { tag, .. } => Some(tag),
            Self::Text(_) => None,
        }
    }

    /// The untrimmed visible text of the node.
    #[must_use]
    pub fn visible_text(&self) -> &str {
        match self {
            Self::Element { text, .. } | Self::Text(text) => text,
        }
    }

    /// Whether this node opens a section.
    #[must_use]
    pub const fn is_heading(&self) -> bool {
        matches!(self, Self::Element { heading: true, .. })
    }

    /// The node's contribution to a speakable string.
    #[must_use]
    pub fn speakable(&self) -> &str {
        self.visible_text().trim()
    }
}
