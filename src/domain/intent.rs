//! Mapping free-form requests onto the sections of the minutes.
//!
//! Requests are tested against an ordered table of case-insensitive patterns,
//! and the first pattern that matches decides the section. The patterns
//! overlap on purpose ("supplies" on its own means the equipment section), so
//! the order of the table is significant.

use std::sync::LazyLock;

use regex::Regex;

/// Patterns and the canonical section title each one selects, in priority
/// order.
const RULE_TABLE: [(&str, &str); 8] = [
    (
        r"first[ _]time (visitor )?(info)?",
        "First time visitor info",
    ),
    (
        r"(equipment (and )?supplies|supplies (and )?equipment|equipment|supplies)( wanted| needed)?",
        "Equipment and supplies wanted",
    ),
    (r"(space )?upgrades?", "Space upgrades"),
    (r"(space )?downgrades?", "Space downgrades"),
    (r"(regular )?meetups?", "Regular meetups"),
    (
        r"(upcoming )?(workshops? (and )?events?|events? (and )?workshops?|workshops?|events?)",
        "Upcoming workshops and events",
    ),
    (r"projects?|(projects? )?roll call", "Project roll call"),
    (r"meeting notes?", "Meeting notes"),
];

static RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    RULE_TABLE
        .iter()
        .map(|&(pattern, title)| PatternRule::new(pattern, title))
        .collect()
});

/// A pattern paired with the section title it selects.
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    title: &'static str,
}

impl PatternRule {
    /// Compiles a rule. The pattern must match on word boundaries and ignores
    /// case.
    ///
    /// # Panics
    ///
    /// Panics if the pattern is not a valid regular expression.
    #[must_use]
    fn new(pattern: &str, title: &'static str) -> Self {
        let regex = Regex::new(&format!(r"(?i)\b(?:{pattern})\b")).expect("this must never fail");
        Self { regex, title }
    }

    /// Whether the rule matches anywhere in the text.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The canonical title this rule selects.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        self.title
    }

    /// The compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// All rules, in the order they are tried.
#[must_use]
pub fn rules() -> &'static [PatternRule] {
    &RULES
}

/// The canonical section titles, in rule order.
pub fn canonical_titles() -> impl Iterator<Item = &'static str> {
    RULE_TABLE.iter().map(|&(_, title)| title)
}

/// Returns the title of the section the text refers to, if any.
#[must_use]
pub fn match_title(text: &str) -> Option<&'static str> {
    let title = rules()
        .iter()
        .find(|rule| rule.matches(text))
        .map(PatternRule::title);
    tracing::debug!(text, ?title, "Matched request against section rules");
    title
}

/// Whether the text refers to any known section.
#[must_use]
pub fn is_valid(text: &str) -> bool {
    match_title(text).is_some()
}
