//! LVL1 Meeting Minutes
//!
//! Answers spoken questions about the hackerspace's meeting minutes. Minutes
//! are wiki pages; a page is split into titled sections, a request is matched
//! to one of the known section titles, and that section is read out as a
//! single line of speech.

pub mod domain;
pub use domain::{Config, ContentNode, PatternRule, Profile, Section, SectionIndex, match_title};

/// Retrieving and reading minutes pages from the wiki.
pub mod source;
pub use source::{Fetcher, HttpFetcher, MinutesDate};

mod assistant;
pub use assistant::{CHECKING, Error, KEYWORDS, Minutes, PRIORITY, Speaker, is_valid};
