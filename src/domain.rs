//! Domain models for meeting minutes.
//!
//! This module contains the page model (nodes and sections), the segmentation
//! of a page into sections, the rules that map requests onto section titles,
//! and configuration.

mod config;
pub use config::Config;

pub mod intent;
pub use intent::{PatternRule, is_valid, match_title};

mod node;
pub use node::ContentNode;

mod profile;
pub use profile::Profile;

mod section;
pub use section::{Section, SectionIndex};

mod segmenter;
pub use segmenter::segment;
