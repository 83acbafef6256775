//! Answering questions about the minutes.
//!
//! [`Minutes`] ties the pieces together: it finds the minutes page, splits
//! it into sections, picks the section a request refers to and reads it out
//! through a [`Speaker`].

use tracing::instrument;

use crate::{
    Config, Profile, Section, SectionIndex,
    domain::intent,
    source::{
        self, DateError, FetchError, Fetcher, HttpFetcher, LocateError, MinutesDate, ParseError,
    },
};

/// Words a dispatcher can listen for before routing a request here.
pub const KEYWORDS: &[&str] = &[
    "FIRST_TIME",
    "VISITOR",
    "INFO",
    "EQUIPMENT",
    "AND",
    "SUPPLIES",
    "WANTED",
    "NEEDED",
    "SPACE",
    "UPGRADE",
    "UPGRADES",
    "DOWNGRADE",
    "DOWNGRADES",
    "REGULAR",
    "MEETUP",
    "MEETUPS",
    "UPCOMING",
    "WORKSHOP",
    "WORKSHOPS",
    "EVENT",
    "EVENTS",
    "PROJECT",
    "ROLL",
    "CALL",
    "MEETING",
    "NOTES",
];

/// Where this module ranks when several modules accept the same request.
pub const PRIORITY: u8 = 4;

/// Said before the wiki is contacted.
pub const CHECKING: &str = "Checking the minutes...";

/// Receives the assistant's spoken output.
pub trait Speaker {
    /// Speaks one phrase.
    fn say(&mut self, phrase: &str);
}

impl Speaker for Vec<String> {
    fn say(&mut self, phrase: &str) {
        self.push(phrase.to_string());
    }
}

/// Errors that can occur while answering a request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A page could not be retrieved.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A page could not be read.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The most recent minutes could not be found.
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// The meeting date is malformed.
    #[error(transparent)]
    Date(#[from] DateError),

    /// The request did not refer to any known section.
    #[error("'{text}' does not refer to a section of the minutes")]
    NoMatch {
        /// The request.
        text: String,
    },

    /// The minutes have no section with the requested title.
    #[error("the minutes have no '{title}' section")]
    Lookup {
        /// The title that was looked up.
        title: String,
    },
}

/// Whether the request refers to a section of the minutes.
#[must_use]
pub fn is_valid(text: &str) -> bool {
    intent::is_valid(text)
}

/// Reads meeting minutes from the wiki.
#[derive(Debug, Clone)]
pub struct Minutes<F> {
    fetcher: F,
    config: Config,
}

impl Minutes<HttpFetcher> {
    /// Connects to the wiki described by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialised.
    pub fn connect(config: Config) -> Result<Self, Error> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::new(fetcher, config))
    }
}

impl<F: Fetcher> Minutes<F> {
    /// Reads minutes through the given fetcher.
    pub const fn new(fetcher: F, config: Config) -> Self {
        Self { fetcher, config }
    }

    /// The configuration in use.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The URL of the most recent minutes, as linked from the front page.
    ///
    /// # Errors
    ///
    /// Returns an error if the front page cannot be fetched or read, or does
    /// not link to any minutes.
    #[instrument(level = "debug", skip(self))]
    pub fn most_recent_url(&self) -> Result<String, Error> {
        let page = self.fetcher.fetch(self.config.base_url())?;
        let markup = source::html::decode(&page)?;
        let href = source::recent_minutes_href(markup, self.config.recent_meetings_id())?;
        Ok(source::join_url(self.config.base_url(), &href))
    }

    /// The URL of the minutes for a meeting, or of the most recent minutes.
    ///
    /// # Errors
    ///
    /// Returns an error if the most recent minutes are requested and cannot
    /// be located.
    pub fn page_url(&self, date: Option<&MinutesDate>) -> Result<String, Error> {
        match date {
            Some(date) => Ok(date.url(self.config.base_url())),
            None => self.most_recent_url(),
        }
    }

    /// Fetches a minutes page and splits it into sections.
    ///
    /// Without a date the most recent minutes are used.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be located, fetched or read.
    #[instrument(level = "debug", skip(self))]
    pub fn sections(&self, date: Option<&MinutesDate>) -> Result<SectionIndex, Error> {
        let url = self.page_url(date)?;
        let page = self.fetcher.fetch(&url)?;
        let index = source::parse_sections(&page, self.config.headline_class())?;
        tracing::info!("Read {} sections from {url}", index.len());
        Ok(index)
    }

    /// Like [`Self::sections`], for a date written `mm/dd/yyyy`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Date`] if the date is malformed, otherwise as
    /// [`Self::sections`].
    pub fn sections_on(&self, date: &str) -> Result<SectionIndex, Error> {
        let date: MinutesDate = date.parse()?;
        self.sections(Some(&date))
    }

    /// Fetches a single section by title.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lookup`] if the page has no such section, otherwise as
    /// [`Self::sections`].
    pub fn section(&self, title: &str, date: Option<&MinutesDate>) -> Result<Section, Error> {
        let mut sections = self.sections(date)?;
        take_section(&mut sections, title)
    }

    /// Answers a request by reading out the section it refers to.
    ///
    /// The speaker first hears that the minutes are being checked, then the
    /// section. Nothing more is spoken if the request fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the minutes cannot be read, if the request does not
    /// refer to a section, or if the minutes lack that section.
    pub fn handle<S: Speaker + ?Sized>(
        &self,
        text: &str,
        speaker: &mut S,
        profile: &Profile,
    ) -> Result<(), Error> {
        self.handle_on(text, None, speaker, profile)
    }

    /// Like [`Self::handle`], reading the minutes of the given meeting.
    ///
    /// # Errors
    ///
    /// As [`Self::handle`].
    #[instrument(level = "debug", skip(self, speaker, profile))]
    pub fn handle_on<S: Speaker + ?Sized>(
        &self,
        text: &str,
        date: Option<&MinutesDate>,
        speaker: &mut S,
        profile: &Profile,
    ) -> Result<(), Error> {
        tracing::debug!(user = ?profile.name(), "Handling minutes request");
        speaker.say(CHECKING);

        let mut sections = self.sections(date)?;
        let title = intent::match_title(text).ok_or_else(|| Error::NoMatch {
            text: text.to_string(),
        })?;
        let section = take_section(&mut sections, title)?;

        speaker.say(&section.to_speakable_string());
        Ok(())
    }
}

fn take_section(sections: &mut SectionIndex, title: &str) -> Result<Section, Error> {
    sections.remove(title).ok_or_else(|| Error::Lookup {
        title: title.to_string(),
    })
}
