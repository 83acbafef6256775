use std::{path::Path, time::Duration};

use serde::{Deserialize, Serialize};

/// Where the minutes live and how to read them.
///
/// The defaults describe the LVL1 wiki; a TOML file can override any of
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Root of the wiki. Minutes pages are resolved relative to it.
    base_url: String,

    /// `User-Agent` header sent with every request.
    ///
    /// The wiki refuses clients that don't look like a browser.
    user_agent: String,

    /// Request timeout, in seconds.
    timeout_secs: u64,

    /// Class of the inline element that marks a heading's title.
    headline_class: String,

    /// `id` of the element that precedes the list of recent meetings on the
    /// wiki's front page.
    recent_meetings_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            headline_class: default_headline_class(),
            recent_meetings_id: default_recent_meetings_id(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The root URL of the wiki.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Points the configuration at a different wiki.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// The `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// How long to wait for the wiki before giving up.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Class of heading marker elements.
    #[must_use]
    pub fn headline_class(&self) -> &str {
        &self.headline_class
    }

    /// `id` of the recent meetings anchor.
    #[must_use]
    pub fn recent_meetings_id(&self) -> &str {
        &self.recent_meetings_id
    }
}

fn default_base_url() -> String {
    "http://wiki.lvl1.org".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_headline_class() -> String {
    "mw-headline".to_string()
}

fn default_recent_meetings_id() -> String {
    "Recent_Meetings".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_base_url")]
        base_url: String,

        #[serde(default = "default_user_agent")]
        user_agent: String,

        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,

        #[serde(default = "default_headline_class")]
        headline_class: String,

        #[serde(default = "default_recent_meetings_id")]
        recent_meetings_id: String,
    },
}

impl From<Versions> for super::Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                base_url,
                user_agent,
                timeout_secs,
                headline_class,
                recent_meetings_id,
            } => Self {
                base_url,
                user_agent,
                timeout_secs,
                headline_class,
                recent_meetings_id,
            },
        }
    }
}

impl From<super::Config> for Versions {
    fn from(config: super::Config) -> Self {
        Self::V1 {
            base_url: config.base_url,
            user_agent: config.user_agent,
            timeout_secs: config.timeout_secs,
            headline_class: config.headline_class,
            recent_meetings_id: config.recent_meetings_id,
        }
    }
}
