use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};

/// Details about the person talking to the assistant.
///
/// Profiles are YAML mappings shared by every assistant module. The keys
/// used here are named; anything else is preserved untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// The user's first name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// The user's last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Where the user is, as free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Settings belonging to other modules.
    #[serde(flatten)]
    pub other: BTreeMap<String, serde_yaml::Value>,
}

impl Profile {
    /// Loads a profile from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid profile.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read profile: {e}"))?;
        serde_yaml::from_str(&content).map_err(|e| format!("Failed to parse profile: {e}"))
    }

    /// The name to address the user by, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }
}
