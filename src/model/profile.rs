use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Timezone used when neither the stored profile nor the user picked one
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

/// Timezones offered in the profile form: (IANA name, display label)
pub const TIMEZONES: &[(&str, &str)] = &[
    ("Asia/Kolkata", "IST (India Standard Time)"),
    ("America/New_York", "EST (Eastern Standard Time)"),
    ("America/Los_Angeles", "PST (Pacific Standard Time)"),
    ("Europe/London", "GMT (Greenwich Mean Time)"),
    ("Europe/Paris", "CET (Central European Time)"),
    ("Asia/Tokyo", "JST (Japan Standard Time)"),
    ("Asia/Singapore", "SGT (Singapore Time)"),
    ("Australia/Sydney", "AEST (Australian Eastern Time)"),
    ("Asia/Dubai", "GST (Gulf Standard Time)"),
];

/// Look up the display label for a timezone
pub fn timezone_label(tz: &str) -> Option<&'static str> {
    TIMEZONES
        .iter()
        .find(|(name, _)| *name == tz)
        .map(|(_, label)| *label)
}

/// The signed-in user, as handed over by the session layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Editable profile fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub timezone: String,
    pub bio: String,
    pub avatar_url: String,
}

impl Default for ProfileData {
    fn default() -> Self {
        ProfileData {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            bio: String::new(),
            avatar_url: String::new(),
        }
    }
}

impl ProfileData {
    /// Avatar initials: first grapheme of each word, uppercased, at most two.
    /// Falls back to "U" for an empty name.
    pub fn initials(&self) -> String {
        initials(&self.full_name)
    }
}

pub fn initials(name: &str) -> String {
    let name = if name.trim().is_empty() { "U" } else { name };
    name.split_whitespace()
        .filter_map(|word| word.graphemes(true).next())
        .map(|g| g.to_uppercase())
        .collect::<String>()
        .graphemes(true)
        .take(2)
        .collect()
}
