use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The literal used for "no constraint" in filter option lists
pub const ALL: &str = "all";

/// A single categorical filter: either everything, or exactly one tag value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FilterValue {
    #[default]
    All,
    Only(String),
}

impl FilterValue {
    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    /// Whether a contact field satisfies this filter. A missing field only
    /// satisfies `All`.
    pub fn accepts(&self, field: Option<&str>) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Only(want) => field == Some(want.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterValue::All => ALL,
            FilterValue::Only(v) => v,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        if s == ALL {
            FilterValue::All
        } else {
            FilterValue::Only(s.to_string())
        }
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        if s == ALL {
            FilterValue::All
        } else {
            FilterValue::Only(s)
        }
    }
}

impl FromStr for FilterValue {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FilterValue::from(s))
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FilterValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FilterValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(FilterValue::from(s))
    }
}

/// Search text plus the three categorical filters of the contact table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub source: FilterValue,
    #[serde(default)]
    pub segment: FilterValue,
    #[serde(default)]
    pub status: FilterValue,
}

impl FilterState {
    /// The categorical filters, in display order
    pub fn categorical(&self) -> [&FilterValue; 3] {
        [&self.source, &self.segment, &self.status]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_literal_parses_to_identity() {
        assert_eq!(FilterValue::from("all"), FilterValue::All);
        assert_eq!(
            FilterValue::from("All"),
            FilterValue::Only("All".to_string())
        );
        assert_eq!("all".parse::<FilterValue>(), Ok(FilterValue::All));
        assert_eq!(
            "Referral".parse::<FilterValue>(),
            Ok(FilterValue::Only("Referral".to_string()))
        );
    }

    #[test]
    fn missing_field_only_matches_all() {
        assert!(FilterValue::All.accepts(None));
        assert!(!FilterValue::from("Website").accepts(None));
        assert!(FilterValue::from("Website").accepts(Some("Website")));
        assert!(!FilterValue::from("Website").accepts(Some("website")));
    }

    #[test]
    fn serde_uses_plain_strings() {
        let state = FilterState {
            source: FilterValue::from("LinkedIn"),
            ..Default::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"search_term":"","source":"LinkedIn","segment":"all","status":"all"}"#
        );
        let back: FilterState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn defaults_on_empty_object() {
        let state: FilterState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, FilterState::default());
        assert!(state.categorical().iter().all(|f| f.is_all()));
    }
}
