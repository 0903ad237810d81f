use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::contact::Contact;

/// Sortable columns of the contact table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    ContactName,
    CompanyName,
    Email,
    ContactSource,
    Segment,
    AccountStatus,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::ContactName,
        SortField::CompanyName,
        SortField::Email,
        SortField::ContactSource,
        SortField::Segment,
        SortField::AccountStatus,
    ];

    /// Column key, matching the contact's serialized field name
    pub fn key(self) -> &'static str {
        match self {
            SortField::ContactName => "contact_name",
            SortField::CompanyName => "company_name",
            SortField::Email => "email",
            SortField::ContactSource => "contact_source",
            SortField::Segment => "segment",
            SortField::AccountStatus => "account_status",
        }
    }

    /// The value this column sorts by. `None` sorts before any string.
    pub fn value_of(self, contact: &Contact) -> Option<&str> {
        match self {
            SortField::ContactName => Some(contact.contact_name.as_str()),
            SortField::CompanyName => contact.company_name.as_deref(),
            SortField::Email => contact.email.as_deref(),
            SortField::ContactSource => contact.contact_source.as_deref(),
            SortField::Segment => contact.segment.as_deref(),
            SortField::AccountStatus => contact.account_status.as_deref(),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort field '{0}'")]
pub struct UnknownSortField(pub String);

impl FromStr for SortField {
    type Err = UnknownSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contact_name" | "name" => Ok(SortField::ContactName),
            "company_name" | "company" => Ok(SortField::CompanyName),
            "email" => Ok(SortField::Email),
            "contact_source" | "source" => Ok(SortField::ContactSource),
            "segment" => Ok(SortField::Segment),
            "account_status" | "status" => Ok(SortField::AccountStatus),
            other => Err(UnknownSortField(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current column sort. With no field, `direction` is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    #[serde(default)]
    pub field: Option<SortField>,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(field: SortField, direction: SortDirection) -> Self {
        SortState {
            field: Some(field),
            direction,
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.field.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_keys_and_aliases() {
        for field in SortField::ALL {
            assert_eq!(field.key().parse::<SortField>(), Ok(field));
        }
        assert_eq!("name".parse::<SortField>(), Ok(SortField::ContactName));
        assert_eq!("status".parse::<SortField>(), Ok(SortField::AccountStatus));
        assert_eq!(
            "phone".parse::<SortField>(),
            Err(UnknownSortField("phone".into()))
        );
    }

    #[test]
    fn value_of_reads_optional_columns() {
        let c = Contact::new("1", "Ada").with_segment("SMB");
        assert_eq!(SortField::ContactName.value_of(&c), Some("Ada"));
        assert_eq!(SortField::Segment.value_of(&c), Some("SMB"));
        assert_eq!(SortField::Email.value_of(&c), None);
    }

    #[test]
    fn default_state_is_unsorted_ascending() {
        let s = SortState::default();
        assert!(!s.is_sorted());
        assert_eq!(s.direction, SortDirection::Asc);
    }
}
