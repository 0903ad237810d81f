use serde::{Deserialize, Serialize};

/// Known contact sources, in the order they are offered as filter options.
pub const CONTACT_SOURCES: &[&str] = &[
    "Website",
    "Referral",
    "Trade Show",
    "LinkedIn",
    "Cold Call",
    "Email Campaign",
    "Partner",
    "Other",
];

/// Known customer segments.
pub const SEGMENTS: &[&str] = &["Enterprise", "Mid-Market", "SMB", "Startup"];

/// Known account statuses, roughly in pipeline order.
pub const ACCOUNT_STATUSES: &[&str] = &[
    "New",
    "Working",
    "Warm",
    "Hot",
    "Nurture",
    "Closed-Won",
    "Closed-Lost",
];

/// A contact record as loaded from the store.
///
/// The table core never mutates contacts; it only filters, orders and
/// selects them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub contact_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_status: Option<String>,
}

impl Contact {
    /// Create a contact with only the required fields set
    pub fn new(id: impl Into<String>, contact_name: impl Into<String>) -> Self {
        Contact {
            id: id.into(),
            contact_name: contact_name.into(),
            company_name: None,
            email: None,
            contact_source: None,
            segment: None,
            account_status: None,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company_name = Some(company.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.contact_source = Some(source.into());
        self
    }

    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segment = Some(segment.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.account_status = Some(status.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let c: Contact =
            serde_json::from_str(r#"{"id":"c1","contact_name":"Ada Lovelace"}"#).unwrap();
        assert_eq!(c, Contact::new("c1", "Ada Lovelace"));
    }

    #[test]
    fn serializes_without_empty_optionals() {
        let c = Contact::new("c1", "Ada").with_source("Website");
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(
            json,
            r#"{"id":"c1","contact_name":"Ada","contact_source":"Website"}"#
        );
    }

    #[test]
    fn catalogs_have_no_all_entry() {
        for list in [CONTACT_SOURCES, SEGMENTS, ACCOUNT_STATUSES] {
            assert!(!list.contains(&"all"));
        }
    }
}
