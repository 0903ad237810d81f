use regex::{Regex, RegexBuilder};

use crate::model::contact::Contact;
use crate::model::filter::{FilterState, FilterValue};

/// Case-insensitive literal matcher for the search box
enum SearchMatcher {
    Regex(Regex),
    /// Used if the escaped pattern exceeds the regex size limit
    Lowercase(String),
}

impl SearchMatcher {
    /// Build a matcher for `term`, or `None` if the term is empty.
    /// Whitespace is part of the term.
    fn new(term: &str) -> Option<Self> {
        if term.is_empty() {
            return None;
        }
        match RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => Some(SearchMatcher::Regex(re)),
            Err(_) => Some(SearchMatcher::Lowercase(term.to_lowercase())),
        }
    }

    fn is_match(&self, text: &str) -> bool {
        match self {
            SearchMatcher::Regex(re) => re.is_match(text),
            SearchMatcher::Lowercase(needle) => text.to_lowercase().contains(needle.as_str()),
        }
    }

    /// Name, company and email are searched; tags are not.
    fn matches_contact(&self, contact: &Contact) -> bool {
        self.is_match(&contact.contact_name)
            || contact.company_name.as_deref().is_some_and(|c| self.is_match(c))
            || contact.email.as_deref().is_some_and(|e| self.is_match(e))
    }
}

/// Whether `contact` passes the three categorical filters
fn matches_categories(contact: &Contact, filters: &FilterState) -> bool {
    filters.source.accepts(contact.contact_source.as_deref())
        && filters.segment.accepts(contact.segment.as_deref())
        && filters.status.accepts(contact.account_status.as_deref())
}

/// Keep the contacts that pass every active filter and the search term,
/// in their original order.
pub fn apply_filters<'a>(contacts: &'a [Contact], filters: &FilterState) -> Vec<&'a Contact> {
    let search = SearchMatcher::new(&filters.search_term);
    contacts
        .iter()
        .filter(|c| matches_categories(c, filters))
        .filter(|c| search.as_ref().is_none_or(|m| m.matches_contact(c)))
        .collect()
}

/// Single-contact form of [`apply_filters`]
pub fn matches(contact: &Contact, filters: &FilterState) -> bool {
    matches_categories(contact, filters)
        && SearchMatcher::new(&filters.search_term).is_none_or(|m| m.matches_contact(contact))
}

/// Number of categorical filters narrowing the table. The search term is
/// not counted.
pub fn active_filter_count(filters: &FilterState) -> usize {
    filters.categorical().iter().filter(|f| !f.is_all()).count()
}

pub fn has_active_filters(filters: &FilterState) -> bool {
    active_filter_count(filters) > 0
}

/// Reset source, segment and status to `all`. The search term is kept.
pub fn clear_filters(filters: &FilterState) -> FilterState {
    FilterState {
        search_term: filters.search_term.clone(),
        source: FilterValue::All,
        segment: FilterValue::All,
        status: FilterValue::All,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Contact> {
        vec![
            Contact::new("1", "Ada Lovelace")
                .with_company("Analytical Engines")
                .with_email("ada@engines.io")
                .with_source("Website")
                .with_segment("Enterprise")
                .with_status("Hot"),
            Contact::new("2", "Grace Hopper")
                .with_company("Navy")
                .with_source("LinkedIn")
                .with_segment("SMB")
                .with_status("New"),
            Contact::new("3", "Alan Turing").with_email("alan@bletchley.uk"),
        ]
    }

    fn ids(contacts: &[&Contact]) -> Vec<String> {
        contacts.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn default_filters_are_identity() {
        let contacts = sample();
        let out = apply_filters(&contacts, &FilterState::default());
        assert_eq!(ids(&out), vec!["1", "2", "3"]);
    }

    #[test]
    fn source_filter_exact_match() {
        let contacts = vec![
            Contact::new("1", "A").with_source("Website"),
            Contact::new("2", "B").with_source("LinkedIn"),
        ];
        let filters = FilterState {
            source: FilterValue::from("Website"),
            ..Default::default()
        };
        let out = apply_filters(&contacts, &filters);
        assert_eq!(out, vec![&contacts[0]]);
    }

    #[test]
    fn missing_tag_never_matches_a_value() {
        let contacts = sample();
        let filters = FilterState {
            segment: FilterValue::from("SMB"),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&contacts, &filters)), vec!["2"]);
    }

    #[test]
    fn filters_combine_with_and() {
        let contacts = sample();
        let filters = FilterState {
            source: FilterValue::from("Website"),
            status: FilterValue::from("New"),
            ..Default::default()
        };
        assert!(apply_filters(&contacts, &filters).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_name_company_email() {
        let contacts = sample();
        let by = |term: &str| {
            let f = FilterState {
                search_term: term.to_string(),
                ..Default::default()
            };
            ids(&apply_filters(&contacts, &f))
        };
        assert_eq!(by("LOVELACE"), vec!["1"]);
        assert_eq!(by("navy"), vec!["2"]);
        assert_eq!(by("bletchley"), vec!["3"]);
        assert_eq!(by("a"), vec!["1", "2", "3"]);
        assert!(by("Website").is_empty());
    }

    #[test]
    fn search_treats_regex_metacharacters_literally() {
        let contacts = vec![
            Contact::new("1", "a.b (x)"),
            Contact::new("2", "axb x"),
        ];
        let f = FilterState {
            search_term: "a.b (".into(),
            ..Default::default()
        };
        assert_eq!(ids(&apply_filters(&contacts, &f)), vec!["1"]);
    }

    #[test]
    fn empty_search_is_ignored() {
        let contacts = sample();
        let f = FilterState {
            search_term: String::new(),
            ..Default::default()
        };
        assert_eq!(apply_filters(&contacts, &f).len(), 3);
    }

    #[test]
    fn whitespace_in_search_term_is_significant() {
        let contacts = vec![
            Contact::new("1", "Ada Lovelace"),
            Contact::new("2", "Adalovelace"),
        ];
        let by = |term: &str| {
            let f = FilterState {
                search_term: term.to_string(),
                ..Default::default()
            };
            ids(&apply_filters(&contacts, &f))
        };
        assert_eq!(by(" lovelace"), vec!["1"]);
        assert_eq!(by(" "), vec!["1"]);
        assert_eq!(by("lovelace "), Vec::<String>::new());
    }

    #[test]
    fn matches_agrees_with_apply_filters() {
        let contacts = sample();
        let f = FilterState {
            search_term: "engines".into(),
            source: FilterValue::from("Website"),
            ..Default::default()
        };
        let expected: Vec<bool> = contacts.iter().map(|c| matches(c, &f)).collect();
        assert_eq!(expected, vec![true, false, false]);
    }

    #[test]
    fn active_count_ignores_search() {
        let f = FilterState {
            search_term: "x".into(),
            segment: FilterValue::from("Enterprise"),
            ..Default::default()
        };
        assert_eq!(active_filter_count(&f), 1);
        assert!(has_active_filters(&f));
        assert_eq!(active_filter_count(&FilterState::default()), 0);
    }

    #[test]
    fn clear_keeps_search_term() {
        let f = FilterState {
            search_term: "ada".into(),
            source: FilterValue::from("Website"),
            segment: FilterValue::from("SMB"),
            status: FilterValue::from("Hot"),
        };
        let cleared = clear_filters(&f);
        assert_eq!(cleared.search_term, "ada");
        assert_eq!(active_filter_count(&cleared), 0);
    }
}
