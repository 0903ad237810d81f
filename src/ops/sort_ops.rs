use std::cmp::Ordering;

use crate::model::contact::Contact;
use crate::model::sort::{SortDirection, SortField, SortState};

/// Compare two contacts on one column. Strings compare byte-wise (case
/// sensitive); a missing value sorts before any present one.
fn compare(field: SortField, a: &Contact, b: &Contact) -> Ordering {
    field.value_of(a).cmp(&field.value_of(b))
}

/// Order contacts by the current sort. Stable in both directions, so rows
/// with equal keys keep their incoming order. Unsorted state returns the
/// input order.
pub fn apply_sort<'a>(contacts: &[&'a Contact], sort: &SortState) -> Vec<&'a Contact> {
    let mut out = contacts.to_vec();
    let Some(field) = sort.field else {
        return out;
    };
    match sort.direction {
        SortDirection::Asc => out.sort_by(|a, b| compare(field, a, b)),
        SortDirection::Desc => out.sort_by(|a, b| compare(field, b, a)),
    }
    out
}

/// Header click on `field`: same column flips direction, a new column
/// starts ascending.
pub fn toggle_sort(sort: &SortState, field: SortField) -> SortState {
    if sort.field == Some(field) {
        SortState::by(field, sort.direction.flipped())
    } else {
        SortState::by(field, SortDirection::Asc)
    }
}
