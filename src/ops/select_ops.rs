use crate::model::contact::Contact;
use crate::model::selection::{SELECT_ALL_LIMIT, SelectionState};

/// Header checkbox. Checking selects the first [`SELECT_ALL_LIMIT`] rows of
/// the page in page order; unchecking clears everything.
pub fn toggle_select_all(checked: bool, page_contacts: &[&Contact]) -> SelectionState {
    if !checked {
        return SelectionState::new();
    }
    page_contacts
        .iter()
        .take(SELECT_ALL_LIMIT)
        .map(|c| c.id.clone())
        .collect()
}

/// Row checkbox: add `id` if absent, remove it if present.
pub fn toggle_one(id: &str, selection: &SelectionState) -> SelectionState {
    let mut next = selection.clone();
    if !next.remove(id) {
        next.insert(id.to_string());
    }
    next
}

/// Drop selected IDs that are not on the current page
pub fn retain_on_page(selection: &SelectionState, page_contacts: &[Contact]) -> SelectionState {
    let mut next = selection.clone();
    next.retain(|id| page_contacts.iter().any(|c| c.id == id));
    next
}

/// Header checkbox state: true when every selectable row is selected
pub fn all_selected(selection: &SelectionState, page_contacts: &[&Contact]) -> bool {
    let selectable: Vec<&&Contact> = page_contacts.iter().take(SELECT_ALL_LIMIT).collect();
    !selectable.is_empty() && selectable.iter().all(|c| selection.contains(&c.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize) -> Vec<Contact> {
        (0..n)
            .map(|i| Contact::new(format!("c{:03}", i), format!("Contact {}", i)))
            .collect()
    }

    #[test]
    fn select_all_caps_at_limit_in_page_order() {
        let contacts = page(80);
        let refs: Vec<&Contact> = contacts.iter().collect();
        let sel = toggle_select_all(true, &refs);
        assert_eq!(sel.len(), 50);
        let expected: Vec<String> = contacts[..50].iter().map(|c| c.id.clone()).collect();
        assert_eq!(sel.ids(), expected);
    }

    #[test]
    fn select_all_on_small_page_takes_everything() {
        let contacts = page(3);
        let refs: Vec<&Contact> = contacts.iter().collect();
        assert_eq!(toggle_select_all(true, &refs).len(), 3);
        assert!(toggle_select_all(true, &[]).is_empty());
    }

    #[test]
    fn unchecking_clears() {
        let contacts = page(5);
        let refs: Vec<&Contact> = contacts.iter().collect();
        assert!(toggle_select_all(false, &refs).is_empty());
    }

    #[test]
    fn toggle_one_twice_is_identity() {
        let start: SelectionState = ["a", "b"].into_iter().map(String::from).collect();
        for id in ["a", "z"] {
            let twice = toggle_one(id, &toggle_one(id, &start));
            assert_eq!(twice, start);
        }
        assert!(!toggle_one("a", &start).contains("a"));
        assert!(toggle_one("z", &start).contains("z"));
    }

    #[test]
    fn retain_drops_ids_not_on_page() {
        let contacts = page(2);
        let sel: SelectionState = ["c000", "gone"].into_iter().map(String::from).collect();
        assert_eq!(retain_on_page(&sel, &contacts).ids(), vec!["c000"]);
    }

    #[test]
    fn all_selected_considers_only_capped_rows() {
        let contacts = page(60);
        let refs: Vec<&Contact> = contacts.iter().collect();
        let sel = toggle_select_all(true, &refs);
        assert!(all_selected(&sel, &refs));
        assert!(!all_selected(&toggle_one("c000", &sel), &refs));
        assert!(!all_selected(&SelectionState::new(), &[]));
    }
}
