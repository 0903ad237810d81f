use serde_json::Value;
use tracing::{debug, warn};

use crate::io::store::{RecordStore, StoreError, to_record};
use crate::model::contact::Contact;

pub const CONTACTS_TABLE: &str = "contacts";

/// Load one page of contacts (`page` is zero-based).
///
/// Rows that do not decode as a contact are skipped with a warning so one
/// bad row does not hide the rest of the page.
pub fn load_contacts(
    store: &dyn RecordStore,
    page: usize,
    page_size: usize,
) -> Result<Vec<Contact>, StoreError> {
    let offset = page.saturating_mul(page_size);
    let rows = store.fetch_page(CONTACTS_TABLE, offset, page_size)?;
    let total = rows.len();
    let contacts: Vec<Contact> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(i, row)| match serde_json::from_value(Value::Object(row)) {
            Ok(c) => Some(c),
            Err(e) => {
                warn!(row = offset + i, error = %e, "skipping malformed contact row");
                None
            }
        })
        .collect();
    debug!(page, page_size, loaded = contacts.len(), total, "loaded contact page");
    Ok(contacts)
}

/// Upsert contacts keyed by their ID. Returns how many were written.
pub fn import_contacts(store: &dyn RecordStore, contacts: &[Contact]) -> Result<usize, StoreError> {
    for contact in contacts {
        store.upsert(CONTACTS_TABLE, &contact.id, to_record(contact)?)?;
    }
    Ok(contacts.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::store::MemoryStore;
    use serde_json::json;

    #[test]
    fn import_then_page_through() {
        let store = MemoryStore::new();
        let contacts: Vec<Contact> = (1..=5)
            .map(|i| Contact::new(i.to_string(), format!("Person {}", i)))
            .collect();
        assert_eq!(import_contacts(&store, &contacts).unwrap(), 5);

        let first = load_contacts(&store, 0, 2).unwrap();
        assert_eq!(first, contacts[..2].to_vec());
        let last = load_contacts(&store, 2, 2).unwrap();
        assert_eq!(last, contacts[4..].to_vec());
        assert!(load_contacts(&store, 3, 2).unwrap().is_empty());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let store = MemoryStore::new();
        let bad = match json!({"id": "x"}) {
            Value::Object(m) => m,
            _ => unreachable!(),
        };
        store.upsert(CONTACTS_TABLE, "x", bad).unwrap();
        import_contacts(&store, &[Contact::new("y", "Yan")]).unwrap();
        let page = load_contacts(&store, 0, 10).unwrap();
        assert_eq!(page, vec![Contact::new("y", "Yan")]);
    }

    #[test]
    fn reimport_updates_in_place() {
        let store = MemoryStore::new();
        import_contacts(&store, &[Contact::new("1", "Old")]).unwrap();
        import_contacts(&store, &[Contact::new("1", "New").with_segment("SMB")]).unwrap();
        assert_eq!(store.len(CONTACTS_TABLE), 1);
        let page = load_contacts(&store, 0, 10).unwrap();
        assert_eq!(page[0].contact_name, "New");
        assert_eq!(page[0].segment.as_deref(), Some("SMB"));
    }
}
