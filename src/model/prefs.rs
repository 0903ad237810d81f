use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Built-in preference keys and their defaults. Channels first, then events.
pub const DEFAULT_PREFS: &[(&str, bool)] = &[
    ("email_notifications", true),
    ("in_app_notifications", true),
    ("push_notifications", false),
    ("lead_assigned", true),
    ("deal_updates", true),
    ("task_reminders", true),
    ("meeting_reminders", true),
    ("weekly_digest", false),
];

/// Notification preferences as a flat `key -> enabled` record.
///
/// Keys outside [`DEFAULT_PREFS`] are allowed so new toggles can be added
/// without touching this type. Reading an unknown key yields `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationPrefs {
    values: IndexMap<String, bool>,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        NotificationPrefs {
            values: DEFAULT_PREFS
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }
}

impl NotificationPrefs {
    pub fn get(&self, key: &str) -> bool {
        self.values.get(key).copied().unwrap_or(false)
    }

    pub fn set(&mut self, key: &str, value: bool) {
        match self.values.get_mut(key) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(key.to_string(), value);
            }
        }
    }

    /// Flip one preference, returning its new value
    pub fn toggle(&mut self, key: &str) -> bool {
        let next = !self.get(key);
        self.set(key, next);
        next
    }

    pub fn is_known(key: &str) -> bool {
        DEFAULT_PREFS.iter().any(|(k, _)| *k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_table() {
        let prefs = NotificationPrefs::default();
        assert_eq!(prefs.len(), 8);
        assert!(prefs.get("email_notifications"));
        assert!(!prefs.get("push_notifications"));
        assert!(!prefs.get("weekly_digest"));
        let keys: Vec<&str> = prefs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys[0], "email_notifications");
        assert_eq!(keys[7], "weekly_digest");
    }

    #[test]
    fn toggle_twice_restores() {
        let mut prefs = NotificationPrefs::default();
        let original = prefs.clone();
        assert!(!prefs.toggle("deal_updates"));
        assert!(prefs.toggle("deal_updates"));
        assert_eq!(prefs, original);
    }

    #[test]
    fn unknown_keys_read_false_and_insert_on_write() {
        let mut prefs = NotificationPrefs::default();
        assert!(!prefs.get("sms_alerts"));
        assert!(!NotificationPrefs::is_known("sms_alerts"));
        assert!(prefs.toggle("sms_alerts"));
        assert_eq!(prefs.len(), 9);
    }
}
