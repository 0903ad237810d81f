use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::io::store::{Record, RecordStore, StoreError, to_record};
use crate::model::prefs::NotificationPrefs;
use crate::model::profile::{DEFAULT_TIMEZONE, ProfileData, UserIdentity};

pub const NOTIFICATION_TABLE: &str = "notification_preferences";
pub const PROFILE_TABLE: &str = "profiles";

/// Stored column name for the profile email
const PROFILE_EMAIL_COLUMN: &str = "Email ID";

fn now_stamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// A non-empty string column, if present
fn text_column(record: Option<&Record>, key: &str) -> Option<String> {
    record
        .and_then(|r| r.get(key))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Notification preferences
// ---------------------------------------------------------------------------

/// Notification preferences panel: loaded once, edited locally, saved with
/// an upsert. A failed save leaves the local edits in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSettings {
    prefs: NotificationPrefs,
    dirty: bool,
}

impl NotificationSettings {
    /// Fetch the user's stored preferences. No stored row means defaults.
    pub fn load(store: &dyn RecordStore, user: &UserIdentity) -> Result<Self, StoreError> {
        let record = store.fetch(NOTIFICATION_TABLE, &user.id)?;
        if record.is_none() {
            debug!(user = %user.id, "no stored notification preferences, using defaults");
        }
        Ok(Self::from_record(record.as_ref()))
    }

    /// Boolean columns override the defaults; anything else in the row
    /// (`user_id`, `updated_at`) is ignored.
    pub fn from_record(record: Option<&Record>) -> Self {
        let mut prefs = NotificationPrefs::default();
        if let Some(record) = record {
            for (key, value) in record {
                if let Some(b) = value.as_bool() {
                    prefs.set(key, b);
                }
            }
        }
        NotificationSettings {
            prefs,
            dirty: false,
        }
    }

    pub fn prefs(&self) -> &NotificationPrefs {
        &self.prefs
    }

    pub fn get(&self, key: &str) -> bool {
        self.prefs.get(key)
    }

    /// Flip a preference, returning its new value
    pub fn toggle(&mut self, key: &str) -> bool {
        self.dirty = true;
        self.prefs.toggle(key)
    }

    pub fn set(&mut self, key: &str, value: bool) {
        self.dirty = true;
        self.prefs.set(key, value);
    }

    /// Whether there are local edits not yet saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn build_record(&self, user: &UserIdentity) -> Result<Record, StoreError> {
        let mut record = to_record(&self.prefs)?;
        record.insert("user_id".into(), Value::String(user.id.clone()));
        record.insert("updated_at".into(), Value::String(now_stamp()));
        Ok(record)
    }

    /// Upsert the preferences for `user`. On error nothing local changes.
    pub fn save(&mut self, store: &dyn RecordStore, user: &UserIdentity) -> Result<(), StoreError> {
        let record = self.build_record(user)?;
        store
            .upsert(NOTIFICATION_TABLE, &user.id, record)
            .inspect_err(|e| error!(user = %user.id, error = %e, "saving notification preferences failed"))?;
        self.dirty = false;
        info!(user = %user.id, "notification preferences saved");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// Profile panel, with the same load/edit/save contract as notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSettings {
    profile: ProfileData,
    dirty: bool,
}

impl ProfileSettings {
    pub fn load(store: &dyn RecordStore, user: &UserIdentity) -> Result<Self, StoreError> {
        let record = store.fetch(PROFILE_TABLE, &user.id)?;
        Ok(Self::from_record(record.as_ref(), user))
    }

    /// Build the form state from a stored row. Empty or missing columns fall
    /// back to the session identity, then to defaults.
    pub fn from_record(record: Option<&Record>, user: &UserIdentity) -> Self {
        let non_empty = |s: &Option<String>| s.clone().filter(|s| !s.is_empty());
        let profile = ProfileData {
            full_name: text_column(record, "full_name")
                .or_else(|| non_empty(&user.full_name))
                .unwrap_or_default(),
            email: text_column(record, PROFILE_EMAIL_COLUMN)
                .or_else(|| non_empty(&user.email))
                .unwrap_or_default(),
            phone: text_column(record, "phone").unwrap_or_default(),
            timezone: text_column(record, "timezone")
                .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
            bio: text_column(record, "bio").unwrap_or_default(),
            avatar_url: text_column(record, "avatar_url").unwrap_or_default(),
        };
        ProfileSettings {
            profile,
            dirty: false,
        }
    }

    pub fn profile(&self) -> &ProfileData {
        &self.profile
    }

    /// Apply a local edit to the form
    pub fn edit(&mut self, f: impl FnOnce(&mut ProfileData)) {
        f(&mut self.profile);
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn initials(&self) -> String {
        self.profile.initials()
    }

    fn build_record(&self, user: &UserIdentity) -> Record {
        let p = &self.profile;
        let mut record = Record::new();
        let mut put = |k: &str, v: &str| {
            record.insert(k.to_string(), Value::String(v.to_string()));
        };
        put("id", &user.id);
        put("full_name", &p.full_name);
        put(PROFILE_EMAIL_COLUMN, &p.email);
        put("phone", &p.phone);
        put("timezone", &p.timezone);
        put("bio", &p.bio);
        put("avatar_url", &p.avatar_url);
        put("updated_at", &now_stamp());
        record
    }

    pub fn save(&mut self, store: &dyn RecordStore, user: &UserIdentity) -> Result<(), StoreError> {
        store
            .upsert(PROFILE_TABLE, &user.id, self.build_record(user))
            .inspect_err(|e| error!(user = %user.id, error = %e, "saving profile failed"))?;
        self.dirty = false;
        info!(user = %user.id, "profile saved");
        Ok(())
    }
}
