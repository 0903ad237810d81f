use serde::{Deserialize, Serialize};

use crate::model::profile::UserIdentity;

/// Configuration from roster.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub user: UserIdentity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the `<table>.json` files, relative to the config file
    #[serde(default = "default_store_dir")]
    pub dir: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            dir: default_store_dir(),
        }
    }
}

fn default_store_dir() -> String {
    "data".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Rows fetched per page. Independent of the select-all limit.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    25
}
