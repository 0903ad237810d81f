pub mod config_io;
pub mod contacts_io;
pub mod json_store;
pub mod store;
