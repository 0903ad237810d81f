pub mod config;
pub mod contact;
pub mod filter;
pub mod prefs;
pub mod profile;
pub mod selection;
pub mod sort;

pub use config::*;
pub use contact::*;
pub use filter::*;
pub use prefs::*;
pub use profile::*;
pub use selection::*;
pub use sort::*;
