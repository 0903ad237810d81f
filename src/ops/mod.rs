pub mod controller;
pub mod filter_ops;
pub mod select_ops;
pub mod settings;
pub mod sort_ops;

pub use controller::TableStateController;
