pub mod error;
pub mod menu;
