pub mod base;
pub mod menu;
pub mod page;
