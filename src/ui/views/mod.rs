pub mod catalog;
pub mod check;
pub mod layout;
pub mod templates;
