pub mod catalog;
pub mod check;
pub mod resolve;
pub mod templates;
