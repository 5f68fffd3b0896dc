//! Text and JSON presentation for the `slotwise` binary

pub mod header;
pub mod json;
pub mod views;
