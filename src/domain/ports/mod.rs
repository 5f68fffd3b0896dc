//! Domain Ports (Interfaces)
//!
//! Traits the presentation layer implements. The domain only depends on
//! these, never on a concrete rendering technology.

pub mod module_renderer;

pub use module_renderer::{render_layout, ModuleRenderer, RenderedSlot};
