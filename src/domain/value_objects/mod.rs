//! Domain Value Objects
//!
//! Immutable value types for the closed vocabularies the resolver works over:
//! states, slots, module identifiers, template identifiers, the
//! override layers fed into the resolver and the resolved layout itself.

mod canvas_slot;
mod canvas_state;
mod config_warning;
mod layout;
mod module_id;
mod overrides;
mod template_id;

pub use canvas_slot::CanvasSlot;
pub use canvas_state::CanvasState;
pub use config_warning::ConfigWarning;
pub use layout::{Layout, LayoutSource};
pub use module_id::{ModuleId, ModuleRef};
pub use overrides::{CanvasLocks, OrgCanvasLocks, PlatformCanvasLocks, TechCanvasConfig};
pub use template_id::TemplateId;
