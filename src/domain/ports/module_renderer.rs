//! Module Renderer Port
//!
//! The presentation layer turns a module id into something displayable. The
//! domain never knows what that "something" is; it only walks a resolved
//! layout in order and asks.

use crate::domain::value_objects::{CanvasSlot, Layout, ModuleId};

/// Looks up the displayable unit for a module.
///
/// Returning `None` means the renderer has nothing for that id; the module is
/// skipped rather than failing the whole canvas.
pub trait ModuleRenderer {
    type Unit;

    fn render(&self, module: ModuleId) -> Option<Self::Unit>;
}

impl<T, F> ModuleRenderer for F
where
    F: Fn(ModuleId) -> Option<T>,
{
    type Unit = T;

    fn render(&self, module: ModuleId) -> Option<T> {
        self(module)
    }
}

/// One non-empty slot after rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSlot<U> {
    pub slot: CanvasSlot,
    pub units: Vec<U>,
}

/// Render every non-empty slot of `layout`, preserving slot and module order.
pub fn render_layout<R: ModuleRenderer + ?Sized>(
    layout: &Layout,
    renderer: &R,
) -> Vec<RenderedSlot<R::Unit>> {
    layout
        .iter()
        .filter(|(_, ids)| !ids.is_empty())
        .filter_map(|(slot, ids)| {
            let units: Vec<R::Unit> = ids.iter().filter_map(|id| renderer.render(*id)).collect();
            if units.is_empty() {
                None
            } else {
                Some(RenderedSlot { slot, units })
            }
        })
        .collect()
}
