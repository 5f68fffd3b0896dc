//! Fallback layout policy
//!
//! Minimal per-state layouts used when the catalog cannot supply a protected
//! module. These are hard-coded so that a corrupted catalog still yields a
//! usable canvas.

use crate::domain::value_objects::{CanvasSlot, CanvasState, Layout, LayoutSource, ModuleId};

fn fallback_entries(state: CanvasState) -> &'static [(CanvasSlot, &'static [ModuleId])] {
    match state {
        CanvasState::Briefing => &[
            (CanvasSlot::FocusAnchor, &[ModuleId::JobBriefProtected]),
            (CanvasSlot::TopStrip, &[ModuleId::SessionTimer]),
        ],
        CanvasState::Working | CanvasState::Paused => {
            &[(CanvasSlot::FocusAnchor, &[ModuleId::FocusArcProtected])]
        }
        CanvasState::WrapUp => &[
            (CanvasSlot::FocusAnchor, &[ModuleId::CloseoutProtected]),
            (CanvasSlot::BottomActions, &[ModuleId::CustomerSignature]),
        ],
    }
}

/// The safety-net layout for `state`
pub fn fallback_layout(state: CanvasState) -> Layout {
    let mut layout = Layout::empty(LayoutSource::Fallback);
    for (slot, ids) in fallback_entries(state) {
        for id in *ids {
            layout.push(*slot, *id);
        }
    }
    layout
}
