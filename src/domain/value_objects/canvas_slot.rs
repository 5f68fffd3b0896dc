//! Canvas slot value object - a named screen region

use serde::{Deserialize, Serialize};

/// Screen region that hosts an ordered list of modules.
///
/// Declaration order is the render order used when walking a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasSlot {
    FocusAnchor,
    TopStrip,
    SideRail,
    BottomActions,
    CornerBadge,
}

impl CanvasSlot {
    pub const ALL: [CanvasSlot; 5] = [
        CanvasSlot::FocusAnchor,
        CanvasSlot::TopStrip,
        CanvasSlot::SideRail,
        CanvasSlot::BottomActions,
        CanvasSlot::CornerBadge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanvasSlot::FocusAnchor => "focus_anchor",
            CanvasSlot::TopStrip => "top_strip",
            CanvasSlot::SideRail => "side_rail",
            CanvasSlot::BottomActions => "bottom_actions",
            CanvasSlot::CornerBadge => "corner_badge",
        }
    }
}

impl std::fmt::Display for CanvasSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
