//! Canvas state value object - the operator's current work phase
//!
//! The lifecycle state machine that moves a session between states lives
//! outside this crate; we only consume the current state.

use serde::{Deserialize, Serialize};

use super::CanvasSlot;

/// Phase of an operator work session
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum CanvasState {
    /// Reviewing the job before starting
    Briefing,
    /// Actively on the job
    Working,
    /// Job on hold
    Paused,
    /// Closing out the job
    WrapUp,
}

impl CanvasState {
    pub const ALL: [CanvasState; 4] = [
        CanvasState::Briefing,
        CanvasState::Working,
        CanvasState::Paused,
        CanvasState::WrapUp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CanvasState::Briefing => "briefing",
            CanvasState::Working => "working",
            CanvasState::Paused => "paused",
            CanvasState::WrapUp => "wrap_up",
        }
    }

    pub fn parse(name: &str) -> Option<CanvasState> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    /// Slots a module may render into while in this state
    pub fn legal_slots(&self) -> &'static [CanvasSlot] {
        match self {
            CanvasState::Briefing => &[
                CanvasSlot::FocusAnchor,
                CanvasSlot::TopStrip,
                CanvasSlot::SideRail,
                CanvasSlot::BottomActions,
            ],
            CanvasState::Working | CanvasState::WrapUp => &CanvasSlot::ALL,
            CanvasState::Paused => &[
                CanvasSlot::FocusAnchor,
                CanvasSlot::TopStrip,
                CanvasSlot::BottomActions,
            ],
        }
    }

    pub fn allows_slot(&self, slot: CanvasSlot) -> bool {
        self.legal_slots().contains(&slot)
    }

    /// The slot that must never be empty in this state
    pub fn protected_slot(&self) -> CanvasSlot {
        match self {
            CanvasState::Briefing
            | CanvasState::Working
            | CanvasState::Paused
            | CanvasState::WrapUp => CanvasSlot::FocusAnchor,
        }
    }
}

impl std::fmt::Display for CanvasState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
