//! Module identity - the closed set of canvas modules
//!
//! Configuration arrives as strings. Anything that does not name a known
//! module is carried as [`ModuleRef::Unknown`] and dropped at resolution time.

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a canvas module.
///
/// Ordering is lexicographic on [`ModuleId::as_str`], which is what the
/// resolver uses for tie-breaks and slot ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleId {
    BreakReminder,
    CloseoutProtected,
    CustomerSignature,
    EarningsGoalRing,
    FocusArcProtected,
    JobBriefProtected,
    MoneyTicker,
    PartsLookup,
    PhotoCapture,
    QuickNotes,
    ReviewPrompt,
    SafetyChecklist,
    SessionTimer,
    SmartUpsell,
    StepCoach,
    StreakBadge,
    TipsCarousel,
}

impl ModuleId {
    pub const ALL: [ModuleId; 17] = [
        ModuleId::BreakReminder,
        ModuleId::CloseoutProtected,
        ModuleId::CustomerSignature,
        ModuleId::EarningsGoalRing,
        ModuleId::FocusArcProtected,
        ModuleId::JobBriefProtected,
        ModuleId::MoneyTicker,
        ModuleId::PartsLookup,
        ModuleId::PhotoCapture,
        ModuleId::QuickNotes,
        ModuleId::ReviewPrompt,
        ModuleId::SafetyChecklist,
        ModuleId::SessionTimer,
        ModuleId::SmartUpsell,
        ModuleId::StepCoach,
        ModuleId::StreakBadge,
        ModuleId::TipsCarousel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::BreakReminder => "break_reminder",
            ModuleId::CloseoutProtected => "closeout_protected",
            ModuleId::CustomerSignature => "customer_signature",
            ModuleId::EarningsGoalRing => "earnings_goal_ring",
            ModuleId::FocusArcProtected => "focus_arc_protected",
            ModuleId::JobBriefProtected => "job_brief_protected",
            ModuleId::MoneyTicker => "money_ticker",
            ModuleId::PartsLookup => "parts_lookup",
            ModuleId::PhotoCapture => "photo_capture",
            ModuleId::QuickNotes => "quick_notes",
            ModuleId::ReviewPrompt => "review_prompt",
            ModuleId::SafetyChecklist => "safety_checklist",
            ModuleId::SessionTimer => "session_timer",
            ModuleId::SmartUpsell => "smart_upsell",
            ModuleId::StepCoach => "step_coach",
            ModuleId::StreakBadge => "streak_badge",
            ModuleId::TipsCarousel => "tips_carousel",
        }
    }

    pub fn parse(name: &str) -> Option<ModuleId> {
        Self::ALL.into_iter().find(|id| id.as_str() == name)
    }
}

impl Ord for ModuleId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for ModuleId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A module reference as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModuleRef {
    Known(ModuleId),
    Unknown(String),
}

impl ModuleRef {
    pub fn parse(name: &str) -> ModuleRef {
        let name = name.trim();
        match ModuleId::parse(name) {
            Some(id) => ModuleRef::Known(id),
            None => ModuleRef::Unknown(name.to_string()),
        }
    }

    pub fn known(&self) -> Option<ModuleId> {
        match self {
            ModuleRef::Known(id) => Some(*id),
            ModuleRef::Unknown(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ModuleRef::Known(id) => id.as_str(),
            ModuleRef::Unknown(name) => name,
        }
    }
}

impl From<ModuleId> for ModuleRef {
    fn from(id: ModuleId) -> Self {
        ModuleRef::Known(id)
    }
}

impl std::fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ModuleRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ModuleRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(ModuleRef::parse(&name))
    }
}
