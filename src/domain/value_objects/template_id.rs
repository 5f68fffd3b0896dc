//! Template identifier value object

use serde::{Deserialize, Serialize};

/// Named canvas preset
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Default,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum TemplateId {
    /// Sensible defaults for most operators
    #[default]
    Balanced,
    /// Minimal, distraction-free focus
    ZenMaster,
    /// Revenue-maximizing
    GrowthBeast,
    /// Step-by-step guidance for new operators
    GuidedTrainee,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::Balanced,
        TemplateId::ZenMaster,
        TemplateId::GrowthBeast,
        TemplateId::GuidedTrainee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Balanced => "balanced",
            TemplateId::ZenMaster => "zen_master",
            TemplateId::GrowthBeast => "growth_beast",
            TemplateId::GuidedTrainee => "guided_trainee",
        }
    }

    pub fn parse(name: &str) -> Option<TemplateId> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
