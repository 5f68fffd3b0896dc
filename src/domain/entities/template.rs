//! Canvas templates
//!
//! A template is an editorial "personality": the modules an operator starts
//! with, plus modules the template refuses outright.

use serde::Serialize;

use crate::domain::value_objects::{ModuleId, TemplateId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: TemplateId,
    pub label: &'static str,
    pub description: &'static str,
    pub default_enabled: &'static [ModuleId],
    pub default_blocked: &'static [ModuleId],
}

const BALANCED: Template = Template {
    id: TemplateId::Balanced,
    label: "Balanced",
    description: "Everyday defaults: timing, safety, notes and a gentle upsell",
    default_enabled: &[
        ModuleId::BreakReminder,
        ModuleId::CustomerSignature,
        ModuleId::PartsLookup,
        ModuleId::PhotoCapture,
        ModuleId::QuickNotes,
        ModuleId::SafetyChecklist,
        ModuleId::SessionTimer,
        ModuleId::SmartUpsell,
    ],
    default_blocked: &[],
};

const ZEN_MASTER: Template = Template {
    id: TemplateId::ZenMaster,
    label: "Zen Master",
    description: "Minimal focus mode with every sales and gamification module off",
    default_enabled: &[
        ModuleId::CustomerSignature,
        ModuleId::PhotoCapture,
        ModuleId::QuickNotes,
        ModuleId::SafetyChecklist,
        ModuleId::SessionTimer,
    ],
    default_blocked: &[
        ModuleId::EarningsGoalRing,
        ModuleId::MoneyTicker,
        ModuleId::ReviewPrompt,
        ModuleId::SmartUpsell,
        ModuleId::StreakBadge,
    ],
};

const GROWTH_BEAST: Template = Template {
    id: TemplateId::GrowthBeast,
    label: "Growth Beast",
    description: "Revenue-maximizing: upsells, earnings and review prompts everywhere",
    default_enabled: &[
        ModuleId::CustomerSignature,
        ModuleId::EarningsGoalRing,
        ModuleId::MoneyTicker,
        ModuleId::PartsLookup,
        ModuleId::PhotoCapture,
        ModuleId::QuickNotes,
        ModuleId::ReviewPrompt,
        ModuleId::SessionTimer,
        ModuleId::SmartUpsell,
        ModuleId::StreakBadge,
    ],
    default_blocked: &[],
};

const GUIDED_TRAINEE: Template = Template {
    id: TemplateId::GuidedTrainee,
    label: "Guided Trainee",
    description: "Step-by-step coaching for operators still learning the job",
    default_enabled: &[
        ModuleId::BreakReminder,
        ModuleId::CustomerSignature,
        ModuleId::PartsLookup,
        ModuleId::PhotoCapture,
        ModuleId::QuickNotes,
        ModuleId::SafetyChecklist,
        ModuleId::SessionTimer,
        ModuleId::StepCoach,
        ModuleId::TipsCarousel,
    ],
    default_blocked: &[ModuleId::MoneyTicker, ModuleId::SmartUpsell],
};

impl Template {
    pub fn get(id: TemplateId) -> &'static Template {
        match id {
            TemplateId::Balanced => &BALANCED,
            TemplateId::ZenMaster => &ZEN_MASTER,
            TemplateId::GrowthBeast => &GROWTH_BEAST,
            TemplateId::GuidedTrainee => &GUIDED_TRAINEE,
        }
    }

    pub fn all() -> impl Iterator<Item = &'static Template> {
        TemplateId::ALL.into_iter().map(Template::get)
    }
}
