//! Override layers
//!
//! Plain configuration owned by whoever persists it. The resolver only reads
//! these; it never writes them back.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{ModuleRef, TemplateId};

/// Per-operator canvas choice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechCanvasConfig {
    #[serde(rename = "template", default)]
    pub template_id: TemplateId,

    #[serde(rename = "enabled", default)]
    pub enabled_overrides: BTreeSet<ModuleRef>,

    #[serde(rename = "disabled", default)]
    pub disabled_overrides: BTreeSet<ModuleRef>,
}

impl TechCanvasConfig {
    pub fn new(template_id: TemplateId) -> Self {
        Self {
            template_id,
            ..Self::default()
        }
    }

    pub fn with_enabled(mut self, modules: impl IntoIterator<Item = impl Into<ModuleRef>>) -> Self {
        self.enabled_overrides
            .extend(modules.into_iter().map(Into::into));
        self
    }

    pub fn with_disabled(
        mut self,
        modules: impl IntoIterator<Item = impl Into<ModuleRef>>,
    ) -> Self {
        self.disabled_overrides
            .extend(modules.into_iter().map(Into::into));
        self
    }
}

/// Forced enable/disable lists set above the operator.
///
/// Organization and platform locks share this shape; they differ only in
/// where they sit in the precedence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasLocks {
    #[serde(default)]
    pub force_enabled: BTreeSet<ModuleRef>,

    #[serde(default)]
    pub force_disabled: BTreeSet<ModuleRef>,
}

impl CanvasLocks {
    pub fn with_force_enabled(
        mut self,
        modules: impl IntoIterator<Item = impl Into<ModuleRef>>,
    ) -> Self {
        self.force_enabled.extend(modules.into_iter().map(Into::into));
        self
    }

    pub fn with_force_disabled(
        mut self,
        modules: impl IntoIterator<Item = impl Into<ModuleRef>>,
    ) -> Self {
        self.force_disabled
            .extend(modules.into_iter().map(Into::into));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.force_enabled.is_empty() && self.force_disabled.is_empty()
    }
}

pub type OrgCanvasLocks = CanvasLocks;
pub type PlatformCanvasLocks = CanvasLocks;
