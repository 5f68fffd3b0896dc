//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::services::{resolve_effective_config, EffectiveConfig};
use crate::domain::value_objects::{
    ConfigWarning, ModuleRef, OrgCanvasLocks, PlatformCanvasLocks, TechCanvasConfig,
};
use crate::error::SlotwiseResult;

use super::loader;

/// The three override layers as read from `canvas.toml`.
///
/// ```toml
/// [tech]
/// template = "zen_master"
/// enabled = ["smart_upsell"]
///
/// [org]
/// force_disabled = ["money_ticker"]
///
/// [platform]
/// force_enabled = []
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CanvasConfig {
    pub tech: TechCanvasConfig,
    pub org: Option<OrgCanvasLocks>,
    pub platform: Option<PlatformCanvasLocks>,
}

/// A loaded config plus where it came from
#[derive(Debug, Clone, Default)]
pub struct LoadedConfig {
    pub config: CanvasConfig,
    pub warnings: Vec<ConfigWarning>,
    /// `None` when built-in defaults were used
    pub source: Option<PathBuf>,
}

impl CanvasConfig {
    /// Load a config file and collect non-fatal warnings (unknown keys, unknown modules)
    pub fn load_with_warnings(path: &Path) -> SlotwiseResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply `SLOTWISE_*` environment overrides on top of the operator layer
    pub fn with_env_overrides(self) -> SlotwiseResult<Self> {
        loader::with_env_overrides(self)
    }

    pub fn effective(&self) -> EffectiveConfig {
        resolve_effective_config(&self.tech, self.org.as_ref(), self.platform.as_ref())
    }

    /// Every module reference in the file that does not name a known module
    pub fn unknown_modules(&self) -> Vec<&ModuleRef> {
        let locks = self.org.iter().chain(self.platform.iter());
        self.tech
            .enabled_overrides
            .iter()
            .chain(&self.tech.disabled_overrides)
            .chain(
                locks.flat_map(|l| l.force_enabled.iter().chain(&l.force_disabled)),
            )
            .filter(|m| m.known().is_none())
            .collect()
    }
}
