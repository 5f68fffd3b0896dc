//! Resolved layout - the per-slot ordered module lists handed to a renderer

use std::collections::BTreeMap;

use serde::Serialize;

use super::{CanvasSlot, ModuleId};

/// Where a layout came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutSource {
    /// Resolved from the catalog and effective configuration
    Catalog,
    /// Hard-coded safety net used when the catalog lacks a protected module
    Fallback,
}

/// Every slot mapped to an ordered list of modules.
///
/// All slots are always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    source: LayoutSource,
    slots: BTreeMap<CanvasSlot, Vec<ModuleId>>,
}

impl Layout {
    pub fn empty(source: LayoutSource) -> Self {
        Self {
            source,
            slots: CanvasSlot::ALL
                .into_iter()
                .map(|slot| (slot, Vec::new()))
                .collect(),
        }
    }

    pub fn source(&self) -> LayoutSource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == LayoutSource::Fallback
    }

    pub fn slot(&self, slot: CanvasSlot) -> &[ModuleId] {
        self.slots.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Slots in render order, including empty ones
    pub fn iter(&self) -> impl Iterator<Item = (CanvasSlot, &[ModuleId])> {
        self.slots.iter().map(|(slot, ids)| (*slot, ids.as_slice()))
    }

    pub fn modules(&self) -> impl Iterator<Item = ModuleId> + '_ {
        self.slots.values().flatten().copied()
    }

    pub fn contains(&self, id: ModuleId) -> bool {
        self.modules().any(|m| m == id)
    }

    /// Which slot `id` landed in, if any
    pub fn slot_of(&self, id: ModuleId) -> Option<CanvasSlot> {
        self.slots
            .iter()
            .find(|(_, ids)| ids.contains(&id))
            .map(|(slot, _)| *slot)
    }

    pub(crate) fn push(&mut self, slot: CanvasSlot, id: ModuleId) {
        self.slots.entry(slot).or_default().push(id);
    }

    pub(crate) fn sort_slots_by_key<K: Ord>(&mut self, mut key: impl FnMut(&ModuleId) -> K) {
        for ids in self.slots.values_mut() {
            ids.sort_by_key(&mut key);
        }
    }
}
