//! Domain Layer
//!
//! This is the core of Slotwise - pure layout resolution without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Read-only tables (Catalog, ModuleMeta, Template)
//! - `value_objects/` - Closed vocabularies and plain data (CanvasState, ModuleId, Layout)
//! - `services/` - Config merger, layout resolver, catalog audit
//! - `policies/` - Fixed rules (conflict tie-break, fallback layouts)
//! - `ports/` - The renderer trait implemented by presentation code
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Nothing in this layer reads files or talks to the network
//! 2. **Pure Functions** - Same inputs, same layout, byte for byte
//! 3. **Never fails** - Bad references are dropped; a broken catalog degrades
//!    to the fallback layout

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
