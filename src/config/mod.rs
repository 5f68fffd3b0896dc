//! Configuration module for Slotwise
//!
//! Override layers are read from `canvas.toml`, looked up in order:
//! 1. `--config <path>` (must exist)
//! 2. `./canvas.toml`
//! 3. `<user config dir>/slotwise/canvas.toml`
//! 4. Built-in defaults (`balanced` template, no locks)
//!
//! `SLOTWISE_TEMPLATE`, `SLOTWISE_ENABLE` and `SLOTWISE_DISABLE` then adjust the
//! operator layer. Organization and platform locks only ever come from the file.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{discover, parse_module_list, parse_with_warnings, user_config_path, CONFIG_FILE_NAME};
pub use types::{CanvasConfig, LoadedConfig};
