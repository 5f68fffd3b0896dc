use std::path::PathBuf;

use clap::{Parser, Subcommand};
use slotwise::{CanvasState, TemplateId};

/// Slotwise - resolve which canvas modules show where
#[derive(Parser, Debug)]
#[command(name = "slotwise")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the layout for a canvas state
    Resolve {
        /// Current work state
        #[arg(short, long)]
        state: CanvasState,

        /// Path to canvas.toml (defaults to ./canvas.toml, then the user config dir)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the operator's template
        #[arg(short, long)]
        template: Option<TemplateId>,

        /// Extra modules to enable at operator level
        #[arg(long, value_delimiter = ',')]
        enable: Vec<String>,

        /// Modules to disable at operator level
        #[arg(long, value_delimiter = ',')]
        disable: Vec<String>,

        /// Also list dropped modules and why
        #[arg(long)]
        explain: bool,
    },

    /// List every module in the catalog
    Catalog,

    /// List the built-in templates
    Templates,

    /// Audit the catalog (exits non-zero on errors)
    Check,
}
