//! Clap derive structures for the `parkdash` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! This module must stay self-contained (clap + clap_complete only) so
//! `build.rs` can include it for man page generation.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// parkdash -- admin dashboard for parking zones and spaces
#[derive(Debug, Parser)]
#[command(
    name = "parkdash",
    version,
    about = "Manage parking zones and spaces from the command line",
    long_about = "An administration CLI for parking backends.\n\n\
        Talks to the zone-management REST API, mirrors zones and spaces\n\
        locally, and derives occupancy statistics from the snapshots.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend API base URL (overrides the config file)
    #[arg(long, short = 'u', env = "PARKDASH_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "PARKDASH_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, env = "PARKDASH_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one identifier per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage parking zones
    #[command(alias = "zone", alias = "z")]
    Zones(ZonesArgs),

    /// Manage parking spaces
    #[command(alias = "space", alias = "s")]
    Spaces(SpacesArgs),

    /// Occupancy overview across all zones
    #[command(alias = "dash")]
    Dashboard,

    /// Per-zone statistics table
    Analytics,

    /// Check backend connectivity
    Status,

    /// Manage CLI configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ZONES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ZonesArgs {
    #[command(subcommand)]
    pub command: ZonesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ZonesCommand {
    /// List zones
    #[command(alias = "ls")]
    List {
        /// Case-insensitive search over name and description
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Get zone details
    Get {
        /// Zone ID (UUID)
        id: String,
    },

    /// Create a new zone
    Create {
        /// Zone name
        #[arg(long, required = true)]
        name: String,

        /// Zone description
        #[arg(long)]
        description: Option<String>,

        /// Capacity (5-25)
        #[arg(long, required = true)]
        capacity: u32,

        /// Zone type
        #[arg(long, default_value = "internal", value_enum)]
        zone_type: ZoneTypeArg,

        /// Mark the zone active (default: true)
        #[arg(long, default_value = "true", action = clap::ArgAction::Set)]
        active: bool,
    },

    /// Update an existing zone
    Update {
        /// Zone ID (UUID)
        id: String,

        /// Zone name
        #[arg(long)]
        name: Option<String>,

        /// Zone description
        #[arg(long)]
        description: Option<String>,

        /// Capacity (5-25)
        #[arg(long)]
        capacity: Option<u32>,

        /// Zone type
        #[arg(long, value_enum)]
        zone_type: Option<ZoneTypeArg>,

        /// Activate/deactivate the zone
        #[arg(long, action = clap::ArgAction::Set)]
        active: Option<bool>,
    },

    /// Delete a zone
    Delete {
        /// Zone ID (UUID)
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ZoneTypeArg {
    /// Reserved VIP area
    Vip,
    /// Inside the building
    Internal,
    /// Outdoor area
    External,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SPACES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SpacesArgs {
    #[command(subcommand)]
    pub command: SpacesCommand,
}

#[derive(Debug, Subcommand)]
pub enum SpacesCommand {
    /// List spaces, optionally narrowed by zone and/or status
    #[command(alias = "ls")]
    List {
        /// Only spaces in this zone (UUID)
        #[arg(long, short = 'z')]
        zone: Option<String>,

        /// Only spaces with this status
        #[arg(long, short = 's', value_enum)]
        status: Option<SpaceStatusArg>,
    },

    /// Get space details
    Get {
        /// Space ID (UUID)
        id: String,
    },

    /// Create a new space
    Create {
        /// Owning zone ID (UUID)
        #[arg(long, short = 'z', required = true)]
        zone: String,

        /// Space code, e.g. A-012 (auto-generated from the zone when omitted)
        #[arg(long)]
        code: Option<String>,

        /// Initial status
        #[arg(long, default_value = "available", value_enum)]
        status: SpaceStatusArg,

        /// Mark the space reserved (available spaces only)
        #[arg(long)]
        reserved: bool,

        /// Display priority (1-10)
        #[arg(long, default_value = "5")]
        priority: u8,
    },

    /// Update an existing space
    Update {
        /// Space ID (UUID)
        id: String,

        /// Space code
        #[arg(long)]
        code: Option<String>,

        /// Move to another zone (UUID)
        #[arg(long, short = 'z')]
        zone: Option<String>,

        /// New status
        #[arg(long, value_enum)]
        status: Option<SpaceStatusArg>,

        /// Set/clear the reserved flag
        #[arg(long, action = clap::ArgAction::Set)]
        reserved: Option<bool>,

        /// Display priority (1-10)
        #[arg(long)]
        priority: Option<u8>,
    },

    /// Delete a space
    Delete {
        /// Space ID (UUID)
        id: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SpaceStatusArg {
    /// Free for use
    Available,
    /// Currently in use
    Occupied,
    /// Out of service
    Maintenance,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write a default config file if none exists
    Init,

    /// Display the resolved configuration
    Show,

    /// Print the config file path
    Path,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
