//! Clap derive structures for the `dns-manager` CLI.

use clap::{Args, Parser, Subcommand, ValueEnum};

use homelab_api::technitium::RecordType;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// dns-manager -- Technitium DNS Server administration from the command line
#[derive(Debug, Parser)]
#[command(
    name = "dns-manager",
    version,
    about = "Manage DNS zones and records on a Technitium DNS Server",
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
    /// DNS server base URL
    #[arg(
        long,
        short = 's',
        env = "TECHNITIUM_URL",
        default_value = "http://127.0.0.1:5380",
        global = true
    )]
    pub server: String,

    /// API username
    #[arg(
        long,
        short = 'u',
        env = "TECHNITIUM_USERNAME",
        default_value = "admin",
        global = true
    )]
    pub username: String,

    /// API password (prompted interactively when omitted)
    #[arg(long, env = "TECHNITIUM_PASSWORD", global = true, hide_env = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Plain text, one value per line (scripting)
    Plain,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all zones hosted on the server
    ListZones,

    /// Provision the GitLab record set for a zone
    ///
    /// Ensures the zone exists, then adds an A record for the primary
    /// host plus `git` and `registry` aliases pointing at it.
    SetupService {
        /// Zone to provision (e.g. example.com)
        zone: String,

        /// Address the primary host record points at
        ip: String,
    },

    /// Add a single record to a zone
    AddRecord {
        /// Owning zone (e.g. example.com)
        zone: String,

        /// Record name within the zone
        name: String,

        /// Record type (A, CNAME, TXT, or any other type)
        #[arg(value_name = "TYPE")]
        rtype: RecordType,

        /// Record value (address, canonical name, text, or raw data)
        value: String,

        /// Time-to-live in seconds
        #[arg(long, default_value_t = 3600)]
        ttl: u32,
    },

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
