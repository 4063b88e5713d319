//! Clap derive structures for the `unifi-manager` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// unifi-manager -- UniFi controller client administration from the command line
#[derive(Debug, Parser)]
#[command(
    name = "unifi-manager",
    version,
    about = "Manage static IPs and hostnames on a UniFi network controller",
    long_about = "Manage client device settings on a UniFi network controller:\n\
        static DHCP reservations, display names, and CSV-based bulk edits.",
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
    /// Controller base URL
    #[arg(
        long,
        short = 'c',
        env = "UNIFI_CONTROLLER",
        default_value = "https://192.168.1.1",
        global = true
    )]
    pub controller: String,

    /// Controller username
    #[arg(
        long,
        short = 'u',
        env = "UNIFI_USERNAME",
        default_value = "admin",
        global = true
    )]
    pub username: String,

    /// Controller password (prompted interactively when omitted)
    #[arg(long, env = "UNIFI_PASSWORD", global = true, hide_env = true)]
    pub password: Option<String>,

    /// Site name
    #[arg(
        long,
        short = 's',
        env = "UNIFI_SITE",
        default_value = "default",
        global = true
    )]
    pub site: String,

    /// Verify the controller's TLS certificate (off by default for
    /// self-signed local controllers)
    #[arg(long, env = "UNIFI_VERIFY_TLS", global = true)]
    pub verify_tls: bool,

    /// Output format
    #[arg(long, short = 'o', default_value = "table", global = true)]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,
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
    /// List all tracked clients on the site
    ListClients,

    /// List sites visible to the authenticated user
    ListSites,

    /// List static routes configured on the site
    ListRoutes,

    /// List user groups (bandwidth profiles)
    ListGroups,

    /// Assign a fixed IP (DHCP reservation) to a client
    SetStaticIp {
        /// Client MAC address (any case)
        #[arg(long)]
        mac: String,

        /// Fixed IP address to assign
        #[arg(long)]
        ip: String,

        /// Also set the client's display name
        #[arg(long)]
        hostname: Option<String>,
    },

    /// Export all clients to a CSV file for editing
    ExportCsv {
        /// Output CSV file
        #[arg(long, default_value = "unifi_clients.csv")]
        file: PathBuf,
    },

    /// Apply static-IP assignments from a CSV file
    ImportCsv {
        /// Input CSV file
        #[arg(long)]
        file: PathBuf,
    },

    /// Rename clients from a two-column MAC,Hostname CSV file
    BulkHostnames {
        /// Input CSV file
        #[arg(long)]
        file: PathBuf,
    },

    /// Force-provision site devices to flush cached ARP state
    ClearArp,

    /// Write an example CSV showing the import column schema
    GenerateTemplate {
        /// Template file to create
        #[arg(long, default_value = "static_ip_template.csv")]
        file: PathBuf,
    },

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
