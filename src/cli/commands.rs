//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rook-ceph",
    version,
    about = "kubectl rook-ceph provides common management and troubleshooting tools for Ceph.",
    long_about = None,
)]
pub struct Cli {
    /// Kubernetes config path
    #[arg(long, global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubernetes namespace where rook operator is running [default: rook-ceph]
    #[arg(long, global = true, env = "ROOK_CEPH_OPERATOR_NAMESPACE")]
    pub operator_namespace: Option<String>,

    /// Kubernetes namespace where CephCluster is created [default: rook-ceph]
    #[arg(short = 'n', long, global = true, env = "ROOK_CEPH_NAMESPACE")]
    pub namespace: Option<String>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value = "table")]
    pub output: OutputFormat,

    /// Enable verbose logging
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

#[derive(Subcommand)]
pub enum Command {
    /// Output mon endpoints
    Mons,

    /// Start or stop a debug copy of a mon or osd deployment
    Debug(DebugArgs),

    /// Show CephCluster phase and health
    Status,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct DebugArgs {
    #[command(subcommand)]
    pub command: DebugCommand,
}

#[derive(Subcommand)]
pub enum DebugCommand {
    /// Replace a daemon deployment with a sleeping `-debug` copy
    Start(StartDebugArgs),

    /// Remove the `-debug` copy and scale the daemon back up
    Stop(StopDebugArgs),
}

#[derive(Args)]
pub struct StartDebugArgs {
    /// Mon or osd deployment to debug (e.g. rook-ceph-osd-0)
    pub deployment: String,

    /// Image to run in the debug container instead of the daemon's own
    #[arg(long)]
    pub alternate_image: Option<String>,
}

#[derive(Args)]
pub struct StopDebugArgs {
    /// Mon or osd deployment whose debug copy should be removed
    pub deployment: String,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
