use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Argonotify – Argo Workflows exit-handler notifier
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Activate verbose output (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the workflow notification and deliver it to the webhook
    Send(SendArgs),
    /// Print build information
    Version {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Pipeline inputs. Every flag falls back to the environment variable the
/// exit-handler template exports, so a bare `argonotify send` works as a
/// workflow step.
#[derive(Args, Debug)]
pub struct SendArgs {
    /// Pre-authorized webhook endpoint for the destination channel
    #[arg(long, env = "DISCORD_WEBHOOK_URL")]
    pub webhook_url: String,

    /// Workflow phase, typically Succeeded/Failed/Error
    #[arg(long, env = "ARGO_WORKFLOW_STATUS")]
    pub status: String,

    /// Link target embedded in the summary card
    #[arg(long, env = "ARGO_WORKFLOW_URL", default_value = "")]
    pub workflow_url: String,

    #[arg(long, env = "ARGO_WORKFLOW_NAMESPACE", default_value = "")]
    pub namespace: String,

    #[arg(long, env = "ARGO_WORKFLOW_NAME", default_value = "")]
    pub name: String,

    #[arg(long, env = "ARGO_WORKFLOW_UID", default_value = "")]
    pub uid: String,

    /// Workflow duration in seconds (decimal)
    #[arg(long, env = "ARGO_WORKFLOW_DURATION")]
    pub duration: Option<String>,

    /// JSON array of failed-node records from the controller
    #[arg(long, env = "ARGO_FAILED_NODES")]
    pub failed_nodes: Option<String>,

    /// Mirror the encoded payload to this path before delivery
    #[arg(long, env = "DISCORD_PAYLOAD_TO_FILE", value_name = "FILE")]
    pub payload_file: Option<PathBuf>,
}
