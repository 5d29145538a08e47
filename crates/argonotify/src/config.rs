use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::cli::SendArgs;
use crate::message::{parse_failed_nodes, FailedNode};

/// Validated run configuration, populated once at startup. Everything
/// downstream works off this struct and never touches the process
/// environment.
#[derive(Debug)]
pub struct Config {
    pub webhook_url: String,
    pub status: String,
    pub workflow_url: String,
    pub namespace: String,
    pub name: String,
    pub uid: String,
    /// Seconds as reported by the controller; `None` when the caller
    /// supplied no duration.
    pub duration_secs: Option<f64>,
    pub failed_nodes: Vec<FailedNode>,
    pub payload_file: Option<PathBuf>,
}

impl Config {
    /// Validate raw CLI/environment inputs. Parse failures are fatal here,
    /// before any network traffic: a malformed duration or node list must
    /// never turn into a misleading notification.
    pub fn from_args(args: SendArgs) -> Result<Self> {
        if args.webhook_url.is_empty() {
            bail!("Webhook endpoint (--webhook-url / DISCORD_WEBHOOK_URL) must not be empty");
        }
        if args.status.is_empty() {
            bail!("Workflow status (--status / ARGO_WORKFLOW_STATUS) must not be empty");
        }

        let duration_secs = match args.duration.as_deref() {
            None | Some("") => None,
            Some(raw) => {
                let secs: f64 = raw
                    .parse()
                    .with_context(|| format!("Parsing workflow duration '{raw}'"))?;
                if !secs.is_finite() || secs < 0.0 {
                    bail!("Workflow duration must be a non-negative number, got '{raw}'");
                }
                Some(secs)
            }
        };

        let failed_nodes = match args.failed_nodes.as_deref() {
            None | Some("") => Vec::new(),
            Some(raw) => parse_failed_nodes(raw).context("Parsing failed-node list")?,
        };

        Ok(Self {
            webhook_url: args.webhook_url,
            status: args.status,
            workflow_url: args.workflow_url,
            namespace: args.namespace,
            name: args.name,
            uid: args.uid,
            duration_secs,
            failed_nodes,
            payload_file: args.payload_file,
        })
    }
}
