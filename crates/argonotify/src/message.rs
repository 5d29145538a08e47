use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Config;

pub const DISCORD_RED: u32 = 0xFF_0000;
pub const DISCORD_GREEN: u32 = 0x00_FF00;
pub const DISCORD_ORANGE: u32 = 0xFF_A500;

/// Summary colour by workflow phase. Phases outside the palette render with
/// the provider default (0).
pub fn status_color(status: &str) -> u32 {
    match status {
        "Succeeded" => DISCORD_GREEN,
        "Failed" => DISCORD_RED,
        "Error" => DISCORD_ORANGE,
        _ => 0,
    }
}

/// One failed step as reported by the workflow controller.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FailedNode {
    pub display_name: String,
    pub message: String,
    pub template_name: String,
    pub phase: String,
    pub pod_name: String,
    pub finished_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
}

impl EmbedField {
    fn new(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

/// One rich-embed block of the outgoing message. Field order is preserved
/// end to end; the destination renders fields top-to-bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
}

/// Parse the failed-node list. Older exit-handler templates shipped the
/// array wrapped once more as a JSON string literal; a top-level string is
/// therefore unwrapped once before decoding the records.
pub fn parse_failed_nodes(raw: &str) -> Result<Vec<FailedNode>> {
    let value: Value = serde_json::from_str(raw).context("Node list is not valid JSON")?;
    let nodes = match value {
        Value::String(inner) => serde_json::from_str(&inner)
            .context("Node list is string-wrapped but its content is not a node array")?,
        other => {
            serde_json::from_value(other).context("Node list is not an array of node records")?
        }
    };
    Ok(nodes)
}

/// Assemble the ordered embed sequence: one summary embed, then one embed
/// per failed node that carries a diagnostic message. Nodes without a
/// message are skipped.
pub fn build_embeds(config: &Config, duration_text: &str) -> Vec<Embed> {
    let mut embeds = Vec::with_capacity(1 + config.failed_nodes.len());

    embeds.push(Embed {
        title: format!(
            "Workflow `{}/{}`: {}",
            config.namespace, config.name, config.status
        ),
        description: format!(
            "[{} nodes failed]({})",
            config.failed_nodes.len(),
            config.workflow_url
        ),
        color: status_color(&config.status),
        fields: vec![
            EmbedField::new("UID", &config.uid),
            EmbedField::new("Duration", duration_text),
        ],
    });

    for node in &config.failed_nodes {
        if node.message.is_empty() {
            continue;
        }
        embeds.push(Embed {
            title: "Node Failure Information".to_string(),
            description: format!("Node: {}", node.display_name),
            color: DISCORD_RED,
            fields: vec![
                EmbedField::new("Message", &node.message),
                EmbedField::new("Template", &node.template_name),
                EmbedField::new("Phase", &node.phase),
                EmbedField::new("Pod Name", &node.pod_name),
                EmbedField::new("Finished At", &node.finished_at),
            ],
        });
    }

    embeds
}
