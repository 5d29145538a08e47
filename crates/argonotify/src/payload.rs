use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::message::Embed;

/// Top-level wire object expected by the webhook provider.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub embeds: Vec<Embed>,
}

impl Payload {
    pub fn new(embeds: Vec<Embed>) -> Self {
        Self { embeds }
    }

    /// Exact bytes for the POST body.
    pub fn encode(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).context("Encoding webhook payload")
    }
}

/// Mirror the encoded payload to a local file for offline inspection. The
/// side channel must not block delivery, so write failures are logged and
/// swallowed.
pub fn dump_payload(path: &Path, bytes: &[u8]) {
    if let Err(err) = fs::write(path, bytes) {
        warn!("Failed to write payload copy to {}: {err}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::EmbedField;

    fn sample_payload() -> Payload {
        Payload::new(vec![Embed {
            title: "Workflow `ns1/wf1`: Succeeded".to_string(),
            description: "[0 nodes failed]()".to_string(),
            color: 0x00_FF00,
            fields: vec![EmbedField {
                name: "UID".to_string(),
                value: "u1".to_string(),
            }],
        }])
    }

    #[test]
    fn encodes_under_embeds_key() {
        let bytes = sample_payload().encode().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value["embeds"].is_array());
        assert_eq!(value["embeds"][0]["color"], 0x00_FF00);
    }

    #[test]
    fn payload_round_trips() {
        let payload = sample_payload();
        let bytes = payload.encode().unwrap();
        let decoded: Payload = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn dump_writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.json");
        let bytes = sample_payload().encode().unwrap();
        dump_payload(&path, &bytes);
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn dump_failure_does_not_panic() {
        let bytes = sample_payload().encode().unwrap();
        dump_payload(Path::new("/nonexistent-dir/payload.json"), &bytes);
    }
}
