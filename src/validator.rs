use std::fmt;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::channels::{parse_entries, RawEntry};
use crate::playlist::render_raw;
use crate::settings::ValidateConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Alive(u16),
    Status(u16),
    Timeout,
    Error(String),
}

impl ProbeOutcome {
    pub fn is_alive(&self) -> bool {
        matches!(self, ProbeOutcome::Alive(_))
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Alive(code) | ProbeOutcome::Status(code) => write!(f, "{code}"),
            ProbeOutcome::Timeout => write!(f, "TIMEOUT"),
            ProbeOutcome::Error(reason) => write!(f, "{reason}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    pub checked: usize,
    pub kept: usize,
    pub removed: usize,
}

#[derive(Clone)]
pub struct Prober {
    client: reqwest::Client,
}

impl Prober {
    pub fn new(user_agent: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client })
    }

    /// HEAD request; 2xx and 3xx count as alive.
    pub async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.head(url).send().await {
            Ok(resp) => {
                let status = resp.status();
                if status.is_success() || status.is_redirection() {
                    ProbeOutcome::Alive(status.as_u16())
                } else {
                    ProbeOutcome::Status(status.as_u16())
                }
            }
            Err(e) if e.is_timeout() => ProbeOutcome::Timeout,
            Err(e) if e.is_connect() => ProbeOutcome::Error("CONNECT".to_string()),
            Err(e) if e.is_builder() => ProbeOutcome::Error("BAD_URL".to_string()),
            Err(_) => ProbeOutcome::Error("ERROR".to_string()),
        }
    }
}

/// Probes in consecutive batches, concurrently inside a batch, and returns
/// the live entries in their original order.
pub async fn filter_alive(
    prober: &Prober,
    entries: Vec<RawEntry>,
    batch_size: usize,
) -> Vec<RawEntry> {
    let batch_size = batch_size.max(1);
    let mut alive = Vec::with_capacity(entries.len());

    for batch in entries.chunks(batch_size) {
        let outcomes = join_all(batch.iter().map(|entry| prober.probe(&entry.url))).await;

        for (entry, outcome) in batch.iter().zip(outcomes) {
            if outcome.is_alive() {
                info!("[PASS] {}", entry.name());
                alive.push(entry.clone());
            } else {
                warn!("[FAIL] {} ({}) - REMOVED", entry.name(), outcome);
            }
        }
    }

    alive
}

/// Rewrites the playlist at `path`, dropping every entry whose stream does
/// not answer.
pub async fn validate_file(path: &Path, config: &ValidateConfig) -> anyhow::Result<ValidationReport> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("playlist file not found: {}", path.display()))?;
    let entries = parse_entries(&content);
    let checked = entries.len();
    info!("Validating {} channels...", checked);

    let prober = Prober::new(&config.user_agent, config.timeout())?;
    let alive = filter_alive(&prober, entries, config.batch_size).await;

    tokio::fs::write(path, render_raw(&alive))
        .await
        .with_context(|| format!("failed to rewrite playlist {}", path.display()))?;

    let report = ValidationReport {
        checked,
        kept: alive.len(),
        removed: checked - alive.len(),
    };
    info!(
        "Playlist updated: removed {} broken streams, {} remain",
        report.removed, report.kept
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_alive_outcomes_pass() {
        assert!(ProbeOutcome::Alive(200).is_alive());
        assert!(ProbeOutcome::Alive(302).is_alive());
        assert!(!ProbeOutcome::Status(404).is_alive());
        assert!(!ProbeOutcome::Timeout.is_alive());
        assert!(!ProbeOutcome::Error("CONNECT".into()).is_alive());
    }

    #[test]
    fn outcome_codes_for_logs() {
        assert_eq!(ProbeOutcome::Status(503).to_string(), "503");
        assert_eq!(ProbeOutcome::Timeout.to_string(), "TIMEOUT");
    }

    #[tokio::test]
    async fn unreachable_url_fails_without_error() {
        let prober = Prober::new("test", Duration::from_millis(500)).unwrap();
        let outcome = prober.probe("http://127.0.0.1:1/stream.m3u8").await;
        assert!(!outcome.is_alive());
    }

    #[tokio::test]
    async fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate_file(&dir.path().join("nope.m3u"), &ValidateConfig::default()).await;
        assert!(result.is_err());
    }
}
