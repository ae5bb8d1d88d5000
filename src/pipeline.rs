use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use tracing::{debug, info};

use crate::categorize::expand;
use crate::channels::{parse_m3u, Channel};
use crate::mappings::curated_channels;
use crate::merge::ChannelSet;
use crate::playlist::{render, sort_entries, PlaylistEntry};
use crate::policy;
use crate::sources::{plan, stamp, FeedKind, Fetcher};

/// Channels produced by one feed, before any filtering.
#[derive(Debug, Clone)]
pub struct SourceBatch {
    pub kind: FeedKind,
    pub channels: Vec<Channel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenerationReport {
    pub feeds: usize,
    pub empty_feeds: usize,
    pub raw_channels: usize,
    pub accepted_channels: usize,
    pub unique_urls: usize,
    pub entries: usize,
    pub output: Option<PathBuf>,
}

/// Filter, merge, categorize and sort. Batches must arrive in merge order.
pub fn build_entries(batches: Vec<SourceBatch>) -> (Vec<PlaylistEntry>, GenerationReport) {
    let mut report = GenerationReport {
        feeds: batches.len(),
        ..GenerationReport::default()
    };
    let mut merged = ChannelSet::new();

    for batch in batches {
        if batch.channels.is_empty() {
            report.empty_feeds += 1;
        }
        report.raw_channels += batch.channels.len();

        let mut kept = 0;
        for channel in batch.channels {
            let channel = stamp(channel, &batch.kind);
            match policy::check(&channel, &batch.kind) {
                Ok(()) => {
                    kept += 1;
                    merged.insert(channel);
                }
                Err(reason) => {
                    debug!("Rejected \"{}\" from {}: {}", channel.name, batch.kind, reason);
                }
            }
        }
        report.accepted_channels += kept;
        info!("Feed {}: kept {} channels", batch.kind, kept);
    }

    report.unique_urls = merged.len();

    let mut entries: Vec<PlaylistEntry> = merged.iter().flat_map(expand).collect();
    sort_entries(&mut entries);
    report.entries = entries.len();

    (entries, report)
}

/// Fetches every feed one after the other. A failed feed yields no channels.
pub async fn collect(fetcher: &Fetcher, base_url: &str) -> Vec<SourceBatch> {
    let mut batches = Vec::new();

    for feed in plan(base_url) {
        let channels = match &feed.url {
            Some(url) => {
                info!("Fetching {} from {}...", feed.kind, url);
                parse_m3u(&fetcher.fetch(url).await)
            }
            None => curated_channels(),
        };
        info!("Loaded {} channels from {}", channels.len(), feed.kind);
        batches.push(SourceBatch {
            kind: feed.kind,
            channels,
        });
    }

    batches
}

pub fn write_playlist(path: &Path, entries: &[PlaylistEntry]) -> anyhow::Result<()> {
    std::fs::write(path, render(entries))
        .with_context(|| format!("failed to write playlist to {}", path.display()))
}

/// One full generation run.
pub async fn generate(
    fetcher: &Fetcher,
    base_url: &str,
    output: &Path,
) -> anyhow::Result<GenerationReport> {
    let batches = collect(fetcher, base_url).await;
    let (entries, mut report) = build_entries(batches);

    write_playlist(output, &entries)?;
    report.output = Some(output.to_path_buf());

    info!(
        "Playlist saved to {} ({} entries from {} unique streams)",
        output.display(),
        report.entries,
        report.unique_urls
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mappings::{category_label, country_label};

    fn channel(name: &str, id: &str, url: &str, group: &str) -> Channel {
        Channel {
            url: url.to_string(),
            name: name.to_string(),
            id: id.to_string(),
            group: group.to_string(),
            logo: format!("https://logos.example/{id}.png"),
            ..Channel::default()
        }
    }

    #[test]
    fn empty_run_yields_no_entries() {
        let (entries, report) = build_entries(Vec::new());
        assert!(entries.is_empty());
        assert_eq!(report.entries, 0);
        assert_eq!(render(&entries), "#EXTM3U\n");
    }

    #[test]
    fn same_url_across_feeds_is_merged() {
        let url = "https://streams.example/aljazeera.m3u8";
        let batches = vec![
            SourceBatch {
                kind: FeedKind::Country("qa".into()),
                channels: vec![channel("Al Jazeera (1080p)", "AlJazeera.qa", url, "News")],
            },
            SourceBatch {
                kind: FeedKind::Language,
                channels: vec![channel("AJ Arabic", "AlJazeera.qa", url, "General")],
            },
            SourceBatch {
                kind: FeedKind::Genre("news".into()),
                channels: vec![channel("AJ", "AlJazeera.qa", url, "Undefined")],
            },
        ];

        let (entries, report) = build_entries(batches);
        assert_eq!(report.raw_channels, 3);
        assert_eq!(report.accepted_channels, 3);
        assert_eq!(report.unique_urls, 1);

        // Qatar from the country feed, News from the genre feed's category.
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, category_label("news").unwrap());
        assert_eq!(entries[1].label, country_label("qa").unwrap());
        for entry in &entries {
            assert_eq!(entry.url, url);
            assert_eq!(entry.name, "Al Jazeera | الجزيرة");
        }
    }

    #[test]
    fn rejected_channels_never_reach_the_output() {
        let batches = vec![
            SourceBatch {
                kind: FeedKind::Country("iq".into()),
                channels: vec![
                    channel("Al Iraqia News", "AlIraqiaNews.iq", "https://s/1", "News"),
                    channel("Al Iraqia Drama", "AlIraqiaDrama.iq", "https://s/2", "General"),
                ],
            },
            SourceBatch {
                kind: FeedKind::Language,
                channels: vec![channel("Press TV Arabic", "PressTV.ir", "https://s/3", "News")],
            },
            SourceBatch {
                kind: FeedKind::Genre("sports".into()),
                channels: vec![channel("Sport Italia", "SportItalia.mx", "https://s/4", "Sports")],
            },
        ];

        let (entries, report) = build_entries(batches);
        assert_eq!(report.accepted_channels, 1);
        let urls: Vec<_> = entries.iter().map(|e| e.url.as_str()).collect();
        assert!(urls.iter().all(|u| *u == "https://s/1"));
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn empty_feeds_are_counted() {
        let batches = vec![
            SourceBatch {
                kind: FeedKind::Country("ye".into()),
                channels: Vec::new(),
            },
            SourceBatch {
                kind: FeedKind::Curated,
                channels: curated_channels(),
            },
        ];
        let (entries, report) = build_entries(batches);
        assert_eq!(report.feeds, 2);
        assert_eq!(report.empty_feeds, 1);
        // Two curated streams, each under UAE and Religious.
        assert_eq!(entries.len(), 4);
    }

    #[test]
    fn write_failure_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("playlist.m3u");
        assert!(write_playlist(&path, &[]).is_err());
    }
}
