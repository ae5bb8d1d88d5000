use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use crate::channels::Channel;
use crate::mappings::{is_target_country, GENRE_FEEDS, TARGET_COUNTRIES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedKind {
    /// National feed; every channel is stamped with this country.
    Country(String),
    /// The broad Arabic-language feed.
    Language,
    /// Hand-picked channels compiled into the binary.
    Curated,
    /// A genre feed carrying this category id.
    Genre(String),
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedKind::Country(code) => write!(f, "country:{code}"),
            FeedKind::Language => write!(f, "language:ara"),
            FeedKind::Curated => write!(f, "curated"),
            FeedKind::Genre(id) => write!(f, "genre:{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    pub kind: FeedKind,
    /// `None` for curated channels, which are not fetched.
    pub url: Option<String>,
}

/// Feeds in merge order: countries, language, curated, genres.
pub fn plan(base_url: &str) -> Vec<Feed> {
    let base = base_url.trim_end_matches('/');
    let mut feeds: Vec<Feed> = TARGET_COUNTRIES
        .iter()
        .map(|code| Feed {
            kind: FeedKind::Country(code.to_string()),
            url: Some(format!("{base}/countries/{code}.m3u")),
        })
        .collect();

    feeds.push(Feed {
        kind: FeedKind::Language,
        url: Some(format!("{base}/languages/ara.m3u")),
    });
    feeds.push(Feed {
        kind: FeedKind::Curated,
        url: None,
    });
    feeds.extend(GENRE_FEEDS.iter().map(|id| Feed {
        kind: FeedKind::Genre(id.to_string()),
        url: Some(format!("{base}/categories/{id}.m3u")),
    }));
    feeds
}

/// Trailing region code of a tvg-id such as `MBC1.sa` or `MBC1.sa@SD`.
pub fn country_from_id(id: &str) -> Option<String> {
    let id = id.split('@').next().unwrap_or(id);
    let (_, suffix) = id.rsplit_once('.')?;
    if suffix.len() == 2 && suffix.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(suffix.to_ascii_lowercase())
    } else {
        None
    }
}

/// Applies the tags a feed implies. Tags already present are kept.
pub fn stamp(mut channel: Channel, kind: &FeedKind) -> Channel {
    match kind {
        FeedKind::Country(code) => {
            if channel.country.is_none() {
                channel.country = Some(code.clone());
            }
            channel.is_arab = true;
        }
        FeedKind::Language => {
            if channel.country.is_none() {
                channel.country = country_from_id(&channel.id);
            }
            channel.is_arab = true;
        }
        FeedKind::Curated => {}
        FeedKind::Genre(id) => {
            if channel.country.is_none() {
                channel.country = country_from_id(&channel.id);
            }
            if channel.category_id.is_none() {
                channel.category_id = Some(id.clone());
            }
            if channel.country.as_deref().is_some_and(is_target_country) {
                channel.is_arab = true;
            }
        }
    }
    channel
}

/// Downloads playlist text. Never fails: any problem is logged and turns
/// into an empty string.
#[derive(Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    pub async fn fetch(&self, url: &str) -> String {
        let resp = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("Fetch failed: url={} err={}", url, e);
                return String::new();
            }
        };

        if resp.status() != reqwest::StatusCode::OK {
            warn!("Fetch returned non-200: url={} status={}", url, resp.status());
            return String::new();
        }

        match resp.text().await {
            Ok(text) => {
                debug!("Fetched {} bytes from {}", text.len(), url);
                text
            }
            Err(e) => {
                warn!("Fetch body failed: url={} err={}", url, e);
                String::new()
            }
        }
    }
}
