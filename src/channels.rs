use lazy_static::lazy_static;
use regex::Regex;

pub const UNKNOWN_CHANNEL: &str = "Unknown Channel";

lazy_static! {
    static ref RE_TVG_ID: Regex = Regex::new(r#"tvg-id="([^"]*)""#).unwrap();
    static ref RE_TVG_LOGO: Regex = Regex::new(r#"tvg-logo="([^"]*)""#).unwrap();
    static ref RE_GROUP: Regex = Regex::new(r#"group-title="([^"]*)""#).unwrap();
    static ref RE_NAME: Regex = Regex::new(r",([^,]*)$").unwrap();
    static ref RE_URL: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").unwrap();
}

/// One channel as it travels through the generation pipeline.
///
/// `url` is the identity key. `is_arab`, `country` and `category_id` are
/// stamped by the source a channel came from and only ever get filled in,
/// never cleared, when the same url shows up again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Channel {
    pub url: String,
    pub name: String,
    pub logo: String,
    pub group: String,
    pub id: String,
    pub is_arab: bool,
    pub country: Option<String>,
    pub category_id: Option<String>,
}

/// A metadata line paired with the url line that followed it.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub inf: String,
    pub url: String,
}

impl RawEntry {
    pub fn name(&self) -> String {
        RE_NAME
            .captures(&self.inf)
            .map(|caps| caps[1].trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_CHANNEL.to_string())
    }

    pub fn into_channel(self) -> Channel {
        let attr = |re: &Regex| {
            re.captures(&self.inf)
                .map(|caps| caps[1].to_string())
                .unwrap_or_default()
        };
        let id = attr(&*RE_TVG_ID);
        let logo = attr(&*RE_TVG_LOGO);
        let group = attr(&*RE_GROUP);
        let name = self.name();

        Channel {
            url: self.url,
            name,
            logo,
            group,
            id,
            ..Channel::default()
        }
    }
}

pub fn is_url_line(line: &str) -> bool {
    RE_URL.is_match(line)
}

/// Pairs every `#EXTINF` line with the next url line. A url with no pending
/// metadata is skipped; other directives (`#EXTVLCOPT`, ...) are ignored.
pub fn parse_entries(content: &str) -> Vec<RawEntry> {
    let mut entries = Vec::new();
    let mut current_inf: Option<String> = None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("#EXTINF:") {
            current_inf = Some(line.to_string());
        } else if is_url_line(line) {
            if let Some(inf) = current_inf.take() {
                entries.push(RawEntry {
                    inf,
                    url: line.to_string(),
                });
            }
        }
    }

    entries
}

pub fn parse_m3u(content: &str) -> Vec<Channel> {
    parse_entries(content)
        .into_iter()
        .map(RawEntry::into_channel)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_m3u() {
        let data = r#"#EXTM3U
#EXTINF:-1 tvg-id="MBC1.sa" tvg-logo="https://i.imgur.com/mbc1.png" group-title="General",MBC 1 (1080p)
#EXTVLCOPT:http-user-agent=Mozilla/5.0
https://example.com/mbc1/index.m3u8
#EXTINF:-1 tvg-id="AlJazeera.qa" group-title="News",Al Jazeera
https://example.com/aljazeera.m3u8"#;

        let channels = parse_m3u(data);
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].name, "MBC 1 (1080p)");
        assert_eq!(channels[0].id, "MBC1.sa");
        assert_eq!(channels[0].logo, "https://i.imgur.com/mbc1.png");
        assert_eq!(channels[0].group, "General");
        assert_eq!(channels[0].url, "https://example.com/mbc1/index.m3u8");
        assert_eq!(channels[1].logo, "");
        assert_eq!(channels[1].name, "Al Jazeera");
        assert!(channels[1].country.is_none());
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(parse_m3u("").is_empty());
        assert!(parse_m3u("#EXTM3U\n").is_empty());
        assert!(parse_m3u("garbage\nmore garbage").is_empty());
    }

    #[test]
    fn url_without_metadata_is_skipped() {
        let data = "#EXTM3U\nhttp://orphan.example/a.m3u8\n#EXTINF:-1,Kept\nhttp://kept.example/b.m3u8\nhttp://orphan.example/c.m3u8\n";
        let channels = parse_m3u(data);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].name, "Kept");
        assert_eq!(channels[0].url, "http://kept.example/b.m3u8");
    }

    #[test]
    fn missing_name_falls_back_to_placeholder() {
        let data = "#EXTINF:-1 tvg-id=\"x.sa\"\nhttp://a.example/s.m3u8\n#EXTINF:-1 tvg-id=\"y.sa\",\nhttp://b.example/s.m3u8\n";
        let channels = parse_m3u(data);
        assert_eq!(channels.len(), 2);
        assert_eq!(channels[0].name, UNKNOWN_CHANNEL);
        assert_eq!(channels[1].name, UNKNOWN_CHANNEL);
    }

    #[test]
    fn later_metadata_line_replaces_pending_one() {
        let data = "#EXTINF:-1,First\n#EXTINF:-1,Second\nrtmp://live.example/stream\n";
        let entries = parse_entries(data);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "Second");
        assert_eq!(entries[0].inf, "#EXTINF:-1,Second");
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let data = "#EXTM3U\r\n#EXTINF:-1 group-title=\"Kids\",Spacetoon\r\nhttps://example.com/st.m3u8\r\n";
        let channels = parse_m3u(data);
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].group, "Kids");
        assert_eq!(channels[0].url, "https://example.com/st.m3u8");
    }
}
