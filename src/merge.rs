use std::collections::HashMap;

use crate::channels::Channel;

/// Reconciles a channel with whatever is already known for its url. The
/// first record keeps its name, logo and group; a later one can only fill in
/// tags that are still missing.
pub fn merge(existing: Option<Channel>, incoming: Channel) -> Channel {
    let Some(mut existing) = existing else {
        return incoming;
    };

    if existing.country.is_none() {
        existing.country = incoming.country;
    }
    if existing.category_id.is_none() {
        existing.category_id = incoming.category_id;
    }
    existing.is_arab |= incoming.is_arab;
    existing
}

/// Channels keyed by url, kept in first-seen order.
#[derive(Debug, Default)]
pub struct ChannelSet {
    index: HashMap<String, usize>,
    channels: Vec<Channel>,
}

impl ChannelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the url was new.
    pub fn insert(&mut self, incoming: Channel) -> bool {
        match self.index.get(&incoming.url) {
            Some(&pos) => {
                let existing = std::mem::take(&mut self.channels[pos]);
                self.channels[pos] = merge(Some(existing), incoming);
                false
            }
            None => {
                self.index.insert(incoming.url.clone(), self.channels.len());
                self.channels.push(merge(None, incoming));
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn get(&self, url: &str) -> Option<&Channel> {
        self.index.get(url).map(|&pos| &self.channels[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Channel> {
        self.channels.iter()
    }
}

impl Extend<Channel> for ChannelSet {
    fn extend<T: IntoIterator<Item = Channel>>(&mut self, iter: T) {
        for channel in iter {
            self.insert(channel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(url: &str, name: &str) -> Channel {
        Channel {
            url: url.to_string(),
            name: name.to_string(),
            logo: format!("{name}.png"),
            group: format!("{name} group"),
            ..Channel::default()
        }
    }

    #[test]
    fn first_source_keeps_base_fields() {
        let mut set = ChannelSet::new();
        assert!(set.insert(channel("http://a/1", "From A")));
        assert!(!set.insert(channel("http://a/1", "From B")));

        let kept = set.get("http://a/1").unwrap();
        assert_eq!(kept.name, "From A");
        assert_eq!(kept.logo, "From A.png");
        assert_eq!(kept.group, "From A group");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn later_source_only_adds_missing_tags() {
        let mut first = channel("http://a/1", "Base");
        first.country = Some("sa".to_string());

        let mut second = channel("http://a/1", "Other");
        second.country = Some("ae".to_string());
        second.category_id = Some("news".to_string());
        second.is_arab = true;

        let merged = merge(Some(first), second);
        assert_eq!(merged.country.as_deref(), Some("sa"));
        assert_eq!(merged.category_id.as_deref(), Some("news"));
        assert!(merged.is_arab);
        assert_eq!(merged.name, "Base");
    }

    #[test]
    fn tags_are_never_cleared() {
        let mut first = channel("http://a/1", "Base");
        first.is_arab = true;
        first.category_id = Some("kids".to_string());

        let merged = merge(Some(first), channel("http://a/1", "Later"));
        assert!(merged.is_arab);
        assert_eq!(merged.category_id.as_deref(), Some("kids"));
    }

    #[test]
    fn tag_enrichment_is_order_independent() {
        let mut a = channel("http://a/1", "A");
        a.country = Some("eg".to_string());
        let mut b = channel("http://a/1", "B");
        b.category_id = Some("movies".to_string());
        b.is_arab = true;

        let ab = merge(Some(a.clone()), b.clone());
        let ba = merge(Some(b), a);
        assert_eq!(ab.country, ba.country);
        assert_eq!(ab.category_id, ba.category_id);
        assert_eq!(ab.is_arab, ba.is_arab);
        assert_ne!(ab.name, ba.name);
    }

    #[test]
    fn one_entry_per_url_in_first_seen_order() {
        let mut set = ChannelSet::new();
        assert!(set.is_empty());
        set.extend([
            channel("http://b", "B"),
            channel("http://a", "A"),
            channel("http://b", "B again"),
            channel("http://c", "C"),
            channel("http://a", "A again"),
        ]);

        let urls: Vec<_> = set.iter().map(|c| c.url.as_str()).collect();
        assert_eq!(urls, vec!["http://b", "http://a", "http://c"]);
    }
}
