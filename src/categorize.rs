use std::collections::BTreeSet;

use crate::channels::Channel;
use crate::mappings::{category_label, country_label, FALLBACK_CATEGORY, GENRE_KEYWORDS};
use crate::normalize::normalize_name;
use crate::playlist::PlaylistEntry;

/// Output categories for a channel. Empty means the channel is not emitted.
/// The country label covers every code in `COUNTRY_LABELS`, Maghreb included,
/// not only the fetched target countries.
pub fn assign(channel: &Channel) -> BTreeSet<&'static str> {
    labels_for(channel, &normalize_name(&channel.name))
}

fn labels_for(channel: &Channel, normalized_name: &str) -> BTreeSet<&'static str> {
    let mut labels = BTreeSet::new();

    if let Some(label) = channel.country.as_deref().and_then(country_label) {
        labels.insert(label);
    }

    match channel.category_id.as_deref() {
        Some(id) => {
            if let Some(label) = category_label(id) {
                labels.insert(label);
            }
        }
        None => {
            if let Some(label) = guess_genre(channel, normalized_name).and_then(category_label) {
                labels.insert(label);
            }
        }
    }

    labels
}

fn guess_genre(channel: &Channel, normalized_name: &str) -> Option<&'static str> {
    let group = channel.group.to_lowercase();
    let name = normalized_name.to_lowercase();

    GENRE_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|k| group.contains(*k) || name.contains(*k))
        })
        .map(|(id, _)| *id)
        .or_else(|| channel.is_arab.then_some(FALLBACK_CATEGORY))
}

/// One entry per assigned label, each with a freshly built metadata line.
pub fn expand(channel: &Channel) -> Vec<PlaylistEntry> {
    let name = normalize_name(&channel.name);
    labels_for(channel, &name)
        .into_iter()
        .map(|label| PlaylistEntry {
            id: channel.id.clone(),
            name: name.clone(),
            logo: channel.logo.clone(),
            label: label.to_string(),
            url: channel.url.clone(),
        })
        .collect()
}
