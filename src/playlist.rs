use std::cmp::Ordering;
use std::collections::HashMap;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use lazy_static::lazy_static;

use crate::channels::RawEntry;
use crate::mappings::{priority_labels, PLAYLIST_HEADER};

/// One line pair of the output playlist: a channel under one category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub label: String,
    pub url: String,
}

impl PlaylistEntry {
    pub fn extinf(&self) -> String {
        format!(
            "#EXTINF:-1 tvg-id=\"{}\" tvg-logo=\"{}\" group-title=\"{}\",{}",
            self.id, self.logo, self.label, self.name
        )
    }
}

lazy_static! {
    // Root locale, tertiary strength, punctuation not ignorable.
    static ref COLLATOR: CollatorBorrowed<'static> =
        Collator::try_new(Default::default(), CollatorOptions::default()).unwrap();
}

/// Name order used inside a label.
fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR.compare(a, b)
}

/// Prioritized labels first in list order, the rest alphabetically by label;
/// names break ties. The sort is stable, so identical keys keep merge order.
pub fn sort_entries(entries: &mut [PlaylistEntry]) {
    let rank: HashMap<&str, usize> = priority_labels()
        .into_iter()
        .enumerate()
        .map(|(i, label)| (label, i))
        .collect();

    entries.sort_by(|a, b| {
        let by_label = match (rank.get(a.label.as_str()), rank.get(b.label.as_str())) {
            (Some(ra), Some(rb)) => ra.cmp(rb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.label.cmp(&b.label),
        };
        by_label.then_with(|| collate(&a.name, &b.name))
    });
}

fn push_entry(out: &mut String, inf: &str, url: &str) {
    out.push_str(inf);
    out.push('\n');
    out.push_str(url);
    out.push('\n');
}

pub fn render(entries: &[PlaylistEntry]) -> String {
    let mut out = format!("{PLAYLIST_HEADER}\n");
    for entry in entries {
        push_entry(&mut out, &entry.extinf(), &entry.url);
    }
    out
}

/// Same layout as [`render`], keeping each entry's metadata line verbatim.
pub fn render_raw(entries: &[RawEntry]) -> String {
    let mut out = format!("{PLAYLIST_HEADER}\n");
    for entry in entries {
        push_entry(&mut out, &entry.inf, &entry.url);
    }
    out
}
