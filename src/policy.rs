use std::fmt;

use crate::channels::Channel;
use crate::mappings::{
    is_target_country, BLOCKED_REGIONS, CONDITIONAL_KEEP, EXCLUDED_KEYWORDS, FORCE_INCLUDE,
    WESTERN_COUNTRIES,
};
use crate::sources::FeedKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    ExcludedKeyword(&'static str),
    BlockedRegion(&'static str),
    ConditionalName,
    OutsideTargetCountries,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::ExcludedKeyword(k) => write!(f, "excluded keyword \"{k}\""),
            Rejection::BlockedRegion(r) => write!(f, "blocked region \"{r}\""),
            Rejection::ConditionalName => write!(
                f,
                "\"{}\" without \"{}\"",
                CONDITIONAL_KEEP.0, CONDITIONAL_KEEP.1
            ),
            Rejection::OutsideTargetCountries => write!(f, "country outside target and western sets"),
        }
    }
}

/// Decides whether a channel from the given feed survives. Expects the
/// feed's tags (`country` in particular) to be stamped already.
pub fn check(channel: &Channel, kind: &FeedKind) -> Result<(), Rejection> {
    if let Some(keyword) = EXCLUDED_KEYWORDS
        .iter()
        .find(|k| channel.name.contains(**k) || channel.group.contains(**k))
    {
        return Err(Rejection::ExcludedKeyword(*keyword));
    }

    let id = channel.id.to_lowercase();
    if let Some(region) = BLOCKED_REGIONS.iter().find(|r| id.contains(**r)) {
        return Err(Rejection::BlockedRegion(*region));
    }

    let (needle, keeper) = CONDITIONAL_KEEP;
    if channel.name.contains(needle) && !channel.name.contains(keeper) {
        return Err(Rejection::ConditionalName);
    }

    if matches!(kind, FeedKind::Genre(_)) && !passes_country_gate(channel) {
        return Err(Rejection::OutsideTargetCountries);
    }

    Ok(())
}

pub fn accept(channel: &Channel, kind: &FeedKind) -> bool {
    check(channel, kind).is_ok()
}

fn passes_country_gate(channel: &Channel) -> bool {
    let name = channel.name.to_lowercase();
    if FORCE_INCLUDE
        .iter()
        .any(|k| name.contains(&k.to_lowercase()))
    {
        return true;
    }

    match channel.country.as_deref() {
        Some(code) => is_target_country(code) || WESTERN_COUNTRIES.contains(&code),
        None => false,
    }
}
