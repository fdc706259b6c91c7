//! The derivation itself: month encoding, aggregate sums, guarded ratios.

use super::FeatureRecord;
use crate::session::SessionRecord;

/// Labels the form emits that differ from the canonical three-letter code.
const MONTH_ALIASES: &[(&str, &str)] = &[("June", "Jun")];

/// Standard calendar abbreviations, 1-indexed by position.
const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn abbr_to_number(abbr: &str) -> Option<u32> {
    MONTH_ABBR.iter().position(|m| *m == abbr).map(|i| i as u32 + 1)
}

/// Resolve a month label to its calendar number. The label is first run
/// through the alias table (pass-through when absent), then looked up in the
/// canonical table; if that misses, the original label is looked up directly.
/// Matching is case-sensitive. `None` when both lookups miss.
pub fn month_number(label: &str) -> Option<u32> {
    let normalized = MONTH_ALIASES
        .iter()
        .find(|(raw, _)| *raw == label)
        .map(|(_, abbr)| *abbr)
        .unwrap_or(label);
    abbr_to_number(normalized).or_else(|| abbr_to_number(label))
}

/// Derive the model feature record from one raw session. Pure and
/// deterministic; assumes the form already validated ranges and never fails —
/// an unresolvable month degrades to `month_number: None`.
pub fn derive(session: SessionRecord) -> FeatureRecord {
    let month_number = month_number(&session.month);

    let total_page_visits = session.administrative_pages
        + session.informational_pages
        + session.product_related_pages;
    let total_duration = session.administrative_duration
        + session.informational_duration
        + session.product_related_duration;

    // Guarded denominators: a zero-duration session divides by 1 minute, a
    // zero-visit session has zero engagement.
    let minutes = if total_duration > 0.0 {
        total_duration / 60.0
    } else {
        1.0
    };
    let pages_per_minute = f64::from(total_page_visits) / minutes;
    let product_engagement = if total_page_visits > 0 {
        f64::from(session.product_related_pages) / f64::from(total_page_visits)
    } else {
        0.0
    };

    FeatureRecord {
        session,
        month_number,
        total_page_visits,
        total_duration,
        pages_per_minute,
        product_engagement,
    }
}
