use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

/// Stoppage-time annotation such as `" +2"` in `"45 +2'"` (the space is optional).
static STOPPAGE_TIME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s?\+\d{1,2}").expect("valid regex"));
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Markers identifying an event-log entry as a goal.
const GOAL_MARKERS: [&str; 2] = ["Goal", "penalty.scored"];

/// Remove stoppage-time annotations from an event-log entry.
pub(crate) fn strip_stoppage_time(entry: &str) -> String {
    STOPPAGE_TIME.replace_all(entry, "").into_owned()
}

/// Goal minutes of one team's event log, in log order.
///
/// Every number left in a goal entry after stripping stoppage time counts as a
/// minute, so an entry listing several goals yields several minutes. A number
/// that does not fit a minute fails the whole log.
pub(crate) fn goal_minutes<S: AsRef<str>>(entries: &[S]) -> Result<Vec<u16>> {
    let mut minutes = Vec::new();
    for entry in entries.iter().map(|entry| strip_stoppage_time(entry.as_ref())) {
        if !GOAL_MARKERS.iter().any(|marker| entry.contains(marker)) {
            continue;
        }
        for m in NUMBER.find_iter(&entry) {
            minutes.push(m.as_str().parse::<u16>()?);
        }
    }
    Ok(minutes)
}
