use std::str::FromStr;

use serde::Serialize;
use strum::{EnumCount, IntoEnumIterator};

/// The fixed checklist of in-match statistics emitted for every match.
///
/// Declaration order is the export column order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::EnumCount,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    #[strum(serialize = "possession_%")]
    #[serde(rename = "possession_%")]
    Possession,
    ShotsOnTarget,
    Shots,
    Touches,
    Passes,
    Tackles,
    Clearances,
    Corners,
    Offsides,
    YellowCards,
    RedCards,
    FoulsConceded,
}

impl Statistic {
    /// All checklist statistics in declared order.
    pub fn checklist() -> impl Iterator<Item = Statistic> {
        Statistic::iter()
    }

    /// Map a statistics-table label (e.g. `"Shots on target"`) to a checklist entry.
    ///
    /// Labels are normalized by lowercasing and replacing spaces with underscores.
    pub fn from_label(label: &str) -> Option<Statistic> {
        Statistic::from_str(&normalize_label(label)).ok()
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Normalize a statistics-table label into its column key.
pub fn normalize_label(label: &str) -> String {
    label.trim().replace(' ', "_").to_lowercase()
}

/// One value per checklist statistic for a single team.
///
/// Statistics never set stay at zero, so every instance is complete.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct TeamStats {
    values: [f64; Statistic::COUNT],
}

impl TeamStats {
    pub fn get(&self, stat: Statistic) -> f64 {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: Statistic, value: f64) {
        self.values[stat.index()] = value;
    }

    /// Values in checklist order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        Statistic::checklist().map(|stat| self.get(stat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_order_and_names() {
        let names: Vec<String> = Statistic::checklist().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            [
                "possession_%",
                "shots_on_target",
                "shots",
                "touches",
                "passes",
                "tackles",
                "clearances",
                "corners",
                "offsides",
                "yellow_cards",
                "red_cards",
                "fouls_conceded",
            ]
        );
        assert_eq!(Statistic::checklist().count(), Statistic::COUNT);
    }

    #[test]
    fn test_count_tracks_variants() {
        assert_eq!(<Statistic as EnumCount>::COUNT, 12);
        assert_eq!(TeamStats::default().values().count(), Statistic::iter().count());
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Statistic::from_label("Possession %"), Some(Statistic::Possession));
        assert_eq!(
            Statistic::from_label("Shots on target"),
            Some(Statistic::ShotsOnTarget)
        );
        assert_eq!(
            Statistic::from_label(" Fouls conceded "),
            Some(Statistic::FoulsConceded)
        );
        assert_eq!(Statistic::from_label("Expected goals"), None);
    }

    #[test]
    fn test_team_stats_default_to_zero() {
        let mut stats = TeamStats::default();
        stats.set(Statistic::Corners, 7.0);
        assert_eq!(stats.get(Statistic::Corners), 7.0);
        assert!(Statistic::checklist()
            .filter(|s| *s != Statistic::Corners)
            .all(|s| stats.get(s) == 0.0));
        assert_eq!(stats.values().count(), Statistic::COUNT);
    }
}
