/// Positional XPath selectors for every element read from a match report page.
///
/// All layout knowledge lives here; a change on the site should only require
/// editing these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelectors {
    pub consent_banner: String,
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub full_time_score: String,
    pub half_time_score: String,
    /// Container whose `div` children are the home team's event-log entries.
    pub home_events: String,
    pub away_events: String,
    pub stats_tab: String,
    /// Matches once the statistics table has rendered rows.
    pub stats_table_rows: String,
}

const MATCH_HEADER: &str = r#"//*[@id="mainContent"]/div/section/div[2]/section"#;
const MATCH_CENTRE: &str = r#"//*[@id="mainContent"]/div/section[2]/div[2]/section"#;

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            consent_banner: "/html/body/section/div/div".to_string(),
            date: format!("{MATCH_HEADER}/div[1]/div/div[1]/div[1]"),
            home_team: format!("{MATCH_HEADER}/div[3]/div/div/div[1]/div[1]/a[2]/span[1]"),
            away_team: format!("{MATCH_HEADER}/div[3]/div/div/div[1]/div[3]/a[2]/span[1]"),
            full_time_score: format!("{MATCH_HEADER}/div[3]/div/div/div[1]/div[2]/div/div"),
            half_time_score: format!("{MATCH_CENTRE}/div[3]/div/div/div[2]/div"),
            home_events: format!("{MATCH_CENTRE}/div[3]/div/div/div[4]/div[1]"),
            away_events: format!("{MATCH_CENTRE}/div[3]/div/div/div[4]/div[2]"),
            stats_tab: "//ul[@class='tablist']//li[@data-tab-index='2']".to_string(),
            stats_table_rows: "//div[contains(@class,'mcStatsTab')]//table//tbody/tr".to_string(),
        }
    }
}

impl PageSelectors {
    /// XPath of the entries inside an event-log container.
    pub fn event_entries(container: &str) -> String {
        format!("{container}/div")
    }
}
