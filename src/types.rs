use anyhow::Result;
use serde::{Deserialize, Serialize};

/// localStorage key the finder reads recent searches from on load.
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";

/// A persisted recent search, as the finder stores it client-side.
/// `radius` stays textual because that is how the page serializes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearchRecord {
    pub city: String,
    pub radius: String,
    pub fuel: String,
}

impl RecentSearchRecord {
    pub fn new(city: &str, radius: &str, fuel: &str) -> Self {
        Self {
            city: city.to_string(),
            radius: radius.to_string(),
            fuel: fuel.to_string(),
        }
    }

    /// The record the scenario seeds for a returning-user page load.
    pub fn sample() -> Self {
        Self::new("Firenze", "5", "benzina")
    }
}

/// Build the script that seeds `recentSearches` in localStorage. The write
/// is wrapped in try/catch so a disabled store never fails the page-side
/// evaluation; seeding is best-effort.
pub fn seed_script(records: &[RecentSearchRecord]) -> Result<String> {
    let payload = serde_json::to_string(records)?;
    Ok(format!(
        r#"(function() {{ try {{ localStorage.setItem("{RECENT_SEARCHES_KEY}", {payload:?}); }} catch (e) {{}} return true; }})()"#
    ))
}
