use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::season::{Season, YearMonth};

/// The span during which a member's results count.
///
/// Every field may be missing from the reference file. A missing `start` or
/// `end` leaves that side of the period open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipPeriod {
    #[serde(default)]
    pub start: Option<YearMonth>,
    #[serde(default)]
    pub end: Option<YearMonth>,
    /// Season the member joined. Older reference files omit it; the season
    /// containing `start` is used then.
    #[serde(default)]
    pub begin: Option<Season>,
}

impl MembershipPeriod {
    /// `begin`, else the season containing `start`, else `None`.
    pub fn begin_season(&self) -> Option<Season> {
        self.begin
            .or_else(|| self.start.map(Season::containing_month))
    }

    /// Whether the period ended before `now`. An open end never ends.
    pub fn has_ended(&self, now: YearMonth) -> bool {
        self.end.is_some_and(|end| end < now)
    }
}

/// Membership periods keyed by user, as loaded from `user_periods.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MembershipTable(HashMap<String, MembershipPeriod>);

impl MembershipTable {
    /// Wrap a map from user identifier to period.
    pub fn new(periods: HashMap<String, MembershipPeriod>) -> Self {
        Self(periods)
    }

    /// The period of `user`, if listed.
    pub fn get(&self, user: &str) -> Option<&MembershipPeriod> {
        self.0.get(user)
    }

    /// The season a user joined, or `default` when the user has no entry or
    /// the entry names neither `begin` nor `start`.
    pub fn begin_of(&self, user: &str, default: Season) -> Season {
        self.get(user)
            .and_then(MembershipPeriod::begin_season)
            .unwrap_or(default)
    }

    /// Users without an entry are always active.
    pub fn is_active(&self, user: &str, now: YearMonth) -> bool {
        self.get(user).is_none_or(|p| !p.has_ended(now))
    }

    /// Number of listed users.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when no member is listed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SeasonName;

    fn table() -> MembershipTable {
        serde_json::from_str(
            r#"{
                "ngng628": {"start": "202304", "end": "202503", "begin": "2023spring"},
                "Yufox": {"start": "202404", "end": "202803"},
                "konpeitoo11": {"start": "202407", "end": "202803", "begin": "2024summer"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_begin_of_member() {
        let table = table();
        let viewed = Season::new(2025, SeasonName::Spring);
        assert_eq!(table.begin_of("ngng628", viewed).to_string(), "2023spring");
        assert_eq!(table.begin_of("konpeitoo11", viewed).to_string(), "2024summer");
    }

    #[test]
    fn test_begin_defaults_to_start_month() {
        let table = table();
        let viewed = Season::new(2025, SeasonName::Spring);
        assert_eq!(table.begin_of("Yufox", viewed).to_string(), "2024spring");
    }

    #[test]
    fn test_begin_of_unknown_user_is_default() {
        let viewed = Season::new(2025, SeasonName::Summer);
        assert_eq!(table().begin_of("newcomer", viewed), viewed);
    }

    #[test]
    fn test_is_active() {
        let table = table();
        let now: YearMonth = "202510".parse().unwrap();
        assert!(!table.is_active("ngng628", now));
        assert!(table.is_active("Yufox", now));
        assert!(table.is_active("newcomer", now));
        assert!(table.is_active("ngng628", "202503".parse().unwrap()));
    }

    #[test]
    fn test_incomplete_entries_decode() {
        let table: MembershipTable = serde_json::from_str(
            r#"{
                "lX57": {"start": "202304", "end": "202703", "begin": "2023spring"},
                "newbie": {"begin": "2025spring"},
                "blank": {}
            }"#,
        )
        .unwrap();
        let viewed = Season::new(2025, SeasonName::Autumn);
        let now: YearMonth = "202510".parse().unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.begin_of("newbie", viewed).to_string(), "2025spring");
        assert!(table.is_active("newbie", now));
        assert_eq!(table.begin_of("blank", viewed), viewed);
        assert!(table.is_active("blank", now));
        assert_eq!(table.begin_of("lX57", viewed).to_string(), "2023spring");
    }

    #[test]
    fn test_malformed_period_is_rejected() {
        let result: Result<MembershipTable, _> =
            serde_json::from_str(r#"{"a": {"start": "2023-04", "end": "202803"}}"#);
        assert!(result.is_err());
    }
}
