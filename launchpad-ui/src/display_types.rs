//! Display types for UI components
//!
//! These types mirror the records supplied by the hosting catalog. They only
//! carry the fields a card needs, so the components work the same with real
//! catalog data or fixtures.
//!
//! Deserialization is permissive: a field of the wrong JSON type is kept as
//! text (or as an unrecognized status) instead of rejecting the record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Launch status of a listed application
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LaunchStatus {
    #[serde(rename = "Launched")]
    Launched,
    /// Launching on the date in `launch_date`
    #[serde(rename = "Coming in selected date")]
    ScheduledDate,
    /// Launching in `launch_weeks` weeks
    #[serde(rename = "Coming in selected weeks")]
    ScheduledWeeks,
    #[serde(rename = "Coming Soon")]
    ComingSoon,
    /// Any value this build does not know about, including non-strings
    Unrecognized,
}

impl LaunchStatus {
    /// Map a catalog status string; unknown strings are `Unrecognized`
    pub fn from_wire(value: &str) -> Self {
        match value {
            "Launched" => LaunchStatus::Launched,
            "Coming in selected date" => LaunchStatus::ScheduledDate,
            "Coming in selected weeks" => LaunchStatus::ScheduledWeeks,
            "Coming Soon" => LaunchStatus::ComingSoon,
            _ => LaunchStatus::Unrecognized,
        }
    }
}

impl<'de> Deserialize<'de> for LaunchStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => LaunchStatus::from_wire(&s),
            _ => LaunchStatus::Unrecognized,
        })
    }
}

/// Week count as the catalog gave it
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WeekCount {
    Whole(i64),
    Fractional(f64),
    /// Anything that is not a number, kept verbatim
    Text(String),
}

impl WeekCount {
    /// Only the number one is singular; the text "1" is not a number
    pub fn is_one(&self) -> bool {
        match self {
            WeekCount::Whole(n) => *n == 1,
            WeekCount::Fractional(f) => *f == 1.0,
            WeekCount::Text(_) => false,
        }
    }
}

impl fmt::Display for WeekCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekCount::Whole(n) => write!(f, "{n}"),
            WeekCount::Fractional(x) => write!(f, "{x}"),
            WeekCount::Text(s) => f.write_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for WeekCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(match &value {
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(whole), _) => WeekCount::Whole(whole),
                (None, Some(x)) => WeekCount::Fractional(x),
                (None, None) => WeekCount::Text(n.to_string()),
            },
            Value::String(s) => WeekCount::Text(s.clone()),
            other => WeekCount::Text(other.to_string()),
        })
    }
}

/// Optional text that tolerates numbers, booleans and the like
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// One listed application
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tagline: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub external_link: Option<String>,
    #[serde(default)]
    pub launch_status: Option<LaunchStatus>,
    /// Only meaningful for `LaunchStatus::ScheduledDate`
    #[serde(default, deserialize_with = "lenient_text")]
    pub launch_date: Option<String>,
    /// Only meaningful for `LaunchStatus::ScheduledWeeks`
    #[serde(default)]
    pub launch_weeks: Option<WeekCount>,
}

impl ApplicationRecord {
    /// Record with only a name; everything else absent
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tagline: None,
            description: None,
            external_link: None,
            launch_status: None,
            launch_date: None,
            launch_weeks: None,
        }
    }

    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = Some(link.into());
        self
    }

    pub fn with_status(mut self, status: LaunchStatus) -> Self {
        self.launch_status = Some(status);
        self
    }

    pub fn launched(self) -> Self {
        self.with_status(LaunchStatus::Launched)
    }

    pub fn scheduled_on(mut self, date: impl Into<String>) -> Self {
        self.launch_date = Some(date.into());
        self.with_status(LaunchStatus::ScheduledDate)
    }

    pub fn scheduled_in_weeks(mut self, weeks: i64) -> Self {
        self.launch_weeks = Some(WeekCount::Whole(weeks));
        self.with_status(LaunchStatus::ScheduledWeeks)
    }

    pub fn coming_soon(self) -> Self {
        self.with_status(LaunchStatus::ComingSoon)
    }

    pub fn tagline(&self) -> Option<&str> {
        present(&self.tagline)
    }

    pub fn description(&self) -> Option<&str> {
        present(&self.description)
    }

    pub fn external_link(&self) -> Option<&str> {
        present(&self.external_link)
    }

    pub fn launch_date(&self) -> Option<&str> {
        present(&self.launch_date)
    }

    /// True when the status is missing or not one of the known variants
    pub fn has_unknown_status(&self) -> bool {
        matches!(
            self.launch_status,
            None | Some(LaunchStatus::Unrecognized)
        )
    }
}

/// Optional text counts as present only when it is non-empty
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_names() {
        let json = r#"{
            "name": "Orbit",
            "tagline": "Track everything",
            "externalLink": "https://orbit.example",
            "launchStatus": "Coming in selected weeks",
            "launchWeeks": 3
        }"#;
        let record: ApplicationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Orbit");
        assert_eq!(record.launch_status, Some(LaunchStatus::ScheduledWeeks));
        assert_eq!(record.launch_weeks, Some(WeekCount::Whole(3)));
        assert_eq!(record.external_link(), Some("https://orbit.example"));
        assert_eq!(record.description(), None);
    }

    #[test]
    fn test_unknown_status_deserializes_to_unrecognized() {
        let json = r#"{ "name": "Orbit", "launchStatus": "Beta" }"#;
        let record: ApplicationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.launch_status, Some(LaunchStatus::Unrecognized));
        assert!(record.has_unknown_status());
    }

    #[test]
    fn test_missing_status_is_none() {
        let record: ApplicationRecord = serde_json::from_str(r#"{ "name": "Orbit" }"#).unwrap();
        assert_eq!(record.launch_status, None);
        assert!(record.has_unknown_status());
    }

    #[test]
    fn test_negative_weeks_accepted() {
        let json = r#"{ "name": "Orbit", "launchStatus": "Coming in selected weeks", "launchWeeks": -2 }"#;
        let record: ApplicationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.launch_weeks, Some(WeekCount::Whole(-2)));
    }

    #[test]
    fn test_odd_week_values_are_kept() {
        let weeks = |raw: &str| {
            let json = format!(r#"{{ "name": "Orbit", "launchWeeks": {raw} }}"#);
            serde_json::from_str::<ApplicationRecord>(&json)
                .unwrap()
                .launch_weeks
        };
        assert_eq!(weeks("1.0"), Some(WeekCount::Fractional(1.0)));
        assert_eq!(weeks("2.5"), Some(WeekCount::Fractional(2.5)));
        assert_eq!(weeks(r#""3""#), Some(WeekCount::Text("3".into())));
        assert_eq!(weeks("true"), Some(WeekCount::Text("true".into())));
        assert_eq!(weeks("null"), None);
    }

    #[test]
    fn test_week_count_singular_only_for_the_number_one() {
        assert!(WeekCount::Whole(1).is_one());
        assert!(WeekCount::Fractional(1.0).is_one());
        assert!(!WeekCount::Text("1".into()).is_one());
        assert!(!WeekCount::Whole(-1).is_one());
        assert_eq!(WeekCount::Fractional(1.0).to_string(), "1");
        assert_eq!(WeekCount::Fractional(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_non_string_status_is_unrecognized() {
        for raw in ["7", "true", "[]", r#"{"state":"Launched"}"#] {
            let json = format!(r#"{{ "name": "Orbit", "launchStatus": {raw} }}"#);
            let record: ApplicationRecord = serde_json::from_str(&json).unwrap();
            assert_eq!(record.launch_status, Some(LaunchStatus::Unrecognized), "{raw}");
        }
    }

    #[test]
    fn test_non_string_text_is_kept_as_text() {
        let json = r#"{ "name": "Orbit", "tagline": 42, "launchDate": false, "description": null }"#;
        let record: ApplicationRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.tagline(), Some("42"));
        assert_eq!(record.launch_date(), Some("false"));
        assert_eq!(record.description(), None);
    }

    #[test]
    fn test_empty_text_is_not_present() {
        let record = ApplicationRecord::new("Orbit")
            .with_tagline("")
            .with_description("")
            .with_link("");
        assert_eq!(record.tagline(), None);
        assert_eq!(record.description(), None);
        assert_eq!(record.external_link(), None);
    }

    #[test]
    fn test_builders_set_status() {
        assert_eq!(
            ApplicationRecord::new("a").scheduled_on("May 1").launch_status,
            Some(LaunchStatus::ScheduledDate)
        );
        assert!(!ApplicationRecord::new("a").launched().has_unknown_status());
    }
}
