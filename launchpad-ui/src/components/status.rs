//! Launch status badge - maps a record's launch status to what the badge shows

use crate::components::icons::{CalendarIcon, ClockIcon, RocketIcon};
use crate::display_types::{ApplicationRecord, LaunchStatus, WeekCount};
use dioxus::prelude::*;

/// Visual category of a status badge
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusTone {
    /// Green - already launched
    Success,
    /// Blue - launching on a known date
    Info,
    /// Yellow - launching in a number of weeks
    Warning,
    /// Red - no launch information
    Danger,
}

impl StatusTone {
    pub fn badge_class(self) -> &'static str {
        match self {
            StatusTone::Success => {
                "bg-green-500/10 text-green-400 border-green-500/20 shadow-[0_0_10px_rgba(74,222,128,0.2)]"
            }
            StatusTone::Info => "bg-blue-500/10 text-blue-400 border-blue-500/20",
            StatusTone::Warning => "bg-yellow-500/10 text-yellow-400 border-yellow-500/20",
            StatusTone::Danger => "bg-red-500/10 text-red-400 border-red-500/20",
        }
    }
}

/// Icon drawn in front of the badge label
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusIcon {
    Rocket,
    Calendar,
    Clock,
    /// No icon, label only
    Blank,
}

/// Resolved badge content
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: String,
    pub tone: StatusTone,
    pub icon: StatusIcon,
}

/// Resolve the badge for a record. Total: missing or unknown statuses fall
/// through to "Coming Soon".
pub fn resolve_status(record: &ApplicationRecord) -> StatusDisplay {
    match record.launch_status {
        Some(LaunchStatus::Launched) => StatusDisplay {
            label: "Launched".to_string(),
            tone: StatusTone::Success,
            icon: StatusIcon::Rocket,
        },
        Some(LaunchStatus::ScheduledDate) => StatusDisplay {
            label: record.launch_date().unwrap_or("TBA").to_string(),
            tone: StatusTone::Info,
            icon: StatusIcon::Calendar,
        },
        Some(LaunchStatus::ScheduledWeeks) => StatusDisplay {
            label: weeks_label(record.launch_weeks.as_ref()),
            tone: StatusTone::Warning,
            icon: StatusIcon::Clock,
        },
        _ => StatusDisplay {
            label: "Coming Soon".to_string(),
            tone: StatusTone::Danger,
            icon: StatusIcon::Blank,
        },
    }
}

/// Count as given, then the unit; singular only for the number one
fn weeks_label(weeks: Option<&WeekCount>) -> String {
    let unit = if weeks.is_some_and(WeekCount::is_one) { "Week" } else { "Weeks" };
    match weeks {
        Some(n) => format!("{n} {unit}"),
        None => unit.to_string(),
    }
}

/// Rounded status pill shown over the card banner
#[component]
pub fn StatusBadge(status: StatusDisplay) -> Element {
    let tone_class = status.tone.badge_class();

    rsx! {
        span {
            class: "flex items-center gap-1.5 px-3 py-1 rounded-full text-[10px] font-bold uppercase tracking-wider border backdrop-blur-md {tone_class}",
            "data-testid": "status-badge",
            {
                match status.icon {
                    StatusIcon::Rocket => rsx! {
                        RocketIcon { class: "w-2.5 h-2.5" }
                    },
                    StatusIcon::Calendar => rsx! {
                        CalendarIcon { class: "w-2.5 h-2.5" }
                    },
                    StatusIcon::Clock => rsx! {
                        ClockIcon { class: "w-2.5 h-2.5" }
                    },
                    StatusIcon::Blank => rsx! {},
                }
            }
            "{status.label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launched() {
        let status = resolve_status(&ApplicationRecord::new("Orbit").launched());
        assert_eq!(status.label, "Launched");
        assert_eq!(status.tone, StatusTone::Success);
        assert_eq!(status.icon, StatusIcon::Rocket);
    }

    #[test]
    fn test_launched_ignores_auxiliary_fields() {
        let mut record = ApplicationRecord::new("Orbit").scheduled_in_weeks(4);
        record.launch_date = Some("June 1".to_string());
        record.launch_status = Some(LaunchStatus::Launched);
        assert_eq!(resolve_status(&record).label, "Launched");
    }

    #[test]
    fn test_scheduled_date_uses_date() {
        let status = resolve_status(&ApplicationRecord::new("Orbit").scheduled_on("March 3, 2026"));
        assert_eq!(status.label, "March 3, 2026");
        assert_eq!(status.tone, StatusTone::Info);
        assert_eq!(status.icon, StatusIcon::Calendar);
    }

    #[test]
    fn test_scheduled_date_empty_is_tba() {
        let status = resolve_status(&ApplicationRecord::new("Orbit").scheduled_on(""));
        assert_eq!(status.label, "TBA");
        assert_eq!(status.tone, StatusTone::Info);
    }

    #[test]
    fn test_scheduled_date_missing_is_tba() {
        let record = ApplicationRecord::new("Orbit").with_status(LaunchStatus::ScheduledDate);
        assert_eq!(resolve_status(&record).label, "TBA");
    }

    #[test]
    fn test_one_week_is_singular() {
        let status = resolve_status(&ApplicationRecord::new("Orbit").scheduled_in_weeks(1));
        assert_eq!(status.label, "1 Week");
        assert_eq!(status.tone, StatusTone::Warning);
        assert_eq!(status.icon, StatusIcon::Clock);
    }

    #[test]
    fn test_other_week_counts_are_plural() {
        for (weeks, expected) in [(2, "2 Weeks"), (0, "0 Weeks"), (12, "12 Weeks"), (-1, "-1 Weeks")] {
            let status = resolve_status(&ApplicationRecord::new("Orbit").scheduled_in_weeks(weeks));
            assert_eq!(status.label, expected);
        }
    }

    #[test]
    fn test_missing_week_count_shows_unit() {
        let record = ApplicationRecord::new("Orbit").with_status(LaunchStatus::ScheduledWeeks);
        assert_eq!(resolve_status(&record).label, "Weeks");
    }

    #[test]
    fn test_catalog_week_values_keep_their_text() {
        let cases = [
            (WeekCount::Fractional(1.0), "1 Week"),
            (WeekCount::Fractional(2.5), "2.5 Weeks"),
            (WeekCount::Text("3".into()), "3 Weeks"),
            (WeekCount::Text("1".into()), "1 Weeks"),
            (WeekCount::Text("soon".into()), "soon Weeks"),
        ];
        for (weeks, expected) in cases {
            let mut record = ApplicationRecord::new("Orbit").with_status(LaunchStatus::ScheduledWeeks);
            record.launch_weeks = Some(weeks);
            assert_eq!(resolve_status(&record).label, expected);
        }
    }

    #[test]
    fn test_coming_soon() {
        let status = resolve_status(&ApplicationRecord::new("Orbit").coming_soon());
        assert_eq!(status.label, "Coming Soon");
        assert_eq!(status.tone, StatusTone::Danger);
        assert_eq!(status.icon, StatusIcon::Blank);
    }

    #[test]
    fn test_unknown_and_missing_status_fall_back_to_coming_soon() {
        let unknown = ApplicationRecord::new("Orbit").with_status(LaunchStatus::Unrecognized);
        let missing = ApplicationRecord::new("Orbit");
        for record in [unknown, missing] {
            let status = resolve_status(&record);
            assert_eq!(status.label, "Coming Soon");
            assert_eq!(status.tone, StatusTone::Danger);
        }
    }
}
