//! Demo data for the mock gallery
//!
//! Provides static fixture data for rendering cards without a backend.

use launchpad_ui::{parse_catalog, ApplicationRecord};
use std::sync::OnceLock;
use tracing::{error, info};

/// Embedded fixture catalog (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/apps.json");

static DEMO_APPS: OnceLock<Vec<ApplicationRecord>> = OnceLock::new();

/// Fixture applications, parsed on first use. A broken fixture logs and
/// yields an empty catalog so the gallery still loads.
pub fn get_apps() -> &'static [ApplicationRecord] {
    DEMO_APPS.get_or_init(|| match parse_catalog(FIXTURE_JSON) {
        Ok(apps) => {
            info!("Loaded {} demo applications", apps.len());
            apps
        }
        Err(e) => {
            error!("Failed to parse demo catalog: {}", e);
            Vec::new()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchpad_ui::LaunchStatus;

    #[test]
    fn test_fixture_parses() {
        let apps = parse_catalog(FIXTURE_JSON).unwrap();
        assert!(!apps.is_empty());
    }

    #[test]
    fn test_fixture_covers_every_status() {
        let apps = parse_catalog(FIXTURE_JSON).unwrap();
        for status in [
            LaunchStatus::Launched,
            LaunchStatus::ScheduledDate,
            LaunchStatus::ScheduledWeeks,
            LaunchStatus::ComingSoon,
        ] {
            assert!(
                apps.iter().any(|a| a.launch_status == Some(status)),
                "no fixture app with {:?}",
                status
            );
        }
    }
}
