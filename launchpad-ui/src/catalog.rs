//! Catalog parsing
//!
//! The hosting site supplies its listing as JSON, either a bare array of
//! records or an object with an `apps` array.

use crate::display_types::ApplicationRecord;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

/// Catalog parsing errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unexpected catalog shape: {0}")]
    Shape(String),
}

#[derive(Deserialize)]
struct CatalogDocument {
    apps: Vec<ApplicationRecord>,
}

/// Parse a catalog document into records, in listing order.
///
/// Records with a missing or unknown launch status are kept; they render as
/// "Coming Soon".
pub fn parse_catalog(json: &str) -> Result<Vec<ApplicationRecord>, CatalogError> {
    let value: Value = serde_json::from_str(json)?;
    let records: Vec<ApplicationRecord> = if value.is_array() {
        serde_json::from_value(value)?
    } else if value.get("apps").is_some() {
        serde_json::from_value::<CatalogDocument>(value)?.apps
    } else if value.is_object() {
        return Err(CatalogError::Shape(
            "object without an \"apps\" array".to_string(),
        ));
    } else {
        return Err(CatalogError::Shape(format!(
            "expected an array or object, found {}",
            kind(&value)
        )));
    };

    for record in records.iter().filter(|r| r.has_unknown_status()) {
        warn!(
            "Application '{}' has no recognized launch status, showing Coming Soon",
            record.name
        );
    }
    debug!("Parsed catalog with {} applications", records.len());

    Ok(records)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::resolve_status;
    use crate::display_types::{LaunchStatus, WeekCount};

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    }

    #[test]
    fn test_parse_array() {
        init_logging();
        let json = r#"[
            { "name": "Orbit", "launchStatus": "Launched" },
            { "name": "Pulse", "launchStatus": "Coming in selected date", "launchDate": "May 4" }
        ]"#;
        let apps = parse_catalog(json).unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].name, "Orbit");
        assert_eq!(apps[1].launch_date(), Some("May 4"));
    }

    #[test]
    fn test_parse_object_with_apps() {
        init_logging();
        let json = r#"{ "apps": [ { "name": "Orbit", "launchStatus": "Coming Soon" } ] }"#;
        let apps = parse_catalog(json).unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].launch_status, Some(LaunchStatus::ComingSoon));
    }

    #[test]
    fn test_unknown_status_is_kept() {
        init_logging();
        let json = r#"[ { "name": "Orbit", "launchStatus": "Sunset" }, { "name": "Pulse" } ]"#;
        let apps = parse_catalog(json).unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].launch_status, Some(LaunchStatus::Unrecognized));
        assert_eq!(apps[1].launch_status, None);
    }

    #[test]
    fn test_fractional_weeks_do_not_reject_the_catalog() {
        init_logging();
        let json = r#"[
            { "name": "Orbit", "launchStatus": "Launched" },
            { "name": "Pulse", "launchStatus": "Coming in selected weeks", "launchWeeks": 1.0 }
        ]"#;
        let apps = parse_catalog(json).unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[1].launch_weeks, Some(WeekCount::Fractional(1.0)));
        assert_eq!(resolve_status(&apps[1]).label, "1 Week");
    }

    #[test]
    fn test_string_weeks_render_literally() {
        init_logging();
        let json = r#"[ { "name": "Pulse", "launchStatus": "Coming in selected weeks", "launchWeeks": "3" } ]"#;
        let apps = parse_catalog(json).unwrap();
        assert_eq!(apps[0].launch_weeks, Some(WeekCount::Text("3".into())));
        assert_eq!(resolve_status(&apps[0]).label, "3 Weeks");
    }

    #[test]
    fn test_numeric_status_falls_back_to_coming_soon() {
        init_logging();
        let json = r#"{ "apps": [ { "name": "Orbit", "launchStatus": 3 }, { "name": "Pulse", "launchStatus": "Launched" } ] }"#;
        let apps = parse_catalog(json).unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0].launch_status, Some(LaunchStatus::Unrecognized));
        assert_eq!(resolve_status(&apps[0]).label, "Coming Soon");
        assert_eq!(apps[1].launch_status, Some(LaunchStatus::Launched));
    }

    #[test]
    fn test_empty_catalog() {
        assert!(parse_catalog("[]").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_catalog("[{"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_missing_name_is_an_error() {
        assert!(matches!(
            parse_catalog(r#"[ { "launchStatus": "Launched" } ]"#),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_wrong_shape() {
        assert!(matches!(parse_catalog("42"), Err(CatalogError::Shape(_))));
        assert!(matches!(
            parse_catalog(r#"{ "items": [] }"#),
            Err(CatalogError::Shape(_))
        ));
    }
}
