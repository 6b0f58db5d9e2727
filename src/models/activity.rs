//! Dashboard recent-activity feed.
//!
//! The feed merges the most recent patient registrations with the most recent
//! tests, tags each with a display category, and keeps the newest five.

use chrono::NaiveDateTime;
use serde::Serialize;

/// How many rows each source query contributes.
pub const FEED_SOURCE_LIMIT: i64 = 3;
/// Maximum number of items in the merged feed.
pub const FEED_LIMIT: usize = 5;

/// Source row: a recently registered patient.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecentPatientRow {
    pub patient_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub registration_date: NaiveDateTime,
}

/// Source row: a recently dated test, joined with its patient's name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RecentTestRow {
    pub test_name: String,
    pub status: String,
    pub test_date: NaiveDateTime,
    pub first_name: String,
    pub last_name: String,
}

/// One entry of the feed, shaped for the dashboard widget.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: &'static str,
    pub description: String,
    pub timestamp: NaiveDateTime,
    pub icon: &'static str,
    pub icon_color: &'static str,
}

/// Fixed display attributes of a feed category.
struct ActivityDisplay {
    kind: &'static str,
    title: &'static str,
    icon: &'static str,
    icon_color: &'static str,
}

const PATIENT_REGISTERED: ActivityDisplay = ActivityDisplay {
    kind: "patient_registered",
    title: "New patient registered",
    icon: "fa-user-plus",
    icon_color: "purple",
};

/// Display category of a test entry, selected from its status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestActivityKind {
    Completed = 0,
    Scheduled = 1,
    InProgress = 2,
}

const TEST_DISPLAY: [ActivityDisplay; 3] = [
    ActivityDisplay {
        kind: "test_completed",
        title: "Test completed",
        icon: "fa-check-circle",
        icon_color: "green",
    },
    ActivityDisplay {
        kind: "test_scheduled",
        title: "Test scheduled",
        icon: "fa-calendar",
        icon_color: "orange",
    },
    ActivityDisplay {
        kind: "test_in_progress",
        title: "Test in progress",
        icon: "fa-flask",
        icon_color: "blue",
    },
];

impl TestActivityKind {
    /// Any status outside the two named ones counts as in-progress, so an
    /// unrecognized status degrades instead of erroring.
    pub fn from_status(status: &str) -> Self {
        match status {
            "Completed" => TestActivityKind::Completed,
            "Pending" => TestActivityKind::Scheduled,
            _ => TestActivityKind::InProgress,
        }
    }

    fn display(self) -> &'static ActivityDisplay {
        &TEST_DISPLAY[self as usize]
    }
}

impl From<RecentPatientRow> for ActivityItem {
    fn from(row: RecentPatientRow) -> Self {
        ActivityItem {
            kind: PATIENT_REGISTERED.kind,
            title: PATIENT_REGISTERED.title,
            description: format!(
                "{} {} - ID: {}",
                row.first_name, row.last_name, row.patient_id
            ),
            timestamp: row.registration_date,
            icon: PATIENT_REGISTERED.icon,
            icon_color: PATIENT_REGISTERED.icon_color,
        }
    }
}

impl From<RecentTestRow> for ActivityItem {
    fn from(row: RecentTestRow) -> Self {
        let display = TestActivityKind::from_status(&row.status).display();
        ActivityItem {
            kind: display.kind,
            title: display.title,
            description: format!("{} - {} {}", row.test_name, row.first_name, row.last_name),
            timestamp: row.test_date,
            icon: display.icon,
            icon_color: display.icon_color,
        }
    }
}

/// Merge both sources, newest first, capped at [`FEED_LIMIT`].
///
/// The sort is stable; equal timestamps keep patients ahead of tests, which
/// the dashboard does not depend on.
pub fn build_feed(patients: Vec<RecentPatientRow>, tests: Vec<RecentTestRow>) -> Vec<ActivityItem> {
    let mut feed: Vec<ActivityItem> = patients
        .into_iter()
        .map(ActivityItem::from)
        .chain(tests.into_iter().map(ActivityItem::from))
        .collect();
    feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    feed.truncate(FEED_LIMIT);
    feed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fake::faker::name::en::{FirstName, LastName};
    use fake::Fake;
    use test_case::test_case;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn patient(id: i64, day: u32) -> RecentPatientRow {
        RecentPatientRow {
            patient_id: id,
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
            registration_date: at(day),
        }
    }

    fn test_row(name: &str, status: &str, day: u32) -> RecentTestRow {
        RecentTestRow {
            test_name: name.to_string(),
            status: status.to_string(),
            test_date: at(day),
            first_name: FirstName().fake(),
            last_name: LastName().fake(),
        }
    }

    #[test_case("Completed", TestActivityKind::Completed)]
    #[test_case("Pending", TestActivityKind::Scheduled)]
    #[test_case("Scheduled", TestActivityKind::InProgress)]
    #[test_case("In Progress", TestActivityKind::InProgress)]
    #[test_case("Cancelled", TestActivityKind::InProgress)]
    #[test_case("anything else", TestActivityKind::InProgress)]
    fn status_maps_to_display_category(status: &str, expected: TestActivityKind) {
        assert_eq!(TestActivityKind::from_status(status), expected);
    }

    #[test]
    fn category_display_attributes() {
        let item = ActivityItem::from(test_row("CBC", "Completed", 1));
        assert_eq!(item.kind, "test_completed");
        assert_eq!(item.icon, "fa-check-circle");
        assert_eq!(item.icon_color, "green");

        let item = ActivityItem::from(test_row("CBC", "Pending", 1));
        assert_eq!(item.kind, "test_scheduled");
        assert_eq!(item.icon_color, "orange");
    }

    #[test]
    fn patient_description_carries_name_and_id() {
        let mut row = patient(42, 1);
        row.first_name = "Ada".to_string();
        row.last_name = "Lovelace".to_string();
        let item = ActivityItem::from(row);
        assert_eq!(item.description, "Ada Lovelace - ID: 42");
        assert_eq!(item.title, "New patient registered");
    }

    #[test]
    fn feed_is_newest_first_and_capped_at_five() {
        // Patients at days 1..3, tests at days 4..6: the newest entry is the
        // day-6 test and only five of the six survive.
        let patients = vec![patient(1, 1), patient(2, 2), patient(3, 3)];
        let tests = vec![
            test_row("CBC", "Pending", 4),
            test_row("MRI", "Completed", 5),
            test_row("X-Ray", "Scheduled", 6),
        ];

        let feed = build_feed(patients, tests);

        assert_eq!(feed.len(), FEED_LIMIT);
        assert_eq!(feed[0].description.split(" - ").next(), Some("X-Ray"));
        assert!(feed
            .windows(2)
            .all(|pair| pair[0].timestamp >= pair[1].timestamp));
        // The day-1 patient is the one that fell off.
        assert!(!feed.iter().any(|item| item.timestamp == at(1)));
    }

    #[test]
    fn short_sources_are_not_padded() {
        let feed = build_feed(vec![patient(1, 1)], vec![test_row("CBC", "Pending", 2)]);
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn json_field_names_match_the_dashboard() {
        let value = serde_json::to_value(ActivityItem::from(patient(7, 1))).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("type"));
        assert!(object.contains_key("iconColor"));
        assert!(!object.contains_key("icon_color"));
    }
}
