use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full catalog as returned by the list endpoint (key: activity name).
///
/// Fetched whole on every load and replaced wholesale after each mutation;
/// the client never patches it in place.
pub type ActivityCatalog = BTreeMap<String, Activity>;

/// A schedulable offering with a capacity and a roster of registered emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-text description
    pub description: String,

    /// Free-text schedule (e.g. "Fridays, 3:30 PM - 5:00 PM")
    pub schedule: String,

    /// Capacity; enforced by the server, displayed by the client
    pub max_participants: u32,

    /// Registered emails, in server order. Uniqueness is the server's job.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus current roster size. Computed, not stored.
    ///
    /// Saturates at zero so malformed data (roster over capacity) never
    /// renders a negative count.
    pub fn spots_left(&self) -> u32 {
        self.max_participants
            .saturating_sub(self.participants.len() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_club() -> Activity {
        Activity {
            description: "Learn strategies and compete in tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            participants: vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        }
    }

    #[test]
    fn spots_left_is_capacity_minus_roster() {
        assert_eq!(chess_club().spots_left(), 10);
    }

    #[test]
    fn spots_left_saturates_on_overfull_roster() {
        let mut activity = chess_club();
        activity.max_participants = 1;
        assert_eq!(activity.spots_left(), 0);
    }

    #[test]
    fn catalog_decodes_from_list_response() {
        let body = r#"{
            "Chess Club": {
                "description": "Learn strategies",
                "schedule": "Fridays, 3:30 PM - 5:00 PM",
                "max_participants": 12,
                "participants": ["michael@mergington.edu"]
            },
            "Art Studio": {
                "description": "Painting and drawing",
                "schedule": "Mondays, 4:00 PM - 5:30 PM",
                "max_participants": 8,
                "participants": []
            }
        }"#;

        let catalog: ActivityCatalog = serde_json::from_str(body).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog["Chess Club"].spots_left(), 11);
        assert!(catalog["Art Studio"].participants.is_empty());
    }

    #[test]
    fn missing_participants_defaults_to_empty() {
        let body = r#"{"description": "d", "schedule": "s", "max_participants": 5}"#;
        let activity: Activity = serde_json::from_str(body).unwrap();
        assert!(activity.participants.is_empty());
        assert_eq!(activity.spots_left(), 5);
    }
}
