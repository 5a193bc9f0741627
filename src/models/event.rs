use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A published event. Dates and times are stored as the strings the client
/// sent; no cross-field ordering is enforced. Events are immutable once
/// inserted; no update or delete exists anywhere in the system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub venue: String,
    pub start_date: String,
    pub end_date: String,
    pub start_time: String,
    pub end_time: String,
    pub cost_type: String,
    pub description: Option<String>,
    /// Base64 payload with any data-URI prefix already stripped.
    pub image: Option<String>,
    /// Snapshot of the creating admin; renaming an admin later does not
    /// retroactively change past events.
    pub organizer_id: Uuid,
    pub organizer_name: String,
}

/// Conjunction of optional browse constraints. Absent fields impose no
/// constraint, so the empty filter matches every event.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Exact match on cost_type.
    pub cost_type: Option<String>,
    /// Case-insensitive substring match on venue.
    pub venue: Option<String>,
    /// Exact match on start_date.
    pub start_date: Option<String>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(cost_type) = &self.cost_type {
            if event.cost_type != *cost_type {
                return false;
            }
        }
        if let Some(venue) = &self.venue {
            if !event.venue.to_lowercase().contains(&venue.to_lowercase()) {
                return false;
            }
        }
        if let Some(start_date) = &self.start_date {
            if event.start_date != *start_date {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str, venue: &str, cost_type: &str, start_date: &str) -> Event {
        Event {
            id: Uuid::new_v4(),
            title: title.to_string(),
            venue: venue.to_string(),
            start_date: start_date.to_string(),
            end_date: start_date.to_string(),
            start_time: "10:00".to_string(),
            end_time: "18:00".to_string(),
            cost_type: cost_type.to_string(),
            description: None,
            image: None,
            organizer_id: Uuid::new_v4(),
            organizer_name: "Alice".to_string(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = EventFilter::default();
        assert!(filter.matches(&event("Expo", "City Hall", "Free", "2026-09-01")));
    }

    #[test]
    fn venue_match_is_case_insensitive_substring() {
        let filter = EventFilter {
            venue: Some("hall".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&event("Expo", "City Hall", "Free", "2026-09-01")));
        assert!(!filter.matches(&event("Expo", "Open Grounds", "Free", "2026-09-01")));
    }

    #[test]
    fn cost_type_match_is_exact() {
        let filter = EventFilter {
            cost_type: Some("Free".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&event("Expo", "City Hall", "Free", "2026-09-01")));
        assert!(!filter.matches(&event("Expo", "City Hall", "free", "2026-09-01")));
        assert!(!filter.matches(&event("Expo", "City Hall", "Paid", "2026-09-01")));
    }

    #[test]
    fn conjunction_requires_all_constraints() {
        let filter = EventFilter {
            cost_type: Some("Free".to_string()),
            venue: Some("hall".to_string()),
            start_date: Some("2026-09-01".to_string()),
        };
        assert!(filter.matches(&event("Expo", "City Hall", "Free", "2026-09-01")));
        assert!(!filter.matches(&event("Expo", "City Hall", "Free", "2026-09-02")));
    }
}
