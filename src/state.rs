use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Activity;

/// Mapping from activity name to its record.
pub type Registry = BTreeMap<String, Activity>;

/// Shared application state: the in-memory activities registry.
///
/// Handlers get a clone of this handle via the router state; tests build
/// isolated instances with [`AppState::from_registry`] instead of sharing a
/// process-wide map.
#[derive(Clone)]
pub struct AppState {
    pub activities: Arc<RwLock<Registry>>,
}

impl AppState {
    /// State seeded with the school's activity roster.
    pub fn new() -> Self {
        Self::from_registry(default_registry())
    }

    pub fn from_registry(registry: Registry) -> Self {
        Self {
            activities: Arc::new(RwLock::new(registry)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn default_registry() -> Registry {
    let mut registry = Registry::new();

    registry.insert(
        "Chess Club".to_string(),
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            participants: vec![
                "michael@mergington.edu".to_string(),
                "daniel@mergington.edu".to_string(),
            ],
        },
    );

    registry.insert(
        "Programming Class".to_string(),
        Activity {
            description: "Learn programming fundamentals and build software projects".to_string(),
            schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM".to_string(),
            max_participants: 20,
            participants: vec![
                "emma@mergington.edu".to_string(),
                "sophia@mergington.edu".to_string(),
            ],
        },
    );

    registry.insert(
        "Gym Class".to_string(),
        Activity {
            description: "Physical education and sports activities".to_string(),
            schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM".to_string(),
            max_participants: 30,
            participants: vec![
                "john@mergington.edu".to_string(),
                "olivia@mergington.edu".to_string(),
            ],
        },
    );

    registry
}
