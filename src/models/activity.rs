use serde::{Deserialize, Serialize};

/// One extracurricular activity as exposed by the API.
///
/// `max_participants` is informational only; the frontend uses it to show
/// remaining spots, but signups past capacity are not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
}
