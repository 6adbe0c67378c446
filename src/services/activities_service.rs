use thiserror::Error;

use crate::state::{AppState, Registry};

/// Roster mutation errors. The `Display` strings are the user-visible
/// `detail` messages returned by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student already signed up for an activity")]
    AlreadyEnrolled,
    #[error("Student is not signed up for this activity")]
    NotEnrolled,
}

/// Snapshot of the full registry for the activities listing.
pub async fn list_activities(state: &AppState) -> Registry {
    state.activities.read().await.clone()
}

/// Enroll `email` in `activity_name`.
///
/// The write lock is held across the duplicate scan and the append, so two
/// concurrent signups for the same email cannot both pass the check.
pub async fn sign_up(
    state: &AppState,
    activity_name: &str,
    email: &str,
) -> Result<(), RosterError> {
    let mut registry = state.activities.write().await;

    if !registry.contains_key(activity_name) {
        return Err(RosterError::ActivityNotFound);
    }

    // One activity per student: scan every participant list, not just the target's.
    let already_enrolled = registry
        .values()
        .any(|activity| activity.participants.iter().any(|p| p == email));
    if already_enrolled {
        return Err(RosterError::AlreadyEnrolled);
    }

    let activity = registry
        .get_mut(activity_name)
        .ok_or(RosterError::ActivityNotFound)?;
    activity.participants.push(email.to_string());

    Ok(())
}

/// Remove `email` from `activity_name`'s participant list.
pub async fn unregister(
    state: &AppState,
    activity_name: &str,
    email: &str,
) -> Result<(), RosterError> {
    let mut registry = state.activities.write().await;

    let activity = registry
        .get_mut(activity_name)
        .ok_or(RosterError::ActivityNotFound)?;

    let position = activity
        .participants
        .iter()
        .position(|p| p == email)
        .ok_or(RosterError::NotEnrolled)?;
    activity.participants.remove(position);

    Ok(())
}
