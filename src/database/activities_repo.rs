use std::collections::BTreeMap;

use thiserror::Error;

use crate::database::seed;
use crate::models::Activity;

/// Coarse classification used by the web layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("activity '{activity}' not found")]
    ActivityNotFound { activity: String },
    #[error("participant '{email}' not found in activity '{activity}'")]
    ParticipantNotFound { activity: String, email: String },
    #[error("'{email}' is already signed up for '{activity}'")]
    AlreadySignedUp { activity: String, email: String },
}

impl DirectoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DirectoryError::ActivityNotFound { .. } => ErrorKind::NotFound,
            DirectoryError::ParticipantNotFound { .. } => ErrorKind::NotFound,
            DirectoryError::AlreadySignedUp { .. } => ErrorKind::Conflict,
        }
    }
}

/// In-memory mapping of activity name to activity.
///
/// The set of names is fixed at construction; only rosters change afterwards.
#[derive(Debug, Clone, Default)]
pub struct ActivityDirectory {
    activities: BTreeMap<String, Activity>,
}

impl ActivityDirectory {
    pub fn seeded() -> Self {
        Self::from_activities(seed::seed_activities())
    }

    pub fn from_activities(activities: impl IntoIterator<Item = (String, Activity)>) -> Self {
        Self {
            activities: activities.into_iter().collect(),
        }
    }

    pub fn list(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    pub fn get(&self, activity: &str) -> Option<&Activity> {
        self.activities.get(activity)
    }

    pub fn sign_up(&mut self, activity: &str, email: &str) -> Result<(), DirectoryError> {
        let entry = self.activity_mut(activity)?;
        if entry.has_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        entry.participants.push(email.to_string());
        Ok(())
    }

    pub fn remove_participant(
        &mut self,
        activity: &str,
        email: &str,
    ) -> Result<(), DirectoryError> {
        let entry = self.activity_mut(activity)?;
        let Some(pos) = entry.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::ParticipantNotFound {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        };
        entry.participants.remove(pos);
        Ok(())
    }

    fn activity_mut(&mut self, activity: &str) -> Result<&mut Activity, DirectoryError> {
        self.activities
            .get_mut(activity)
            .ok_or_else(|| DirectoryError::ActivityNotFound {
                activity: activity.to_string(),
            })
    }
}
