use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;
use tracing::info;

use crate::database::{ActivityDirectory, DirectoryError};
use crate::models::Activity;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error("activity directory lock poisoned")]
    LockPoisoned,
}

/// Shared handle to the activity directory.
///
/// Cloning is cheap; all clones see the same directory. Writes are serialised
/// through a single lock.
#[derive(Debug, Clone)]
pub struct ActivitiesService {
    directory: Arc<RwLock<ActivityDirectory>>,
}

impl ActivitiesService {
    pub fn new(directory: ActivityDirectory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(ActivityDirectory::seeded())
    }

    pub fn list_activities(&self) -> Result<BTreeMap<String, Activity>, ServiceError> {
        let directory = self.directory.read().map_err(|_| ServiceError::LockPoisoned)?;
        Ok(directory.list().clone())
    }

    pub fn get_activity(&self, activity: &str) -> Result<Option<Activity>, ServiceError> {
        let directory = self.directory.read().map_err(|_| ServiceError::LockPoisoned)?;
        Ok(directory.get(activity).cloned())
    }

    pub fn sign_up(&self, activity: &str, email: &str) -> Result<String, ServiceError> {
        let mut directory = self.directory.write().map_err(|_| ServiceError::LockPoisoned)?;
        directory.sign_up(activity, email)?;
        info!(activity = %activity, email = %email, "participant signed up");
        Ok(format!("Signed up {} for {}", email, activity))
    }

    pub fn remove_participant(&self, activity: &str, email: &str) -> Result<String, ServiceError> {
        let mut directory = self.directory.write().map_err(|_| ServiceError::LockPoisoned)?;
        directory.remove_participant(activity, email)?;
        info!(activity = %activity, email = %email, "participant removed");
        Ok(format!("Removed {} from {}", email, activity))
    }
}

impl Default for ActivitiesService {
    fn default() -> Self {
        Self::seeded()
    }
}
