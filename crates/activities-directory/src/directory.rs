//! The activity directory store.

use activities_core::{Error, Result};
use parking_lot::RwLock;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::info;

use crate::seed;
use crate::types::{ActivityName, ActivityRecord, Email};

/// All activities keyed by name, in seed order.
///
/// One lock covers the whole map so each signup/unregister runs its
/// existence and roster checks and the mutation as a single step.
pub struct Directory {
    activities: RwLock<Vec<(ActivityName, ActivityRecord)>>,
}

/// Point-in-time copy of the directory. Serializes as a JSON object whose
/// keys keep directory order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySnapshot(Vec<(ActivityName, ActivityRecord)>);

impl DirectorySnapshot {
    pub fn get(&self, name: &str) -> Option<&ActivityRecord> {
        self.0
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, record)| record)
    }

    #[cfg(test)]
    fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }
}

impl Serialize for DirectorySnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, record) in &self.0 {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

impl Directory {
    /// Build a directory from records. A repeated name replaces the earlier
    /// record but keeps its position.
    pub fn new(records: impl IntoIterator<Item = (ActivityName, ActivityRecord)>) -> Self {
        let mut activities: Vec<(ActivityName, ActivityRecord)> = Vec::new();
        for (name, record) in records {
            match activities.iter_mut().find(|(n, _)| *n == name) {
                Some(slot) => slot.1 = record,
                None => activities.push((name, record)),
            }
        }
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Directory populated with the school's standard activity set.
    pub fn seeded() -> Result<Self> {
        Ok(Self::new(seed::mergington_activities()?))
    }

    /// Snapshot of every activity with its current roster.
    pub fn list(&self) -> DirectorySnapshot {
        DirectorySnapshot(self.activities.read().clone())
    }

    pub fn get(&self, name: &ActivityName) -> Option<ActivityRecord> {
        self.activities
            .read()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, record)| record.clone())
    }

    /// True when `name` is an activity key. Activities are never added or
    /// removed after construction.
    pub fn contains(&self, name: &ActivityName) -> bool {
        self.activities.read().iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    /// Append `email` to the activity's roster.
    ///
    /// Fails with `NotFound` for an unknown activity and
    /// `DuplicateRegistration` when the email is already enrolled.
    /// Capacity is not checked.
    pub fn signup(&self, activity: &ActivityName, email: Email) -> Result<()> {
        let mut activities = self.activities.write();
        let record = find_mut(&mut activities, activity)?;
        record.enroll(email.clone())?;
        info!("Signed up {} for {}", email, activity);
        Ok(())
    }

    /// Remove `email` from the activity's roster.
    ///
    /// Fails with `NotFound` for an unknown activity or an email that is
    /// not enrolled.
    pub fn unregister(&self, activity: &ActivityName, email: &Email) -> Result<()> {
        let mut activities = self.activities.write();
        let record = find_mut(&mut activities, activity)?;
        record.withdraw(email)?;
        info!("Unregistered {} from {}", email, activity);
        Ok(())
    }
}

fn find_mut<'a>(
    activities: &'a mut [(ActivityName, ActivityRecord)],
    name: &ActivityName,
) -> Result<&'a mut ActivityRecord> {
    activities
        .iter_mut()
        .find(|(n, _)| n == name)
        .map(|(_, record)| record)
        .ok_or_else(Error::activity_not_found)
}
