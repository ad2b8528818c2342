//! Typed values for activities and participants.

use std::fmt;

use activities_core::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

/// Name of an activity, the directory key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ActivityName(String);

impl ActivityName {
    /// Wrap a name exactly as given. Names are keys, so whitespace is
    /// significant and an unknown name simply fails the lookup.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A participant's email address.
///
/// Compared exactly on the trimmed input; no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self> {
        let email = raw.trim();
        if email.is_empty() {
            return Err(Error::Validation("email is required".to_string()));
        }
        if !EMAIL_RE.is_match(email) {
            return Err(Error::Validation(format!(
                "{:?} is not a valid email address",
                email
            )));
        }
        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One extracurricular activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    /// Advisory capacity. Signups are not limited by it.
    pub max_participants: u32,
    participants: Vec<Email>,
}

impl ActivityRecord {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Seed the roster. Repeated addresses keep their first position.
    pub fn with_participants(mut self, participants: impl IntoIterator<Item = Email>) -> Self {
        for email in participants {
            if !self.is_enrolled(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    /// Roster in signup order.
    pub fn participants(&self) -> &[Email] {
        &self.participants
    }

    pub fn is_enrolled(&self, email: &Email) -> bool {
        self.participants.contains(email)
    }

    pub(crate) fn enroll(&mut self, email: Email) -> Result<()> {
        if self.is_enrolled(&email) {
            return Err(Error::already_signed_up());
        }
        self.participants.push(email);
        Ok(())
    }

    pub(crate) fn withdraw(&mut self, email: &Email) -> Result<()> {
        let pos = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(Error::participant_not_found)?;
        self.participants.remove(pos);
        Ok(())
    }
}
