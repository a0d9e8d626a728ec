use crate::{error::Result, store::JsonStore};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use time::OffsetDateTime;

pub const FILE_NAME: &str = "log.json";

/// A record that a mood was reported. Kept even when the entry it came
/// with is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckIn {
    pub mood: String,
    #[serde(with = "time::serde::rfc3339")]
    pub at: OffsetDateTime,
}

impl CheckIn {
    pub fn now(mood: impl Into<String>) -> Self {
        Self {
            mood: mood.into(),
            at: OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()),
        }
    }
}

pub struct CheckInLog {
    store: JsonStore<CheckIn>,
    checkins: Vec<CheckIn>,
}

impl CheckInLog {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = JsonStore::new(path);
        let checkins = store.load()?;

        Ok(Self { store, checkins })
    }

    pub fn checkins(&self) -> &[CheckIn] {
        &self.checkins
    }

    pub fn record(&mut self, checkin: CheckIn) -> Result<()> {
        self.checkins.push(checkin);
        self.store.save(&self.checkins)
    }
}
