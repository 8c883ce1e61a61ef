use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

pub type ContactId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
}

/// A candidate contact that has already passed validation and formatting.
/// The service assigns the id on a successful add.
#[derive(Debug, Clone)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// Issues contact ids from the millisecond epoch clock.
///
/// A raw timestamp can collide when two contacts are created within the
/// same millisecond, so issued ids are forced strictly increasing:
/// `max(now, last_issued + 1)`. Seed with the highest persisted id so a
/// reloaded collection never re-issues an id it already contains.
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    pub fn starting_after(last: ContactId) -> Self {
        Self {
            last: AtomicI64::new(last),
        }
    }

    pub fn next(&self) -> ContactId {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let id = if now > last { now } else { last + 1 };
            match self
                .last
                .compare_exchange(last, id, Ordering::SeqCst, Ordering::Relaxed)
            {
                Ok(_) => return id,
                Err(observed) => last = observed,
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::starting_after(0)
    }
}
