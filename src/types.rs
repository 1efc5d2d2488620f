use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Opaque. Minted as a v4 UUID, but any string read back from storage is kept as is.
    pub id: String,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub start_minutes: u32,
    pub end_minutes: u32,
    pub created_at: DateTime<Utc>,
}

/// A validated meeting slot. Minutes are counted from midnight and
/// `start_minutes < end_minutes <= 1440` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl Booking {
    pub fn from_slot(slot: Slot) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: slot.date,
            time: slot.time,
            duration: slot.duration,
            start_minutes: slot.start_minutes,
            end_minutes: slot.end_minutes,
            created_at: Utc::now(),
        }
    }

    /// Half-open interval test, only within the same date.
    pub fn overlaps(&self, slot: &Slot) -> bool {
        self.date == slot.date
            && slot.start_minutes < self.end_minutes
            && slot.end_minutes > self.start_minutes
    }
}
