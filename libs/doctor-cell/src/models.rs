use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Booked time labels keyed by day-key (`D_M_YYYY`).
pub type BookedSlotIndex = HashMap<String, HashSet<String>>;

/// Clinic working hours. Fixed, not configurable per doctor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHoursPolicy {
    pub start_hour: u32,
    pub end_hour: u32,
    pub slot_minutes: i64,
}

impl WorkingHoursPolicy {
    pub const STANDARD: WorkingHoursPolicy = WorkingHoursPolicy {
        start_hour: 10,
        end_hour: 21,
        slot_minutes: 30,
    };
}

impl Default for WorkingHoursPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Doctor record as handed over by the directory service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub id: String,
    pub name: String,
    pub speciality: String,
    pub degree: Option<String>,
    pub experience: Option<String>,
    pub about: Option<String>,
    pub fees: Option<f64>,
    pub image: Option<String>,
    #[serde(default)]
    pub slots_booked: BookedSlotIndex,
}

impl DoctorRecord {
    pub fn is_booked(&self, day_key: &str, label: &str) -> bool {
        self.slots_booked
            .get(day_key)
            .is_some_and(|labels| labels.contains(label))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub date_time: NaiveDateTime,
    pub label: String,
}

/// Bookable slots of one calendar day, in increasing time order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub day_key: String,
    pub weekday: String,
    pub slots: Vec<TimeSlot>,
}

impl DaySlots {
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.slots.iter().any(|slot| slot.label == label)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.label.as_str())
    }
}

/// Chosen day (0 = today) and time label within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotIndexSelection {
    pub day_index: usize,
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternateDoctor {
    pub id: String,
    pub name: String,
    pub speciality: String,
    pub image: Option<String>,
    pub next_available: Option<String>,
}

// Request bodies

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotQueryRequest {
    pub doctor: DoctorRecord,
    pub now: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub doctor: DoctorRecord,
    #[serde(default)]
    pub candidates: Vec<DoctorRecord>,
    pub now: Option<NaiveDateTime>,
}
