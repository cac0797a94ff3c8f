use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use consultation_cell::models::TriageResult;
use doctor_cell::models::{DoctorRecord, SlotIndexSelection};

/// Payload handed to the booking write, which lives outside this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub doc_id: String,
    /// Day-key of the chosen day (`D_M_YYYY`).
    pub slot_date: String,
    pub slot_time: String,
    pub pre_consultation: TriageResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareBookingRequest {
    pub doctor: DoctorRecord,
    pub selection: SlotIndexSelection,
    pub consultation: Option<TriageResult>,
    pub now: Option<NaiveDateTime>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("Please complete the pre-consultation assessment first")]
    ConsultationRequired,

    #[error("Pre-consultation result (score {score}, {severity}) does not match its answers")]
    InvalidConsultation { score: u8, severity: String },

    #[error("Please select an appointment time")]
    SlotTimeRequired,

    #[error("Day index {day_index} is outside the {days}-day booking window")]
    DayOutOfRange { day_index: usize, days: usize },

    #[error("Slot {time} on {day_key} is not available")]
    SlotUnavailable { day_key: String, time: String },
}
