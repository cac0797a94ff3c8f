// libs/appointment-cell/src/services/booking.rs
use chrono::NaiveDateTime;
use tracing::{debug, info, warn};

use consultation_cell::models::TriageResult;
use consultation_cell::services::triage::TriageScorer;
use doctor_cell::models::{DaySlots, DoctorRecord, SlotIndexSelection};
use doctor_cell::services::availability::SlotGenerator;

use crate::models::{AppointmentError, BookingRequest};

#[derive(Debug, Clone, Default)]
pub struct AppointmentBookingService {
    slot_generator: SlotGenerator,
    triage_scorer: TriageScorer,
}

impl AppointmentBookingService {
    pub fn new() -> Self {
        Self {
            slot_generator: SlotGenerator::new(),
            triage_scorer: TriageScorer::new(),
        }
    }

    /// Regenerates the doctor's week at `now` and prepares the booking from it.
    pub fn prepare_at(
        &self,
        doctor: &DoctorRecord,
        now: NaiveDateTime,
        selection: &SlotIndexSelection,
        consultation: Option<&TriageResult>,
    ) -> Result<BookingRequest, AppointmentError> {
        let week = self.slot_generator.generate(now, &doctor.slots_booked);
        self.prepare_booking(doctor, &week, selection, consultation)
    }

    /// Turns a slot-picker selection into the booking write payload.
    ///
    /// Checks run in the order the booking screen reports them: consultation
    /// first, then the chosen time, then the slot itself. The submitted
    /// consultation must be exactly what its answers score to.
    pub fn prepare_booking(
        &self,
        doctor: &DoctorRecord,
        week: &[DaySlots],
        selection: &SlotIndexSelection,
        consultation: Option<&TriageResult>,
    ) -> Result<BookingRequest, AppointmentError> {
        debug!(
            "Preparing booking for doctor {}: day {} at '{}'",
            doctor.id, selection.day_index, selection.time
        );

        let consultation = consultation.ok_or(AppointmentError::ConsultationRequired)?;

        let rescored = self.triage_scorer.score(&consultation.answers).ok();
        if rescored.as_ref() != Some(consultation) {
            warn!(
                "Pre-consultation for doctor {} does not rescore to {} ({})",
                doctor.id, consultation.score, consultation.severity
            );
            return Err(AppointmentError::InvalidConsultation {
                score: consultation.score,
                severity: consultation.severity.to_string(),
            });
        }

        let time = selection.time.trim();
        if time.is_empty() {
            return Err(AppointmentError::SlotTimeRequired);
        }

        let day = week.get(selection.day_index).ok_or(AppointmentError::DayOutOfRange {
            day_index: selection.day_index,
            days: week.len(),
        })?;

        if !day.contains_label(time) {
            return Err(AppointmentError::SlotUnavailable {
                day_key: day.day_key.clone(),
                time: time.to_string(),
            });
        }

        info!(
            "Booking prepared for doctor {} on {} at {} ({})",
            doctor.id, day.day_key, time, consultation.severity
        );

        Ok(BookingRequest {
            doc_id: doctor.id.clone(),
            slot_date: day.day_key.clone(),
            slot_time: time.to_string(),
            pre_consultation: consultation.clone(),
        })
    }
}
