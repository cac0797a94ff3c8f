// libs/doctor-cell/src/services/matching.rs
use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::models::{AlternateDoctor, DoctorRecord};
use crate::services::availability::SlotGenerator;

/// Most alternatives shown next to a consultation result.
pub const MAX_ALTERNATIVES: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct DoctorMatchingService {
    slot_generator: SlotGenerator,
}

impl DoctorMatchingService {
    pub fn new() -> Self {
        Self {
            slot_generator: SlotGenerator::new(),
        }
    }

    /// Doctors sharing the current doctor's speciality, excluding the current
    /// doctor, in candidate order and capped at [`MAX_ALTERNATIVES`].
    pub fn recommend_alternatives(
        &self,
        current: &DoctorRecord,
        candidates: &[DoctorRecord],
        now: NaiveDateTime,
    ) -> Vec<AlternateDoctor> {
        debug!(
            "Finding alternatives to doctor {} among {} candidates",
            current.id,
            candidates.len()
        );

        let alternatives: Vec<AlternateDoctor> = candidates
            .iter()
            .filter(|doctor| doctor.id != current.id && doctor.speciality == current.speciality)
            .take(MAX_ALTERNATIVES)
            .map(|doctor| AlternateDoctor {
                id: doctor.id.clone(),
                name: doctor.name.clone(),
                speciality: doctor.speciality.clone(),
                image: doctor.image.clone(),
                next_available: self
                    .slot_generator
                    .next_available(now, &doctor.slots_booked)
                    .map(|slot| slot.label),
            })
            .collect();

        info!(
            "Recommended {} alternative {} doctors",
            alternatives.len(),
            current.speciality
        );

        alternatives
    }
}
