pub mod availability;
pub mod matching;

pub use availability::{day_key, format_slot_label, SlotGenerator};
pub use matching::DoctorMatchingService;
