use chrono::NaiveDate;
use tracing::debug;

use crate::models::{
    LifestyleSummary, MedicalSummary, PatientError, PatientRecord, PatientSummary,
    PersonalSummary, ProfileForm, ProfileOptions, BLOOD_GROUP_OPTIONS,
    BLOOD_GROUP_PLACEHOLDER, GENDER_OPTIONS, GENDER_PLACEHOLDER,
    MARITAL_STATUS_OPTIONS, MARITAL_STATUS_PLACEHOLDER,
};

const NOT_SPECIFIED: &str = "Not specified";
const NONE_SPECIFIED: &str = "None specified";
const NOT_PROVIDED: &str = "Not provided";

fn is_placeholder(value: &str) -> bool {
    value == GENDER_PLACEHOLDER
        || value == BLOOD_GROUP_PLACEHOLDER
        || value == MARITAL_STATUS_PLACEHOLDER
}

fn or_fallback(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => fallback.to_string(),
    }
}

/// Whole years between `date_of_birth` and `today`; `None` for a birth date
/// in the future.
pub fn calculate_age(date_of_birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(date_of_birth)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileService;

impl ProfileService {
    pub fn new() -> Self {
        Self
    }

    pub fn profile_options(&self) -> ProfileOptions {
        ProfileOptions {
            gender: GENDER_OPTIONS.iter().map(|s| s.to_string()).collect(),
            blood_group: BLOOD_GROUP_OPTIONS.iter().map(|s| s.to_string()).collect(),
            marital_status: MARITAL_STATUS_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Select fields must hold one of their listed options (the placeholder
    /// included).
    pub fn validate_form(&self, form: &ProfileForm) -> Result<(), PatientError> {
        let selects: [(&'static str, &str, &[&str]); 3] = [
            ("gender", form.gender.as_str(), &GENDER_OPTIONS[..]),
            ("blood group", form.blood_group.as_str(), &BLOOD_GROUP_OPTIONS[..]),
            ("marital status", form.marital_status.as_str(), &MARITAL_STATUS_OPTIONS[..]),
        ];

        for (field, value, options) in selects {
            if !options.contains(&value) {
                return Err(PatientError::InvalidOption {
                    field,
                    value: value.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Share of profile fields filled in, as a whole percentage.
    pub fn completion_percentage(&self, form: &ProfileForm) -> u8 {
        let filled = form
            .values()
            .iter()
            .filter(|value| !is_placeholder(value) && !value.trim().is_empty())
            .count();

        debug!("Profile has {} of {} fields filled", filled, ProfileForm::FIELD_COUNT);

        ((filled as f64 / ProfileForm::FIELD_COUNT as f64) * 100.0).round() as u8
    }

    pub fn summarize(&self, patient: &PatientRecord, today: NaiveDate) -> PatientSummary {
        let address: Vec<String> = patient
            .address
            .as_ref()
            .map(|address| {
                [&address.line1, &address.line2]
                    .into_iter()
                    .flatten()
                    .map(|line| line.trim())
                    .filter(|line| !line.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        PatientSummary {
            personal: PersonalSummary {
                name: patient.name.clone(),
                age: patient.dob.and_then(|dob| calculate_age(dob, today)),
                gender: or_fallback(&patient.gender, NOT_SPECIFIED),
                blood_group: or_fallback(&patient.blood_group, NOT_SPECIFIED),
                phone: patient.phone.clone().unwrap_or_default(),
                email: patient.email.clone().unwrap_or_default(),
                address,
                emergency_contact: or_fallback(&patient.emergency_contact, NOT_PROVIDED),
            },
            medical: MedicalSummary {
                height: or_fallback(&patient.height, NOT_SPECIFIED),
                weight: or_fallback(&patient.weight, NOT_SPECIFIED),
                allergies: or_fallback(&patient.allergies, NONE_SPECIFIED),
                current_medications: or_fallback(&patient.current_medications, NONE_SPECIFIED),
                past_medications: or_fallback(&patient.past_medications, NONE_SPECIFIED),
                chronic_diseases: or_fallback(&patient.chronic_diseases, NONE_SPECIFIED),
                injuries: or_fallback(&patient.injuries, NONE_SPECIFIED),
                surgeries: or_fallback(&patient.surgeries, NONE_SPECIFIED),
            },
            lifestyle: LifestyleSummary {
                smoking_habits: or_fallback(&patient.smoking_habits, NOT_SPECIFIED),
                alcohol_consumption: or_fallback(&patient.alcohol_consumption, NOT_SPECIFIED),
                activity_level: or_fallback(&patient.activity_level, NOT_SPECIFIED),
                food_preference: or_fallback(&patient.food_preference, NOT_SPECIFIED),
                occupation: or_fallback(&patient.occupation, NOT_SPECIFIED),
            },
        }
    }
}
