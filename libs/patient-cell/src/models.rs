use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const GENDER_PLACEHOLDER: &str = "Select Gender";
pub const BLOOD_GROUP_PLACEHOLDER: &str = "Select Blood Group";
pub const MARITAL_STATUS_PLACEHOLDER: &str = "Select Marital Status";

pub const GENDER_OPTIONS: [&str; 4] = [GENDER_PLACEHOLDER, "Male", "Female", "Other"];
pub const BLOOD_GROUP_OPTIONS: [&str; 9] = [
    BLOOD_GROUP_PLACEHOLDER, "A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-",
];
pub const MARITAL_STATUS_OPTIONS: [&str; 5] = [
    MARITAL_STATUS_PLACEHOLDER, "Single", "Married", "Divorced", "Widowed",
];

/// Editable profile as the patient fills it in. Select fields hold their
/// placeholder until a choice is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    // Personal
    pub name: String,
    pub contact_number: String,
    pub email_id: String,
    pub gender: String,
    pub date_of_birth: String,
    pub blood_group: String,
    pub marital_status: String,
    pub height: String,
    pub weight: String,
    pub emergency_contact: String,
    pub location: String,

    // Medical
    pub allergies: String,
    pub current_medications: String,
    pub past_medications: String,
    pub chronic_diseases: String,
    pub injuries: String,
    pub surgeries: String,

    // Lifestyle
    pub smoking_habits: String,
    pub alcohol_consumption: String,
    pub activity_level: String,
    pub food_preference: String,
    pub occupation: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            contact_number: String::new(),
            email_id: String::new(),
            gender: GENDER_PLACEHOLDER.to_string(),
            date_of_birth: String::new(),
            blood_group: BLOOD_GROUP_PLACEHOLDER.to_string(),
            marital_status: MARITAL_STATUS_PLACEHOLDER.to_string(),
            height: String::new(),
            weight: String::new(),
            emergency_contact: String::new(),
            location: String::new(),
            allergies: String::new(),
            current_medications: String::new(),
            past_medications: String::new(),
            chronic_diseases: String::new(),
            injuries: String::new(),
            surgeries: String::new(),
            smoking_habits: String::new(),
            alcohol_consumption: String::new(),
            activity_level: String::new(),
            food_preference: String::new(),
            occupation: String::new(),
        }
    }
}

impl ProfileForm {
    pub const FIELD_COUNT: usize = 22;

    pub fn values(&self) -> [&str; Self::FIELD_COUNT] {
        [
            self.name.as_str(),
            self.contact_number.as_str(),
            self.email_id.as_str(),
            self.gender.as_str(),
            self.date_of_birth.as_str(),
            self.blood_group.as_str(),
            self.marital_status.as_str(),
            self.height.as_str(),
            self.weight.as_str(),
            self.emergency_contact.as_str(),
            self.location.as_str(),
            self.allergies.as_str(),
            self.current_medications.as_str(),
            self.past_medications.as_str(),
            self.chronic_diseases.as_str(),
            self.injuries.as_str(),
            self.surgeries.as_str(),
            self.smoking_habits.as_str(),
            self.alcohol_consumption.as_str(),
            self.activity_level.as_str(),
            self.food_preference.as_str(),
            self.occupation.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileOptions {
    pub gender: Vec<String>,
    pub blood_group: Vec<String>,
    pub marital_status: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: Option<String>,
    pub line2: Option<String>,
}

/// Stored patient as listed for clinic staff.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientRecord {
    pub name: String,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub blood_group: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<Address>,
    pub emergency_contact: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub allergies: Option<String>,
    pub current_medications: Option<String>,
    pub past_medications: Option<String>,
    pub chronic_diseases: Option<String>,
    pub injuries: Option<String>,
    pub surgeries: Option<String>,
    pub smoking_habits: Option<String>,
    pub alcohol_consumption: Option<String>,
    pub activity_level: Option<String>,
    pub food_preference: Option<String>,
    pub occupation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalSummary {
    pub name: String,
    pub age: Option<u32>,
    pub gender: String,
    pub blood_group: String,
    pub phone: String,
    pub email: String,
    pub address: Vec<String>,
    pub emergency_contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalSummary {
    pub height: String,
    pub weight: String,
    pub allergies: String,
    pub current_medications: String,
    pub past_medications: String,
    pub chronic_diseases: String,
    pub injuries: String,
    pub surgeries: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleSummary {
    pub smoking_habits: String,
    pub alcohol_consumption: String,
    pub activity_level: String,
    pub food_preference: String,
    pub occupation: String,
}

/// Display-ready patient details, grouped the way staff review them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub personal: PersonalSummary,
    pub medical: MedicalSummary,
    pub lifestyle: LifestyleSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientSummaryRequest {
    pub patient: PatientRecord,
    pub today: Option<NaiveDate>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatientError {
    #[error("'{value}' is not a valid {field}")]
    InvalidOption { field: &'static str, value: String },
}
