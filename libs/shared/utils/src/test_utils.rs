use std::collections::BTreeMap;
use std::sync::Arc;
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};

use shared_config::AppConfig;

pub struct TestConfig {
    pub server_host: String,
    pub server_port: u16,
    pub clinic_utc_offset_minutes: i32,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            server_host: "127.0.0.1".to_string(),
            server_port: 3000,
            clinic_utc_offset_minutes: 0,
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            server_host: self.server_host.clone(),
            server_port: self.server_port,
            clinic_utc_offset_minutes: self.clinic_utc_offset_minutes,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Clinic-local timestamp for fixtures. Panics on an impossible date.
pub fn local_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("fixture timestamp must be valid")
}

pub fn local_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date must be valid")
}

pub struct TestDoctor {
    pub id: String,
    pub name: String,
    pub speciality: String,
    pub slots_booked: BTreeMap<String, Vec<String>>,
}

impl Default for TestDoctor {
    fn default() -> Self {
        Self::new("doc1", "Dr. Richard James", "General physician")
    }
}

impl TestDoctor {
    pub fn new(id: &str, name: &str, speciality: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            speciality: speciality.to_string(),
            slots_booked: BTreeMap::new(),
        }
    }

    pub fn with_booking(mut self, day_key: &str, label: &str) -> Self {
        self.slots_booked
            .entry(day_key.to_string())
            .or_default()
            .push(label.to_string());
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "speciality": self.speciality,
            "degree": "MBBS",
            "experience": "4 Years",
            "about": "Committed to comprehensive primary care.",
            "fees": 50,
            "image": format!("https://cdn.example.com/doctors/{}.png", self.id),
            "slots_booked": self.slots_booked,
        })
    }
}

pub struct MockAnswers;

impl MockAnswers {
    pub fn all_high() -> Value {
        json!({
            "chestPain": "Yes",
            "breathing": "Yes",
            "fever": "High Fever (>102°F)",
            "consciousness": "Yes",
            "bleeding": "Yes",
            "pain": "Severe (8-10)"
        })
    }

    pub fn all_low() -> Value {
        json!({
            "chestPain": "No",
            "breathing": "No",
            "fever": "No Fever",
            "consciousness": "No",
            "bleeding": "No",
            "pain": "Mild/No Pain (0-3)"
        })
    }

    /// Scores 1+0+1+0+1+1 = 4.
    pub fn mixed() -> Value {
        json!({
            "chestPain": "Sometimes",
            "breathing": "No",
            "fever": "Mild Fever (99-102°F)",
            "consciousness": "No",
            "bleeding": "Minor",
            "pain": "Moderate (4-7)"
        })
    }

    pub fn without(question_id: &str) -> Value {
        let mut answers = Self::all_low();
        if let Some(map) = answers.as_object_mut() {
            map.remove(question_id);
        }
        answers
    }
}

pub struct MockPatientResponses;

impl MockPatientResponses {
    pub fn empty_profile_form() -> Value {
        json!({
            "name": "",
            "contact_number": "",
            "email_id": "",
            "gender": "Select Gender",
            "date_of_birth": "",
            "blood_group": "Select Blood Group",
            "marital_status": "Select Marital Status",
            "height": "",
            "weight": "",
            "emergency_contact": "",
            "location": "",
            "allergies": "",
            "current_medications": "",
            "past_medications": "",
            "chronic_diseases": "",
            "injuries": "",
            "surgeries": "",
            "smoking_habits": "",
            "alcohol_consumption": "",
            "activity_level": "",
            "food_preference": "",
            "occupation": ""
        })
    }

    pub fn patient_record(date_of_birth: &str) -> Value {
        json!({
            "name": "Jane Doe",
            "dob": date_of_birth,
            "gender": "Female",
            "phone": "+1 555 0100",
            "email": "jane@example.com",
            "address": { "line1": "57th Cross, Richmond", "line2": "Circle, Church Road, London" },
            "allergies": "Penicillin"
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = TestConfig::default();
        let app_config = config.to_app_config();

        assert_eq!(app_config.server_host, "127.0.0.1");
        assert_eq!(app_config.bind_address(), "127.0.0.1:3000");
        assert_eq!(app_config.clinic_utc_offset_minutes, 0);
    }

    #[test]
    fn test_doctor_bookings_group_by_day() {
        let doctor = TestDoctor::default()
            .with_booking("18_10_2026", "10:00 AM")
            .with_booking("18_10_2026", "10:30 AM");

        let json = doctor.to_json();
        assert_eq!(json["slots_booked"]["18_10_2026"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_answers_without_question() {
        let answers = MockAnswers::without("fever");
        assert!(answers.get("fever").is_none());
        assert_eq!(answers.as_object().map(|m| m.len()), Some(5));
    }
}
