use assert_matches::assert_matches;

use patient_cell::models::{PatientError, PatientRecord, ProfileForm};
use patient_cell::services::profile::{calculate_age, ProfileService};
use shared_utils::test_utils::{local_date, MockPatientResponses};

#[test]
fn test_empty_form_is_zero_percent_complete() {
    let form: ProfileForm = serde_json::from_value(MockPatientResponses::empty_profile_form()).unwrap();

    assert_eq!(form, ProfileForm::default());
    assert_eq!(ProfileService::new().completion_percentage(&form), 0);
}

#[test]
fn test_placeholders_and_blank_values_do_not_count() {
    let form = ProfileForm {
        name: "Jane Doe".to_string(),
        email_id: "   ".to_string(),
        gender: "Female".to_string(),
        ..ProfileForm::default()
    };

    // 2 of 22 fields → 9.09% rounds to 9
    assert_eq!(ProfileService::new().completion_percentage(&form), 9);
}

#[test]
fn test_completion_rounds_to_nearest_percent() {
    let form = ProfileForm {
        name: "Jane Doe".to_string(),
        contact_number: "+1 555 0100".to_string(),
        email_id: "jane@example.com".to_string(),
        ..ProfileForm::default()
    };

    // 3 of 22 fields → 13.6% rounds to 14
    assert_eq!(ProfileService::new().completion_percentage(&form), 14);
}

#[test]
fn test_full_form_is_complete() {
    let mut form = ProfileForm::default();
    form.gender = "Other".to_string();
    form.blood_group = "AB-".to_string();
    form.marital_status = "Single".to_string();
    for field in [
        &mut form.name, &mut form.contact_number, &mut form.email_id, &mut form.date_of_birth,
        &mut form.height, &mut form.weight, &mut form.emergency_contact, &mut form.location,
        &mut form.allergies, &mut form.current_medications, &mut form.past_medications,
        &mut form.chronic_diseases, &mut form.injuries, &mut form.surgeries,
        &mut form.smoking_habits, &mut form.alcohol_consumption, &mut form.activity_level,
        &mut form.food_preference, &mut form.occupation,
    ] {
        *field = "filled".to_string();
    }

    assert_eq!(ProfileService::new().completion_percentage(&form), 100);
}

#[test]
fn test_unknown_select_value_is_rejected() {
    let form = ProfileForm {
        blood_group: "Z+".to_string(),
        ..ProfileForm::default()
    };

    assert_matches!(
        ProfileService::new().validate_form(&form),
        Err(PatientError::InvalidOption { field: "blood group", .. })
    );
    assert!(ProfileService::new().validate_form(&ProfileForm::default()).is_ok());
}

#[test]
fn test_options_lead_with_placeholder() {
    let options = ProfileService::new().profile_options();

    assert_eq!(options.gender, vec!["Select Gender", "Male", "Female", "Other"]);
    assert_eq!(options.blood_group.len(), 9);
    assert_eq!(options.marital_status[0], "Select Marital Status");
}

#[test]
fn test_age_counts_completed_years() {
    let dob = local_date(1990, 6, 15);

    assert_eq!(calculate_age(dob, local_date(2026, 6, 14)), Some(35));
    assert_eq!(calculate_age(dob, local_date(2026, 6, 15)), Some(36));
    assert_eq!(calculate_age(dob, local_date(1990, 6, 15)), Some(0));
    assert_eq!(calculate_age(dob, local_date(1989, 1, 1)), None);
}

#[test]
fn test_summary_fills_display_fallbacks() {
    let patient: PatientRecord =
        serde_json::from_value(MockPatientResponses::patient_record("1990-06-15")).unwrap();

    let summary = ProfileService::new().summarize(&patient, local_date(2026, 10, 18));

    assert_eq!(summary.personal.name, "Jane Doe");
    assert_eq!(summary.personal.age, Some(36));
    assert_eq!(summary.personal.gender, "Female");
    assert_eq!(summary.personal.blood_group, "Not specified");
    assert_eq!(summary.personal.emergency_contact, "Not provided");
    assert_eq!(summary.personal.address.len(), 2);
    assert_eq!(summary.medical.allergies, "Penicillin");
    assert_eq!(summary.medical.surgeries, "None specified");
    assert_eq!(summary.lifestyle.occupation, "Not specified");
}

#[test]
fn test_contact_details_are_shown_as_stored() {
    let patient = PatientRecord {
        name: "John Roe".to_string(),
        phone: Some("  ".to_string()),
        ..PatientRecord::default()
    };

    let summary = ProfileService::new().summarize(&patient, local_date(2026, 10, 18));

    assert_eq!(summary.personal.phone, "  ");
    assert_eq!(summary.personal.email, "");
    assert_eq!(summary.personal.emergency_contact, "Not provided");
    assert_eq!(summary.personal.age, None);
}
