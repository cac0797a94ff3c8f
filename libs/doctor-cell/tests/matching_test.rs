use doctor_cell::models::DoctorRecord;
use doctor_cell::services::matching::{DoctorMatchingService, MAX_ALTERNATIVES};
use shared_utils::test_utils::{local_time, TestDoctor};

fn doctor(id: &str, speciality: &str) -> DoctorRecord {
    serde_json::from_value(TestDoctor::new(id, &format!("Dr. {}", id), speciality).to_json())
        .expect("fixture doctor should deserialize")
}

#[test]
fn test_recommends_same_speciality_excluding_current() {
    let current = doctor("doc1", "Dermatologist");
    let candidates = vec![
        doctor("doc1", "Dermatologist"),
        doctor("doc2", "Dermatologist"),
        doctor("doc3", "Neurologist"),
        doctor("doc4", "Dermatologist"),
    ];

    let now = local_time(2026, 10, 18, 9, 0);
    let alternatives = DoctorMatchingService::new().recommend_alternatives(&current, &candidates, now);

    let ids: Vec<&str> = alternatives.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["doc2", "doc4"]);
    assert!(alternatives.iter().all(|d| d.speciality == "Dermatologist"));
}

#[test]
fn test_recommendations_are_capped() {
    let current = doctor("doc1", "Pediatricians");
    let candidates: Vec<DoctorRecord> = (2..=8)
        .map(|n| doctor(&format!("doc{}", n), "Pediatricians"))
        .collect();

    let now = local_time(2026, 10, 18, 9, 0);
    let alternatives = DoctorMatchingService::new().recommend_alternatives(&current, &candidates, now);

    assert_eq!(alternatives.len(), MAX_ALTERNATIVES);
    assert_eq!(alternatives[0].id, "doc2");
    assert_eq!(alternatives[2].id, "doc4");
}

#[test]
fn test_alternatives_carry_next_available_label() {
    let current = doctor("doc1", "Gynecologist");
    let busy: DoctorRecord = serde_json::from_value(
        TestDoctor::new("doc2", "Dr. Busy", "Gynecologist")
            .with_booking("18_10_2026", "03:00 PM")
            .to_json(),
    )
    .unwrap();

    let now = local_time(2026, 10, 18, 14, 10);
    let alternatives = DoctorMatchingService::new().recommend_alternatives(&current, &[busy], now);

    assert_eq!(alternatives.len(), 1);
    assert_eq!(alternatives[0].next_available.as_deref(), Some("03:30 PM"));
}

#[test]
fn test_no_candidates_yields_no_recommendations() {
    let current = doctor("doc1", "Neurologist");
    let now = local_time(2026, 10, 18, 9, 0);

    assert!(DoctorMatchingService::new()
        .recommend_alternatives(&current, &[], now)
        .is_empty());
}
