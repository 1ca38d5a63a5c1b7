use chrono::{Duration, Utc};
use shared::{domain::PatientId, error::RegistryError};
use storage::HospitalStore;

#[test]
fn front_desk_shift_add_remove_and_reject_acceptance() {
    let start = Utc::now();
    let mut store = HospitalStore::with_sample_data(start);

    let walk_in = store
        .add_patient("Walk In", "General Medicine", start)
        .expect("walk-in");
    assert_eq!(walk_in, PatientId(4));

    let referral = store
        .add_patient("Referral", "ENT", start + Duration::minutes(5))
        .expect("referral");
    assert_eq!(referral, PatientId(5));
    assert_eq!(store.queue_len(), 5);

    // John Doe is called in.
    store.remove_patient(PatientId(1)).expect("seen");
    assert_eq!(store.queue_len(), 4);
    assert!(store.patient(PatientId(1)).is_none());

    // A half-filled form changes nothing.
    assert!(matches!(
        store.add_patient("", "ENT", start),
        Err(RegistryError::BlankField { field: "name" })
    ));
    assert_eq!(store.queue_len(), 4);

    // Removing the same patient twice is a stale selection.
    assert_eq!(
        store.remove_patient(PatientId(1)),
        Err(RegistryError::PatientNotFound(PatientId(1)))
    );

    let later = start + Duration::minutes(30);
    let waits: Vec<_> = store
        .patients()
        .iter()
        .map(|p| (p.id.0, p.wait_label(later)))
        .collect();
    assert_eq!(
        waits,
        vec![
            (2, "55 mins".to_string()),
            (3, "40 mins".to_string()),
            (4, "30 mins".to_string()),
            (5, "25 mins".to_string()),
        ]
    );

    let next = store.add_patient("Late", "Cardiology", later).expect("late");
    assert_eq!(next, PatientId(6));
}
