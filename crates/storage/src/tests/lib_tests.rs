use super::*;

fn fixed_now() -> DateTime<Utc> {
    "2024-03-01T09:30:00Z".parse().expect("timestamp")
}

#[test]
fn sample_data_seeds_three_lists_and_next_id() {
    let store = HospitalStore::with_sample_data(fixed_now());
    assert_eq!(store.queue_len(), 3);
    assert_eq!(store.wards().len(), 4);
    assert_eq!(store.inventory().len(), 4);
    assert_eq!(store.next_patient_id(), PatientId(4));

    let ids: Vec<_> = store.patients().iter().map(|p| p.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(store.patients()[1].wait_label(fixed_now()), "25 mins");
}

#[test]
fn empty_store_starts_counting_at_one() {
    let mut store = HospitalStore::new();
    let id = store
        .add_patient("Grace Hopper", "ENT", fixed_now())
        .expect("add");
    assert_eq!(id, PatientId(1));
    assert_eq!(store.next_patient_id(), PatientId(2));
}

#[test]
fn adding_patient_appends_with_increasing_id() {
    let mut store = HospitalStore::with_sample_data(fixed_now());
    let before = store.queue_len();

    let first = store
        .add_patient("Alan Turing", "General Medicine", fixed_now())
        .expect("first add");
    let second = store
        .add_patient("Ada Lovelace", "Cardiology", fixed_now())
        .expect("second add");

    assert_eq!(store.queue_len(), before + 2);
    assert!(second > first);
    let last = store.patients().last().expect("last patient");
    assert_eq!(last.id, second);
    assert_eq!(last.name, "Ada Lovelace");
    assert_eq!(last.wait_label(fixed_now()), "0 mins");
}

#[test]
fn add_trims_surrounding_whitespace() {
    let mut store = HospitalStore::new();
    let id = store
        .add_patient("  Alan Turing ", "\tENT  ", fixed_now())
        .expect("add");
    let patient = store.patient(id).expect("stored");
    assert_eq!(patient.name, "Alan Turing");
    assert_eq!(patient.department, "ENT");
}

#[test]
fn blank_fields_are_rejected_without_mutation() {
    let mut store = HospitalStore::with_sample_data(fixed_now());
    let snapshot = store.patients().to_vec();
    let next_id = store.next_patient_id();

    let err = store
        .add_patient("   ", "Cardiology", fixed_now())
        .expect_err("blank name");
    assert_eq!(err, RegistryError::BlankField { field: "name" });

    let err = store
        .add_patient("Alan Turing", "", fixed_now())
        .expect_err("blank department");
    assert_eq!(
        err,
        RegistryError::BlankField {
            field: "department"
        }
    );

    assert_eq!(store.patients(), snapshot.as_slice());
    assert_eq!(store.next_patient_id(), next_id);
}

#[test]
fn removing_patient_shrinks_queue_and_keeps_order() {
    let mut store = HospitalStore::with_sample_data(fixed_now());

    let removed = store.remove_patient(PatientId(2)).expect("remove");
    assert_eq!(removed.name, "Jane Smith");
    assert_eq!(store.queue_len(), 2);

    let names: Vec<_> = store.patients().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["John Doe", "Mike Johnson"]);
}

#[test]
fn removing_unknown_patient_reports_not_found() {
    let mut store = HospitalStore::with_sample_data(fixed_now());
    let err = store.remove_patient(PatientId(99)).expect_err("missing");
    assert_eq!(err, RegistryError::PatientNotFound(PatientId(99)));
    assert_eq!(err.code(), shared::error::ErrorCode::NotFound);
    assert_eq!(store.queue_len(), 3);
}

#[test]
fn identifiers_are_not_reused_after_removal() {
    let mut store = HospitalStore::new();
    let first = store.add_patient("A", "ENT", fixed_now()).expect("add");
    store.remove_patient(first).expect("remove");
    let second = store.add_patient("B", "ENT", fixed_now()).expect("add");
    assert_eq!(second, PatientId(2));
}

#[test]
fn search_filters_each_list_in_order() {
    let store = HospitalStore::with_sample_data(fixed_now());

    let hits: Vec<_> = store
        .search_patients("PEDIA")
        .into_iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(hits, vec!["Mike Johnson"]);
    assert_eq!(store.search_patients("").len(), 3);

    let wards: Vec<_> = store
        .search_wards("e")
        .into_iter()
        .map(|w| w.name())
        .collect();
    assert_eq!(wards, vec!["General", "Emergency", "Pediatric"]);

    let pieces: Vec<_> = store
        .search_inventory("pieces")
        .into_iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(pieces, vec!["Syringes", "Surgical Masks"]);
}

#[test]
fn bed_summary_totals_all_wards() {
    let store = HospitalStore::with_sample_data(fixed_now());
    let summary = store.bed_summary();
    assert_eq!(summary.total, 125);
    assert_eq!(summary.available, 38);
    assert_eq!(summary.occupied(), 87);
}

#[test]
fn registering_wards_and_items_appends_them() {
    let mut store = HospitalStore::new();
    store.add_ward(Ward::new("Maternity", 10, 10).expect("ward"));
    store.add_inventory_item(InventoryItem::new("Gloves", 300, "boxes"));
    assert_eq!(store.wards()[0].name(), "Maternity");
    assert_eq!(store.inventory()[0].unit, "boxes");
    assert_eq!(store.bed_summary().occupied(), 0);
}
