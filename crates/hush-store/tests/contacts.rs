use hush_core::domain::{ContactKind, MatchKind};
use hush_store::error::StoreErrorKind;
use hush_store::repo::{ContactNew, ContactUpdate, NumberNew};
use hush_store::Store;

fn contact(name: &str, kind: ContactKind, numbers: &[(&str, MatchKind)]) -> ContactNew {
    ContactNew {
        name: name.to_string(),
        kind,
        numbers: numbers
            .iter()
            .map(|(number, kind)| NumberNew {
                number: number.to_string(),
                kind: *kind,
            })
            .collect(),
    }
}

#[test]
fn contact_crud_roundtrip() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let created = store
        .contacts()
        .create(contact(
            "Office",
            ContactKind::Unclassified,
            &[("+1 (555) 123-4567", MatchKind::Equals)],
        ))
        .expect("create contact");

    let fetched = store
        .contacts()
        .get(created.id, true)
        .expect("get contact")
        .expect("contact exists");
    assert_eq!(fetched.name, "Office");
    assert_eq!(fetched.kind, ContactKind::Unclassified);
    assert_eq!(fetched.numbers.len(), 1);
    assert_eq!(fetched.numbers[0].number, "+15551234567");

    let updated = store
        .contacts()
        .update(
            created.id,
            ContactUpdate {
                name: Some("Front desk".to_string()),
                kind: Some(ContactKind::WhiteList),
            },
        )
        .expect("update contact");
    assert_eq!(updated.name, "Front desk");
    assert_eq!(updated.kind, ContactKind::WhiteList);

    store.contacts().delete(created.id).expect("delete contact");
    let missing = store.contacts().get(created.id, false).expect("get contact");
    assert!(missing.is_none());
}

#[test]
fn numbers_are_stored_normalized_and_ordered() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let created = store
        .contacts()
        .create(contact(
            "Clinic",
            ContactKind::Unclassified,
            &[
                ("555-9000", MatchKind::Equals),
                ("  (555) 1000 ", MatchKind::Equals),
            ],
        ))
        .expect("create contact");

    let numbers = store
        .contacts()
        .numbers_for_contact(created.id)
        .expect("list numbers");
    let values: Vec<&str> = numbers.iter().map(|n| n.number.as_str()).collect();
    assert_eq!(values, ["5551000", "5559000"]);
}

#[test]
fn deleting_a_contact_cascades_to_its_numbers() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let created = store
        .contacts()
        .create(contact(
            "Spam ring",
            ContactKind::Unclassified,
            &[("555", MatchKind::StartsWith), ("99", MatchKind::Contains)],
        ))
        .expect("create contact");

    store.contacts().delete(created.id).expect("delete contact");

    let orphans: i64 = store
        .connection()
        .query_row("SELECT COUNT(*) FROM contact_number;", [], |row| row.get(0))
        .expect("count numbers");
    assert_eq!(orphans, 0);
}

#[test]
fn add_and_remove_single_numbers() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let created = store
        .contacts()
        .create(contact("Courier", ContactKind::Unclassified, &[]))
        .expect("create contact");

    let added = store
        .contacts()
        .add_number(
            created.id,
            NumberNew {
                number: "555-0001".to_string(),
                kind: MatchKind::Equals,
            },
        )
        .expect("add number");
    assert_eq!(added.number, "5550001");

    store.contacts().remove_number(added.id).expect("remove number");
    let err = store
        .contacts()
        .remove_number(added.id)
        .expect_err("number already removed");
    assert_eq!(err.kind(), StoreErrorKind::NotFound);
}

#[test]
fn blank_names_and_numbers_are_rejected() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let err = store
        .contacts()
        .create(contact("   ", ContactKind::Unclassified, &[]))
        .expect_err("blank name");
    assert_eq!(err.kind(), StoreErrorKind::Core);

    let err = store
        .contacts()
        .create(contact(
            "Ghost",
            ContactKind::Unclassified,
            &[("()", MatchKind::Equals)],
        ))
        .expect_err("number normalizes to empty");
    assert_eq!(err.kind(), StoreErrorKind::Core);

    // The failed create rolled back the contact row too.
    let contacts = store.contacts().list_all(false).expect("list");
    assert!(contacts.is_empty());
}

#[test]
fn update_of_a_missing_contact_is_not_found() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    let err = store
        .contacts()
        .update(
            hush_core::domain::ContactId::from_i64(42),
            ContactUpdate {
                name: Some("Nobody".to_string()),
                ..Default::default()
            },
        )
        .expect_err("missing contact");
    assert_eq!(err.kind(), StoreErrorKind::NotFound);
}

#[test]
fn list_all_orders_by_name_case_insensitively() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    for name in ["zeta", "Alpha", "beta"] {
        store
            .contacts()
            .create(contact(name, ContactKind::Unclassified, &[]))
            .expect("create contact");
    }

    let contacts = store.contacts().list_all(false).expect("list");
    let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "beta", "zeta"]);
}
