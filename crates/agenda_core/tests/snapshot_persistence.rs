use std::rc::Rc;

use agenda_core::{
    decode_snapshot, encode_snapshot, Contact, MemorySlotStore, SlotStore, SqliteSlotStore, State,
    Store,
};
use uuid::Uuid;

fn sample_contact() -> Contact {
    Contact {
        id: Uuid::new_v4(),
        salutation: "Prof.".to_string(),
        full_name: "Elena Torres".to_string(),
        id_number: "10000007".to_string(),
        email: "elena.torres@example.com".to_string(),
        phone: "+56910000007".to_string(),
        photo: None,
    }
}

#[test]
fn every_mutation_writes_the_full_snapshot() {
    let slot = Rc::new(MemorySlotStore::new());
    let mut store = Store::open(Rc::clone(&slot));

    store.add_contact(sample_contact());

    let document = slot.read().unwrap().expect("mutation wrote the slot");
    let snapshot = decode_snapshot(&document).expect("written document decodes");
    assert_eq!(&snapshot, store.state());
}

#[test]
fn empty_slot_seeds_without_writing_at_open() {
    let slot = Rc::new(MemorySlotStore::new());
    let store = Store::open(Rc::clone(&slot));

    assert!(!store.events().is_empty());
    assert_eq!(slot.read().unwrap(), None);
}

#[test]
fn valid_snapshot_is_restored_not_seeded() {
    let mut snapshot = State::default();
    snapshot.contacts.push(sample_contact());
    let document = encode_snapshot(&snapshot).unwrap();

    let slot = Rc::new(MemorySlotStore::with_value(document));
    let store = Store::open(slot);

    assert_eq!(store.state(), &snapshot);
}

#[test]
fn empty_collections_snapshot_restores_as_empty() {
    let slot = Rc::new(MemorySlotStore::with_value(
        r#"{"events":[],"locations":[],"contacts":[]}"#,
    ));
    let store = Store::open(slot);

    assert!(store.events().is_empty());
    assert!(store.locations().is_empty());
    assert!(store.contacts().is_empty());
}

#[test]
fn corrupt_slot_falls_back_to_seed_and_survives_until_first_mutation() {
    let slot = Rc::new(MemorySlotStore::with_value("{not json"));
    let mut store = Store::open(Rc::clone(&slot));

    assert!(!store.contacts().is_empty());
    // The corrupt document is not proactively cleared at load time.
    assert_eq!(slot.read().unwrap().as_deref(), Some("{not json"));

    store.add_contact(sample_contact());
    let document = slot.read().unwrap().unwrap();
    assert!(decode_snapshot(&document).is_some());
}

#[test]
fn shape_invalid_slot_falls_back_to_seed() {
    let slot = Rc::new(MemorySlotStore::with_value(
        r#"{"events":[],"locations":[]}"#,
    ));
    let store = Store::open(slot);

    assert!(!store.events().is_empty());
    assert!(!store.contacts().is_empty());
}

#[test]
fn on_disk_slot_round_trips_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("agenda.db");
    let contact = sample_contact();

    {
        let slot = Rc::new(SqliteSlotStore::open(&path).unwrap());
        let mut store = Store::open(slot);
        store.load(State::default());
        store.add_contact(contact.clone());
    }

    let slot = Rc::new(SqliteSlotStore::open(&path).unwrap());
    let store = Store::open(slot);
    assert_eq!(store.contacts(), &[contact]);
}

#[test]
fn dangling_reference_persists_across_reopen() {
    let slot = Rc::new(MemorySlotStore::new());
    let mut store = Store::open(Rc::clone(&slot));

    let event = store.events()[0].clone();
    let location_id = event.location_id.expect("seed events carry a location");
    store.delete_location(location_id);

    let document = slot.read().unwrap().unwrap();
    let reopened = Store::open(Rc::new(MemorySlotStore::with_value(document)));
    let survivor = reopened.event(event.id).expect("event survives reopen");
    assert_eq!(survivor.location_id, Some(location_id));
    assert!(reopened.resolve_location(survivor).is_none());
}
