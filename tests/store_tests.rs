//! Store-level tests for roster semantics.
//!
//! Each test builds its own store, so nothing leaks between cases.

use mcp_character_server::store::{Character, CharacterStore};

#[test]
fn sequential_creates_assign_sequential_ids() {
    let mut store = CharacterStore::new();

    store.create("Luke Skywalker", Some(23));
    store.create("Darth Vader", Some(45));
    store.create("Leia Organa", Some(23));

    let roster = store.list();
    assert_eq!(roster.len(), 3, "three creates should yield three records");

    let ids: Vec<&str> = roster.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"], "ids follow insertion count");

    let names: Vec<&str> = roster.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Luke Skywalker", "Darth Vader", "Leia Organa"],
        "listing preserves insertion order"
    );
}

#[test]
fn get_returns_the_created_record() {
    let mut store = CharacterStore::new();
    let created = store.create("Obi-Wan Kenobi", Some(57));

    assert_eq!(store.get("1"), Some(created));
    assert_eq!(store.get("2"), None, "unknown id is an ordinary miss");
}

#[test]
fn returned_records_are_snapshots() {
    let mut store = CharacterStore::new();
    let before = store.create("Anakin Skywalker", Some(22));

    store
        .update("1", Some("Darth Vader".to_string()), None)
        .expect("record exists");

    assert_eq!(before.name, "Anakin Skywalker", "earlier snapshot is unaffected");
    assert_eq!(store.get("1").unwrap().name, "Darth Vader");
}

#[test]
fn create_without_age_leaves_age_absent() {
    let mut store = CharacterStore::with_seed_roster();
    let created = store.create("Yoda", None);

    assert_eq!(
        created,
        Character {
            id: "3".to_string(),
            name: "Yoda".to_string(),
            age: None,
        }
    );

    let json = serde_json::to_string(&created).unwrap();
    assert_eq!(
        json, r#"{"id":"3","name":"Yoda"}"#,
        "absent age must be omitted from the wire shape"
    );
}

#[test]
fn create_accepts_empty_name() {
    let mut store = CharacterStore::new();
    let created = store.create("", None);

    assert_eq!(created.name, "", "no name validation is performed");
    assert_eq!(store.len(), 1);
}

#[test]
fn update_changes_only_supplied_fields() {
    let mut store = CharacterStore::new();
    store.create("Luke Skywalker", Some(23));

    let updated = store
        .update("1", Some("Luke".to_string()), None)
        .expect("record exists");

    assert_eq!(updated.name, "Luke");
    assert_eq!(updated.age, Some(23), "age untouched by a name-only update");

    let updated = store.update("1", None, Some(24)).expect("record exists");
    assert_eq!(updated.name, "Luke", "name untouched by an age-only update");
    assert_eq!(updated.age, Some(24));
}

#[test]
fn update_ignores_zero_age() {
    let mut store = CharacterStore::new();
    store.create("Luke Skywalker", Some(23));

    let updated = store.update("1", None, Some(0)).expect("record exists");
    assert_eq!(updated.age, Some(23), "zero age counts as omitted");
}

#[test]
fn update_ignores_empty_name() {
    let mut store = CharacterStore::new();
    store.create("Luke Skywalker", Some(23));

    let updated = store.update("1", Some(String::new()), Some(24)).expect("record exists");
    assert_eq!(updated.name, "Luke Skywalker", "empty name counts as omitted");
    assert_eq!(updated.age, Some(24), "the other field is still applied");
}

#[test]
fn update_can_set_age_on_ageless_record() {
    let mut store = CharacterStore::new();
    store.create("Yoda", None);

    let updated = store.update("1", None, Some(900)).expect("record exists");
    assert_eq!(updated.age, Some(900));
}

#[test]
fn update_unknown_id_returns_none() {
    let mut store = CharacterStore::new();
    store.create("Luke Skywalker", Some(23));

    assert_eq!(store.update("7", Some("Han".to_string()), None), None);
    assert_eq!(
        store.get("1").unwrap().name,
        "Luke Skywalker",
        "failed update must not touch other records"
    );
}

#[test]
fn delete_removes_the_record_permanently() {
    let mut store = CharacterStore::with_seed_roster();

    let removed = store.delete("2").expect("record exists");
    assert_eq!(removed.name, "Darth Vader");

    assert_eq!(store.get("2"), None, "deleted id no longer resolves");
    assert_eq!(store.len(), 1);
    assert_eq!(store.delete("2"), None, "repeated delete fails identically");
}

#[test]
fn delete_preserves_order_of_remaining_records() {
    let mut store = CharacterStore::new();
    store.create("Luke Skywalker", Some(23));
    store.create("Darth Vader", Some(45));
    store.create("Leia Organa", Some(23));

    store.delete("2").expect("record exists");

    let names: Vec<&str> = store.list().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Luke Skywalker", "Leia Organa"]);
}

#[test]
fn delete_unknown_id_returns_none() {
    let mut store = CharacterStore::new();
    assert_eq!(store.delete("1"), None);
    assert!(store.is_empty());
}

// Size-based id assignment re-issues an id after a delete shrinks the
// roster. This scenario pins the behavior down so a change to the id
// algorithm shows up as a test failure, not a silent break.
#[test]
fn delete_then_create_reissues_an_id() {
    let mut store = CharacterStore::with_seed_roster();

    let removed = store.delete("1").expect("seed record exists");
    assert_eq!(removed.name, "Luke Skywalker");
    assert_eq!(store.len(), 1);

    let created = store.create("Leia", Some(23));
    assert_eq!(
        created,
        Character {
            id: "2".to_string(),
            name: "Leia".to_string(),
            age: Some(23),
        }
    );

    // Both the surviving seed record and the new one now carry id "2";
    // lookups resolve to the earlier record.
    let duplicates: Vec<&Character> = store.list().iter().filter(|c| c.id == "2").collect();
    assert_eq!(duplicates.len(), 2);
    assert_eq!(store.get("2").unwrap().name, "Darth Vader");
}

#[test]
fn seed_roster_matches_the_shipped_sample_data() {
    let store = CharacterStore::with_seed_roster();

    assert_eq!(
        store.list(),
        &[
            Character {
                id: "1".to_string(),
                name: "Luke Skywalker".to_string(),
                age: Some(23),
            },
            Character {
                id: "2".to_string(),
                name: "Darth Vader".to_string(),
                age: Some(45),
            },
        ]
    );
}
