use serde::{Deserialize, Serialize};

/// A single character record.
///
/// `age` is optional and omitted from the wire shape entirely when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i64>,
}

/// Ordered in-memory collection of characters.
///
/// The store is the single owner of the roster. Lookup and mutation return
/// cloned snapshots, so a caller never observes later mutation through a
/// value it already holds.
///
/// Identifiers are the string form of the roster size plus one at the moment
/// of insertion. Because the size shrinks on delete, a create that follows a
/// delete can be assigned an id still held by a surviving record; when that
/// happens, id lookups resolve to the first match in insertion order.
#[derive(Debug, Default)]
pub struct CharacterStore {
    characters: Vec<Character>,
}

impl CharacterStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
        }
    }

    /// Store preloaded with the built-in sample roster.
    pub fn with_seed_roster() -> Self {
        let mut store = Self::new();
        store.create("Luke Skywalker", Some(23));
        store.create("Darth Vader", Some(45));
        store
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Character] {
        &self.characters
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Look up a record by id. Misses are an ordinary outcome, not an error.
    pub fn get(&self, id: &str) -> Option<Character> {
        self.characters.iter().find(|c| c.id == id).cloned()
    }

    /// Append a new record and return it.
    ///
    /// No name validation is performed; an empty name is stored as-is.
    pub fn create(&mut self, name: impl Into<String>, age: Option<i64>) -> Character {
        let character = Character {
            id: (self.characters.len() + 1).to_string(),
            name: name.into(),
            age,
        };
        self.characters.push(character.clone());
        character
    }

    /// Apply a partial update to the record with the given id, returning the
    /// full post-update record, or `None` if no record matches.
    ///
    /// A supplied field replaces the stored one only when it is truthy: a
    /// non-empty `name`, a non-zero `age`. A falsy supplied value is
    /// indistinguishable from an omitted field and leaves the record
    /// untouched.
    pub fn update(
        &mut self,
        id: &str,
        name: Option<String>,
        age: Option<i64>,
    ) -> Option<Character> {
        let character = self.characters.iter_mut().find(|c| c.id == id)?;

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            character.name = name;
        }
        if let Some(age) = age.filter(|a| *a != 0) {
            character.age = Some(age);
        }

        Some(character.clone())
    }

    /// Remove the record with the given id and return it, or `None` if no
    /// record matches. The order of the remaining records is preserved.
    pub fn delete(&mut self, id: &str) -> Option<Character> {
        let index = self.characters.iter().position(|c| c.id == id)?;
        Some(self.characters.remove(index))
    }
}
