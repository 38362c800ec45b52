use crate::domain::model::{DatePolicy, Species};
use crate::domain::ports::KeyValueStore;

pub const SPECIES_KEY: &str = "petSpecies";
pub const DOG_BIRTHDATE_KEY: &str = "dogBirthdate";
pub const CAT_BIRTHDATE_KEY: &str = "catBirthdate";
pub const SHARED_BIRTHDATE_KEY: &str = "petBirthdate";

/// Last species and birthdate(s) chosen by the user, on top of a
/// key-value store.
pub struct PreferenceStore<S: KeyValueStore> {
    store: S,
    policy: DatePolicy,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S, policy: DatePolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> DatePolicy {
        self.policy
    }

    pub fn birthdate_key(&self, species: Species) -> &'static str {
        match (self.policy, species) {
            (DatePolicy::Shared, _) => SHARED_BIRTHDATE_KEY,
            (DatePolicy::PerSpecies, Species::Dog) => DOG_BIRTHDATE_KEY,
            (DatePolicy::PerSpecies, Species::Cat) => CAT_BIRTHDATE_KEY,
        }
    }

    /// Persisted species, `Dog` when absent or unrecognised.
    pub fn selected_species(&self) -> Species {
        match self.store.get(SPECIES_KEY) {
            Some(tag) => tag.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring unknown stored species '{}'", tag);
                Species::default()
            }),
            None => Species::default(),
        }
    }

    pub fn save_species(&mut self, species: Species) {
        self.store.set(SPECIES_KEY, species.as_str());
    }

    /// Stored birthdate for `species`, empty when never set.
    pub fn load_date(&self, species: Species) -> String {
        let key = self.birthdate_key(species);
        let value = self.store.get(key).unwrap_or_default();
        tracing::debug!("Loaded birthdate key: {}, value: {:?}", key, value);
        value
    }

    pub fn save_date(&mut self, species: Species, date: &str) {
        let key = self.birthdate_key(species);
        self.store.set(key, date);
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
