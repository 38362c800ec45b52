use crate::domain::model::Species;
use chrono::{DateTime, Utc};

/// Durable string key-value surface. Storage is assumed available; an
/// implementation that fails to read reports the key as absent.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Presentation surface the binder reads from and writes to.
pub trait View {
    fn birthdate_input(&self) -> String;
    fn set_birthdate_input(&mut self, value: &str);

    fn selected_species(&self) -> Species;
    fn select_species(&mut self, species: Species);

    /// Show the citation block for `species` and hide the other one.
    fn show_reference(&mut self, species: Species);

    fn results_visible(&self) -> bool;
    fn set_results_visible(&mut self, visible: bool);

    fn set_chronological_age(&mut self, text: &str);
    fn set_human_age(&mut self, text: &str);
}

/// Blocking user-facing failure channel.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
