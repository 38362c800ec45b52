pub mod binder;
pub mod calculator;
pub mod preferences;

pub use crate::domain::model::{AgeResult, ChronologicalAge, DatePolicy, Locale, Species};
pub use crate::domain::ports::{Clock, KeyValueStore, Notifier, View};
pub use crate::utils::error::Result;
