pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::{
    clock::{FixedClock, SystemClock},
    file_store::FileStore,
    memory::MemoryStore,
    terminal::{StderrNotifier, TerminalView},
};
pub use config::Settings;
pub use core::{
    binder::{UiContext, ViewBinder},
    preferences::PreferenceStore,
};
pub use domain::model::{AgeResult, ChronologicalAge, DatePolicy, Locale, Species};
pub use utils::error::{PetAgeError, Result};
