#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::{DatePolicy, Locale};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_STORE_PATH: &str = "./pet-age.json";

/// Effective settings after merging defaults, the TOML file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub store_path: String,
    pub date_policy: DatePolicy,
    pub locale: Locale,
    pub verbose: bool,
    pub log_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: DEFAULT_STORE_PATH.to_string(),
            date_policy: DatePolicy::default(),
            locale: Locale::default(),
            verbose: false,
            log_json: false,
        }
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("store_path", &self.store_path)
    }
}
