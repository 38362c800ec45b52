use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::domain::model::{DatePolicy, Locale, Species};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "pet-age")]
#[command(about = "Convert a dog's or cat's age into human years")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Preference file (JSON)
    #[arg(long, global = true)]
    pub store: Option<String>,

    /// Birthdate storage policy: per_species or shared
    #[arg(long, global = true)]
    pub policy: Option<DatePolicy>,

    /// Display language: zh-TW or en
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the remembered species and birthdate
    Show,
    /// Switch species
    Species { species: Species },
    /// Set the birthdate for the selected species
    Date { birthdate: String },
    /// Calculate the human-equivalent age
    Calculate {
        #[arg(long)]
        species: Option<Species>,
        #[arg(long)]
        date: Option<String>,
    },
}

impl CliConfig {
    /// Defaults, then the TOML file, then command-line flags.
    pub fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            file_config.apply_to(&mut settings)?;
        }

        if let Some(store) = &self.store {
            settings.store_path = store.clone();
        }
        if let Some(policy) = self.policy {
            settings.date_policy = policy;
        }
        if let Some(locale) = self.locale {
            settings.locale = locale;
        }
        settings.verbose |= self.verbose;
        settings.log_json |= self.log_json;

        settings.validate()?;
        Ok(settings)
    }
}
