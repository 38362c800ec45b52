use crate::config::Settings;
use crate::utils::error::{PetAgeError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: Option<StorageConfig>,
    pub preferences: Option<PreferencesConfig>,
    pub display: Option<DisplayConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// "per_species" 或 "shared"
    pub date_policy: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${HOME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PetAgeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 覆蓋到既有設定上（檔案中沒寫的欄位保持原值）
    pub fn apply_to(&self, settings: &mut Settings) -> Result<()> {
        if let Some(storage) = &self.storage {
            settings.store_path = storage.path.clone();
        }
        if let Some(policy) = self.preferences.as_ref().and_then(|p| p.date_policy.as_deref()) {
            settings.date_policy = policy.parse()?;
        }
        if let Some(locale) = self.display.as_ref().and_then(|d| d.locale.as_deref()) {
            settings.locale = locale.parse()?;
        }
        if let Some(logging) = &self.logging {
            settings.verbose = logging.verbose.unwrap_or(settings.verbose);
            settings.log_json = logging.json.unwrap_or(settings.log_json);
        }
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(storage) = &self.storage {
            validation::validate_path("storage.path", &storage.path)?;
        }
        if let Some(policy) = self.preferences.as_ref().and_then(|p| p.date_policy.as_deref()) {
            validation::validate_one_of(
                "preferences.date_policy",
                policy,
                &["per_species", "per-species", "shared"],
            )?;
        }
        if let Some(locale) = self.display.as_ref().and_then(|d| d.locale.as_deref()) {
            validation::validate_non_empty_string("display.locale", locale)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DatePolicy, Locale};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[storage]
path = "./data/prefs.json"

[preferences]
date_policy = "shared"

[display]
locale = "en"

[logging]
verbose = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());

        let mut settings = Settings::default();
        config.apply_to(&mut settings).unwrap();

        assert_eq!(settings.store_path, "./data/prefs.json");
        assert_eq!(settings.date_policy, DatePolicy::Shared);
        assert_eq!(settings.locale, Locale::En);
        assert!(settings.verbose);
        assert!(!settings.log_json);
    }

    #[test]
    fn test_empty_config_keeps_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        let mut settings = Settings::default();
        config.apply_to(&mut settings).unwrap();

        assert_eq!(settings.date_policy, DatePolicy::PerSpecies);
        assert_eq!(settings.locale, Locale::ZhTw);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PET_AGE_TEST_DIR", "/tmp/pet-age-test");

        let toml_content = r#"
[storage]
path = "${PET_AGE_TEST_DIR}/prefs.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.storage.unwrap().path,
            "/tmp/pet-age-test/prefs.json"
        );

        std::env::remove_var("PET_AGE_TEST_DIR");
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let config = TomlConfig::from_toml_str("[preferences]\ndate_policy = \"both\"\n").unwrap();
        assert!(config.validate().is_err());
        assert!(config.apply_to(&mut Settings::default()).is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\nlocale = \"zh-TW\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.display.unwrap().locale.as_deref(), Some("zh-TW"));
    }
}
