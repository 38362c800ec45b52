use crate::domain::model::Locale;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetAgeError {
    #[error("Birthdate is missing")]
    MissingBirthdate,

    #[error("Birthdate {birthdate} is in the future")]
    FutureBirthdate { birthdate: String },

    #[error("Birthdate '{value}' is not a valid YYYY-MM-DD date")]
    InvalidBirthdate { value: String },

    #[error("Unknown species '{value}'")]
    InvalidSpecies { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 使用者可自行修正的輸入錯誤
    Low,
    High,
    Critical,
}

impl PetAgeError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PetAgeError::MissingBirthdate
            | PetAgeError::FutureBirthdate { .. }
            | PetAgeError::InvalidBirthdate { .. } => ErrorSeverity::Low,
            PetAgeError::InvalidSpecies { .. }
            | PetAgeError::ConfigError { .. }
            | PetAgeError::InvalidConfigValueError { .. }
            | PetAgeError::TomlError(_) => ErrorSeverity::High,
            PetAgeError::IoError(_) | PetAgeError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Birthdate validation failures are reported to the user and leave
    /// all state untouched.
    pub fn is_validation(&self) -> bool {
        self.severity() == ErrorSeverity::Low
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PetAgeError::MissingBirthdate => "Enter a birthdate, e.g. `pet-age date 2020-05-01`",
            PetAgeError::FutureBirthdate { .. } => "Pick a birthdate on or before today",
            PetAgeError::InvalidBirthdate { .. } => "Use the YYYY-MM-DD format",
            PetAgeError::InvalidSpecies { .. } => "Use either `dog` or `cat`",
            PetAgeError::ConfigError { .. }
            | PetAgeError::InvalidConfigValueError { .. }
            | PetAgeError::TomlError(_) => "Check the configuration file and command-line flags",
            PetAgeError::IoError(_) => "Check that the preference file is readable and writable",
            PetAgeError::SerializationError(_) => {
                "The preference file is corrupted; remove it to start over"
            }
        }
    }

    /// 給使用者看的訊息（validation 錯誤依語系輸出）
    pub fn user_friendly_message(&self, locale: Locale) -> String {
        match (self, locale) {
            (PetAgeError::MissingBirthdate, Locale::ZhTw) => "請輸入出生日期！".to_string(),
            (PetAgeError::MissingBirthdate, Locale::En) => "Please enter a birthdate!".to_string(),
            (PetAgeError::FutureBirthdate { .. }, Locale::ZhTw) => {
                "出生日期不能在未來！".to_string()
            }
            (PetAgeError::FutureBirthdate { .. }, Locale::En) => {
                "The birthdate cannot be in the future!".to_string()
            }
            (PetAgeError::InvalidBirthdate { value }, Locale::ZhTw) => {
                format!("出生日期格式錯誤：{}", value)
            }
            (PetAgeError::InvalidBirthdate { value }, Locale::En) => {
                format!("Invalid birthdate: {}", value)
            }
            (other, _) => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PetAgeError>;
