use crate::utils::error::PetAgeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    #[default]
    Dog,
    Cat,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = PetAgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dog" => Ok(Species::Dog),
            "cat" => Ok(Species::Cat),
            other => Err(PetAgeError::InvalidSpecies {
                value: other.to_string(),
            }),
        }
    }
}

/// How birthdates are remembered across species switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatePolicy {
    /// One stored birthdate per species; switching species swaps the date
    /// in the input and hides the result.
    #[default]
    PerSpecies,
    /// One birthdate shared by both species; switching species recalculates
    /// a visible result in place.
    Shared,
}

impl FromStr for DatePolicy {
    type Err = PetAgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "per_species" | "per-species" => Ok(DatePolicy::PerSpecies),
            "shared" => Ok(DatePolicy::Shared),
            other => Err(PetAgeError::InvalidConfigValueError {
                field: "date_policy".to_string(),
                value: other.to_string(),
                reason: "Allowed values: per_species, shared".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "en")]
    En,
}

impl FromStr for Locale {
    type Err = PetAgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "zh-TW" | "zh-tw" | "zh" => Ok(Locale::ZhTw),
            "en" => Ok(Locale::En),
            other => Err(PetAgeError::InvalidConfigValueError {
                field: "locale".to_string(),
                value: other.to_string(),
                reason: "Allowed values: zh-TW, en".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChronologicalAge {
    pub years: i32,
    /// Zero-based, 0..=11.
    pub months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeResult {
    pub chronological: ChronologicalAge,
    pub exact_years: f64,
    pub human_age_years: i64,
}

impl ChronologicalAge {
    pub fn display(&self, locale: Locale) -> String {
        match locale {
            Locale::ZhTw => format!("{} 歲 {} 個月", self.years, self.months),
            Locale::En => format!("{} years {} months", self.years, self.months),
        }
    }
}

pub fn human_age_display(years: i64, locale: Locale) -> String {
    match locale {
        Locale::ZhTw => format!("{} 歲", years),
        Locale::En => format!("{} years", years),
    }
}

/// Citation block shown next to the result for the selected species.
pub fn reference_text(species: Species, locale: Locale) -> &'static str {
    match (species, locale) {
        (Species::Dog, Locale::ZhTw) => {
            "參考資料：Wang T. et al. (2020) Quantitative Translation of Dog-to-Human Aging by Conserved Remodeling of the DNA Methylome. Cell Systems 11(2):176-185."
        }
        (Species::Dog, Locale::En) => {
            "Reference: Wang T. et al. (2020) Quantitative Translation of Dog-to-Human Aging by Conserved Remodeling of the DNA Methylome. Cell Systems 11(2):176-185."
        }
        (Species::Cat, Locale::ZhTw) => {
            "參考資料：Quimby J. et al. (2021) 2021 AAHA/AAFP Feline Life Stage Guidelines. JFMS 23(3):211-233."
        }
        (Species::Cat, Locale::En) => {
            "Reference: Quimby J. et al. (2021) 2021 AAHA/AAFP Feline Life Stage Guidelines. JFMS 23(3):211-233."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_parse_and_display() {
        assert_eq!("dog".parse::<Species>().unwrap(), Species::Dog);
        assert_eq!(" cat ".parse::<Species>().unwrap(), Species::Cat);
        assert!("hamster".parse::<Species>().is_err());
        assert_eq!(Species::Cat.to_string(), "cat");
        assert_eq!(Species::default(), Species::Dog);
    }

    #[test]
    fn test_date_policy_parse() {
        assert_eq!("per_species".parse::<DatePolicy>().unwrap(), DatePolicy::PerSpecies);
        assert_eq!("shared".parse::<DatePolicy>().unwrap(), DatePolicy::Shared);
        assert!("both".parse::<DatePolicy>().is_err());
    }

    #[test]
    fn test_age_display() {
        let age = ChronologicalAge { years: 3, months: 2 };
        assert_eq!(age.display(Locale::ZhTw), "3 歲 2 個月");
        assert_eq!(age.display(Locale::En), "3 years 2 months");
        assert_eq!(human_age_display(49, Locale::ZhTw), "49 歲");
    }
}
