//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Supported interface languages
///
/// Unknown language codes resolve to English instead of failing, so a stale
/// client sending e.g. `"de"` still gets a usable answer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Language {
    #[default]
    En,
    Uz,
    Ru,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Uz => "uz",
            Language::Ru => "ru",
        }
    }

    /// Resolve a language code, case-insensitively
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "uz" => Language::Uz,
            "ru" => Language::Ru,
            _ => Language::En,
        }
    }
}

impl From<String> for Language {
    fn from(code: String) -> Self {
        Language::from_code(&code)
    }
}

impl From<&str> for Language {
    fn from(code: &str) -> Self {
        Language::from_code(code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("uz"), Language::Uz);
        assert_eq!(Language::from_code("RU"), Language::Ru);
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("de"), Language::En);
        assert_eq!(Language::from_code(""), Language::En);
    }

    #[test]
    fn test_language_serde() {
        let lang: Language = serde_json::from_str("\"ru\"").unwrap();
        assert_eq!(lang, Language::Ru);

        let unknown: Language = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(unknown, Language::En);

        assert_eq!(serde_json::to_string(&Language::Uz).unwrap(), "\"uz\"");
    }
}
