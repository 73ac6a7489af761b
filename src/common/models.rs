use super::{ConfigSnafu, Result};

pub const DEFAULT_COUNTRY_CODE: &str = "US";

/// ISO 3166-1 alpha-2 code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn parse(value: &str) -> Result<Self> {
        let code = value.trim();
        if code.is_empty() {
            return ConfigSnafu {
                prefix: "country",
                message: "country code is empty",
            }
            .fail();
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Key used for region lookups.
    pub fn lookup_key(&self) -> String {
        self.0.to_ascii_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CountryCode {
    fn default() -> Self {
        Self(DEFAULT_COUNTRY_CODE.to_string())
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait Locator {
    fn country_code(&self) -> super::Result<CountryCode>;
}

pub trait ServiceManager {
    fn restart(&self) -> super::Result<()>;
}

/// Locator that always answers with the same code.
pub struct FixedLocator(pub CountryCode);

impl Locator for FixedLocator {
    fn country_code(&self) -> Result<CountryCode> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_code_normalization() {
        let code = CountryCode::parse(" sg ").unwrap();
        assert_eq!(code.as_str(), "SG");
        assert_eq!(code.lookup_key(), "sg");
        assert_eq!(code.to_string(), "SG");
    }

    #[test]
    fn test_country_code_rejects_empty() {
        assert!(CountryCode::parse("   ").is_err());
    }

    #[test]
    fn test_country_code_default_is_us() {
        assert_eq!(CountryCode::default().as_str(), "US");
    }
}
