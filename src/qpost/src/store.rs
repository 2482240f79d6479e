//! Sectioned key/value store backing service profiles.

use std::path::Path;

use ini::Ini;

use crate::error::ConfigError;

/// INI-backed profile store. Quote and escape processing are disabled so
/// configured values reach the resolver verbatim; only a wholly absent key
/// reads as `None`.
pub struct ConfigStore {
    ini: Ini,
}

impl ConfigStore {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let ini =
            Ini::load_from_file_opt(path, parse_option()).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { ini })
    }

    pub fn from_str(text: &str) -> Result<Self, ini::ParseError> {
        let ini = Ini::load_from_str_opt(text, parse_option())?;
        Ok(Self { ini })
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.ini.section(Some(section)).is_some()
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.ini.get_from(Some(section), key)
    }
}

fn parse_option() -> ini::ParseOption {
    ini::ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ini::ParseOption::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_verbatim() {
        let store =
            ConfigStore::from_str("[svc]\nbody = 'quoted'\nnested = {'a': \"b\"}\n").unwrap();
        assert_eq!(store.get("svc", "body"), Some("'quoted'"));
        assert_eq!(store.get("svc", "nested"), Some("{'a': \"b\"}"));
        assert_eq!(store.get("svc", "missing"), None);
        assert!(store.has_section("svc"));
        assert!(!store.has_section("other"));
    }
}
