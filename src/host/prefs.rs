use std::collections::HashMap;

use crate::error::{Error, Result};

/// Value type of a host preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceKind {
    String,
}

/// Registration record for a host-managed preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceDef {
    pub name: String,
    pub description: String,
    pub default: String,
    /// Access level required to edit the preference.
    pub level: u8,
    pub kind: PreferenceKind,
    pub category: String,
}

/// The host's named preference storage.
pub trait PreferenceStore {
    fn exists(&self, name: &str) -> bool;

    fn insert(&mut self, def: PreferenceDef) -> Result<()>;

    fn delete(&mut self, name: &str) -> Result<()>;

    /// Current value, or the registered default when none was set.
    fn get(&self, name: &str) -> Option<String>;
}

/// In-process [`PreferenceStore`], used by the CLI and tests.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    defs: HashMap<String, PreferenceDef>,
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of a registered preference.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if !self.defs.contains_key(name) {
            return Err(Error::Preference(format!("unknown preference '{name}'")));
        }
        self.values.insert(name.to_string(), value.into());
        Ok(())
    }

    pub fn definition(&self, name: &str) -> Option<&PreferenceDef> {
        self.defs.get(name)
    }
}

impl PreferenceStore for MemoryPreferences {
    fn exists(&self, name: &str) -> bool {
        self.defs.contains_key(name)
    }

    fn insert(&mut self, def: PreferenceDef) -> Result<()> {
        if self.defs.contains_key(&def.name) {
            return Err(Error::Preference(format!(
                "preference '{}' already exists",
                def.name
            )));
        }
        self.defs.insert(def.name.clone(), def);
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        self.values.remove(name);
        self.defs
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::Preference(format!("unknown preference '{name}'")))
    }

    fn get(&self, name: &str) -> Option<String> {
        let def = self.defs.get(name)?;
        Some(
            self.values
                .get(name)
                .cloned()
                .unwrap_or_else(|| def.default.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: &str) -> PreferenceDef {
        PreferenceDef {
            name: name.to_string(),
            description: "test".to_string(),
            default: "fallback".to_string(),
            level: 75,
            kind: PreferenceKind::String,
            category: "plugins".to_string(),
        }
    }

    #[test]
    fn insert_get_set() {
        let mut prefs = MemoryPreferences::new();
        prefs.insert(def("key")).unwrap();
        assert!(prefs.exists("key"));
        assert_eq!(prefs.get("key").as_deref(), Some("fallback"));

        prefs.set("key", "value").unwrap();
        assert_eq!(prefs.get("key").as_deref(), Some("value"));
    }

    #[test]
    fn duplicate_insert_fails() {
        let mut prefs = MemoryPreferences::new();
        prefs.insert(def("key")).unwrap();
        assert!(matches!(prefs.insert(def("key")), Err(Error::Preference(_))));
    }

    #[test]
    fn set_requires_registration() {
        let mut prefs = MemoryPreferences::new();
        assert!(prefs.set("missing", "v").is_err());
        assert_eq!(prefs.get("missing"), None);
    }

    #[test]
    fn delete_removes_value() {
        let mut prefs = MemoryPreferences::new();
        prefs.insert(def("key")).unwrap();
        prefs.set("key", "v").unwrap();
        prefs.delete("key").unwrap();
        assert!(!prefs.exists("key"));
        assert_eq!(prefs.get("key"), None);
        assert!(prefs.delete("key").is_err());
    }
}
